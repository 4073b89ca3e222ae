mod common;

use common::MockBus;
use log::Level;
use sx126x::commands::{DioIrqConfig, IrqMask};
use sx126x::{ChipVariant, Error, PaProfile, Radio, RadioConfig, State};

fn irq_config() -> DioIrqConfig {
    DioIrqConfig {
        irq_mask: IrqMask::TX_DONE | IrqMask::RX_DONE | IrqMask::TIMEOUT,
        dio1_mask: IrqMask::TX_DONE | IrqMask::RX_DONE | IrqMask::TIMEOUT,
        dio2_mask: IrqMask::empty(),
        dio3_mask: IrqMask::empty(),
    }
}

fn assert_zeroed(radio: &Radio<'_, MockBus>) {
    assert!(!radio.is_initialized());
    assert_eq!(radio.state(), State::Deinit);
    assert_eq!(radio.chip(), ChipVariant::Unknown);
    assert_eq!(radio.pa_profile(), PaProfile::LowPower);
}

#[test]
fn new_handle_is_zeroed() {
    let radio: Radio<'_, MockBus> = Radio::new();
    assert_zeroed(&radio);
}

#[test]
fn operations_require_init() {
    let bus = MockBus::new();
    let mut radio: Radio<'_, MockBus> = Radio::new();
    let mut buf = [0u8; 1];

    assert_eq!(radio.transmit(b"hi"), Err(Error::NotInitialized));
    assert_eq!(
        radio.set_dio_irq_params(irq_config()),
        Err(Error::NotInitialized)
    );
    assert_eq!(
        radio.read_register(0x0740, &mut buf),
        Err(Error::NotInitialized)
    );
    assert_eq!(bus.attempts(), 0);
}

#[test]
fn operations_after_failed_init_require_init() {
    let bus = MockBus::failing_at(0, Error::Hal);
    let mut radio = Radio::new();
    radio.init(&bus, &RadioConfig::default()).unwrap_err();

    assert_eq!(radio.transmit(b"hi"), Err(Error::NotInitialized));
    assert_eq!(
        radio.set_dio_irq_params(irq_config()),
        Err(Error::NotInitialized)
    );
    assert_eq!(bus.attempts(), 1);
}

#[test]
fn deinit_sends_standby_and_zeroes() {
    let bus = MockBus::new();
    let mut radio = Radio::new();
    radio.init(&bus, &RadioConfig::default()).unwrap();

    assert_eq!(radio.deinit(), Ok(()));

    let frames = bus.frames();
    assert_eq!(frames.len(), 7);
    assert_eq!(frames[6], vec![0x80, 0x00]);
    assert_zeroed(&radio);
    assert_eq!(radio.transmit(b"hi"), Err(Error::NotInitialized));
}

#[test]
fn deinit_is_idempotent() {
    let bus = MockBus::new();
    let mut radio = Radio::new();
    radio.init(&bus, &RadioConfig::default()).unwrap();

    assert_eq!(radio.deinit(), Ok(()));
    assert_eq!(radio.deinit(), Ok(()));

    assert_eq!(bus.attempts(), 7);
    assert_zeroed(&radio);
}

#[test]
fn deinit_on_never_initialized_handle_is_a_no_op() {
    let mut radio: Radio<'_, MockBus> = Radio::new();
    assert_eq!(radio.deinit(), Ok(()));
    assert_eq!(radio.deinit(), Ok(()));
    assert_zeroed(&radio);
}

#[test]
fn deinit_after_failed_init_sends_nothing() {
    let bus = MockBus::failing_at(2, Error::Hal);
    let mut radio = Radio::new();
    radio.init(&bus, &RadioConfig::default()).unwrap_err();

    assert_eq!(radio.deinit(), Ok(()));
    assert_eq!(bus.attempts(), 3);
    assert_zeroed(&radio);
}

#[test]
fn deinit_survives_standby_failure() {
    let bus = MockBus::new();
    let mut radio = Radio::new();
    radio.init(&bus, &RadioConfig::default()).unwrap();
    bus.fail_next(Error::Hal);

    assert_eq!(radio.deinit(), Ok(()));
    assert!(bus.logged(Level::Warn, "Failed to set standby during deinit"));
    assert_zeroed(&radio);
}

#[test]
fn handle_can_be_reinitialized_after_deinit() {
    let bus = MockBus::new();
    let mut radio = Radio::new();
    radio.init(&bus, &RadioConfig::default()).unwrap();
    radio.deinit().unwrap();

    let config = RadioConfig {
        pa_profile: PaProfile::HighPower,
        ..RadioConfig::default()
    };
    assert_eq!(radio.init(&bus, &config), Ok(()));
    assert_eq!(radio.state(), State::Standby);
    assert_eq!(radio.pa_profile(), PaProfile::HighPower);
    assert_eq!(bus.attempts(), 13);
}

#[test]
fn transmit_reasserts_standby() {
    let bus = MockBus::new();
    let mut radio = Radio::new();
    radio.init(&bus, &RadioConfig::default()).unwrap();

    assert_eq!(radio.transmit(b"hello"), Ok(()));

    assert_eq!(bus.frames().last(), Some(&vec![0x80, 0x00]));
    assert_eq!(bus.attempts(), 7);
    assert_eq!(radio.state(), State::Standby);
    assert!(bus.logged(Level::Info, "5 bytes"));
}

#[test]
fn transmit_standby_failure_is_unknown_error() {
    let bus = MockBus::new();
    let mut radio = Radio::new();
    radio.init(&bus, &RadioConfig::default()).unwrap();
    bus.fail_next(Error::Hal);

    assert_eq!(radio.transmit(b"hello"), Err(Error::Unknown));
    assert!(radio.is_initialized());
    assert_eq!(radio.state(), State::Standby);
}

#[test]
fn dio_irq_params_frame() {
    let bus = MockBus::new();
    let mut radio = Radio::new();
    radio.init(&bus, &RadioConfig::default()).unwrap();

    assert_eq!(radio.set_dio_irq_params(irq_config()), Ok(()));

    assert_eq!(
        bus.frames().last(),
        Some(&vec![0x08, 0x02, 0x03, 0x02, 0x03, 0x00, 0x00, 0x00, 0x00])
    );
}

#[test]
fn dio_irq_params_propagates_bus_error() {
    let bus = MockBus::new();
    let mut radio = Radio::new();
    radio.init(&bus, &RadioConfig::default()).unwrap();
    bus.fail_next(Error::Timeout);

    assert_eq!(
        radio.set_dio_irq_params(irq_config()),
        Err(Error::Timeout)
    );
}

#[test]
fn read_register_sends_address_and_fills_buffer() {
    let bus = MockBus::with_response(&[0x34, 0x44]);
    let mut radio = Radio::new();
    radio.init(&bus, &RadioConfig::default()).unwrap();

    let mut sync_word = [0u8; 2];
    assert_eq!(radio.read_register(0x0740, &mut sync_word), Ok(()));

    assert_eq!(sync_word, [0x34, 0x44]);
    assert_eq!(bus.frames().last(), Some(&vec![0x1D, 0x07, 0x40, 0x00]));
}

#[test]
fn read_register_rejects_empty_buffer() {
    let bus = MockBus::new();
    let mut radio = Radio::new();
    radio.init(&bus, &RadioConfig::default()).unwrap();

    assert_eq!(
        radio.read_register(0x0740, &mut []),
        Err(Error::InvalidArgument)
    );
    assert_eq!(bus.attempts(), 6);
}
