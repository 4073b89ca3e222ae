//! SX126x radio handle
//!
//! [`Radio`] tracks the lifecycle of one transceiver and turns a
//! [`RadioConfig`] into the ordered command sequence that brings the chip up.
//! It borrows its [`Bus`] and never outlives it.
//!
//! # Lifecycle
//! ```text
//! Deinit --init--> Init --(all steps ok)--> Standby --transmit--> Standby
//!   ^                                          |
//!   +------------------ deinit ----------------+
//! ```
//! `deinit` is legal from any state, including on a handle that was never
//! initialized.
//!
//! # Init sequence
//! 1. SetStandby(RC)
//! 2. SetPacketType
//! 3. SetRfFrequency
//! 4. SetPaConfig
//! 5. SetTxParams
//! 6. SetModulationParams
//!
//! The first failing step aborts the sequence and its error is returned as
//! is. Steps already sent are not undone; the chip keeps whatever they
//! configured and the handle stays uninitialized.

use core::convert::Infallible;
use core::fmt;

use log::{Level, LevelFilter};
use regiface::{Command, ToByteArray};

use crate::bus::{self, Bus};
use crate::commands::{
    DioIrqConfig, Frame, Opcode, PacketType, RfFrequency, SetDioIrqParams,
    SetModulationParams, SetPaConfig, SetPacketType, SetRfFrequency, SetStandby, SetTxParams,
    StandbyConfig, TxParams,
};
use crate::pa::{self, PaFallback};
use crate::{ChipVariant, Error, Modem, PaProfile, RadioConfig};

/// Lifecycle state of a [`Radio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Init sequence in progress, or aborted part way
    Init,
    Standby,
    Tx,
    Rx,
    /// Zeroed handle
    #[default]
    Deinit,
}

/// Device handle for one SX126x transceiver.
///
/// Created zeroed by [`Radio::new`], populated by a successful
/// [`init`](Radio::init) and zeroed again by [`deinit`](Radio::deinit).
/// The handle does no locking of its own; one caller drives it at a time.
pub struct Radio<'a, B: ?Sized> {
    bus: Option<&'a B>,
    is_initialized: bool,
    state: State,
    chip: ChipVariant,
    pa_profile: PaProfile,
    log_level: LevelFilter,
}

impl<'a, B: ?Sized> Radio<'a, B> {
    /// Creates a zeroed, uninitialized handle logging at `Info` and above.
    pub const fn new() -> Self {
        Self::with_log_level(LevelFilter::Info)
    }

    /// Creates a zeroed handle with a custom log filter.
    pub const fn with_log_level(log_level: LevelFilter) -> Self {
        Self {
            bus: None,
            is_initialized: false,
            state: State::Deinit,
            chip: ChipVariant::Unknown,
            pa_profile: PaProfile::LowPower,
            log_level,
        }
    }

    /// Whether the last `init` ran to completion.
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Chip variant taken from the config at init.
    pub fn chip(&self) -> ChipVariant {
        self.chip
    }

    /// The PA profile requested at init, not the resolved register tuple.
    pub fn pa_profile(&self) -> PaProfile {
        self.pa_profile
    }
}

impl<'a, B: ?Sized> Default for Radio<'a, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, B> Radio<'a, B>
where
    B: Bus + ?Sized,
{
    /// Binds the handle to `bus` and runs the init sequence for `config`.
    ///
    /// # Errors
    /// * `Error::InvalidArgument` - handle already initialized, or the modem
    ///   is not LoRa
    /// * any error reported by the bus for the step that failed
    pub fn init(&mut self, bus: &'a B, config: &RadioConfig) -> Result<(), Error> {
        if self.is_initialized {
            return Err(Error::InvalidArgument);
        }

        *self = Self {
            bus: Some(bus),
            chip: config.chip,
            state: State::Init,
            ..Self::with_log_level(self.log_level)
        };
        self.log(Level::Info, format_args!("Initializing SX126x driver"));

        let modulation = match config.modem {
            Modem::LoRa(modulation) => modulation,
            Modem::Fsk => {
                self.log(
                    Level::Error,
                    format_args!("Only the LoRa modem is supported"),
                );
                return Err(Error::InvalidArgument);
            }
        };

        self.step("RC standby mode", |radio| {
            radio.send(SetStandby {
                config: StandbyConfig::Rc,
            })
        })?;
        self.step("packet type", |radio| {
            radio.send(SetPacketType {
                packet_type: PacketType::LoRa,
            })
        })?;
        self.step("RF frequency", |radio| {
            radio.send(SetRfFrequency {
                config: RfFrequency::from_hz(config.frequency_hz),
            })
        })?;
        self.step("PA config", |radio| radio.set_pa_profile(config.pa_profile))?;
        self.step("TX params", |radio| {
            radio.send(SetTxParams {
                params: TxParams {
                    power: config.power_dbm,
                    ramp_time: config.ramp_time,
                },
            })
        })?;
        self.step("LoRa modulation params", |radio| {
            radio.send(SetModulationParams { params: modulation })
        })?;

        self.is_initialized = true;
        self.log(
            Level::Info,
            format_args!(
                "SX126x init complete: chip={:?}, freq={} Hz, PA={:?}, pwr={} dBm, ramp={:?}, \
                 sf={:?}, bw={:?}, cr={:?}, ldro={}",
                self.chip,
                config.frequency_hz,
                config.pa_profile,
                config.power_dbm,
                config.ramp_time,
                modulation.spreading_factor,
                modulation.bandwidth,
                modulation.coding_rate,
                modulation.low_data_rate_optimize,
            ),
        );
        self.state = State::Standby;

        Ok(())
    }

    /// Puts the chip back in RC standby and zeroes the handle.
    ///
    /// Best effort: a failed standby write is logged and otherwise ignored.
    /// Calling this on a zeroed handle does nothing.
    pub fn deinit(&mut self) -> Result<(), Error> {
        if self.is_initialized {
            if let Err(err) = self.send(SetStandby {
                config: StandbyConfig::Rc,
            }) {
                self.log(
                    Level::Warn,
                    format_args!("Failed to set standby during deinit: {}", err),
                );
            }
        }

        *self = Self::with_log_level(self.log_level);
        Ok(())
    }

    /// Starts a transmission of `payload`.
    ///
    /// Only the standby precondition is sent for now; the payload is not yet
    /// put on air.
    ///
    /// # Errors
    /// * `Error::NotInitialized` - handle not initialized
    /// * `Error::Unknown` - the standby write failed
    pub fn transmit(&mut self, payload: &[u8]) -> Result<(), Error> {
        self.ensure_initialized()?;

        self.log(
            Level::Info,
            format_args!("Starting transmit sequence ({} bytes)", payload.len()),
        );

        if let Err(err) = self.send(SetStandby {
            config: StandbyConfig::Rc,
        }) {
            self.log(
                Level::Error,
                format_args!("Failed to set STDBY_RC mode: {}", err),
            );
            return Err(Error::Unknown);
        }

        // TODO: SetBufferBaseAddress, WriteBuffer, SetPacketParams, TxDone IRQ
        // mapping, SetTx and waiting on TxDone/Timeout.

        self.log(Level::Info, format_args!("Transmit sequence complete"));
        Ok(())
    }

    /// Routes interrupt sources to the DIO pins.
    ///
    /// Not part of the init sequence.
    pub fn set_dio_irq_params(&mut self, config: DioIrqConfig) -> Result<(), Error> {
        self.ensure_initialized()?;
        self.send(SetDioIrqParams { config })
    }

    /// Reads `buf.len()` bytes starting at register `address`.
    ///
    /// # Errors
    /// * `Error::NotInitialized` - handle not initialized
    /// * `Error::InvalidArgument` - `buf` is empty
    pub fn read_register(&mut self, address: u16, buf: &mut [u8]) -> Result<(), Error> {
        let transport = self.ensure_initialized()?;
        if buf.is_empty() {
            return Err(Error::InvalidArgument);
        }

        let [hi, lo] = address.to_be_bytes();
        let header = [Opcode::ReadRegister as u8, hi, lo, 0x00];
        self.log(Level::Trace, format_args!("tx {:02X?}", header));

        bus::transfer(transport, &header, Some(buf))
    }

    fn ensure_initialized(&self) -> Result<&'a B, Error> {
        match self.bus {
            Some(transport) if self.is_initialized => Ok(transport),
            _ => Err(Error::NotInitialized),
        }
    }

    fn step<F>(&mut self, what: &str, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Error>,
    {
        self.log(Level::Info, format_args!("Setting {}", what));
        let result = f(self);
        match result {
            Ok(()) => self.log(Level::Info, format_args!("{} set", what)),
            Err(err) => self.log(
                Level::Error,
                format_args!("Failed to set {}: {}", what, err),
            ),
        }
        result
    }

    fn set_pa_profile(&mut self, profile: PaProfile) -> Result<(), Error> {
        let resolved = pa::resolve(self.chip, profile);
        match resolved.fallback {
            Some(PaFallback::LowPowerOnly) => self.log(
                Level::Warn,
                format_args!(
                    "SX1261 only supports low power PA, overriding requested {:?}",
                    profile
                ),
            ),
            Some(PaFallback::UnknownChip) => self.log(
                Level::Warn,
                format_args!("Unknown SX126x chip, using default low power PA config"),
            ),
            None => {}
        }

        self.send(SetPaConfig {
            config: resolved.config,
        })?;
        self.pa_profile = profile;
        Ok(())
    }

    fn send<C>(&self, command: C) -> Result<(), Error>
    where
        C: Command<IdType = u8>,
        C::CommandParameters: ToByteArray<Error = Infallible>,
    {
        let transport = self.bus.ok_or(Error::NotInitialized)?;
        let frame = Frame::encode(command);
        self.log(Level::Trace, format_args!("tx {:02X?}", frame.as_bytes()));

        bus::transfer(transport, frame.as_bytes(), None)
    }

    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if level <= self.log_level {
            if let Some(transport) = self.bus {
                transport.log(level, args);
            }
        }
    }
}
