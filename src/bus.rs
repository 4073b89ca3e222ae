//! Control bus contract
//!
//! The radio never owns its transport. It borrows something implementing
//! [`Bus`] for as long as it is initialized and issues one blocking exchange
//! at a time through it. Whatever sits behind the trait (a bare SPI device, a
//! worker thread draining a DMA queue, a test double) is responsible for its
//! own mutual exclusion.
//!
//! [`SpiBus`] is the stock transport for any `embedded_hal` SPI device.
//!
//! # Example
//! ```no_run
//! use embedded_hal::spi::SpiDevice;
//! use sx126x::{Radio, RadioConfig, SpiBus, Error};
//!
//! fn bring_up<SPI: SpiDevice>(spi: SPI) -> Result<(), Error> {
//!     let bus = SpiBus::new(spi);
//!     let mut radio = Radio::new();
//!     radio.init(&bus, &RadioConfig::default())?;
//!     radio.deinit()
//! }
//! ```

use core::cell::RefCell;
use core::fmt;

use embedded_hal::spi::{Operation, SpiDevice};
use log::Level;

use crate::Error;

/// Blocking request/response exchange with the radio.
pub trait Bus {
    /// Sends `tx` and, when `rx` is given, fills it with the response.
    ///
    /// Half- or full-duplex framing is up to the transport. The call must not
    /// return until the exchange is complete.
    fn transfer(&self, tx: &[u8], rx: Option<&mut [u8]>) -> Result<(), Error>;

    /// Diagnostic sink. Always safe to call, never required to do anything.
    ///
    /// The default forwards to the `log` facade.
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        log::log!(target: "sx126x", level, "{}", args);
    }
}

/// Validates a frame and hands it to the transport.
///
/// A frame without transmit bytes never reaches the bus.
pub(crate) fn transfer<B: Bus + ?Sized>(
    bus: &B,
    tx: &[u8],
    rx: Option<&mut [u8]>,
) -> Result<(), Error> {
    if tx.is_empty() {
        return Err(Error::InvalidArgument);
    }
    bus.transfer(tx, rx)
}

/// [`Bus`] over an `embedded_hal` SPI device.
///
/// Each transfer is a single SPI transaction: a write of the command frame,
/// followed by a read of the response when a receive buffer is supplied.
/// Holding the device in a `RefCell` lets the radio share the bus by
/// reference; a nested transfer is refused with [`Error::Busy`].
pub struct SpiBus<SPI> {
    spi: RefCell<SPI>,
}

impl<SPI> SpiBus<SPI> {
    /// Wraps an SPI device.
    pub fn new(spi: SPI) -> Self {
        Self {
            spi: RefCell::new(spi),
        }
    }

    /// Releases the underlying SPI device.
    pub fn release(self) -> SPI {
        self.spi.into_inner()
    }
}

impl<SPI> Bus for SpiBus<SPI>
where
    SPI: SpiDevice,
{
    fn transfer(&self, tx: &[u8], rx: Option<&mut [u8]>) -> Result<(), Error> {
        let mut spi = self.spi.try_borrow_mut().map_err(|_| Error::Busy)?;

        let result = match rx {
            Some(rx) => spi.transaction(&mut [Operation::Write(tx), Operation::Read(rx)]),
            None => spi.transaction(&mut [Operation::Write(tx)]),
        };

        result.map_err(|_| Error::Hal)
    }
}
