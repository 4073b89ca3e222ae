#![cfg_attr(not(test), no_std)]
//! SX126x Radio Driver
//!
//! This crate drives the Semtech SX1261/2 sub-GHz LoRa transceivers at the
//! command level. It compiles a declarative [`RadioConfig`] into the ordered
//! command frames that bring the chip up and tracks the resulting device
//! lifecycle.
//!
//! # Architecture
//! - [`bus`]: the [`Bus`] transport contract and an `embedded_hal` SPI
//!   adapter ([`SpiBus`])
//! - [`commands`]: typed command definitions and their wire encoding
//! - [`pa`]: power amplifier profile resolution
//! - [`config`]: the radio configuration surface
//! - [`device`]: the [`Radio`] handle and its init pipeline
//!
//! # Usage
//! Configuration follows a fixed sequence, driven by [`Radio::init`]:
//!
//! 1. Enter STDBY_RC
//! 2. Select the LoRa packet type
//! 3. Set the RF frequency
//! 4. Configure the PA for the chip and requested profile
//! 5. Set TX power and ramp time
//! 6. Set LoRa modulation parameters
//!
//! # Important Notes
//! - Only the LoRa modem is supported
//! - PA configuration depends on device type (SX1261/2)
//! - A failed init is not rolled back on the chip
//!
//! # Example
//! ```no_run
//! use sx126x::{Bus, Error, Radio, RadioConfig, PaProfile};
//!
//! fn configure_radio<B: Bus>(bus: &B) -> Result<(), Error> {
//!     let config = RadioConfig {
//!         pa_profile: PaProfile::MediumPower,
//!         ..RadioConfig::default()
//!     };
//!
//!     let mut radio = Radio::new();
//!     radio.init(bus, &config)?;
//!     radio.transmit(b"hello")?;
//!     radio.deinit()
//! }
//! ```

pub mod bus;
pub mod commands;
pub mod config;
pub mod device;
mod error;
pub mod pa;

pub use bus::{Bus, SpiBus};
pub use config::{ChipVariant, Modem, PaProfile, RadioConfig};
pub use device::{Radio, State};
pub use error::Error;
