//! Operational mode commands
//!
//! This module contains the commands that place the radio in a safe
//! configuration baseline and set up its output stage:
//! - Standby modes (RC and XOSC)
//! - Power amplifier configuration
//!
//! Most configuration commands must be issued in STDBY_RC mode.

use core::convert::Infallible;

use regiface::{Command, NoParameters, ToByteArray};

use super::Opcode;

/// Standby mode configuration
///
/// Selects which oscillator to use in standby mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StandbyConfig {
    /// Device running on RC13M (~0.6mA)
    /// Used for configuration and lower power
    Rc = 0x00,

    /// Device running on XTAL 32MHz (~0.8mA)
    /// Required for faster transition to TX/RX
    Xosc = 0x01,
}

impl ToByteArray for StandbyConfig {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self as u8])
    }
}

/// SetStandby command (0x80)
///
/// Puts the radio into standby mode.
///
/// # Important Notes
/// - Default mode after power-up/reset is STDBY_RC
/// - Most configuration must be done in STDBY_RC
/// - STDBY_XOSC provides faster transition to TX/RX
#[derive(Debug, Clone)]
pub struct SetStandby {
    /// Standby mode configuration
    pub config: StandbyConfig,
}

impl Command for SetStandby {
    type IdType = u8;
    type CommandParameters = StandbyConfig;
    type ResponseParameters = NoParameters;

    fn id() -> Self::IdType {
        Opcode::SetStandby as u8
    }

    fn invoking_parameters(self) -> Self::CommandParameters {
        self.config
    }
}

/// Device selection for PA configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceSelect {
    /// SX1262 high-power PA (+22dBm max)
    Sx1262 = 0x00,
    /// SX1261 low-power PA (+15dBm max)
    Sx1261 = 0x01,
}

/// PA configuration parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PaConfig {
    /// PA duty cycle (controls efficiency)
    pub duty_cycle: u8,

    /// HP max, SX1262 only. Range 0x00-0x07
    pub hp_max: u8,

    /// Device selection
    pub device_sel: DeviceSelect,

    /// PA LUT (always 0x01)
    pub pa_lut: u8,
}

impl ToByteArray for PaConfig {
    type Error = Infallible;
    type Array = [u8; 4];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([
            self.duty_cycle,
            self.hp_max,
            self.device_sel as u8,
            self.pa_lut,
        ])
    }
}

/// SetPaConfig command (0x95)
///
/// Configures the power amplifier.
///
/// # Important Notes
/// - Must be configured before SetTxParams
/// - Duty cycle and hp_max together bound the achievable output power
/// - Calibrated tuples per chip and profile live in [`crate::pa`]
#[derive(Debug, Clone)]
pub struct SetPaConfig {
    /// PA configuration
    pub config: PaConfig,
}

impl Command for SetPaConfig {
    type IdType = u8;
    type CommandParameters = PaConfig;
    type ResponseParameters = NoParameters;

    fn id() -> Self::IdType {
        Opcode::SetPaConfig as u8
    }

    fn invoking_parameters(self) -> Self::CommandParameters {
        self.config
    }
}
