//! Radio configuration
//!
//! [`RadioConfig`] is the declarative description the init sequence compiles
//! into command frames. The driver only reads it.

use crate::commands::{
    Bandwidth, CodingRate, LoRaModulationParams, RampTime, SpreadingFactor,
};

/// Default LoRa configuration
pub mod defaults {
    use super::*;

    /// EU ISM band frequency
    pub const FREQUENCY_HZ: u32 = 868_000_000;
    pub const POWER_DBM: i8 = 14;
    pub const RAMP_TIME: RampTime = RampTime::Micros200;
    pub const SPREADING_FACTOR: SpreadingFactor = SpreadingFactor::Sf7;
    pub const BANDWIDTH: Bandwidth = Bandwidth::Khz125;
    pub const CODING_RATE: CodingRate = CodingRate::Cr4_5;
}

/// Transceiver part number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipVariant {
    /// Low-power PA only (+15dBm max)
    Sx1261,
    /// High-power PA (+22dBm max)
    Sx1262,
    /// Unrecognized part, configured with the safest PA settings
    #[default]
    Unknown,
}

/// Requested power amplifier profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaProfile {
    /// ~14 dBm
    #[default]
    LowPower,
    /// ~17 dBm
    MediumPower,
    /// ~20 dBm
    HighPower,
}

/// Modem selection
///
/// Only LoRa is supported; an FSK configuration is rejected at init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Modem {
    /// LoRa with its modulation parameters
    LoRa(LoRaModulationParams),
    /// (G)FSK, not supported by the init sequence
    Fsk,
}

/// Complete radio configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadioConfig {
    /// Part fitted on the board, selects the PA tuple
    pub chip: ChipVariant,
    /// Carrier frequency in Hz
    pub frequency_hz: u32,
    /// Requested PA profile
    pub pa_profile: PaProfile,
    /// Modem and its modulation parameters
    pub modem: Modem,
    /// Output power in dBm, range depends on chip and PA profile
    pub power_dbm: i8,
    /// PA ramp time
    pub ramp_time: RampTime,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            chip: ChipVariant::Sx1262,
            frequency_hz: defaults::FREQUENCY_HZ,
            pa_profile: PaProfile::LowPower,
            modem: Modem::LoRa(LoRaModulationParams {
                spreading_factor: defaults::SPREADING_FACTOR,
                bandwidth: defaults::BANDWIDTH,
                coding_rate: defaults::CODING_RATE,
                low_data_rate_optimize: false,
            }),
            power_dbm: defaults::POWER_DBM,
            ramp_time: defaults::RAMP_TIME,
        }
    }
}
