//! Power amplifier profile resolution
//!
//! Maps a chip variant and a requested [`PaProfile`] to the register tuple
//! for SetPaConfig. The tuples are calibration values for the SX1261/2 PA
//! and must not be tweaked independently of each other:
//!
//! | chip    | profile | duty | hp_max | device | lut  |
//! |---------|---------|------|--------|--------|------|
//! | SX1261  | any     | 0x04 | 0x00   | 0x01   | 0x01 |
//! | SX1262  | low     | 0x04 | 0x00   | 0x00   | 0x01 |
//! | SX1262  | medium  | 0x06 | 0x03   | 0x00   | 0x01 |
//! | SX1262  | high    | 0x07 | 0x05   | 0x00   | 0x01 |
//! | unknown | any     | 0x04 | 0x00   | 0x00   | 0x01 |
//!
//! Resolution never fails. When the request can't be honoured the safe
//! low-power tuple is used and [`PaResolution::fallback`] says why.

use crate::commands::{DeviceSelect, PaConfig};
use crate::{ChipVariant, PaProfile};

/// SX1261, ~14 dBm
const SX1261_LOW_POWER: PaConfig = PaConfig {
    duty_cycle: 0x04,
    hp_max: 0x00,
    device_sel: DeviceSelect::Sx1261,
    pa_lut: 0x01,
};

/// SX1262, ~14 dBm
const SX1262_LOW_POWER: PaConfig = PaConfig {
    duty_cycle: 0x04,
    hp_max: 0x00,
    device_sel: DeviceSelect::Sx1262,
    pa_lut: 0x01,
};

/// SX1262, ~17 dBm
const SX1262_MEDIUM_POWER: PaConfig = PaConfig {
    duty_cycle: 0x06,
    hp_max: 0x03,
    device_sel: DeviceSelect::Sx1262,
    pa_lut: 0x01,
};

/// SX1262, +20 dBm (safe max)
const SX1262_HIGH_POWER: PaConfig = PaConfig {
    duty_cycle: 0x07,
    hp_max: 0x05,
    device_sel: DeviceSelect::Sx1262,
    pa_lut: 0x01,
};

/// Why the resolved tuple differs from what was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaFallback {
    /// An SX1261 was asked for more than low power.
    LowPowerOnly,
    /// The chip variant is not recognized.
    UnknownChip,
}

/// Outcome of [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PaResolution {
    pub config: PaConfig,
    pub fallback: Option<PaFallback>,
}

/// Resolves the PA register tuple for `chip` and `profile`.
pub fn resolve(chip: ChipVariant, profile: PaProfile) -> PaResolution {
    let (config, fallback) = match chip {
        ChipVariant::Sx1261 => {
            let fallback = (profile != PaProfile::LowPower).then_some(PaFallback::LowPowerOnly);
            (SX1261_LOW_POWER, fallback)
        }
        ChipVariant::Sx1262 => {
            let config = match profile {
                PaProfile::LowPower => SX1262_LOW_POWER,
                PaProfile::MediumPower => SX1262_MEDIUM_POWER,
                PaProfile::HighPower => SX1262_HIGH_POWER,
            };
            (config, None)
        }
        ChipVariant::Unknown => (SX1262_LOW_POWER, Some(PaFallback::UnknownChip)),
    };

    PaResolution { config, fallback }
}
