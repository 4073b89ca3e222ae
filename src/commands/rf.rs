//! RF and modulation commands
//!
//! This module contains commands for configuring:
//! - Packet type selection (LoRa/GFSK/LR-FHSS)
//! - RF frequency
//! - TX power and ramping
//! - LoRa modulation parameters
//!
//! Most configuration commands must be issued while in STDBY_RC mode.

use core::convert::Infallible;

use regiface::{Command, NoParameters, ToByteArray};

use super::Opcode;

/// Crystal reference the frequency synthesizer is locked to.
pub const XTAL_FREQ_HZ: u32 = 32_000_000;

/// RF frequency register value
///
/// The synthesizer step is FXTAL / 2^25 (~0.95 Hz). The register holds
/// `floor(hz * 2^25 / FXTAL)`; anything below one step is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RfFrequency(pub u32);

impl RfFrequency {
    /// Quantizes a frequency in Hz to its register value.
    pub const fn from_hz(hz: u32) -> Self {
        Self((((hz as u64) << 25) / XTAL_FREQ_HZ as u64) as u32)
    }
}

impl ToByteArray for RfFrequency {
    type Error = Infallible;
    type Array = [u8; 4];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok(self.0.to_be_bytes())
    }
}

/// SetRfFrequency command (0x86)
///
/// Sets the RF frequency for both TX and RX operations.
///
/// # Important Notes
/// - Must be called while in STDBY_RC mode
/// - Valid range is 150MHz to 960MHz
#[derive(Debug, Clone)]
pub struct SetRfFrequency {
    /// Quantized RF frequency
    pub config: RfFrequency,
}

impl Command for SetRfFrequency {
    type IdType = u8;
    type CommandParameters = RfFrequency;
    type ResponseParameters = NoParameters;

    fn id() -> Self::IdType {
        Opcode::SetRfFrequency as u8
    }

    fn invoking_parameters(self) -> Self::CommandParameters {
        self.config
    }
}

/// Packet type options for radio configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketType {
    /// GFSK packet type (0x00)
    Gfsk = 0x00,
    /// LoRa packet type (0x01)
    LoRa = 0x01,
    /// LR-FHSS packet type (0x03)
    LrFhss = 0x03,
}

impl ToByteArray for PacketType {
    type Error = Infallible;
    type Array = [u8; 1];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self as u8])
    }
}

/// SetPacketType command (0x8A)
///
/// Selects the modem and its packet engine.
///
/// # Important Notes
/// - Must be the first command in the radio configuration sequence
/// - Parameters from previous mode are not retained
#[derive(Debug, Clone)]
pub struct SetPacketType {
    /// Packet type selection
    pub packet_type: PacketType,
}

impl Command for SetPacketType {
    type IdType = u8;
    type CommandParameters = PacketType;
    type ResponseParameters = NoParameters;

    fn id() -> Self::IdType {
        Opcode::SetPacketType as u8
    }

    fn invoking_parameters(self) -> Self::CommandParameters {
        self.packet_type
    }
}

/// Power amplifier ramp time options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampTime {
    /// 10 μs ramp time
    Micros10 = 0x00,
    /// 20 μs ramp time
    Micros20 = 0x01,
    /// 40 μs ramp time
    Micros40 = 0x02,
    /// 80 μs ramp time
    Micros80 = 0x03,
    /// 200 μs ramp time
    Micros200 = 0x04,
    /// 800 μs ramp time
    Micros800 = 0x05,
    /// 1700 μs ramp time
    Micros1700 = 0x06,
    /// 3400 μs ramp time
    Micros3400 = 0x07,
}

/// TX parameters configuration
#[derive(Debug, Clone, Copy)]
pub struct TxParams {
    /// Output power in dBm
    /// - SX1261: -17 to +14 dBm
    /// - SX1262: -9 to +22 dBm
    pub power: i8,

    /// Power amplifier ramp time
    pub ramp_time: RampTime,
}

impl ToByteArray for TxParams {
    type Error = Infallible;
    type Array = [u8; 2];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([self.power as u8, self.ramp_time as u8])
    }
}

/// SetTxParams command (0x8E)
///
/// Sets the TX output power and PA ramp time.
///
/// # Important Notes
/// - Power range depends on PA configuration
/// - Must be configured after SetPaConfig
#[derive(Debug, Clone)]
pub struct SetTxParams {
    /// TX parameters configuration
    pub params: TxParams,
}

impl Command for SetTxParams {
    type IdType = u8;
    type CommandParameters = TxParams;
    type ResponseParameters = NoParameters;

    fn id() -> Self::IdType {
        Opcode::SetTxParams as u8
    }

    fn invoking_parameters(self) -> Self::CommandParameters {
        self.params
    }
}

/// LoRa spreading factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpreadingFactor {
    Sf5 = 0x05,
    Sf6 = 0x06,
    Sf7 = 0x07,
    Sf8 = 0x08,
    Sf9 = 0x09,
    Sf10 = 0x0A,
    Sf11 = 0x0B,
    Sf12 = 0x0C,
}

/// LoRa bandwidth
///
/// Wire values are not monotonic in bandwidth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bandwidth {
    Khz7_8 = 0x00,
    Khz10_4 = 0x08,
    Khz15_6 = 0x01,
    Khz20_8 = 0x09,
    Khz31_25 = 0x02,
    Khz41_7 = 0x0A,
    Khz62_5 = 0x03,
    Khz125 = 0x04,
    Khz250 = 0x05,
    Khz500 = 0x06,
}

/// LoRa coding rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodingRate {
    Cr4_5 = 0x01,
    Cr4_6 = 0x02,
    Cr4_7 = 0x03,
    Cr4_8 = 0x04,
    /// 4/5 with long interleaving
    Cr4_5Li = 0x05,
    /// 4/6 with long interleaving
    Cr4_6Li = 0x06,
    /// 4/8 with long interleaving
    Cr4_8Li = 0x07,
}

/// LoRa modulation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoRaModulationParams {
    pub spreading_factor: SpreadingFactor,
    pub bandwidth: Bandwidth,
    pub coding_rate: CodingRate,
    /// Low data rate optimization, recommended for symbol times ≥ 16.38ms
    pub low_data_rate_optimize: bool,
}

impl ToByteArray for LoRaModulationParams {
    type Error = Infallible;
    type Array = [u8; 4];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        Ok([
            self.spreading_factor as u8,
            self.bandwidth as u8,
            self.coding_rate as u8,
            self.low_data_rate_optimize as u8,
        ])
    }
}

/// SetModulationParams command (0x8B)
///
/// Configures the LoRa modulation. Must follow SetPacketType.
#[derive(Debug, Clone)]
pub struct SetModulationParams {
    /// LoRa modulation parameters
    pub params: LoRaModulationParams,
}

impl Command for SetModulationParams {
    type IdType = u8;
    type CommandParameters = LoRaModulationParams;
    type ResponseParameters = NoParameters;

    fn id() -> Self::IdType {
        Opcode::SetModulationParams as u8
    }

    fn invoking_parameters(self) -> Self::CommandParameters {
        self.params
    }
}
