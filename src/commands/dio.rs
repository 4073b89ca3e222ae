//! DIO and IRQ control commands
//!
//! The SX126x has 3 configurable DIO pins and a 16-bit interrupt register.
//! Each interrupt can be routed to any DIO pin, and multiple interrupts
//! can share one pin (OR function).

use bitflags::bitflags;
use core::convert::Infallible;

use regiface::{Command, NoParameters, ToByteArray};

use super::Opcode;

bitflags! {
    /// Interrupt sources
    ///
    /// Used both as the global IRQ enable mask and as the per-pin
    /// routing masks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IrqMask: u16 {
        const TX_DONE = 1 << 0;
        const RX_DONE = 1 << 1;
        const PREAMBLE_DETECTED = 1 << 2;
        /// FSK only
        const SYNC_WORD_VALID = 1 << 3;
        /// LoRa only
        const HEADER_VALID = 1 << 4;
        /// LoRa only
        const HEADER_ERR = 1 << 5;
        const CRC_ERR = 1 << 6;
        const CAD_DONE = 1 << 7;
        const CAD_DETECTED = 1 << 8;
        const TIMEOUT = 1 << 9;
        const LR_FHSS_HOP = 1 << 14;
    }
}

/// DIO and IRQ configuration parameters
///
/// An IRQ appears on a DIO pin only when its bit is set both in
/// `irq_mask` and in that pin's mask.
#[derive(Debug, Clone, Copy)]
pub struct DioIrqConfig {
    /// IRQ enable mask
    pub irq_mask: IrqMask,

    /// DIO1 interrupt mapping mask
    pub dio1_mask: IrqMask,

    /// DIO2 interrupt mapping mask
    /// Ignored if DIO2 configured for RF switch control
    pub dio2_mask: IrqMask,

    /// DIO3 interrupt mapping mask
    /// Ignored if DIO3 configured for TCXO control
    pub dio3_mask: IrqMask,
}

impl ToByteArray for DioIrqConfig {
    type Error = Infallible;
    type Array = [u8; 8];

    fn to_bytes(self) -> Result<Self::Array, Self::Error> {
        let mut bytes = [0u8; 8];
        bytes[0..2].copy_from_slice(&self.irq_mask.bits().to_be_bytes());
        bytes[2..4].copy_from_slice(&self.dio1_mask.bits().to_be_bytes());
        bytes[4..6].copy_from_slice(&self.dio2_mask.bits().to_be_bytes());
        bytes[6..8].copy_from_slice(&self.dio3_mask.bits().to_be_bytes());
        Ok(bytes)
    }
}

/// SetDioIrqParams command (0x08)
///
/// Configures the mapping between interrupt sources and DIO pins.
///
/// # Important Notes
/// - IRQs must be enabled in irq_mask to be generated
/// - Multiple IRQs can be mapped to same DIO (OR function)
/// - DIO2/3 mappings ignored if used for RF switch/TCXO
#[derive(Debug, Clone)]
pub struct SetDioIrqParams {
    /// DIO and IRQ configuration parameters
    pub config: DioIrqConfig,
}

impl Command for SetDioIrqParams {
    type IdType = u8;
    type CommandParameters = DioIrqConfig;
    type ResponseParameters = NoParameters;

    fn id() -> Self::IdType {
        Opcode::SetDioIrqParams as u8
    }

    fn invoking_parameters(self) -> Self::CommandParameters {
        self.config
    }
}
