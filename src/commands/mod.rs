//! Radio command encodings
//!
//! Every control operation is a [`regiface::Command`] with a one-byte opcode
//! and a fixed-size parameter block. [`Frame::encode`] lays a command out as
//! it travels on the wire: the opcode followed by its parameters.
//!
//! # Command Categories
//! - operational: standby modes and PA configuration
//! - rf: packet type, RF frequency, TX power and modulation
//! - dio: IRQ enable mask and DIO routing
//!
//! # Important Notes
//! - Configuration commands are expected in STDBY_RC mode
//! - Packet type must be set before modulation parameters
//! - SetPaConfig must precede SetTxParams
//! - None of the configuration writes return a response

use core::convert::Infallible;

use regiface::{ByteArray, Command, ToByteArray};

mod dio;
mod operational;
mod rf;

pub use dio::*;
pub use operational::*;
pub use rf::*;

/// Command opcodes understood by the SX126x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Opcode {
    SetDioIrqParams = 0x08,
    ReadRegister = 0x1D,
    SetStandby = 0x80,
    SetRfFrequency = 0x86,
    SetPacketType = 0x8A,
    SetModulationParams = 0x8B,
    SetTxParams = 0x8E,
    SetPaConfig = 0x95,
}

/// Longest frame the driver builds (SetDioIrqParams).
pub const MAX_FRAME_LEN: usize = 9;

/// An encoded command: opcode followed by its parameter bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    bytes: [u8; MAX_FRAME_LEN],
    len: usize,
}

impl Frame {
    /// Encodes `command` into a frame.
    ///
    /// # Panics
    /// If the command's parameter block is longer than `MAX_FRAME_LEN - 1`.
    /// All commands in this crate fit.
    pub fn encode<C>(command: C) -> Self
    where
        C: Command<IdType = u8>,
        C::CommandParameters: ToByteArray<Error = Infallible>,
    {
        let params = match command.invoking_parameters().to_bytes() {
            Ok(params) => params,
            Err(never) => match never {},
        };
        let params = params.as_ref();

        let mut bytes = [0u8; MAX_FRAME_LEN];
        bytes[0] = C::id();
        bytes[1..=params.len()].copy_from_slice(params);

        Self {
            bytes,
            len: params.len() + 1,
        }
    }

    /// Opcode byte of this frame.
    pub fn opcode(&self) -> u8 {
        self.bytes[0]
    }

    /// Bytes to put on the bus.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}
