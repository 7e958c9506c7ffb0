//! IPREF v1 command space.
//!
//! The command byte carries a mode in its top two bits and an opcode in the
//! low six. Both are closed sets; dispatch on them belongs to higher layers.

use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const MODE_MASK: u8 = 0xC0;
const OPCODE_MASK: u8 = 0x3F;

/// Command opcodes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    Noop = 0,
    SetArec = 1,
    SetMark = 2,
    GetRef = 4,
    GetEa = 6,
    McGetEa = 7,
    SaveOid = 8,
    SaveTimeBase = 9,
    RecoverEa = 10,
    RecoverRef = 11,
    McHostData = 14,
    McHostDataHash = 15,
    SaveDnsSource = 16,
}

impl Opcode {
    pub const ALL: [Opcode; 13] = [
        Opcode::Noop,
        Opcode::SetArec,
        Opcode::SetMark,
        Opcode::GetRef,
        Opcode::GetEa,
        Opcode::McGetEa,
        Opcode::SaveOid,
        Opcode::SaveTimeBase,
        Opcode::RecoverEa,
        Opcode::RecoverRef,
        Opcode::McHostData,
        Opcode::McHostDataHash,
        Opcode::SaveDnsSource,
    ];

    /// Resolve the low six bits of a command byte
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Noop),
            1 => Some(Self::SetArec),
            2 => Some(Self::SetMark),
            4 => Some(Self::GetRef),
            6 => Some(Self::GetEa),
            7 => Some(Self::McGetEa),
            8 => Some(Self::SaveOid),
            9 => Some(Self::SaveTimeBase),
            10 => Some(Self::RecoverEa),
            11 => Some(Self::RecoverRef),
            14 => Some(Self::McHostData),
            15 => Some(Self::McHostDataHash),
            16 => Some(Self::SaveDnsSource),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Opcode::Noop => "NOOP",
            Opcode::SetArec => "SET_AREC",
            Opcode::SetMark => "SET_MARK",
            Opcode::GetRef => "GET_REF",
            Opcode::GetEa => "GET_EA",
            Opcode::McGetEa => "MC_GET_EA",
            Opcode::SaveOid => "SAVE_OID",
            Opcode::SaveTimeBase => "SAVE_TIME_BASE",
            Opcode::RecoverEa => "RECOVER_EA",
            Opcode::RecoverRef => "RECOVER_REF",
            Opcode::McHostData => "MC_HOST_DATA",
            Opcode::McHostDataHash => "MC_HOST_DATA_HASH",
            Opcode::SaveDnsSource => "SAVE_DNSSOURCE",
        }
    }
}

/// Command mode, top two bits of the command byte
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Data = 0x00,
    Request = 0x40,
    Ack = 0x80,
    Nack = 0xC0,
}

impl Mode {
    /// Total over all bytes: only the top two bits are inspected
    pub fn from_byte(b: u8) -> Self {
        match b & MODE_MASK {
            0x00 => Mode::Data,
            0x40 => Mode::Request,
            0x80 => Mode::Ack,
            _ => Mode::Nack,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Data => "DATA",
            Mode::Request => "REQ",
            Mode::Ack => "ACK",
            Mode::Nack => "NACK",
        }
    }
}

/// Raw command byte as carried in header byte 1.
///
/// Decoding keeps the byte as-is so unknown opcodes survive a round trip;
/// [`Command::opcode`] resolves it against the closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Command(u8);

impl Command {
    pub fn new(mode: Mode, opcode: Opcode) -> Self {
        Self(mode as u8 | opcode as u8)
    }

    pub fn from_byte(b: u8) -> Self {
        Self(b)
    }

    pub fn raw(self) -> u8 {
        self.0
    }

    pub fn mode(self) -> Mode {
        Mode::from_byte(self.0)
    }

    pub fn opcode(self) -> Result<Opcode> {
        let code = self.0 & OPCODE_MASK;
        Opcode::from_u8(code).ok_or(ProtocolError::UnknownCommand(code))
    }

    /// Same opcode with a different mode, e.g. to answer a request
    pub fn with_mode(self, mode: Mode) -> Self {
        Self((self.0 & OPCODE_MASK) | mode as u8)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opcode() {
            Ok(op) => write!(f, "{}|{}", self.mode().name(), op.name()),
            Err(_) => write!(f, "{}|{:#04x}", self.mode().name(), self.0 & OPCODE_MASK),
        }
    }
}
