use thiserror::Error;

/// Errors raised by the CPU core.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CpuError {
    /// The opcode has no valid table entry. Pandocs documents a set of
    /// "opcode holes" (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD) that
    /// hard-lock the CPU until power-off.
    #[error("illegal opcode 0x{opcode:02X} (prefixed: {prefixed}) at 0x{address:04X}")]
    IllegalOpcode {
        opcode: u8,
        prefixed: bool,
        address: u16,
    },
}
