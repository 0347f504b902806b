use std::fmt;

use super::{Cpu, CpuError, Mmu};
use crate::instructions::{InstructionDefinition, InstructionSet};
use crate::PREFIX_OPCODE;

/// Immediate bytes that follow an opcode.
///
/// For prefixed instructions `low` holds the sub-opcode that selected the
/// definition and `high` is unused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    pub low: u8,
    pub high: u8,
}

/// Result of decoding the instruction at a given address.
#[derive(Clone, Copy, Debug)]
pub struct ParsedInstruction {
    /// PC value at fetch time.
    pub address: u16,
    /// Raw byte at `address` (`0xCB` for prefixed instructions).
    pub opcode: u8,
    pub prefixed: bool,
    pub operands: Operands,
    pub definition: &'static InstructionDefinition,
}

impl ParsedInstruction {
    /// Byte that selected the definition within its table.
    #[inline]
    pub fn code(&self) -> u8 {
        if self.prefixed {
            self.operands.low
        } else {
            self.opcode
        }
    }

    #[inline]
    pub fn length(&self) -> u8 {
        self.definition.length
    }

    #[inline]
    pub fn d8(&self) -> u8 {
        self.operands.low
    }

    /// Signed 8-bit displacement (JR, ADD SP and LD HL,SP+r8).
    #[inline]
    pub fn r8(&self) -> i8 {
        self.operands.low as i8
    }

    /// 16-bit immediate, little-endian in memory.
    #[inline]
    pub fn d16(&self) -> u16 {
        u16::from_le_bytes([self.operands.low, self.operands.high])
    }
}

const PLACEHOLDERS: [&str; 5] = ["d16", "a16", "d8", "a8", "r8"];

impl fmt::Display for ParsedInstruction {
    /// Disassembly with the immediate substituted into the mnemonic,
    /// e.g. `JP $0150` or `LDH ($FF44),A`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let template = self.definition.mnemonic;
        for placeholder in PLACEHOLDERS {
            if let Some((head, tail)) = template.split_once(placeholder) {
                f.write_str(head)?;
                match placeholder {
                    "d16" | "a16" => write!(f, "${:04X}", self.d16())?,
                    "d8" => write!(f, "${:02X}", self.d8())?,
                    "a8" => write!(f, "$FF{:02X}", self.d8())?,
                    _ => write!(f, "{}", self.r8())?,
                }
                return f.write_str(tail);
            }
        }
        f.write_str(template)
    }
}

impl InstructionSet {
    /// Decode the instruction starting at `address`.
    ///
    /// Every byte is fetched with a real MMU read, so read-sensitive IO
    /// registers observe the access. Illegal entries are rejected before any
    /// immediates are read.
    pub fn decode<M: Mmu + ?Sized>(
        &'static self,
        mmu: &mut M,
        address: u16,
    ) -> Result<ParsedInstruction, CpuError> {
        let opcode = mmu.read(address);
        let mut operands = Operands::default();

        let (prefixed, definition) = if opcode == PREFIX_OPCODE {
            let sub = mmu.read(address.wrapping_add(1));
            operands.low = sub;
            (true, &self.prefixed[sub as usize])
        } else {
            (false, &self.base[opcode as usize])
        };

        if !definition.is_legal() {
            return Err(CpuError::IllegalOpcode {
                opcode: if prefixed { operands.low } else { opcode },
                prefixed,
                address,
            });
        }

        if !prefixed {
            if definition.length >= 2 {
                operands.low = mmu.read(address.wrapping_add(1));
            }
            if definition.length == 3 {
                operands.high = mmu.read(address.wrapping_add(2));
            }
        }

        Ok(ParsedInstruction {
            address,
            opcode,
            prefixed,
            operands,
            definition,
        })
    }
}

impl Cpu {
    /// Decode the instruction at `address` using this CPU's tables.
    pub fn decode<M: Mmu + ?Sized>(
        &self,
        mmu: &mut M,
        address: u16,
    ) -> Result<ParsedInstruction, CpuError> {
        self.instruction_set.decode(mmu, address)
    }

    /// Refill the lookahead slot from the current PC.
    pub(super) fn prime_next<M: Mmu + ?Sized>(&mut self, mmu: &mut M) {
        let next = self.decode(mmu, self.regs.pc);
        self.next = Some(next);
    }
}
