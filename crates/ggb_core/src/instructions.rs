//! Opcode tables consumed by the execution engine.
//!
//! An [`InstructionSet`] is two flat 256-entry arrays (base and
//! `0xCB`-prefixed) of [`InstructionDefinition`] values. Definitions are
//! plain data: mnemonic, byte length, nominal T-cycle cost and an effect
//! function. The effect mutates the CPU and returns the cycles actually
//! consumed, which differs from the nominal cost for taken branches.
//!
//! The engine never assumes which table is loaded; [`INSTRUCTION_SET`] is
//! the LR35902 set and is what [`Cpu::new`](crate::Cpu::new) uses.

mod alu;
mod cb;
mod control;
mod helpers;
mod incdec;
mod ld;
mod stack;
mod system;
mod table;

use std::fmt;

use lazy_static::lazy_static;

use crate::cpu::{Cpu, Mmu, ParsedInstruction};

/// Instruction effect.
///
/// Runs after PC has been advanced past the instruction and returns the
/// number of T-cycles consumed.
pub type Execute = fn(&mut Cpu, &mut dyn Mmu, &ParsedInstruction) -> u32;

#[derive(Clone, Copy)]
pub struct InstructionDefinition {
    /// Disassembly template. Immediates appear as `d8`, `d16`, `a8`, `a16`
    /// or `r8` and are substituted when a parsed instruction is displayed.
    pub mnemonic: &'static str,
    /// Total size in bytes including the opcode (and prefix). Illegal
    /// entries use 0.
    pub length: u8,
    /// Nominal cost in T-cycles; the not-taken cost for conditional
    /// branches.
    pub cycles: u8,
    pub execute: Execute,
}

impl InstructionDefinition {
    pub const ILLEGAL: InstructionDefinition =
        InstructionDefinition::new("ILLEGAL", 0, 0, Cpu::exec_illegal);

    pub const fn new(mnemonic: &'static str, length: u8, cycles: u8, execute: Execute) -> Self {
        Self {
            mnemonic,
            length,
            cycles,
            execute,
        }
    }

    #[inline]
    pub fn is_legal(&self) -> bool {
        (1..=3).contains(&self.length)
    }
}

impl fmt::Debug for InstructionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstructionDefinition")
            .field("mnemonic", &self.mnemonic)
            .field("length", &self.length)
            .field("cycles", &self.cycles)
            .finish_non_exhaustive()
    }
}

/// Base and prefixed opcode tables.
pub struct InstructionSet {
    pub base: [InstructionDefinition; 256],
    pub prefixed: [InstructionDefinition; 256],
}

impl InstructionSet {
    pub fn new(base: [InstructionDefinition; 256], prefixed: [InstructionDefinition; 256]) -> Self {
        Self { base, prefixed }
    }

    /// The Game Boy (LR35902) instruction set.
    pub fn lr35902() -> Self {
        Self::new(table::base_table(), table::prefixed_table())
    }
}

impl fmt::Debug for InstructionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let legal = |table: &[InstructionDefinition; 256]| {
            table.iter().filter(|definition| definition.is_legal()).count()
        };
        f.debug_struct("InstructionSet")
            .field("base_legal", &legal(&self.base))
            .field("prefixed_legal", &legal(&self.prefixed))
            .finish()
    }
}

lazy_static! {
    /// Process-wide LR35902 tables, built on first use and never mutated.
    pub static ref INSTRUCTION_SET: InstructionSet = InstructionSet::lr35902();
}
