mod decode;
mod error;
mod interrupts;
mod mmu;
mod regs;
mod run_mode;
mod stack;
mod step;

pub use decode::{Operands, ParsedInstruction};
pub use error::CpuError;
pub use interrupts::{InterruptSource, Interrupts};
pub use mmu::Mmu;
pub use regs::{Flag, Registers};
pub use run_mode::RunMode;

use typed_builder::TypedBuilder;

use crate::instructions::{InstructionSet, INSTRUCTION_SET};
use crate::{DEFAULT_ENTRY_POINT, DEFAULT_STACK_POINTER};

/// Initial state for a [`Cpu`].
///
/// Only the values the engine itself cares about are configurable; the
/// power-up contents of the IO registers belong to the MMU.
#[derive(Clone, Copy, Debug, TypedBuilder)]
pub struct CpuConfig {
    #[builder(default = DEFAULT_ENTRY_POINT)]
    pub entry_point: u16,
    #[builder(default = DEFAULT_STACK_POINTER)]
    pub stack_pointer: u16,
    #[builder(default = false)]
    pub interrupts_enabled: bool,
    #[builder(default)]
    pub run_mode: RunMode,
    /// Opcode tables the engine dispatches against.
    #[builder(default = &*INSTRUCTION_SET)]
    pub instruction_set: &'static InstructionSet,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Game Boy CPU core.
///
/// The CPU does not own its memory: every operation that touches the
/// address space takes the [`Mmu`] as an argument. Decoding runs one
/// instruction ahead of execution; `next` holds that lookahead and is
/// re-primed whenever PC changes outside the normal fetch path.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Master interrupt enable.
    pub ime: bool,
    pub halted: bool,
    run_mode: RunMode,
    config: CpuConfig,
    instruction_set: &'static InstructionSet,
    current: Option<ParsedInstruction>,
    /// Lookahead decode. A decode failure is kept here and only raised if
    /// the instruction is actually dispatched.
    next: Option<Result<ParsedInstruction, CpuError>>,
    /// Set once an illegal opcode has been dispatched. On hardware the CPU
    /// is dead until power-off; every `cycle` reports this error until
    /// `reset`.
    fault: Option<CpuError>,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            run_mode: RunMode::default(),
            config,
            instruction_set: config.instruction_set,
            current: None,
            next: None,
            fault: None,
        };
        cpu.apply_config();
        cpu
    }

    /// Reset the CPU to the state it was constructed with.
    pub fn reset(&mut self) {
        self.apply_config();
    }

    fn apply_config(&mut self) {
        self.regs = Registers {
            sp: self.config.stack_pointer,
            pc: self.config.entry_point,
            ..Registers::default()
        };
        self.ime = self.config.interrupts_enabled;
        self.halted = false;
        self.run_mode = self.config.run_mode;
        self.instruction_set = self.config.instruction_set;
        self.current = None;
        self.next = None;
        self.fault = None;
    }

    /// Move PC to `address` and discard the pipelined decode.
    ///
    /// Hosts must use this (rather than writing `regs.pc`) when redirecting
    /// a CPU that has already executed, so the lookahead does not run stale
    /// bytes.
    pub fn jump(&mut self, address: u16) {
        self.regs.pc = address;
        self.next = None;
    }

    pub fn instruction_set(&self) -> &'static InstructionSet {
        self.instruction_set
    }

    /// Instruction executed by the most recent `cycle`.
    pub fn current_instruction(&self) -> Option<&ParsedInstruction> {
        self.current.as_ref()
    }

    /// Decoded instruction that the next `cycle` will execute.
    pub fn next_instruction(&self) -> Option<&ParsedInstruction> {
        self.next.as_ref().and_then(|next| next.as_ref().ok())
    }

    pub fn is_locked(&self) -> bool {
        self.fault.is_some()
    }
}

#[cfg(test)]
mod tests;
