pub mod cpu;
pub mod instructions;
pub mod machine;
pub mod memory;

pub use cpu::{
    Cpu, CpuConfig, CpuError, Flag, InterruptSource, Interrupts, Mmu, Operands,
    ParsedInstruction, Registers, RunMode,
};
pub use instructions::{Execute, InstructionDefinition, InstructionSet, INSTRUCTION_SET};
pub use machine::Machine;
pub use memory::FlatMemory;

/// Interrupt enable register (IE).
pub const ADDR_INTERRUPT_ENABLE: u16 = 0xFFFF;
/// Interrupt flag register (IF), one pending bit per source.
pub const ADDR_INTERRUPT_FLAG: u16 = 0xFF0F;

/// Lead byte that selects the prefixed instruction table.
pub const PREFIX_OPCODE: u8 = 0xCB;

/// Program counter after the boot ROM hands control to the cartridge.
pub const DEFAULT_ENTRY_POINT: u16 = 0x0100;
/// Stack pointer after the boot ROM hands control to the cartridge.
pub const DEFAULT_STACK_POINTER: u16 = 0xFFFE;

/// T-cycles in one DMG frame (154 lines of 456 dots).
pub const CYCLES_PER_FRAME: u32 = 70_224;
/// T-cycles the machine accounts for each idle cycle spent in HALT.
pub const HALT_IDLE_CYCLES: u32 = 4;
