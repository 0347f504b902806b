use crate::cpu::{Cpu, Mmu, ParsedInstruction};

impl Cpu {
    pub(super) fn exec_nop(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        instr.cycles()
    }

    /// Effect slot of illegal entries. Decode rejects these before
    /// dispatch, so this only runs if a host calls the effect directly.
    pub(super) fn exec_illegal(&mut self, _mmu: &mut dyn Mmu, _instr: &ParsedInstruction) -> u32 {
        0
    }

    /// HALT: stop executing until an enabled interrupt becomes pending.
    pub(super) fn exec_halt(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.halted = true;
        instr.cycles()
    }

    /// STOP is a 2-byte instruction whose padding byte is ignored. Without a
    /// joypad model behind the MMU it behaves like HALT.
    pub(super) fn exec_stop(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.halted = true;
        instr.cycles()
    }

    pub(super) fn exec_di(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.ime = false;
        instr.cycles()
    }

    pub(super) fn exec_ei(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.ime = true;
        instr.cycles()
    }
}
