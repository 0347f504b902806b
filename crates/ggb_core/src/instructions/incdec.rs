use crate::cpu::{Cpu, Mmu, ParsedInstruction};

impl Cpu {
    pub(super) fn exec_inc8(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let reg = instr.code() >> 3;
        let value = self.read_reg8(mmu, reg);
        let result = self.alu_inc8(value);
        self.write_reg8(mmu, reg, result);
        instr.cycles()
    }

    pub(super) fn exec_dec8(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let reg = instr.code() >> 3;
        let value = self.read_reg8(mmu, reg);
        let result = self.alu_dec8(value);
        self.write_reg8(mmu, reg, result);
        instr.cycles()
    }

    /// INC rr. 16-bit increments leave the flags untouched.
    pub(super) fn exec_inc16(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let rp = instr.code() >> 4;
        let value = self.read_rp(rp).wrapping_add(1);
        self.write_rp(rp, value);
        instr.cycles()
    }

    pub(super) fn exec_dec16(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let rp = instr.code() >> 4;
        let value = self.read_rp(rp).wrapping_sub(1);
        self.write_rp(rp, value);
        instr.cycles()
    }
}
