use crate::cpu::{Cpu, Mmu, ParsedInstruction};

impl Cpu {
    /// PUSH/POP use AF in place of SP for pair index 3.
    fn read_rp2(&self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            3 => self.regs.af(),
            rp => self.read_rp(rp),
        }
    }

    fn write_rp2(&mut self, opcode: u8, value: u16) {
        match (opcode >> 4) & 0x03 {
            3 => self.regs.set_af(value),
            rp => self.write_rp(rp, value),
        }
    }

    pub(super) fn exec_push(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let value = self.read_rp2(instr.code());
        self.push_stack(mmu, value);
        instr.cycles()
    }

    pub(super) fn exec_pop(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let value = self.pop_stack(mmu);
        self.write_rp2(instr.code(), value);
        instr.cycles()
    }
}
