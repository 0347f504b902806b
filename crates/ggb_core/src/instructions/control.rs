use crate::cpu::{Cpu, Mmu, ParsedInstruction};

// Control flow effects run with PC already past the instruction: relative
// jumps are taken from there and calls push it as the return address.

impl Cpu {
    fn jump_relative(&mut self, offset: i8) {
        self.regs.pc = self.regs.pc.wrapping_add_signed(i16::from(offset));
    }

    pub(super) fn exec_jr(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.jump_relative(instr.r8());
        instr.cycles()
    }

    pub(super) fn exec_jr_cc(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        if self.cc_condition(instr.code()) {
            self.jump_relative(instr.r8());
            12
        } else {
            instr.cycles()
        }
    }

    pub(super) fn exec_jp(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.regs.pc = instr.d16();
        instr.cycles()
    }

    pub(super) fn exec_jp_cc(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        if self.cc_condition(instr.code()) {
            self.regs.pc = instr.d16();
            16
        } else {
            instr.cycles()
        }
    }

    pub(super) fn exec_jp_hl(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.regs.pc = self.regs.hl();
        instr.cycles()
    }

    pub(super) fn exec_call(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let ret = self.regs.pc;
        self.push_stack(mmu, ret);
        self.regs.pc = instr.d16();
        instr.cycles()
    }

    pub(super) fn exec_call_cc(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        if self.cc_condition(instr.code()) {
            let ret = self.regs.pc;
            self.push_stack(mmu, ret);
            self.regs.pc = instr.d16();
            24
        } else {
            instr.cycles()
        }
    }

    pub(super) fn exec_ret(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.regs.pc = self.pop_stack(mmu);
        instr.cycles()
    }

    pub(super) fn exec_ret_cc(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        if self.cc_condition(instr.code()) {
            self.regs.pc = self.pop_stack(mmu);
            20
        } else {
            instr.cycles()
        }
    }

    /// RETI returns and re-enables interrupts in one step.
    pub(super) fn exec_reti(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.regs.pc = self.pop_stack(mmu);
        self.ime = true;
        instr.cycles()
    }

    /// RST n: call to the fixed address encoded in bits 3-5.
    pub(super) fn exec_rst(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let ret = self.regs.pc;
        self.push_stack(mmu, ret);
        self.regs.pc = u16::from(instr.code() & 0x38);
        instr.cycles()
    }
}
