use crate::cpu::{Cpu, Mmu, ParsedInstruction};

impl Cpu {
    /// Address for LD (rr),A / LD A,(rr) with the HL+/HL- post-update.
    fn indirect_address(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            _ => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(super) fn exec_ld_rr_d16(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.write_rp(instr.code() >> 4, instr.d16());
        instr.cycles()
    }

    pub(super) fn exec_ld_r_d8(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.write_reg8(mmu, instr.code() >> 3, instr.d8());
        instr.cycles()
    }

    /// LD r, r' (0x40-0x7F except HALT).
    pub(super) fn exec_ld_r_r(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let opcode = instr.code();
        let value = self.read_reg8(mmu, opcode);
        self.write_reg8(mmu, opcode >> 3, value);
        instr.cycles()
    }

    pub(super) fn exec_ld_indirect_a(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let addr = self.indirect_address(instr.code());
        mmu.write(addr, self.regs.a);
        instr.cycles()
    }

    pub(super) fn exec_ld_a_indirect(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let addr = self.indirect_address(instr.code());
        self.regs.a = mmu.read(addr);
        instr.cycles()
    }

    pub(super) fn exec_ld_a16_sp(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let addr = instr.d16();
        let [lo, hi] = self.regs.sp.to_le_bytes();
        mmu.write(addr, lo);
        mmu.write(addr.wrapping_add(1), hi);
        instr.cycles()
    }

    pub(super) fn exec_ldh_a8_a(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let addr = 0xFF00 | u16::from(instr.d8());
        mmu.write(addr, self.regs.a);
        instr.cycles()
    }

    pub(super) fn exec_ldh_a_a8(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let addr = 0xFF00 | u16::from(instr.d8());
        self.regs.a = mmu.read(addr);
        instr.cycles()
    }

    pub(super) fn exec_ld_c_a(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let addr = 0xFF00 | u16::from(self.regs.c);
        mmu.write(addr, self.regs.a);
        instr.cycles()
    }

    pub(super) fn exec_ld_a_c(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let addr = 0xFF00 | u16::from(self.regs.c);
        self.regs.a = mmu.read(addr);
        instr.cycles()
    }

    pub(super) fn exec_ld_a16_a(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        mmu.write(instr.d16(), self.regs.a);
        instr.cycles()
    }

    pub(super) fn exec_ld_a_a16(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.regs.a = mmu.read(instr.d16());
        instr.cycles()
    }

    pub(super) fn exec_ld_hl_sp_r8(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let result = self.alu_add16_signed(self.regs.sp, instr.d8());
        self.regs.set_hl(result);
        instr.cycles()
    }

    pub(super) fn exec_ld_sp_hl(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.regs.sp = self.regs.hl();
        instr.cycles()
    }
}
