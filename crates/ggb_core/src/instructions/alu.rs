use crate::cpu::{Cpu, Flag, Mmu, ParsedInstruction};

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.get_flag(Flag::C));

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = u16::from(a) + u16::from(value) + u16::from(carry_in);
        let result = full as u8;

        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, (half & 0x10) != 0);
        self.set_flag(Flag::C, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = i16::from(use_carry && self.get_flag(Flag::C));

        let half = i16::from(a & 0x0F) - i16::from(value & 0x0F) - carry_in;
        let full = i16::from(a) - i16::from(value) - carry_in;
        let result = full as u8;

        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, half < 0);
        self.set_flag(Flag::C, full < 0);
    }

    fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, true);
    }

    fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    fn alu_cp(&mut self, value: u8) {
        let a = self.regs.a;
        self.alu_sub(value, false);
        self.regs.a = a;
    }

    /// Operation selected by bits 3-5 of the 0x80-0xBF and 0xC6-0xFE
    /// groups: ADD ADC SUB SBC AND XOR OR CP.
    fn alu_dispatch(&mut self, operation: u8, value: u8) {
        match operation & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    /// 8-bit increment helper used by INC r and INC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, (value & 0x0F) == 0);
        result
    }

    /// Signed 8-bit offset added to a 16-bit base (ADD SP,r8 and
    /// LD HL,SP+r8). Z and N are cleared; H and C come from the low byte.
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.set_flag(Flag::Z, false);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.set_flag(Flag::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }

    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A, r (0x80-0xBF).
    pub(super) fn exec_alu_r(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let opcode = instr.code();
        let value = self.read_reg8(mmu, opcode);
        self.alu_dispatch(opcode >> 3, value);
        instr.cycles()
    }

    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A, d8.
    pub(super) fn exec_alu_d8(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.alu_dispatch(instr.code() >> 3, instr.d8());
        instr.cycles()
    }

    /// ADD HL, rr. Z is unaffected; H and C come from bits 11 and 15.
    pub(super) fn exec_add_hl_rr(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let value = self.read_rp(instr.code() >> 4);
        let hl = self.regs.hl();

        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, u32::from(hl) + u32::from(value) > 0xFFFF);

        self.regs.set_hl(hl.wrapping_add(value));
        instr.cycles()
    }

    pub(super) fn exec_add_sp_r8(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.regs.sp = self.alu_add16_signed(self.regs.sp, instr.d8());
        instr.cycles()
    }

    /// RLCA, RRCA, RLA, RRA. Unlike the CB forms these always clear Z.
    pub(super) fn exec_rotate_a(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let a = self.regs.a;
        let carry = self.get_flag(Flag::C);

        let (result, carry_out) = match instr.code() {
            0x07 => (a.rotate_left(1), a & 0x80 != 0),
            0x0F => (a.rotate_right(1), a & 0x01 != 0),
            0x17 => ((a << 1) | u8::from(carry), a & 0x80 != 0),
            _ => ((a >> 1) | (u8::from(carry) << 7), a & 0x01 != 0),
        };

        self.regs.a = result;
        self.clear_flags();
        self.set_flag(Flag::C, carry_out);
        instr.cycles()
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// Uses C, H, N and A to compute a correction value. Updates A, Z, H, C;
    /// leaves N unchanged.
    pub(super) fn exec_daa(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.get_flag(Flag::C) { 0x60 } else { 0x00 };
        if self.get_flag(Flag::H) {
            adjust |= 0x06;
        }

        if !self.get_flag(Flag::N) {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flag::C, adjust >= 0x60);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::Z, a == 0);
        self.regs.a = a;
        instr.cycles()
    }

    pub(super) fn exec_cpl(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        instr.cycles()
    }

    pub(super) fn exec_scf(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
        instr.cycles()
    }

    pub(super) fn exec_ccf(&mut self, _mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
        instr.cycles()
    }
}
