use crate::cpu::{Cpu, Flag, Mmu, ParsedInstruction};

impl ParsedInstruction {
    /// Nominal cost of the instruction as declared in its table entry.
    #[inline]
    pub(super) fn cycles(&self) -> u32 {
        u32::from(self.definition.cycles)
    }
}

impl Cpu {
    /// Helper to read an 8-bit register or (HL) by index.
    ///
    /// The encoding matches the standard Game Boy register order used by
    /// opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(super) fn read_reg8(&mut self, mmu: &mut dyn Mmu, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => mmu.read(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    /// Helper to write an 8-bit register or (HL) by index.
    ///
    /// The encoding matches `read_reg8`.
    #[inline]
    pub(super) fn write_reg8(&mut self, mmu: &mut dyn Mmu, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => mmu.write(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// 16-bit register pair by index: 0=BC, 1=DE, 2=HL, 3=SP.
    #[inline]
    pub(super) fn read_rp(&self, index: u8) -> u16 {
        match index & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_rp(&mut self, index: u8, value: u16) {
        match index & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.sp = value,
        }
    }

    /// Branch condition encoded in bits 3-4 of JR/JP/CALL/RET cc.
    #[inline]
    pub(super) fn cc_condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x03 {
            0 => !self.get_flag(Flag::Z), // NZ
            1 => self.get_flag(Flag::Z),  // Z
            2 => !self.get_flag(Flag::C), // NC
            _ => self.get_flag(Flag::C),  // C
        }
    }
}
