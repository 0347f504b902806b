use crate::cpu::{Cpu, Flag, Mmu, ParsedInstruction};

// CB-prefixed instructions (bit operations, shifts and rotates). The
// sub-opcode splits into x (bits 6-7), y (bits 3-5) and z (bits 0-2);
// z selects the register using the same order as the base table.

impl Cpu {
    /// RLC RRC RL RR SLA SRA SWAP SRL r (x = 0).
    pub(super) fn exec_cb_shift(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let cb = instr.code();
        let z = cb & 0x07;
        let value = self.read_reg8(mmu, z);
        let carry_in = self.get_flag(Flag::C);

        let (result, carry_out) = match (cb >> 3) & 0x07 {
            // RLC r
            0 => (value.rotate_left(1), value & 0x80 != 0),
            // RRC r
            1 => (value.rotate_right(1), value & 0x01 != 0),
            // RL r
            2 => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            // RR r
            3 => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            // SLA r
            4 => (value << 1, value & 0x80 != 0),
            // SRA r
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            // SWAP r
            6 => (value.rotate_left(4), false),
            // SRL r
            _ => (value >> 1, value & 0x01 != 0),
        };

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, carry_out);
        self.write_reg8(mmu, z, result);
        instr.cycles()
    }

    /// BIT b, r: Z reflects the tested bit; C is preserved.
    pub(super) fn exec_cb_bit(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let cb = instr.code();
        let bit = (cb >> 3) & 0x07;
        let value = self.read_reg8(mmu, cb);

        self.set_flag(Flag::Z, value & (1 << bit) == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);
        instr.cycles()
    }

    pub(super) fn exec_cb_res(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let cb = instr.code();
        let bit = (cb >> 3) & 0x07;
        let value = self.read_reg8(mmu, cb) & !(1 << bit);
        self.write_reg8(mmu, cb, value);
        instr.cycles()
    }

    pub(super) fn exec_cb_set(&mut self, mmu: &mut dyn Mmu, instr: &ParsedInstruction) -> u32 {
        let cb = instr.code();
        let bit = (cb >> 3) & 0x07;
        let value = self.read_reg8(mmu, cb) | (1 << bit);
        self.write_reg8(mmu, cb, value);
        instr.cycles()
    }
}
