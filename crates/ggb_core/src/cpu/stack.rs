use super::{Cpu, Mmu};

impl Cpu {
    /// Push a 16-bit value: high byte at SP-1, low byte at SP-2.
    ///
    /// The stack grows downward so memory[SP] = low, memory[SP+1] = high
    /// afterwards. Wrapping past 0x0000 is left to the memory map.
    #[inline]
    pub fn push_stack<M: Mmu + ?Sized>(&mut self, mmu: &mut M, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        let sp = self.regs.sp;
        mmu.write(sp.wrapping_sub(1), hi);
        mmu.write(sp.wrapping_sub(2), lo);
        self.regs.sp = sp.wrapping_sub(2);
    }

    #[inline]
    pub fn pop_stack<M: Mmu + ?Sized>(&mut self, mmu: &mut M) -> u16 {
        let sp = self.regs.sp;
        let lo = mmu.read(sp);
        let hi = mmu.read(sp.wrapping_add(1));
        self.regs.sp = sp.wrapping_add(2);
        u16::from_be_bytes([hi, lo])
    }
}
