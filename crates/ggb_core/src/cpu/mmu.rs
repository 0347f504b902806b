/// Abstraction over the memory-management unit (memory and IO).
///
/// The CPU only needs byte access and bit access to the IO control
/// registers; the memory map, cartridge banking and any read side effects
/// live entirely behind this trait. Reads take `&mut self` because some IO
/// registers change state when read.
pub trait Mmu {
    fn read(&mut self, address: u16) -> u8;
    fn write(&mut self, address: u16, value: u8);

    /// Test `mask` in the IO register at `register`.
    ///
    /// The default implementation reads the whole register; memory maps
    /// with read-sensitive registers can override it.
    fn read_io_bit(&mut self, register: u16, mask: u8) -> bool {
        self.read(register) & mask != 0
    }

    /// Set or clear `mask` in the IO register at `register`.
    fn write_io_bit(&mut self, register: u16, mask: u8, value: bool) {
        let current = self.read(register);
        let updated = if value {
            current | mask
        } else {
            current & !mask
        };
        self.write(register, updated);
    }

    /// Advance MMU-side peripherals by a given number of CPU T-cycles.
    ///
    /// Default implementation does nothing; system MMUs can override this
    /// to drive timers, PPU, APU, etc. The [`Machine`](crate::Machine)
    /// driver calls it once per CPU cycle.
    fn tick(&mut self, _cycles: u32) {}
}
