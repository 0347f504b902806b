use bitflags::bitflags;

use super::{Cpu, Mmu};
use crate::{ADDR_INTERRUPT_ENABLE, ADDR_INTERRUPT_FLAG};

bitflags! {
    /// Interrupt bits as laid out in IE ($FFFF) and IF ($FF0F).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Interrupts: u8 {
        const VBLANK = 0x01;
        const LCD_STAT = 0x02;
        const TIMER = 0x04;
        const SERIAL = 0x08;
        const JOYPAD = 0x10;
    }
}

/// The five maskable interrupt sources.
///
/// Declaration order is the service priority for simultaneous requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InterruptSource {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl InterruptSource {
    /// All sources, highest priority first.
    pub const PRIORITY: [InterruptSource; 5] = [
        InterruptSource::VBlank,
        InterruptSource::LcdStat,
        InterruptSource::Timer,
        InterruptSource::Serial,
        InterruptSource::Joypad,
    ];

    #[inline]
    pub fn flag(self) -> Interrupts {
        match self {
            InterruptSource::VBlank => Interrupts::VBLANK,
            InterruptSource::LcdStat => Interrupts::LCD_STAT,
            InterruptSource::Timer => Interrupts::TIMER,
            InterruptSource::Serial => Interrupts::SERIAL,
            InterruptSource::Joypad => Interrupts::JOYPAD,
        }
    }

    #[inline]
    pub fn mask(self) -> u8 {
        self.flag().bits()
    }

    /// Service routine address the CPU jumps to.
    #[inline]
    pub fn vector(self) -> u16 {
        match self {
            InterruptSource::VBlank => 0x0040,
            InterruptSource::LcdStat => 0x0048,
            InterruptSource::Timer => 0x0050,
            InterruptSource::Serial => 0x0058,
            InterruptSource::Joypad => 0x0060,
        }
    }
}

impl Cpu {
    /// Highest-priority source whose enable and pending bits are both set.
    fn select_interrupt<M: Mmu + ?Sized>(&self, mmu: &mut M) -> Option<InterruptSource> {
        InterruptSource::PRIORITY.into_iter().find(|source| {
            let mask = source.mask();
            mmu.read_io_bit(ADDR_INTERRUPT_ENABLE, mask) && mmu.read_io_bit(ADDR_INTERRUPT_FLAG, mask)
        })
    }

    /// Evaluate the interrupt sources and service at most one.
    ///
    /// Any enabled and pending source wakes a halted CPU, even with IME
    /// clear. Servicing additionally needs IME: it clears IME and the
    /// source's IF bit, pushes PC and jumps to the vector. Lower-priority
    /// sources stay pending for a later call.
    ///
    /// Returns `true` if an interrupt was serviced (PC changed).
    pub fn handle_interrupts<M: Mmu + ?Sized>(&mut self, mmu: &mut M) -> bool {
        let Some(source) = self.select_interrupt(mmu) else {
            return false;
        };

        if self.halted {
            log::debug!("GB CPU wake from HALT: {:?} pending (IME={})", source, self.ime);
            self.halted = false;
        }

        if !self.ime {
            return false;
        }

        self.ime = false;
        mmu.write_io_bit(ADDR_INTERRUPT_FLAG, source.mask(), false);

        let pc = self.regs.pc;
        self.push_stack(mmu, pc);
        self.regs.pc = source.vector();

        log::debug!(
            "GB CPU interrupt: {:?} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X}",
            source,
            self.regs.pc,
            pc,
            self.regs.sp,
        );
        true
    }

    /// Raise a source's pending bit in IF.
    pub fn request_interrupt<M: Mmu + ?Sized>(&self, mmu: &mut M, source: InterruptSource) {
        mmu.write_io_bit(ADDR_INTERRUPT_FLAG, source.mask(), true);
    }

    /// Sources that are both enabled and pending (IE & IF).
    pub fn pending_interrupts<M: Mmu + ?Sized>(&self, mmu: &mut M) -> Interrupts {
        let ie = Interrupts::from_bits_truncate(mmu.read(ADDR_INTERRUPT_ENABLE));
        let iflags = Interrupts::from_bits_truncate(mmu.read(ADDR_INTERRUPT_FLAG));
        ie & iflags
    }
}
