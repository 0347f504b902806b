use crate::cpu::{Cpu, CpuError, Mmu, RunMode};
use crate::{CYCLES_PER_FRAME, HALT_IDLE_CYCLES};

/// A CPU wired to a memory map.
///
/// Owns both halves and is the entry point hosts drive: it honours the CPU's
/// [`RunMode`] and forwards elapsed time to the MMU through [`Mmu::tick`] so
/// timers and video can raise interrupts.
#[derive(Debug)]
pub struct Machine<M: Mmu> {
    pub cpu: Cpu,
    pub mmu: M,
}

impl<M: Mmu + Default> Default for Machine<M> {
    fn default() -> Self {
        Self::new(Cpu::new(), M::default())
    }
}

impl<M: Mmu> Machine<M> {
    pub fn new(cpu: Cpu, mmu: M) -> Self {
        Self { cpu, mmu }
    }

    /// Run one CPU cycle and tick the MMU by the time it took.
    ///
    /// A halted CPU reports no cycles; the machine still charges
    /// `HALT_IDLE_CYCLES` so peripherals keep running and can eventually
    /// raise the interrupt that wakes it.
    pub fn step(&mut self) -> Result<u32, CpuError> {
        let cycles = self.cpu.cycle(&mut self.mmu)?;
        let elapsed = if cycles == 0 { HALT_IDLE_CYCLES } else { cycles };
        self.mmu.tick(elapsed);
        Ok(elapsed)
    }

    /// Run for up to `budget` T-cycles and return the cycles actually spent.
    ///
    /// `Paused` runs nothing and `SingleStep` runs exactly one step.
    /// `Running` stops once the budget is used up or the run mode is changed
    /// from outside `Running`. The last instruction may overshoot the
    /// budget.
    pub fn run(&mut self, budget: u64) -> Result<u64, CpuError> {
        match self.cpu.run_mode() {
            RunMode::Paused => Ok(0),
            RunMode::SingleStep => self.step().map(u64::from),
            RunMode::Running => {
                let mut elapsed = 0u64;
                while elapsed < budget && self.cpu.run_mode() == RunMode::Running {
                    elapsed += u64::from(self.step()?);
                }
                Ok(elapsed)
            }
        }
    }

    /// Advance by one frame's worth of T-cycles.
    pub fn step_frame(&mut self) -> Result<u64, CpuError> {
        self.run(u64::from(CYCLES_PER_FRAME))
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
    }
}

#[cfg(test)]
mod tests;
