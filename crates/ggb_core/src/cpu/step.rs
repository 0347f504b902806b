use super::{Cpu, CpuError, Mmu};

impl Cpu {
    /// Execute one CPU cycle and return the number of T-cycles taken.
    ///
    /// One cycle is: run the pipelined instruction (unless halted), evaluate
    /// interrupts, re-prime the lookahead if an interrupt moved PC, then
    /// apply the run-mode transition. Returns 0 when halted. Interrupt
    /// entry adds no cycles to the count.
    pub fn cycle<M: Mmu>(&mut self, mmu: &mut M) -> Result<u32, CpuError> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }

        let mut cycles = 0;
        if !self.halted {
            cycles = self.execute_next(mmu)?;
        }

        if self.handle_interrupts(mmu) {
            self.prime_next(mmu);
        }

        self.finish_run_mode_cycle();
        Ok(cycles)
    }

    fn execute_next<M: Mmu>(&mut self, mmu: &mut M) -> Result<u32, CpuError> {
        let next = match self.next.take() {
            Some(next) => next,
            None => self.decode(mmu, self.regs.pc),
        };
        let instr = match next {
            Ok(instr) => instr,
            Err(err) => return Err(self.lock(err)),
        };

        log::trace!("GB CPU 0x{:04X}: {}", instr.address, instr);

        // PC moves past the whole instruction before the effect runs, so
        // relative jumps and return addresses see the post-fetch address.
        self.regs.pc = self
            .regs
            .pc
            .wrapping_add(u16::from(instr.definition.length));
        self.current = Some(instr);

        let cycles = (instr.definition.execute)(self, mmu, &instr);

        self.prime_next(mmu);
        Ok(cycles)
    }

    fn lock(&mut self, err: CpuError) -> CpuError {
        log::error!(
            "GB CPU locked: {} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            err,
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        self.fault = Some(err.clone());
        err
    }
}
