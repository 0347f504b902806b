use super::Cpu;

/// How the external driver paces `Cpu::cycle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunMode {
    /// The driver calls `cycle` continuously.
    #[default]
    Running,
    /// The driver does not call `cycle`.
    Paused,
    /// The driver calls `cycle` exactly once; the CPU demotes itself to
    /// `Paused` afterwards.
    SingleStep,
}

impl Cpu {
    #[inline]
    pub fn run_mode(&self) -> RunMode {
        self.run_mode
    }

    pub fn set_run_mode(&mut self, mode: RunMode) {
        if self.run_mode != mode {
            log::debug!("GB CPU run mode: {:?} -> {:?}", self.run_mode, mode);
        }
        self.run_mode = mode;
    }

    pub fn pause(&mut self) {
        self.set_run_mode(RunMode::Paused);
    }

    pub fn resume(&mut self) {
        self.set_run_mode(RunMode::Running);
    }

    /// Allow exactly one more `cycle` before pausing.
    pub fn request_step(&mut self) {
        self.set_run_mode(RunMode::SingleStep);
    }

    /// Engine-side transition applied at the end of every `cycle`.
    #[inline]
    pub(super) fn finish_run_mode_cycle(&mut self) {
        if self.run_mode == RunMode::SingleStep {
            self.run_mode = RunMode::Paused;
        }
    }
}
