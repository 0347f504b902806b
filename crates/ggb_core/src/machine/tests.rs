use super::*;
use crate::cpu::InterruptSource;
use crate::memory::FlatMemory;
use crate::{ADDR_INTERRUPT_ENABLE, ADDR_INTERRUPT_FLAG, DEFAULT_ENTRY_POINT};

/// Flat memory with a one-shot timer that raises the timer interrupt once
/// enough cycles have been ticked.
#[derive(Debug, Default)]
struct TimerBus {
    memory: FlatMemory,
    ticks: u64,
    fire_at: Option<u64>,
}

impl Mmu for TimerBus {
    fn read(&mut self, address: u16) -> u8 {
        self.memory.read(address)
    }

    fn write(&mut self, address: u16, value: u8) {
        self.memory.write(address, value);
    }

    fn tick(&mut self, cycles: u32) {
        self.ticks += u64::from(cycles);
        if self.fire_at.is_some_and(|at| self.ticks >= at) {
            self.fire_at = None;
            self.write_io_bit(ADDR_INTERRUPT_FLAG, InterruptSource::Timer.mask(), true);
        }
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn machine_with_program(program: &[u8]) -> Machine<TimerBus> {
    init_logger();
    let mut machine = Machine::<TimerBus>::default();
    machine.mmu.memory.load(DEFAULT_ENTRY_POINT, program);
    machine
}

#[test]
fn step_ticks_mmu_by_instruction_cost() {
    // LD BC,$1234 ; NOP
    let mut machine = machine_with_program(&[0x01, 0x34, 0x12, 0x00]);

    assert_eq!(machine.step().unwrap(), 12);
    assert_eq!(machine.mmu.ticks, 12);
    assert_eq!(machine.cpu.regs.bc(), 0x1234);

    assert_eq!(machine.step().unwrap(), 4);
    assert_eq!(machine.mmu.ticks, 16);
}

#[test]
fn halted_cpu_is_charged_idle_cycles_until_timer_wakes_it() {
    // HALT ; INC A
    let mut machine = machine_with_program(&[0x76, 0x3C]);
    machine.mmu.write(ADDR_INTERRUPT_ENABLE, InterruptSource::Timer.mask());
    machine.mmu.fire_at = Some(40);

    machine.step().unwrap();
    assert!(machine.cpu.halted);

    // Idle until the timer fires; IME is clear so the CPU only wakes.
    let mut idle_steps = 0;
    while machine.cpu.halted {
        assert_eq!(machine.step().unwrap(), HALT_IDLE_CYCLES);
        idle_steps += 1;
        assert!(idle_steps < 100, "timer never woke the CPU");
    }
    assert_eq!(machine.mmu.ticks, 44);
    assert_eq!(machine.cpu.regs.pc, DEFAULT_ENTRY_POINT + 1);

    machine.step().unwrap();
    assert_eq!(machine.cpu.regs.a, 1);
}

#[test]
fn run_does_nothing_while_paused() {
    let mut machine = machine_with_program(&[0x3C, 0x3C]);
    machine.cpu.pause();

    assert_eq!(machine.run(1_000).unwrap(), 0);
    assert_eq!(machine.cpu.regs.pc, DEFAULT_ENTRY_POINT);
    assert_eq!(machine.cpu.regs.a, 0);
    assert_eq!(machine.mmu.ticks, 0);
}

#[test]
fn run_single_step_executes_one_instruction_then_pauses() {
    // INC A ; INC A
    let mut machine = machine_with_program(&[0x3C, 0x3C]);
    machine.cpu.request_step();

    assert_eq!(machine.run(1_000).unwrap(), 4);
    assert_eq!(machine.cpu.regs.a, 1);
    assert_eq!(machine.cpu.run_mode(), RunMode::Paused);

    // Paused now, so a second run is a no-op.
    assert_eq!(machine.run(1_000).unwrap(), 0);
    assert_eq!(machine.cpu.regs.a, 1);
}

#[test]
fn step_frame_spends_one_frame_of_nops() {
    let mut machine = machine_with_program(&[]);

    let elapsed = machine.step_frame().unwrap();
    assert_eq!(elapsed, u64::from(CYCLES_PER_FRAME));
    assert_eq!(machine.mmu.ticks, u64::from(CYCLES_PER_FRAME));
    // 70224 / 4 NOPs.
    assert_eq!(machine.cpu.regs.pc, DEFAULT_ENTRY_POINT + 17_556);
    assert_eq!(machine.cpu.run_mode(), RunMode::Running);
}

#[test]
fn run_may_overshoot_budget_by_last_instruction() {
    // CALL $0200 costs 24; the budget of 10 is exceeded by that one step.
    let mut machine = machine_with_program(&[0xCD, 0x00, 0x02]);

    assert_eq!(machine.run(10).unwrap(), 24);
    assert_eq!(machine.cpu.regs.pc, 0x0200);
}

#[test]
fn run_propagates_illegal_opcode() {
    // NOP ; illegal 0xD3
    let mut machine = machine_with_program(&[0x00, 0xD3]);

    let err = machine.run(1_000).unwrap_err();
    assert_eq!(
        err,
        CpuError::IllegalOpcode {
            opcode: 0xD3,
            prefixed: false,
            address: DEFAULT_ENTRY_POINT + 1,
        }
    );
    // Only the NOP reached the MMU.
    assert_eq!(machine.mmu.ticks, 4);
    assert!(machine.cpu.is_locked());

    machine.reset();
    assert!(!machine.cpu.is_locked());
    assert_eq!(machine.cpu.regs.pc, DEFAULT_ENTRY_POINT);
}
