use super::*;
use crate::{ADDR_INTERRUPT_ENABLE, ADDR_INTERRUPT_FLAG, DEFAULT_ENTRY_POINT, DEFAULT_STACK_POINTER};

struct TestBus {
    memory: [u8; 0x10000],
    /// Every address read, in order.
    reads: Vec<u16>,
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
            reads: Vec::new(),
        }
    }
}

impl Mmu for TestBus {
    fn read(&mut self, address: u16) -> u8 {
        self.reads.push(address);
        self.memory[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.memory[address as usize] = value;
    }
}

impl TestBus {
    fn with_program(at: u16, program: &[u8]) -> Self {
        let mut bus = Self::default();
        let start = at as usize;
        bus.memory[start..start + program.len()].copy_from_slice(program);
        bus
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn cpu_at(pc: u16) -> Cpu {
    init_logger();
    Cpu::with_config(CpuConfig::builder().entry_point(pc).build())
}

#[test]
fn nop_advances_pc_and_costs_four_cycles() {
    let mut cpu = cpu_at(0x0200);
    let mut bus = TestBus::with_program(0x0200, &[0x00]);
    let before = cpu.regs;

    let cycles = cpu.cycle(&mut bus).unwrap();

    assert_eq!(cycles, 4);
    assert_eq!(cpu.regs.pc, 0x0201);
    assert_eq!(Registers { pc: before.pc, ..cpu.regs }, before);
}

#[test]
fn default_config_matches_post_boot_state() {
    init_logger();
    let cpu = Cpu::new();
    assert_eq!(cpu.regs.pc, DEFAULT_ENTRY_POINT);
    assert_eq!(cpu.regs.sp, DEFAULT_STACK_POINTER);
    assert!(!cpu.ime);
    assert!(!cpu.halted);
    assert_eq!(cpu.run_mode(), RunMode::Running);
    assert!(cpu.current_instruction().is_none());
    assert!(cpu.next_instruction().is_none());
}

#[test]
fn pc_advance_happens_before_relative_jump() {
    // JR +2 at 0x0100: target is 0x0102 + 2, not 0x0100 + 2.
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::with_program(0x0100, &[0x18, 0x02]);

    assert_eq!(cpu.cycle(&mut bus).unwrap(), 12);
    assert_eq!(cpu.regs.pc, 0x0104);
}

#[test]
fn call_pushes_address_after_the_instruction() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::with_program(0x0100, &[0xCD, 0x34, 0x12]);

    assert_eq!(cpu.cycle(&mut bus).unwrap(), 24);
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.regs.sp, DEFAULT_STACK_POINTER - 2);
    assert_eq!(cpu.pop_stack(&mut bus), 0x0103);
}

#[test]
fn call_then_ret_returns_to_caller() {
    let mut cpu = cpu_at(0x0100);
    // CALL $0200 ; INC A
    let mut bus = TestBus::with_program(0x0100, &[0xCD, 0x00, 0x02, 0x3C]);
    // RET
    bus.memory[0x0200] = 0xC9;

    cpu.cycle(&mut bus).unwrap();
    assert_eq!(cpu.cycle(&mut bus).unwrap(), 16);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.sp, DEFAULT_STACK_POINTER);

    cpu.cycle(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 1);
}

#[test]
fn stack_round_trip_restores_sp() {
    init_logger();
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();

    for value in [0x0000, 0x00FF, 0xBEEF, 0xFFFF] {
        let sp = cpu.regs.sp;
        cpu.push_stack(&mut bus, value);
        assert_eq!(cpu.regs.sp, sp - 2);
        assert_eq!(cpu.pop_stack(&mut bus), value);
        assert_eq!(cpu.regs.sp, sp);
    }
}

#[test]
fn push_stack_layout_is_high_byte_above_low() {
    init_logger();
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    cpu.regs.sp = 0xD000;

    cpu.push_stack(&mut bus, 0xABCD);

    assert_eq!(cpu.regs.sp, 0xCFFE);
    assert_eq!(bus.memory[0xCFFF], 0xAB);
    assert_eq!(bus.memory[0xCFFE], 0xCD);
}

#[test]
fn stack_wraps_at_address_zero() {
    init_logger();
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    cpu.regs.sp = 0x0001;

    cpu.push_stack(&mut bus, 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFF);
    assert_eq!(bus.memory[0x0000], 0x12);
    assert_eq!(bus.memory[0xFFFF], 0x34);
    assert_eq!(cpu.pop_stack(&mut bus), 0x1234);
    assert_eq!(cpu.regs.sp, 0x0001);
}

#[test]
fn single_step_pauses_after_one_cycle() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();

    cpu.request_step();
    cpu.cycle(&mut bus).unwrap();
    assert_eq!(cpu.run_mode(), RunMode::Paused);
}

#[test]
fn running_and_paused_are_stable_across_cycles() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();

    for _ in 0..3 {
        cpu.cycle(&mut bus).unwrap();
        assert_eq!(cpu.run_mode(), RunMode::Running);
    }

    // The engine does not consult the mode; pacing is up to the driver.
    cpu.pause();
    cpu.cycle(&mut bus).unwrap();
    assert_eq!(cpu.run_mode(), RunMode::Paused);

    cpu.resume();
    assert_eq!(cpu.run_mode(), RunMode::Running);
}

#[test]
fn highest_priority_interrupt_is_serviced_first() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();
    cpu.ime = true;
    // Timer, Serial and LCD STAT all enabled and pending.
    bus.memory[ADDR_INTERRUPT_ENABLE as usize] = 0x1F;
    bus.memory[ADDR_INTERRUPT_FLAG as usize] = 0x0E;

    // NOP at 0x0100, then service.
    assert_eq!(cpu.cycle(&mut bus).unwrap(), 4);

    assert_eq!(cpu.regs.pc, InterruptSource::LcdStat.vector());
    assert!(!cpu.ime);
    assert_eq!(bus.memory[ADDR_INTERRUPT_FLAG as usize], 0x0C);
    assert_eq!(cpu.pop_stack(&mut bus), 0x0101);
}

#[test]
fn remaining_interrupts_stay_pending_until_ime_is_set_again() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();
    cpu.ime = true;
    bus.memory[ADDR_INTERRUPT_ENABLE as usize] = 0x1F;
    bus.memory[ADDR_INTERRUPT_FLAG as usize] = 0x05;

    cpu.cycle(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0x0040);

    // IME is now clear: the timer request waits.
    cpu.cycle(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0x0041);
    assert_eq!(bus.memory[ADDR_INTERRUPT_FLAG as usize], 0x04);

    cpu.ime = true;
    cpu.cycle(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, InterruptSource::Timer.vector());
    assert_eq!(bus.memory[ADDR_INTERRUPT_FLAG as usize], 0x00);
}

#[test]
fn disabled_sources_are_ignored() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();
    cpu.ime = true;
    bus.memory[ADDR_INTERRUPT_ENABLE as usize] = InterruptSource::Joypad.mask();
    bus.memory[ADDR_INTERRUPT_FLAG as usize] = InterruptSource::VBlank.mask();

    cpu.cycle(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0x0101);
    assert!(cpu.ime);
}

#[test]
fn halt_wakes_without_service_when_ime_clear() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::with_program(0x0100, &[0x76]);

    cpu.cycle(&mut bus).unwrap();
    assert!(cpu.halted);
    assert_eq!(cpu.cycle(&mut bus).unwrap(), 0);
    assert!(cpu.halted);

    bus.memory[ADDR_INTERRUPT_ENABLE as usize] = InterruptSource::Timer.mask();
    bus.memory[ADDR_INTERRUPT_FLAG as usize] = InterruptSource::Timer.mask();
    let (pc, sp) = (cpu.regs.pc, cpu.regs.sp);

    assert_eq!(cpu.cycle(&mut bus).unwrap(), 0);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, pc);
    assert_eq!(cpu.regs.sp, sp);
    assert_eq!(bus.memory[ADDR_INTERRUPT_FLAG as usize], InterruptSource::Timer.mask());
}

#[test]
fn halt_wakes_and_services_when_ime_set() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::with_program(0x0100, &[0x76]);
    cpu.ime = true;

    cpu.cycle(&mut bus).unwrap();
    assert!(cpu.halted);

    cpu.request_interrupt(&mut bus, InterruptSource::Serial);
    bus.memory[ADDR_INTERRUPT_ENABLE as usize] = InterruptSource::Serial.mask();

    assert_eq!(cpu.cycle(&mut bus).unwrap(), 0);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0058);
    assert_eq!(cpu.pop_stack(&mut bus), 0x0101);
}

#[test]
fn lookahead_is_reprimed_after_interrupt_service() {
    let mut cpu = cpu_at(0x0100);
    // NOP ; INC A
    let mut bus = TestBus::with_program(0x0100, &[0x00, 0x3C]);
    // INC B at the VBlank vector.
    bus.memory[0x0040] = 0x04;
    cpu.ime = true;
    bus.memory[ADDR_INTERRUPT_ENABLE as usize] = 0x01;
    bus.memory[ADDR_INTERRUPT_FLAG as usize] = 0x01;

    cpu.cycle(&mut bus).unwrap();
    let next = cpu.next_instruction().unwrap();
    assert_eq!(next.address, 0x0040);
    assert_eq!(next.opcode, 0x04);

    cpu.cycle(&mut bus).unwrap();
    assert_eq!(cpu.regs.b, 1);
    assert_eq!(cpu.regs.a, 0);
}

#[test]
fn reti_returns_and_enables_interrupts() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::with_program(0x0100, &[0xD9]);
    cpu.push_stack(&mut bus, 0x4321);

    assert_eq!(cpu.cycle(&mut bus).unwrap(), 16);
    assert_eq!(cpu.regs.pc, 0x4321);
    assert!(cpu.ime);
}

#[test]
fn illegal_opcode_locks_cpu_until_reset() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::with_program(0x0100, &[0xDD]);
    let expected = CpuError::IllegalOpcode {
        opcode: 0xDD,
        prefixed: false,
        address: 0x0100,
    };

    assert_eq!(cpu.cycle(&mut bus).unwrap_err(), expected);
    assert!(cpu.is_locked());
    assert_eq!(cpu.regs.pc, 0x0100);

    // Replacing the byte does not revive a locked CPU.
    bus.memory[0x0100] = 0x00;
    assert_eq!(cpu.cycle(&mut bus).unwrap_err(), expected);

    cpu.reset();
    assert!(!cpu.is_locked());
    cpu.jump(0x0100);
    assert_eq!(cpu.cycle(&mut bus).unwrap(), 4);
}

#[test]
fn undispatched_illegal_lookahead_does_not_raise() {
    let mut cpu = cpu_at(0x0100);
    // NOP ; illegal byte right behind it
    let mut bus = TestBus::with_program(0x0100, &[0x00, 0xFC]);

    // The lookahead already holds the failed decode of 0xFC.
    assert_eq!(cpu.cycle(&mut bus).unwrap(), 4);
    assert!(!cpu.is_locked());
    assert!(cpu.next_instruction().is_none());

    cpu.jump(0x0200);
    assert_eq!(cpu.cycle(&mut bus).unwrap(), 4);
    assert_eq!(cpu.regs.pc, 0x0201);
    assert!(!cpu.is_locked());
}

#[test]
fn illegal_lookahead_is_discarded_by_interrupt() {
    let mut cpu = cpu_at(0x0100);
    // NOP ; illegal
    let mut bus = TestBus::with_program(0x0100, &[0x00, 0xE4]);
    cpu.ime = true;
    bus.memory[ADDR_INTERRUPT_ENABLE as usize] = 0x01;
    bus.memory[ADDR_INTERRUPT_FLAG as usize] = 0x01;

    cpu.cycle(&mut bus).unwrap();
    assert_eq!(cpu.regs.pc, 0x0040);
    // NOP at the vector executes normally.
    assert_eq!(cpu.cycle(&mut bus).unwrap(), 4);
    assert!(!cpu.is_locked());
}

#[test]
fn jump_discards_stale_lookahead() {
    let mut cpu = cpu_at(0x0100);
    // INC A ; INC A
    let mut bus = TestBus::with_program(0x0100, &[0x3C, 0x3C]);
    // INC B
    bus.memory[0x0300] = 0x04;

    cpu.cycle(&mut bus).unwrap();
    assert_eq!(cpu.next_instruction().unwrap().address, 0x0101);

    cpu.jump(0x0300);
    assert!(cpu.next_instruction().is_none());
    cpu.cycle(&mut bus).unwrap();
    assert_eq!(cpu.regs.a, 1);
    assert_eq!(cpu.regs.b, 1);
}

#[test]
fn current_instruction_tracks_last_executed() {
    let mut cpu = cpu_at(0x0100);
    // LD A,$42 ; NOP
    let mut bus = TestBus::with_program(0x0100, &[0x3E, 0x42, 0x00]);

    cpu.cycle(&mut bus).unwrap();
    let current = cpu.current_instruction().unwrap();
    assert_eq!(current.address, 0x0100);
    assert_eq!(current.d8(), 0x42);
    assert_eq!(current.to_string(), "LD A,$42");
    assert_eq!(cpu.next_instruction().unwrap().address, 0x0102);
}

#[test]
fn decode_reads_each_byte_once() {
    init_logger();
    let cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0100, &[0xCB, 0x7C]);

    let instr = cpu.decode(&mut bus, 0x0100).unwrap();

    assert!(instr.prefixed);
    assert_eq!(instr.code(), 0x7C);
    assert_eq!(instr.length(), 2);
    assert_eq!(bus.reads, vec![0x0100, 0x0101]);
}

#[test]
fn decode_does_not_read_immediates_of_illegal_entries() {
    init_logger();
    let cpu = Cpu::new();
    let mut bus = TestBus::with_program(0x0100, &[0xED, 0x11, 0x22]);

    assert!(cpu.decode(&mut bus, 0x0100).is_err());
    assert_eq!(bus.reads, vec![0x0100]);
}

#[test]
fn decode_wraps_immediates_past_end_of_memory() {
    init_logger();
    let cpu = Cpu::new();
    let mut bus = TestBus::default();
    // LD BC,d16 at 0xFFFF; operands come from 0x0000 and 0x0001.
    bus.memory[0xFFFF] = 0x01;
    bus.memory[0x0000] = 0xCD;
    bus.memory[0x0001] = 0xAB;

    let instr = cpu.decode(&mut bus, 0xFFFF).unwrap();
    assert_eq!(instr.d16(), 0xABCD);
}

#[test]
fn pending_interrupts_reports_enabled_requests() {
    init_logger();
    let cpu = Cpu::new();
    let mut bus = TestBus::default();
    bus.memory[ADDR_INTERRUPT_ENABLE as usize] = 0x05;

    cpu.request_interrupt(&mut bus, InterruptSource::Timer);
    cpu.request_interrupt(&mut bus, InterruptSource::Joypad);

    assert_eq!(bus.memory[ADDR_INTERRUPT_FLAG as usize], 0x14);
    assert_eq!(cpu.pending_interrupts(&mut bus), Interrupts::TIMER);
}

#[test]
fn config_sets_initial_state_and_reset_restores_it() {
    init_logger();
    let config = CpuConfig::builder()
        .entry_point(0x0000)
        .stack_pointer(0xDFFF)
        .interrupts_enabled(true)
        .run_mode(RunMode::Paused)
        .build();
    let mut cpu = Cpu::with_config(config);
    let mut bus = TestBus::with_program(0x0000, &[0x3C]);

    assert_eq!(cpu.regs.sp, 0xDFFF);
    assert!(cpu.ime);
    assert_eq!(cpu.run_mode(), RunMode::Paused);

    cpu.resume();
    cpu.cycle(&mut bus).unwrap();
    cpu.ime = false;
    assert_eq!(cpu.regs.a, 1);

    cpu.reset();
    assert_eq!(cpu.regs.pc, 0x0000);
    assert_eq!(cpu.regs.a, 0);
    assert!(cpu.ime);
    assert_eq!(cpu.run_mode(), RunMode::Paused);
}

#[test]
fn custom_instruction_set_is_dispatched() {
    init_logger();

    fn exec_load_a_ff(cpu: &mut Cpu, _mmu: &mut dyn Mmu, _instr: &ParsedInstruction) -> u32 {
        cpu.regs.a = 0xFF;
        7
    }

    let mut base = INSTRUCTION_SET.base;
    base[0x00] = crate::InstructionDefinition::new("LDFF", 1, 7, exec_load_a_ff);
    let set: &'static InstructionSet =
        Box::leak(Box::new(InstructionSet::new(base, INSTRUCTION_SET.prefixed)));

    let mut cpu = Cpu::with_config(CpuConfig::builder().instruction_set(set).build());
    let mut bus = TestBus::default();

    assert_eq!(cpu.cycle(&mut bus).unwrap(), 7);
    assert_eq!(cpu.regs.a, 0xFF);
    assert_eq!(cpu.regs.pc, DEFAULT_ENTRY_POINT + 1);
}
