//! Integration tests driving full programs through the pipeline.

use mips_emulator::core::Processor;
use mips_emulator::isa::abi::*;
use mips_emulator::isa::encode::*;

/// Loads a program at address 0 and runs it to completion.
fn run_program(program: &[u32], max_cycles: u64) -> Processor {
    let mut cpu = Processor::default();
    cpu.load_program(program, 0);
    cpu.run(max_cycles);
    cpu
}

/// Tests initial processor state.
#[test]
fn test_processor_initial_state() {
    let cpu = Processor::new(64, 64);
    assert_eq!(cpu.pc, 0);
    assert_eq!(cpu.registers(), [0; 32]);
    assert_eq!(cpu.stats.cycles, 0);
}

/// Tests simple back-to-back arithmetic.
#[test]
fn test_simple_arithmetic() {
    let program = [
        addi(REG_T0, REG_ZERO, 5),
        addi(REG_T1, REG_ZERO, 3),
        add(REG_T2, REG_T0, REG_T1),
        nop(),
        nop(),
        nop(),
    ];
    let cpu = run_program(&program, 20);

    let regs = cpu.registers();
    assert_eq!(regs[REG_T0], 5);
    assert_eq!(regs[REG_T1], 3);
    assert_eq!(regs[REG_T2], 8);
    assert_eq!(cpu.stats.instructions_retired, 3);
    assert_eq!(cpu.stats.stalls, 0);
}

/// Tests load, dependent arithmetic, and store.
#[test]
fn test_load_store() {
    let mut cpu = Processor::default();
    cpu.data_mem.write(0, 42);

    let program = [
        lw(REG_T0, 0, REG_ZERO),
        addi(REG_T1, REG_T0, 10),
        sw(REG_T1, 8, REG_ZERO),
        nop(),
        nop(),
        nop(),
    ];
    cpu.load_program(&program, 0);
    cpu.run(20);

    let regs = cpu.registers();
    assert_eq!(regs[REG_T0], 42);
    assert_eq!(regs[REG_T1], 52);
    assert_eq!(cpu.data_mem.read(8), 52);
    // LW -> ADDI is a load-use hazard.
    assert_eq!(cpu.stats.stalls, 1);
    assert_eq!(cpu.stats.loads, 1);
    assert_eq!(cpu.stats.stores, 1);
    assert_eq!(cpu.stats.instructions_retired, 2);
}

/// Tests that a taken branch squashes the speculatively fetched path.
#[test]
fn test_branch_taken() {
    let program = [
        addi(REG_T0, REG_ZERO, 5),
        addi(REG_T1, REG_ZERO, 5),
        beq(REG_T0, REG_T1, 2),
        addi(REG_T2, REG_ZERO, 99),
        addi(REG_T3, REG_ZERO, 88),
        addi(REG_T4, REG_ZERO, 77),
        nop(),
        nop(),
        nop(),
    ];
    let cpu = run_program(&program, 30);

    let regs = cpu.registers();
    assert_eq!(regs[REG_T0], 5);
    assert_eq!(regs[REG_T1], 5);
    assert_eq!(regs[REG_T2], 0, "squashed instruction must not retire");
    assert_eq!(regs[REG_T3], 0, "squashed instruction must not retire");
    assert_eq!(regs[REG_T4], 77);
    assert_eq!(cpu.stats.branches_taken, 1);
    assert_eq!(cpu.stats.instructions_retired, 3);
}

/// Tests that a not-taken branch falls through untouched.
#[test]
fn test_branch_not_taken() {
    let program = [
        addi(REG_T0, REG_ZERO, 5),
        addi(REG_T1, REG_ZERO, 6),
        beq(REG_T0, REG_T1, 2),
        addi(REG_T2, REG_ZERO, 99),
        nop(),
        nop(),
        nop(),
    ];
    let cpu = run_program(&program, 20);

    assert_eq!(cpu.registers()[REG_T2], 99);
    assert_eq!(cpu.stats.branches_taken, 0);
}

/// Tests BNE with unequal operands.
#[test]
fn test_bne_taken() {
    let program = [
        addi(REG_T0, REG_ZERO, 1),
        addi(REG_T1, REG_ZERO, 2),
        bne(REG_T0, REG_T1, 2),
        addi(REG_T2, REG_ZERO, 99),
        addi(REG_T3, REG_ZERO, 88),
        addi(REG_T4, REG_ZERO, 77),
        nop(),
        nop(),
        nop(),
    ];
    let cpu = run_program(&program, 30);

    let regs = cpu.registers();
    assert_eq!(regs[REG_T2], 0);
    assert_eq!(regs[REG_T3], 0);
    assert_eq!(regs[REG_T4], 77);
    assert_eq!(cpu.stats.branches_taken, 1);
}

/// Tests that forwarding resolves a dependency chain with zero stalls.
#[test]
fn test_forwarding_chain() {
    let program = [
        addi(REG_T0, REG_ZERO, 10),
        addi(REG_T1, REG_T0, 5),
        add(REG_T2, REG_T1, REG_T0),
        nop(),
        nop(),
        nop(),
    ];
    let cpu = run_program(&program, 20);

    let regs = cpu.registers();
    assert_eq!(regs[REG_T0], 10);
    assert_eq!(regs[REG_T1], 15);
    assert_eq!(regs[REG_T2], 25);
    assert_eq!(cpu.stats.stalls, 0);
}

/// Tests a store consuming a just-loaded value (stall plus store-data
/// forwarding).
#[test]
fn test_store_after_load() {
    let mut cpu = Processor::default();
    cpu.data_mem.write(0, 1234);

    let program = [
        lw(REG_T0, 0, REG_ZERO),
        sw(REG_T0, 4, REG_ZERO),
        nop(),
        nop(),
        nop(),
    ];
    cpu.load_program(&program, 0);
    cpu.run(20);

    assert_eq!(cpu.data_mem.read(4), 1234);
    assert_eq!(cpu.stats.stalls, 1);
}

/// Tests the immediate ALU operations through the pipeline.
#[test]
fn test_immediate_ops() {
    let program = [
        addi(REG_T0, REG_ZERO, 12),
        andi(REG_T1, REG_T0, 10),
        ori(REG_T2, REG_T0, 3),
        slti(REG_T3, REG_T0, 20),
        slti(REG_T4, REG_T0, 5),
        nop(),
        nop(),
        nop(),
    ];
    let cpu = run_program(&program, 20);

    let regs = cpu.registers();
    assert_eq!(regs[REG_T1], 8);
    assert_eq!(regs[REG_T2], 15);
    assert_eq!(regs[REG_T3], 1);
    assert_eq!(regs[REG_T4], 0);
}

/// Tests the R-type operations through the pipeline.
#[test]
fn test_r_type_ops() {
    let program = [
        addi(REG_T0, REG_ZERO, 13),
        addi(REG_T1, REG_ZERO, 7),
        sub(REG_T2, REG_T0, REG_T1),
        and(REG_T3, REG_T0, REG_T1),
        or(REG_T4, REG_T0, REG_T1),
        slt(REG_T5, REG_T1, REG_T0),
        nor(REG_T6, REG_T0, REG_T1),
        nop(),
        nop(),
        nop(),
    ];
    let cpu = run_program(&program, 30);

    let regs = cpu.registers();
    assert_eq!(regs[REG_T2], 6);
    assert_eq!(regs[REG_T3], 5);
    assert_eq!(regs[REG_T4], 15);
    assert_eq!(regs[REG_T5], 1);
    assert_eq!(regs[REG_T6], !15);
    assert_eq!(cpu.stats.stalls, 0);
}

/// Tests that writes targeting register 0 never become observable.
#[test]
fn test_zero_register_immune() {
    let program = [
        addi(REG_T0, REG_ZERO, 7),
        addi(REG_ZERO, REG_ZERO, 55),
        add(REG_ZERO, REG_T0, REG_T0),
        nop(),
        nop(),
        nop(),
    ];
    let cpu = run_program(&program, 20);

    assert_eq!(cpu.registers()[REG_ZERO], 0);
    assert_eq!(cpu.registers()[REG_T0], 7);
}

/// Tests that a taken branch costs exactly three retirements compared to
/// the same program falling through.
#[test]
fn test_branch_squash_cost() {
    let body = |t1_val: i16| {
        [
            addi(REG_T0, REG_ZERO, 5),
            addi(REG_T1, REG_ZERO, t1_val),
            beq(REG_T0, REG_T1, 3),
            addi(REG_T2, REG_ZERO, 99),
            addi(REG_T3, REG_ZERO, 88),
            addi(REG_T4, REG_ZERO, 77),
            addi(REG_T5, REG_ZERO, 66),
            nop(),
            nop(),
            nop(),
        ]
    };

    let taken = run_program(&body(5), 30);
    let fall_through = run_program(&body(6), 30);

    assert_eq!(taken.stats.branches_taken, 1);
    assert_eq!(fall_through.stats.branches_taken, 0);
    assert_eq!(
        fall_through.stats.instructions_retired - taken.stats.instructions_retired,
        3
    );
}

/// Tests that a NOP between a load and its consumer removes the stall
/// without costing a cycle.
#[test]
fn test_stall_removed_by_nop() {
    let hazard = [
        lw(REG_T0, 0, REG_ZERO),
        addi(REG_T1, REG_T0, 1),
        nop(),
        nop(),
        nop(),
    ];
    let padded = [
        lw(REG_T0, 0, REG_ZERO),
        nop(),
        addi(REG_T1, REG_T0, 1),
        nop(),
        nop(),
        nop(),
    ];

    let with_stall = run_program(&hazard, 30);
    let without_stall = run_program(&padded, 30);

    assert_eq!(with_stall.stats.stalls, 1);
    assert_eq!(without_stall.stats.stalls, 0);
    assert_eq!(with_stall.stats.cycles, without_stall.stats.cycles);
}

/// Tests that rerunning an idle pipeline changes no architectural state.
#[test]
fn test_idle_rerun_preserves_state() {
    let program = [
        addi(REG_T0, REG_ZERO, 5),
        sw(REG_T0, 0, REG_ZERO),
        nop(),
        nop(),
        nop(),
    ];
    let mut cpu = run_program(&program, 50);

    let regs = cpu.registers();
    let pc = cpu.pc;
    let mem0 = cpu.data_mem.read(0);
    let cycles = cpu.stats.cycles;

    cpu.run(50);

    assert_eq!(cpu.registers(), regs);
    assert_eq!(cpu.pc, pc);
    assert_eq!(cpu.data_mem.read(0), mem0);
    assert_eq!(cpu.stats.cycles, cycles);
}

/// Tests that jumps are decoded but never redirect the PC.
#[test]
fn test_jump_decoded_not_executed() {
    let program = [j(0x100), addi(REG_T0, REG_ZERO, 7), nop(), nop(), nop()];
    let cpu = run_program(&program, 20);

    // Execution fell through the jump.
    assert_eq!(cpu.registers()[REG_T0], 7);
    assert_eq!(cpu.stats.instructions_retired, 1);
}

/// Tests that an exhausted cycle budget suspends rather than aborts.
#[test]
fn test_cycle_budget_resumes() {
    let program = [
        addi(REG_T0, REG_ZERO, 1),
        addi(REG_T1, REG_ZERO, 2),
        addi(REG_T2, REG_ZERO, 3),
        nop(),
        nop(),
        nop(),
    ];
    let mut cpu = Processor::default();
    cpu.load_program(&program, 0);

    cpu.run(3);
    assert_eq!(cpu.stats.cycles, 3);
    assert_eq!(cpu.registers()[REG_T2], 0, "third add cannot have retired yet");

    cpu.run(100);
    assert_eq!(cpu.registers()[REG_T0], 1);
    assert_eq!(cpu.registers()[REG_T1], 2);
    assert_eq!(cpu.registers()[REG_T2], 3);
}

/// Tests the statistics summary view.
#[test]
fn test_statistics_summary() {
    let program = [
        addi(REG_T0, REG_ZERO, 5),
        addi(REG_T1, REG_ZERO, 3),
        nop(),
        nop(),
        nop(),
    ];
    let cpu = run_program(&program, 20);

    let summary = cpu.stats.summary();
    assert_eq!(summary.cycles, cpu.stats.cycles);
    assert_eq!(summary.instructions, 2);
    assert_eq!(summary.stalls, 0);
    let expected = cpu.stats.cycles as f64 / 2.0;
    assert!((summary.cpi - expected).abs() < 1e-9);
}
