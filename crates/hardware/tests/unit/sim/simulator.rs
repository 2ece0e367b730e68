//! # Simulator Tests
//!
//! Whole-program runs through the clock driver.

use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

use ls8_core::Simulator;
use ls8_core::common::LoadError;
use ls8_core::sim::{RunOutcome, parse_program};
use ls8_core::soc::{CaptureOutput, Ram};
use pretty_assertions::assert_eq;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;
use crate::common::mocks::memory::MockRam;

#[test]
fn test_run_mult_program_from_text() {
    let image = parse_program(
        "10011001\n00000000\n00001000\n10011001\n00000001\n00001001\n\
         10101010\n00000000\n00000001\n01000011\n00000000\n00000001\n",
    )
    .unwrap();
    let mut ctx = TestContext::new().load_program(&image);
    assert_eq!(ctx.run(), RunOutcome::Halted);
    assert_eq!(ctx.output(), &[72]);
    assert!(!ctx.sim.is_running());
}

#[test]
fn test_run_on_halted_cpu_returns_immediately() {
    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().hlt().build());
    assert_eq!(ctx.run(), RunOutcome::Halted);
    let cycles = ctx.sim.stats().cycles;
    assert_eq!(ctx.run(), RunOutcome::Halted);
    assert_eq!(ctx.sim.stats().cycles, cycles);
}

#[test]
fn test_cycle_limit_stops_infinite_loop() {
    // LDI R0,3; JMP R0 -> spins on JMP forever.
    let program = ProgramBuilder::new().ldi(0, 3).jmp(0).build();
    let mut ctx = TestContext::new().load_program(&program);
    ctx.sim.set_max_cycles(Some(50));
    assert_eq!(ctx.run(), RunOutcome::CycleLimit);
    assert_eq!(ctx.sim.stats().cycles, 50);
    assert!(!ctx.cpu().is_halted());
}

#[test]
fn test_stop_handle_from_another_thread() {
    let program = ProgramBuilder::new().ldi(0, 3).jmp(0).build();
    let mut config = TestContext::test_config();
    config.general.max_cycles = None;
    config.system.clock_period_us = 100;
    let mut ctx = TestContext::with_config(&config).load_program(&program);

    let stop = ctx.sim.stop_handle();
    let stopper = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        stop.store(true, Ordering::SeqCst);
    });

    assert_eq!(ctx.run(), RunOutcome::Stopped);
    stopper.join().unwrap();
    assert!(!ctx.sim.is_running());
    assert!(!ctx.cpu().is_halted());
    assert!(!ctx.sim.stop_handle().load(Ordering::SeqCst));
}

#[test]
fn test_start_and_stop_clock() {
    let mut ctx = TestContext::new();
    assert!(!ctx.sim.is_running());
    ctx.sim.start_clock();
    assert!(ctx.sim.is_running());
    ctx.sim.stop_clock();
    assert!(!ctx.sim.is_running());
}

#[test]
fn test_poke_and_peek() {
    let mut ctx = TestContext::new();
    ctx.sim.poke(0x42, 0x99);
    assert_eq!(ctx.sim.peek(0x42), 0x99);
    assert_eq!(ctx.sim.memory().as_slice()[0x42], 0x99);
}

#[test]
fn test_load_program_too_large() {
    let mut ctx = TestContext::new();
    let image = vec![0u8; 257];
    match ctx.sim.load_program(&image) {
        Err(LoadError::ProgramTooLarge { len, capacity, .. }) => {
            assert_eq!(len, 257);
            assert_eq!(capacity, 256);
        }
        other => panic!("expected ProgramTooLarge, got {other:?}"),
    }
}

#[test]
fn test_load_program_at_configured_address() {
    let mut config = TestContext::test_config();
    config.system.load_address = 0x80;
    let program = ProgramBuilder::new().ldi(0, 6).prn(0).hlt().build();
    let mut ctx = TestContext::with_config(&config).load_program(&program);
    assert_eq!(ctx.cpu().pc, 0x80);
    assert_eq!(ctx.run(), RunOutcome::Halted);
    assert_eq!(ctx.output(), &[6]);
}

#[test]
fn test_load_program_uses_memory_load() {
    let image = ProgramBuilder::new().hlt().build();
    let mut mem = MockRam::new();
    let _ = mem.expect_size().return_const(256usize);
    let _ = mem
        .expect_load()
        .withf(|data, base| data == [1u8].as_slice() && *base == 0)
        .times(1)
        .return_const(());

    let mut sim = Simulator::new(mem, CaptureOutput::new(), &TestContext::test_config());
    sim.load_program(&image).unwrap();
}

#[test]
fn test_reset_allows_rerun() {
    let program = ProgramBuilder::new().ldi(0, 4).prn(0).hlt().build();
    let mut ctx = TestContext::new().load_program(&program);
    assert_eq!(ctx.run(), RunOutcome::Halted);
    ctx.sim.reset();
    assert_eq!(ctx.run(), RunOutcome::Halted);
    assert_eq!(ctx.output(), &[4, 4]);
}

#[test]
fn test_with_config_builds_stock_machine() {
    let sim = Simulator::with_config(&ls8_core::Config::default());
    assert_eq!(sim.memory().as_slice().len(), 256);
    assert_eq!(sim.cpu.pc, 0);
    let _: &Ram = sim.memory();
}

#[rstest::rstest]
#[case("mult.ls8", &[72])]
#[case("call.ls8", &[20, 30])]
#[case("stack.ls8", &[2, 1])]
#[case("compare.ls8", &[5])]
fn test_bundled_programs(#[case] name: &str, #[case] expected: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../programs")
        .join(name);
    let image = ls8_core::sim::load_program_file(&path).unwrap();
    let mut ctx = TestContext::new().load_program(&image);
    assert_eq!(ctx.run(), RunOutcome::Halted);
    assert_eq!(ctx.output(), expected);
}
