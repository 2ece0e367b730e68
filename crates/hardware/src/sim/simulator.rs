//! Simulator: owns the CPU together with the memory and output sink it runs against.
//!
//! The CPU only borrows its collaborators for one tick at a time, so the
//! simulator keeps them side by side and lends them out on each step.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::common::constants::Addr;
use crate::common::error::{Fault, LoadError};
use crate::config::Config;
use crate::core::{Cpu, CpuState};
use crate::sim::clock::Clock;
use crate::soc::devices::Console;
use crate::soc::memory::Ram;
use crate::soc::traits::{Memory, OutputSink};
use crate::stats::SimStats;

/// Why [`Simulator::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program executed `HLT`.
    Halted,
    /// A stop was requested through the [`Simulator::stop_handle`].
    Stopped,
    /// The configured cycle budget ran out.
    CycleLimit,
    /// The CPU raised a fatal fault.
    Fault(Fault),
}

/// Top-level simulator: CPU, memory, output sink and clock.
#[derive(Debug)]
pub struct Simulator<M = Ram, O = Console> {
    /// CPU architectural state and statistics.
    pub cpu: Cpu,
    mem: M,
    out: O,
    clock: Clock,
    stop: Arc<AtomicBool>,
    load_address: Addr,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates the stock machine described by `config`: RAM of the configured
    /// size and a console on stdout.
    pub fn with_config(config: &Config) -> Self {
        Self::new(Ram::new(config.system.ram_size), Console::new(), config)
    }
}

impl<M: Memory, O: OutputSink> Simulator<M, O> {
    /// Creates a simulator around the given memory and output sink.
    pub fn new(mem: M, out: O, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            mem,
            out,
            clock: Clock::from_micros(config.system.clock_period_us),
            stop: Arc::new(AtomicBool::new(false)),
            load_address: config.system.load_address,
            max_cycles: config.general.max_cycles,
        }
    }

    /// Writes one byte of memory.
    pub fn poke(&mut self, addr: Addr, value: u8) {
        self.mem.write(addr, value);
    }

    /// Reads one byte of memory.
    pub fn peek(&mut self, addr: Addr) -> u8 {
        self.mem.read(addr)
    }

    /// Copies a program image into memory at the load address.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] for an empty image and
    /// [`LoadError::ProgramTooLarge`] if it would run past the end of memory.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.is_empty() {
            return Err(LoadError::Empty);
        }
        let base = self.load_address;
        let capacity = self.mem.size();
        if usize::from(base) + image.len() > capacity {
            return Err(LoadError::ProgramTooLarge {
                len: image.len(),
                base,
                capacity,
            });
        }
        self.mem.load(image, base);
        tracing::debug!(base, bytes = image.len(), "program loaded");
        Ok(())
    }

    /// Executes a single instruction.
    ///
    /// # Errors
    ///
    /// Returns the fault that halted the CPU.
    pub fn tick(&mut self) -> Result<CpuState, Fault> {
        self.cpu.tick(&mut self.mem, &mut self.out)
    }

    /// Starts the clock.
    pub fn start_clock(&mut self) {
        self.clock.start();
    }

    /// Stops the clock.
    pub fn stop_clock(&mut self) {
        self.clock.stop();
    }

    /// Returns true while the clock is running.
    pub const fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Returns a flag another thread can set to stop [`Simulator::run`].
    ///
    /// The flag is checked between instructions and cleared once the run
    /// loop has acted on it.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Starts the clock and executes instructions until the CPU halts, a
    /// stop is requested, or the cycle budget runs out. The clock is stopped
    /// again before returning.
    pub fn run(&mut self) -> RunOutcome {
        self.start_clock();
        let mut ticks: u64 = 0;
        let outcome = loop {
            self.clock.wait_edge();
            if self.stop.swap(false, Ordering::SeqCst) {
                break RunOutcome::Stopped;
            }
            if self.max_cycles.is_some_and(|limit| ticks >= limit) {
                break RunOutcome::CycleLimit;
            }
            match self.tick() {
                Ok(CpuState::Running) => ticks += 1,
                Ok(CpuState::Halted) => break RunOutcome::Halted,
                Err(fault) => break RunOutcome::Fault(fault),
            }
        };
        self.stop_clock();
        tracing::debug!(?outcome, ticks, "run finished");
        outcome
    }

    /// Resets the CPU to its power-on state. Memory is left intact, so the
    /// loaded program can be run again.
    pub fn reset(&mut self) {
        self.stop_clock();
        self.stop.store(false, Ordering::SeqCst);
        self.cpu.reset();
    }

    /// Overrides the cycle budget for [`Simulator::run`].
    pub const fn set_max_cycles(&mut self, max_cycles: Option<u64>) {
        self.max_cycles = max_cycles;
    }

    /// Returns execution statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Returns the attached memory.
    pub const fn memory(&self) -> &M {
        &self.mem
    }

    /// Returns the output sink.
    pub const fn output(&self) -> &O {
        &self.out
    }

    /// Returns the output sink mutably.
    pub const fn output_mut(&mut self) -> &mut O {
        &mut self.out
    }
}
