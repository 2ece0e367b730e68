//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the LS-8 simulator. It provides:
//! 1. **Cycles and throughput:** Ticks, retired instructions, host time, effective clock rate.
//! 2. **Instruction mix:** Counts by category (load, ALU, stack, branch, I/O, system).
//! 3. **Control flow:** How many jumps, calls and returns actually redirected PC.
//! 4. **Faults:** Number of fatal faults raised.

use std::fmt;
use std::time::{Duration, Instant};

use crate::isa::InstructionClass;

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"control"`.
/// Pass an empty slice to [`SimStats::report_sections`] to include all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "control"];

/// Simulation statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total ticks that fetched an instruction (including a faulting one).
    pub cycles: u64,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,

    /// `LDI` instructions retired.
    pub inst_load: u64,
    /// `ADD`/`MUL`/`CMP` instructions retired.
    pub inst_alu: u64,
    /// `PUSH`/`POP` instructions retired.
    pub inst_stack: u64,
    /// `JMP`/`JEQ`/`JNE`/`CALL`/`RET` instructions retired.
    pub inst_branch: u64,
    /// `PRN` instructions retired.
    pub inst_io: u64,
    /// `HLT` instructions retired.
    pub inst_system: u64,

    /// Control-flow instructions that wrote PC.
    pub branches_taken: u64,
    /// Fatal faults raised.
    pub faults: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_alu: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_io: 0,
            inst_system: 0,
            branches_taken: 0,
            faults: 0,
        }
    }
}

impl SimStats {
    /// Records a retired instruction.
    ///
    /// `taken` is true when the instruction wrote PC itself instead of
    /// falling through.
    pub const fn record(&mut self, class: InstructionClass, taken: bool) {
        self.instructions_retired += 1;
        match class {
            InstructionClass::Load => self.inst_load += 1,
            InstructionClass::Alu => self.inst_alu += 1,
            InstructionClass::Stack => self.inst_stack += 1,
            InstructionClass::Branch => self.inst_branch += 1,
            InstructionClass::Io => self.inst_io += 1,
            InstructionClass::System => self.inst_system += 1,
        }
        if taken {
            self.branches_taken += 1;
        }
    }

    /// Host time since these statistics were created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns a displayable report of the requested sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`];
    /// an empty slice selects everything.
    pub const fn report<'a>(&'a self, sections: &'a [&'a str]) -> StatsReport<'a> {
        StatsReport {
            stats: self,
            sections,
        }
    }

    /// Renders the requested sections as text.
    ///
    /// Shorthand for `self.report(sections).to_string()`.
    pub fn report_sections(&self, sections: &[&str]) -> String {
        self.report(sections).to_string()
    }

    /// Prints only the requested sections to stdout.
    pub fn print_sections(&self, sections: &[&str]) {
        print!("{}", self.report(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.report(&[]), f)
    }
}

/// A selection of [`SimStats`] sections, rendered through [`fmt::Display`].
#[derive(Clone, Copy, Debug)]
pub struct StatsReport<'a> {
    stats: &'a SimStats,
    sections: &'a [&'a str],
}

impl StatsReport<'_> {
    fn wants(&self, section: &str) -> bool {
        self.sections.is_empty() || self.sections.contains(&section)
    }
}

impl fmt::Display for StatsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        let seconds = s.elapsed().as_secs_f64().max(f64::EPSILON);
        let instr = s.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "LS-8 SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        if self.wants("summary") {
            let khz = (s.cycles as f64 / seconds) / 1000.0;
            writeln!(f, "host_seconds             {seconds:.4} s")?;
            writeln!(f, "sim_cycles               {}", s.cycles)?;
            writeln!(f, "sim_freq                 {khz:.2} kHz")?;
            writeln!(f, "sim_insts                {}", s.instructions_retired)?;
            writeln!(f, "sim_faults               {}", s.faults)?;
            writeln!(f, "----------------------------------------------------------")?;
        }
        if self.wants("instruction_mix") {
            writeln!(f, "INSTRUCTION MIX")?;
            for (name, n) in [
                ("op.load", s.inst_load),
                ("op.alu", s.inst_alu),
                ("op.stack", s.inst_stack),
                ("op.branch", s.inst_branch),
                ("op.io", s.inst_io),
                ("op.system", s.inst_system),
            ] {
                writeln!(f, "  {name:<22} {n} ({:.2}%)", pct(n))?;
            }
            writeln!(f, "----------------------------------------------------------")?;
        }
        if self.wants("control") {
            let rate = if s.inst_branch > 0 {
                100.0 * (s.branches_taken as f64 / s.inst_branch as f64)
            } else {
                0.0
            };
            writeln!(f, "CONTROL FLOW")?;
            writeln!(f, "  branch.total           {}", s.inst_branch)?;
            writeln!(f, "  branch.taken           {}", s.branches_taken)?;
            writeln!(f, "  branch.taken_rate      {rate:.2}%")?;
        }
        writeln!(f, "==========================================================")
    }
}
