//! Console output.
//!
//! `PRN` output is one decimal value per line. Fault reports always go to
//! stderr so they never interleave with program output on stdout.

use std::io::{self, Write};

use crate::common::error::Fault;
use crate::soc::traits::OutputSink;

/// Writes program output to the process console.
#[derive(Clone, Copy, Debug, Default)]
pub struct Console {
    /// When true, values go to stderr instead of stdout.
    to_stderr: bool,
}

impl Console {
    /// Creates a console sink writing values to stdout.
    pub const fn new() -> Self {
        Self { to_stderr: false }
    }

    /// Creates a console sink writing values to stderr.
    pub const fn stderr() -> Self {
        Self { to_stderr: true }
    }
}

impl OutputSink for Console {
    fn print_value(&mut self, value: u8) {
        let result = if self.to_stderr {
            writeln!(io::stderr().lock(), "{value}")
        } else {
            let mut out = io::stdout().lock();
            writeln!(out, "{value}").and_then(|()| out.flush())
        };
        // Write failures are logged and otherwise ignored.
        if let Err(e) = result {
            tracing::warn!(error = %e, value, "console write failed");
        }
    }

    fn report_fault(&mut self, fault: &Fault) {
        if let Err(e) = writeln!(io::stderr().lock(), "{fault}") {
            tracing::warn!(error = %e, %fault, "console write failed");
        }
    }
}

/// Records program output in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureOutput {
    values: Vec<u8>,
    faults: Vec<Fault>,
}

impl CaptureOutput {
    /// Creates an empty capture.
    pub const fn new() -> Self {
        Self {
            values: Vec::new(),
            faults: Vec::new(),
        }
    }

    /// Values printed so far, oldest first.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Faults reported so far, oldest first.
    pub fn faults(&self) -> &[Fault] {
        &self.faults
    }

    /// Removes and returns the printed values.
    pub fn take_values(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.values)
    }
}

impl OutputSink for CaptureOutput {
    fn print_value(&mut self, value: u8) {
        self.values.push(value);
    }

    fn report_fault(&mut self, fault: &Fault) {
        self.faults.push(*fault);
    }
}
