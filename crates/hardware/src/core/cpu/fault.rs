//! Fault handling.
//!
//! A fault is fatal: it is logged, handed to the output sink, recorded on the
//! CPU, and the CPU halts. PC is left pointing at the faulting instruction.

use super::{Cpu, CpuState};
use crate::common::error::Fault;
use crate::soc::traits::OutputSink;

impl Cpu {
    /// Reports `fault` and halts the CPU.
    ///
    /// Returns the fault so callers can propagate it with `?` or `map_err`.
    pub fn raise<O: OutputSink + ?Sized>(&mut self, fault: Fault, out: &mut O) -> Fault {
        tracing::error!(pc = fault.pc(), %fault, "fatal fault, halting");
        out.report_fault(&fault);
        self.state = CpuState::Halted;
        self.last_fault = Some(fault);
        self.stats.faults += 1;
        fault
    }

    /// Resolves a register operand to its value.
    ///
    /// # Errors
    ///
    /// [`Fault::InvalidRegister`] if `operand` is not in `0..8`.
    pub(crate) fn reg(&self, operand: u8) -> Result<u8, Fault> {
        self.regs.get(operand).ok_or(Fault::InvalidRegister {
            index: operand,
            pc: self.pc,
        })
    }

    /// Resolves a register operand for writing.
    ///
    /// # Errors
    ///
    /// [`Fault::InvalidRegister`] if `operand` is not in `0..8`.
    pub(crate) fn reg_mut(&mut self, operand: u8) -> Result<&mut u8, Fault> {
        let pc = self.pc;
        self.regs.get_mut(operand).ok_or(Fault::InvalidRegister {
            index: operand,
            pc,
        })
    }
}
