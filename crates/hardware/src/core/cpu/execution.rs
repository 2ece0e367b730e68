//! Main Execution Loop.
//!
//! This module implements one clock tick of the CPU. It performs the following:
//! 1. **Fetch:** Reads the opcode at PC and the two bytes after it.
//! 2. **Decode:** Looks the opcode up in the static decode table.
//! 3. **Execute:** Dispatches to the instruction's handler.
//! 4. **PC Update:** Advances PC by the encoded instruction width unless the
//!    handler wrote PC itself.
//!
//! Every operand is validated before any state is changed, so a faulting
//! instruction leaves registers, flags, memory and PC as they were.

use super::{Cpu, CpuState};
use crate::common::constants::Addr;
use crate::common::error::Fault;
use crate::core::arch::Flag;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::decode::Decoded;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Instruction;
use crate::soc::traits::{Memory, OutputSink};

/// What the execution loop does with PC after a handler returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    /// Fall through to the next instruction.
    Next,
    /// The handler chose the next PC.
    Jump(Addr),
    /// Stop the CPU.
    Halt,
}

impl Cpu {
    /// Executes one instruction.
    ///
    /// Ticking a halted CPU does nothing and returns [`CpuState::Halted`].
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] that halted the CPU when the opcode is unknown
    /// or a register operand is out of range. The fault has already been
    /// reported to `out` by the time this returns.
    pub fn tick<M, O>(&mut self, mem: &mut M, out: &mut O) -> Result<CpuState, Fault>
    where
        M: Memory + ?Sized,
        O: OutputSink + ?Sized,
    {
        if self.is_halted() {
            return Ok(CpuState::Halted);
        }

        let (opcode, a, b) = self.fetch(mem);
        self.stats.cycles += 1;

        let Some(decoded) = Decoded::new(opcode, a, b) else {
            let fault = Fault::UnknownOpcode {
                opcode,
                pc: self.pc,
            };
            return Err(self.raise(fault, out));
        };

        if self.trace || cfg!(feature = "always-trace") {
            tracing::trace!(
                pc = self.pc,
                opcode,
                a,
                b,
                "{}",
                disassemble(opcode, a, b)
            );
        }

        let flow = match self.execute(&decoded, mem, out) {
            Ok(flow) => flow,
            Err(fault) => return Err(self.raise(fault, out)),
        };

        self.stats
            .record(decoded.inst.class(), matches!(flow, Flow::Jump(_)));

        match flow {
            Flow::Next => self.pc = self.pc.wrapping_add(Addr::from(decoded.width())),
            Flow::Jump(target) => self.pc = target,
            Flow::Halt => {
                self.state = CpuState::Halted;
                tracing::info!(pc = self.pc, cycles = self.stats.cycles, "halted");
            }
        }
        Ok(self.state)
    }

    /// Runs the handler for a decoded instruction.
    fn execute<M, O>(&mut self, d: &Decoded, mem: &mut M, out: &mut O) -> Result<Flow, Fault>
    where
        M: Memory + ?Sized,
        O: OutputSink + ?Sized,
    {
        let flow = match d.inst {
            Instruction::Hlt => Flow::Halt,
            Instruction::Ldi => {
                *self.reg_mut(d.a)? = d.b;
                Flow::Next
            }
            Instruction::Prn => {
                out.print_value(self.reg(d.a)?);
                Flow::Next
            }
            Instruction::Mul => self.alu(AluOp::Mul, d.a, d.b)?,
            Instruction::Add => self.alu(AluOp::Add, d.a, d.b)?,
            Instruction::Cmp => self.alu(AluOp::Cmp, d.a, d.b)?,
            Instruction::Push => {
                let val = self.reg(d.a)?;
                self.push(mem, val);
                Flow::Next
            }
            Instruction::Pop => {
                let _ = self.reg(d.a)?;
                let val = self.pop(mem);
                *self.reg_mut(d.a)? = val;
                Flow::Next
            }
            Instruction::Call => {
                let target = self.reg(d.a)?;
                let ret = self.pc.wrapping_add(Addr::from(d.width()));
                self.push(mem, ret as u8);
                Flow::Jump(Addr::from(target))
            }
            Instruction::Ret => Flow::Jump(Addr::from(self.pop(mem))),
            Instruction::Jmp => Flow::Jump(Addr::from(self.reg(d.a)?)),
            Instruction::Jeq => self.branch_if(self.flag(Flag::Equal), d.a)?,
            Instruction::Jne => self.branch_if(!self.flag(Flag::Equal), d.a)?,
        };
        Ok(flow)
    }

    /// Hands two register values to the ALU and writes back any result to `a`.
    fn alu(&mut self, op: AluOp, a: u8, b: u8) -> Result<Flow, Fault> {
        let lhs = self.reg(a)?;
        let rhs = self.reg(b)?;
        if let Some(result) = Alu::execute(op, lhs, rhs, &mut self.fl) {
            *self.reg_mut(a)? = result;
        }
        Ok(Flow::Next)
    }

    /// Jumps to the address in register `a` when `cond` holds.
    fn branch_if(&self, cond: bool, a: u8) -> Result<Flow, Fault> {
        let target = self.reg(a)?;
        Ok(if cond {
            Flow::Jump(Addr::from(target))
        } else {
            Flow::Next
        })
    }
}
