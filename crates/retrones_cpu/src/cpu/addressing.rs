use std::fmt;

use crate::memory::Bus;

use super::Cpu;

/// The rule an instruction uses to locate its operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand; the instruction is self-contained.
    Implied,
    /// Operates on A.
    Accumulator,
    /// `#$nn`
    Immediate,
    /// `$nn`
    ZeroPage,
    /// `$nn,X`, wraps within zero page.
    ZeroPageX,
    /// `$nn,Y`, wraps within zero page.
    ZeroPageY,
    /// Signed 8-bit branch offset from the next instruction.
    Relative,
    /// `$nnnn`
    Absolute,
    /// `$nnnn,X`
    AbsoluteX,
    /// `$nnnn,Y`
    AbsoluteY,
    /// `($nnnn)`, JMP only.
    Indirect,
    /// `($nn,X)`
    IndexedIndirect,
    /// `($nn),Y`
    IndirectIndexed,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            AddressingMode::Implied => "implied",
            AddressingMode::Accumulator => "accumulator",
            AddressingMode::Immediate => "immediate",
            AddressingMode::ZeroPage => "zero page",
            AddressingMode::ZeroPageX => "zero page,X",
            AddressingMode::ZeroPageY => "zero page,Y",
            AddressingMode::Relative => "relative",
            AddressingMode::Absolute => "absolute",
            AddressingMode::AbsoluteX => "absolute,X",
            AddressingMode::AbsoluteY => "absolute,Y",
            AddressingMode::Indirect => "indirect",
            AddressingMode::IndexedIndirect => "(indirect,X)",
            AddressingMode::IndirectIndexed => "(indirect),Y",
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved operand, ready for the execution unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Implied,
    Accumulator,
    Immediate(u8),
    /// Effective address. For branches this is the branch target.
    Address(u16),
}

impl<B: Bus> Cpu<B> {
    /// Resolve the operand for `mode` from the raw bytes after the opcode.
    ///
    /// PC must already point past the instruction; relative targets are
    /// computed from it.
    pub(super) fn resolve(&mut self, mode: AddressingMode, operands: [u8; 2]) -> Operand {
        let [lo, hi] = operands;
        let absolute = u16::from_le_bytes([lo, hi]);
        match mode {
            AddressingMode::Implied => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(lo),
            AddressingMode::ZeroPage => Operand::Address(lo as u16),
            AddressingMode::ZeroPageX => Operand::Address(lo.wrapping_add(self.regs.x) as u16),
            AddressingMode::ZeroPageY => Operand::Address(lo.wrapping_add(self.regs.y) as u16),
            AddressingMode::Relative => {
                let offset = lo as i8 as i16 as u16;
                Operand::Address(self.regs.pc.wrapping_add(offset))
            }
            AddressingMode::Absolute => Operand::Address(absolute),
            AddressingMode::AbsoluteX => {
                Operand::Address(absolute.wrapping_add(self.regs.x as u16))
            }
            AddressingMode::AbsoluteY => {
                Operand::Address(absolute.wrapping_add(self.regs.y as u16))
            }
            AddressingMode::Indirect => {
                let target = if self.config.indirect_jmp_page_wrap {
                    self.read_word_page_wrapped(absolute)
                } else {
                    self.bus.read_word(absolute)
                };
                Operand::Address(target)
            }
            AddressingMode::IndexedIndirect => {
                let ptr = lo.wrapping_add(self.regs.x);
                Operand::Address(self.read_word_zero_page(ptr))
            }
            AddressingMode::IndirectIndexed => {
                let base = self.read_word_zero_page(lo);
                Operand::Address(base.wrapping_add(self.regs.y as u16))
            }
        }
    }
}
