use std::fmt;

use super::addressing::AddressingMode;
use super::table::{Mnemonic, Opcode};

/// Record of one executed instruction, returned by `Cpu::step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionInfo {
    /// Address the opcode was fetched from.
    pub pc: u16,
    pub opcode: u8,
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    pub len: u8,
    raw: [u8; 3],
}

impl InstructionInfo {
    pub(crate) fn new(pc: u16, opcode: &Opcode, raw: [u8; 3]) -> Self {
        Self {
            pc,
            opcode: opcode.code,
            mnemonic: opcode.mnemonic,
            mode: opcode.mode,
            len: opcode.len,
            raw,
        }
    }

    /// Raw instruction bytes, opcode first.
    pub fn bytes(&self) -> &[u8] {
        &self.raw[..self.len as usize]
    }

    /// Operand bytes following the opcode.
    pub fn operands(&self) -> &[u8] {
        &self.raw[1..self.len as usize]
    }

    fn operand_byte(&self) -> u8 {
        self.raw[1]
    }

    fn operand_word(&self) -> u16 {
        u16::from_le_bytes([self.raw[1], self.raw[2]])
    }

    /// Address a relative branch jumps to when taken.
    pub fn branch_target(&self) -> Option<u16> {
        match self.mode {
            AddressingMode::Relative => {
                let next = self.pc.wrapping_add(self.len as u16);
                Some(next.wrapping_add(self.operand_byte() as i8 as i16 as u16))
            }
            _ => None,
        }
    }

    /// Assembly text without address or bytes, e.g. `LDA ($10),Y`.
    pub fn disassemble(&self) -> String {
        let m = self.mnemonic;
        match self.mode {
            AddressingMode::Implied => m.to_string(),
            AddressingMode::Accumulator => format!("{m} A"),
            AddressingMode::Immediate => format!("{m} #${:02X}", self.operand_byte()),
            AddressingMode::ZeroPage => format!("{m} ${:02X}", self.operand_byte()),
            AddressingMode::ZeroPageX => format!("{m} ${:02X},X", self.operand_byte()),
            AddressingMode::ZeroPageY => format!("{m} ${:02X},Y", self.operand_byte()),
            AddressingMode::Relative => {
                format!("{m} ${:04X}", self.branch_target().unwrap_or_default())
            }
            AddressingMode::Absolute => format!("{m} ${:04X}", self.operand_word()),
            AddressingMode::AbsoluteX => format!("{m} ${:04X},X", self.operand_word()),
            AddressingMode::AbsoluteY => format!("{m} ${:04X},Y", self.operand_word()),
            AddressingMode::Indirect => format!("{m} (${:04X})", self.operand_word()),
            AddressingMode::IndexedIndirect => format!("{m} (${:02X},X)", self.operand_byte()),
            AddressingMode::IndirectIndexed => format!("{m} (${:02X}),Y", self.operand_byte()),
        }
    }
}

impl fmt::Display for InstructionInfo {
    /// `C000  A9 10     LDA #$10`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self
            .bytes()
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{:04X}  {:<8}  {}", self.pc, bytes, self.disassemble())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::table::OPCODES;

    fn info(pc: u16, raw: [u8; 3]) -> InstructionInfo {
        let opcode = OPCODES.get(raw[0]).unwrap();
        InstructionInfo::new(pc, opcode, raw)
    }

    #[test]
    fn bytes_follow_length() {
        let i = info(0xC000, [0x4C, 0xF5, 0xC5]);
        assert_eq!(i.bytes(), &[0x4C, 0xF5, 0xC5]);
        assert_eq!(i.operands(), &[0xF5, 0xC5]);

        let i = info(0xC000, [0xE8, 0xAA, 0xBB]);
        assert_eq!(i.bytes(), &[0xE8]);
        assert!(i.operands().is_empty());
    }

    #[test]
    fn disassembly_per_mode() {
        let cases = [
            ([0xE8, 0, 0], "INX"),
            ([0x0A, 0, 0], "ASL A"),
            ([0xA9, 0x10, 0], "LDA #$10"),
            ([0xA5, 0x10, 0], "LDA $10"),
            ([0xB5, 0x10, 0], "LDA $10,X"),
            ([0xB6, 0x10, 0], "LDX $10,Y"),
            ([0xAD, 0x34, 0x12], "LDA $1234"),
            ([0xBD, 0x34, 0x12], "LDA $1234,X"),
            ([0xB9, 0x34, 0x12], "LDA $1234,Y"),
            ([0x6C, 0x00, 0x02], "JMP ($0200)"),
            ([0xA1, 0x10, 0], "LDA ($10,X)"),
            ([0x91, 0x10, 0], "STA ($10),Y"),
        ];
        for (raw, text) in cases {
            assert_eq!(info(0x8000, raw).disassemble(), text);
        }
    }

    #[test]
    fn branches_show_absolute_target() {
        let back = info(0x8010, [0xD0, 0xFE, 0]);
        assert_eq!(back.branch_target(), Some(0x8010));
        assert_eq!(back.disassemble(), "BNE $8010");

        let forward = info(0x8010, [0xF0, 0x05, 0]);
        assert_eq!(forward.disassemble(), "BEQ $8017");

        assert_eq!(info(0x8000, [0xEA, 0, 0]).branch_target(), None);
    }

    #[test]
    fn display_line() {
        let line = info(0xC000, [0xA9, 0x10, 0]).to_string();
        assert_eq!(line, "C000  A9 10     LDA #$10");
    }
}
