//! Opcode dispatch table for the documented 6502 instruction set.
//!
//! Each of the 256 opcode values maps to either an `Opcode` (mnemonic,
//! addressing mode, length) or `None`. The length is derived from the
//! addressing mode when the table is built, so the two cannot disagree.
//! The table is a compile-time constant and is never mutated.

use std::fmt;

use super::addressing::AddressingMode;

/// The 56 documented 6502 operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    pub const ALL: [Mnemonic; 56] = [
        Mnemonic::Adc,
        Mnemonic::And,
        Mnemonic::Asl,
        Mnemonic::Bcc,
        Mnemonic::Bcs,
        Mnemonic::Beq,
        Mnemonic::Bit,
        Mnemonic::Bmi,
        Mnemonic::Bne,
        Mnemonic::Bpl,
        Mnemonic::Brk,
        Mnemonic::Bvc,
        Mnemonic::Bvs,
        Mnemonic::Clc,
        Mnemonic::Cld,
        Mnemonic::Cli,
        Mnemonic::Clv,
        Mnemonic::Cmp,
        Mnemonic::Cpx,
        Mnemonic::Cpy,
        Mnemonic::Dec,
        Mnemonic::Dex,
        Mnemonic::Dey,
        Mnemonic::Eor,
        Mnemonic::Inc,
        Mnemonic::Inx,
        Mnemonic::Iny,
        Mnemonic::Jmp,
        Mnemonic::Jsr,
        Mnemonic::Lda,
        Mnemonic::Ldx,
        Mnemonic::Ldy,
        Mnemonic::Lsr,
        Mnemonic::Nop,
        Mnemonic::Ora,
        Mnemonic::Pha,
        Mnemonic::Php,
        Mnemonic::Pla,
        Mnemonic::Plp,
        Mnemonic::Rol,
        Mnemonic::Ror,
        Mnemonic::Rti,
        Mnemonic::Rts,
        Mnemonic::Sbc,
        Mnemonic::Sec,
        Mnemonic::Sed,
        Mnemonic::Sei,
        Mnemonic::Sta,
        Mnemonic::Stx,
        Mnemonic::Sty,
        Mnemonic::Tax,
        Mnemonic::Tay,
        Mnemonic::Tsx,
        Mnemonic::Txa,
        Mnemonic::Txs,
        Mnemonic::Tya,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        }
    }

    /// BRK and RTI need interrupt delivery, which this core leaves to the
    /// host.
    pub const fn needs_interrupt_support(self) -> bool {
        matches!(self, Mnemonic::Brk | Mnemonic::Rti)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One documented opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode {
    pub code: u8,
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    /// Total instruction length in bytes, opcode included.
    pub len: u8,
}

impl Opcode {
    pub const fn new(code: u8, mnemonic: Mnemonic, mode: AddressingMode) -> Self {
        Self {
            code,
            mnemonic,
            mode,
            len: 1 + mode.operand_len(),
        }
    }
}

/// The published 2A03 opcode matrix.
pub static OPCODES: OpcodeTable = OpcodeTable::new();

pub struct OpcodeTable {
    entries: [Option<Opcode>; 256],
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OpcodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpcodeTable")
            .field("defined", &self.len())
            .finish()
    }
}

impl OpcodeTable {
    pub const fn new() -> Self {
        let mut entries = [None; 256];
        let mut code = 0usize;
        while code < 256 {
            entries[code] = decode(code as u8);
            code += 1;
        }
        Self { entries }
    }

    #[inline]
    pub fn get(&self, opcode: u8) -> Option<&Opcode> {
        self.entries[opcode as usize].as_ref()
    }

    /// Defined entries in opcode order.
    pub fn iter(&self) -> impl Iterator<Item = &Opcode> {
        self.entries.iter().flatten()
    }

    /// Number of defined opcodes.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

const fn decode(code: u8) -> Option<Opcode> {
    use AddressingMode::*;
    use Mnemonic::*;

    let (mnemonic, mode) = match code {
        0x00 => (Brk, Implied),
        0x01 => (Ora, IndexedIndirect),
        0x05 => (Ora, ZeroPage),
        0x06 => (Asl, ZeroPage),
        0x08 => (Php, Implied),
        0x09 => (Ora, Immediate),
        0x0A => (Asl, Accumulator),
        0x0D => (Ora, Absolute),
        0x0E => (Asl, Absolute),

        0x10 => (Bpl, Relative),
        0x11 => (Ora, IndirectIndexed),
        0x15 => (Ora, ZeroPageX),
        0x16 => (Asl, ZeroPageX),
        0x18 => (Clc, Implied),
        0x19 => (Ora, AbsoluteY),
        0x1D => (Ora, AbsoluteX),
        0x1E => (Asl, AbsoluteX),

        0x20 => (Jsr, Absolute),
        0x21 => (And, IndexedIndirect),
        0x24 => (Bit, ZeroPage),
        0x25 => (And, ZeroPage),
        0x26 => (Rol, ZeroPage),
        0x28 => (Plp, Implied),
        0x29 => (And, Immediate),
        0x2A => (Rol, Accumulator),
        0x2C => (Bit, Absolute),
        0x2D => (And, Absolute),
        0x2E => (Rol, Absolute),

        0x30 => (Bmi, Relative),
        0x31 => (And, IndirectIndexed),
        0x35 => (And, ZeroPageX),
        0x36 => (Rol, ZeroPageX),
        0x38 => (Sec, Implied),
        0x39 => (And, AbsoluteY),
        0x3D => (And, AbsoluteX),
        0x3E => (Rol, AbsoluteX),

        0x40 => (Rti, Implied),
        0x41 => (Eor, IndexedIndirect),
        0x45 => (Eor, ZeroPage),
        0x46 => (Lsr, ZeroPage),
        0x48 => (Pha, Implied),
        0x49 => (Eor, Immediate),
        0x4A => (Lsr, Accumulator),
        0x4C => (Jmp, Absolute),
        0x4D => (Eor, Absolute),
        0x4E => (Lsr, Absolute),

        0x50 => (Bvc, Relative),
        0x51 => (Eor, IndirectIndexed),
        0x55 => (Eor, ZeroPageX),
        0x56 => (Lsr, ZeroPageX),
        0x58 => (Cli, Implied),
        0x59 => (Eor, AbsoluteY),
        0x5D => (Eor, AbsoluteX),
        0x5E => (Lsr, AbsoluteX),

        0x60 => (Rts, Implied),
        0x61 => (Adc, IndexedIndirect),
        0x65 => (Adc, ZeroPage),
        0x66 => (Ror, ZeroPage),
        0x68 => (Pla, Implied),
        0x69 => (Adc, Immediate),
        0x6A => (Ror, Accumulator),
        0x6C => (Jmp, Indirect),
        0x6D => (Adc, Absolute),
        0x6E => (Ror, Absolute),

        0x70 => (Bvs, Relative),
        0x71 => (Adc, IndirectIndexed),
        0x75 => (Adc, ZeroPageX),
        0x76 => (Ror, ZeroPageX),
        0x78 => (Sei, Implied),
        0x79 => (Adc, AbsoluteY),
        0x7D => (Adc, AbsoluteX),
        0x7E => (Ror, AbsoluteX),

        0x81 => (Sta, IndexedIndirect),
        0x84 => (Sty, ZeroPage),
        0x85 => (Sta, ZeroPage),
        0x86 => (Stx, ZeroPage),
        0x88 => (Dey, Implied),
        0x8A => (Txa, Implied),
        0x8C => (Sty, Absolute),
        0x8D => (Sta, Absolute),
        0x8E => (Stx, Absolute),

        0x90 => (Bcc, Relative),
        0x91 => (Sta, IndirectIndexed),
        0x94 => (Sty, ZeroPageX),
        0x95 => (Sta, ZeroPageX),
        0x96 => (Stx, ZeroPageY),
        0x98 => (Tya, Implied),
        0x99 => (Sta, AbsoluteY),
        0x9A => (Txs, Implied),
        0x9D => (Sta, AbsoluteX),

        0xA0 => (Ldy, Immediate),
        0xA1 => (Lda, IndexedIndirect),
        0xA2 => (Ldx, Immediate),
        0xA4 => (Ldy, ZeroPage),
        0xA5 => (Lda, ZeroPage),
        0xA6 => (Ldx, ZeroPage),
        0xA8 => (Tay, Implied),
        0xA9 => (Lda, Immediate),
        0xAA => (Tax, Implied),
        0xAC => (Ldy, Absolute),
        0xAD => (Lda, Absolute),
        0xAE => (Ldx, Absolute),

        0xB0 => (Bcs, Relative),
        0xB1 => (Lda, IndirectIndexed),
        0xB4 => (Ldy, ZeroPageX),
        0xB5 => (Lda, ZeroPageX),
        0xB6 => (Ldx, ZeroPageY),
        0xB8 => (Clv, Implied),
        0xB9 => (Lda, AbsoluteY),
        0xBA => (Tsx, Implied),
        0xBC => (Ldy, AbsoluteX),
        0xBD => (Lda, AbsoluteX),
        0xBE => (Ldx, AbsoluteY),

        0xC0 => (Cpy, Immediate),
        0xC1 => (Cmp, IndexedIndirect),
        0xC4 => (Cpy, ZeroPage),
        0xC5 => (Cmp, ZeroPage),
        0xC6 => (Dec, ZeroPage),
        0xC8 => (Iny, Implied),
        0xC9 => (Cmp, Immediate),
        0xCA => (Dex, Implied),
        0xCC => (Cpy, Absolute),
        0xCD => (Cmp, Absolute),
        0xCE => (Dec, Absolute),

        0xD0 => (Bne, Relative),
        0xD1 => (Cmp, IndirectIndexed),
        0xD5 => (Cmp, ZeroPageX),
        0xD6 => (Dec, ZeroPageX),
        0xD8 => (Cld, Implied),
        0xD9 => (Cmp, AbsoluteY),
        0xDD => (Cmp, AbsoluteX),
        0xDE => (Dec, AbsoluteX),

        0xE0 => (Cpx, Immediate),
        0xE1 => (Sbc, IndexedIndirect),
        0xE4 => (Cpx, ZeroPage),
        0xE5 => (Sbc, ZeroPage),
        0xE6 => (Inc, ZeroPage),
        0xE8 => (Inx, Implied),
        0xE9 => (Sbc, Immediate),
        0xEA => (Nop, Implied),
        0xEC => (Cpx, Absolute),
        0xED => (Sbc, Absolute),
        0xEE => (Inc, Absolute),

        0xF0 => (Beq, Relative),
        0xF1 => (Sbc, IndirectIndexed),
        0xF5 => (Sbc, ZeroPageX),
        0xF6 => (Inc, ZeroPageX),
        0xF8 => (Sed, Implied),
        0xF9 => (Sbc, AbsoluteY),
        0xFD => (Sbc, AbsoluteX),
        0xFE => (Inc, AbsoluteX),

        _ => return None,
    };
    Some(Opcode::new(code, mnemonic, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Instruction length for every opcode, 0 for undefined ones.
    /// Row = high nibble, column = low nibble.
    const LENGTHS: [&str; 16] = [
        "1200022012100330", // 0x
        "2200022013000330", // 1x
        "3200222012103330", // 2x
        "2200022013000330", // 3x
        "1200022012103330", // 4x
        "2200022013000330", // 5x
        "1200022012103330", // 6x
        "2200022013000330", // 7x
        "0200222010103330", // 8x
        "2200222013100300", // 9x
        "2220222012103330", // Ax
        "2200222013103330", // Bx
        "2200222012103330", // Cx
        "2200022013000330", // Dx
        "2200222012103330", // Ex
        "2200022013000330", // Fx
    ];

    #[test]
    fn every_opcode_is_classified_with_published_length() {
        for (row, lengths) in LENGTHS.iter().enumerate() {
            for (col, expected) in lengths.bytes().enumerate() {
                let code = (row << 4 | col) as u8;
                let expected = expected - b'0';
                match OPCODES.get(code) {
                    Some(op) => {
                        assert_eq!(op.code, code);
                        assert_eq!(op.len, expected, "length of opcode 0x{code:02X}");
                    }
                    None => assert_eq!(expected, 0, "opcode 0x{code:02X} should be defined"),
                }
            }
        }
    }

    /// Mnemonic and mode for every opcode, `---` for undefined ones.
    /// Same row/column layout as `LENGTHS`.
    const MATRIX: [&str; 16] = [
        "BRK.imp ORA.izx --- --- --- ORA.zp  ASL.zp  --- PHP.imp ORA.imm ASL.acc --- --- ORA.abs ASL.abs ---",
        "BPL.rel ORA.izy --- --- --- ORA.zpx ASL.zpx --- CLC.imp ORA.aby --- --- --- ORA.abx ASL.abx ---",
        "JSR.abs AND.izx --- --- BIT.zp  AND.zp  ROL.zp  --- PLP.imp AND.imm ROL.acc --- BIT.abs AND.abs ROL.abs ---",
        "BMI.rel AND.izy --- --- --- AND.zpx ROL.zpx --- SEC.imp AND.aby --- --- --- AND.abx ROL.abx ---",
        "RTI.imp EOR.izx --- --- --- EOR.zp  LSR.zp  --- PHA.imp EOR.imm LSR.acc --- JMP.abs EOR.abs LSR.abs ---",
        "BVC.rel EOR.izy --- --- --- EOR.zpx LSR.zpx --- CLI.imp EOR.aby --- --- --- EOR.abx LSR.abx ---",
        "RTS.imp ADC.izx --- --- --- ADC.zp  ROR.zp  --- PLA.imp ADC.imm ROR.acc --- JMP.ind ADC.abs ROR.abs ---",
        "BVS.rel ADC.izy --- --- --- ADC.zpx ROR.zpx --- SEI.imp ADC.aby --- --- --- ADC.abx ROR.abx ---",
        "---     STA.izx --- --- STY.zp  STA.zp  STX.zp  --- DEY.imp ---     TXA.imp --- STY.abs STA.abs STX.abs ---",
        "BCC.rel STA.izy --- --- STY.zpx STA.zpx STX.zpy --- TYA.imp STA.aby TXS.imp --- ---     STA.abx ---     ---",
        "LDY.imm LDA.izx LDX.imm --- LDY.zp LDA.zp LDX.zp --- TAY.imp LDA.imm TAX.imp --- LDY.abs LDA.abs LDX.abs ---",
        "BCS.rel LDA.izy --- --- LDY.zpx LDA.zpx LDX.zpy --- CLV.imp LDA.aby TSX.imp --- LDY.abx LDA.abx LDX.aby ---",
        "CPY.imm CMP.izx --- --- CPY.zp  CMP.zp  DEC.zp  --- INY.imp CMP.imm DEX.imp --- CPY.abs CMP.abs DEC.abs ---",
        "BNE.rel CMP.izy --- --- --- CMP.zpx DEC.zpx --- CLD.imp CMP.aby --- --- --- CMP.abx DEC.abx ---",
        "CPX.imm SBC.izx --- --- CPX.zp  SBC.zp  INC.zp  --- INX.imp SBC.imm NOP.imp --- CPX.abs SBC.abs INC.abs ---",
        "BEQ.rel SBC.izy --- --- --- SBC.zpx INC.zpx --- SED.imp SBC.aby --- --- --- SBC.abx INC.abx ---",
    ];

    fn mode_abbrev(mode: AddressingMode) -> &'static str {
        match mode {
            AddressingMode::Implied => "imp",
            AddressingMode::Accumulator => "acc",
            AddressingMode::Immediate => "imm",
            AddressingMode::ZeroPage => "zp",
            AddressingMode::ZeroPageX => "zpx",
            AddressingMode::ZeroPageY => "zpy",
            AddressingMode::Relative => "rel",
            AddressingMode::Absolute => "abs",
            AddressingMode::AbsoluteX => "abx",
            AddressingMode::AbsoluteY => "aby",
            AddressingMode::Indirect => "ind",
            AddressingMode::IndexedIndirect => "izx",
            AddressingMode::IndirectIndexed => "izy",
        }
    }

    #[test]
    fn every_opcode_has_published_mnemonic_and_mode() {
        for (row, entries) in MATRIX.iter().enumerate() {
            let entries: Vec<&str> = entries.split_whitespace().collect();
            assert_eq!(entries.len(), 16, "row {row:X}x");
            for (col, expected) in entries.into_iter().enumerate() {
                let code = (row << 4 | col) as u8;
                let actual = match OPCODES.get(code) {
                    Some(op) => format!("{}.{}", op.mnemonic, mode_abbrev(op.mode)),
                    None => "---".to_string(),
                };
                assert_eq!(actual, expected, "opcode 0x{code:02X}");
            }
        }
    }

    #[test]
    fn documented_opcode_count() {
        assert_eq!(OPCODES.len(), 151);
        assert!(!OPCODES.is_empty());
    }

    #[test]
    fn every_mnemonic_is_reachable() {
        for mnemonic in Mnemonic::ALL {
            assert!(
                OPCODES.iter().any(|op| op.mnemonic == mnemonic),
                "{mnemonic} has no opcode"
            );
        }
    }

    #[test]
    fn opcode_counts_per_mnemonic() {
        let count = |m: Mnemonic| OPCODES.iter().filter(|op| op.mnemonic == m).count();
        for m in [
            Mnemonic::Adc,
            Mnemonic::And,
            Mnemonic::Cmp,
            Mnemonic::Eor,
            Mnemonic::Lda,
            Mnemonic::Ora,
            Mnemonic::Sbc,
        ] {
            assert_eq!(count(m), 8, "{m}");
        }
        assert_eq!(count(Mnemonic::Sta), 7);
        for m in [Mnemonic::Asl, Mnemonic::Lsr, Mnemonic::Rol, Mnemonic::Ror] {
            assert_eq!(count(m), 5, "{m}");
        }
        for m in [Mnemonic::Ldx, Mnemonic::Ldy] {
            assert_eq!(count(m), 5, "{m}");
        }
        for m in [Mnemonic::Inc, Mnemonic::Dec] {
            assert_eq!(count(m), 4, "{m}");
        }
        for m in [Mnemonic::Stx, Mnemonic::Sty, Mnemonic::Cpx, Mnemonic::Cpy] {
            assert_eq!(count(m), 3, "{m}");
        }
        assert_eq!(count(Mnemonic::Bit), 2);
        assert_eq!(count(Mnemonic::Jmp), 2);
    }

    #[test]
    fn spot_check_entries() {
        let cases = [
            (0x00, Mnemonic::Brk, AddressingMode::Implied),
            (0x0A, Mnemonic::Asl, AddressingMode::Accumulator),
            (0x20, Mnemonic::Jsr, AddressingMode::Absolute),
            (0x6C, Mnemonic::Jmp, AddressingMode::Indirect),
            (0x81, Mnemonic::Sta, AddressingMode::IndexedIndirect),
            (0x96, Mnemonic::Stx, AddressingMode::ZeroPageY),
            (0xB1, Mnemonic::Lda, AddressingMode::IndirectIndexed),
            (0xBE, Mnemonic::Ldx, AddressingMode::AbsoluteY),
            (0xD0, Mnemonic::Bne, AddressingMode::Relative),
            (0xEA, Mnemonic::Nop, AddressingMode::Implied),
            (0xFE, Mnemonic::Inc, AddressingMode::AbsoluteX),
        ];
        for (code, mnemonic, mode) in cases {
            let op = OPCODES.get(code).unwrap();
            assert_eq!(op.mnemonic, mnemonic, "0x{code:02X}");
            assert_eq!(op.mode, mode, "0x{code:02X}");
        }
    }

    #[test]
    fn common_illegal_opcodes_are_undefined() {
        for code in [0x02, 0x03, 0x04, 0x0C, 0x1A, 0x80, 0x89, 0x9C, 0x9E, 0xA3, 0xEB, 0xFF] {
            assert!(OPCODES.get(code).is_none(), "0x{code:02X}");
        }
    }
}
