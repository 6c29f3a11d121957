use crate::cpu::addressing::Operand;
use crate::cpu::regs::Status;
use crate::cpu::table::Mnemonic;
use crate::cpu::Cpu;
use crate::memory::Bus;

impl<B: Bus> Cpu<B> {
    /// The flag a branch tests and the state it must be in to be taken.
    fn branch_condition(mnemonic: Mnemonic) -> (Status, bool) {
        match mnemonic {
            Mnemonic::Bcc => (Status::CARRY, false),
            Mnemonic::Bcs => (Status::CARRY, true),
            Mnemonic::Bne => (Status::ZERO, false),
            Mnemonic::Beq => (Status::ZERO, true),
            Mnemonic::Bpl => (Status::NEGATIVE, false),
            Mnemonic::Bmi => (Status::NEGATIVE, true),
            Mnemonic::Bvc => (Status::OVERFLOW, false),
            Mnemonic::Bvs => (Status::OVERFLOW, true),
            _ => unreachable!("{mnemonic} is not a branch"),
        }
    }

    /// The operand already holds the target computed from the advanced PC.
    pub(super) fn exec_branch(&mut self, mnemonic: Mnemonic, operand: Operand) {
        let (flag, expected) = Self::branch_condition(mnemonic);
        if self.regs.flag(flag) == expected {
            self.regs.pc = Self::operand_address(operand);
        }
    }
}
