use crate::cpu::addressing::Operand;
use crate::cpu::Cpu;
use crate::memory::Bus;

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_ora(&mut self, operand: Operand) {
        let result = self.regs.a | self.load_operand(operand);
        self.regs.a = result;
        self.regs.update_zero_sign(result);
    }

    pub(super) fn exec_and(&mut self, operand: Operand) {
        let result = self.regs.a & self.load_operand(operand);
        self.regs.a = result;
        self.regs.update_zero_sign(result);
    }

    pub(super) fn exec_eor(&mut self, operand: Operand) {
        let result = self.regs.a ^ self.load_operand(operand);
        self.regs.a = result;
        self.regs.update_zero_sign(result);
    }

    pub(super) fn exec_bit(&mut self, operand: Operand) {
        let value = self.load_operand(operand);
        self.alu_bit(value);
    }
}
