use crate::cpu::addressing::Operand;
use crate::cpu::Cpu;
use crate::memory::Bus;

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_cmp(&mut self, operand: Operand) {
        let value = self.load_operand(operand);
        self.alu_compare(self.regs.a, value);
    }

    pub(super) fn exec_cpx(&mut self, operand: Operand) {
        let value = self.load_operand(operand);
        self.alu_compare(self.regs.x, value);
    }

    pub(super) fn exec_cpy(&mut self, operand: Operand) {
        let value = self.load_operand(operand);
        self.alu_compare(self.regs.y, value);
    }
}
