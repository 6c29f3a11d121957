use crate::cpu::addressing::Operand;
use crate::cpu::Cpu;
use crate::memory::Bus;

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_adc(&mut self, operand: Operand) {
        let value = self.load_operand(operand);
        self.alu_adc(value);
    }

    pub(super) fn exec_sbc(&mut self, operand: Operand) {
        let value = self.load_operand(operand);
        self.alu_sbc(value);
    }
}
