use crate::cpu::addressing::Operand;
use crate::cpu::Cpu;
use crate::memory::Bus;

// Accumulator and memory forms share these; `modify` writes the result back
// to whichever one the operand names.
impl<B: Bus> Cpu<B> {
    pub(super) fn exec_asl(&mut self, operand: Operand) {
        self.modify(operand, Self::alu_asl);
    }

    pub(super) fn exec_lsr(&mut self, operand: Operand) {
        self.modify(operand, Self::alu_lsr);
    }

    pub(super) fn exec_rol(&mut self, operand: Operand) {
        self.modify(operand, Self::alu_rol);
    }

    pub(super) fn exec_ror(&mut self, operand: Operand) {
        self.modify(operand, Self::alu_ror);
    }
}
