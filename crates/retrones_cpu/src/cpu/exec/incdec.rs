use crate::cpu::addressing::Operand;
use crate::cpu::Cpu;
use crate::memory::Bus;

// N and Z only; C and V are left alone.
impl<B: Bus> Cpu<B> {
    pub(super) fn exec_inc(&mut self, operand: Operand) {
        self.modify(operand, |cpu, value| {
            let result = value.wrapping_add(1);
            cpu.regs.update_zero_sign(result);
            result
        });
    }

    pub(super) fn exec_dec(&mut self, operand: Operand) {
        self.modify(operand, |cpu, value| {
            let result = value.wrapping_sub(1);
            cpu.regs.update_zero_sign(result);
            result
        });
    }

    pub(super) fn exec_inx(&mut self) {
        self.regs.x = self.regs.x.wrapping_add(1);
        self.regs.update_zero_sign(self.regs.x);
    }

    pub(super) fn exec_iny(&mut self) {
        self.regs.y = self.regs.y.wrapping_add(1);
        self.regs.update_zero_sign(self.regs.y);
    }

    pub(super) fn exec_dex(&mut self) {
        self.regs.x = self.regs.x.wrapping_sub(1);
        self.regs.update_zero_sign(self.regs.x);
    }

    pub(super) fn exec_dey(&mut self) {
        self.regs.y = self.regs.y.wrapping_sub(1);
        self.regs.update_zero_sign(self.regs.y);
    }
}
