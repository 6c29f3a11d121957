use crate::cpu::addressing::Operand;
use crate::cpu::Cpu;
use crate::memory::Bus;

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_lda(&mut self, operand: Operand) {
        self.regs.a = self.load_operand(operand);
        self.regs.update_zero_sign(self.regs.a);
    }

    pub(super) fn exec_ldx(&mut self, operand: Operand) {
        self.regs.x = self.load_operand(operand);
        self.regs.update_zero_sign(self.regs.x);
    }

    pub(super) fn exec_ldy(&mut self, operand: Operand) {
        self.regs.y = self.load_operand(operand);
        self.regs.update_zero_sign(self.regs.y);
    }

    // Stores never touch the flags.

    pub(super) fn exec_sta(&mut self, operand: Operand) {
        self.store_operand(operand, self.regs.a);
    }

    pub(super) fn exec_stx(&mut self, operand: Operand) {
        self.store_operand(operand, self.regs.x);
    }

    pub(super) fn exec_sty(&mut self, operand: Operand) {
        self.store_operand(operand, self.regs.y);
    }

    pub(super) fn exec_tax(&mut self) {
        self.regs.x = self.regs.a;
        self.regs.update_zero_sign(self.regs.x);
    }

    pub(super) fn exec_tay(&mut self) {
        self.regs.y = self.regs.a;
        self.regs.update_zero_sign(self.regs.y);
    }

    pub(super) fn exec_txa(&mut self) {
        self.regs.a = self.regs.x;
        self.regs.update_zero_sign(self.regs.a);
    }

    pub(super) fn exec_tya(&mut self) {
        self.regs.a = self.regs.y;
        self.regs.update_zero_sign(self.regs.a);
    }

    pub(super) fn exec_tsx(&mut self) {
        self.regs.x = self.regs.sp;
        self.regs.update_zero_sign(self.regs.x);
    }

    /// Unlike every other transfer, TXS leaves the status register alone.
    pub(super) fn exec_txs(&mut self) {
        self.regs.sp = self.regs.x;
    }
}
