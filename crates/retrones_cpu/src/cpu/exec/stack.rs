use crate::cpu::regs::Status;
use crate::cpu::Cpu;
use crate::memory::Bus;

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_pha(&mut self) {
        self.push(self.regs.a);
    }

    pub(super) fn exec_pla(&mut self) {
        let value = self.pull();
        self.regs.a = value;
        self.regs.update_zero_sign(value);
    }

    /// The pushed copy always has B and the unused bit set.
    pub(super) fn exec_php(&mut self) {
        let value = self.regs.status() | (Status::BREAK | Status::UNUSED).bits();
        self.push(value);
    }

    /// Restores the whole register. B only exists in pushed copies, so it is
    /// dropped; the unused bit reads back as 1.
    pub(super) fn exec_plp(&mut self) {
        let value = self.pull();
        self.regs.set_status(value);
        self.regs.set_flag(Status::BREAK, false);
    }
}
