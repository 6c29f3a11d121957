use crate::cpu::addressing::Operand;
use crate::cpu::Cpu;
use crate::memory::Bus;

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_jmp(&mut self, operand: Operand) {
        self.regs.pc = Self::operand_address(operand);
    }

    /// Pushes the address of the JSR's last byte, high byte first. RTS adds
    /// the missing 1 back.
    pub(super) fn exec_jsr(&mut self, operand: Operand) {
        let target = Self::operand_address(operand);
        let ret = self.regs.pc.wrapping_sub(1);
        self.push_word(ret);
        self.regs.pc = target;
    }

    pub(super) fn exec_rts(&mut self) {
        let ret = self.pull_word();
        self.regs.pc = ret.wrapping_add(1);
    }
}
