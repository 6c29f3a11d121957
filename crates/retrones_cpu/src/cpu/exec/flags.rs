use crate::cpu::regs::Status;
use crate::cpu::Cpu;
use crate::memory::Bus;

impl<B: Bus> Cpu<B> {
    /// CLC/SEC/CLI/SEI/CLD/SED/CLV: touch exactly one flag.
    pub(super) fn exec_flag(&mut self, flag: Status, value: bool) {
        self.regs.set_flag(flag, value);
    }
}
