use crate::memory::{Bus, STACK_BASE};

use super::Cpu;

impl<B: Bus> Cpu<B> {
    #[inline]
    fn stack_addr(&self) -> u16 {
        STACK_BASE | self.regs.sp as u16
    }

    /// Write to 0x0100+SP, then decrement SP. SP wraps within page 1 and
    /// overflow is not detected.
    #[inline]
    pub(super) fn push(&mut self, value: u8) {
        let addr = self.stack_addr();
        self.bus.write_byte(addr, value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    /// Increment SP, then read from 0x0100+SP.
    #[inline]
    pub(super) fn pull(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let addr = self.stack_addr();
        self.bus.read_byte(addr)
    }

    /// Push a word high byte first, so it sits little-endian in memory.
    #[inline]
    pub(super) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    #[inline]
    pub(super) fn pull_word(&mut self) -> u16 {
        let lo = self.pull();
        let hi = self.pull();
        u16::from_le_bytes([lo, hi])
    }

    /// Read a pointer stored in zero page. The high byte comes from
    /// `(ptr + 1) mod 256`, never from page 1.
    #[inline]
    pub(super) fn read_word_zero_page(&mut self, ptr: u8) -> u16 {
        let lo = self.bus.read_byte(ptr as u16);
        let hi = self.bus.read_byte(ptr.wrapping_add(1) as u16);
        u16::from_le_bytes([lo, hi])
    }

    /// Read a word without carrying into the high byte of the address, as the
    /// NMOS indirect JMP does.
    #[inline]
    pub(super) fn read_word_page_wrapped(&mut self, addr: u16) -> u16 {
        let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
        let lo = self.bus.read_byte(addr);
        let hi = self.bus.read_byte(hi_addr);
        u16::from_le_bytes([lo, hi])
    }
}
