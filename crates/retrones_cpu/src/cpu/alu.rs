use crate::memory::Bus;

use super::regs::Status;
use super::Cpu;

impl<B: Bus> Cpu<B> {
    /// ADC: A = A + value + C.
    ///
    /// The decimal flag is ignored, matching the 2A03.
    pub(super) fn alu_adc(&mut self, value: u8) {
        let a = self.regs.a;
        let carry_in = self.regs.flag(Status::CARRY) as u16;
        let sum = a as u16 + value as u16 + carry_in;
        let result = sum as u8;

        // Overflow when both inputs share a sign and the result does not.
        let overflow = (!(a ^ value) & (a ^ result) & 0x80) != 0;

        self.regs.a = result;
        self.regs.set_flag(Status::CARRY, sum > 0xFF);
        self.regs.set_flag(Status::OVERFLOW, overflow);
        self.regs.update_zero_sign(result);
    }

    /// SBC: A = A - value - (1 - C). C ends up set when no borrow occurred.
    pub(super) fn alu_sbc(&mut self, value: u8) {
        let a = self.regs.a;
        let borrow = 1 - self.regs.flag(Status::CARRY) as i16;
        let diff = a as i16 - value as i16 - borrow;
        let result = diff as u8;

        // Overflow when the inputs differ in sign and the result's sign
        // differs from A's.
        let overflow = ((a ^ value) & (a ^ result) & 0x80) != 0;

        self.regs.a = result;
        self.regs.set_flag(Status::CARRY, diff >= 0);
        self.regs.set_flag(Status::OVERFLOW, overflow);
        self.regs.update_zero_sign(result);
    }

    /// Flags as if `register - value` was computed. Nothing is stored.
    pub(super) fn alu_compare(&mut self, register: u8, value: u8) {
        let result = register.wrapping_sub(value);
        self.regs.set_flag(Status::CARRY, register >= value);
        self.regs.set_flag(Status::ZERO, register == value);
        self.regs.set_flag(Status::NEGATIVE, (result & 0x80) != 0);
    }

    /// BIT: N and V come straight from the operand, Z from `A & value`.
    pub(super) fn alu_bit(&mut self, value: u8) {
        self.regs.set_flag(Status::NEGATIVE, (value & 0x80) != 0);
        self.regs.set_flag(Status::OVERFLOW, (value & 0x40) != 0);
        self.regs.set_flag(Status::ZERO, (self.regs.a & value) == 0);
    }

    pub(super) fn alu_asl(&mut self, value: u8) -> u8 {
        let result = value << 1;
        self.regs.set_flag(Status::CARRY, (value & 0x80) != 0);
        self.regs.update_zero_sign(result);
        result
    }

    pub(super) fn alu_lsr(&mut self, value: u8) -> u8 {
        let result = value >> 1;
        self.regs.set_flag(Status::CARRY, (value & 0x01) != 0);
        self.regs.update_zero_sign(result);
        result
    }

    /// Rotate left through carry.
    pub(super) fn alu_rol(&mut self, value: u8) -> u8 {
        let carry_in = self.regs.flag(Status::CARRY) as u8;
        let result = (value << 1) | carry_in;
        self.regs.set_flag(Status::CARRY, (value & 0x80) != 0);
        self.regs.update_zero_sign(result);
        result
    }

    /// Rotate right through carry.
    pub(super) fn alu_ror(&mut self, value: u8) -> u8 {
        let carry_in = self.regs.flag(Status::CARRY) as u8;
        let result = (value >> 1) | (carry_in << 7);
        self.regs.set_flag(Status::CARRY, (value & 0x01) != 0);
        self.regs.update_zero_sign(result);
        result
    }
}
