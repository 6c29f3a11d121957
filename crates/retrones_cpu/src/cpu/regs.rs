use bitflags::bitflags;

bitflags! {
    /// Flag bits of the processor status register (P).
    ///
    /// Layout from MSB to LSB: `N V 1 B D I Z C`.
    /// - N: sign of the last result (bit 7)
    /// - V: signed overflow from ADC/SBC, bit 6 of the operand for BIT
    /// - bit 5 is unused and always reads back as 1
    /// - B: only meaningful in copies pushed to the stack
    /// - D: decimal mode, wired off on the 2A03 but still settable
    /// - I: interrupt disable
    /// - Z: last result was zero
    /// - C: carry / not-borrow
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const CARRY = 1 << 0;
        const ZERO = 1 << 1;
        const IRQ_DISABLE = 1 << 2;
        const DECIMAL = 1 << 3;
        const BREAK = 1 << 4;
        const UNUSED = 1 << 5;
        const OVERFLOW = 1 << 6;
        const NEGATIVE = 1 << 7;
    }
}

/// Register file of the 2A03.
///
/// All registers are stored unsigned. Sign-dependent logic inspects bit 7
/// explicitly instead of relying on the storage type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    /// Offset into page 1 (0x0100-0x01FF).
    pub sp: u8,
    pub pc: u16,
    p: Status,
}

impl Default for Registers {
    /// Power-on state: SP at the top of the stack page and interrupts masked.
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFF,
            pc: 0,
            p: Status::UNUSED | Status::IRQ_DISABLE,
        }
    }
}

impl Registers {
    #[inline]
    pub fn flag(&self, flag: Status) -> bool {
        self.p.contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.p.set(flag, value);
    }

    /// Packed status byte. The unused bit always reads as 1.
    #[inline]
    pub fn status(&self) -> u8 {
        (self.p | Status::UNUSED).bits()
    }

    #[inline]
    pub fn set_status(&mut self, value: u8) {
        self.p = Status::from_bits_retain(value) | Status::UNUSED;
    }

    /// Set Z when `value` is zero and N from its bit 7.
    #[inline]
    pub fn update_zero_sign(&mut self, value: u8) {
        self.set_flag(Status::ZERO, value == 0);
        self.set_flag(Status::NEGATIVE, (value & 0x80) != 0);
    }
}
