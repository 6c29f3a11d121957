use crate::error::{CpuError, Result};
use crate::ADDRESS_SPACE_SIZE;

// NES CPU memory map. The core treats the whole space uniformly; these are
// here for hosts that wrap `Memory` and want to trap specific regions.

/// Zero page, reachable with single-byte addresses.
pub const ZERO_PAGE: u16 = 0x0000;
/// Hardware stack, page 1. SP is an offset from this address.
pub const STACK_BASE: u16 = 0x0100;
/// General purpose RAM (2 KiB including zero page and stack).
pub const RAM_END: u16 = 0x07FF;
/// The 2 KiB of RAM is mirrored three times up to 0x1FFF.
pub const RAM_MIRROR_END: u16 = 0x1FFF;
/// PPU registers 0x2000-0x2007, mirrored every 8 bytes through 0x3FFF.
pub const PPU_REGISTERS: u16 = 0x2000;
/// APU and I/O registers 0x4000-0x401F.
pub const APU_IO_REGISTERS: u16 = 0x4000;
/// Cartridge expansion ROM 0x4020-0x5FFF.
pub const EXPANSION_ROM: u16 = 0x4020;
/// Battery-backed save RAM 0x6000-0x7FFF.
pub const SAVE_RAM: u16 = 0x6000;
/// Lower PRG-ROM bank 0x8000-0xBFFF.
pub const PRG_ROM_LOWER: u16 = 0x8000;
/// Upper PRG-ROM bank 0xC000-0xFFFF.
pub const PRG_ROM_UPPER: u16 = 0xC000;

/// Little-endian handler address for the non-maskable interrupt.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Little-endian start address loaded into PC by `Cpu::reset`.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// Little-endian handler address shared by IRQ and BRK.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Byte-level access to the CPU address space.
///
/// The CPU only ever goes through this trait, so a host that needs mapped
/// I/O or bank switching wraps a `Memory` in its own `Bus` and intercepts the
/// addresses it cares about.
pub trait Bus {
    fn read_byte(&mut self, addr: u16) -> u8;
    fn write_byte(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read. The high byte comes from `addr + 1`,
    /// wrapping at the top of the address space.
    fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }
}

/// Flat 64 KiB store with no protection and no side effects.
#[derive(Clone)]
pub struct Memory {
    data: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.data.len())
            .finish()
    }
}

impl Memory {
    /// Zero-filled address space.
    pub fn new() -> Self {
        Self {
            data: vec![0; ADDRESS_SPACE_SIZE].into_boxed_slice(),
        }
    }

    /// Copy `image` to address 0. Anything not covered stays zero.
    pub fn from_image(image: &[u8]) -> Result<Self> {
        if image.len() > ADDRESS_SPACE_SIZE {
            return Err(CpuError::ImageTooLarge { len: image.len() });
        }
        let mut memory = Self::new();
        memory.data[..image.len()].copy_from_slice(image);
        Ok(memory)
    }

    /// Copy `bytes` into memory starting at `start`.
    pub fn load(&mut self, start: u16, bytes: &[u8]) -> Result<()> {
        let begin = start as usize;
        let end = begin + bytes.len();
        if end > ADDRESS_SPACE_SIZE {
            return Err(CpuError::ImageOutOfRange {
                start,
                len: bytes.len(),
            });
        }
        self.data[begin..end].copy_from_slice(bytes);
        Ok(())
    }

    #[inline]
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read_byte(addr), self.read_byte(addr.wrapping_add(1))])
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Bus for Memory {
    fn read_byte(&mut self, addr: u16) -> u8 {
        Memory::read_byte(self, addr)
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        Memory::write_byte(self, addr, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_map_regions_are_contiguous() {
        assert_eq!(ZERO_PAGE + 0x100, STACK_BASE);
        assert_eq!(RAM_END + 1, 0x0800);
        assert_eq!(RAM_MIRROR_END + 1, PPU_REGISTERS);
        assert_eq!(APU_IO_REGISTERS + 0x20, EXPANSION_ROM);
        assert_eq!(SAVE_RAM + 0x2000, PRG_ROM_LOWER);
        assert_eq!(PRG_ROM_LOWER + 0x4000, PRG_ROM_UPPER);

        // Three vectors fill the last six bytes.
        assert_eq!(NMI_VECTOR + 2, RESET_VECTOR);
        assert_eq!(RESET_VECTOR + 2, IRQ_VECTOR);
        assert_eq!(IRQ_VECTOR + 1, 0xFFFF);
    }

    #[test]
    fn new_memory_is_zero_filled() {
        let memory = Memory::new();
        assert_eq!(memory.as_slice().len(), ADDRESS_SPACE_SIZE);
        assert!(memory.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn every_address_is_writable() {
        let mut memory = Memory::new();
        memory.write_byte(0x0000, 0x11);
        memory.write_byte(0x4016, 0x22);
        memory.write_byte(0xFFFF, 0x33);
        assert_eq!(memory.read_byte(0x0000), 0x11);
        assert_eq!(memory.read_byte(0x4016), 0x22);
        assert_eq!(memory.read_byte(0xFFFF), 0x33);
    }

    #[test]
    fn read_word_is_little_endian_and_wraps() {
        let mut memory = Memory::new();
        memory.write_byte(RESET_VECTOR, 0x34);
        memory.write_byte(RESET_VECTOR + 1, 0x12);
        assert_eq!(memory.read_word(RESET_VECTOR), 0x1234);

        // High byte of a read at 0xFFFF comes from 0x0000.
        memory.write_byte(0xFFFF, 0xCD);
        memory.write_byte(0x0000, 0xAB);
        assert_eq!(memory.read_word(0xFFFF), 0xABCD);
        assert_eq!(Bus::read_word(&mut memory, 0xFFFF), 0xABCD);
    }

    #[test]
    fn from_image_copies_to_address_zero() {
        let memory = Memory::from_image(&[0xA9, 0x01, 0x00]).unwrap();
        assert_eq!(memory.read_byte(0x0000), 0xA9);
        assert_eq!(memory.read_byte(0x0001), 0x01);
        assert_eq!(memory.read_byte(0x0003), 0x00);

        let too_big = vec![0u8; ADDRESS_SPACE_SIZE + 1];
        assert_eq!(
            Memory::from_image(&too_big).unwrap_err(),
            CpuError::ImageTooLarge {
                len: ADDRESS_SPACE_SIZE + 1
            }
        );
    }

    #[test]
    fn load_rejects_programs_past_the_top() {
        let mut memory = Memory::new();
        memory.load(0xFFFE, &[0x01, 0x02]).unwrap();
        assert_eq!(memory.read_byte(0xFFFF), 0x02);

        let err = memory.load(0xFFFF, &[0x01, 0x02]).unwrap_err();
        assert_eq!(
            err,
            CpuError::ImageOutOfRange {
                start: 0xFFFF,
                len: 2
            }
        );
    }
}
