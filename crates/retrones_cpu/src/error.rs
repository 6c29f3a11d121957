use thiserror::Error;

use crate::cpu::table::Mnemonic;

pub type Result<T> = std::result::Result<T, CpuError>;

/// Errors surfaced by the CPU core.
///
/// None of these are fatal to the host: `Cpu::step` leaves the machine state
/// untouched when it fails, so the caller can decide whether to halt, log or
/// patch around the offending instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The fetched byte is not a documented 6502 opcode.
    #[error("invalid opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    InvalidOpcode { opcode: u8, pc: u16 },

    /// BRK and RTI decode normally but interrupt delivery is not modelled.
    #[error("{mnemonic} at PC=0x{pc:04X} is not supported by this core")]
    UnimplementedControlFlow { mnemonic: Mnemonic, pc: u16 },

    /// A memory image larger than the address space.
    #[error("memory image of {len} bytes does not fit in 64 KiB")]
    ImageTooLarge { len: usize },

    /// A program that would run past 0xFFFF when loaded at `start`.
    #[error("{len} bytes loaded at 0x{start:04X} would run past the end of memory")]
    ImageOutOfRange { start: u16, len: usize },
}
