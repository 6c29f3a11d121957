//! Instruction core for the Ricoh 2A03, the MOS 6502 derivative inside the NES.
//!
//! The crate models the register file, a flat 64 KiB address space and the
//! fetch/decode/execute loop for every documented opcode. Timing, decimal
//! mode and the picture/audio units are left to the host.

pub mod cpu;
pub mod error;
pub mod memory;

pub use cpu::addressing::{AddressingMode, Operand};
pub use cpu::info::InstructionInfo;
pub use cpu::regs::{Registers, Status};
pub use cpu::table::{Mnemonic, Opcode, OpcodeTable, OPCODES};
pub use cpu::{Cpu, CpuConfig};
pub use error::{CpuError, Result};
pub use memory::{Bus, Memory};

/// Size of the CPU address space in bytes.
pub const ADDRESS_SPACE_SIZE: usize = 0x10000;
