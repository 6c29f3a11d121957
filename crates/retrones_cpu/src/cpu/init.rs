use crate::memory::{Bus, Memory, RESET_VECTOR};

use super::regs::Registers;
use super::table::OPCODES;
use super::{Cpu, CpuConfig};

impl Default for Cpu<Memory> {
    fn default() -> Self {
        Self::new(Memory::new())
    }
}

impl Cpu<Memory> {
    /// Build a CPU over a plain memory image and run the reset sequence.
    pub fn new(memory: Memory) -> Self {
        Self::with_bus(memory)
    }
}

impl<B: Bus> Cpu<B> {
    pub fn with_bus(bus: B) -> Self {
        Self::with_config(bus, CpuConfig::default())
    }

    pub fn with_config(bus: B, config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            bus,
            table: &OPCODES,
            config,
        };
        cpu.reset();
        cpu
    }

    /// Put the registers back into their power-on state and load PC through
    /// the reset vector at 0xFFFC/0xFFFD. Memory is left as is.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.regs.pc = self.bus.read_word(RESET_VECTOR);
        log::debug!("CPU reset, PC=0x{:04X}", self.regs.pc);
    }
}
