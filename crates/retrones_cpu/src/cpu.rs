pub mod addressing;
mod alu;
mod exec;
mod helpers;
pub mod info;
mod init;
pub mod regs;
mod step;
pub mod table;

use typed_builder::TypedBuilder;

use crate::memory::{Bus, Memory};
use regs::Registers;
use table::OpcodeTable;

/// Behavioural switches for the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct CpuConfig {
    /// Reproduce the NMOS `JMP ($xxFF)` defect: the high byte of the target
    /// is fetched from the start of the pointer's page instead of the next
    /// page. Software written for the console can depend on this.
    #[builder(default = true)]
    pub indirect_jmp_page_wrap: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Ricoh 2A03 CPU core.
///
/// The CPU owns its bus. `Memory` is the plain 64 KiB store; hosts that need
/// mapped I/O supply their own `Bus` through `Cpu::with_bus`.
#[derive(Clone, Debug)]
pub struct Cpu<B: Bus = Memory> {
    pub regs: Registers,
    bus: B,
    table: &'static OpcodeTable,
    config: CpuConfig,
}

impl<B: Bus> Cpu<B> {
    #[inline]
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    #[inline]
    pub fn set_pc(&mut self, pc: u16) {
        self.regs.pc = pc;
    }

    pub fn read_byte(&mut self, addr: u16) -> u8 {
        self.bus.read_byte(addr)
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.bus.write_byte(addr, value);
    }

    pub fn read_word(&mut self, addr: u16) -> u16 {
        self.bus.read_word(addr)
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn into_bus(self) -> B {
        self.bus
    }

    pub fn config(&self) -> CpuConfig {
        self.config
    }

    pub fn table(&self) -> &'static OpcodeTable {
        self.table
    }
}
