use crate::error::{CpuError, Result};
use crate::memory::Bus;

use super::info::InstructionInfo;
use super::Cpu;

impl<B: Bus> Cpu<B> {
    /// Fetch, decode and execute one instruction.
    ///
    /// On error nothing has changed: PC still points at the offending opcode
    /// and no register or memory cell was written.
    pub fn step(&mut self) -> Result<InstructionInfo> {
        let pc = self.regs.pc;
        let code = self.bus.read_byte(pc);

        let Some(&opcode) = self.table.get(code) else {
            log::warn!("invalid opcode 0x{code:02X} at PC=0x{pc:04X}");
            return Err(CpuError::InvalidOpcode { opcode: code, pc });
        };

        if opcode.mnemonic.needs_interrupt_support() {
            log::warn!("{} at PC=0x{pc:04X} needs interrupt support", opcode.mnemonic);
            return Err(CpuError::UnimplementedControlFlow {
                mnemonic: opcode.mnemonic,
                pc,
            });
        }

        let mut raw = [code, 0, 0];
        for (i, byte) in raw.iter_mut().enumerate().take(opcode.len as usize).skip(1) {
            *byte = self.bus.read_byte(pc.wrapping_add(i as u16));
        }

        self.regs.pc = pc.wrapping_add(opcode.len as u16);

        let operand = self.resolve(opcode.mode, [raw[1], raw[2]]);
        self.execute(opcode.mnemonic, operand);

        let info = InstructionInfo::new(pc, &opcode, raw);
        log::trace!("{info}");
        Ok(info)
    }
}
