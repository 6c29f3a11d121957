mod arith;
mod branch;
mod compare;
mod control;
mod flags;
mod incdec;
mod load;
mod logic;
mod shift;
mod stack;

use crate::memory::Bus;

use super::addressing::Operand;
use super::regs::Status;
use super::table::Mnemonic;
use super::Cpu;

impl<B: Bus> Cpu<B> {
    /// Run the semantics of `mnemonic` on an already resolved operand.
    ///
    /// PC has been advanced past the instruction before this is called;
    /// branches and jumps overwrite it.
    pub(super) fn execute(&mut self, mnemonic: Mnemonic, operand: Operand) {
        match mnemonic {
            // Logic
            Mnemonic::Ora => self.exec_ora(operand),
            Mnemonic::And => self.exec_and(operand),
            Mnemonic::Eor => self.exec_eor(operand),
            Mnemonic::Bit => self.exec_bit(operand),

            // Shift / rotate
            Mnemonic::Asl => self.exec_asl(operand),
            Mnemonic::Lsr => self.exec_lsr(operand),
            Mnemonic::Rol => self.exec_rol(operand),
            Mnemonic::Ror => self.exec_ror(operand),

            // Arithmetic
            Mnemonic::Adc => self.exec_adc(operand),
            Mnemonic::Sbc => self.exec_sbc(operand),

            // Compare
            Mnemonic::Cmp => self.exec_cmp(operand),
            Mnemonic::Cpx => self.exec_cpx(operand),
            Mnemonic::Cpy => self.exec_cpy(operand),

            // Increment / decrement
            Mnemonic::Inc => self.exec_inc(operand),
            Mnemonic::Dec => self.exec_dec(operand),
            Mnemonic::Inx => self.exec_inx(),
            Mnemonic::Iny => self.exec_iny(),
            Mnemonic::Dex => self.exec_dex(),
            Mnemonic::Dey => self.exec_dey(),

            // Flags
            Mnemonic::Clc => self.exec_flag(Status::CARRY, false),
            Mnemonic::Sec => self.exec_flag(Status::CARRY, true),
            Mnemonic::Cli => self.exec_flag(Status::IRQ_DISABLE, false),
            Mnemonic::Sei => self.exec_flag(Status::IRQ_DISABLE, true),
            Mnemonic::Cld => self.exec_flag(Status::DECIMAL, false),
            Mnemonic::Sed => self.exec_flag(Status::DECIMAL, true),
            Mnemonic::Clv => self.exec_flag(Status::OVERFLOW, false),

            // Branches
            Mnemonic::Bcc
            | Mnemonic::Bcs
            | Mnemonic::Beq
            | Mnemonic::Bmi
            | Mnemonic::Bne
            | Mnemonic::Bpl
            | Mnemonic::Bvc
            | Mnemonic::Bvs => self.exec_branch(mnemonic, operand),

            // Load / store / transfer
            Mnemonic::Lda => self.exec_lda(operand),
            Mnemonic::Ldx => self.exec_ldx(operand),
            Mnemonic::Ldy => self.exec_ldy(operand),
            Mnemonic::Sta => self.exec_sta(operand),
            Mnemonic::Stx => self.exec_stx(operand),
            Mnemonic::Sty => self.exec_sty(operand),
            Mnemonic::Tax => self.exec_tax(),
            Mnemonic::Tay => self.exec_tay(),
            Mnemonic::Txa => self.exec_txa(),
            Mnemonic::Tya => self.exec_tya(),
            Mnemonic::Tsx => self.exec_tsx(),
            Mnemonic::Txs => self.exec_txs(),

            // Stack
            Mnemonic::Pha => self.exec_pha(),
            Mnemonic::Pla => self.exec_pla(),
            Mnemonic::Php => self.exec_php(),
            Mnemonic::Plp => self.exec_plp(),

            // Control
            Mnemonic::Jmp => self.exec_jmp(operand),
            Mnemonic::Jsr => self.exec_jsr(operand),
            Mnemonic::Rts => self.exec_rts(),
            Mnemonic::Nop => {}

            // `step` rejects these before any state changes.
            Mnemonic::Brk | Mnemonic::Rti => {
                unreachable!("{mnemonic} reached the execution unit")
            }
        }
    }

    /// Value of a read operand: the immediate byte, A, or the byte at the
    /// effective address.
    fn load_operand(&mut self, operand: Operand) -> u8 {
        match operand {
            Operand::Immediate(value) => value,
            Operand::Accumulator => self.regs.a,
            Operand::Address(addr) => self.bus.read_byte(addr),
            Operand::Implied => unreachable!("implied operand has no value"),
        }
    }

    fn store_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.regs.a = value,
            Operand::Address(addr) => self.bus.write_byte(addr, value),
            Operand::Immediate(_) | Operand::Implied => {
                unreachable!("cannot store to {operand:?}")
            }
        }
    }

    fn operand_address(operand: Operand) -> u16 {
        match operand {
            Operand::Address(addr) => addr,
            _ => unreachable!("expected an address operand, got {operand:?}"),
        }
    }

    /// Read-modify-write on A or memory.
    fn modify(&mut self, operand: Operand, op: fn(&mut Self, u8) -> u8) {
        let value = self.load_operand(operand);
        let result = op(self, value);
        self.store_operand(operand, result);
    }
}
