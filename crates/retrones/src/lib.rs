use std::fmt;

use anyhow::{Context, Result};
use typed_builder::TypedBuilder;

use retrones_cpu::memory::RESET_VECTOR;
use retrones_cpu::{Bus, Cpu, CpuConfig, CpuError, Memory, Registers, ADDRESS_SPACE_SIZE};

/// How an image is placed in memory and how long it is allowed to run.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct RunConfig {
    /// Where an image shorter than 64 KiB is copied to.
    #[builder(default = 0x8000)]
    pub load_address: u16,
    /// Written to the reset vector after loading, when set.
    #[builder(default)]
    pub entry: Option<u16>,
    #[builder(default = 1_000_000)]
    pub max_steps: u64,
    /// Skip undocumented opcodes as one-byte NOPs instead of stopping.
    #[builder(default = false)]
    pub illegal_as_nop: bool,
    #[builder(default = true)]
    pub indirect_jmp_page_wrap: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    MaxSteps,
    /// An instruction left PC where it was, e.g. `JMP *` or `BNE *`.
    Trap { pc: u16 },
    Error(CpuError),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::MaxSteps => f.write_str("step limit reached"),
            StopReason::Trap { pc } => write!(f, "trapped at PC=0x{pc:04X}"),
            StopReason::Error(err) => write!(f, "{err}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub steps: u64,
    pub stop: StopReason,
    pub registers: Registers,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.registers;
        write!(
            f,
            "{} after {} steps: A={:02X} X={:02X} Y={:02X} P={:02X} SP={:02X} PC={:04X}",
            self.stop,
            self.steps,
            r.a,
            r.x,
            r.y,
            r.status(),
            r.sp,
            r.pc
        )
    }
}

/// Place `image` in `memory`.
///
/// An image covering the whole address space replaces it, vectors included.
/// Anything shorter is copied to `config.load_address`. The reset vector is
/// then overwritten if `config.entry` is set.
pub fn load_image(memory: &mut Memory, image: &[u8], config: &RunConfig) -> Result<()> {
    if image.len() >= ADDRESS_SPACE_SIZE {
        *memory = Memory::from_image(image)?;
    } else {
        memory.load(config.load_address, image).with_context(|| {
            format!(
                "failed to load {} bytes at 0x{:04X}",
                image.len(),
                config.load_address
            )
        })?;
    }

    if let Some(entry) = config.entry {
        memory.load(RESET_VECTOR, &entry.to_le_bytes())?;
    }
    Ok(())
}

/// Load `image`, reset a fresh CPU and run it until it stops.
pub fn run(image: &[u8], config: &RunConfig) -> Result<RunReport> {
    let mut memory = Memory::new();
    load_image(&mut memory, image, config)?;

    let cpu_config = CpuConfig::builder()
        .indirect_jmp_page_wrap(config.indirect_jmp_page_wrap)
        .build();
    let mut cpu = Cpu::with_config(memory, cpu_config);
    log::info!(
        "loaded {} bytes, starting at PC=0x{:04X}",
        image.len(),
        cpu.pc()
    );

    Ok(run_cpu(&mut cpu, config))
}

/// Step an already prepared CPU under the limits in `config`.
pub fn run_cpu<B: Bus>(cpu: &mut Cpu<B>, config: &RunConfig) -> RunReport {
    let mut steps = 0;
    let stop = loop {
        if steps >= config.max_steps {
            break StopReason::MaxSteps;
        }

        let pc = cpu.pc();
        match cpu.step() {
            Ok(_) => {
                steps += 1;
                if cpu.pc() == pc {
                    break StopReason::Trap { pc };
                }
            }
            Err(CpuError::InvalidOpcode { opcode, pc }) if config.illegal_as_nop => {
                log::warn!("treating opcode 0x{opcode:02X} at PC=0x{pc:04X} as NOP");
                cpu.set_pc(pc.wrapping_add(1));
                steps += 1;
            }
            Err(err) => {
                log::error!("{err}");
                break StopReason::Error(err);
            }
        }
    };

    log::info!("{stop} after {steps} steps");
    RunReport {
        steps,
        stop,
        registers: cpu.regs,
    }
}
