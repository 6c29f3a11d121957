use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use retrones::{RunConfig, StopReason};

const USAGE: &str = "usage: retrones <image> [--load ADDR] [--entry ADDR] [--steps N] \
                     [--illegal-nop] [--clean-indirect]";

struct Args {
    image: PathBuf,
    config: RunConfig,
}

/// Addresses are hex, with or without a `0x` or `$` prefix.
fn parse_address(text: &str) -> Result<u16> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix('$'))
        .unwrap_or(text);
    u16::from_str_radix(digits, 16).with_context(|| format!("invalid address '{text}'"))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut image = None;
    let mut load_address = 0x8000;
    let mut entry = None;
    let mut max_steps = 1_000_000;
    let mut illegal_as_nop = false;
    let mut indirect_jmp_page_wrap = true;

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .with_context(|| format!("{flag} expects a value"))
        };
        match arg.as_str() {
            "--load" => load_address = parse_address(&value("--load")?)?,
            "--entry" => entry = Some(parse_address(&value("--entry")?)?),
            "--steps" => {
                let text = value("--steps")?;
                max_steps = text
                    .parse()
                    .with_context(|| format!("invalid step count '{text}'"))?;
            }
            "--illegal-nop" => illegal_as_nop = true,
            "--clean-indirect" => indirect_jmp_page_wrap = false,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other if other.starts_with('-') => bail!("unknown option '{other}'\n{USAGE}"),
            other => {
                if image.is_some() {
                    bail!("unexpected argument '{other}'\n{USAGE}");
                }
                image = Some(PathBuf::from(other));
            }
        }
    }

    let Some(image) = image else {
        bail!("no image given\n{USAGE}");
    };

    let config = RunConfig::builder()
        .load_address(load_address)
        .entry(entry)
        .max_steps(max_steps)
        .illegal_as_nop(illegal_as_nop)
        .indirect_jmp_page_wrap(indirect_jmp_page_wrap)
        .build();

    Ok(Args { image, config })
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args(std::env::args().skip(1))?;
    log::info!("Running image: '{}'", args.image.display());

    let image = std::fs::read(&args.image)
        .with_context(|| format!("failed to read image '{}'", args.image.display()))?;
    let report = retrones::run(&image, &args.config)?;

    println!("{report}");
    if let StopReason::Error(_) = report.stop {
        std::process::exit(1);
    }
    Ok(())
}
