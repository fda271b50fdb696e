use anyhow::{Context, Result};
use clap::Parser;
use intcode_vm::{alarm, int_code::read_int_code, CLIArgs};

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let int_code = read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read int code from given input file({}).",
            args.input_path.display()
        )
    })?;

    let res = alarm::patch_and_run(&int_code, 12, 2)
        .context("Failed to run gravity assist program in 1202 program alarm state.")?;
    println!(
        "After program halts with 1202 program alarm state, value at position 0 is {}.",
        res
    );

    Ok(())
}
