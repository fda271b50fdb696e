use anyhow::{Context, Result};
use clap::Parser;
use intcode_vm::{
    amp::{amp_loop, max_signal},
    int_code::read_int_code,
    CLIArgs,
};

const PHASES: [i64; 5] = [5, 6, 7, 8, 9];

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let int_code = read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read int code from given input file({}).",
            args.input_path.display()
        )
    })?;

    let signal = max_signal(&int_code, &PHASES, amp_loop)
        .context("Failed to run amplifiers in a feedback loop.")?;
    println!(
        "The highest signal that can be sent to the thrusters with amplifiers in a feedback loop is {}.",
        signal
    );

    Ok(())
}
