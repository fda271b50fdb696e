use anyhow::{Context, Result};
use clap::Parser;
use intcode_vm::{alarm, int_code::read_int_code, CLIArgs};

const TARGET_OUTPUT: i64 = 19690720;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let int_code = read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read int code from given input file({}).",
            args.input_path.display()
        )
    })?;

    match alarm::find_noun_verb(&int_code, TARGET_OUTPUT) {
        Some(answer) => println!(
            "The noun and verb producing output {} give answer {}.",
            TARGET_OUTPUT, answer
        ),
        None => println!(
            "There is no noun and verb in [0, 100) producing output {}.",
            TARGET_OUTPUT
        ),
    }

    Ok(())
}
