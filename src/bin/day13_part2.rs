use anyhow::{Context, Result};
use clap::Parser;
use intcode_vm::{arcade, int_code::read_int_code, CLIArgs};

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let int_code = read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read int code from given input file({}).",
            args.input_path.display()
        )
    })?;

    let score = arcade::play(&int_code).context("Failed to play game program.")?;
    println!("After breaking all the blocks, the score is {}.", score);

    Ok(())
}
