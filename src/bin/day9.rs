use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use intcode_vm::int_code::{read_int_code, IntCodeComputer, RunOptions};

#[derive(Debug, Parser)]
struct Day9Args {
    input_path: PathBuf,
    /// 1 for test mode, 2 for sensor boost mode
    #[arg(short, long, default_value_t = 1)]
    mode: i64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Day9Args::parse();
    let int_code = read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read int code from given input file({}).",
            args.input_path.display()
        )
    })?;

    let mut computer = IntCodeComputer::from_program(&int_code);
    let res = computer
        .run(&[args.mode], RunOptions::default())
        .with_context(|| format!("Failed to execute BOOST program in mode {}.", args.mode))?;
    println!(
        "BOOST program takes {} steps to stop in state {:?}, get outputs({:?}).",
        computer.step_count(),
        res.state,
        res.output
    );

    Ok(())
}
