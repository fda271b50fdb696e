use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use intcode_vm::int_code::{read_int_code, IntCodeComputer, MachineState, RunOptions};

#[derive(Debug, Parser)]
struct Day5Args {
    input_path: PathBuf,
    /// ID of the system to test, 1 for air conditioner, 5 for thermal radiator controller
    #[arg(short, long, default_value_t = 1)]
    system_id: i64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Day5Args::parse();
    let int_code = read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read int code from given input file({}).",
            args.input_path.display()
        )
    })?;

    let mut computer = IntCodeComputer::from_program(&int_code);
    let res = computer
        .run(&[args.system_id], RunOptions::default())
        .with_context(|| {
            format!(
                "Failed to run diagnostic program for system {}.",
                args.system_id
            )
        })?;
    if res.state != MachineState::Halted {
        bail!(
            "Diagnostic program stops in state {:?} before halt.",
            res.state
        );
    }

    println!("Diagnostic program outputs {:?}.", res.output);
    match res.output.last() {
        Some(code) => println!(
            "The diagnostic code for system {} is {}.",
            args.system_id, code
        ),
        None => println!("Diagnostic program produces no diagnostic code."),
    }

    Ok(())
}
