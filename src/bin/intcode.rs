use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use intcode_vm::int_code::{read_int_code, IntCodeComputer, MachineState, RunOptions};

/// Run an int code program with given inputs, print its outputs and the state it stops in.
#[derive(Debug, Parser)]
struct RunnerArgs {
    input_path: PathBuf,
    /// Input values, separated by comma or given multiple times
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    input: Vec<i64>,
    /// Pause after every output and resume without inputs, until the program stops for other reasons
    #[arg(short, long)]
    pause_on_output: bool,
    /// Write memory before running, in the form of ADDR=VALUE
    #[arg(long, value_parser = parse_patch)]
    patch: Vec<(i64, i64)>,
}

fn parse_patch(s: &str) -> Result<(i64, i64)> {
    let (addr, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("Expects patch in the form of ADDR=VALUE, get {}", s))?;
    let addr = addr
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid address({}) in patch", addr))?;
    let value = value
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid value({}) in patch", value))?;

    Ok((addr, value))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = RunnerArgs::parse();
    let int_code = read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read int code from given input file({}).",
            args.input_path.display()
        )
    })?;

    let mut computer = IntCodeComputer::from_program(&int_code);
    for &(addr, value) in &args.patch {
        computer
            .write_at(addr, value)
            .with_context(|| format!("Failed to patch address {} with {}.", addr, value))?;
    }

    let options = RunOptions {
        pause_on_output: args.pause_on_output,
    };
    let mut inputs = args.input.as_slice();
    let state = loop {
        let res = computer
            .run(inputs, options)
            .context("Failed to run int code program.")?;
        for value in &res.output {
            println!("{}", value);
        }

        // Inputs are consumed by the first run only
        inputs = &[];
        if res.state != MachineState::Paused {
            break res.state;
        }
    };

    println!(
        "Program stops in state {:?} after {} steps.",
        state,
        computer.step_count()
    );

    Ok(())
}
