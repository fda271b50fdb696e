use anyhow::{Context, Result};
use clap::Parser;
use intcode_vm::{
    int_code::read_int_code,
    paint::{sim_paint, Color},
    CLIArgs,
};

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let int_code = read_int_code(&args.input_path).with_context(|| {
        format!(
            "Failed to read int code from given input file({}).",
            args.input_path.display()
        )
    })?;

    let robot = sim_paint(&int_code, Color::White).context("Failed to run painting program.")?;
    println!("Starting on a white panel, robot paints the hull as:");
    print!("{}", robot.render());

    Ok(())
}
