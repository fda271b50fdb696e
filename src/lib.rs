use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

pub mod alarm;
pub mod amp;
pub mod arcade;
pub mod int_code;
pub mod paint;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Get empty code in given program text")]
    EmptyProgram,
    #[error("Failed to parse integer from string({0})")]
    ParseIntError(String),
    #[error("Invalid memory address({0}) found in execution")]
    OutOfBoundsAddress(i64),
    #[error("Invalid parameter mode(immediate) found when write into memory, instruction({0})")]
    InvalidWriteMode(i64),
    #[error("Relative base({0}) with offset({1}) overflows memory address")]
    RelativeAddressOverflow(i64, i64),
    #[error("Invalid operation code({0}) found")]
    InvalidOpcode(i64),
    #[error("Unknown parameter mode({0}) found")]
    UnknownParameterMode(i64),
    #[error("Arithmetic overflow in instruction at {0}")]
    ArithmeticOverflow(i64),
    #[error("Program went out of bounds without halting")]
    UnexpectedOutOfBounds,
    #[error("Process(Amplifier #{0}) stuck in amplifier loop without output")]
    AmplifierStuck(usize),
    #[error("Amplifiers have empty result with settings({0:?})")]
    EmptyAmplifierOutput(Vec<i64>),
    #[error("Invalid command from outputs({0:?}) of paint program")]
    InvalidPaintCommand(Vec<i64>),
    #[error("Invalid paint color number({0}) found in output of paint program")]
    InvalidPaintColor(i64),
    #[error("Invalid turn direction number({0}) found in output of paint program")]
    InvalidTurnDirection(i64),
    #[error("Incomplete tile info(expects three integers) when parsing {}(th) tile", .0 + 1)]
    IncompleteTile(usize),
    #[error("Invalid tile id({0}) encountered")]
    InvalidTileId(i64),
}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}
