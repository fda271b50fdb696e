pub mod com;
mod inst;
mod mem;

use std::{fs, path::Path};

use crate::Error;

pub use com::{ExecutionResult, IntCodeComputer, MachineState, RunOptions};

pub fn read_int_code<P>(path: P) -> Result<Vec<i64>, Error>
where
    P: AsRef<Path>,
{
    let text = fs::read_to_string(path)?;
    parse_int_code(&text)
}

pub fn parse_int_code(text: &str) -> Result<Vec<i64>, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyProgram);
    }

    text.split(',')
        .map(|s| {
            s.trim()
                .parse::<i64>()
                .map_err(|_| Error::ParseIntError(s.to_string()))
        })
        .collect::<Result<Vec<_>, Error>>()
}
