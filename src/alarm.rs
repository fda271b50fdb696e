use log::debug;

use crate::{
    int_code::{IntCodeComputer, MachineState, RunOptions},
    Error,
};

const NOUN_ADDR: i64 = 1;
const VERB_ADDR: i64 = 2;
const RESULT_ADDR: i64 = 0;

/// Replace noun and verb of the program, run it to the end and read its result at address 0.
pub fn patch_and_run(int_code: &[i64], noun: i64, verb: i64) -> Result<i64, Error> {
    let mut computer = IntCodeComputer::from_program(int_code);
    computer.write_at(NOUN_ADDR, noun)?;
    computer.write_at(VERB_ADDR, verb)?;
    let res = computer.run(&[], RunOptions::default())?;
    if res.state == MachineState::OutOfBounds {
        return Err(Error::UnexpectedOutOfBounds);
    }

    computer.read_at(RESULT_ADDR)
}

/// Search nouns and verbs in [0, 100) for the given result, returns 100 * noun + verb.
pub fn find_noun_verb(int_code: &[i64], target: i64) -> Option<i64> {
    for noun in 0..100 {
        for verb in 0..100 {
            // Some patched programs are broken, just skip them
            match patch_and_run(int_code, noun, verb) {
                Ok(res) if res == target => return Some(100 * noun + verb),
                Ok(_) => (),
                Err(e) => debug!("Program with noun({}), verb({}) failed: {}", noun, verb, e),
            }
        }
    }

    None
}
