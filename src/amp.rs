use itertools::Itertools;
use log::debug;

use crate::{
    int_code::{IntCodeComputer, MachineState, RunOptions},
    Error,
};

/// Run amplifiers one after another, each one gets its phase setting and the previous signal.
pub fn amp_chain(int_code: &[i64], settings: &[i64]) -> Result<i64, Error> {
    let mut signal = 0;
    for (i, &phase) in settings.iter().enumerate() {
        let mut amp = IntCodeComputer::from_program(int_code);
        let res = amp.run(&[phase, signal], RunOptions::default())?;
        match res.state {
            MachineState::Halted => (),
            MachineState::OutOfBounds => return Err(Error::UnexpectedOutOfBounds),
            _ => return Err(Error::AmplifierStuck(i)),
        }

        signal = res
            .output
            .first()
            .copied()
            .ok_or_else(|| Error::EmptyAmplifierOutput(Vec::from(settings)))?;
    }

    Ok(signal)
}

/// Run amplifiers in a feedback loop, output of the last one goes back into the first one.
pub fn amp_loop(int_code: &[i64], settings: &[i64]) -> Result<i64, Error> {
    let mut amps = settings
        .iter()
        .enumerate()
        .map(|(i, &phase)| {
            let mut amp = IntCodeComputer::from_program(int_code);
            let res = amp.run(&[phase], RunOptions::default())?;
            if res.state == MachineState::OutOfBounds {
                return Err(Error::UnexpectedOutOfBounds);
            }
            if !res.output.is_empty() || res.state != MachineState::AwaitingInput {
                debug!(
                    "Amplifier #{} stops in state {:?} with outputs({:?}) after phase setting({}).",
                    i, res.state, res.output, phase
                );
            }

            Ok(amp)
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let mut signal = 0;
    let mut round = 0;
    while !amps.iter().any(|a| a.halted()) {
        for (i, amp) in amps.iter_mut().enumerate() {
            let res = amp.run(&[signal], RunOptions::pause_on_output())?;
            match res.state {
                MachineState::Paused => signal = res.output[0],
                MachineState::Halted => (),
                MachineState::OutOfBounds => return Err(Error::UnexpectedOutOfBounds),
                MachineState::AwaitingInput | MachineState::Running => {
                    return Err(Error::AmplifierStuck(i))
                }
            }
        }

        round += 1;
    }

    debug!(
        "Amplifier loop with settings({:?}) halts after {} rounds, get signal({}).",
        settings, round, signal
    );
    Ok(signal)
}

/// Find the highest signal among all permutations of given phase settings.
pub fn max_signal<F>(int_code: &[i64], phases: &[i64], run_amps: F) -> Result<i64, Error>
where
    F: Fn(&[i64], &[i64]) -> Result<i64, Error>,
{
    let mut max_signal = None;
    for settings in phases.iter().copied().permutations(phases.len()) {
        let signal = run_amps(int_code, &settings)?;
        if max_signal.map_or(true, |m| signal > m) {
            max_signal = Some(signal);
        }
    }

    max_signal.ok_or_else(|| Error::EmptyAmplifierOutput(Vec::from(phases)))
}
