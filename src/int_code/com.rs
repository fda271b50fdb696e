use log::{debug, trace};

use crate::Error;

use super::{
    inst::{Instruction, Param, ParameterMode, Target},
    mem::Memory,
    parse_int_code,
};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum MachineState {
    #[default]
    Running,
    AwaitingInput,
    Paused,
    Halted,
    OutOfBounds,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub pause_on_output: bool,
}

impl RunOptions {
    pub fn pause_on_output() -> Self {
        Self {
            pause_on_output: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub output: Vec<i64>,
    pub state: MachineState,
}

/// Int code interpreter owning its memory and cursors, resumes exactly where the last run stopped.
#[derive(Debug, Clone)]
pub struct IntCodeComputer {
    mem: Memory,
    inst_p: usize,
    rel_base: i64,
    state: MachineState,
    step_count: usize,
}

impl IntCodeComputer {
    pub fn from_program(image: &[i64]) -> Self {
        Self {
            mem: Memory::from(image),
            inst_p: 0,
            rel_base: 0,
            state: MachineState::Running,
            step_count: 0,
        }
    }

    pub fn from_text(text: &str) -> Result<Self, Error> {
        parse_int_code(text).map(|image| Self::from_program(&image))
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn halted(&self) -> bool {
        self.state == MachineState::Halted
    }

    pub fn inst_p(&self) -> usize {
        self.inst_p
    }

    pub fn rel_base(&self) -> i64 {
        self.rel_base
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Memory from address 0 up to the dense part's end, far writes are only visible by `read_at`.
    pub fn memory(&self) -> &[i64] {
        self.mem.as_slice()
    }

    pub fn read_at(&self, addr: i64) -> Result<i64, Error> {
        self.mem.read(addr)
    }

    pub fn write_at(&mut self, addr: i64, value: i64) -> Result<(), Error> {
        self.mem.write(addr, value)
    }

    /// Execute until halt, input exhaustion, (optionally) first output, or running off the memory end.
    pub fn run(&mut self, inputs: &[i64], options: RunOptions) -> Result<ExecutionResult, Error> {
        let mut inputs = inputs.iter().copied();
        let mut output = Vec::new();
        self.state = MachineState::Running;

        let state = loop {
            if self.inst_p >= self.mem.len() {
                debug!(
                    "Instruction pointer({}) walked past memory end({}) without halt.",
                    self.inst_p,
                    self.mem.len()
                );
                break MachineState::OutOfBounds;
            }

            let inst = Instruction::decode(&self.mem, self.inst_p)?;
            trace!("Step # {}: {:?} @ {}.", self.step_count, inst, self.inst_p);
            let suspend = self.execute(inst, &mut inputs, &mut output)?;
            if suspend != Some(MachineState::AwaitingInput) {
                self.step_count += 1;
            }
            if let Some(state) = suspend {
                break state;
            }

            if options.pause_on_output && !output.is_empty() {
                debug!("Paused after output({:?}) @ {}.", output, self.inst_p);
                break MachineState::Paused;
            }
        };

        let unread = inputs.count();
        if unread > 0 {
            debug!("Discard {} unread input(s) at the end of run.", unread);
        }

        self.state = state;
        Ok(ExecutionResult { output, state })
    }

    // Returns state to suspend in, instruction pointer doesn't move when suspended.
    fn execute<I>(
        &mut self,
        inst: Instruction,
        inputs: &mut I,
        output: &mut Vec<i64>,
    ) -> Result<Option<MachineState>, Error>
    where
        I: Iterator<Item = i64>,
    {
        match inst {
            Instruction::Add(lhs, rhs, dst) => {
                let value = self.read(lhs)?.checked_add(self.read(rhs)?);
                let value = value.ok_or_else(|| self.overflow())?;
                self.write(dst, value)?;
            }
            Instruction::Multiply(lhs, rhs, dst) => {
                let value = self.read(lhs)?.checked_mul(self.read(rhs)?);
                let value = value.ok_or_else(|| self.overflow())?;
                self.write(dst, value)?;
            }
            Instruction::Input(dst) => match inputs.next() {
                Some(value) => self.write(dst, value)?,
                None => {
                    debug!("Blocked by requiring input @ {}.", self.inst_p);
                    return Ok(Some(MachineState::AwaitingInput));
                }
            },
            Instruction::Output(src) => output.push(self.read(src)?),
            Instruction::JumpIfTrue(cond, target) => {
                if self.read(cond)? != 0 {
                    return self.jump(target).map(|_| None);
                }
            }
            Instruction::JumpIfFalse(cond, target) => {
                if self.read(cond)? == 0 {
                    return self.jump(target).map(|_| None);
                }
            }
            Instruction::LessThan(lhs, rhs, dst) => {
                let value = i64::from(self.read(lhs)? < self.read(rhs)?);
                self.write(dst, value)?;
            }
            Instruction::Equals(lhs, rhs, dst) => {
                let value = i64::from(self.read(lhs)? == self.read(rhs)?);
                self.write(dst, value)?;
            }
            Instruction::AdjustRelativeBase(offset) => {
                let offset = self.read(offset)?;
                self.rel_base = self
                    .rel_base
                    .checked_add(offset)
                    .ok_or_else(|| self.overflow())?;
            }
            Instruction::Halt => {
                debug!("Halt @ {} after {} steps.", self.inst_p, self.step_count);
                return Ok(Some(MachineState::Halted));
            }
        }

        self.inst_p += inst.length();
        Ok(None)
    }

    fn read(&self, param: Param) -> Result<i64, Error> {
        match param.mode {
            ParameterMode::Immediate => Ok(param.value),
            ParameterMode::Position | ParameterMode::Relative => {
                self.mem.read(self.address(param)?)
            }
        }
    }

    fn write(&mut self, Target(param): Target, value: i64) -> Result<(), Error> {
        let addr = self.address(param)?;
        self.mem.write(addr, value)
    }

    fn address(&self, param: Param) -> Result<i64, Error> {
        if param.mode == ParameterMode::Relative {
            self.rel_base
                .checked_add(param.value)
                .ok_or(Error::RelativeAddressOverflow(self.rel_base, param.value))
        } else {
            Ok(param.value)
        }
    }

    fn jump(&mut self, target: Param) -> Result<(), Error> {
        let target = self.read(target)?;
        self.inst_p = usize::try_from(target).map_err(|_| Error::OutOfBoundsAddress(target))?;
        Ok(())
    }

    fn overflow(&self) -> Error {
        Error::ArithmeticOverflow(self.inst_p as i64)
    }
}
