use int_enum::IntEnum;

use crate::Error;

use super::mem::Memory;

#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, IntEnum, PartialEq, Eq)]
pub enum ParameterMode {
    #[default]
    Position = 0,
    Immediate = 1,
    Relative = 2,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntEnum, Hash)]
pub enum InstOpcode {
    Add = 1,
    Multiply = 2,
    Input = 3,
    Output = 4,
    JumpIfTrue = 5,
    JumpIfFalse = 6,
    LessThan = 7,
    Equals = 8,
    AdjustRelativeBase = 9,
    Halt = 99,
}

impl InstOpcode {
    pub fn length(&self) -> usize {
        match self {
            InstOpcode::Add
            | InstOpcode::Multiply
            | InstOpcode::LessThan
            | InstOpcode::Equals => 4,
            InstOpcode::JumpIfTrue | InstOpcode::JumpIfFalse => 3,
            InstOpcode::Input | InstOpcode::Output | InstOpcode::AdjustRelativeBase => 2,
            InstOpcode::Halt => 1,
        }
    }
}

/// Raw parameter value with the mode it should be resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub value: i64,
    pub mode: ParameterMode,
}

/// Parameter which is a destination in memory, never in immediate mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target(pub Param);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Add(Param, Param, Target),
    Multiply(Param, Param, Target),
    Input(Target),
    Output(Param),
    JumpIfTrue(Param, Param),
    JumpIfFalse(Param, Param),
    LessThan(Param, Param, Target),
    Equals(Param, Param, Target),
    AdjustRelativeBase(Param),
    Halt,
}

impl Instruction {
    /// Decode instruction starting at given instruction pointer, always from current memory.
    pub fn decode(mem: &Memory, inst_p: usize) -> Result<Self, Error> {
        let inst_p = inst_p as i64;
        let raw = mem.read(inst_p)?;
        let opcode = parse_opcode(raw)?;
        let mut decoder = ParamDecoder {
            mem,
            inst_p,
            raw,
            count: 0,
        };

        let inst = match opcode {
            InstOpcode::Add => {
                Instruction::Add(decoder.read()?, decoder.read()?, decoder.write()?)
            }
            InstOpcode::Multiply => {
                Instruction::Multiply(decoder.read()?, decoder.read()?, decoder.write()?)
            }
            InstOpcode::Input => Instruction::Input(decoder.write()?),
            InstOpcode::Output => Instruction::Output(decoder.read()?),
            InstOpcode::JumpIfTrue => Instruction::JumpIfTrue(decoder.read()?, decoder.read()?),
            InstOpcode::JumpIfFalse => Instruction::JumpIfFalse(decoder.read()?, decoder.read()?),
            InstOpcode::LessThan => {
                Instruction::LessThan(decoder.read()?, decoder.read()?, decoder.write()?)
            }
            InstOpcode::Equals => {
                Instruction::Equals(decoder.read()?, decoder.read()?, decoder.write()?)
            }
            InstOpcode::AdjustRelativeBase => Instruction::AdjustRelativeBase(decoder.read()?),
            InstOpcode::Halt => Instruction::Halt,
        };

        Ok(inst)
    }

    pub fn opcode(&self) -> InstOpcode {
        match self {
            Instruction::Add(..) => InstOpcode::Add,
            Instruction::Multiply(..) => InstOpcode::Multiply,
            Instruction::Input(_) => InstOpcode::Input,
            Instruction::Output(_) => InstOpcode::Output,
            Instruction::JumpIfTrue(..) => InstOpcode::JumpIfTrue,
            Instruction::JumpIfFalse(..) => InstOpcode::JumpIfFalse,
            Instruction::LessThan(..) => InstOpcode::LessThan,
            Instruction::Equals(..) => InstOpcode::Equals,
            Instruction::AdjustRelativeBase(_) => InstOpcode::AdjustRelativeBase,
            Instruction::Halt => InstOpcode::Halt,
        }
    }

    pub fn length(&self) -> usize {
        self.opcode().length()
    }
}

struct ParamDecoder<'a> {
    mem: &'a Memory,
    inst_p: i64,
    raw: i64,
    count: u32,
}

impl ParamDecoder<'_> {
    fn read(&mut self) -> Result<Param, Error> {
        let mode_digit = self.raw / 10i64.pow(self.count + 2) % 10;
        let mode = u8::try_from(mode_digit)
            .ok()
            .and_then(|d| ParameterMode::from_int(d).ok())
            .ok_or(Error::UnknownParameterMode(mode_digit))?;
        self.count += 1;
        let value = self.mem.read(self.inst_p + self.count as i64)?;

        Ok(Param { value, mode })
    }

    fn write(&mut self) -> Result<Target, Error> {
        let param = self.read()?;
        if param.mode == ParameterMode::Immediate {
            return Err(Error::InvalidWriteMode(self.raw));
        }

        Ok(Target(param))
    }
}

// Two lowest digits are operation code, next three digits are parameter modes.
fn parse_opcode(raw: i64) -> Result<InstOpcode, Error> {
    if !(0..100_000).contains(&raw) {
        return Err(Error::InvalidOpcode(raw));
    }

    u8::try_from(raw % 100)
        .ok()
        .and_then(|n| InstOpcode::from_int(n).ok())
        .ok_or(Error::InvalidOpcode(raw))
}
