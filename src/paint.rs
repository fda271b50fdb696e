use std::collections::HashMap;

use int_enum::IntEnum;
use log::debug;

use crate::{
    int_code::{IntCodeComputer, MachineState, RunOptions},
    Error,
};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Block {
    pub x: i32,
    pub y: i32,
}

impl Block {
    fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    fn left(&self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    fn right(&self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    fn unit_vec(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

#[repr(u8)]
#[derive(IntEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    #[default]
    Black = 0,
    White = 1,
}

pub struct PaintRobot {
    cur_dir: Direction,
    cur_block: Block,
    start_color: Color,
    paint_count: usize,
    paint_blocks: HashMap<Block, Color>,
}

impl PaintRobot {
    pub fn new(start_color: Color) -> Self {
        Self {
            cur_dir: Direction::North,
            cur_block: Block::new(0, 0),
            start_color,
            paint_count: 0,
            paint_blocks: HashMap::new(),
        }
    }

    pub fn paint_count(&self) -> usize {
        self.paint_count
    }

    pub fn block_count(&self) -> usize {
        self.paint_blocks.len()
    }

    pub fn color_at(&self, block: Block) -> Color {
        match self.paint_blocks.get(&block) {
            Some(&c) => c,
            None if block == Block::new(0, 0) => self.start_color,
            None => Color::Black,
        }
    }

    /// Painted hull from top row to bottom row, '#' for white and '.' for black.
    pub fn render(&self) -> String {
        let (min_x, max_x) = min_max(self.paint_blocks.keys().map(|b| b.x));
        let (min_y, max_y) = min_max(self.paint_blocks.keys().map(|b| b.y));
        let mut hull = String::new();
        for y in (min_y..=max_y).rev() {
            for x in min_x..=max_x {
                hull.push(match self.color_at(Block::new(x, y)) {
                    Color::White => '#',
                    Color::Black => '.',
                });
            }
            hull.push('\n');
        }

        hull
    }

    fn cur_color(&self) -> Color {
        self.color_at(self.cur_block)
    }

    fn exe_command(&mut self, color: i64, turn: i64) -> Result<(), Error> {
        let color = u8::try_from(color)
            .ok()
            .and_then(|n| Color::from_int(n).ok())
            .ok_or(Error::InvalidPaintColor(color))?;
        self.paint(color);
        match turn {
            0 => self.turn_left(),
            1 => self.turn_right(),
            _ => return Err(Error::InvalidTurnDirection(turn)),
        }
        self.forward();

        Ok(())
    }

    fn paint(&mut self, color: Color) {
        self.paint_blocks.insert(self.cur_block, color);
        self.paint_count += 1;
    }

    fn turn_left(&mut self) {
        self.cur_dir = self.cur_dir.left();
    }

    fn turn_right(&mut self) {
        self.cur_dir = self.cur_dir.right();
    }

    fn forward(&mut self) {
        let (offset_x, offset_y) = self.cur_dir.unit_vec();
        self.cur_block.x += offset_x;
        self.cur_block.y += offset_y;
    }
}

fn min_max<I: Iterator<Item = i32>>(values: I) -> (i32, i32) {
    values.fold((0, 0), |(min, max), v| (min.min(v), max.max(v)))
}

/// Drive paint program with the robot's camera until the program halts.
pub fn sim_paint(int_code: &[i64], start_color: Color) -> Result<PaintRobot, Error> {
    let mut robot = PaintRobot::new(start_color);
    let mut computer = IntCodeComputer::from_program(int_code);
    let mut pending = Vec::new();
    loop {
        let camera = i64::from(robot.cur_color().int_value());
        let res = computer.run(&[camera], RunOptions::default())?;
        pending.extend(res.output);

        let cmd_count = pending.len() / 2;
        for cmd in pending.chunks_exact(2) {
            robot.exe_command(cmd[0], cmd[1])?;
        }
        pending.drain(..cmd_count * 2);

        match res.state {
            MachineState::Halted if pending.is_empty() => break,
            MachineState::Halted => return Err(Error::InvalidPaintCommand(pending)),
            MachineState::OutOfBounds => return Err(Error::UnexpectedOutOfBounds),
            _ => (),
        }
    }

    debug!(
        "Paint program halts after {} steps, robot has painted {} times.",
        computer.step_count(),
        robot.paint_count()
    );
    Ok(robot)
}
