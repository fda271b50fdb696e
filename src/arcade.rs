use std::collections::HashMap;

use int_enum::IntEnum;
use log::{debug, trace};

use crate::{
    int_code::{IntCodeComputer, MachineState, RunOptions},
    Error,
};

const FREE_PLAY_ADDR: i64 = 0;
const FREE_PLAY_QUARTERS: i64 = 2;
const SCORE_POS: (i64, i64) = (-1, 0);

#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, IntEnum, PartialEq, Eq)]
pub enum TileId {
    #[default]
    Empty = 0,
    Wall = 1,
    Block = 2,
    HorizontalPaddle = 3,
    Ball = 4,
}

impl TileId {
    fn from_output(id: i64) -> Result<Self, Error> {
        u8::try_from(id)
            .ok()
            .and_then(|n| TileId::from_int(n).ok())
            .ok_or(Error::InvalidTileId(id))
    }

    fn symbol(&self) -> char {
        match self {
            TileId::Empty => ' ',
            TileId::Wall => '#',
            TileId::Block => '=',
            TileId::HorizontalPaddle => '-',
            TileId::Ball => 'o',
        }
    }
}

#[repr(i8)]
#[derive(Debug, Clone, Copy, IntEnum, PartialEq, Eq)]
pub enum Tilt {
    Left = -1,
    Neutral = 0,
    Right = 1,
}

#[derive(Debug, Default)]
pub struct Screen {
    tiles: HashMap<(i64, i64), TileId>,
    score: i64,
}

impl Screen {
    /// Apply output of game program, every three integers are (x, y, tile id) or (-1, 0, score).
    pub fn update(&mut self, outputs: &[i64]) -> Result<(), Error> {
        let chunks = outputs.chunks(3);
        for (ind, chunk) in chunks.enumerate() {
            let &[x, y, value] = chunk else {
                return Err(Error::IncompleteTile(ind));
            };

            if (x, y) == SCORE_POS {
                self.score = value;
            } else {
                self.tiles.insert((x, y), TileId::from_output(value)?);
            }
        }

        Ok(())
    }

    pub fn count_id(&self, id: TileId) -> usize {
        self.tiles.values().filter(|&&t| t == id).count()
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Move paddle toward the ball.
    pub fn joystick(&self) -> Tilt {
        match (self.find(TileId::HorizontalPaddle), self.find(TileId::Ball)) {
            (Some((paddle_x, _)), Some((ball_x, _))) if paddle_x < ball_x => Tilt::Right,
            (Some((paddle_x, _)), Some((ball_x, _))) if paddle_x > ball_x => Tilt::Left,
            _ => Tilt::Neutral,
        }
    }

    pub fn render(&self) -> String {
        let mut screen = String::new();
        if let (Some(max_x), Some(max_y)) = (
            self.tiles.keys().map(|p| p.0).max(),
            self.tiles.keys().map(|p| p.1).max(),
        ) {
            for y in 0..=max_y {
                for x in 0..=max_x {
                    let id = self.tiles.get(&(x, y)).copied().unwrap_or_default();
                    screen.push(id.symbol());
                }
                screen.push('\n');
            }
        }
        screen.push_str(&format!("Score | {}", self.score));

        screen
    }

    fn find(&self, id: TileId) -> Option<(i64, i64)> {
        self.tiles
            .iter()
            .find_map(|(&pos, &t)| (t == id).then_some(pos))
    }
}

/// Count block tiles on the first screen drawn by the game.
pub fn count_blocks(int_code: &[i64]) -> Result<usize, Error> {
    let mut computer = IntCodeComputer::from_program(int_code);
    let res = computer.run(&[], RunOptions::default())?;
    let mut screen = Screen::default();
    screen.update(&res.output)?;

    Ok(screen.count_id(TileId::Block))
}

/// Play the game for free until the game program halts, returns the final score.
pub fn play(int_code: &[i64]) -> Result<i64, Error> {
    let mut computer = IntCodeComputer::from_program(int_code);
    computer.write_at(FREE_PLAY_ADDR, FREE_PLAY_QUARTERS)?;

    let mut screen = Screen::default();
    let mut inputs = Vec::new();
    let mut frame_count = 0;
    loop {
        let res = computer.run(&inputs, RunOptions::default())?;
        screen.update(&res.output)?;
        trace!("Frame # {}:\n{}", frame_count, screen.render());
        match res.state {
            MachineState::Halted => break,
            MachineState::OutOfBounds => return Err(Error::UnexpectedOutOfBounds),
            _ => (),
        }

        inputs = vec![i64::from(screen.joystick().int_value())];
        frame_count += 1;
    }

    debug!(
        "Game over after {} frames, {} blocks left, score {}.",
        frame_count,
        screen.count_id(TileId::Block),
        screen.score()
    );
    Ok(screen.score())
}
