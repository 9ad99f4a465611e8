#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use controller::*;
pub use engine::*;
pub use error::*;
pub use food::*;
pub use host::*;
pub use input::*;
pub use snake::*;
pub use types::*;

mod controller;
mod engine;
mod error;
mod food;
mod host;
mod input;
mod snake;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// Short beep handed to the audio collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_secs: f64,
    pub waveform: Waveform,
    pub volume: f32,
}

impl Tone {
    pub const REWARD: Tone = Tone {
        frequency_hz: 880.0,
        duration_secs: 0.09,
        waveform: Waveform::Sine,
        volume: 0.66,
    };
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid: Grid,
    pub initial_length: CellCount,
    pub start_interval_ms: u32,
    pub interval_step_ms: u32,
    pub min_interval_ms: u32,
    pub food_reward: Score,
    pub reward_tone: Tone,
}

impl GameConfig {
    pub const DEFAULT: GameConfig = GameConfig {
        grid: Grid::new(30, 20),
        initial_length: 2,
        start_interval_ms: 120,
        interval_step_ms: 3,
        min_interval_ms: 90,
        food_reward: 10,
        reward_tone: Tone::REWARD,
    };

    pub const fn new_unchecked(grid: Grid, initial_length: CellCount) -> Self {
        Self {
            grid,
            initial_length,
            ..Self::DEFAULT
        }
    }

    /// Clamps the grid so the initial snake fits left of the centre and has room to move.
    pub fn new(grid: Grid, initial_length: CellCount) -> Self {
        let initial_length = initial_length.clamp(1, CellCount::from(Coord::MAX / 2));
        let min_cols = Coord::try_from(initial_length * 2).unwrap_or(Coord::MAX);
        let cols = grid.cols.clamp(min_cols.max(2), Coord::MAX);
        let rows = grid.rows.clamp(1, Coord::MAX);
        Self::new_unchecked(Grid::new(cols, rows), initial_length).normalized()
    }

    /// Keeps the interval settings consistent: at least 1ms, floor no higher than the start.
    pub fn normalized(mut self) -> Self {
        self.min_interval_ms = self.min_interval_ms.max(1);
        self.start_interval_ms = self.start_interval_ms.max(self.min_interval_ms);
        self
    }

    pub fn with_intervals(mut self, start_ms: u32, step_ms: u32, min_ms: u32) -> Self {
        self.start_interval_ms = start_ms;
        self.interval_step_ms = step_ms;
        self.min_interval_ms = min_ms;
        self.normalized()
    }

    pub const fn total_cells(&self) -> CellCount {
        self.grid.total_cells()
    }

    /// Interval after eating once more at `current_ms`.
    pub fn next_interval(&self, current_ms: u32) -> u32 {
        current_ms
            .saturating_sub(self.interval_step_ms)
            .max(self.min_interval_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
