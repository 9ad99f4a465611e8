//! Collaborators the game drives: drawing surface, audio, persistence and the tick timer.
//!
//! None of these report failures back. Implementations log and swallow their own errors so a
//! missing audio device or a full storage quota never stops the game loop.

use crate::*;

/// What a cell is painted as, the surface decides the actual color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Paint {
    Background,
    Food,
    SnakeHead,
    SnakeBody,
}

pub trait Renderer {
    fn clear(&mut self, paint: Paint);
    fn draw_cell(&mut self, cell: Cell, paint: Paint);
}

pub trait AudioSink {
    fn play_tone(&mut self, tone: Tone);
}

pub trait HighScoreStore {
    /// Previously saved high score, zero when nothing was saved.
    fn load_high_score(&self) -> Score;
    fn save_high_score(&mut self, score: Score);
}

/// Periodic tick source with at most one pending task.
pub trait TickScheduler {
    /// Starts ticking every `interval_ms`, replacing any task already scheduled.
    fn schedule(&mut self, interval_ms: u32);
    fn cancel(&mut self);
}

/// Everything the [`GameController`] talks to.
pub trait Host: Renderer + AudioSink + HighScoreStore + TickScheduler {
    fn score_changed(&mut self, _score: Score, _high_score: Score) {}
    fn game_over(&mut self, _score: Score, _reason: GameOverReason) {}
}

/// Draws one frame: background, food, then the body with the head on top.
pub fn draw_state<R: Renderer + ?Sized>(renderer: &mut R, state: &GameState) {
    renderer.clear(Paint::Background);

    if let Some(food) = state.food() {
        renderer.draw_cell(food, Paint::Food);
    }

    let snake = state.snake();
    let head = snake.head();
    for cell in snake.iter() {
        let paint = if cell == head {
            Paint::SnakeHead
        } else {
            Paint::SnakeBody
        };
        renderer.draw_cell(cell, paint);
    }
}
