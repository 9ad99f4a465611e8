use crate::audio::Audio;
use crate::canvas::CanvasRenderer;
use crate::settings::HighScore;
use crate::timer::TickTimer;
use crate::utils::*;
use snake_core::*;
use yew::NodeRef;

/// Browser side of the game: canvas, WebAudio, `localStorage` and `setInterval`.
#[derive(Debug)]
pub(crate) struct WebHost {
    canvas: CanvasRenderer,
    audio: Audio,
    timer: TickTimer,
}

impl WebHost {
    pub(crate) fn new(canvas: CanvasRenderer, timer: TickTimer) -> Self {
        Self {
            canvas,
            audio: Audio::default(),
            timer,
        }
    }

    pub(crate) fn canvas_ref(&self) -> NodeRef {
        self.canvas.node_ref()
    }

    pub(crate) fn audio(&mut self) -> &mut Audio {
        &mut self.audio
    }

    pub(crate) fn shutdown(&mut self) {
        self.timer.cancel();
        self.audio.stop_music();
    }
}

impl Renderer for WebHost {
    fn clear(&mut self, paint: Paint) {
        self.canvas.clear(paint);
    }

    fn draw_cell(&mut self, cell: Cell, paint: Paint) {
        self.canvas.draw_cell(cell, paint);
    }
}

impl AudioSink for WebHost {
    fn play_tone(&mut self, tone: Tone) {
        self.audio.play_tone(tone);
    }
}

impl HighScoreStore for WebHost {
    fn load_high_score(&self) -> Score {
        HighScore::load().0
    }

    fn save_high_score(&mut self, score: Score) {
        HighScore(score).local_save();
    }
}

impl TickScheduler for WebHost {
    fn schedule(&mut self, interval_ms: u32) {
        self.timer.schedule(interval_ms);
    }

    fn cancel(&mut self) {
        self.timer.cancel();
    }
}

impl Host for WebHost {
    fn game_over(&mut self, score: Score, reason: GameOverReason) {
        log::debug!("showing game over ({:?}), score {}", reason, score);
    }
}
