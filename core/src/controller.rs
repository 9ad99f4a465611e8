use crate::*;

/// Drives a [`PlayEngine`] against a [`Host`]: ticks, timer scheduling, reward tone, high score
/// persistence and drawing.
///
/// The timer follows the run state: scheduled on every transition into `Running`, replaced when
/// the speed changes, cancelled on every transition out of it.
#[derive(Debug)]
pub struct GameController<H, P = RandomFoodPlacer> {
    engine: PlayEngine<P>,
    host: H,
}

impl<H: Host, P: FoodPlacer> GameController<H, P> {
    pub fn new(config: GameConfig, placer: P, host: H) -> Self {
        let high_score = host.load_high_score();
        log::debug!("loaded high score {}", high_score);
        let mut controller = Self {
            engine: PlayEngine::new(config, placer, high_score),
            host,
        };
        controller.notify_score();
        controller.redraw();
        controller
    }

    pub fn engine(&self) -> &PlayEngine<P> {
        &self.engine
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        log::trace!("input {:?}", event);
        match event {
            InputEvent::TogglePause => {
                self.toggle();
            }
            InputEvent::Start => self.restart(),
            _ => {
                if let Some(direction) = event.direction() {
                    self.set_direction(direction);
                }
            }
        }
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.engine.set_direction(direction)
    }

    /// Steers towards a point given relative to the centre of the head cell.
    pub fn steer_toward(&mut self, dx: f64, dy: f64) -> bool {
        self.set_direction(Direction::toward(dx, dy))
    }

    pub fn start(&mut self) -> bool {
        let was_finished = self.engine.is_finished();
        let started = self.engine.start();
        if started {
            self.host.schedule(self.engine.interval_ms());
            if was_finished {
                self.notify_score();
            }
            self.redraw();
        }
        started
    }

    pub fn pause(&mut self) -> bool {
        let paused = self.engine.pause();
        if paused {
            self.host.cancel();
        }
        paused
    }

    pub fn resume(&mut self) -> bool {
        let resumed = self.engine.resume();
        if resumed {
            self.host.schedule(self.engine.interval_ms());
        }
        resumed
    }

    pub fn toggle(&mut self) -> RunState {
        if !self.pause() {
            self.start();
        }
        self.engine.run_state()
    }

    pub fn reset(&mut self) {
        self.host.cancel();
        self.engine.reset();
        self.notify_score();
        self.redraw();
    }

    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.engine.tick();

        match outcome {
            TickOutcome::Skipped => {
                // a stray tick means the timer outlived the running state
                self.host.cancel();
                return outcome;
            }
            TickOutcome::Moved => {}
            TickOutcome::Ate(eaten) => {
                self.host.play_tone(self.engine.config().reward_tone);
                if let Some(high_score) = eaten.new_high_score {
                    self.host.save_high_score(high_score);
                }
                self.notify_score();
                if self.engine.is_finished() {
                    self.finish(eaten.score);
                } else {
                    self.host.schedule(eaten.interval_ms);
                }
            }
            TickOutcome::Ended(game_over) => {
                self.finish(game_over.score);
                return outcome;
            }
        }

        self.redraw();
        outcome
    }

    pub fn redraw(&mut self) {
        draw_state(&mut self.host, self.engine.state());
    }

    fn finish(&mut self, score: Score) {
        self.host.cancel();
        let reason = self
            .engine
            .state()
            .game_over_reason()
            .unwrap_or(GameOverReason::Wall);
        self.host.game_over(score, reason);
    }

    fn notify_score(&mut self) {
        self.host
            .score_changed(self.engine.score(), self.engine.high_score());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Debug, PartialEq)]
    enum Call {
        Schedule(u32),
        Cancel,
        Tone(Tone),
        Save(Score),
        Score(Score, Score),
        GameOver(Score, GameOverReason),
    }

    #[derive(Default)]
    struct RecordingHost {
        stored_high_score: Score,
        pending_timer: Option<u32>,
        calls: Vec<Call>,
        frames: usize,
        drawn: Vec<(Cell, Paint)>,
    }

    impl RecordingHost {
        fn take_calls(&mut self) -> Vec<Call> {
            core::mem::take(&mut self.calls)
        }
    }

    impl Renderer for RecordingHost {
        fn clear(&mut self, _paint: Paint) {
            self.frames += 1;
            self.drawn.clear();
        }

        fn draw_cell(&mut self, cell: Cell, paint: Paint) {
            self.drawn.push((cell, paint));
        }
    }

    impl AudioSink for RecordingHost {
        fn play_tone(&mut self, tone: Tone) {
            self.calls.push(Call::Tone(tone));
        }
    }

    impl HighScoreStore for RecordingHost {
        fn load_high_score(&self) -> Score {
            self.stored_high_score
        }

        fn save_high_score(&mut self, score: Score) {
            self.stored_high_score = score;
            self.calls.push(Call::Save(score));
        }
    }

    impl TickScheduler for RecordingHost {
        fn schedule(&mut self, interval_ms: u32) {
            self.pending_timer = Some(interval_ms);
            self.calls.push(Call::Schedule(interval_ms));
        }

        fn cancel(&mut self) {
            self.pending_timer = None;
            self.calls.push(Call::Cancel);
        }
    }

    impl Host for RecordingHost {
        fn score_changed(&mut self, score: Score, high_score: Score) {
            self.calls.push(Call::Score(score, high_score));
        }

        fn game_over(&mut self, score: Score, reason: GameOverReason) {
            self.calls.push(Call::GameOver(score, reason));
        }
    }

    fn controller(high_score: Score) -> GameController<RecordingHost> {
        let host = RecordingHost {
            stored_high_score: high_score,
            ..Default::default()
        };
        let mut controller =
            GameController::new(GameConfig::DEFAULT, RandomFoodPlacer::new(5), host);
        controller.engine.place_food_at(Cell::new(0, 0)).unwrap();
        controller.host.take_calls();
        controller
    }

    #[test]
    fn new_loads_high_score_and_draws_first_frame() {
        let controller = controller(70);

        assert_eq!(controller.engine().high_score(), 70);
        assert_eq!(controller.host().frames, 1);
        assert_eq!(controller.host().pending_timer, None);
    }

    #[test]
    fn start_schedules_at_the_current_interval() {
        let mut controller = controller(0);

        assert!(controller.start());
        assert!(!controller.start());

        assert_eq!(controller.host.take_calls(), [Call::Schedule(120)]);
    }

    #[test]
    fn eating_plays_tone_persists_and_reschedules() {
        let mut controller = controller(0);
        controller.start();
        controller.engine.place_food_at(Cell::new(16, 10)).unwrap();
        controller.host.take_calls();

        let outcome = controller.tick();

        assert!(matches!(outcome, TickOutcome::Ate(_)));
        assert_eq!(
            controller.host.take_calls(),
            [
                Call::Tone(Tone::REWARD),
                Call::Save(10),
                Call::Score(10, 10),
                Call::Schedule(117),
            ]
        );
        assert_eq!(controller.host().pending_timer, Some(117));
        assert_eq!(controller.host().stored_high_score, 10);
    }

    #[test]
    fn eating_below_the_high_score_does_not_persist() {
        let mut controller = controller(100);
        controller.start();
        controller.engine.place_food_at(Cell::new(16, 10)).unwrap();
        controller.host.take_calls();

        controller.tick();

        let calls = controller.host.take_calls();
        assert!(!calls.iter().any(|call| matches!(call, Call::Save(_))));
        assert!(calls.contains(&Call::Score(10, 100)));
    }

    #[test]
    fn every_tick_redraws_snake_and_food() {
        let mut controller = controller(0);
        controller.start();
        let frames = controller.host().frames;

        controller.tick();

        assert_eq!(controller.host().frames, frames + 1);
        assert_eq!(
            controller.host().drawn,
            [
                (Cell::new(0, 0), Paint::Food),
                (Cell::new(15, 10), Paint::SnakeBody),
                (Cell::new(16, 10), Paint::SnakeHead),
            ]
        );
    }

    #[test]
    fn collision_cancels_timer_and_reports_score() {
        let mut controller = controller(0);
        controller.start();
        controller.set_direction(Direction::Up);
        for _ in 0..10 {
            controller.tick();
        }
        controller.host.take_calls();
        let frames = controller.host().frames;

        let outcome = controller.tick();

        assert!(matches!(outcome, TickOutcome::Ended(_)));
        assert_eq!(
            controller.host.take_calls(),
            [Call::Cancel, Call::GameOver(0, GameOverReason::Wall)]
        );
        assert_eq!(controller.host().pending_timer, None);
        assert_eq!(controller.host().frames, frames);
    }

    #[test]
    fn toggle_cancels_then_reschedules() {
        let mut controller = controller(0);
        controller.start();
        controller.host.take_calls();

        assert_eq!(controller.toggle(), RunState::Paused);
        assert_eq!(controller.host().pending_timer, None);
        assert_eq!(controller.tick(), TickOutcome::Skipped);

        assert_eq!(controller.toggle(), RunState::Running);
        assert_eq!(controller.host().pending_timer, Some(120));
    }

    #[test]
    fn restart_returns_to_the_start_interval() {
        let mut controller = controller(0);
        controller.start();
        controller.engine.place_food_at(Cell::new(16, 10)).unwrap();
        controller.tick();
        controller.host.take_calls();

        controller.handle_input(InputEvent::Start);

        let calls = controller.host.take_calls();
        assert_eq!(calls.first(), Some(&Call::Cancel));
        assert_eq!(calls.last(), Some(&Call::Schedule(120)));
        assert_eq!(controller.engine().score(), 0);
        assert_eq!(controller.engine().high_score(), 10);
        assert_eq!(controller.state().snake().len(), 2);
    }

    #[test]
    fn direction_input_is_applied_on_the_next_tick() {
        let mut controller = controller(0);
        controller.start();

        controller.handle_input(InputEvent::Down);
        controller.handle_input(InputEvent::Left);
        assert_eq!(controller.state().direction(), Direction::Right);

        controller.tick();
        assert_eq!(controller.state().snake().head(), Cell::new(15, 11));
    }

    #[test]
    fn steering_picks_the_dominant_axis() {
        let mut controller = controller(0);

        assert!(controller.steer_toward(3.0, -40.0));
        assert_eq!(controller.state().pending_direction(), Some(Direction::Up));
        assert!(!controller.steer_toward(-40.0, 3.0));
    }

    #[test]
    fn at_most_one_timer_is_pending() {
        let mut controller = controller(0);
        controller.start();
        for x in 16..20 {
            controller.engine.place_food_at(Cell::new(x, 10)).unwrap();
            controller.tick();
        }
        controller.pause();
        controller.resume();

        let mut pending = 0;
        for call in controller.host.take_calls() {
            match call {
                Call::Schedule(_) => pending = 1,
                Call::Cancel => pending = 0,
                _ => {}
            }
        }
        assert_eq!(pending, 1);
        assert_eq!(controller.host().pending_timer, Some(108));
    }
}
