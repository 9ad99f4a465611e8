use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Paused,
    GameOver,
}

impl RunState {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    Wall,
    SelfCollision,
    BoardFull,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FoodEaten {
    pub cell: Cell,
    pub score: Score,
    /// Set only when the score beat the previous high score.
    pub new_high_score: Option<Score>,
    pub interval_ms: u32,
    /// `None` when the snake filled the board, which also ends the game.
    pub next_food: Option<Cell>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub score: Score,
    pub reason: GameOverReason,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Skipped,
    Moved,
    Ate(FoodEaten),
    Ended(GameOver),
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            Skipped => false,
            Moved => true,
            Ate(_) => true,
            Ended(_) => true,
        }
    }
}

/// Everything that changes while playing, owned by the [`PlayEngine`].
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    snake: Snake,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Option<Cell>,
    score: Score,
    high_score: Score,
    interval_ms: u32,
    run_state: RunState,
    game_over_reason: Option<GameOverReason>,
}

impl GameState {
    fn initial(config: &GameConfig, high_score: Score) -> Self {
        let direction = Direction::Right;
        Self {
            snake: Snake::new(config.grid.center(), config.initial_length, direction),
            direction,
            pending_direction: None,
            food: None,
            score: 0,
            high_score,
            interval_ms: config.start_interval_ms,
            run_state: RunState::Idle,
            game_over_reason: None,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn high_score(&self) -> Score {
        self.high_score
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }
}

/// Tick-driven state machine: movement, collisions, growth, score and speed.
#[derive(Clone, Debug)]
pub struct PlayEngine<P = RandomFoodPlacer> {
    config: GameConfig,
    placer: P,
    state: GameState,
}

impl<P: FoodPlacer> PlayEngine<P> {
    pub fn new(config: GameConfig, placer: P, high_score: Score) -> Self {
        let mut engine = Self {
            state: GameState::initial(&config, high_score),
            config,
            placer,
        };
        engine.spawn_food();
        engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn run_state(&self) -> RunState {
        self.state.run_state
    }

    pub fn is_running(&self) -> bool {
        self.state.run_state.is_running()
    }

    pub fn is_finished(&self) -> bool {
        self.state.run_state.is_finished()
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn high_score(&self) -> Score {
        self.state.high_score
    }

    pub fn interval_ms(&self) -> u32 {
        self.state.interval_ms
    }

    /// Queues a turn for the next tick, last call wins.
    ///
    /// Reversals and turns after the game ended are ignored.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_finished() || direction.is_opposite(self.state.direction) {
            log::trace!("direction {:?} rejected", direction);
            return false;
        }

        self.state.pending_direction = Some(direction);
        true
    }

    /// Idle and paused games start running, a finished game is reset first.
    pub fn start(&mut self) -> bool {
        use RunState::*;
        match self.state.run_state {
            Running => false,
            Idle | Paused => {
                self.state.run_state = Running;
                log::debug!("running at {}ms", self.state.interval_ms);
                true
            }
            GameOver => {
                self.reset();
                self.start()
            }
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.is_running() {
            self.state.run_state = RunState::Paused;
            log::debug!("paused");
            true
        } else {
            false
        }
    }

    pub fn resume(&mut self) -> bool {
        matches!(self.state.run_state, RunState::Paused) && self.start()
    }

    pub fn toggle(&mut self) -> RunState {
        if !self.pause() {
            self.start();
        }
        self.state.run_state
    }

    /// Fresh snake, direction, score, speed and food. The high score survives.
    pub fn reset(&mut self) {
        self.state = GameState::initial(&self.config, self.state.high_score);
        self.spawn_food();
        log::debug!("reset");
    }

    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Puts the food on a specific free cell.
    pub fn place_food_at(&mut self, cell: Cell) -> Result<()> {
        if !self.config.grid.in_bounds(cell) {
            return Err(GameError::InvalidCoords);
        }
        if self.state.snake.occupies(cell) {
            return Err(GameError::CellOccupied);
        }
        self.state.food = Some(cell);
        Ok(())
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            log::trace!("tick skipped while {:?}", self.state.run_state);
            return TickOutcome::Skipped;
        }

        if let Some(direction) = self.state.pending_direction.take() {
            self.state.direction = direction;
        }

        let head = self.state.snake.head();
        let Some(new_head) = self.config.grid.step(head, self.state.direction) else {
            return TickOutcome::Ended(self.end_game(GameOverReason::Wall));
        };

        if self.state.snake.occupies(new_head) {
            return TickOutcome::Ended(self.end_game(GameOverReason::SelfCollision));
        }

        if self.state.food != Some(new_head) {
            self.state.snake.advance(new_head, false);
            log::trace!("moved to {:?}", new_head);
            return TickOutcome::Moved;
        }

        self.state.score = self.state.score.saturating_add(self.config.food_reward);
        let new_high_score = (self.state.score > self.state.high_score).then(|| {
            self.state.high_score = self.state.score;
            self.state.score
        });
        self.state.interval_ms = self.config.next_interval(self.state.interval_ms);
        self.state.snake.advance(new_head, true);
        self.spawn_food();

        log::debug!(
            "ate food at {:?}, score {}, interval {}ms",
            new_head,
            self.state.score,
            self.state.interval_ms
        );

        let eaten = FoodEaten {
            cell: new_head,
            score: self.state.score,
            new_high_score,
            interval_ms: self.state.interval_ms,
            next_food: self.state.food,
        };
        if eaten.next_food.is_none() {
            self.end_game(GameOverReason::BoardFull);
        }
        TickOutcome::Ate(eaten)
    }

    fn spawn_food(&mut self) {
        self.state.food = self
            .placer
            .place(self.config.grid, &self.state.snake)
            .inspect_err(|err| log::warn!("food not placed: {}", err))
            .ok();
    }

    fn end_game(&mut self, reason: GameOverReason) -> GameOver {
        self.state.run_state = RunState::GameOver;
        self.state.game_over_reason = Some(reason);
        self.state.pending_direction = None;
        log::info!("game over ({:?}), score {}", reason, self.state.score);
        GameOver {
            score: self.state.score,
            reason,
        }
    }
}
