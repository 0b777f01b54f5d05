//! Game loop - drives the engine and reacts to its notifications
//!
//! The engine only applies rules; this controller owns the cadence. It accumulates
//! elapsed time and ticks gravity once a full interval has passed, translates player
//! actions into engine operations, and answers each notification:
//!
//! - game began: reset the gravity interval and spawn the first shape
//! - shape landed: remove completed lines, then spawn the next shape
//! - shape dropped: one immediate gravity step so the shape lands
//! - level up: shorten the gravity interval
//! - game ended: stop ticking and clear the board
//!
//! Every notification is also forwarded, before it is handled, to an optional
//! presentation delegate.

use tracing::debug;

use crate::config::{ConfigError, GameConfig};
use crate::events::{GameEvent, SwiftrisDelegate};
use crate::scoring::tick_length_after_level_up;
use crate::swiftris::{GamePhase, LineClear, Swiftris};
use crate::types::GameAction;

pub struct GameLoop {
    game: Swiftris,
    presenter: Option<Box<dyn SwiftrisDelegate>>,
    tick_length_ms: u32,
    elapsed_ms: u32,
    ticking: bool,
    paused: bool,
    last_clear: Option<LineClear>,
    /// Score of the game in progress; the engine resets its own before announcing the end
    running_score: u32,
    last_score: Option<u32>,
    high_score: u32,
}

impl GameLoop {
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        Ok(Self::with_game(Swiftris::new(config, seed)?))
    }

    pub fn with_game(game: Swiftris) -> Self {
        let tick_length_ms = game.config().tick_length_level_one_ms;
        Self {
            game,
            presenter: None,
            tick_length_ms,
            elapsed_ms: 0,
            ticking: false,
            paused: false,
            last_clear: None,
            running_score: 0,
            last_score: None,
            high_score: 0,
        }
    }

    /// Install the delegate that mirrors engine notifications on screen
    pub fn set_presenter(&mut self, presenter: Box<dyn SwiftrisDelegate>) {
        self.presenter = Some(presenter);
    }

    pub fn game(&self) -> &Swiftris {
        &self.game
    }

    /// Engine access for scripted setups; notifications raised through it are
    /// handled on the next [`GameLoop::update`] or [`GameLoop::apply`]
    pub fn game_mut(&mut self) -> &mut Swiftris {
        &mut self.game
    }

    pub fn tick_length_ms(&self) -> u32 {
        self.tick_length_ms
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether a game is in progress
    pub fn is_running(&self) -> bool {
        !matches!(
            self.game.phase(),
            GamePhase::NotStarted | GamePhase::GameOver
        )
    }

    /// Result of the most recent line clear that removed anything
    pub fn last_clear(&self) -> Option<&LineClear> {
        self.last_clear.as_ref()
    }

    /// Final score of the last finished game
    pub fn last_score(&self) -> Option<u32> {
        self.last_score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Begin a game
    pub fn start(&mut self) {
        self.game.begin_game();
        self.react();
    }

    /// Advance the clock; gravity ticks once more than a full interval has passed
    pub fn update(&mut self, elapsed_ms: u32) {
        self.react();
        if !self.ticking || self.paused {
            return;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms > self.tick_length_ms {
            self.elapsed_ms = 0;
            self.game.tick();
            self.react();
        }
    }

    /// Apply a player action
    pub fn apply(&mut self, action: GameAction) {
        self.react();
        match action {
            GameAction::Pause => {
                if self.ticking {
                    self.paused = !self.paused;
                    debug!(paused = self.paused, "pause toggled");
                }
                return;
            }
            GameAction::Restart => {
                self.restart();
                return;
            }
            _ if self.paused => return,
            GameAction::MoveLeft => self.game.move_shape_left(),
            GameAction::MoveRight => self.game.move_shape_right(),
            GameAction::RotateCw => self.game.rotate_shape(),
            GameAction::RotateCcw => self.game.rotate_shape_counter_clockwise(),
            GameAction::SoftDrop => self.game.tick(),
            GameAction::HardDrop => self.game.drop_shape(),
        }
        self.react();
    }

    fn restart(&mut self) {
        if self.is_running() {
            self.game.end_game();
            self.react();
        }
        self.start();
    }

    /// Handle queued notifications, including the ones raised while handling
    fn react(&mut self) {
        loop {
            let events = self.game.take_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                if let Some(presenter) = self.presenter.as_mut() {
                    presenter.notify(event, &self.game);
                }
                self.handle(event);
            }
        }
    }

    fn handle(&mut self, event: GameEvent) {
        match event {
            GameEvent::GameBegan => {
                self.tick_length_ms = self.game.config().tick_length_level_one_ms;
                self.elapsed_ms = 0;
                self.paused = false;
                self.last_clear = None;
                self.running_score = 0;
                self.ticking = true;
                self.game.spawn_next();
            }
            GameEvent::ShapeLanded => {
                let clear = self.game.remove_completed_lines();
                if !clear.is_empty() {
                    self.running_score = self.game.score();
                    self.last_clear = Some(clear);
                }
                self.game.spawn_next();
            }
            GameEvent::ShapeDropped => self.game.tick(),
            GameEvent::LevelUp => {
                self.tick_length_ms = tick_length_after_level_up(self.tick_length_ms);
                debug!(
                    level = self.game.level(),
                    tick_length_ms = self.tick_length_ms,
                    "gravity sped up"
                );
            }
            GameEvent::GameEnded => {
                self.ticking = false;
                self.paused = false;
                self.game.remove_all_blocks();
                self.last_score = Some(self.running_score);
                self.high_score = self.high_score.max(self.running_score);
                self.running_score = 0;
            }
            GameEvent::ShapeMoved => {}
        }
    }
}

impl std::fmt::Debug for GameLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLoop")
            .field("game", &self.game)
            .field("tick_length_ms", &self.tick_length_ms)
            .field("ticking", &self.ticking)
            .field("paused", &self.paused)
            .field("high_score", &self.high_score)
            .finish()
    }
}
