//! Lifecycle notifications
//!
//! The engine records a [`GameEvent`] at each point a notification is due. At the end of
//! every public operation the recorded events are dispatched, in emission order, to the
//! installed [`SwiftrisDelegate`]; without a delegate they stay queued until the caller
//! drains them with [`Swiftris::take_events`](crate::Swiftris::take_events).
//!
//! Delegates receive the engine by shared reference: they can query board, shapes,
//! score and level, but cannot mutate engine state.

use std::cell::RefCell;
use std::rc::Rc;

use crate::swiftris::Swiftris;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// A new game has begun
    GameBegan,
    /// The current game has ended
    GameEnded,
    /// The falling shape has become part of the board
    ShapeLanded,
    /// The falling shape changed position or orientation
    ShapeMoved,
    /// The falling shape was dropped to its resting row
    ShapeDropped,
    /// The level went up
    LevelUp,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::GameBegan => "gameBegan",
            GameEvent::GameEnded => "gameEnded",
            GameEvent::ShapeLanded => "shapeLanded",
            GameEvent::ShapeMoved => "shapeMoved",
            GameEvent::ShapeDropped => "shapeDropped",
            GameEvent::LevelUp => "levelUp",
        }
    }
}

/// Observer of engine lifecycle notifications
///
/// Every method defaults to a no-op so implementors only override what they need.
pub trait SwiftrisDelegate {
    fn game_did_begin(&mut self, _game: &Swiftris) {}

    fn game_did_end(&mut self, _game: &Swiftris) {}

    fn game_shape_did_land(&mut self, _game: &Swiftris) {}

    fn game_shape_did_move(&mut self, _game: &Swiftris) {}

    fn game_shape_did_drop(&mut self, _game: &Swiftris) {}

    fn game_did_level_up(&mut self, _game: &Swiftris) {}

    /// Route one event to its callback
    fn notify(&mut self, event: GameEvent, game: &Swiftris) {
        match event {
            GameEvent::GameBegan => self.game_did_begin(game),
            GameEvent::GameEnded => self.game_did_end(game),
            GameEvent::ShapeLanded => self.game_shape_did_land(game),
            GameEvent::ShapeMoved => self.game_shape_did_move(game),
            GameEvent::ShapeDropped => self.game_shape_did_drop(game),
            GameEvent::LevelUp => self.game_did_level_up(game),
        }
    }
}

/// Shared delegate: the engine notifies it while the owner keeps a handle to read it
impl<D: SwiftrisDelegate + ?Sized> SwiftrisDelegate for Rc<RefCell<D>> {
    fn game_did_begin(&mut self, game: &Swiftris) {
        self.borrow_mut().game_did_begin(game);
    }

    fn game_did_end(&mut self, game: &Swiftris) {
        self.borrow_mut().game_did_end(game);
    }

    fn game_shape_did_land(&mut self, game: &Swiftris) {
        self.borrow_mut().game_shape_did_land(game);
    }

    fn game_shape_did_move(&mut self, game: &Swiftris) {
        self.borrow_mut().game_shape_did_move(game);
    }

    fn game_shape_did_drop(&mut self, game: &Swiftris) {
        self.borrow_mut().game_shape_did_drop(game);
    }

    fn game_did_level_up(&mut self, game: &Swiftris) {
        self.borrow_mut().game_did_level_up(game);
    }

    fn notify(&mut self, event: GameEvent, game: &Swiftris) {
        self.borrow_mut().notify(event, game);
    }
}

/// Delegate that records every notification it receives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SwiftrisDelegate for EventLog {
    fn notify(&mut self, event: GameEvent, _game: &Swiftris) {
        self.events.push(event);
    }
}
