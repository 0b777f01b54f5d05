//! Heads-up messages driven by engine notifications.
//!
//! The HUD is the presentation delegate of the game loop: it never touches the game,
//! it only decides which short banner to show and for how long.

use crate::core::{Swiftris, SwiftrisDelegate};

/// How long a banner stays on screen.
pub const BANNER_MS: u32 = 1500;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    message: Option<String>,
    /// Remaining display time; `None` keeps the banner until the next game.
    remaining_ms: Option<u32>,
    games_played: u32,
    landings: u32,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Shapes landed in the current game.
    pub fn landings(&self) -> u32 {
        self.landings
    }

    /// Age the current banner by one frame.
    pub fn update(&mut self, elapsed_ms: u32) {
        if let Some(remaining) = self.remaining_ms {
            let remaining = remaining.saturating_sub(elapsed_ms);
            if remaining == 0 {
                self.message = None;
                self.remaining_ms = None;
            } else {
                self.remaining_ms = Some(remaining);
            }
        }
    }

    fn show(&mut self, message: String, duration_ms: Option<u32>) {
        self.message = Some(message);
        self.remaining_ms = duration_ms;
    }
}

impl SwiftrisDelegate for Hud {
    fn game_did_begin(&mut self, _game: &Swiftris) {
        self.games_played += 1;
        self.landings = 0;
        self.show("GO!".to_string(), Some(BANNER_MS));
    }

    fn game_did_end(&mut self, _game: &Swiftris) {
        self.show("PRESS R".to_string(), None);
    }

    fn game_shape_did_land(&mut self, _game: &Swiftris) {
        self.landings += 1;
    }

    fn game_did_level_up(&mut self, game: &Swiftris) {
        self.show(format!("LEVEL {}", game.level()), Some(BANNER_MS));
    }
}
