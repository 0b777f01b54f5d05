//! Game engine - board, falling and queued shapes, scoring and lifecycle
//!
//! The engine owns every piece of game state and applies the rules: spawning, moving,
//! rotating, gravity, settling, line clearing and leveling. It performs no timing; a
//! driver (see [`GameLoop`](crate::GameLoop)) decides when gravity ticks happen and
//! reacts to the engine's notifications.
//!
//! Illegal moves and rotations are reverted inside the same call and produce no
//! notification. A shape that cannot enter the board ends the game.
//!
//! Completed-line scanning and the collapse that follows both stop at row 1: row 0 is
//! never checked for completeness and nothing is moved into or out of it. Row 0 works
//! as a spawn buffer; a full row 0 is only ever cleared by [`Swiftris::remove_all_blocks`].

use std::fmt;

use tracing::{debug, info, trace};

use crate::array2d::Array2D;
use crate::block::Block;
use crate::config::{ConfigError, GameConfig};
use crate::events::{GameEvent, SwiftrisDelegate};
use crate::rng::SimpleRng;
use crate::scoring::{calculate_line_score, reached_next_level};
use crate::shape::Shape;

/// Where the engine is in the life of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// No game has begun yet
    NotStarted,
    /// Waiting for the next shape to be spawned
    Spawning,
    /// A shape is falling
    Falling,
    /// A shape has landed; completed lines have not been removed yet
    Settling,
    /// Completed lines were removed and the blocks above collapsed
    LineClearing,
    /// The game has ended
    GameOver,
}

/// Outcome of [`Swiftris::remove_completed_lines`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    /// Removed rows, bottom row first, each in column order
    pub removed_lines: Vec<Vec<Block>>,
    /// Relocated blocks grouped by column, in the order they were moved
    pub fallen_blocks: Vec<Vec<Block>>,
}

impl LineClear {
    pub fn is_empty(&self) -> bool {
        self.removed_lines.is_empty()
    }

    pub fn lines(&self) -> usize {
        self.removed_lines.len()
    }
}

/// The rule engine
pub struct Swiftris {
    config: GameConfig,
    block_array: Array2D<Block>,
    next_shape: Option<Shape>,
    falling_shape: Option<Shape>,
    rng: SimpleRng,
    score: u32,
    level: u32,
    phase: GamePhase,
    events: Vec<GameEvent>,
    delegate: Option<Box<dyn SwiftrisDelegate>>,
}

impl Swiftris {
    /// Create an engine with an empty board
    ///
    /// `seed` drives every random shape; the same seed replays the same game.
    /// Fails when `config` does not pass [`GameConfig::validate`].
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            block_array: Array2D::new(config.columns as usize, config.rows as usize),
            config,
            next_shape: None,
            falling_shape: None,
            rng: SimpleRng::new(seed),
            score: 0,
            level: 1,
            phase: GamePhase::NotStarted,
            events: Vec::new(),
            delegate: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Array2D<Block> {
        &self.block_array
    }

    /// Direct board access for scripted setups
    pub fn board_mut(&mut self) -> &mut Array2D<Block> {
        &mut self.block_array
    }

    pub fn falling_shape(&self) -> Option<&Shape> {
        self.falling_shape.as_ref()
    }

    pub fn next_shape(&self) -> Option<&Shape> {
        self.next_shape.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Install the observer of lifecycle notifications
    ///
    /// Notifications still queued from earlier operations are delivered right away.
    pub fn set_delegate(&mut self, delegate: Box<dyn SwiftrisDelegate>) {
        self.delegate = Some(delegate);
        self.flush();
    }

    /// Remove the observer; later notifications queue up for [`Swiftris::take_events`]
    pub fn take_delegate(&mut self) -> Option<Box<dyn SwiftrisDelegate>> {
        self.delegate.take()
    }

    /// Drain notifications that no delegate has received
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queue a prescribed shape for the next spawn
    pub fn set_next_shape(&mut self, mut shape: Shape) {
        shape.move_to(self.config.preview_column, self.config.preview_row);
        self.next_shape = Some(shape);
    }

    /// Start a game, queueing a random shape if none is queued
    pub fn begin_game(&mut self) {
        if self.next_shape.is_none() {
            self.next_shape = Some(self.random_preview_shape());
        }
        self.phase = GamePhase::Spawning;
        info!(
            columns = self.config.columns,
            rows = self.config.rows,
            "game began"
        );
        self.emit(GameEvent::GameBegan);
        self.flush();
    }

    /// Promote the queued shape to falling and queue a fresh one
    ///
    /// Returns the new falling and queued shapes, or `(None, None)` when the falling
    /// shape cannot enter the board, which ends the game.
    pub fn spawn_next(&mut self) -> (Option<Shape>, Option<Shape>) {
        let result = self.spawn();
        self.flush();
        result
    }

    fn spawn(&mut self) -> (Option<Shape>, Option<Shape>) {
        self.falling_shape = self.next_shape.take();
        self.next_shape = Some(self.random_preview_shape());
        if let Some(shape) = self.falling_shape.as_mut() {
            shape.move_to(self.config.starting_column, self.config.starting_row);
        }

        if self.is_illegal_placement() {
            if let Some(mut shape) = self.falling_shape.take() {
                shape.move_to(self.config.preview_column, self.config.preview_row);
                self.next_shape = Some(shape);
            }
            debug!("no room to spawn");
            self.finish();
            return (None, None);
        }

        self.phase = if self.falling_shape.is_some() {
            GamePhase::Falling
        } else {
            GamePhase::Spawning
        };
        if let Some(shape) = &self.falling_shape {
            debug!(kind = shape.kind().as_str(), orientation = %shape.orientation(), "spawned");
        }
        (self.falling_shape, self.next_shape)
    }

    fn random_preview_shape(&mut self) -> Shape {
        Shape::random(
            self.config.preview_column,
            self.config.preview_row,
            &mut self.rng,
        )
    }

    /// Map a block position to a board cell, if it lies on the board
    fn cell(&self, column: i8, row: i8) -> Option<(usize, usize)> {
        if column < 0 || row < 0 {
            return None;
        }
        let (column, row) = (column as usize, row as usize);
        self.block_array
            .contains(column, row)
            .then_some((column, row))
    }

    /// Whether the falling shape is off the board or overlaps a settled block
    pub fn is_illegal_placement(&self) -> bool {
        let Some(shape) = &self.falling_shape else {
            return false;
        };
        shape
            .blocks()
            .iter()
            .any(|block| match self.cell(block.column, block.row) {
                Some((column, row)) => self.block_array.is_occupied(column, row),
                None => true,
            })
    }

    /// Hard drop: lower the falling shape as far as it legally goes
    pub fn drop_shape(&mut self) {
        if self.falling_shape.is_none() {
            return;
        }
        while !self.is_illegal_placement() {
            self.shift_falling(0, 1);
        }
        self.shift_falling(0, -1);
        if let Some(shape) = &self.falling_shape {
            debug!(row = shape.row(), "dropped");
        }
        self.emit(GameEvent::ShapeDropped);
        self.flush();
    }

    /// Gravity: lower the falling shape one row, settling it once it rests
    pub fn tick(&mut self) {
        self.let_shape_fall();
        self.flush();
    }

    fn let_shape_fall(&mut self) {
        if self.falling_shape.is_none() {
            return;
        }
        self.shift_falling(0, 1);
        if self.is_illegal_placement() {
            self.shift_falling(0, -1);
            if self.is_illegal_placement() {
                self.finish();
            } else {
                self.settle();
            }
        } else {
            self.emit(GameEvent::ShapeMoved);
            if self.detect_touch() {
                self.settle();
            }
        }
    }

    fn shift_falling(&mut self, columns: i8, rows: i8) {
        if let Some(shape) = self.falling_shape.as_mut() {
            shape.shift_by(columns, rows);
        }
    }

    fn rotate_falling(&mut self, clockwise: bool) {
        if let Some(shape) = self.falling_shape.as_mut() {
            shape.rotate(clockwise);
        }
    }

    pub fn rotate_shape(&mut self) {
        self.try_rotate(true);
        self.flush();
    }

    pub fn rotate_shape_counter_clockwise(&mut self) {
        self.try_rotate(false);
        self.flush();
    }

    fn try_rotate(&mut self, clockwise: bool) {
        if self.falling_shape.is_none() {
            return;
        }
        self.rotate_falling(clockwise);
        if self.is_illegal_placement() {
            self.rotate_falling(!clockwise);
            return;
        }
        trace!(clockwise, "rotated");
        self.emit(GameEvent::ShapeMoved);
    }

    pub fn move_shape_left(&mut self) {
        self.try_shift(-1);
        self.flush();
    }

    pub fn move_shape_right(&mut self) {
        self.try_shift(1);
        self.flush();
    }

    fn try_shift(&mut self, columns: i8) {
        if self.falling_shape.is_none() {
            return;
        }
        self.shift_falling(columns, 0);
        if self.is_illegal_placement() {
            self.shift_falling(-columns, 0);
            return;
        }
        trace!(columns, "shifted");
        self.emit(GameEvent::ShapeMoved);
    }

    /// Copy the falling shape into the board and clear it
    pub fn settle_shape(&mut self) {
        self.settle();
        self.flush();
    }

    fn settle(&mut self) {
        let Some(shape) = self.falling_shape.take() else {
            return;
        };
        for block in shape.blocks() {
            let cell = self.cell(block.column, block.row);
            debug_assert!(cell.is_some(), "settling block off the board: {block}");
            if let Some((column, row)) = cell {
                self.block_array.set(column, row, Some(*block));
            }
        }
        self.phase = GamePhase::Settling;
        debug!(column = shape.column(), row = shape.row(), "landed");
        self.emit(GameEvent::ShapeLanded);
    }

    /// Whether the falling shape rests on the floor or on a settled block
    pub fn detect_touch(&self) -> bool {
        let Some(shape) = &self.falling_shape else {
            return false;
        };
        let last_row = self.config.rows as i8 - 1;
        shape.bottom_blocks().iter().any(|block| {
            block.row >= last_row
                || self
                    .cell(block.column, block.row + 1)
                    .is_some_and(|(column, row)| self.block_array.is_occupied(column, row))
        })
    }

    /// End the current game: the falling shape is discarded, score and level reset
    pub fn end_game(&mut self) {
        self.finish();
        self.flush();
    }

    fn finish(&mut self) {
        info!(score = self.score, level = self.level, "game ended");
        self.falling_shape = None;
        self.score = 0;
        self.level = 1;
        self.phase = GamePhase::GameOver;
        self.emit(GameEvent::GameEnded);
    }

    /// Remove full rows, score them and collapse the blocks above
    pub fn remove_completed_lines(&mut self) -> LineClear {
        let clear = self.clear_lines();
        self.flush();
        clear
    }

    fn clear_lines(&mut self) -> LineClear {
        let columns = self.block_array.columns();
        let rows = self.block_array.rows();

        let mut removed_lines = Vec::new();
        for row in (1..rows).rev() {
            let line: Vec<Block> = self.block_array.row(row).flatten().copied().collect();
            if line.len() == columns {
                for column in 0..columns {
                    self.block_array.set(column, row, None);
                }
                removed_lines.push(line);
            }
        }

        if self.phase == GamePhase::Settling {
            self.phase = GamePhase::Spawning;
        }
        let Some(lowest_removed) = removed_lines.first().and_then(|line| line.first()) else {
            return LineClear::default();
        };
        let lowest_removed = lowest_removed.row as usize;

        let points = calculate_line_score(
            removed_lines.len(),
            self.level,
            self.config.points_per_line,
        );
        self.score = self.score.saturating_add(points);
        debug!(lines = removed_lines.len(), points, score = self.score, "lines removed");
        if reached_next_level(self.score, self.level, self.config.level_threshold) {
            self.level += 1;
            info!(level = self.level, "level up");
            self.emit(GameEvent::LevelUp);
        }

        // The lowest removed row is empty in every column, so each block above it
        // falls at least one row.
        let mut fallen_blocks = Vec::new();
        for column in 0..columns {
            let mut fallen = Vec::new();
            for row in (1..lowest_removed).rev() {
                let mut new_row = row;
                while new_row + 1 < rows && !self.block_array.is_occupied(column, new_row + 1) {
                    new_row += 1;
                }
                if let Some(mut block) = self.block_array.take(column, row) {
                    block.row = new_row as i8;
                    self.block_array.set(column, new_row, Some(block));
                    fallen.push(block);
                }
            }
            if !fallen.is_empty() {
                fallen_blocks.push(fallen);
            }
        }

        self.phase = GamePhase::LineClearing;
        LineClear {
            removed_lines,
            fallen_blocks,
        }
    }

    /// Clear the whole board, returning what it held row by row
    pub fn remove_all_blocks(&mut self) -> Vec<Vec<Block>> {
        let columns = self.block_array.columns();
        let rows = self.block_array.rows();
        (0..rows)
            .map(|row| {
                (0..columns)
                    .filter_map(|column| self.block_array.take(column, row))
                    .collect()
            })
            .collect()
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Deliver queued notifications to the delegate, in emission order
    fn flush(&mut self) {
        let Some(mut delegate) = self.delegate.take() else {
            return;
        };
        for event in std::mem::take(&mut self.events) {
            delegate.notify(event, self);
        }
        self.delegate = Some(delegate);
    }
}

impl fmt::Debug for Swiftris {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Swiftris")
            .field("config", &self.config)
            .field("falling_shape", &self.falling_shape)
            .field("next_shape", &self.next_shape)
            .field("score", &self.score)
            .field("level", &self.level)
            .field("phase", &self.phase)
            .field("pending_events", &self.events)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}
