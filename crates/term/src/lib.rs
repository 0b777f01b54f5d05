//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to the terminal with `crossterm`.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure mapping from the engine state to a framebuffer
//! - [`renderer`]: full and diff redraws to a terminal
//! - [`hud`]: presentation delegate that turns notifications into banners

pub mod fb;
pub mod game_view;
pub mod hud;
pub mod renderer;

pub use swiftris_core as core;
pub use swiftris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{block_rgb, AnchorY, GameView, StatusView, Viewport};
pub use hud::Hud;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
