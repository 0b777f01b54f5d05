//! Swiftris (workspace facade crate).
//!
//! Re-exports the member crates under one name: `swiftris::{core,input,term,types}`.
//! The rules live in `core`; `input` and `term` make up the terminal front end.

pub use swiftris_core as core;
pub use swiftris_input as input;
pub use swiftris_term as term;
pub use swiftris_types as types;
