//! Terminal Action Adapter Library
//!
//! Applies decoded terminal actions (print text, move the cursor, change
//! colors and flags, erase cells, set the title) to a screen buffer.
//!
//! - `core`: buffer model, attributes, viewport geometry, snapshots
//! - `api`: the `TerminalApi` capability set driven by the interpreter
//! - `terminal`: `Terminal`, the adapter implementing `TerminalApi`
//! - `action`: actions as serializable values and their dispatch
//! - `config`: session configuration

pub mod action;
pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod terminal;
pub mod title;

pub use action::{dispatch, dispatch_all, Action};
pub use api::TerminalApi;
pub use error::{BufferError, Error, Result};
pub use terminal::Terminal;
