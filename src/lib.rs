//! TUI Blockfall (workspace facade crate).
//!
//! The public `tui_blockfall::{core,input,term,types}` paths re-export the
//! dedicated crates under `crates/`; [`cli`] holds the runner's options.

pub mod cli;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
