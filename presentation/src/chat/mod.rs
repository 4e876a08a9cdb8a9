//! Interactive chat module
//!
//! Provides a reedline-based interactive chat interface. One REPL run is
//! one advisor session.

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::ChatRepl;
