//! Driver for the Tiny lexer and recognizer.
//!
//! The `tiny` binary is a thin wrapper over [`commands::run`]; everything it
//! prints goes through writers handed in by the caller.

pub mod cli;
pub mod commands;
pub mod input;
pub mod logging;
pub mod report;
