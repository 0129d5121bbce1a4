//! Comp Randomizer CLI
//!
//! Library half of the `comprand` binary: subcommands, settings resolution
//! and terminal rendering.

pub mod commands;
pub mod output;
pub mod settings;
