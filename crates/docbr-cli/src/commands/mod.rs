//! Subcommand implementations.

pub mod attributes;
pub mod batch;
pub mod config;
pub mod input;
pub mod output;
pub mod parse;
pub mod types;
pub mod validate;
