//! Data models shared by the library and the CLI.

pub mod config;

pub use config::{DocbrConfig, EngineConfig, OutputConfig, OutputFormat};
