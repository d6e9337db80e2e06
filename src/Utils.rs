//! different utility modules used throughout the project
/// logging setup: console and/or file sinks with a chosen level
pub mod logger;
/// read logging and variable-name settings from a TOML document
pub mod settings;
