//! different utility modules used throughout the project
/// engine settings from TOML: rendering of constants and logging
pub mod config;
/// console and file logging on top of simplelog
pub mod logger;
///
mod config_tests;
