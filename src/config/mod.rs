//! Configuration management for opgen
//!
//! - `loader`: configuration file loading, defaults and validation

pub mod loader;

#[cfg(test)]
mod tests;

pub use loader::{load, tool_root, Config, ConfigV1};
