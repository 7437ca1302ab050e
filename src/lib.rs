/// Handles argument parsing and command dispatch.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Application wide constants and defaults.
pub mod constants;

/// Configuration handling for opgen.
pub mod config;

/// Extension traits for standard library types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Request validation run before generation.
pub mod validation;

/// Operator project generation pipeline.
pub mod generator;

/// Changed operator detection from change lists.
pub mod changes;

/// Simulated build command.
pub mod build;
