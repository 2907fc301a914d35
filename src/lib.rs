//! Stamp rewrites `{{placeholder}}` tokens in existing files with supplied
//! values, either literal strings or the contents of other files. It is the
//! replace step of a scaffolding pipeline: point it at paths or glob
//! patterns and every matched file is rewritten in place.

/// Command-line interface module for the standalone runner
pub mod cli;

/// Invocation options and task-file loading
/// Supports JSON and YAML task definitions
pub mod config;

/// Error types and handling
pub mod error;

/// Expansion of `files` entries through the glob engine
pub mod expander;

/// Placeholder token substitution capability
pub mod interpolate;

/// Core replace orchestration
/// Combines data resolution, expansion, and in-place rewriting
pub mod processor;

/// Placeholder data resolution (string and file modes)
pub mod resolver;
