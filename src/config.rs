//! Invocation options for a replace task.
//! Provides the deserializable option types and task-file loading with
//! support for both JSON and YAML definitions.

use crate::error::{Error, Result};
use glob::MatchOptions;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// How the values of `data` are interpreted, uniformly for the whole
/// invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    /// Values are the substitution content themselves
    #[default]
    String,
    /// Values name files whose content becomes the substitution content
    File,
}

/// The `files` option accepts a single path/pattern or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FilesArg {
    One(String),
    Many(Vec<String>),
}

impl FilesArg {
    /// Normalizes to a slice of entries, treating a single string as a
    /// one-element sequence.
    pub fn entries(&self) -> &[String] {
        match self {
            FilesArg::One(entry) => std::slice::from_ref(entry),
            FilesArg::Many(entries) => entries,
        }
    }
}

/// Options forwarded to the matching engine.
///
/// `mark` tells the engine to tag directory matches with a trailing path
/// separator. The expander force-enables it regardless of the caller's
/// value, since the directory filter depends on the tag.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobOptions {
    pub case_sensitive: bool,
    pub require_literal_separator: bool,
    pub require_literal_leading_dot: bool,
    pub mark: bool,
}

impl Default for GlobOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: false,
            mark: false,
        }
    }
}

impl GlobOptions {
    /// The subset of options understood by the engine itself.
    pub(crate) fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: self.case_sensitive,
            require_literal_separator: self.require_literal_separator,
            require_literal_leading_dot: self.require_literal_leading_dot,
        }
    }
}

/// One replace invocation, as supplied by the hosting task definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplaceConfig {
    /// Path(s) or glob pattern(s) naming the files to process
    pub files: FilesArg,

    /// Placeholder key to value (or file path, in file mode)
    pub data: IndexMap<String, String>,

    /// Interpretation of `data` values, `string` when absent
    #[serde(rename = "type", default)]
    pub mode: DataMode,

    /// Matching engine options
    #[serde(default)]
    pub glob: GlobOptions,
}

impl ReplaceConfig {
    /// Checks the structural constraints of the option table before any
    /// filesystem access happens.
    pub fn validate(&self) -> Result<()> {
        if self.files.entries().is_empty() {
            return Err(Error::ValidationError(
                "'files' must name at least one path or pattern".to_string(),
            ));
        }
        if self.data.is_empty() {
            return Err(Error::ValidationError(
                "'data' must define at least one placeholder".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads and validates a task definition from a file.
///
/// # Errors
/// * `Error::ConfigError` if the file cannot be read or parsed
/// * `Error::ValidationError` if the options fail structural validation
pub fn load_task_file<P: AsRef<Path>>(path: P) -> Result<ReplaceConfig> {
    let path = path.as_ref();
    debug!("Loading task definition from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("cannot read task file '{}': {}", path.display(), e))
    })?;
    parse_task(&content)
}

/// Parses a task definition, trying JSON first, then YAML.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML
/// * `Error::ValidationError` if the options fail structural validation
pub fn parse_task(content: &str) -> Result<ReplaceConfig> {
    let config: ReplaceConfig = match serde_json::from_str(content) {
        Ok(config) => config,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("invalid task definition: {}", e)))?,
    };
    config.validate()?;
    Ok(config)
}
