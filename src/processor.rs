//! Core replace orchestration.
//! Resolves the placeholder data, expands every `files` entry, and rewrites
//! every matched file in place.

use crate::config::ReplaceConfig;
use crate::error::{Error, Result};
use crate::expander::expand_entry;
use crate::interpolate::Interpolate;
use crate::resolver::resolve_data;
use futures::future::try_join_all;
use indexmap::IndexMap;
use log::debug;
use std::path::Path;

async fn read_file(path: &Path) -> Result<String> {
    debug!("Reading file: {}", path.display());
    tokio::fs::read_to_string(path).await.map_err(Error::IoError)
}

async fn write_file(path: &Path, content: &str) -> Result<()> {
    debug!("Writing file: {}", path.display());
    tokio::fs::write(path, content).await.map_err(Error::IoError)
}

/// Rewrites one matched file in place: one read, one substitution pass,
/// one full overwrite.
pub async fn process_file(
    path: &Path,
    data: &IndexMap<String, String>,
    interpolator: &dyn Interpolate,
) -> Result<()> {
    let content = read_file(path).await?;
    let content = interpolator.interpolate(&content, data);
    write_file(path, &content).await
}

/// Runs one replace invocation.
///
/// The substitution map is fully resolved before any target file is
/// touched. All `files` entries, and all files matched within them, are
/// then processed concurrently; the first error aborts the invocation and
/// files already rewritten stay modified. Two entries matching the same
/// path race on it, last write wins.
pub async fn run(config: &ReplaceConfig, interpolator: &dyn Interpolate) -> Result<()> {
    config.validate()?;

    let data = resolve_data(&config.data, config.mode).await?;

    try_join_all(config.files.entries().iter().map(|entry| {
        let data = &data;
        async move {
            let matches = expand_entry(entry, &config.glob)?;
            try_join_all(matches.iter().map(|path| process_file(path, data, interpolator)))
                .await?;
            Ok::<_, Error>(())
        }
    }))
    .await?;

    Ok(())
}
