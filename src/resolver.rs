//! Placeholder data resolution.
//! Turns the declared placeholder map into the final substitution map,
//! reading file-mode values from disk.

use crate::config::DataMode;
use crate::error::{Error, Result};
use futures::future::try_join_all;
use indexmap::IndexMap;
use log::debug;

/// Builds the substitution map from the declared placeholder entries.
///
/// In `string` mode values pass through verbatim. In `file` mode each value
/// names a file whose content becomes the substitution value; all reads are
/// issued concurrently and the first failure aborts the resolution, with
/// any partial results discarded.
///
/// # Errors
/// * `Error::ResolutionError` naming the failing path when a file-mode
///   value cannot be read
pub async fn resolve_data(
    data: &IndexMap<String, String>,
    mode: DataMode,
) -> Result<IndexMap<String, String>> {
    match mode {
        DataMode::String => Ok(data.clone()),
        DataMode::File => {
            let entries = try_join_all(data.iter().map(|(key, path)| async move {
                debug!("Reading data file: {}", path);
                let content = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| Error::ResolutionError { path: path.clone(), source })?;
                Ok::<_, Error>((key.clone(), content))
            }))
            .await?;
            Ok(entries.into_iter().collect())
        }
    }
}
