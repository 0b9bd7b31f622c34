//! Project saving.

use std::path::Path;

use fof_model::ProjectDescriptor;

use crate::error::{PersistenceError, Result};

/// Save a project descriptor as pretty-printed JSON.
///
/// The file is replaced atomically; the descriptor is written as given, so
/// callers refresh `lastModified` themselves when that is wanted.
pub fn save_project(project: &ProjectDescriptor, path: &Path) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(project)
        .map_err(|source| PersistenceError::Serialize { source })?;
    fof_common::write_atomic(path, &bytes)?;

    tracing::info!("Saved project to {}", path.display());
    Ok(())
}
