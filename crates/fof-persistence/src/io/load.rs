//! Project loading.

use std::fs;
use std::path::Path;

use fof_model::ProjectDescriptor;

use crate::error::{PersistenceError, Result};

/// Load a project descriptor and check its required fields.
pub fn load_project(path: &Path) -> Result<ProjectDescriptor> {
    let text = fs::read_to_string(path).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let project: ProjectDescriptor =
        serde_json::from_str(&text).map_err(|source| PersistenceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    check_required(&project, path)?;

    tracing::info!("Loaded project from {}", path.display());
    Ok(project)
}

fn check_required(project: &ProjectDescriptor, path: &Path) -> Result<()> {
    let required = [
        ("version", &project.version),
        ("leagueName", &project.league_name),
        ("identifier", &project.identifier),
    ];
    match required.into_iter().find(|(_, value)| value.is_empty()) {
        Some((field, _)) => Err(PersistenceError::MissingRequiredField {
            field,
            path: path.to_path_buf(),
        }),
        None => Ok(()),
    }
}
