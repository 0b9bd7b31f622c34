//! Creating a new project on disk.

use std::path::{Path, PathBuf};

use fof_model::{FileRole, LeagueInfo, PROJECT_EXTENSION, ProjectDescriptor};
use fof_persistence::{AppState, PersistenceError, Result, project_dir};

/// Path of the project file `init_project` creates for `identifier`.
pub fn project_file_path(dir: &Path, identifier: &str) -> PathBuf {
    dir.join(format!("{identifier}.{PROJECT_EXTENSION}"))
}

/// Write a new project descriptor with empty player, coach and team files and
/// a league info file holding the game defaults.
pub fn init_project(
    dir: &Path,
    league_name: &str,
    identifier: &str,
    base_year: i32,
) -> Result<PathBuf> {
    let path = project_file_path(dir, identifier);
    let project = ProjectDescriptor::new(league_name, identifier, base_year);
    let info_path = project.resolve_csv_path(FileRole::Info, project_dir(&path));

    let state = AppState::new();
    state.set_project(project);
    state.set_project_path(&path);
    state.save_project()?;

    if let Some(info_path) = info_path {
        fof_ingest::save_records(&info_path, &[LeagueInfo::with_defaults(base_year)])
            .map_err(PersistenceError::from)?;
    }

    tracing::info!(path = %path.display(), "created project");
    Ok(path)
}
