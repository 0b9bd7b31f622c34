//! Shared application state.
//!
//! [`AppState`] holds the open project and its record collections behind a
//! single [`RwLock`]. Getters hand out clones, so callers never hold the
//! lock, and project file I/O runs with the lock released.

mod tracker;

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use fof_model::{Coach, FileRole, Player, ProjectDescriptor, Record, Team};

use crate::error::{PersistenceError, Result};
use crate::io;

pub use tracker::DirtyTracker;

#[derive(Debug, Default)]
struct Inner {
    project: Option<ProjectDescriptor>,
    project_path: Option<PathBuf>,
    players: Vec<Player>,
    coaches: Vec<Coach>,
    teams: Vec<Team>,
    tracker: DirtyTracker,
}

/// The open project and its league data.
#[derive(Debug, Default)]
pub struct AppState {
    inner: RwLock<Inner>,
}

/// Everything a save writes, copied out of the lock.
struct Snapshot {
    project: ProjectDescriptor,
    path: PathBuf,
    players: Vec<Player>,
    coaches: Vec<Coach>,
    teams: Vec<Team>,
    revision: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // Writers only assign whole fields, so a poisoned lock still guards
    // consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn project(&self) -> Option<ProjectDescriptor> {
        self.read().project.clone()
    }

    pub fn set_project(&self, project: ProjectDescriptor) {
        self.write().project = Some(project);
    }

    pub fn project_path(&self) -> Option<PathBuf> {
        self.read().project_path.clone()
    }

    pub fn set_project_path(&self, path: impl Into<PathBuf>) {
        self.write().project_path = Some(path.into());
    }

    pub fn has_project(&self) -> bool {
        self.read().project.is_some()
    }

    pub fn players(&self) -> Vec<Player> {
        self.read().players.clone()
    }

    pub fn set_players(&self, players: Vec<Player>) {
        let mut inner = self.write();
        inner.players = players;
        inner.tracker.mark_dirty();
    }

    pub fn coaches(&self) -> Vec<Coach> {
        self.read().coaches.clone()
    }

    pub fn set_coaches(&self, coaches: Vec<Coach>) {
        let mut inner = self.write();
        inner.coaches = coaches;
        inner.tracker.mark_dirty();
    }

    pub fn teams(&self) -> Vec<Team> {
        self.read().teams.clone()
    }

    pub fn set_teams(&self, teams: Vec<Team>) {
        let mut inner = self.write();
        inner.teams = teams;
        inner.tracker.mark_dirty();
    }

    pub fn is_dirty(&self) -> bool {
        self.read().tracker.is_dirty()
    }

    pub fn mark_dirty(&self) {
        self.write().tracker.mark_dirty();
    }

    pub fn mark_clean(&self) {
        self.write().tracker.mark_clean();
    }

    /// Close the project and drop all loaded data.
    pub fn reset(&self) {
        let mut inner = self.write();
        let mut tracker = std::mem::take(&mut inner.tracker);
        tracker.mark_clean();
        *inner = Inner {
            tracker,
            ..Inner::default()
        };
    }

    /// Load a project file and the player, coach and team files it lists.
    ///
    /// Data file paths are relative to the project file's directory. A role
    /// missing from `csvFiles` loads as an empty list. Nothing changes unless
    /// every file loads.
    pub fn load_project(&self, path: &Path) -> Result<()> {
        let project = io::load_project(path)?;
        let base_dir = project_dir(path);
        let players = load_role::<Player>(&project, FileRole::Players, base_dir)?;
        let coaches = load_role::<Coach>(&project, FileRole::Coaches, base_dir)?;
        let teams = load_role::<Team>(&project, FileRole::Teams, base_dir)?;

        tracing::info!(
            league = %project.league_name,
            players = players.len(),
            coaches = coaches.len(),
            teams = teams.len(),
            "opened project"
        );

        let mut inner = self.write();
        inner.project = Some(project);
        inner.project_path = Some(path.to_path_buf());
        inner.players = players;
        inner.coaches = coaches;
        inner.teams = teams;
        inner.tracker.mark_clean();
        Ok(())
    }

    /// Write the project file and its player, coach and team files.
    pub fn save_project(&self) -> Result<()> {
        let snapshot = self.snapshot_for_save()?;
        let base_dir = project_dir(&snapshot.path);

        io::save_project(&snapshot.project, &snapshot.path)?;
        save_role(&snapshot.project, FileRole::Players, base_dir, &snapshot.players)?;
        save_role(&snapshot.project, FileRole::Coaches, base_dir, &snapshot.coaches)?;
        save_role(&snapshot.project, FileRole::Teams, base_dir, &snapshot.teams)?;

        let mut inner = self.write();
        inner.tracker.save_complete(snapshot.revision);
        if inner.tracker.is_dirty() {
            tracing::debug!("data changed during save; state stays dirty");
        }
        Ok(())
    }

    fn snapshot_for_save(&self) -> Result<Snapshot> {
        let mut inner = self.write();
        if inner.project.is_none() {
            return Err(PersistenceError::NoProject);
        }
        let path = inner
            .project_path
            .clone()
            .ok_or(PersistenceError::NoProjectPath)?;
        let project = inner.project.as_mut().ok_or(PersistenceError::NoProject)?;
        project.touch();
        let project = project.clone();
        Ok(Snapshot {
            project,
            path,
            players: inner.players.clone(),
            coaches: inner.coaches.clone(),
            teams: inner.teams.clone(),
            revision: inner.tracker.revision(),
        })
    }
}

/// Directory the project's relative data paths are resolved against.
pub fn project_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn load_role<R: Record>(
    project: &ProjectDescriptor,
    role: FileRole,
    base_dir: &Path,
) -> Result<Vec<R>> {
    match project.resolve_csv_path(role, base_dir) {
        Some(path) => Ok(fof_ingest::load_records(&path)?),
        None => {
            tracing::debug!(role = role.as_str(), "role not listed in project");
            Ok(Vec::new())
        }
    }
}

fn save_role<R: Record>(
    project: &ProjectDescriptor,
    role: FileRole,
    base_dir: &Path,
    records: &[R],
) -> Result<()> {
    if let Some(path) = project.resolve_csv_path(role, base_dir) {
        fof_ingest::save_records(&path, records)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = AppState::new();
        assert!(!state.has_project());
        assert!(!state.is_dirty());
        assert!(state.players().is_empty());
        assert!(state.project_path().is_none());
    }

    #[test]
    fn setters_mark_dirty() {
        let state = AppState::new();
        state.set_coaches(vec![Coach::default()]);
        assert!(state.is_dirty());
        assert_eq!(state.coaches().len(), 1);

        state.mark_clean();
        state.set_project(ProjectDescriptor::new("L", "l", 2024));
        assert!(!state.is_dirty());
    }

    #[test]
    fn reset_clears_everything() {
        let state = AppState::new();
        state.set_project(ProjectDescriptor::new("L", "l", 2024));
        state.set_project_path("/tmp/l.fof9proj");
        state.set_teams(vec![Team::default()]);

        state.reset();

        assert!(!state.has_project());
        assert!(state.project_path().is_none());
        assert!(state.teams().is_empty());
        assert!(!state.is_dirty());
    }

    #[test]
    fn save_without_project_fails() {
        let state = AppState::new();
        state.set_project_path("/tmp/none.fof9proj");
        assert!(matches!(state.save_project(), Err(PersistenceError::NoProject)));

        let state = AppState::new();
        state.set_project(ProjectDescriptor::new("L", "l", 2024));
        assert!(matches!(
            state.save_project(),
            Err(PersistenceError::NoProjectPath)
        ));
    }

    #[test]
    fn project_dir_defaults_to_current() {
        assert_eq!(project_dir(Path::new("league.fof9proj")), Path::new("."));
        assert_eq!(project_dir(Path::new("a/league.fof9proj")), Path::new("a"));
    }
}
