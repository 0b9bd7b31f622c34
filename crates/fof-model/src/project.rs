//! The `.fof9proj` project descriptor.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Descriptor format version written by this crate.
pub const PROJECT_FORMAT_VERSION: &str = "1.0";

/// File extension of project descriptors.
pub const PROJECT_EXTENSION: &str = "fof9proj";

/// Logical role of a CSV file within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileRole {
    Info,
    Players,
    Coaches,
    Teams,
    TeamColors,
}

impl FileRole {
    pub const ALL: [FileRole; 5] = [
        FileRole::Info,
        FileRole::Players,
        FileRole::Coaches,
        FileRole::Teams,
        FileRole::TeamColors,
    ];

    /// Key used in the descriptor's `csvFiles` map.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileRole::Info => "info",
            FileRole::Players => "players",
            FileRole::Coaches => "coaches",
            FileRole::Teams => "teams",
            FileRole::TeamColors => "teamColors",
        }
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project metadata: league identity plus the manifest of CSV files.
///
/// Every key is optional when deserializing so that an incomplete document
/// still parses; the persistence layer enforces the required fields. An
/// explicit `null` for a map or timestamp reads as its empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDescriptor {
    pub version: String,
    pub league_name: String,
    pub identifier: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub last_modified: DateTime<Utc>,
    pub base_year: i32,
    pub data_path: String,
    pub reference_path: String,
    /// Role key to path relative to the project file.
    #[serde(deserialize_with = "null_as_default")]
    pub csv_files: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub user_preferences: BTreeMap<String, serde_json::Value>,
}

impl ProjectDescriptor {
    /// Create a project with the default file layout under `data/`.
    pub fn new(
        league_name: impl Into<String>,
        identifier: impl Into<String>,
        base_year: i32,
    ) -> Self {
        let identifier = identifier.into();
        let now = Utc::now();
        let mut csv_files = BTreeMap::new();
        for role in FileRole::ALL {
            csv_files.insert(role.as_str().to_string(), default_csv_path(role, &identifier));
        }
        Self {
            version: PROJECT_FORMAT_VERSION.to_string(),
            league_name: league_name.into(),
            identifier,
            created: now,
            last_modified: now,
            base_year,
            data_path: "./data/".to_string(),
            reference_path: "./reference/".to_string(),
            csv_files,
            user_preferences: BTreeMap::new(),
        }
    }

    /// Refresh the last-modified timestamp.
    pub fn touch(&mut self) {
        self.last_modified = Utc::now();
    }

    pub fn csv_path(&self, role: FileRole) -> Option<&str> {
        self.csv_files.get(role.as_str()).map(String::as_str)
    }

    /// Path of a role's file, joined onto the directory holding the project.
    pub fn resolve_csv_path(&self, role: FileRole, base_dir: &Path) -> Option<PathBuf> {
        self.csv_path(role).map(|relative| base_dir.join(relative))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn default_csv_path(role: FileRole, identifier: &str) -> String {
    let file_name = match role {
        FileRole::Info => format!("{identifier}_info.csv"),
        FileRole::Players => format!("{identifier}_players.csv"),
        FileRole::Coaches => format!("{identifier}_coaches.csv"),
        FileRole::Teams => "team_info.csv".to_string(),
        FileRole::TeamColors => "team_colors.csv".to_string(),
    };
    format!("data/{file_name}")
}
