//! Project files and application state for the FOF9 league editor.
//!
//! A project is a `.fof9proj` JSON document naming the league's CSV files.
//! [`AppState`] ties the two together: it loads the descriptor and the
//! player, coach and team files it lists, tracks edits, and writes
//! everything back.

mod error;
mod io;
mod state;

pub use error::{PersistenceError, Result};
pub use io::{load_project, save_project};
pub use state::{AppState, DirtyTracker, project_dir};
