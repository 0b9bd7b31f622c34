//! Project file I/O.

mod load;
mod save;

pub use load::load_project;
pub use save::save_project;
