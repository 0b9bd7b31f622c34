//! Library side of the `fof-editor` command-line tool.

pub mod logging;
pub mod report;
pub mod scaffold;
pub mod version;
