//! Shared helpers for FOF9 league tooling.

pub mod atomic;

pub use atomic::{AtomicWriteError, temp_path_for, write_atomic};
