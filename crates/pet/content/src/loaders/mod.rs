//! Loaders for reading catalogs and session settings from files.
//!
//! Catalogs ship as RON, settings as TOML. Both loaders fall back to the
//! built-in data for anything a file omits, so a partial overlay file is
//! enough to reskin one table.

pub mod catalog;
pub mod config;

pub use catalog::CatalogLoader;
pub use config::{ConfigLoader, DecaySettings, SessionSettings, TimerSettings};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
