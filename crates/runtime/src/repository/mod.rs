//! Snapshot persistence: contracts plus memory and file backends.

mod error;
mod file;
mod memory;
mod snapshot;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSnapshotRepository;
pub use memory::InMemorySnapshotRepository;
pub use snapshot::{RECORD_KEYS, SessionSnapshot};
pub use traits::SnapshotRepository;
