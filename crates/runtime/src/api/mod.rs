//! Types downstream clients interact with.

mod errors;
mod handle;

pub use errors::{RepositoryError, Result, RuntimeError};
pub use handle::SessionHandle;
