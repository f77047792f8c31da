mod error;
mod traits;

pub use error::{QueryError, Result};
pub use traits::LogStore;
