mod query;
mod types;

pub use query::{KeyCondition, LogQuery};
pub use types::LogEntry;
