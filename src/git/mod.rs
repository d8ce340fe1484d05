pub mod log;

pub use log::{resolve_since, GitLog, LogStream};
