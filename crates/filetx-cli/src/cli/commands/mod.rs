//! CLI command handlers.

mod get;
mod resolve;

pub use get::run_get;
pub use resolve::run_resolve;
