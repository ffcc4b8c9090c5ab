//! CLI command handlers. Each writes to the given output so tests can capture it.

mod build;
mod parse;
mod resolve;
mod uuid;

pub use build::run_build;
pub use parse::run_parse;
pub use resolve::run_resolve;
pub use uuid::{run_uuid_decode, run_uuid_encode};
