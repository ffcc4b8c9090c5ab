pub mod config;
pub mod logging;

pub mod link;
pub mod target;
pub mod uuid;

pub use link::{parse, ParseError, ParseErrorKind, ParsedLink, SCHEME};
