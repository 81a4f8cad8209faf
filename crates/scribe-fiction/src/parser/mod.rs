//! Command parsing and entity resolution.

mod command;
mod resolver;

pub use command::{ALIASES, Command, normalize, parse_command};
pub use resolver::{MatchTier, Resolved, resolve, suggest};
