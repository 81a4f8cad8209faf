//! Narrator: turns outcomes into presentable lines of text.

mod line;
mod templates;

pub use line::{Line, LineKind};
pub use templates::{HELP_COMMANDS, narrate};
