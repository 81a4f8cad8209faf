//! Command interpreter and world-state machine for Mythic Scribe.
//!
//! Player input is parsed into a [`Command`], resolved against the world's
//! catalogs with tiered fuzzy matching, and applied by a [`GameSession`].
//! Every command yields an [`Outcome`]; the narrator turns outcomes into
//! plain lines of text for whatever presenter sits on top.

/// "Did you mean" advice for unrecognized input.
pub mod advice;
/// Session configuration.
pub mod config;
/// Error types for the fiction engine.
pub mod error;
/// Narration of outcomes.
pub mod narrator;
/// Structured command results.
pub mod outcome;
/// Command parsing and entity resolution.
pub mod parser;
/// Player state management.
pub mod player;
/// The interactive session.
pub mod session;

pub use config::SessionConfig;
pub use error::{FictionError, FictionResult};
pub use narrator::{Line, LineKind};
pub use outcome::{CreatureView, LoreView, Outcome, OutcomeKind, QuestView, SceneView};
pub use parser::{Command, MatchTier, Resolved, parse_command, resolve, suggest};
pub use player::PlayerState;
pub use session::GameSession;
