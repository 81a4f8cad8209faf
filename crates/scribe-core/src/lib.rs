//! Core types for Mythic Scribe: entity catalogs and the world model.
//!
//! This crate defines the static content a game is built from (locations,
//! creatures, quests and lore) and the few fields that change during play.
//! A [`World`] is built once from a [`WorldDef`], either programmatically or
//! from JSON, and validated before any session can start.

/// Keyed, ordered entity collections.
pub mod catalog;
/// Declarative conditions used by location hints.
pub mod condition;
/// Entity types and their identifiers.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// The validated world model that owns every catalog.
pub mod world;

/// Re-export catalog types.
pub use catalog::{Catalog, Catalogued};
/// Re-export condition types.
pub use condition::{Condition, HintRule};
/// Re-export entity types.
pub use entity::{
    Creature, DangerLevel, EntityKey, Exit, Location, LoreEntry, Quest, QuestRequirement,
    QuestStatus, Reward,
};
/// Re-export error types.
pub use error::{CatalogKind, CoreError, CoreResult, TransitionError};
/// Re-export world model types.
pub use world::{PlayerStart, World, WorldDef, WorldMeta};
