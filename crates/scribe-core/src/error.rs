use crate::entity::{EntityKey, QuestStatus};

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Which catalog an entity key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    /// The location catalog.
    Location,
    /// The creature catalog.
    Creature,
    /// The quest catalog.
    Quest,
    /// The lore catalog.
    Lore,
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Location => write!(f, "location"),
            Self::Creature => write!(f, "creature"),
            Self::Quest => write!(f, "quest"),
            Self::Lore => write!(f, "lore"),
        }
    }
}

/// A status change the quest state machine does not allow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("quest \"{quest}\" cannot go from {from} to {to}")]
pub struct TransitionError {
    /// The quest that refused the change.
    pub quest: EntityKey,
    /// Status before the attempted change.
    pub from: QuestStatus,
    /// Status that was requested.
    pub to: QuestStatus,
}

/// Errors raised while building or mutating a world.
///
/// Everything except [`CoreError::Transition`] is a configuration error:
/// the world definition is unusable and no session can start from it.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The world defines no locations at all.
    #[error("world defines no locations")]
    NoLocations,

    /// Two entries in one catalog share a key.
    #[error("duplicate {kind} key: \"{key}\"")]
    DuplicateKey {
        /// Catalog holding the duplicate.
        kind: CatalogKind,
        /// The repeated key.
        key: EntityKey,
    },

    /// A key referenced somewhere in the world does not exist.
    #[error("unknown {kind} \"{key}\" referenced by {context}")]
    UnknownKey {
        /// Catalog the key was looked up in.
        kind: CatalogKind,
        /// The missing key.
        key: String,
        /// Where the reference came from.
        context: String,
    },

    /// A quest requires its location's creatures but names no location.
    #[error("quest \"{0}\" requires its location's creatures but has no location")]
    RequirementWithoutLocation(EntityKey),

    /// An exit has an empty or whitespace-only phrase.
    #[error("location \"{0}\" has an exit with a blank phrase")]
    BlankExitPhrase(EntityKey),

    /// A reward descriptor does not start with a whole number.
    #[error("invalid reward \"{0}\": expected a leading amount such as \"50 gold\"")]
    InvalidReward(String),

    /// The world file could not be parsed.
    #[error("invalid world definition: {0}")]
    Json(#[from] serde_json::Error),

    /// The world file could not be read.
    #[error("cannot read world file: {0}")]
    Io(#[from] std::io::Error),

    /// A forbidden quest status change was attempted.
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

impl CoreError {
    pub(crate) fn unknown(kind: CatalogKind, key: &str, context: impl Into<String>) -> Self {
        Self::UnknownKey {
            kind,
            key: key.to_string(),
            context: context.into(),
        }
    }
}
