//! Structured results of executing a command.

use scribe_core::{CatalogKind, DangerLevel, QuestStatus};

/// Coarse classification of an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The command did what was asked.
    Success,
    /// Nothing to do; the target was already in the requested state.
    AlreadyDone,
    /// The phrase did not resolve to anything.
    NotFound,
    /// The quest is not in a status the command can move it from.
    InvalidTransition,
    /// A cross-entity requirement is unmet.
    PreconditionFailed,
    /// The input was not a command.
    UnknownCommand,
}

/// A snapshot of a location as the player sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneView {
    /// Location display name.
    pub name: String,
    /// Art reference, if any.
    pub art: Option<String>,
    /// Location description.
    pub description: String,
    /// Free-form exits description.
    pub exits: String,
    /// Hints whose conditions currently hold, in definition order.
    pub hints: Vec<String>,
}

/// One row of the quest log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestView {
    /// Quest display name.
    pub name: String,
    /// Current status.
    pub status: QuestStatus,
}

/// One row of the bestiary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureView {
    /// Creature display name.
    pub name: String,
    /// Danger tier.
    pub danger: DangerLevel,
    /// Whether the creature has been documented.
    pub documented: bool,
    /// Field notes. Only presented once documented.
    pub description: String,
    /// Art reference, if any.
    pub art: Option<String>,
}

/// One row of the lore book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoreView {
    /// Entry title.
    pub title: String,
    /// Whether the entry has been discovered.
    pub discovered: bool,
    /// Entry text. Only presented once discovered.
    pub text: String,
    /// Art reference, if any.
    pub art: Option<String>,
}

/// The result of one command.
///
/// Player mistakes are outcomes too; nothing here is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The session is over.
    Quit,
    /// The current location, from `look`.
    Scene(SceneView),
    /// The player moved; the new location.
    Moved(SceneView),
    /// No exit of the current location matches.
    CannotGo {
        /// The phrase as typed (normalized).
        phrase: String,
    },
    /// A quest went from available to active.
    QuestTaken {
        /// Quest display name.
        quest: String,
    },
    /// Taking a quest that is already active.
    QuestAlreadyActive {
        /// Quest display name.
        quest: String,
    },
    /// Taking or completing a quest that is already completed.
    QuestAlreadyCompleted {
        /// Quest display name.
        quest: String,
    },
    /// Completing a quest that was never taken.
    QuestNotActive {
        /// Quest display name.
        quest: String,
    },
    /// Completing a quest whose requirement is unmet.
    QuestRequirementsUnmet {
        /// Quest display name.
        quest: String,
        /// Creatures that still need documenting.
        missing: Vec<String>,
    },
    /// A quest was completed and its reward collected.
    QuestCompleted {
        /// Quest display name.
        quest: String,
        /// Reward descriptor, e.g. `"50 gold"`.
        reward: String,
        /// Gold added.
        amount: u64,
        /// Gold after the reward.
        gold: u64,
        /// Titles of lore entries discovered by completing it.
        discovered: Vec<String>,
    },
    /// A creature was documented for the first time.
    CreatureDocumented {
        /// Creature display name.
        creature: String,
        /// Art reference, if any.
        art: Option<String>,
    },
    /// The creature was documented before.
    CreatureAlreadyDocumented {
        /// Creature display name.
        creature: String,
    },
    /// A phrase did not resolve in the given catalog.
    NotFound {
        /// Catalog that was searched.
        kind: CatalogKind,
        /// The phrase as typed (normalized). Empty when no argument was given.
        phrase: String,
        /// Close display names, best first.
        suggestions: Vec<String>,
    },
    /// Every quest with its status.
    Quests(Vec<QuestView>),
    /// Every creature.
    Creatures(Vec<CreatureView>),
    /// Every lore entry.
    Lore(Vec<LoreView>),
    /// Gold and items.
    Inventory {
        /// Item identifiers.
        items: Vec<String>,
        /// Gold carried.
        gold: u64,
    },
    /// The command list.
    Help,
    /// The input was not a command.
    Unknown {
        /// The trimmed input.
        input: String,
        /// A "did you mean" hint, if one applies.
        advice: Option<String>,
    },
}

impl Outcome {
    /// Classify the outcome.
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Quit
            | Self::Scene(_)
            | Self::Moved(_)
            | Self::QuestTaken { .. }
            | Self::QuestCompleted { .. }
            | Self::CreatureDocumented { .. }
            | Self::Quests(_)
            | Self::Creatures(_)
            | Self::Lore(_)
            | Self::Inventory { .. }
            | Self::Help => OutcomeKind::Success,
            Self::CreatureAlreadyDocumented { .. } => OutcomeKind::AlreadyDone,
            Self::CannotGo { .. } | Self::NotFound { .. } => OutcomeKind::NotFound,
            Self::QuestAlreadyActive { .. }
            | Self::QuestAlreadyCompleted { .. }
            | Self::QuestNotActive { .. } => OutcomeKind::InvalidTransition,
            Self::QuestRequirementsUnmet { .. } => OutcomeKind::PreconditionFailed,
            Self::Unknown { .. } => OutcomeKind::UnknownCommand,
        }
    }

    /// Whether the session should stop after this outcome.
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// The art reference a presenter should show, if any.
    pub fn art(&self) -> Option<&str> {
        match self {
            Self::Scene(scene) | Self::Moved(scene) => scene.art.as_deref(),
            Self::CreatureDocumented { art, .. } => art.as_deref(),
            _ => None,
        }
    }
}
