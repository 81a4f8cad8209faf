use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalogued;
use crate::condition::HintRule;
use crate::error::{CatalogKind, CoreError, TransitionError};

/// Canonical identifier of a catalog entry, e.g. `dire_wolf`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityKey(String);

impl EntityKey {
    /// Create a key from any string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key with underscores replaced by spaces, lowercased.
    pub fn spaced(&self) -> String {
        self.0.replace('_', " ").to_lowercase()
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EntityKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for EntityKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// How dangerous a creature is to approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DangerLevel {
    /// Mostly harmless.
    #[default]
    Low,
    /// Keep your distance.
    Medium,
    /// Do not approach.
    High,
}

impl fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Progress of a quest. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    /// Can be taken.
    #[default]
    Available,
    /// Taken and in progress.
    Active,
    /// Finished and rewarded.
    Completed,
}

impl QuestStatus {
    /// Whether `self -> to` is one of the two allowed forward steps.
    pub fn can_advance_to(self, to: QuestStatus) -> bool {
        matches!(
            (self, to),
            (Self::Available, Self::Active) | (Self::Active, Self::Completed)
        )
    }
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// A quest reward such as `"50 gold"`, with its numeric amount pulled out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Reward {
    descriptor: String,
    amount: u64,
}

impl Reward {
    /// Parse a descriptor whose first word is the amount.
    pub fn parse(descriptor: &str) -> Result<Self, CoreError> {
        let amount = descriptor
            .split_whitespace()
            .next()
            .and_then(|word| word.parse::<u64>().ok())
            .ok_or_else(|| CoreError::InvalidReward(descriptor.to_string()))?;
        Ok(Self {
            descriptor: descriptor.trim().to_string(),
            amount,
        })
    }

    /// The descriptor as written, e.g. `"50 gold"`.
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// The numeric magnitude, e.g. `50`.
    pub fn amount(&self) -> u64 {
        self.amount
    }
}

impl TryFrom<String> for Reward {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Reward> for String {
    fn from(reward: Reward) -> Self {
        reward.descriptor
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor)
    }
}

/// Dependency a quest checks before it can be completed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestRequirement {
    /// No precondition.
    #[default]
    None,
    /// Every creature associated with the quest's location must be documented.
    DocumentLocationCreatures,
    /// Every listed creature must be documented.
    CreaturesDocumented {
        /// Creature keys.
        creatures: Vec<EntityKey>,
    },
}

/// A creature the scribe can document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    key: EntityKey,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    danger: DangerLevel,
    #[serde(default)]
    documented: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    art: Option<String>,
}

impl Creature {
    /// Create an undocumented creature.
    pub fn new(key: impl Into<EntityKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: String::new(),
            danger: DangerLevel::default(),
            documented: false,
            art: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the danger tier.
    pub fn with_danger(mut self, danger: DangerLevel) -> Self {
        self.danger = danger;
        self
    }

    /// Attach an art reference.
    pub fn with_art(mut self, art: impl Into<String>) -> Self {
        self.art = Some(art.into());
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field notes shown once documented.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Danger tier.
    pub fn danger(&self) -> DangerLevel {
        self.danger
    }

    /// Whether the creature has been documented.
    pub fn is_documented(&self) -> bool {
        self.documented
    }

    /// Opaque art reference for presenters.
    pub fn art(&self) -> Option<&str> {
        self.art.as_deref()
    }

    /// Flip the documented flag. Returns `false` if it was already set.
    pub(crate) fn mark_documented(&mut self) -> bool {
        !std::mem::replace(&mut self.documented, true)
    }
}

/// A quest the scribe can take and complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    key: EntityKey,
    name: String,
    #[serde(default)]
    description: String,
    reward: Reward,
    #[serde(default)]
    status: QuestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<EntityKey>,
    #[serde(default)]
    requirement: QuestRequirement,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    reveals_lore: Vec<EntityKey>,
}

impl Quest {
    /// Create an available quest with no requirement.
    pub fn new(key: impl Into<EntityKey>, name: impl Into<String>, reward: Reward) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: String::new(),
            reward,
            status: QuestStatus::default(),
            location: None,
            requirement: QuestRequirement::default(),
            reveals_lore: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the initial status.
    pub fn with_status(mut self, status: QuestStatus) -> Self {
        self.status = status;
        self
    }

    /// Associate the quest with a location.
    pub fn with_location(mut self, location: impl Into<EntityKey>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the completion requirement.
    pub fn with_requirement(mut self, requirement: QuestRequirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// Lore entries discovered when the quest is completed.
    pub fn with_reveals_lore(mut self, lore: Vec<EntityKey>) -> Self {
        self.reveals_lore = lore;
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quest text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Reward paid on completion.
    pub fn reward(&self) -> &Reward {
        &self.reward
    }

    /// Current status.
    pub fn status(&self) -> QuestStatus {
        self.status
    }

    /// Associated location, if any.
    pub fn location(&self) -> Option<&EntityKey> {
        self.location.as_ref()
    }

    /// Completion requirement.
    pub fn requirement(&self) -> &QuestRequirement {
        &self.requirement
    }

    /// Lore keys revealed on completion.
    pub fn reveals_lore(&self) -> &[EntityKey] {
        &self.reveals_lore
    }

    pub(crate) fn advance_to(&mut self, to: QuestStatus) -> Result<(), TransitionError> {
        if !self.status.can_advance_to(to) {
            return Err(TransitionError {
                quest: self.key.clone(),
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

/// One accepted phrase in a location's exit table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// Phrase the player types after `go`.
    pub phrase: String,
    /// Destination location key.
    pub to: EntityKey,
}

impl Exit {
    /// Create an exit.
    pub fn new(phrase: impl Into<String>, to: impl Into<EntityKey>) -> Self {
        Self {
            phrase: phrase.into(),
            to: to.into(),
        }
    }

    /// Case-insensitive equality or containment in either direction.
    /// A blank input or phrase never matches.
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim().to_lowercase();
        let phrase = self.phrase.trim().to_lowercase();
        if input.is_empty() || phrase.is_empty() {
            return false;
        }
        input == phrase || input.contains(&phrase) || phrase.contains(&input)
    }
}

/// A place the scribe can stand in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    key: EntityKey,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    art: Option<String>,
    #[serde(default)]
    exits_text: String,
    #[serde(default)]
    exits: Vec<Exit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    creatures: Vec<EntityKey>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    quests: Vec<EntityKey>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    hints: Vec<HintRule>,
}

impl Location {
    /// Create a location with no exits.
    pub fn new(key: impl Into<EntityKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: String::new(),
            art: None,
            exits_text: String::new(),
            exits: Vec::new(),
            creatures: Vec::new(),
            quests: Vec::new(),
            hints: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach an art reference.
    pub fn with_art(mut self, art: impl Into<String>) -> Self {
        self.art = Some(art.into());
        self
    }

    /// Set the prose describing the exits.
    pub fn with_exits_text(mut self, text: impl Into<String>) -> Self {
        self.exits_text = text.into();
        self
    }

    /// Append an exit phrase.
    pub fn with_exit(mut self, phrase: impl Into<String>, to: impl Into<EntityKey>) -> Self {
        self.exits.push(Exit::new(phrase, to));
        self
    }

    /// Associate a creature with this location.
    pub fn with_creature(mut self, creature: impl Into<EntityKey>) -> Self {
        self.creatures.push(creature.into());
        self
    }

    /// Associate a quest with this location.
    pub fn with_quest(mut self, quest: impl Into<EntityKey>) -> Self {
        self.quests.push(quest.into());
        self
    }

    /// Append a hint rule.
    pub fn with_hint(mut self, hint: HintRule) -> Self {
        self.hints.push(hint);
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Room description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Opaque art reference for presenters.
    pub fn art(&self) -> Option<&str> {
        self.art.as_deref()
    }

    /// Prose describing where the player can go.
    pub fn exits_text(&self) -> &str {
        &self.exits_text
    }

    /// Exit table in definition order.
    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    /// Creatures associated with this location.
    pub fn creatures(&self) -> &[EntityKey] {
        &self.creatures
    }

    /// Quests associated with this location.
    pub fn quests(&self) -> &[EntityKey] {
        &self.quests
    }

    /// Hint rules in definition order.
    pub fn hints(&self) -> &[HintRule] {
        &self.hints
    }

    /// First exit whose phrase matches the input.
    pub fn find_exit(&self, input: &str) -> Option<&Exit> {
        self.exits.iter().find(|exit| exit.matches(input))
    }
}

/// A piece of world lore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoreEntry {
    key: EntityKey,
    title: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    discovered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    art: Option<String>,
}

impl LoreEntry {
    /// Create an undiscovered lore entry.
    pub fn new(key: impl Into<EntityKey>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            text: String::new(),
            discovered: false,
            art: None,
        }
    }

    /// Set the lore text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Attach an art reference.
    pub fn with_art(mut self, art: impl Into<String>) -> Self {
        self.art = Some(art.into());
        self
    }

    /// Title, used as the display name.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Lore text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the entry has been discovered.
    pub fn is_discovered(&self) -> bool {
        self.discovered
    }

    /// Opaque art reference for presenters.
    pub fn art(&self) -> Option<&str> {
        self.art.as_deref()
    }

    pub(crate) fn mark_discovered(&mut self) -> bool {
        !std::mem::replace(&mut self.discovered, true)
    }
}

impl Catalogued for Creature {
    const KIND: CatalogKind = CatalogKind::Creature;

    fn key(&self) -> &EntityKey {
        &self.key
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Catalogued for Quest {
    const KIND: CatalogKind = CatalogKind::Quest;

    fn key(&self) -> &EntityKey {
        &self.key
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Catalogued for Location {
    const KIND: CatalogKind = CatalogKind::Location;

    fn key(&self) -> &EntityKey {
        &self.key
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Catalogued for LoreEntry {
    const KIND: CatalogKind = CatalogKind::Lore;

    fn key(&self) -> &EntityKey {
        &self.key
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}
