use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Catalogued};
use crate::condition::Reference;
use crate::entity::{
    Creature, EntityKey, Location, LoreEntry, Quest, QuestRequirement, QuestStatus,
};
use crate::error::{CatalogKind, CoreError, CoreResult};

const ELDORIA: &str = include_str!("../data/eldoria.json");

/// Metadata about the world itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldMeta {
    /// Display name of the world.
    pub name: String,
    /// One-paragraph summary.
    #[serde(default)]
    pub description: String,
    /// Lines printed when a session starts.
    #[serde(default)]
    pub welcome: Vec<String>,
}

impl WorldMeta {
    /// Metadata with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Where and how the player starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStart {
    /// Player name.
    pub name: String,
    /// Starting gold.
    #[serde(default)]
    pub gold: u64,
    /// Starting items.
    #[serde(default)]
    pub inventory: Vec<String>,
    /// Start location key.
    pub location: EntityKey,
}

impl PlayerStart {
    /// A player with no gold or items.
    pub fn new(name: impl Into<String>, location: impl Into<EntityKey>) -> Self {
        Self {
            name: name.into(),
            gold: 0,
            inventory: Vec::new(),
            location: location.into(),
        }
    }

    /// Set the starting gold.
    pub fn with_gold(mut self, gold: u64) -> Self {
        self.gold = gold;
        self
    }
}

/// Serializable world definition, as stored in JSON.
///
/// Catalog order in the file is the iteration order at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldDef {
    /// World metadata.
    pub meta: WorldMeta,
    /// Player defaults.
    pub player: PlayerStart,
    /// Locations; at least one is required.
    pub locations: Vec<Location>,
    /// Creatures.
    #[serde(default)]
    pub creatures: Vec<Creature>,
    /// Quests.
    #[serde(default)]
    pub quests: Vec<Quest>,
    /// Lore entries.
    #[serde(default)]
    pub lore: Vec<LoreEntry>,
}

/// The validated world. Owns every catalog.
///
/// Static fields are read-only; the only mutations are documenting a
/// creature, moving a quest forward and discovering lore.
#[derive(Debug, Clone)]
pub struct World {
    /// World metadata.
    pub meta: WorldMeta,
    player: PlayerStart,
    locations: Catalog<Location>,
    creatures: Catalog<Creature>,
    quests: Catalog<Quest>,
    lore: Catalog<LoreEntry>,
}

impl World {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Build and validate a world from its definition.
    pub fn from_def(def: WorldDef) -> CoreResult<Self> {
        if def.locations.is_empty() {
            return Err(CoreError::NoLocations);
        }

        let world = Self {
            meta: def.meta,
            player: def.player,
            locations: Catalog::from_entries(def.locations)?,
            creatures: Catalog::from_entries(def.creatures)?,
            quests: Catalog::from_entries(def.quests)?,
            lore: Catalog::from_entries(def.lore)?,
        };
        world.validate()?;

        tracing::debug!(
            world = %world.meta.name,
            locations = world.locations.len(),
            creatures = world.creatures.len(),
            quests = world.quests.len(),
            lore = world.lore.len(),
            "world loaded"
        );
        Ok(world)
    }

    /// Parse and validate a JSON world definition.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let def: WorldDef = serde_json::from_str(json)?;
        Self::from_def(def)
    }

    /// Read a JSON world definition from disk.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The built-in world of Eldoria.
    pub fn eldoria() -> CoreResult<Self> {
        Self::from_json(ELDORIA)
    }

    /// Snapshot the world, including current statuses, as a definition.
    pub fn to_def(&self) -> WorldDef {
        WorldDef {
            meta: self.meta.clone(),
            player: self.player.clone(),
            locations: self.locations.clone().into_entries(),
            creatures: self.creatures.clone().into_entries(),
            quests: self.quests.clone().into_entries(),
            lore: self.lore.clone().into_entries(),
        }
    }

    /// Pretty-printed JSON of [`World::to_def`].
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_def())?)
    }

    fn validate(&self) -> CoreResult<()> {
        let start = self.player.location.as_str();
        if !self.locations.contains(start) {
            return Err(CoreError::unknown(
                CatalogKind::Location,
                start,
                "the player start",
            ));
        }

        for location in &self.locations {
            let context = format!("location \"{}\"", location.key());
            for exit in location.exits() {
                if exit.phrase.trim().is_empty() {
                    return Err(CoreError::BlankExitPhrase(location.key().clone()));
                }
                require(&self.locations, &exit.to, &context)?;
            }
            for creature in location.creatures() {
                require(&self.creatures, creature, &context)?;
            }
            for quest in location.quests() {
                require(&self.quests, quest, &context)?;
            }
            let references = location
                .hints()
                .iter()
                .flat_map(|h| &h.when)
                .flat_map(|c| c.references());
            for reference in references {
                match reference {
                    Reference::Quest(key) => require(&self.quests, key, &context)?,
                    Reference::Creature(key) => require(&self.creatures, key, &context)?,
                }
            }
        }

        for quest in &self.quests {
            let context = format!("quest \"{}\"", quest.key());
            if let Some(location) = quest.location() {
                require(&self.locations, location, &context)?;
            }
            match quest.requirement() {
                QuestRequirement::None => {}
                QuestRequirement::DocumentLocationCreatures => {
                    if quest.location().is_none() {
                        return Err(CoreError::RequirementWithoutLocation(quest.key().clone()));
                    }
                }
                QuestRequirement::CreaturesDocumented { creatures } => {
                    for creature in creatures {
                        require(&self.creatures, creature, &context)?;
                    }
                }
            }
            for lore in quest.reveals_lore() {
                require(&self.lore, lore, &context)?;
            }
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    /// The player's starting state.
    pub fn player_start(&self) -> &PlayerStart {
        &self.player
    }

    /// Location catalog.
    pub fn locations(&self) -> &Catalog<Location> {
        &self.locations
    }

    /// Creature catalog.
    pub fn creatures(&self) -> &Catalog<Creature> {
        &self.creatures
    }

    /// Quest catalog.
    pub fn quests(&self) -> &Catalog<Quest> {
        &self.quests
    }

    /// Lore catalog.
    pub fn lore(&self) -> &Catalog<LoreEntry> {
        &self.lore
    }

    /// Creatures associated with a location, in the location's order.
    pub fn creatures_at(&self, location: &str) -> Vec<&Creature> {
        self.locations
            .lookup(location)
            .map(|loc| {
                loc.creatures()
                    .iter()
                    .filter_map(|key| self.creatures.lookup(key.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Quests associated with a location, in the location's order.
    pub fn quests_at(&self, location: &str) -> Vec<&Quest> {
        self.locations
            .lookup(location)
            .map(|loc| {
                loc.quests()
                    .iter()
                    .filter_map(|key| self.quests.lookup(key.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Creatures that still need documenting before `quest` can complete.
    pub fn missing_requirements(&self, quest: &Quest) -> Vec<&Creature> {
        let required: Vec<&Creature> = match quest.requirement() {
            QuestRequirement::None => Vec::new(),
            QuestRequirement::DocumentLocationCreatures => quest
                .location()
                .map(|loc| self.creatures_at(loc.as_str()))
                .unwrap_or_default(),
            QuestRequirement::CreaturesDocumented { creatures } => creatures
                .iter()
                .filter_map(|key| self.creatures.lookup(key.as_str()))
                .collect(),
        };
        required.into_iter().filter(|c| !c.is_documented()).collect()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Mark a creature documented. Returns `false` if it already was.
    pub fn document_creature(&mut self, key: &str) -> CoreResult<bool> {
        let creature = self
            .creatures
            .lookup_mut(key)
            .ok_or_else(|| CoreError::unknown(CatalogKind::Creature, key, "document_creature"))?;
        let fresh = creature.mark_documented();
        tracing::debug!(creature = key, fresh, "creature documented");
        Ok(fresh)
    }

    /// Move a quest forward. Any other change is a [`CoreError::Transition`].
    pub fn set_quest_status(&mut self, key: &str, status: QuestStatus) -> CoreResult<()> {
        let quest = self
            .quests
            .lookup_mut(key)
            .ok_or_else(|| CoreError::unknown(CatalogKind::Quest, key, "set_quest_status"))?;
        let from = quest.status();
        quest.advance_to(status)?;
        tracing::debug!(quest = key, %from, to = %status, "quest status changed");
        Ok(())
    }

    /// Mark a lore entry discovered. Returns `false` if it already was.
    pub fn discover_lore(&mut self, key: &str) -> CoreResult<bool> {
        let entry = self
            .lore
            .lookup_mut(key)
            .ok_or_else(|| CoreError::unknown(CatalogKind::Lore, key, "discover_lore"))?;
        let fresh = entry.mark_discovered();
        tracing::debug!(lore = key, fresh, "lore discovered");
        Ok(fresh)
    }
}

fn require<T: Catalogued>(catalog: &Catalog<T>, key: &EntityKey, context: &str) -> CoreResult<()> {
    if catalog.contains(key.as_str()) {
        Ok(())
    } else {
        Err(CoreError::unknown(T::KIND, key.as_str(), context))
    }
}
