//! Session configuration.

use scribe_core::{EntityKey, PlayerStart};

use crate::player::PlayerState;

/// Overrides applied on top of the world's player defaults.
///
/// Every field left unset falls back to the world definition.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Player name override.
    pub player_name: Option<String>,
    /// Starting gold override.
    pub gold: Option<u64>,
    /// Start location key override.
    pub location: Option<EntityKey>,
    /// Starting inventory override.
    pub inventory: Option<Vec<String>>,
}

impl SessionConfig {
    /// Create a config that keeps every world default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
    }

    /// Set the starting gold.
    pub fn with_gold(mut self, gold: u64) -> Self {
        self.gold = Some(gold);
        self
    }

    /// Set the start location key.
    pub fn with_location(mut self, location: impl Into<EntityKey>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the starting inventory.
    pub fn with_inventory(mut self, items: Vec<String>) -> Self {
        self.inventory = Some(items);
        self
    }

    /// Build the initial player state. The location is not validated here.
    pub(crate) fn player_state(&self, start: &PlayerStart) -> PlayerState {
        PlayerState {
            name: self.player_name.clone().unwrap_or_else(|| start.name.clone()),
            gold: self.gold.unwrap_or(start.gold),
            inventory: self
                .inventory
                .clone()
                .unwrap_or_else(|| start.inventory.clone()),
            location: self
                .location
                .clone()
                .unwrap_or_else(|| start.location.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> PlayerStart {
        PlayerStart::new("Scribe", "scribe_office").with_gold(100)
    }

    #[test]
    fn defaults_come_from_world() {
        let player = SessionConfig::new().player_state(&start());
        assert_eq!(player.name, "Scribe");
        assert_eq!(player.gold, 100);
        assert_eq!(player.location.as_str(), "scribe_office");
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn builder_overrides() {
        let config = SessionConfig::new()
            .with_player_name("Aldric")
            .with_gold(7)
            .with_location("whispering_woods")
            .with_inventory(vec!["quill".to_string()]);
        let player = config.player_state(&start());

        assert_eq!(player.name, "Aldric");
        assert_eq!(player.gold, 7);
        assert_eq!(player.location.as_str(), "whispering_woods");
        assert_eq!(player.inventory, ["quill"]);
    }
}
