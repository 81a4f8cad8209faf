//! Player state management.

use scribe_core::EntityKey;

/// The player's current state in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// The player's name.
    pub name: String,
    /// Gold carried. Only quest rewards increase it.
    pub gold: u64,
    /// Item identifiers, in the order given at session start.
    pub inventory: Vec<String>,
    /// Key of the current location.
    pub location: EntityKey,
}

impl PlayerState {
    /// Add gold, saturating at `u64::MAX`. Returns the new total.
    pub fn add_gold(&mut self, amount: u64) -> u64 {
        self.gold = self.gold.saturating_add(amount);
        self.gold
    }
}

#[cfg(test)]
mod tests {
    use scribe_core::PlayerStart;

    use crate::config::SessionConfig;

    #[test]
    fn gold_accumulates_and_saturates() {
        let start = PlayerStart::new("Scribe", "scribe_office");
        let mut state = SessionConfig::new().player_state(&start);
        assert_eq!(state.gold, 0);
        assert_eq!(state.add_gold(50), 50);
        assert_eq!(state.add_gold(25), 75);

        state.gold = u64::MAX - 1;
        assert_eq!(state.add_gold(10), u64::MAX);
    }
}
