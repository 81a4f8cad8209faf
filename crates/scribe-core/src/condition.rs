//! Declarative conditions for location hints.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityKey, QuestStatus};
use crate::world::World;

/// A condition evaluated against the current world state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    /// A quest is in the given status.
    QuestStatus {
        /// Quest key.
        quest: EntityKey,
        /// Expected status.
        status: QuestStatus,
    },
    /// A creature's documented flag has the given value.
    CreatureDocumented {
        /// Creature key.
        creature: EntityKey,
        /// Expected flag value.
        documented: bool,
    },
    /// Every listed creature is documented.
    AllCreaturesDocumented {
        /// Creature keys.
        creatures: Vec<EntityKey>,
    },
    /// Logical NOT.
    Not {
        /// Negated condition.
        condition: Box<Condition>,
    },
    /// Logical AND.
    And {
        /// Conditions that must all hold.
        conditions: Vec<Condition>,
    },
    /// Logical OR.
    Or {
        /// Conditions of which one must hold.
        conditions: Vec<Condition>,
    },
    /// Always true.
    #[default]
    Always,
}

impl Condition {
    /// Evaluate the condition. Unknown keys evaluate to false.
    pub fn evaluate(&self, world: &World) -> bool {
        match self {
            Condition::QuestStatus { quest, status } => world
                .quests()
                .lookup(quest.as_str())
                .is_some_and(|q| q.status() == *status),
            Condition::CreatureDocumented {
                creature,
                documented,
            } => world
                .creatures()
                .lookup(creature.as_str())
                .is_some_and(|c| c.is_documented() == *documented),
            Condition::AllCreaturesDocumented { creatures } => creatures.iter().all(|key| {
                world
                    .creatures()
                    .lookup(key.as_str())
                    .is_some_and(|c| c.is_documented())
            }),
            Condition::Not { condition } => !condition.evaluate(world),
            Condition::And { conditions } => conditions.iter().all(|c| c.evaluate(world)),
            Condition::Or { conditions } => conditions.iter().any(|c| c.evaluate(world)),
            Condition::Always => true,
        }
    }

    /// Every entity key this condition mentions, tagged as quest or creature.
    pub(crate) fn references(&self) -> Vec<Reference<'_>> {
        match self {
            Condition::QuestStatus { quest, .. } => vec![Reference::Quest(quest)],
            Condition::CreatureDocumented { creature, .. } => vec![Reference::Creature(creature)],
            Condition::AllCreaturesDocumented { creatures } => {
                creatures.iter().map(Reference::Creature).collect()
            }
            Condition::Not { condition } => condition.references(),
            Condition::And { conditions } | Condition::Or { conditions } => {
                conditions.iter().flat_map(Condition::references).collect()
            }
            Condition::Always => Vec::new(),
        }
    }
}

pub(crate) enum Reference<'a> {
    Quest(&'a EntityKey),
    Creature(&'a EntityKey),
}

/// A message shown on `look` when all of its conditions hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintRule {
    /// Conditions that must all hold. An empty list always holds.
    #[serde(default)]
    pub when: Vec<Condition>,
    /// The hint text.
    pub message: String,
}

impl HintRule {
    /// Create a hint shown when every condition holds.
    pub fn new(when: Vec<Condition>, message: impl Into<String>) -> Self {
        Self {
            when,
            message: message.into(),
        }
    }

    /// Whether the hint should be shown.
    pub fn applies(&self, world: &World) -> bool {
        self.when.iter().all(|c| c.evaluate(world))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Creature, Location, Quest, Reward};
    use crate::world::{PlayerStart, WorldDef, WorldMeta};

    fn test_world() -> World {
        World::from_def(WorldDef {
            meta: WorldMeta::new("Test"),
            player: PlayerStart::new("Scribe", "tavern"),
            locations: vec![Location::new("tavern", "The Tavern")],
            creatures: vec![
                Creature::new("goblin", "Goblin"),
                Creature::new("dire_wolf", "Dire Wolf"),
            ],
            quests: vec![Quest::new("q", "Quest", Reward::parse("5 gold").unwrap())],
            lore: Vec::new(),
        })
        .unwrap()
    }

    fn quest_is(status: QuestStatus) -> Condition {
        Condition::QuestStatus {
            quest: "q".into(),
            status,
        }
    }

    #[test]
    fn quest_status() {
        let mut world = test_world();
        assert!(quest_is(QuestStatus::Available).evaluate(&world));
        world.set_quest_status("q", QuestStatus::Active).unwrap();
        assert!(quest_is(QuestStatus::Active).evaluate(&world));
        assert!(!quest_is(QuestStatus::Available).evaluate(&world));
    }

    #[test]
    fn creature_documented() {
        let mut world = test_world();
        let undocumented = Condition::CreatureDocumented {
            creature: "goblin".into(),
            documented: false,
        };
        assert!(undocumented.evaluate(&world));
        world.document_creature("goblin").unwrap();
        assert!(!undocumented.evaluate(&world));
    }

    #[test]
    fn all_creatures_documented() {
        let mut world = test_world();
        let all = Condition::AllCreaturesDocumented {
            creatures: vec!["goblin".into(), "dire_wolf".into()],
        };
        world.document_creature("goblin").unwrap();
        assert!(!all.evaluate(&world));
        world.document_creature("dire_wolf").unwrap();
        assert!(all.evaluate(&world));
    }

    #[test]
    fn unknown_keys_are_false() {
        let world = test_world();
        let cond = Condition::QuestStatus {
            quest: "missing".into(),
            status: QuestStatus::Available,
        };
        assert!(!cond.evaluate(&world));
    }

    #[test]
    fn logical_combinators() {
        let world = test_world();
        let yes = quest_is(QuestStatus::Available);
        let no = quest_is(QuestStatus::Completed);

        assert!(
            Condition::Not {
                condition: Box::new(no.clone())
            }
            .evaluate(&world)
        );
        assert!(
            !Condition::And {
                conditions: vec![yes.clone(), no.clone()]
            }
            .evaluate(&world)
        );
        assert!(
            Condition::Or {
                conditions: vec![no, yes]
            }
            .evaluate(&world)
        );
        assert!(Condition::Always.evaluate(&world));
    }

    #[test]
    fn hint_requires_every_condition() {
        let world = test_world();
        let hint = HintRule::new(
            vec![
                quest_is(QuestStatus::Available),
                Condition::CreatureDocumented {
                    creature: "goblin".into(),
                    documented: true,
                },
            ],
            "never",
        );
        assert!(!hint.applies(&world));
        assert!(HintRule::new(Vec::new(), "always").applies(&world));
    }

    #[test]
    fn deserializes_tagged_json() {
        let hint: HintRule = serde_json::from_str(
            r#"{
                "when": [{"type": "quest_status", "quest": "q", "status": "active"}],
                "message": "On the quest."
            }"#,
        )
        .unwrap();
        assert_eq!(hint.when, vec![quest_is(QuestStatus::Active)]);
    }
}
