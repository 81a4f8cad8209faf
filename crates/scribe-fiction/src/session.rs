//! Interactive session: the world-state machine driven by player commands.

use scribe_core::{
    Catalog, Catalogued, Creature, EntityKey, Location, Quest, QuestStatus, World,
};

use crate::advice::advise;
use crate::config::SessionConfig;
use crate::error::{FictionError, FictionResult};
use crate::outcome::{CreatureView, LoreView, Outcome, QuestView, SceneView};
use crate::parser::{Command, parse_command, resolve, suggest};
use crate::player::PlayerState;

/// How many names a not-found report suggests.
const SUGGESTION_LIMIT: usize = 3;

/// A single-player session over one world.
///
/// Every command is applied in full before the next is accepted, and a
/// command that fails leaves the state exactly as it was.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// The world being explored.
    world: World,
    /// The player's current state.
    player: PlayerState,
    /// The location `player.location` points at.
    here: Location,
}

impl GameSession {
    /// Start a session on `world`, applying `config` over the world's
    /// player defaults.
    pub fn new(world: World, config: SessionConfig) -> FictionResult<Self> {
        let player = config.player_state(world.player_start());
        let here = world
            .locations()
            .lookup(player.location.as_str())
            .cloned()
            .ok_or_else(|| FictionError::LocationNotFound(player.location.to_string()))?;

        tracing::info!(
            world = %world.meta.name,
            player = %player.name,
            location = %player.location,
            gold = player.gold,
            "session started"
        );
        Ok(Self {
            world,
            player,
            here,
        })
    }

    /// Start a session in the built-in world of Eldoria.
    pub fn eldoria(config: SessionConfig) -> FictionResult<Self> {
        Self::new(World::eldoria()?, config)
    }

    /// Get the current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Lines to greet the player with.
    pub fn welcome(&self) -> &[String] {
        &self.world.meta.welcome
    }

    /// The location the player stands in.
    pub fn current_location(&self) -> &Location {
        &self.here
    }

    /// Creatures associated with the current location.
    pub fn creatures_here(&self) -> Vec<&Creature> {
        self.world.creatures_at(self.here.key().as_str())
    }

    /// Quests associated with the current location.
    pub fn quests_here(&self) -> Vec<&Quest> {
        self.world.quests_at(self.here.key().as_str())
    }

    /// Parse and execute one line of player input.
    pub fn process(&mut self, input: &str) -> Outcome {
        let command = parse_command(input);
        tracing::debug!(input, command = command.name(), "processing command");
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Quit => Outcome::Quit,
            Command::Look => self.do_look(),
            Command::ListQuests => self.do_quests(),
            Command::TakeQuest(phrase) => self.do_take_quest(phrase),
            Command::CompleteQuest(phrase) => self.do_complete_quest(phrase),
            Command::DocumentCreature(phrase) => self.do_document(phrase),
            Command::ListCreatures => self.do_creatures(),
            Command::ListLore => self.do_lore(),
            Command::ShowInventory => self.do_inventory(),
            Command::Go(phrase) => self.do_go(phrase),
            Command::Help => Outcome::Help,
            Command::Unknown(input) => self.do_unknown(input),
        }
    }

    fn scene(&self) -> SceneView {
        SceneView {
            name: self.here.name().to_string(),
            art: self.here.art().map(str::to_string),
            description: self.here.description().to_string(),
            exits: self.here.exits_text().to_string(),
            hints: self
                .here
                .hints()
                .iter()
                .filter(|hint| hint.applies(&self.world))
                .map(|hint| hint.message.clone())
                .collect(),
        }
    }

    fn do_look(&self) -> Outcome {
        Outcome::Scene(self.scene())
    }

    fn do_go(&mut self, phrase: String) -> Outcome {
        let Some(to) = self.here.find_exit(&phrase).map(|exit| exit.to.clone()) else {
            return Outcome::CannotGo { phrase };
        };
        let Some(destination) = self.world.locations().lookup(to.as_str()) else {
            tracing::warn!(to = %to, "exit leads to a missing location");
            return Outcome::CannotGo { phrase };
        };

        tracing::debug!(from = %self.player.location, to = %to, "player moved");
        self.here = destination.clone();
        self.player.location = to;
        Outcome::Moved(self.scene())
    }

    fn do_take_quest(&mut self, phrase: String) -> Outcome {
        let Some(found) = resolve(&phrase, self.world.quests()) else {
            return not_found(phrase, self.world.quests());
        };
        let key = found.key.clone();
        let quest = found.entity.name().to_string();
        let status = found.entity.status();
        if status != QuestStatus::Available {
            return refused(quest, status);
        }

        match self.world.set_quest_status(key.as_str(), QuestStatus::Active) {
            Ok(()) => Outcome::QuestTaken { quest },
            Err(err) => {
                tracing::warn!(%err, "quest transition refused");
                refused(quest, self.quest_status(&key, status))
            }
        }
    }

    fn do_complete_quest(&mut self, phrase: String) -> Outcome {
        let Some(found) = resolve(&phrase, self.world.quests()) else {
            return not_found(phrase, self.world.quests());
        };
        let key = found.key.clone();
        let quest = found.entity.name().to_string();

        let status = found.entity.status();
        if status != QuestStatus::Active {
            return refused(quest, status);
        }

        let missing: Vec<String> = self
            .world
            .missing_requirements(found.entity)
            .iter()
            .map(|creature| creature.name().to_string())
            .collect();
        if !missing.is_empty() {
            return Outcome::QuestRequirementsUnmet { quest, missing };
        }

        let reward = found.entity.reward().clone();
        let reveals = found.entity.reveals_lore().to_vec();

        if let Err(err) = self.world.set_quest_status(key.as_str(), QuestStatus::Completed) {
            tracing::warn!(%err, "quest transition refused");
            return refused(quest, self.quest_status(&key, status));
        }
        let gold = self.player.add_gold(reward.amount());

        let mut discovered = Vec::new();
        for lore in &reveals {
            match self.world.discover_lore(lore.as_str()) {
                Ok(true) => {
                    if let Some(entry) = self.world.lore().lookup(lore.as_str()) {
                        discovered.push(entry.title().to_string());
                    }
                }
                Ok(false) => {}
                Err(err) => tracing::warn!(%err, "cannot discover lore"),
            }
        }

        tracing::info!(quest = %key, reward = %reward, gold, "quest completed");
        Outcome::QuestCompleted {
            quest,
            reward: reward.descriptor().to_string(),
            amount: reward.amount(),
            gold,
            discovered,
        }
    }

    fn quest_status(&self, key: &EntityKey, fallback: QuestStatus) -> QuestStatus {
        self.world
            .quests()
            .lookup(key.as_str())
            .map_or(fallback, Quest::status)
    }

    fn do_document(&mut self, phrase: String) -> Outcome {
        let Some(found) = resolve(&phrase, self.world.creatures()) else {
            return not_found(phrase, self.world.creatures());
        };
        let key = found.key.clone();
        let creature = found.entity.name().to_string();
        let art = found.entity.art().map(str::to_string);

        match self.world.document_creature(key.as_str()) {
            Ok(true) => Outcome::CreatureDocumented { creature, art },
            Ok(false) => Outcome::CreatureAlreadyDocumented { creature },
            Err(err) => {
                tracing::warn!(%err, "cannot document creature");
                not_found(phrase, self.world.creatures())
            }
        }
    }

    fn do_quests(&self) -> Outcome {
        Outcome::Quests(
            self.world
                .quests()
                .all()
                .map(|quest| QuestView {
                    name: quest.name().to_string(),
                    status: quest.status(),
                })
                .collect(),
        )
    }

    fn do_creatures(&self) -> Outcome {
        Outcome::Creatures(
            self.world
                .creatures()
                .all()
                .map(|creature| CreatureView {
                    name: creature.name().to_string(),
                    danger: creature.danger(),
                    documented: creature.is_documented(),
                    description: creature.description().to_string(),
                    art: creature.art().map(str::to_string),
                })
                .collect(),
        )
    }

    fn do_lore(&self) -> Outcome {
        Outcome::Lore(
            self.world
                .lore()
                .all()
                .map(|entry| LoreView {
                    title: entry.title().to_string(),
                    discovered: entry.is_discovered(),
                    text: entry.text().to_string(),
                    art: entry.art().map(str::to_string),
                })
                .collect(),
        )
    }

    fn do_inventory(&self) -> Outcome {
        Outcome::Inventory {
            items: self.player.inventory.clone(),
            gold: self.player.gold,
        }
    }

    fn do_unknown(&self, input: String) -> Outcome {
        let advice = advise(&input, &self.world, &self.here);
        Outcome::Unknown { input, advice }
    }
}

/// The outcome for a quest command refused because of the quest's status.
fn refused(quest: String, status: QuestStatus) -> Outcome {
    match status {
        QuestStatus::Available => Outcome::QuestNotActive { quest },
        QuestStatus::Active => Outcome::QuestAlreadyActive { quest },
        QuestStatus::Completed => Outcome::QuestAlreadyCompleted { quest },
    }
}

fn not_found<T: Catalogued>(phrase: String, catalog: &Catalog<T>) -> Outcome {
    Outcome::NotFound {
        kind: T::KIND,
        suggestions: suggest(&phrase, catalog, SUGGESTION_LIMIT),
        phrase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::OutcomeKind;
    use scribe_core::{
        CatalogKind, Creature, PlayerStart, QuestRequirement, Reward, WorldDef, WorldMeta,
    };

    fn session() -> GameSession {
        GameSession::eldoria(SessionConfig::new()).unwrap()
    }

    fn quest_status(session: &GameSession) -> QuestStatus {
        session.world().quests().lookup("first_quest").unwrap().status()
    }

    fn documented(session: &GameSession, key: &str) -> bool {
        session.world().creatures().lookup(key).unwrap().is_documented()
    }

    #[test]
    fn starts_from_world_defaults() {
        let session = session();
        assert_eq!(session.player().name, "Scribe");
        assert_eq!(session.player().gold, 100);
        assert_eq!(session.current_location().key().as_str(), "scribe_office");
        assert!(session.creatures_here().is_empty());
        assert!(!session.welcome().is_empty());
    }

    #[test]
    fn config_overrides_start() {
        let config = SessionConfig::new()
            .with_player_name("Aldric")
            .with_gold(5)
            .with_location("whispering_woods");
        let session = GameSession::eldoria(config).unwrap();
        assert_eq!(session.player().name, "Aldric");
        assert_eq!(session.player().gold, 5);
        assert_eq!(session.creatures_here().len(), 2);
        assert_eq!(session.quests_here()[0].name(), "The Whispering Woods");
    }

    #[test]
    fn unknown_start_location_is_rejected() {
        let result = GameSession::eldoria(SessionConfig::new().with_location("moon"));
        assert!(matches!(result, Err(FictionError::LocationNotFound(key)) if key == "moon"));
    }

    #[test]
    fn invalid_world_is_a_config_error() {
        let def = WorldDef {
            meta: WorldMeta::new("Broken"),
            player: PlayerStart::new("Scribe", "nowhere"),
            locations: vec![Location::new("here", "Here")],
            creatures: Vec::new(),
            quests: vec![Quest::new("q", "Q", Reward::parse("1 gold").unwrap())],
            lore: Vec::new(),
        };
        let err = World::from_def(def).map_err(FictionError::from).unwrap_err();
        assert!(err.to_string().starts_with("configuration error"));
    }

    #[test]
    fn go_moves_between_locations() {
        let mut session = session();
        let outcome = session.process("go woods");
        assert!(matches!(&outcome, Outcome::Moved(scene) if scene.name == "Whispering Woods"));
        assert_eq!(session.player().location.as_str(), "whispering_woods");
        assert_eq!(session.current_location().key().as_str(), "whispering_woods");

        session.process("go back");
        assert_eq!(session.player().location.as_str(), "scribe_office");
    }

    #[test]
    fn go_nowhere_leaves_state_unchanged() {
        let mut session = session();
        let outcome = session.process("go nowhere");
        assert_eq!(outcome.kind(), OutcomeKind::NotFound);
        assert_eq!(session.player().location.as_str(), "scribe_office");

        assert_eq!(
            session.process("go"),
            Outcome::CannotGo {
                phrase: String::new()
            }
        );
    }

    #[test]
    fn quest_lifecycle() {
        let mut session = session();
        assert_eq!(
            session.process("complete quest woods"),
            Outcome::QuestNotActive {
                quest: "The Whispering Woods".into()
            }
        );
        assert_eq!(quest_status(&session), QuestStatus::Available);

        let taken = session.process("take quest woods");
        assert_eq!(taken.kind(), OutcomeKind::Success);
        assert_eq!(quest_status(&session), QuestStatus::Active);

        let again = session.process("take quest woods");
        assert_eq!(
            again,
            Outcome::QuestAlreadyActive {
                quest: "The Whispering Woods".into()
            }
        );
        assert_eq!(again.kind(), OutcomeKind::InvalidTransition);
        assert_eq!(quest_status(&session), QuestStatus::Active);
    }

    #[test]
    fn completing_requires_every_creature() {
        let mut session = session();
        session.process("take quest woods");
        session.process("doc goblin");

        let outcome = session.process("complete quest woods");
        assert_eq!(outcome.kind(), OutcomeKind::PreconditionFailed);
        assert_eq!(
            outcome,
            Outcome::QuestRequirementsUnmet {
                quest: "The Whispering Woods".into(),
                missing: vec!["Dire Wolf".into()],
            }
        );
        assert_eq!(quest_status(&session), QuestStatus::Active);
        assert_eq!(session.player().gold, 100);
    }

    #[test]
    fn completing_pays_reward_and_reveals_lore() {
        let mut session = session();
        session.process("take quest woods");
        session.process("document creature goblin");
        session.process("document creature dire wolf");

        let outcome = session.process("complete quest woods");
        assert_eq!(outcome.kind(), OutcomeKind::Success);
        assert!(matches!(
            &outcome,
            Outcome::QuestCompleted { amount: 50, gold: 150, discovered, .. }
                if discovered == &["The Ancient Ruins of Xylos".to_string()]
        ));
        assert_eq!(quest_status(&session), QuestStatus::Completed);
        assert_eq!(session.player().gold, 150);
        assert!(
            session
                .world()
                .lore()
                .lookup("ancient_ruins")
                .unwrap()
                .is_discovered()
        );

        let again = session.process("complete quest woods");
        assert_eq!(again.kind(), OutcomeKind::InvalidTransition);
        assert_eq!(session.player().gold, 150);
        assert_eq!(
            session.process("take quest woods"),
            Outcome::QuestAlreadyCompleted {
                quest: "The Whispering Woods".into()
            }
        );
    }

    #[test]
    fn refused_quest_commands_report_the_current_status() {
        let quest = || "Q".to_string();
        assert_eq!(
            refused(quest(), QuestStatus::Available),
            Outcome::QuestNotActive { quest: quest() }
        );
        assert_eq!(
            refused(quest(), QuestStatus::Active),
            Outcome::QuestAlreadyActive { quest: quest() }
        );
        assert_eq!(
            refused(quest(), QuestStatus::Completed),
            Outcome::QuestAlreadyCompleted { quest: quest() }
        );
    }

    #[test]
    fn explicit_creature_requirement_gates_completion() {
        let def = WorldDef {
            meta: WorldMeta::new("Caves"),
            player: PlayerStart::new("Scribe", "camp").with_gold(1),
            locations: vec![
                Location::new("camp", "Camp")
                    .with_exit("cave", "cave")
                    .with_quest("bats"),
                Location::new("cave", "Cave")
                    .with_exit("camp", "camp")
                    .with_creature("bat"),
            ],
            creatures: vec![Creature::new("bat", "Bat")],
            quests: vec![
                Quest::new("bats", "Count the Bats", Reward::parse("7 gold").unwrap())
                    .with_location("camp")
                    .with_requirement(QuestRequirement::CreaturesDocumented {
                        creatures: vec!["bat".into()],
                    }),
            ],
            lore: Vec::new(),
        };
        let world = World::from_def(def).unwrap();
        let mut session = GameSession::new(world, SessionConfig::new()).unwrap();

        session.process("take quest bats");
        assert_eq!(
            session.process("complete quest bats"),
            Outcome::QuestRequirementsUnmet {
                quest: "Count the Bats".into(),
                missing: vec!["Bat".into()],
            }
        );

        session.process("go cave");
        session.process("doc bat");
        session.process("go camp");
        let outcome = session.process("complete quest bats");
        assert!(matches!(
            outcome,
            Outcome::QuestCompleted { amount: 7, gold: 8, .. }
        ));
        assert_eq!(session.player().gold, 8);
    }

    #[test]
    fn documenting_twice_is_already_done() {
        let mut session = session();
        let first = session.process("document creature goblin");
        assert_eq!(first.kind(), OutcomeKind::Success);
        assert!(first.art().is_some());
        assert!(documented(&session, "goblin"));

        let second = session.process("doc goblin");
        assert_eq!(second.kind(), OutcomeKind::AlreadyDone);
        assert!(documented(&session, "goblin"));
    }

    #[test]
    fn unresolved_phrases_are_not_found() {
        let mut session = session();
        let outcome = session.process("document creature dragon");
        assert!(matches!(
            &outcome,
            Outcome::NotFound { kind: CatalogKind::Creature, phrase, .. } if phrase == "dragon"
        ));
        assert_eq!(
            session.process("take quest treasure").kind(),
            OutcomeKind::NotFound
        );
        assert_eq!(
            session.process("doc"),
            Outcome::NotFound {
                kind: CatalogKind::Creature,
                phrase: String::new(),
                suggestions: Vec::new(),
            }
        );
    }

    #[test]
    fn not_found_suggests_close_names() {
        let mut session = session();
        let outcome = session.process("document creature gobbo");
        assert!(matches!(
            &outcome,
            Outcome::NotFound { suggestions, .. }
                if suggestions.first().map(String::as_str) == Some("Goblin")
        ));
    }

    #[test]
    fn look_shows_hints_for_current_state() {
        let mut session = session();
        let Outcome::Scene(office) = session.process("look") else {
            panic!("expected a scene");
        };
        assert_eq!(office.name, "Scribe's Office");
        assert_eq!(office.hints.len(), 1);
        assert!(office.hints[0].contains("take quest woods"));

        session.process("take quest woods");
        let Outcome::Moved(woods) = session.process("go woods") else {
            panic!("expected to move");
        };
        assert_eq!(woods.hints.len(), 3);

        session.process("doc goblin");
        session.process("doc wolf");
        let Outcome::Scene(woods) = session.process("look") else {
            panic!("expected a scene");
        };
        assert_eq!(woods.hints.len(), 2);
        assert!(woods.hints[1].contains("complete quest woods"));
    }

    #[test]
    fn listings_are_read_only() {
        let mut session = session();
        session.process("doc wolf");

        let Outcome::Creatures(creatures) = session.process("creat") else {
            panic!("expected creatures");
        };
        let documented: Vec<_> = creatures
            .iter()
            .map(|c| (c.name.as_str(), c.documented))
            .collect();
        assert_eq!(documented, [("Goblin", false), ("Dire Wolf", true)]);

        assert!(matches!(session.process("quests"), Outcome::Quests(q) if q.len() == 1));
        assert!(matches!(
            session.process("lore"),
            Outcome::Lore(l) if l.iter().all(|e| !e.discovered)
        ));
        assert_eq!(
            session.process("inv"),
            Outcome::Inventory {
                items: Vec::new(),
                gold: 100
            }
        );
        assert_eq!(session.process("help"), Outcome::Help);
        assert_eq!(session.player().gold, 100);
    }

    #[test]
    fn unknown_commands_get_advice() {
        let mut session = session();
        let outcome = session.process("take the woods");
        assert_eq!(outcome.kind(), OutcomeKind::UnknownCommand);
        assert_eq!(
            outcome,
            Outcome::Unknown {
                input: "take the woods".into(),
                advice: Some("Did you mean 'take quest woods'?".into()),
            }
        );
    }

    #[test]
    fn quit_ends_without_mutation() {
        let mut session = session();
        let before = session.player().clone();
        let outcome = session.process("exit");
        assert!(outcome.ends_session());
        assert_eq!(session.player(), &before);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        const VOCABULARY: &[&str] = &[
            "look",
            "go woods",
            "go back",
            "go nowhere",
            "take quest woods",
            "complete quest woods",
            "doc goblin",
            "doc wolf",
            "document creature dragon",
            "quests",
            "inv",
            "dance",
        ];

        fn rank(status: QuestStatus) -> u8 {
            match status {
                QuestStatus::Available => 0,
                QuestStatus::Active => 1,
                QuestStatus::Completed => 2,
            }
        }

        proptest! {
            #[test]
            fn state_only_moves_forward(
                commands in prop::collection::vec(0..VOCABULARY.len(), 0..24)
            ) {
                let mut session = session();
                for index in commands {
                    let status = quest_status(&session);
                    let gold = session.player().gold;
                    let goblin = documented(&session, "goblin");

                    let outcome = session.process(VOCABULARY[index]);

                    prop_assert!(rank(quest_status(&session)) >= rank(status));
                    prop_assert!(session.player().gold >= gold);
                    prop_assert!(documented(&session, "goblin") >= goblin);
                    prop_assert!(
                        session.world().locations().contains(session.player().location.as_str())
                    );
                    if outcome.kind() != OutcomeKind::Success {
                        prop_assert_eq!(quest_status(&session), status);
                        prop_assert_eq!(session.player().gold, gold);
                    }
                }
            }
        }
    }
}
