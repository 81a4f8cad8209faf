//! Message templates for every outcome.

use scribe_core::CatalogKind;

use super::line::{Line, LineKind};
use crate::outcome::{CreatureView, LoreView, Outcome, QuestView, SceneView};
use crate::parser::ALIASES;

/// Every command with a one-line description, in help order.
pub const HELP_COMMANDS: &[(&str, &str)] = &[
    ("look", "Describes your current location."),
    ("quests", "Lists all quests and their status."),
    ("take quest [quest name]", "Attempts to take an available quest."),
    ("complete quest [quest name]", "Attempts to complete an active quest."),
    (
        "document creature [creature name]",
        "Attempts to document a creature in your current location.",
    ),
    ("creatures", "Shows documented and undocumented creatures."),
    ("lore", "Shows discovered and undiscovered lore entries."),
    ("inventory", "Displays your gold and items."),
    ("go [destination]", "Moves you to a new location."),
    ("help", "Shows this list."),
    ("quit/exit", "Exits the game."),
];

impl Outcome {
    /// The narration for this outcome.
    pub fn narrate(&self) -> Vec<Line> {
        narrate(self)
    }
}

/// Render an outcome as lines of text.
pub fn narrate(outcome: &Outcome) -> Vec<Line> {
    match outcome {
        Outcome::Quit => vec![Line::text("Farewell, Scribe.")],
        Outcome::Scene(scene) | Outcome::Moved(scene) => scene_lines(scene),
        Outcome::CannotGo { phrase } if phrase.is_empty() => vec![Line::error("Go where?")],
        Outcome::CannotGo { .. } => vec![Line::error("You cannot go that way from here.")],
        Outcome::QuestTaken { quest } => {
            vec![Line::text(format!("You have taken the quest: {quest}."))]
        }
        Outcome::QuestAlreadyActive { quest } => {
            vec![Line::error(format!("You are already on the quest: {quest}."))]
        }
        Outcome::QuestAlreadyCompleted { quest } => {
            vec![Line::error(format!("The quest {quest} is already completed."))]
        }
        Outcome::QuestNotActive { quest } => {
            vec![Line::error(format!("The quest {quest} is not active."))]
        }
        Outcome::QuestRequirementsUnmet { quest, missing } => {
            let mut lines = vec![Line::error(format!(
                "You must document all creatures for '{quest}' before completing it."
            ))];
            if !missing.is_empty() {
                lines.push(Line::advice(format!(
                    "Still undocumented: {}.",
                    missing.join(", ")
                )));
            }
            lines
        }
        Outcome::QuestCompleted {
            quest,
            reward,
            discovered,
            ..
        } => {
            let mut lines = vec![Line::text(format!(
                "You have completed the quest: {quest}. You received {reward}."
            ))];
            lines.extend(
                discovered
                    .iter()
                    .map(|title| Line::text(format!("New lore discovered: {title}."))),
            );
            lines
        }
        Outcome::CreatureDocumented { creature, art } => {
            let mut lines = vec![Line::text(format!("You have documented the {creature}."))];
            lines.extend(art.as_deref().map(|a| Line::new(LineKind::Art, a)));
            lines
        }
        Outcome::CreatureAlreadyDocumented { creature } => {
            vec![Line::text(format!("The {creature} is already documented."))]
        }
        Outcome::NotFound {
            kind,
            phrase,
            suggestions,
        } => not_found_lines(*kind, phrase, suggestions),
        Outcome::Quests(quests) => quest_lines(quests),
        Outcome::Creatures(creatures) => creature_lines(creatures),
        Outcome::Lore(entries) => lore_lines(entries),
        Outcome::Inventory { items, gold } => {
            let mut lines = vec![Line::heading("--- Inventory ---")];
            if items.is_empty() {
                lines.push(Line::text("Your inventory is empty."));
            } else {
                lines.extend(items.iter().map(|item| Line::text(format!("- {item}"))));
            }
            lines.push(Line::text(format!("Gold: {gold}")));
            lines
        }
        Outcome::Help => help_lines(),
        Outcome::Unknown { advice, .. } => {
            let mut lines = vec![Line::error(
                "Unknown command. Type 'help' for a list of commands.",
            )];
            lines.extend(advice.as_deref().map(Line::advice));
            lines
        }
    }
}

fn scene_lines(scene: &SceneView) -> Vec<Line> {
    let mut lines = vec![Line::heading(format!("=== {} ===", scene.name))];
    if let Some(art) = &scene.art {
        lines.push(Line::new(LineKind::Art, art.as_str()));
    }
    for text in [&scene.description, &scene.exits] {
        if !text.is_empty() {
            lines.push(Line::text(text.as_str()));
        }
    }
    lines.extend(scene.hints.iter().map(|h| Line::new(LineKind::Hint, h.as_str())));
    lines
}

fn not_found_lines(kind: CatalogKind, phrase: &str, suggestions: &[String]) -> Vec<Line> {
    if phrase.is_empty() {
        let question = match kind {
            CatalogKind::Creature => "Document which creature?",
            CatalogKind::Quest => "Which quest?",
            CatalogKind::Location => "Go where?",
            CatalogKind::Lore => "Which lore entry?",
        };
        return vec![Line::error(question)];
    }

    let noun = match kind {
        CatalogKind::Creature => "Creature",
        CatalogKind::Quest => "Quest",
        CatalogKind::Location => "Location",
        CatalogKind::Lore => "Lore entry",
    };
    let mut lines = vec![Line::error(format!("{noun} '{phrase}' not found."))];
    if !suggestions.is_empty() {
        lines.push(Line::advice(format!(
            "Did you mean: {}?",
            suggestions.join(", ")
        )));
    }
    lines
}

fn quest_lines(quests: &[QuestView]) -> Vec<Line> {
    let mut lines = vec![Line::heading("--- Quests ---")];
    lines.extend(
        quests
            .iter()
            .map(|q| Line::text(format!("- {} ({})", q.name, q.status))),
    );
    lines
}

fn creature_lines(creatures: &[CreatureView]) -> Vec<Line> {
    let mut lines = vec![Line::heading("--- Documented Creatures ---")];
    for creature in creatures {
        if creature.documented {
            lines.push(Line::text(format!(
                "- {}: {}",
                creature.name, creature.description
            )));
            if let Some(art) = &creature.art {
                lines.push(Line::new(LineKind::Art, art.as_str()));
            }
        } else {
            lines.push(Line::text(format!("- {}: Undocumented", creature.name)));
        }
    }
    lines
}

fn lore_lines(entries: &[LoreView]) -> Vec<Line> {
    let mut lines = vec![Line::heading("--- Discovered Lore ---")];
    for entry in entries {
        if entry.discovered {
            lines.push(Line::text(format!("- {}: {}", entry.title, entry.text)));
            if let Some(art) = &entry.art {
                lines.push(Line::new(LineKind::Art, art.as_str()));
            }
        } else {
            lines.push(Line::text(format!("- {}: Undiscovered", entry.title)));
        }
    }
    lines
}

fn help_lines() -> Vec<Line> {
    let mut lines = vec![Line::heading("--- Available Commands ---")];
    lines.extend(
        HELP_COMMANDS
            .iter()
            .map(|(command, about)| Line::text(format!("  {command}: {about}"))),
    );
    lines.push(Line::heading("--- Shortcuts ---"));
    lines.extend(
        ALIASES
            .iter()
            .map(|(alias, expansion)| Line::text(format!("  {alias} → {expansion}"))),
    );
    lines
}
