//! "Did you mean" advice for input that is not a command.

use scribe_core::{Catalogued, Location, Quest, World};

use crate::parser::resolve;

/// Words that are command vocabulary rather than entity names.
const IGNORED_WORDS: &[&str] = &[
    "the", "and", "take", "complete", "quest", "quests", "document", "creature", "creatures",
    "doc", "go", "to",
];

/// Fragments that hint at a misspelled command, checked in order.
const FRAGMENTS: &[(&str, &str)] = &[
    ("quest", "Did you mean 'quests' or 'take quest [name]'?"),
    ("creat", "Did you mean 'creatures'?"),
    ("doc", "Did you mean 'document creature [name]'?"),
    ("inv", "Did you mean 'inventory'?"),
];

/// Suggest a command for unrecognized input.
///
/// Rules, first hit wins:
/// 1. `take`/`complete` together with a word naming a quest.
/// 2. A word naming a creature.
/// 3. A word matching an exit of the current location.
/// 4. A fragment of a command word.
pub fn advise(input: &str, world: &World, location: &Location) -> Option<String> {
    let lowered = input.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|w| w.len() >= 3 && !IGNORED_WORDS.contains(w))
        .collect();

    let quest_word = words.iter().find_map(|w| {
        resolve(w, world.quests()).map(|found| quest_phrase(w, found.entity))
    });

    if let Some(word) = &quest_word {
        for verb in ["take", "complete"] {
            if lowered.contains(verb) {
                return Some(format!("Did you mean '{verb} quest {word}'?"));
            }
        }
    }

    if let Some(creature) = words.iter().find_map(|w| resolve(w, world.creatures())) {
        return Some(format!(
            "Did you mean 'document creature {}'?",
            creature.entity.name().to_lowercase()
        ));
    }

    if let Some(word) = words.iter().find(|w| location.find_exit(w).is_some()) {
        return Some(match quest_word {
            Some(quest) => format!("Did you mean 'go {word}' or 'take quest {quest}'?"),
            None => format!("Did you mean 'go {word}'?"),
        });
    }

    FRAGMENTS
        .iter()
        .find(|(fragment, _)| lowered.contains(fragment))
        .map(|(_, advice)| (*advice).to_string())
}

/// The word of the quest's name (or key) that `word` belongs to.
fn quest_phrase(word: &str, quest: &Quest) -> String {
    let name = quest.name().to_lowercase();
    let key = quest.key().as_str().replace('_', " ");
    name.split_whitespace()
        .chain(key.split_whitespace())
        .find(|candidate| candidate.contains(word))
        .map_or_else(|| key.clone(), str::to_string)
}
