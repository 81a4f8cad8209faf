//! Entity name resolution with tiered matching.

use scribe_core::{Catalog, Catalogued, EntityKey};
use strsim::jaro_winkler;

/// Minimum similarity score for a suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.6;

/// The tier that produced a match. Earlier tiers win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Equal to the display name, the key or the spaced key.
    Exact,
    /// Contained in (or containing) the display name or spaced key.
    Substring,
    /// Every word of the phrase appears in the display name or spaced key.
    WordSet,
}

/// A successful resolution.
#[derive(Debug)]
pub struct Resolved<'a, T> {
    /// Canonical key of the matched entry.
    pub key: &'a EntityKey,
    /// The matched entry.
    pub entity: &'a T,
    /// How it matched.
    pub tier: MatchTier,
}

/// Resolve a free-text phrase to a catalog entry.
///
/// Tiers are tried in order and catalog order breaks ties within a tier.
/// The word-set tier checks containment, not token equality, so short
/// words over-match: `"o"` finds the first entry with an `o` in its name.
pub fn resolve<'a, T: Catalogued>(
    phrase: &str,
    catalog: &'a Catalog<T>,
) -> Option<Resolved<'a, T>> {
    let phrase = phrase.trim().to_lowercase();
    if phrase.is_empty() {
        return None;
    }

    let candidates: Vec<Candidate<'a, T>> = catalog.all().map(Candidate::new).collect();
    let words: Vec<&str> = phrase.split_whitespace().collect();

    [MatchTier::Exact, MatchTier::Substring, MatchTier::WordSet]
        .into_iter()
        .find_map(|tier| {
            candidates
                .iter()
                .find(|c| c.matches(tier, &phrase, &words))
                .map(|c| Resolved {
                    key: c.entity.key(),
                    entity: c.entity,
                    tier,
                })
        })
}

struct Candidate<'a, T> {
    entity: &'a T,
    name: String,
    spaced: String,
}

impl<'a, T: Catalogued> Candidate<'a, T> {
    fn new(entity: &'a T) -> Self {
        Self {
            name: entity.display_name().to_lowercase(),
            spaced: entity.key().spaced(),
            entity,
        }
    }

    fn matches(&self, tier: MatchTier, phrase: &str, words: &[&str]) -> bool {
        match tier {
            MatchTier::Exact => {
                self.name == phrase
                    || self.spaced == phrase
                    || self.entity.key().as_str().to_lowercase() == phrase
            }
            MatchTier::Substring => {
                self.name.contains(phrase)
                    || self.spaced.contains(phrase)
                    || (!self.name.is_empty() && phrase.contains(self.name.as_str()))
                    || (!self.spaced.is_empty() && phrase.contains(self.spaced.as_str()))
            }
            MatchTier::WordSet => {
                words.iter().all(|w| self.name.contains(w))
                    || words.iter().all(|w| self.spaced.contains(w))
            }
        }
    }
}

/// Suggest display names close to `phrase`, best first.
///
/// Only display names are scored; keys are identifiers the player never
/// sees in narration.
/// A prefix of the name scores highest, then a substring, then any name
/// whose Jaro-Winkler similarity reaches the threshold. Ties keep catalog
/// order.
pub fn suggest<T: Catalogued>(phrase: &str, catalog: &Catalog<T>, limit: usize) -> Vec<String> {
    let phrase = phrase.trim().to_lowercase();
    if phrase.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = catalog
        .all()
        .filter_map(|entity| {
            let name = entity.display_name();
            closeness(&phrase, &name.to_lowercase()).map(|score| (score, name))
        })
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}

fn closeness(phrase: &str, name: &str) -> Option<f64> {
    if name.starts_with(phrase) {
        Some(2.0)
    } else if name.contains(phrase) {
        Some(1.0)
    } else {
        Some(jaro_winkler(phrase, name)).filter(|score| *score >= SUGGEST_THRESHOLD)
    }
}
