use std::collections::HashMap;

use crate::entity::EntityKey;
use crate::error::{CatalogKind, CoreError, CoreResult};

/// An entry that can live in a [`Catalog`].
pub trait Catalogued {
    /// Which catalog this entry type belongs to.
    const KIND: CatalogKind;

    /// Canonical key, unique within the catalog.
    fn key(&self) -> &EntityKey;

    /// Human-readable name the player sees.
    fn display_name(&self) -> &str;
}

/// Ordered, keyed collection of one entity type.
///
/// Iteration follows definition order. Entries can only be mutated from
/// inside this crate, through the narrow methods on [`crate::World`].
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    entries: Vec<T>,
    by_key: HashMap<EntityKey, usize>,
}

impl<T: Catalogued> Catalog<T> {
    /// Build a catalog, rejecting duplicate keys.
    ///
    /// Duplicate display names are allowed but logged; resolution picks the
    /// first definition.
    pub fn from_entries(entries: Vec<T>) -> CoreResult<Self> {
        let mut by_key = HashMap::with_capacity(entries.len());
        let mut names: HashMap<String, EntityKey> = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            if by_key.insert(entry.key().clone(), index).is_some() {
                return Err(CoreError::DuplicateKey {
                    kind: T::KIND,
                    key: entry.key().clone(),
                });
            }
            if let Some(first) =
                names.insert(entry.display_name().to_lowercase(), entry.key().clone())
            {
                tracing::warn!(
                    kind = %T::KIND,
                    name = entry.display_name(),
                    first = %first,
                    shadowed = %entry.key(),
                    "duplicate display name in catalog"
                );
            }
        }

        Ok(Self { entries, by_key })
    }

    /// Look up an entry by key.
    pub fn lookup(&self, key: &str) -> Option<&T> {
        self.by_key.get(key).map(|&index| &self.entries[index])
    }

    /// All entries in definition order.
    pub fn all(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Whether the key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn lookup_mut(&mut self, key: &str) -> Option<&mut T> {
        match self.by_key.get(key) {
            Some(&index) => self.entries.get_mut(index),
            None => None,
        }
    }

    pub(crate) fn into_entries(self) -> Vec<T> {
        self.entries
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Creature;

    fn bestiary() -> Catalog<Creature> {
        Catalog::from_entries(vec![
            Creature::new("goblin", "Goblin"),
            Creature::new("dire_wolf", "Dire Wolf"),
            Creature::new("cave_bat", "Cave Bat"),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_by_key() {
        let catalog = bestiary();
        assert_eq!(catalog.lookup("dire_wolf").unwrap().name(), "Dire Wolf");
        assert!(catalog.lookup("Dire Wolf").is_none());
        assert!(catalog.contains("goblin"));
        assert!(!catalog.contains("dragon"));
    }

    #[test]
    fn iteration_follows_definition_order() {
        let names: Vec<_> = bestiary().all().map(|c| c.name().to_string()).collect();
        assert_eq!(names, ["Goblin", "Dire Wolf", "Cave Bat"]);
    }

    #[test]
    fn duplicate_keys_rejected() {
        let result = Catalog::from_entries(vec![
            Creature::new("goblin", "Goblin"),
            Creature::new("goblin", "Hobgoblin"),
        ]);
        assert!(matches!(
            result,
            Err(CoreError::DuplicateKey {
                kind: CatalogKind::Creature,
                ..
            })
        ));
    }

    #[test]
    fn duplicate_display_names_allowed() {
        let catalog = Catalog::from_entries(vec![
            Creature::new("goblin", "Goblin"),
            Creature::new("cave_goblin", "goblin"),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn empty_catalog() {
        let catalog: Catalog<Creature> = Catalog::from_entries(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.all().count(), 0);
    }
}
