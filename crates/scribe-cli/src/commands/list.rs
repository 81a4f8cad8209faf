use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use scribe_core::{Catalogued, World};

use crate::CatalogArg;

const DESCRIPTION_WIDTH: usize = 60;

pub fn run(world: Option<&Path>, catalog: CatalogArg) -> Result<(), String> {
    let world = super::load_world(world)?;

    let (table, count, noun) = match catalog {
        CatalogArg::Quests => (quest_table(&world), world.quests().len(), "quests"),
        CatalogArg::Creatures => (creature_table(&world), world.creatures().len(), "creatures"),
        CatalogArg::Lore => (lore_table(&world), world.lore().len(), "lore entries"),
        CatalogArg::Locations => (location_table(&world), world.locations().len(), "locations"),
    };

    if count == 0 {
        println!("  No {noun} found.");
        return Ok(());
    }

    println!("{table}");
    println!();
    println!("  {count} {noun}");

    Ok(())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn quest_table(world: &World) -> Table {
    let mut table = new_table(vec!["Key", "Name", "Status", "Reward", "Location"]);
    for quest in world.quests() {
        let location = quest.location().map_or("—".to_string(), |key| key.to_string());
        table.add_row(vec![
            quest.key().to_string(),
            quest.name().to_string(),
            quest.status().to_string(),
            quest.reward().to_string(),
            location,
        ]);
    }
    table
}

fn creature_table(world: &World) -> Table {
    let mut table = new_table(vec!["Key", "Name", "Danger", "Description"]);
    for creature in world.creatures() {
        table.add_row(vec![
            creature.key().to_string(),
            creature.name().to_string(),
            creature.danger().to_string(),
            truncate(creature.description()),
        ]);
    }
    table
}

fn lore_table(world: &World) -> Table {
    let mut table = new_table(vec!["Key", "Title", "Text"]);
    for entry in world.lore() {
        table.add_row(vec![
            entry.key().to_string(),
            entry.title().to_string(),
            truncate(entry.text()),
        ]);
    }
    table
}

fn location_table(world: &World) -> Table {
    let mut table = new_table(vec!["Key", "Name", "Exits", "Creatures", "Quests"]);
    for location in world.locations() {
        let exits = location
            .exits()
            .iter()
            .map(|exit| format!("{} → {}", exit.phrase, exit.to))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            location.key().to_string(),
            location.name().to_string(),
            exits,
            location.creatures().len().to_string(),
            location.quests().len().to_string(),
        ]);
    }
    table
}

fn truncate(text: &str) -> String {
    if text.is_empty() {
        "—".to_string()
    } else if text.chars().count() > DESCRIPTION_WIDTH {
        let head: String = text.chars().take(DESCRIPTION_WIDTH - 3).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
