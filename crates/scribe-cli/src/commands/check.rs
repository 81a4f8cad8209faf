use std::path::Path;

pub fn run(path: &Path) -> Result<(), String> {
    let world = super::load_world(Some(path))?;

    println!("  All checks passed for '{}'.", world.meta.name);
    println!(
        "  {} locations, {} creatures, {} quests, {} lore entries",
        world.locations().len(),
        world.creatures().len(),
        world.quests().len(),
        world.lore().len()
    );

    Ok(())
}
