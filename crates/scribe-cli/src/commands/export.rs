use std::path::Path;

pub fn run(world: Option<&Path>, output: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world)?;
    let content = world
        .to_json_pretty()
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, format!("{content}\n"))
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
