pub mod check;
pub mod export;
pub mod list;
pub mod play;

use std::path::Path;

use scribe_core::World;

/// Load a world file, or the built-in world when no path is given.
fn load_world(path: Option<&Path>) -> Result<World, String> {
    tracing::debug!(path = ?path, "loading world");
    match path {
        Some(path) => {
            World::load(path).map_err(|e| format!("cannot load {}: {e}", path.display()))
        }
        None => World::eldoria().map_err(|e| format!("built-in world is invalid: {e}")),
    }
}
