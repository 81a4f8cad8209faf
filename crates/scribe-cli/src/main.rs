//! CLI frontend for Mythic Scribe.

mod commands;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use scribe_fiction::SessionConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "scribe",
    about = "Mythic Scribe: document the creatures and lore of a fantasy world",
    version,
    propagate_version = true
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Play {
        /// World definition file (default: the built-in world of Eldoria)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Player name
        #[arg(short, long)]
        name: Option<String>,

        /// Starting gold
        #[arg(short, long)]
        gold: Option<u64>,

        /// Start location key
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Validate a world definition file
    Check {
        /// World definition file
        #[arg(short, long)]
        world: PathBuf,
    },

    /// List the entries of one catalog
    List {
        /// Catalog to list
        #[arg(value_enum)]
        catalog: CatalogArg,

        /// World definition file (default: the built-in world of Eldoria)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Print a world definition as pretty JSON
    Export {
        /// World definition file (default: the built-in world of Eldoria)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Catalogs that `list` can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogArg {
    /// Quests and their status
    Quests,
    /// Creatures and their danger
    Creatures,
    /// Lore entries
    Lore,
    /// Locations and their exits
    Locations,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Commands::Play {
            world,
            name,
            gold,
            start,
        } => {
            let mut config = SessionConfig::new();
            if let Some(name) = name {
                config = config.with_player_name(name);
            }
            if let Some(gold) = gold {
                config = config.with_gold(gold);
            }
            if let Some(start) = start {
                config = config.with_location(start);
            }
            commands::play::run(world.as_deref(), config)
        }
        Commands::Check { world } => commands::check::run(&world),
        Commands::List { catalog, world } => commands::list::run(world.as_deref(), catalog),
        Commands::Export { world, output } => {
            commands::export::run(world.as_deref(), output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
