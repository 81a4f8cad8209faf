use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use scribe_fiction::{Command, GameSession, SessionConfig};

use crate::render;

pub fn run(world: Option<&Path>, config: SessionConfig) -> Result<(), String> {
    let world = super::load_world(world)?;
    let mut session =
        GameSession::new(world, config).map_err(|e| format!("failed to start session: {e}"))?;

    for line in session.welcome() {
        println!("  {}", line.bold());
    }
    render::print_outcome(&session.execute(Command::Look));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let outcome = session.process(input);
        render::print_outcome(&outcome);
        if outcome.ends_session() {
            break;
        }
    }

    Ok(())
}
