//! Terminal styling for narrated outcomes.

use colored::{ColoredString, Colorize};
use scribe_fiction::{Line, LineKind, Outcome};

/// Print an outcome followed by a blank line.
pub fn print_outcome(outcome: &Outcome) {
    for line in outcome.narrate() {
        if line.kind == LineKind::Heading {
            println!();
        }
        println!("{}", style(&line));
    }
    println!();
}

fn style(line: &Line) -> ColoredString {
    let text = line.text.as_str();
    match line.kind {
        LineKind::Heading => text.bold(),
        LineKind::Text => text.normal(),
        LineKind::Art => text.cyan(),
        LineKind::Hint => text.green().italic(),
        LineKind::Advice => text.dimmed(),
        LineKind::Error => text.yellow(),
    }
}
