//! Command parsing for player input.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the session.
    Quit,
    /// Describe the current location.
    Look,
    /// List every quest with its status.
    ListQuests,
    /// Take an available quest.
    TakeQuest(String),
    /// Complete an active quest.
    CompleteQuest(String),
    /// Document a creature.
    DocumentCreature(String),
    /// List creatures, documented or not.
    ListCreatures,
    /// List lore entries, discovered or not.
    ListLore,
    /// Show gold and items.
    ShowInventory,
    /// Move along an exit of the current location.
    Go(String),
    /// List the available commands.
    Help,
    /// Anything else, holding the trimmed original input.
    Unknown(String),
}

impl Command {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::Look => "look",
            Self::ListQuests => "quests",
            Self::TakeQuest(_) => "take quest",
            Self::CompleteQuest(_) => "complete quest",
            Self::DocumentCreature(_) => "document creature",
            Self::ListCreatures => "creatures",
            Self::ListLore => "lore",
            Self::ShowInventory => "inventory",
            Self::Go(_) => "go",
            Self::Help => "help",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// Shortcuts and the command text they expand to.
pub const ALIASES: &[(&str, &str)] = &[
    ("doc", "document creature"),
    ("quest", "quests"),
    ("creat", "creatures"),
    ("inv", "inventory"),
];

/// Verbs that take the rest of the line as their argument.
const ARGUMENT_VERBS: &[(&str, fn(String) -> Command)] = &[
    ("take quest", Command::TakeQuest),
    ("complete quest", Command::CompleteQuest),
    ("document creature", Command::DocumentCreature),
    ("go", Command::Go),
];

/// Lowercase, trim, collapse whitespace and expand aliases.
///
/// An alias expands when it is the whole input or the first word of it.
pub fn normalize(input: &str) -> String {
    let lowered = input.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    let (head, rest) = match lowered.split_once(' ') {
        Some((head, rest)) => (head, Some(rest)),
        None => (lowered.as_str(), None),
    };

    match ALIASES.iter().find(|(alias, _)| *alias == head) {
        Some((_, expansion)) => match rest {
            Some(rest) => format!("{expansion} {rest}"),
            None => (*expansion).to_string(),
        },
        None => lowered,
    }
}

/// Parse a player input string into a command. Never fails.
pub fn parse_command(input: &str) -> Command {
    let normalized = normalize(input);

    match normalized.as_str() {
        "quit" | "exit" => return Command::Quit,
        "look" => return Command::Look,
        "quests" => return Command::ListQuests,
        "creatures" => return Command::ListCreatures,
        "lore" => return Command::ListLore,
        "inventory" => return Command::ShowInventory,
        "help" => return Command::Help,
        _ => {}
    }

    for (verb, make) in ARGUMENT_VERBS {
        if normalized == *verb {
            return make(String::new());
        }
        if let Some(argument) = normalized
            .strip_prefix(verb)
            .and_then(|rest| rest.strip_prefix(' '))
        {
            return make(argument.to_string());
        }
    }

    Command::Unknown(input.trim().to_string())
}
