//! Interactive command implementations.

pub mod categories;
pub mod console;
pub mod parse;
pub mod session;

pub use categories::CategoriesCommand;
pub use console::Console;
pub use parse::ParseCommand;
pub use session::Session;

/// A line typed at the `>` prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List top-level categories
    Categories,
    /// Navigate to a leaf category and export its products
    Parse,
    /// Show available commands
    Help,
    /// Leave the session
    Exit,
    /// Blank line
    Empty,
    /// Anything else
    Unknown(String),
}

impl Command {
    /// Maps an input line onto a command; matching is case-insensitive.
    pub fn parse(line: &str) -> Self {
        let word = line.trim();
        match word.to_lowercase().as_str() {
            "" => Command::Empty,
            "categories" => Command::Categories,
            "parse" => Command::Parse,
            "help" => Command::Help,
            "exit" | "quit" => Command::Exit,
            _ => Command::Unknown(word.to_string()),
        }
    }
}

/// Lines printed by `help`.
pub const HELP: &[&str] = &[
    "categories  list top-level categories",
    "parse       pick a category and export its products",
    "help        show this message",
    "exit        quit",
];
