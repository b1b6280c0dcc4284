//! Command-line interface for the reveal host.

use clap::{Parser, Subcommand, ValueEnum};
use reveal_types::MoveDirection;
use std::path::PathBuf;

/// Word Reveal - reveal letters or solve the phrase
#[derive(Parser, Debug)]
#[command(name = "reveal-host")]
#[command(about = "Party puzzle helper: players, question sets and reveal-the-phrase rounds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database URL, overrides DATABASE_URL
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Up,
    Down,
}

impl From<DirectionArg> for MoveDirection {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Up => MoveDirection::Up,
            DirectionArg::Down => MoveDirection::Down,
        }
    }
}

/// Available commands. Players, sets and words may be named by id or by name/text.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the full state
    Show,

    /// Print the current puzzle board and the standings
    Board,

    /// Print players ranked by score
    Standings,

    /// Add a player
    AddPlayer { name: String },

    /// Remove a player
    RemovePlayer { player: String },

    /// Rename a player
    RenamePlayer { player: String, name: String },

    /// Add (or subtract) points
    Score {
        player: String,
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },

    /// Mark whose turn it is
    SelectPlayer { player: String },

    /// Create a question set
    CreateSet { name: String },

    /// Delete a set and all of its words
    DeleteSet { set: String },

    /// Rename a set
    RenameSet { set: String, name: String },

    /// Make a set the active one
    SelectSet { set: String },

    /// Add a word or phrase to the active set
    AddWord {
        text: String,
        #[arg(long, default_value = "")]
        theme: String,
    },

    /// Change a word's text and theme
    EditWord {
        word: String,
        text: String,
        #[arg(long, default_value = "")]
        theme: String,
    },

    /// Delete a word
    DeleteWord { word: String },

    /// Move a word up or down within its set
    MoveWord {
        word: String,
        #[arg(value_enum)]
        direction: DirectionArg,
    },

    /// Show the shape of a word without its letters
    Preview { word: String },

    /// Start a game on a set (defaults to the active set)
    Start { set: Option<String> },

    /// End the running game
    End,

    /// Go to the next puzzle
    Next,

    /// Go to the previous puzzle
    Prev,

    /// Guess a letter on the current puzzle
    Guess { letter: char },

    /// Mark the current puzzle solved, optionally checking a phrase first
    Solve { phrase: Option<String> },

    /// Replace players, sets and words from a tabular JSON document
    Import { path: PathBuf },

    /// Print players, sets and words as a tabular JSON document
    Export,

    /// Erase everything
    Reset {
        /// Required confirmation
        #[arg(long)]
        yes: bool,
    },
}
