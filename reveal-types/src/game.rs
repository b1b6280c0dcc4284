use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use ts_rs::TS;

use crate::user::Player;
use crate::{PlayerId, SetId, WordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuestionSet {
    pub id: SetId,
    pub name: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WordEntry {
    pub id: WordId,
    pub text: String,
    pub theme: String,
    pub set_id: SetId,
    pub order: i64, // Unique within a set, not necessarily contiguous
    pub created_at: i64,
}

/// Play progress for one word during the current game. Discarded when the game ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PuzzleState {
    pub word_id: WordId,
    pub revealed_letters: BTreeSet<char>,
    pub wrong_letters: BTreeSet<char>,
    pub solved: bool,
}

impl PuzzleState {
    pub fn fresh(word_id: WordId) -> Self {
        Self {
            word_id,
            revealed_letters: BTreeSet::new(),
            wrong_letters: BTreeSet::new(),
            solved: false,
        }
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.revealed_letters.contains(&letter) || self.wrong_letters.contains(&letter)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum GameStatus {
    #[default]
    Setup,   // Idle, editing allowed
    Playing, // Word and set edits are locked
    Ended,   // Puzzles cleared, editing resumes
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Setup => "setup",
            GameStatus::Playing => "playing",
            GameStatus::Ended => "ended",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "setup" => Some(GameStatus::Setup),
            "playing" => Some(GameStatus::Playing),
            "ended" => Some(GameStatus::Ended),
            _ => None,
        }
    }

    /// Whether word and set edits are permitted in this mode
    pub fn allows_editing(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// The single root object. Every reducer operation replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AppState {
    pub players: Vec<Player>,
    pub active_player_id: Option<PlayerId>,
    pub sets: Vec<QuestionSet>,
    pub words: Vec<WordEntry>,
    pub active_set_id: Option<SetId>,
    pub game_status: GameStatus,
    pub current_puzzle_index: usize,
    pub puzzles: Vec<PuzzleState>,
}

impl AppState {
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn set(&self, id: &str) -> Option<&QuestionSet> {
        self.sets.iter().find(|s| s.id == id)
    }

    pub fn word(&self, id: &str) -> Option<&WordEntry> {
        self.words.iter().find(|w| w.id == id)
    }

    pub fn active_set(&self) -> Option<&QuestionSet> {
        self.active_set_id.as_deref().and_then(|id| self.set(id))
    }

    /// Words belonging to a set, sorted by their `order` key
    pub fn words_in_set(&self, set_id: &str) -> Vec<&WordEntry> {
        let mut words: Vec<&WordEntry> = self.words.iter().filter(|w| w.set_id == set_id).collect();
        words.sort_by_key(|w| w.order);
        words
    }

    pub fn current_puzzle(&self) -> Option<&PuzzleState> {
        self.puzzles.get(self.current_puzzle_index)
    }

    /// The word behind the current puzzle, if a game is running
    pub fn current_word(&self) -> Option<&WordEntry> {
        self.current_puzzle().and_then(|p| self.word(&p.word_id))
    }

    pub fn solved_count(&self) -> usize {
        self.puzzles.iter().filter(|p| p.solved).count()
    }
}
