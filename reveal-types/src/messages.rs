use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{PlayerId, SetId, WordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum MoveDirection {
    Up,
    Down,
}

/// User intents emitted by the presentation layer. Each maps 1:1 to a reducer operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum Action {
    AddPlayer { name: String },
    RemovePlayer { id: PlayerId },
    RenamePlayer { id: PlayerId, name: String },
    AdjustScore { id: PlayerId, delta: i32 },
    SelectPlayer { id: PlayerId },
    CreateSet { name: String },
    DeleteSet { id: SetId },
    RenameSet { id: SetId, name: String },
    SelectSet { id: SetId },
    AddWord { text: String, theme: String },
    EditWord { id: WordId, text: String, theme: String },
    DeleteWord { id: WordId },
    MoveWord { id: WordId, direction: MoveDirection },
    StartGame {
        #[serde(rename = "setId")]
        set_id: SetId,
    },
    EndGame,
    NextPuzzle,
    PrevPuzzle,
    GuessLetter { letter: char },
    SolvePuzzle,
    ResetAll,
}

impl Action {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddPlayer { .. } => "addPlayer",
            Action::RemovePlayer { .. } => "removePlayer",
            Action::RenamePlayer { .. } => "renamePlayer",
            Action::AdjustScore { .. } => "adjustScore",
            Action::SelectPlayer { .. } => "selectPlayer",
            Action::CreateSet { .. } => "createSet",
            Action::DeleteSet { .. } => "deleteSet",
            Action::RenameSet { .. } => "renameSet",
            Action::SelectSet { .. } => "selectSet",
            Action::AddWord { .. } => "addWord",
            Action::EditWord { .. } => "editWord",
            Action::DeleteWord { .. } => "deleteWord",
            Action::MoveWord { .. } => "moveWord",
            Action::StartGame { .. } => "startGame",
            Action::EndGame => "endGame",
            Action::NextPuzzle => "nextPuzzle",
            Action::PrevPuzzle => "prevPuzzle",
            Action::GuessLetter { .. } => "guessLetter",
            Action::SolvePuzzle => "solvePuzzle",
            Action::ResetAll => "resetAll",
        }
    }

    /// Word and set edits the presentation layer must refuse while a game is playing
    pub fn is_word_edit(&self) -> bool {
        matches!(
            self,
            Action::CreateSet { .. }
                | Action::DeleteSet { .. }
                | Action::RenameSet { .. }
                | Action::AddWord { .. }
                | Action::EditWord { .. }
                | Action::DeleteWord { .. }
                | Action::MoveWord { .. }
        )
    }
}

/// Report for a letter guess. Kept apart from the new state so callers can highlight hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessOutcome {
    pub correct: bool,
    pub positions: Vec<usize>, // 0-based character positions in the word text
}

impl GuessOutcome {
    pub fn miss() -> Self {
        Self {
            correct: false,
            positions: Vec::new(),
        }
    }
}
