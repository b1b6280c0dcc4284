use reveal_types::{
    Action, AppState, GameStatus, GuessOutcome, MoveDirection, Player, PuzzleState, QuestionSet,
    WordEntry,
};
use tracing::info;

use crate::ids::{new_id, now_millis};

/// Result of applying one action: the replacement state plus the guess report, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    pub outcome: Option<GuessOutcome>,
    pub changed: bool,
}

/// Apply an action to the state. Never fails; invalid targets leave the state unchanged.
pub fn reduce(state: &AppState, action: &Action) -> Transition {
    let mut outcome = None;
    let next = match action {
        Action::AddPlayer { name } => add_player(state, name),
        Action::RemovePlayer { id } => remove_player(state, id),
        Action::RenamePlayer { id, name } => rename_player(state, id, name),
        Action::AdjustScore { id, delta } => adjust_score(state, id, *delta),
        Action::SelectPlayer { id } => select_player(state, id),
        Action::CreateSet { name } => create_set(state, name),
        Action::DeleteSet { id } => delete_set(state, id),
        Action::RenameSet { id, name } => rename_set(state, id, name),
        Action::SelectSet { id } => select_set(state, id),
        Action::AddWord { text, theme } => add_word(state, text, theme),
        Action::EditWord { id, text, theme } => edit_word(state, id, text, theme),
        Action::DeleteWord { id } => delete_word(state, id),
        Action::MoveWord { id, direction } => move_word(state, id, *direction),
        Action::StartGame { set_id } => start_game(state, set_id),
        Action::EndGame => end_game(state),
        Action::NextPuzzle => next_puzzle(state),
        Action::PrevPuzzle => prev_puzzle(state),
        Action::GuessLetter { letter } => {
            let (next, report) = guess_letter(state, *letter);
            outcome = report;
            next
        }
        Action::SolvePuzzle => solve_puzzle(state),
        Action::ResetAll => reset_all(),
    };

    let changed = next != *state;
    Transition {
        state: next,
        outcome,
        changed,
    }
}

// Players

pub fn add_player(state: &AppState, name: &str) -> AppState {
    let name = name.trim();
    if name.is_empty() {
        return state.clone();
    }

    let mut next = state.clone();
    next.players.push(Player {
        id: new_id(),
        name: name.to_string(),
        score: 0,
        created_at: now_millis(),
    });
    next
}

pub fn remove_player(state: &AppState, id: &str) -> AppState {
    let mut next = state.clone();
    next.players.retain(|p| p.id != id);
    if next.active_player_id.as_deref() == Some(id) {
        next.active_player_id = None;
    }
    next
}

pub fn rename_player(state: &AppState, id: &str, name: &str) -> AppState {
    let name = name.trim();
    let mut next = state.clone();
    match next.players.iter_mut().find(|p| p.id == id) {
        Some(player) if !name.is_empty() => player.name = name.to_string(),
        _ => {}
    }
    next
}

/// Add a signed delta to a player's score. No floor or ceiling.
pub fn adjust_score(state: &AppState, id: &str, delta: i32) -> AppState {
    let mut next = state.clone();
    if let Some(player) = next.players.iter_mut().find(|p| p.id == id) {
        player.score = player.score.saturating_add(delta);
    }
    next
}

/// Mark whose turn it is
pub fn select_player(state: &AppState, id: &str) -> AppState {
    if state.player(id).is_none() {
        return state.clone();
    }
    let mut next = state.clone();
    next.active_player_id = Some(id.to_string());
    next
}

// Question sets

pub fn create_set(state: &AppState, name: &str) -> AppState {
    let name = name.trim();
    if name.is_empty() {
        return state.clone();
    }

    let mut next = state.clone();
    let set = QuestionSet {
        id: new_id(),
        name: name.to_string(),
        created_at: now_millis(),
    };
    if next.sets.is_empty() {
        next.active_set_id = Some(set.id.clone());
    }
    next.sets.push(set);
    next
}

/// Remove a set and every word in it. An active set hands over to the first remaining one.
pub fn delete_set(state: &AppState, id: &str) -> AppState {
    if state.set(id).is_none() {
        return state.clone();
    }

    let mut next = state.clone();
    next.sets.retain(|s| s.id != id);
    next.words.retain(|w| w.set_id != id);
    if next.active_set_id.as_deref() == Some(id) {
        next.active_set_id = next.sets.first().map(|s| s.id.clone());
    }
    next
}

pub fn rename_set(state: &AppState, id: &str, name: &str) -> AppState {
    let name = name.trim();
    let mut next = state.clone();
    match next.sets.iter_mut().find(|s| s.id == id) {
        Some(set) if !name.is_empty() => set.name = name.to_string(),
        _ => {}
    }
    next
}

/// Does not check that the set exists; callers pass ids from the current state.
pub fn select_set(state: &AppState, id: &str) -> AppState {
    let mut next = state.clone();
    next.active_set_id = Some(id.to_string());
    next
}

// Words

/// Append a word to the active set, after its current last entry
pub fn add_word(state: &AppState, text: &str, theme: &str) -> AppState {
    let text = text.trim();
    let Some(set_id) = state.active_set().map(|s| s.id.clone()) else {
        return state.clone();
    };
    if text.is_empty() {
        return state.clone();
    }

    let order = state
        .words
        .iter()
        .filter(|w| w.set_id == set_id)
        .map(|w| w.order)
        .max()
        .map_or(1, |max| max + 1);

    let mut next = state.clone();
    next.words.push(WordEntry {
        id: new_id(),
        text: text.to_string(),
        theme: theme.trim().to_string(),
        set_id,
        order,
        created_at: now_millis(),
    });
    next
}

pub fn edit_word(state: &AppState, id: &str, text: &str, theme: &str) -> AppState {
    let text = text.trim();
    if text.is_empty() {
        return state.clone();
    }

    let mut next = state.clone();
    if let Some(word) = next.words.iter_mut().find(|w| w.id == id) {
        word.text = text.to_string();
        word.theme = theme.trim().to_string();
    }
    next
}

pub fn delete_word(state: &AppState, id: &str) -> AppState {
    let mut next = state.clone();
    next.words.retain(|w| w.id != id);
    next
}

/// Swap `order` keys with the neighbouring word of the same set. Other words keep their keys.
pub fn move_word(state: &AppState, id: &str, direction: MoveDirection) -> AppState {
    let Some(word) = state.word(id) else {
        return state.clone();
    };

    let siblings = state.words_in_set(&word.set_id);
    let Some(index) = siblings.iter().position(|w| w.id == id) else {
        return state.clone();
    };
    let neighbor_index = match direction {
        MoveDirection::Up if index > 0 => index - 1,
        MoveDirection::Down if index + 1 < siblings.len() => index + 1,
        _ => return state.clone(),
    };

    let (moved_id, moved_order) = (siblings[index].id.clone(), siblings[index].order);
    let (neighbor_id, neighbor_order) = (
        siblings[neighbor_index].id.clone(),
        siblings[neighbor_index].order,
    );

    let mut next = state.clone();
    for word in &mut next.words {
        if word.id == moved_id {
            word.order = neighbor_order;
        } else if word.id == neighbor_id {
            word.order = moved_order;
        }
    }
    next
}

// Game lifecycle

/// Begin a game over the set's words in `order` sequence
pub fn start_game(state: &AppState, set_id: &str) -> AppState {
    if state.game_status == GameStatus::Playing {
        return state.clone();
    }

    let puzzles: Vec<PuzzleState> = state
        .words_in_set(set_id)
        .into_iter()
        .map(|w| PuzzleState::fresh(w.id.clone()))
        .collect();
    if puzzles.is_empty() {
        return state.clone();
    }

    info!("Starting game on set {} with {} puzzles", set_id, puzzles.len());

    let mut next = state.clone();
    next.puzzles = puzzles;
    next.active_set_id = Some(set_id.to_string());
    next.current_puzzle_index = 0;
    next.game_status = GameStatus::Playing;
    next
}

/// Discard the puzzle list. Scores are kept.
pub fn end_game(state: &AppState) -> AppState {
    if state.game_status == GameStatus::Playing {
        info!(
            "Ending game with {}/{} puzzles solved",
            state.solved_count(),
            state.puzzles.len()
        );
    }

    let mut next = state.clone();
    next.puzzles.clear();
    next.current_puzzle_index = 0;
    next.game_status = GameStatus::Ended;
    next
}

pub fn next_puzzle(state: &AppState) -> AppState {
    let mut next = state.clone();
    if next.current_puzzle_index + 1 < next.puzzles.len() {
        next.current_puzzle_index += 1;
    }
    next
}

pub fn prev_puzzle(state: &AppState) -> AppState {
    let mut next = state.clone();
    if next.current_puzzle_index > 0 && !next.puzzles.is_empty() {
        next.current_puzzle_index -= 1;
    }
    next
}

// Puzzle play

/// 0-based character positions where `letter` occurs, ignoring ASCII case
pub fn letter_positions(text: &str, letter: char) -> Vec<usize> {
    let letter = letter.to_ascii_lowercase();
    text.chars()
        .enumerate()
        .filter(|(_, c)| c.to_ascii_lowercase() == letter)
        .map(|(i, _)| i)
        .collect()
}

/// Classify a letter against the current puzzle. A letter is classified once;
/// guessing it again reports the same result without touching the state.
pub fn guess_letter(state: &AppState, letter: char) -> (AppState, Option<GuessOutcome>) {
    if !letter.is_alphanumeric() {
        return (state.clone(), None);
    }
    let letter = letter.to_ascii_lowercase();

    let Some(puzzle) = state.current_puzzle() else {
        return (state.clone(), None);
    };
    if puzzle.solved {
        return (state.clone(), None);
    }
    let Some(word) = state.word(&puzzle.word_id) else {
        return (state.clone(), None);
    };

    let positions = letter_positions(&word.text, letter);
    let outcome = if positions.is_empty() {
        GuessOutcome::miss()
    } else {
        GuessOutcome {
            correct: true,
            positions,
        }
    };

    if puzzle.has_guessed(letter) {
        return (state.clone(), Some(outcome));
    }

    let mut next = state.clone();
    let puzzle = &mut next.puzzles[state.current_puzzle_index];
    if outcome.correct {
        puzzle.revealed_letters.insert(letter);
    } else {
        puzzle.wrong_letters.insert(letter);
    }
    (next, Some(outcome))
}

/// Mark the current puzzle solved. Phrase checking happens before this is called.
pub fn solve_puzzle(state: &AppState) -> AppState {
    let index = state.current_puzzle_index;
    match state.puzzles.get(index) {
        Some(puzzle) if !puzzle.solved => {
            let mut next = state.clone();
            next.puzzles[index].solved = true;
            next
        }
        _ => state.clone(),
    }
}

pub fn reset_all() -> AppState {
    AppState::default()
}
