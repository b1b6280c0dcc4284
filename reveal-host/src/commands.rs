use anyhow::{Result, anyhow, bail};
use reveal_core::{Scoreboard, TabularDocument, export, is_phrase_match, mask, normalize, reveal};
use reveal_persistence::{PersistentStore, StateStorage};
use reveal_types::{Action, AppState, EntityId, ImportError};
use serde_json::{Value, json};
use tracing::info;

use crate::cli::Command;

/// Players may be given by id or by name
pub fn resolve_player(state: &AppState, key: &str) -> EntityId {
    state
        .players
        .iter()
        .find(|p| p.id == key)
        .or_else(|| state.players.iter().find(|p| p.name.eq_ignore_ascii_case(key.trim())))
        .map_or_else(|| key.to_string(), |p| p.id.clone())
}

/// Sets may be given by id or by name
pub fn resolve_set(state: &AppState, key: &str) -> EntityId {
    state
        .sets
        .iter()
        .find(|s| s.id == key)
        .or_else(|| state.sets.iter().find(|s| s.name.eq_ignore_ascii_case(key.trim())))
        .map_or_else(|| key.to_string(), |s| s.id.clone())
}

/// Words may be given by id or by text; a match in the active set wins
pub fn resolve_word(state: &AppState, key: &str) -> EntityId {
    if let Some(word) = state.word(key) {
        return word.id.clone();
    }

    let wanted = normalize(key);
    let mut matches = state.words.iter().filter(|w| normalize(&w.text) == wanted);
    let first = matches.next();
    let in_active = first
        .into_iter()
        .chain(matches)
        .find(|w| state.active_set_id.as_deref() == Some(w.set_id.as_str()));

    in_active
        .or(first)
        .map_or_else(|| key.to_string(), |w| w.id.clone())
}

/// Map a command onto the reducer action it stands for. Queries map to `None`.
pub fn to_action(state: &AppState, command: &Command) -> Option<Action> {
    let action = match command {
        Command::AddPlayer { name } => Action::AddPlayer { name: name.clone() },
        Command::RemovePlayer { player } => Action::RemovePlayer {
            id: resolve_player(state, player),
        },
        Command::RenamePlayer { player, name } => Action::RenamePlayer {
            id: resolve_player(state, player),
            name: name.clone(),
        },
        Command::Score { player, delta } => Action::AdjustScore {
            id: resolve_player(state, player),
            delta: *delta,
        },
        Command::SelectPlayer { player } => Action::SelectPlayer {
            id: resolve_player(state, player),
        },
        Command::CreateSet { name } => Action::CreateSet { name: name.clone() },
        Command::DeleteSet { set } => Action::DeleteSet {
            id: resolve_set(state, set),
        },
        Command::RenameSet { set, name } => Action::RenameSet {
            id: resolve_set(state, set),
            name: name.clone(),
        },
        Command::SelectSet { set } => Action::SelectSet {
            id: resolve_set(state, set),
        },
        Command::AddWord { text, theme } => Action::AddWord {
            text: text.clone(),
            theme: theme.clone(),
        },
        Command::EditWord { word, text, theme } => Action::EditWord {
            id: resolve_word(state, word),
            text: text.clone(),
            theme: theme.clone(),
        },
        Command::DeleteWord { word } => Action::DeleteWord {
            id: resolve_word(state, word),
        },
        Command::MoveWord { word, direction } => Action::MoveWord {
            id: resolve_word(state, word),
            direction: (*direction).into(),
        },
        Command::Start { set } => {
            let set_id = match set {
                Some(set) => resolve_set(state, set),
                None => state.active_set_id.clone()?,
            };
            Action::StartGame { set_id }
        }
        Command::End => Action::EndGame,
        Command::Next => Action::NextPuzzle,
        Command::Prev => Action::PrevPuzzle,
        Command::Guess { letter } => Action::GuessLetter { letter: *letter },
        Command::Solve { .. } => Action::SolvePuzzle,
        Command::Reset { .. } => Action::ResetAll,
        Command::Show
        | Command::Board
        | Command::Standings
        | Command::Preview { .. }
        | Command::Import { .. }
        | Command::Export => return None,
    };
    Some(action)
}

/// What a presenter shows for the current puzzle
pub fn board(state: &AppState) -> Value {
    let Some(puzzle) = state.current_puzzle() else {
        return json!({ "status": state.game_status.as_str(), "puzzle": null });
    };
    let Some(word) = state.word(&puzzle.word_id) else {
        return json!({ "status": state.game_status.as_str(), "puzzle": null });
    };

    json!({
        "status": state.game_status.as_str(),
        "puzzle": {
            "number": state.current_puzzle_index + 1,
            "total": state.puzzles.len(),
            "board": reveal(&word.text, &puzzle.revealed_letters, puzzle.solved),
            "theme": word.theme,
            "wrongLetters": puzzle.wrong_letters,
            "solved": puzzle.solved,
        },
        "solvedCount": state.solved_count(),
    })
}

fn state_json(state: &AppState) -> Result<Value> {
    Ok(serde_json::to_value(state)?)
}

/// Execute one command against the store and return what should be printed
pub async fn run<S: StateStorage>(store: &mut PersistentStore<S>, command: Command) -> Result<Value> {
    match &command {
        Command::Show => return state_json(store.state()),
        Command::Board => {
            let mut output = board(store.state());
            output["standings"] = serde_json::to_value(Scoreboard::standings(store.state()))?;
            output["leaders"] = serde_json::to_value(Scoreboard::leaders(store.state()))?;
            return Ok(output);
        }
        Command::Standings => {
            return Ok(serde_json::to_value(Scoreboard::standings(store.state()))?);
        }
        Command::Preview { word } => {
            let id = resolve_word(store.state(), word);
            let word = store
                .state()
                .word(&id)
                .ok_or_else(|| anyhow!("No such word: {}", word))?;
            return Ok(json!({ "preview": mask(&word.text), "theme": word.theme }));
        }
        Command::Export => return Ok(serde_json::to_value(export(store.state()))?),
        Command::Import { path } => {
            let raw = std::fs::read_to_string(path).map_err(|e| ImportError::Unreadable {
                reason: format!("{}: {}", path.display(), e),
            })?;
            let document = TabularDocument::from_json(&raw)?;
            store.import(&document).await?;
            info!("Imported {}", path.display());
            return state_json(store.state());
        }
        Command::Reset { yes: false } => bail!("Reset erases everything; pass --yes to confirm"),
        Command::Solve {
            phrase: Some(phrase),
        } => {
            let target = store
                .state()
                .current_word()
                .map(|w| w.text.clone())
                .ok_or_else(|| anyhow!("No puzzle in play"))?;
            if !is_phrase_match(phrase, &target) {
                return Ok(json!({ "solved": false, "board": board(store.state()) }));
            }
        }
        _ => {}
    }

    let Some(action) = to_action(store.state(), &command) else {
        bail!("No active set to start a game on");
    };
    if action.is_word_edit() && !store.state().game_status.allows_editing() {
        bail!("Sets and words are locked while a game is playing; end the game first");
    }
    let is_guess = matches!(action, Action::GuessLetter { .. });
    let outcome = store.dispatch(action).await;

    if is_guess {
        return Ok(json!({ "outcome": outcome, "board": board(store.state()) }));
    }
    state_json(store.state())
}
