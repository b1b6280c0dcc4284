//! Upgrades persisted data of any older or partial shape into a valid current `AppState`.
//!
//! Older saves come from the single word bank layout: words carried a `used` flag and
//! no `setId`, and puzzles had no `wrongLetters`. Unknown fields such as `used` are
//! ignored; the per-game puzzle list replaces cross-game usage tracking.

use anyhow::{Context, Result};
use reveal_types::{AppState, GameStatus, Player, PuzzleState, QuestionSet, WordEntry};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

use crate::ids::{new_id, now_millis};

pub const DEFAULT_SET_NAME: &str = "Default Set";
const UNTITLED_SET_NAME: &str = "Untitled Set";

// Every field is read on its own: a value of the wrong type becomes absent, and a
// collection entry that is not a record is skipped, so one bad field never costs the
// rest of the save.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PersistedState {
    #[serde(deserialize_with = "records")]
    players: Option<Vec<PersistedPlayer>>,
    #[serde(deserialize_with = "lenient")]
    active_player_id: Option<String>,
    #[serde(deserialize_with = "records")]
    sets: Option<Vec<PersistedSet>>,
    #[serde(deserialize_with = "records")]
    words: Option<Vec<PersistedWord>>,
    #[serde(deserialize_with = "lenient")]
    active_set_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    game_status: Option<String>,
    #[serde(deserialize_with = "integer")]
    current_puzzle_index: Option<i64>,
    #[serde(deserialize_with = "records")]
    puzzles: Option<Vec<PersistedPuzzle>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PersistedPlayer {
    #[serde(deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(deserialize_with = "integer")]
    score: Option<i64>,
    #[serde(deserialize_with = "integer")]
    created_at: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PersistedSet {
    #[serde(deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(deserialize_with = "integer")]
    created_at: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PersistedWord {
    #[serde(deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    theme: Option<String>,
    #[serde(deserialize_with = "lenient")]
    set_id: Option<String>,
    #[serde(deserialize_with = "integer")]
    order: Option<i64>,
    #[serde(deserialize_with = "integer")]
    created_at: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PersistedPuzzle {
    #[serde(deserialize_with = "lenient")]
    word_id: Option<String>,
    #[serde(deserialize_with = "records")]
    revealed_letters: Option<Vec<String>>,
    #[serde(deserialize_with = "records")]
    wrong_letters: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    solved: Option<bool>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Array entries that fail to read are dropped; a non-array is treated as absent
fn records<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| T::deserialize(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Integers, floats (rounded) and numeric strings
fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.round() as i64))
        }
        _ => None,
    };
    Ok(number)
}

/// Restore state from raw persisted text. Absent or unparseable input yields the default state.
pub fn restore(raw: Option<&str>) -> AppState {
    let Some(raw) = raw else {
        return AppState::default();
    };

    match parse_persisted(raw) {
        Ok(value) => migrate(&value),
        Err(e) => {
            warn!("Discarding unreadable persisted state: {:#}", e);
            AppState::default()
        }
    }
}

fn parse_persisted(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).context("persisted state is not valid JSON")
}

/// Produce a valid current-shape state from any persisted value. Idempotent.
pub fn migrate(value: &Value) -> AppState {
    if value.is_null() {
        return AppState::default();
    }

    let persisted = match PersistedState::deserialize(value) {
        Ok(persisted) => persisted,
        Err(e) => {
            warn!("Persisted state has an unexpected shape, starting fresh: {}", e);
            return AppState::default();
        }
    };

    let players = migrate_players(persisted.players.unwrap_or_default());
    let mut sets = migrate_sets(persisted.sets.unwrap_or_default());
    let mut active_set_id = persisted
        .active_set_id
        .filter(|id| sets.iter().any(|s| &s.id == id));

    let words = migrate_words(
        persisted.words.unwrap_or_default(),
        &mut sets,
        &mut active_set_id,
    );
    if active_set_id.is_none() {
        active_set_id = sets.first().map(|s| s.id.clone());
    }

    let puzzles: Vec<PuzzleState> = persisted
        .puzzles
        .unwrap_or_default()
        .into_iter()
        .filter_map(migrate_puzzle)
        .filter(|p| words.iter().any(|w| w.id == p.word_id))
        .collect();

    let mut game_status = persisted
        .game_status
        .as_deref()
        .and_then(GameStatus::parse)
        .unwrap_or_default();
    if game_status == GameStatus::Playing && puzzles.is_empty() {
        game_status = GameStatus::Setup;
    }

    let requested_index = persisted.current_puzzle_index.unwrap_or(0).max(0) as usize;
    let current_puzzle_index = requested_index.min(puzzles.len().saturating_sub(1));

    let active_player_id = persisted
        .active_player_id
        .filter(|id| players.iter().any(|p| &p.id == id));

    AppState {
        players,
        active_player_id,
        sets,
        words,
        active_set_id,
        game_status,
        current_puzzle_index,
        puzzles,
    }
}

fn migrate_players(players: Vec<PersistedPlayer>) -> Vec<Player> {
    players
        .into_iter()
        .filter_map(|p| {
            let name = p.name.filter(|n| !n.trim().is_empty())?;
            Some(Player {
                id: p.id.filter(|id| !id.is_empty()).unwrap_or_else(new_id),
                name,
                score: p
                    .score
                    .map_or(0, |s| s.clamp(i32::MIN as i64, i32::MAX as i64) as i32),
                created_at: p.created_at.unwrap_or(0),
            })
        })
        .collect()
}

fn migrate_sets(sets: Vec<PersistedSet>) -> Vec<QuestionSet> {
    sets.into_iter()
        .map(|s| QuestionSet {
            id: s.id.filter(|id| !id.is_empty()).unwrap_or_else(new_id),
            name: s
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| UNTITLED_SET_NAME.to_string()),
            created_at: s.created_at.unwrap_or(0),
        })
        .collect()
}

/// Words without a valid set land in the first set, or a synthesized default set
/// which then becomes active. Within a set the first claim on an `order` keeps it;
/// missing or repeated orders are appended after the set's highest one.
fn migrate_words(
    words: Vec<PersistedWord>,
    sets: &mut Vec<QuestionSet>,
    active_set_id: &mut Option<String>,
) -> Vec<WordEntry> {
    let mut migrated: Vec<WordEntry> = Vec::with_capacity(words.len());
    let mut requested: Vec<Option<i64>> = Vec::with_capacity(words.len());

    for word in words {
        let Some(text) = word.text.filter(|t| !t.trim().is_empty()) else {
            continue;
        };

        let set_id = match word.set_id.filter(|id| sets.iter().any(|s| &s.id == id)) {
            Some(id) => id,
            None => orphan_home(sets, active_set_id),
        };

        requested.push(word.order);
        migrated.push(WordEntry {
            id: word.id.filter(|id| !id.is_empty()).unwrap_or_else(new_id),
            text,
            theme: word.theme.unwrap_or_default(),
            set_id,
            order: 0,
            created_at: word.created_at.unwrap_or(0),
        });
    }

    let mut taken: BTreeMap<String, BTreeSet<i64>> = BTreeMap::new();
    let mut unplaced = Vec::new();
    for (word, order) in migrated.iter_mut().zip(requested) {
        let orders = taken.entry(word.set_id.clone()).or_default();
        match order {
            Some(order) if orders.insert(order) => word.order = order,
            _ => unplaced.push(word),
        }
    }
    for word in unplaced {
        let orders = taken.entry(word.set_id.clone()).or_default();
        let order = orders.last().map_or(1, |max| max + 1);
        orders.insert(order);
        word.order = order;
    }

    migrated
}

fn orphan_home(sets: &mut Vec<QuestionSet>, active_set_id: &mut Option<String>) -> String {
    if let Some(first) = sets.first() {
        return first.id.clone();
    }

    let set = QuestionSet {
        id: new_id(),
        name: DEFAULT_SET_NAME.to_string(),
        created_at: now_millis(),
    };
    *active_set_id = Some(set.id.clone());
    let id = set.id.clone();
    sets.push(set);
    id
}

fn migrate_puzzle(puzzle: PersistedPuzzle) -> Option<PuzzleState> {
    let word_id = puzzle.word_id.filter(|id| !id.is_empty())?;
    let revealed_letters = letters(puzzle.revealed_letters);
    let wrong_letters = letters(puzzle.wrong_letters)
        .difference(&revealed_letters)
        .copied()
        .collect();

    Some(PuzzleState {
        word_id,
        revealed_letters,
        wrong_letters,
        solved: puzzle.solved.unwrap_or(false),
    })
}

fn letters(raw: Option<Vec<String>>) -> BTreeSet<char> {
    raw.unwrap_or_default()
        .iter()
        .filter_map(|s| s.chars().next())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
