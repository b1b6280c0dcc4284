use reveal_types::{AppState, GameStatus, ImportError, Player, QuestionSet, WordEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use crate::ids::{new_id, now_millis};

pub const PLAYERS_SHEET: &str = "Players";

const WORD_COLUMNS: &[&str] = &["Word/Phrase", "Word", "Phrase", "Text", "Answer"];
const THEME_COLUMNS: &[&str] = &["Theme", "Category", "Hint"];
const ORDER_COLUMNS: &[&str] = &["Order", "#", "Position"];
const NAME_COLUMNS: &[&str] = &["Name", "Player", "Player Name"];
const SCORE_COLUMNS: &[&str] = &["Score", "Points"];

/// A spreadsheet reduced to what the import cares about: named sheets of header → cell rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularDocument {
    pub sheets: Vec<Sheet>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl TabularDocument {
    pub fn from_json(raw: &str) -> Result<Self, ImportError> {
        serde_json::from_str(raw).map_err(|e| ImportError::Unreadable {
            reason: e.to_string(),
        })
    }
}

fn is_players_sheet(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case(PLAYERS_SHEET)
}

/// First non-empty cell whose header matches one of the synonyms, tried in order
fn cell<'a>(row: &'a BTreeMap<String, String>, synonyms: &[&str]) -> Option<&'a str> {
    synonyms.iter().find_map(|synonym| {
        row.iter()
            .find(|(header, _)| header.trim().eq_ignore_ascii_case(synonym))
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    })
}

fn parse_score(raw: &str) -> i32 {
    raw.parse::<i32>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.round() as i32))
        .unwrap_or(0)
}

fn import_players(sheet: &Sheet, players: &mut Vec<Player>) {
    for row in &sheet.rows {
        let Some(name) = cell(row, NAME_COLUMNS) else {
            continue;
        };
        players.push(Player {
            id: new_id(),
            name: name.to_string(),
            score: cell(row, SCORE_COLUMNS).map_or(0, parse_score),
            created_at: now_millis(),
        });
    }
}

fn import_set(sheet: &Sheet, sets: &mut Vec<QuestionSet>, words: &mut Vec<WordEntry>) {
    let mut rows: Vec<(i64, &str, &str)> = sheet
        .rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let text = cell(row, WORD_COLUMNS)?;
            let theme = cell(row, THEME_COLUMNS).unwrap_or("");
            let order = cell(row, ORDER_COLUMNS)
                .and_then(|o| o.parse::<i64>().ok())
                .unwrap_or(index as i64 + 1);
            Some((order, text, theme))
        })
        .collect();
    if rows.is_empty() {
        return;
    }
    rows.sort_by_key(|(order, _, _)| *order);

    let name = match sheet.name.trim() {
        "" => format!("Sheet {}", sets.len() + 1),
        name => name.to_string(),
    };
    let set = QuestionSet {
        id: new_id(),
        name,
        created_at: now_millis(),
    };

    for (position, (_, text, theme)) in rows.into_iter().enumerate() {
        words.push(WordEntry {
            id: new_id(),
            text: text.to_string(),
            theme: theme.to_string(),
            set_id: set.id.clone(),
            order: position as i64 + 1,
            created_at: now_millis(),
        });
    }
    sets.push(set);
}

/// Build the state that results from importing a document. Nothing is applied on error.
pub fn import(state: &AppState, document: &TabularDocument) -> Result<AppState, ImportError> {
    let mut players = Vec::new();
    let mut sets = Vec::new();
    let mut words = Vec::new();

    for sheet in &document.sheets {
        if is_players_sheet(&sheet.name) {
            import_players(sheet, &mut players);
        } else {
            import_set(sheet, &mut sets, &mut words);
        }
    }

    if players.is_empty() && words.is_empty() {
        return Err(ImportError::NoUsableRows);
    }

    info!(
        "Importing {} players, {} sets, {} words",
        players.len(),
        sets.len(),
        words.len()
    );

    let mut next = state.clone();
    if !words.is_empty() {
        next.active_set_id = sets.first().map(|s| s.id.clone());
        next.sets = sets;
        next.words = words;
        next.puzzles.clear();
        next.current_puzzle_index = 0;
        if next.game_status == GameStatus::Playing {
            next.game_status = GameStatus::Ended;
        }
    }
    if !players.is_empty() {
        next.players = players;
        next.active_player_id = None;
    }
    Ok(next)
}

/// One sheet per set plus a players sheet
pub fn export(state: &AppState) -> TabularDocument {
    let mut sheets: Vec<Sheet> = state
        .sets
        .iter()
        .map(|set| {
            let name = if is_players_sheet(&set.name) {
                format!("{} (set)", set.name.trim())
            } else {
                set.name.clone()
            };
            let rows = state
                .words_in_set(&set.id)
                .into_iter()
                .map(|word| {
                    BTreeMap::from([
                        ("Order".to_string(), word.order.to_string()),
                        ("Word/Phrase".to_string(), word.text.clone()),
                        ("Theme".to_string(), word.theme.clone()),
                    ])
                })
                .collect();
            Sheet { name, rows }
        })
        .collect();

    sheets.push(Sheet {
        name: PLAYERS_SHEET.to_string(),
        rows: state
            .players
            .iter()
            .map(|player| {
                BTreeMap::from([
                    ("Name".to_string(), player.name.clone()),
                    ("Score".to_string(), player.score.to_string()),
                ])
            })
            .collect(),
    });

    TabularDocument { sheets }
}
