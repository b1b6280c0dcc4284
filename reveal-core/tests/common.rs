#![allow(dead_code)]

use reveal_core::{StoreEvent, StoreEventHandler, add_player, add_word, create_set, start_game};
use reveal_types::{AppState, PlayerId, SetId, WordId};
use std::sync::{Arc, Mutex};

/// Creates a state with one set holding the given words, in order
pub fn create_state_with_set(name: &str, words: &[&str]) -> AppState {
    let state = create_set(&AppState::default(), name);
    add_words(state, words)
}

/// Adds a new set, selects it and fills it with words
pub fn add_set_with_words(state: &AppState, name: &str, words: &[&str]) -> AppState {
    let state = create_set(state, name);
    let set_id = state.sets.last().unwrap().id.clone();
    let state = reveal_core::select_set(&state, &set_id);
    add_words(state, words)
}

fn add_words(mut state: AppState, words: &[&str]) -> AppState {
    for word in words {
        state = add_word(&state, word, "");
    }
    state
}

/// Creates a state with the named players, all at score 0
pub fn create_state_with_players(names: &[&str]) -> AppState {
    names
        .iter()
        .fold(AppState::default(), |state, name| add_player(&state, name))
}

/// Creates a game already in progress over the given words
pub fn create_playing_state(words: &[&str]) -> AppState {
    let state = create_state_with_set("Game", words);
    let set_id = first_set_id(&state);
    start_game(&state, &set_id)
}

pub fn first_set_id(state: &AppState) -> SetId {
    state.sets[0].id.clone()
}

pub fn set_id_by_name(state: &AppState, name: &str) -> SetId {
    state
        .sets
        .iter()
        .find(|s| s.name == name)
        .map(|s| s.id.clone())
        .unwrap_or_else(|| panic!("no set named {}", name))
}

pub fn word_id_by_text(state: &AppState, text: &str) -> WordId {
    state
        .words
        .iter()
        .find(|w| w.text == text)
        .map(|w| w.id.clone())
        .unwrap_or_else(|| panic!("no word {}", text))
}

pub fn player_id_by_name(state: &AppState, name: &str) -> PlayerId {
    state
        .players
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.id.clone())
        .unwrap_or_else(|| panic!("no player {}", name))
}

/// Panics if two words of one set share an `order` key
pub fn assert_unique_orders(state: &AppState) {
    let mut seen = std::collections::BTreeSet::new();
    for word in &state.words {
        assert!(
            seen.insert((word.set_id.clone(), word.order)),
            "duplicate order {} in set {}",
            word.order,
            word.set_id
        );
    }
}

/// Texts of a set's words in play order
pub fn texts_in_set(state: &AppState, set_id: &str) -> Vec<String> {
    state
        .words_in_set(set_id)
        .iter()
        .map(|w| w.text.clone())
        .collect()
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<StoreEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<StoreEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_event(&self) -> Option<StoreEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl StoreEventHandler for EventCollector {
    fn handle_event(&mut self, event: StoreEvent) {
        self.events.lock().unwrap().push(event);
    }
}
