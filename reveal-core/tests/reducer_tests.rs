mod common;

use common::*;
use reveal_core::*;
use reveal_types::{AppState, GameStatus, GuessOutcome, MoveDirection};

#[test]
fn test_add_remove_and_adjust_players() {
    let state = create_state_with_players(&["Alice", "Bob"]);
    assert_eq!(state.players.len(), 2);
    assert!(state.players.iter().all(|p| p.score == 0));
    assert_ne!(state.players[0].id, state.players[1].id);

    let alice = player_id_by_name(&state, "Alice");
    let state = adjust_score(&state, &alice, -5);
    let state = adjust_score(&state, &alice, 2);
    assert_eq!(state.player(&alice).unwrap().score, -3);

    let state = remove_player(&state, &alice);
    assert_eq!(state.players.len(), 1);
    assert_eq!(state.players[0].name, "Bob");

    // Unknown ids are absorbed
    assert_eq!(adjust_score(&state, "nobody", 10), state);
    assert_eq!(remove_player(&state, "nobody"), state);
}

#[test]
fn test_select_and_remove_active_player() {
    let state = create_state_with_players(&["Alice", "Bob"]);
    let bob = player_id_by_name(&state, "Bob");

    let state = select_player(&state, &bob);
    assert_eq!(state.active_player_id.as_deref(), Some(bob.as_str()));
    assert_eq!(select_player(&state, "ghost"), state);

    let state = remove_player(&state, &bob);
    assert_eq!(state.active_player_id, None);
}

#[test]
fn test_rename_player_and_set() {
    let state = create_state_with_players(&["Alice"]);
    let alice = player_id_by_name(&state, "Alice");
    let state = rename_player(&state, &alice, "  Alicia ");
    assert_eq!(state.players[0].name, "Alicia");
    assert_eq!(rename_player(&state, &alice, " "), state);

    let state = create_set(&state, "Old");
    let set_id = first_set_id(&state);
    let state = rename_set(&state, &set_id, "New");
    assert_eq!(state.sets[0].name, "New");
}

#[test]
fn test_first_set_becomes_active() {
    let state = create_set(&AppState::default(), "One");
    let one = first_set_id(&state);
    assert_eq!(state.active_set_id.as_deref(), Some(one.as_str()));

    let state = create_set(&state, "Two");
    assert_eq!(state.sets.len(), 2);
    assert_eq!(state.active_set_id.as_deref(), Some(one.as_str()));
}

#[test]
fn test_select_set_does_not_validate() {
    let state = create_set(&AppState::default(), "One");
    let state = select_set(&state, "not-a-set");
    assert_eq!(state.active_set_id.as_deref(), Some("not-a-set"));

    // No active set to add into, so the word is dropped
    assert_eq!(add_word(&state, "CAT", "").words.len(), 0);
}

#[test]
fn test_delete_set_cascades_words() {
    let state = create_state_with_set("Animals", &["CAT", "DOG", "EEL"]);
    let state = add_set_with_words(&state, "Food", &["PIE", "JAM"]);
    let animals = set_id_by_name(&state, "Animals");
    let food = set_id_by_name(&state, "Food");
    let state = select_set(&state, &animals);

    let state = delete_set(&state, &animals);
    assert_eq!(state.words.len(), 2);
    assert!(state.words.iter().all(|w| w.set_id == food));
    assert_eq!(texts_in_set(&state, &food), vec!["PIE", "JAM"]);
    assert_eq!(state.active_set_id.as_deref(), Some(food.as_str()));

    let state = delete_set(&state, &food);
    assert!(state.words.is_empty());
    assert!(state.sets.is_empty());
    assert_eq!(state.active_set_id, None);
}

#[test]
fn test_delete_inactive_set_keeps_active() {
    let state = create_state_with_set("Animals", &["CAT"]);
    let state = add_set_with_words(&state, "Food", &["PIE"]);
    let animals = set_id_by_name(&state, "Animals");
    let food = set_id_by_name(&state, "Food");

    let state = delete_set(&state, &animals);
    assert_eq!(state.active_set_id.as_deref(), Some(food.as_str()));
    assert_eq!(delete_set(&state, "missing"), state);
}

#[test]
fn test_delete_word_ignores_set_membership() {
    let state = create_state_with_set("Animals", &["CAT"]);
    let state = add_set_with_words(&state, "Food", &["PIE"]);
    let cat = word_id_by_text(&state, "CAT");

    // The active set is Food, but CAT still goes
    let state = delete_word(&state, &cat);
    assert_eq!(state.words.len(), 1);
    assert_eq!(state.words[0].text, "PIE");
}

#[test]
fn test_edit_word() {
    let state = create_state_with_set("Animals", &["CAT"]);
    let cat = word_id_by_text(&state, "CAT");
    let state = edit_word(&state, &cat, " LION ", " big cats ");
    let word = state.word(&cat).unwrap();
    assert_eq!(word.text, "LION");
    assert_eq!(word.theme, "big cats");
    assert_eq!(word.order, 1);
}

#[test]
fn test_move_word_swaps_orders() {
    let mut state = create_state_with_set("Animals", &["CAT", "DOG", "EEL"]);
    // Gaps in the order keys must survive a move
    state.words[0].order = 10;
    state.words[1].order = 20;
    state.words[2].order = 35;
    let set_id = first_set_id(&state);
    let eel = word_id_by_text(&state, "EEL");

    let state = move_word(&state, &eel, MoveDirection::Up);
    assert_eq!(texts_in_set(&state, &set_id), vec!["CAT", "EEL", "DOG"]);
    assert_eq!(state.word(&eel).unwrap().order, 20);
    assert_eq!(state.word(&word_id_by_text(&state, "DOG")).unwrap().order, 35);
    assert_eq!(state.word(&word_id_by_text(&state, "CAT")).unwrap().order, 10);

    let state = move_word(&state, &eel, MoveDirection::Down);
    assert_eq!(texts_in_set(&state, &set_id), vec!["CAT", "DOG", "EEL"]);
}

#[test]
fn test_move_word_at_boundary_is_noop() {
    let state = create_state_with_set("Animals", &["CAT", "DOG"]);
    let cat = word_id_by_text(&state, "CAT");
    let dog = word_id_by_text(&state, "DOG");

    assert_eq!(move_word(&state, &cat, MoveDirection::Up), state);
    assert_eq!(move_word(&state, &dog, MoveDirection::Down), state);
    assert_eq!(move_word(&state, "missing", MoveDirection::Up), state);
}

#[test]
fn test_move_word_stays_within_its_set() {
    let state = create_state_with_set("Animals", &["CAT", "DOG"]);
    let state = add_set_with_words(&state, "Food", &["PIE", "JAM"]);
    let pie = word_id_by_text(&state, "PIE");
    let animals = set_id_by_name(&state, "Animals");

    // PIE is first in Food even though Animals words share the same order keys
    assert_eq!(move_word(&state, &pie, MoveDirection::Up), state);

    let state = move_word(&state, &pie, MoveDirection::Down);
    assert_eq!(texts_in_set(&state, &set_id_by_name(&state, "Food")), vec!["JAM", "PIE"]);
    assert_eq!(texts_in_set(&state, &animals), vec!["CAT", "DOG"]);
}

#[test]
fn test_start_game_builds_fresh_puzzles_in_order() {
    let mut state = create_state_with_set("Animals", &["DOG", "CAT"]);
    state.words[0].order = 2;
    state.words[1].order = 1;
    let set_id = first_set_id(&state);

    let state = start_game(&state, &set_id);
    assert_eq!(state.game_status, GameStatus::Playing);
    assert_eq!(state.current_puzzle_index, 0);
    assert_eq!(state.active_set_id.as_deref(), Some(set_id.as_str()));
    assert_eq!(state.puzzles.len(), 2);
    assert_eq!(state.puzzles[0].word_id, word_id_by_text(&state, "CAT"));
    assert_eq!(state.puzzles[1].word_id, word_id_by_text(&state, "DOG"));
    for puzzle in &state.puzzles {
        assert!(puzzle.revealed_letters.is_empty());
        assert!(puzzle.wrong_letters.is_empty());
        assert!(!puzzle.solved);
    }
}

#[test]
fn test_start_game_on_empty_or_missing_set_is_noop() {
    let state = create_state_with_set("Empty", &[]);
    let set_id = first_set_id(&state);
    assert_eq!(start_game(&state, &set_id), state);
    assert_eq!(start_game(&state, "missing"), state);
}

#[test]
fn test_start_game_sets_active_set() {
    let state = create_state_with_set("Animals", &["CAT"]);
    let state = add_set_with_words(&state, "Food", &["PIE"]);
    let animals = set_id_by_name(&state, "Animals");
    assert_ne!(state.active_set_id.as_deref(), Some(animals.as_str()));

    let state = start_game(&state, &animals);
    assert_eq!(state.active_set_id.as_deref(), Some(animals.as_str()));
    assert_eq!(state.puzzles.len(), 1);
}

#[test]
fn test_start_game_while_playing_is_noop() {
    let state = create_playing_state(&["CAT", "DOG"]);
    let state = next_puzzle(&state);
    let set_id = first_set_id(&state);
    assert_eq!(start_game(&state, &set_id), state);
}

#[test]
fn test_guess_correct_letter() {
    let state = create_playing_state(&["CAT"]);

    let (state, outcome) = guess_letter(&state, 't');
    assert_eq!(
        outcome,
        Some(GuessOutcome {
            correct: true,
            positions: vec![2]
        })
    );
    assert!(state.puzzles[0].revealed_letters.contains(&'t'));

    // Repeating is a no-op that reports the same result
    let (again, repeat) = guess_letter(&state, 't');
    assert_eq!(again, state);
    assert_eq!(repeat, outcome);
    assert_eq!(again.puzzles[0].revealed_letters.len(), 1);
}

#[test]
fn test_guess_wrong_letter() {
    let state = create_playing_state(&["CAT"]);

    let (state, outcome) = guess_letter(&state, 'z');
    assert_eq!(outcome, Some(GuessOutcome::miss()));
    assert!(state.puzzles[0].wrong_letters.contains(&'z'));
    assert!(state.puzzles[0].revealed_letters.is_empty());

    let (again, repeat) = guess_letter(&state, 'Z');
    assert_eq!(again, state);
    assert_eq!(repeat, Some(GuessOutcome::miss()));
}

#[test]
fn test_guess_is_case_insensitive_and_counts_all_characters() {
    let state = create_playing_state(&["It's a Dog"]);

    let (state, outcome) = guess_letter(&state, 'S');
    assert_eq!(outcome.unwrap().positions, vec![3]);
    assert!(state.puzzles[0].revealed_letters.contains(&'s'));

    let (_, outcome) = guess_letter(&state, 'd');
    assert_eq!(outcome.unwrap().positions, vec![7]);
}

#[test]
fn test_guess_acts_on_current_puzzle_only() {
    let state = create_playing_state(&["CAT", "DOG"]);
    let state = next_puzzle(&state);

    let (state, outcome) = guess_letter(&state, 'o');
    assert_eq!(outcome.unwrap().positions, vec![1]);
    assert!(state.puzzles[0].revealed_letters.is_empty());
    assert!(state.puzzles[1].revealed_letters.contains(&'o'));
}

#[test]
fn test_guess_without_game_or_on_solved_puzzle_is_noop() {
    let state = create_state_with_set("Animals", &["CAT"]);
    let (next, outcome) = guess_letter(&state, 'c');
    assert_eq!(next, state);
    assert_eq!(outcome, None);

    let state = solve_puzzle(&create_playing_state(&["CAT"]));
    assert!(state.puzzles[0].solved);
    let (next, outcome) = guess_letter(&state, 'c');
    assert_eq!(next, state);
    assert_eq!(outcome, None);
}

#[test]
fn test_solve_puzzle() {
    let state = create_playing_state(&["CAT", "DOG"]);
    let state = solve_puzzle(&state);
    assert!(state.puzzles[0].solved);
    assert!(!state.puzzles[1].solved);

    // Already solved
    assert_eq!(solve_puzzle(&state), state);

    // No game running
    let idle = AppState::default();
    assert_eq!(solve_puzzle(&idle), idle);
}

#[test]
fn test_phrase_check_before_solve() {
    let state = create_playing_state(&["Don't Stop"]);
    let target = state.current_word().unwrap().text.clone();

    assert!(!is_phrase_match("do stop", &target));
    assert!(is_phrase_match("dont stop", &target));
    let state = solve_puzzle(&state);
    assert_eq!(state.solved_count(), 1);
}

#[test]
fn test_end_game_keeps_scores() {
    let state = create_state_with_players(&["Alice", "Bob"]);
    let alice = player_id_by_name(&state, "Alice");
    let state = adjust_score(&state, &alice, 7);
    let state = add_set_with_words(&state, "Five", &["A", "B", "C", "D", "E"]);
    let set_id = set_id_by_name(&state, "Five");
    let state = start_game(&state, &set_id);

    let state = solve_puzzle(&state);
    let state = next_puzzle(&state);
    let state = solve_puzzle(&state);
    let state = next_puzzle(&state);
    assert_eq!(state.solved_count(), 2);
    assert_eq!(state.current_puzzle_index, 2);

    let players_before = state.players.clone();
    let state = end_game(&state);
    assert_eq!(state.game_status, GameStatus::Ended);
    assert!(state.puzzles.is_empty());
    assert_eq!(state.current_puzzle_index, 0);
    assert_eq!(state.players, players_before);
    assert_eq!(state.words.len(), 5);
}

#[test]
fn test_words_replay_after_new_game() {
    let state = create_playing_state(&["CAT"]);
    let (state, _) = guess_letter(&state, 'c');
    let state = solve_puzzle(&state);
    let state = end_game(&state);

    let set_id = first_set_id(&state);
    let state = start_game(&state, &set_id);
    assert_eq!(state.game_status, GameStatus::Playing);
    assert!(!state.puzzles[0].solved);
    assert!(state.puzzles[0].revealed_letters.is_empty());
}

#[test]
fn test_reset_all() {
    let state = create_playing_state(&["CAT"]);
    let state = add_player(&state, "Alice");
    assert_eq!(reset_all(), AppState::default());
    assert_ne!(state, reset_all());
}

#[test]
fn test_orders_stay_unique_through_edits() {
    let state = create_state_with_set("Animals", &["CAT", "DOG", "EMU"]);
    let state = add_set_with_words(&state, "Food", &["PIE", "TEA"]);
    assert_unique_orders(&state);

    let dog = word_id_by_text(&state, "DOG");
    let state = move_word(&state, &dog, MoveDirection::Up);
    let state = delete_word(&state, &word_id_by_text(&state, "CAT"));
    let state = select_set(&state, &set_id_by_name(&state, "Animals"));
    let state = add_word(&state, "FOX", "");
    let state = move_word(&state, &word_id_by_text(&state, "FOX"), MoveDirection::Up);
    assert_unique_orders(&state);

    let animals = set_id_by_name(&state, "Animals");
    assert_eq!(texts_in_set(&state, &animals), vec!["DOG", "FOX", "EMU"]);
}
