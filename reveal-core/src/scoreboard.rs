use reveal_types::{AppState, Player};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub rank: u32,
    pub player: Player,
}

pub struct Scoreboard;

impl Scoreboard {
    /// Players by score, highest first. Ties share a rank and keep insertion order (1, 2, 2, 4).
    pub fn standings(state: &AppState) -> Vec<Standing> {
        let mut players: Vec<&Player> = state.players.iter().collect();
        // Stable sort keeps insertion order among equal scores
        players.sort_by(|a, b| b.score.cmp(&a.score));

        let mut standings: Vec<Standing> = Vec::with_capacity(players.len());
        for (index, player) in players.into_iter().enumerate() {
            let rank = match standings.last() {
                Some(prev) if prev.player.score == player.score => prev.rank,
                _ => (index + 1) as u32,
            };
            standings.push(Standing {
                rank,
                player: player.clone(),
            });
        }
        standings
    }

    /// Everyone tied for the top score
    pub fn leaders(state: &AppState) -> Vec<&Player> {
        let Some(top) = state.players.iter().map(|p| p.score).max() else {
            return Vec::new();
        };
        state.players.iter().filter(|p| p.score == top).collect()
    }
}
