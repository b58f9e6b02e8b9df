//! In-memory scoreboard: the authoritative roster, the saved-game history,
//! and the derived ranking views.

use std::time::SystemTime;

use indexmap::IndexMap;
use thiserror::Error;

/// A named participant with a mutable score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Display name, trimmed and unique case-insensitively among live teams.
    pub name: String,
    /// Current score. Deltas may drive it negative.
    pub score: i32,
}

/// One `{name, score}` line of a saved game, decoupled from the live roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    /// Team name at save time.
    pub name: String,
    /// Team score at save time.
    pub score: i32,
}

/// Immutable record of the ranking at the moment a game was saved.
#[derive(Debug, Clone)]
pub struct Game {
    /// Sequential display label ("Game 1", "Game 2", ...).
    pub label: String,
    /// Wall-clock save time, for display only.
    pub created_at: SystemTime,
    /// Ranked copies of every live team's name and score at save time.
    pub snapshot: Vec<SnapshotEntry>,
}

/// Failure kinds reported by scoreboard mutations.
///
/// All of these are recoverable operator mistakes; none leaves the board in
/// a partially mutated state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreboardError {
    /// The submitted team name was empty after trimming.
    #[error("team name must not be empty")]
    EmptyName,
    /// Another live team already uses this name (case-insensitive).
    #[error("a team named `{0}` already exists")]
    DuplicateName(String),
    /// No live team carries the given identifier.
    #[error("team `{0}` not found")]
    TeamNotFound(u32),
    /// A game cannot be saved from an empty roster.
    #[error("no teams to save")]
    NoTeams,
}

/// Authoritative scoreboard state.
///
/// Both maps keep insertion order: the teams map *is* the team-list view and
/// the tie-break order of the ranking, the games map *is* the history view.
/// Identifiers are never reused, even after a removal.
#[derive(Debug, Default)]
pub struct Scoreboard {
    teams: IndexMap<u32, Team>,
    games: IndexMap<u32, Game>,
    next_team_id: u32,
    next_game_id: u32,
}

impl Scoreboard {
    /// Create an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new team with a zeroed score and return it with its id.
    ///
    /// The name is trimmed before any check; rejection leaves the roster
    /// untouched.
    pub fn add_team(&mut self, name: &str) -> Result<(u32, Team), ScoreboardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScoreboardError::EmptyName);
        }

        let lowered = name.to_lowercase();
        if self
            .teams
            .values()
            .any(|team| team.name.to_lowercase() == lowered)
        {
            return Err(ScoreboardError::DuplicateName(name.to_owned()));
        }

        self.next_team_id += 1;
        let id = self.next_team_id;
        let team = Team {
            name: name.to_owned(),
            score: 0,
        };
        self.teams.insert(id, team.clone());
        Ok((id, team))
    }

    /// Apply a signed delta to a team's score and return the updated team.
    ///
    /// Any integer delta is accepted; the configured presets are a UI
    /// affordance, not a constraint here.
    pub fn adjust_score(&mut self, team_id: u32, delta: i32) -> Result<Team, ScoreboardError> {
        let team = self
            .teams
            .get_mut(&team_id)
            .ok_or(ScoreboardError::TeamNotFound(team_id))?;
        team.score += delta;
        Ok(team.clone())
    }

    /// Drop a team from the live roster.
    ///
    /// Removing an unknown id is a successful no-op, so the operation is
    /// idempotent; the return value reports whether anything was removed.
    /// Saved games are never touched.
    pub fn remove_team(&mut self, team_id: u32) -> bool {
        self.teams.shift_remove(&team_id).is_some()
    }

    /// Freeze the current ranking into a new game and return it with its id.
    pub fn save_game(&mut self) -> Result<(u32, Game), ScoreboardError> {
        if self.teams.is_empty() {
            return Err(ScoreboardError::NoTeams);
        }

        let snapshot = self
            .ranking()
            .into_iter()
            .map(|(_, team)| SnapshotEntry {
                name: team.name,
                score: team.score,
            })
            .collect();

        let game = Game {
            label: format!("Game {}", self.games.len() + 1),
            created_at: SystemTime::now(),
            snapshot,
        };

        self.next_game_id += 1;
        let id = self.next_game_id;
        self.games.insert(id, game.clone());
        Ok((id, game))
    }

    /// Live teams ordered by score descending.
    ///
    /// The sort is stable: teams with equal scores keep their roster
    /// (insertion) order. Recomputed on every call, never cached.
    pub fn ranking(&self) -> Vec<(u32, Team)> {
        let mut ranked: Vec<(u32, Team)> = self
            .teams
            .iter()
            .map(|(id, team)| (*id, team.clone()))
            .collect();
        ranked.sort_by_key(|(_, team)| std::cmp::Reverse(team.score));
        ranked
    }

    /// Live teams in creation order.
    pub fn teams(&self) -> &IndexMap<u32, Team> {
        &self.teams
    }

    /// Saved games in creation order.
    pub fn games(&self) -> &IndexMap<u32, Game> {
        &self.games
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(names: &[&str]) -> (Scoreboard, Vec<u32>) {
        let mut board = Scoreboard::new();
        let ids = names
            .iter()
            .map(|name| board.add_team(name).unwrap().0)
            .collect();
        (board, ids)
    }

    #[test]
    fn add_team_starts_at_zero() {
        let mut board = Scoreboard::new();
        let (id, team) = board.add_team("Red").unwrap();
        assert_eq!(id, 1);
        assert_eq!(team.name, "Red");
        assert_eq!(team.score, 0);
    }

    #[test]
    fn add_team_trims_whitespace() {
        let mut board = Scoreboard::new();
        let (_, team) = board.add_team("  Red  ").unwrap();
        assert_eq!(team.name, "Red");
    }

    #[test]
    fn blank_names_rejected() {
        let mut board = Scoreboard::new();
        assert_eq!(board.add_team(""), Err(ScoreboardError::EmptyName));
        assert_eq!(board.add_team("   "), Err(ScoreboardError::EmptyName));
        assert!(board.teams().is_empty());
    }

    #[test]
    fn duplicate_names_rejected_case_insensitively() {
        let (mut board, _) = board_with(&["Red"]);
        match board.add_team("rEd") {
            Err(ScoreboardError::DuplicateName(name)) => assert_eq!(name, "rEd"),
            other => panic!("expected duplicate rejection, got {other:?}"),
        }
        assert_eq!(board.teams().len(), 1);
    }

    #[test]
    fn adjust_score_unknown_team_changes_nothing() {
        let (mut board, ids) = board_with(&["Red", "Blue"]);
        board.adjust_score(ids[0], 10).unwrap();

        assert_eq!(board.adjust_score(99, 5), Err(ScoreboardError::TeamNotFound(99)));
        assert_eq!(board.teams()[&ids[0]].score, 10);
        assert_eq!(board.teams()[&ids[1]].score, 0);
    }

    #[test]
    fn scores_may_go_negative() {
        let (mut board, ids) = board_with(&["Red"]);
        let team = board.adjust_score(ids[0], -30).unwrap();
        assert_eq!(team.score, -30);
    }

    #[test]
    fn remove_team_is_idempotent() {
        let (mut board, ids) = board_with(&["Red", "Blue"]);

        assert!(board.remove_team(ids[0]));
        assert!(!board.teams().contains_key(&ids[0]));
        assert!(board.ranking().iter().all(|(id, _)| *id != ids[0]));

        // second removal of the same id is a quiet no-op
        assert!(!board.remove_team(ids[0]));
        assert_eq!(board.teams().len(), 1);
    }

    #[test]
    fn ranking_sorts_descending_and_keeps_roster_order_on_ties() {
        let (mut board, ids) = board_with(&["A", "B", "C", "D"]);
        board.adjust_score(ids[1], 20).unwrap();
        board.adjust_score(ids[3], 20).unwrap();

        let ranked: Vec<u32> = board.ranking().into_iter().map(|(id, _)| id).collect();
        // B and D tie at 20 and keep their relative roster order; so do A and C at 0.
        assert_eq!(ranked, vec![ids[1], ids[3], ids[0], ids[2]]);
    }

    #[test]
    fn save_game_requires_a_roster() {
        let mut board = Scoreboard::new();
        assert_eq!(
            board.save_game().map(|(id, _)| id),
            Err(ScoreboardError::NoTeams)
        );
        assert!(board.games().is_empty());
    }

    #[test]
    fn save_game_snapshots_the_ranking() {
        let (mut board, ids) = board_with(&["Red", "Blue"]);
        board.adjust_score(ids[0], 20).unwrap();
        board.adjust_score(ids[1], 10).unwrap();

        let (game_id, game) = board.save_game().unwrap();
        assert_eq!(game_id, 1);
        assert_eq!(game.label, "Game 1");
        assert_eq!(
            game.snapshot,
            vec![
                SnapshotEntry {
                    name: "Red".into(),
                    score: 20
                },
                SnapshotEntry {
                    name: "Blue".into(),
                    score: 10
                },
            ]
        );
    }

    #[test]
    fn snapshots_are_isolated_from_later_mutation() {
        let (mut board, ids) = board_with(&["Red", "Blue"]);
        board.adjust_score(ids[0], 20).unwrap();
        board.adjust_score(ids[1], 10).unwrap();
        board.save_game().unwrap();

        board.adjust_score(ids[0], -100).unwrap();

        // live ranking now has Blue on top of a negative Red
        let ranked = board.ranking();
        assert_eq!(ranked[0].1.name, "Blue");
        assert_eq!(ranked[1].1.score, -80);

        // the saved game still shows the pre-adjustment ranking
        let (_, game) = board.games().first().unwrap();
        assert_eq!(game.snapshot[0].name, "Red");
        assert_eq!(game.snapshot[0].score, 20);
        assert_eq!(game.snapshot[1].score, 10);
    }

    #[test]
    fn labels_follow_save_count_across_roster_changes() {
        let (mut board, ids) = board_with(&["Red", "Blue"]);
        let (_, first) = board.save_game().unwrap();

        board.remove_team(ids[0]);
        board.add_team("Green").unwrap();
        let (_, second) = board.save_game().unwrap();

        assert_eq!(first.label, "Game 1");
        assert_eq!(second.label, "Game 2");
    }

    #[test]
    fn removed_name_is_reusable_with_a_fresh_id() {
        let mut board = Scoreboard::new();
        let (first_id, _) = board.add_team("Green").unwrap();
        board.remove_team(first_id);

        let (second_id, _) = board.add_team("Green").unwrap();
        assert_ne!(first_id, second_id);
        assert!(second_id > first_id);
    }
}
