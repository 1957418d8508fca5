use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use log::{debug, info, warn};

use crate::league::errors::LeagueError;
use crate::league::team::Team;

const SAMPLE_TEAMS: [&str; 4] = ["Italy", "France", "India", "Nigeria"];
const SAMPLE_ROSTER_SIZE: usize = 5;
const SAMPLE_MATCHES: [(&str, u32, &str, u32); 6] = [
    ("Italy", 50, "France", 70),
    ("India", 85, "Nigeria", 80),
    ("Italy", 60, "India", 55),
    ("France", 100, "Nigeria", 110),
    ("Italy", 65, "Nigeria", 70),
    ("France", 95, "India", 80),
];

/// Result of a recorded match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Winner(String),
    Draw,
}

#[derive(Debug, Clone)]
pub struct League {
    name: String,
    teams: BTreeMap<String, Team>,
    wins: HashMap<String, u32>,
}

impl League {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            teams: BTreeMap::new(),
            wins: HashMap::new(),
        }
    }

    /// The four-team demonstration league with its six matches already played
    ///
    /// # Errors
    ///
    /// Only fails if the built-in fixtures reference an unregistered team.
    pub fn sample() -> Result<Self, LeagueError> {
        let mut league = Self::new("Big League");
        for name in SAMPLE_TEAMS {
            league.add_team(Team::with_numbered_players(name, SAMPLE_ROSTER_SIZE));
        }
        for (team1, score1, team2, score2) in SAMPLE_MATCHES {
            league.match_result(team1, score1, team2, score2)?;
        }
        Ok(league)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.get(name)
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Register a team, returning the one it replaced if the name was taken
    ///
    /// Win counts are keyed by name and survive a replacement.
    pub fn add_team(&mut self, team: Team) -> Option<Team> {
        debug!("Adding team '{}' to {}", team.name, self.name);
        let previous = self.teams.insert(team.name.clone(), team);
        if let Some(old) = &previous {
            warn!("Replaced existing team '{}'", old.name);
        }
        previous
    }

    pub fn wins(&self, name: &str) -> u32 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    /// Record a match between two registered teams
    ///
    /// The higher score earns a win. Equal scores are a draw and change
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTeam` if either team is not registered; no win is
    /// recorded in that case.
    pub fn match_result(
        &mut self,
        team1: &str,
        score1: u32,
        team2: &str,
        score2: u32,
    ) -> Result<MatchOutcome, LeagueError> {
        for name in [team1, team2] {
            if !self.teams.contains_key(name) {
                warn!("Ignoring match with unknown team '{}'", name);
                return Err(LeagueError::UnknownTeam(name.to_string()));
            }
        }

        if score1 == score2 {
            debug!("{} {} - {} {}: draw", team1, score1, score2, team2);
            return Ok(MatchOutcome::Draw);
        }

        let winner = if score1 > score2 { team1 } else { team2 };
        *self.wins.entry(winner.to_string()).or_insert(0) += 1;
        info!(
            "{} {} - {} {}: {} now has {} win(s)",
            team1,
            score1,
            score2,
            team2,
            winner,
            self.wins(winner)
        );
        Ok(MatchOutcome::Winner(winner.to_string()))
    }

    /// Team names ordered by wins, most first, ties by name
    pub fn ranking(&self) -> Vec<String> {
        // Teams iterate in name order and the sort is stable.
        let mut names: Vec<&String> = self.teams.keys().collect();
        names.sort_by_key(|name| Reverse(self.wins(name)));
        names.into_iter().cloned().collect()
    }
}
