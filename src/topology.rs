//! Which teams play each other.

use std::collections::{BTreeMap, HashMap};

use crate::error::TopologyError;

/// Fixed game number → two contesting teams.
#[derive(Debug, Clone, PartialEq)]
pub struct GameTopology {
    games: BTreeMap<u32, [String; 2]>,
    // reverse index, rebuilt on construction
    team_game: HashMap<String, u32>,
}

impl GameTopology {
    /// Build a topology, rejecting any team that appears twice.
    pub fn new<I, S>(games: I) -> Result<Self, TopologyError>
    where
        I: IntoIterator<Item = (u32, [S; 2])>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        let mut seen: HashMap<String, u32> = HashMap::new();

        for (game, [a, b]) in games {
            let pair = [a.into(), b.into()];
            if pair[0] == pair[1] {
                return Err(TopologyError::DuplicateInGame {
                    game,
                    team: pair[0].clone(),
                });
            }
            if map.contains_key(&game) {
                return Err(TopologyError::DuplicateGame(game));
            }
            for team in &pair {
                if let Some(&first) = seen.get(team) {
                    return Err(TopologyError::TeamInTwoGames {
                        team: team.clone(),
                        first,
                        second: game,
                    });
                }
                seen.insert(team.clone(), game);
            }
            map.insert(game, pair);
        }

        Ok(Self::indexed(map))
    }

    /// `n` games named `team1`..`team{2n}`, game k holding `team{2k-1}` and `team{2k}`.
    pub fn sequential(n: u32) -> Self {
        // generated ids are distinct, so validation is skipped
        let games = (1..=n)
            .map(|g| (g, [format!("team{}", 2 * g - 1), format!("team{}", 2 * g)]))
            .collect();
        Self::indexed(games)
    }

    fn indexed(games: BTreeMap<u32, [String; 2]>) -> Self {
        let team_game = games
            .iter()
            .flat_map(|(&game, pair)| pair.iter().map(move |t| (t.clone(), game)))
            .collect();
        Self { games, team_game }
    }

    pub fn game_of(&self, team_id: &str) -> Option<u32> {
        self.team_game.get(team_id).copied()
    }

    pub fn teams_in(&self, game: u32) -> Option<&[String; 2]> {
        self.games.get(&game)
    }

    /// The other team in `team_id`'s game.
    pub fn game_mate(&self, team_id: &str) -> Option<&str> {
        let game = self.game_of(team_id)?;
        self.teams_in(game)?
            .iter()
            .find(|t| t.as_str() != team_id)
            .map(String::as_str)
    }

    pub fn contains(&self, team_id: &str) -> bool {
        self.team_game.contains_key(team_id)
    }

    /// Game numbers in ascending order.
    pub fn games(&self) -> impl Iterator<Item = u32> + '_ {
        self.games.keys().copied()
    }

    /// Every team, game by game, in listed order.
    pub fn team_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.games.values().flat_map(|pair| pair.iter().map(String::as_str))
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }
}

impl Default for GameTopology {
    fn default() -> Self {
        Self::sequential(crate::config::DEFAULT_GAME_COUNT)
    }
}
