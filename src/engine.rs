//! Selection state machine and parlay arithmetic.
//!
//! The engine owns the ordered list of picks and answers three questions for
//! the front end: can this team be clicked, what changed after a click, and
//! what does the finished parlay pay.

use std::rc::Rc;

use crate::config::{LockPolicy, SlipConfig};
use crate::console;
use crate::display::{self, PickDetail};
use crate::error::{Result, SlipError};
use crate::table::{RowTable, TeamRecord};

/// What a successful `select` did.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    Selected,
    /// The slip just reached its leg count; `calculate` will now succeed
    /// if the table has every pick.
    ReadyToCalculate,
    AlreadySelected,
    /// Swap policy only: the previous pick for that game was replaced.
    Swapped { replaced: String },
}

/// How a team's button should look right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eligibility {
    Selected,
    Open,
    /// Game-mate of a pick; clicking swaps it in (swap policy).
    Swap,
    /// Game-mate of a pick; locked.
    GameTaken,
    /// Slip is full.
    Locked,
}

impl Eligibility {
    pub fn is_clickable(self) -> bool {
        matches!(self, Self::Selected | Self::Open | Self::Swap)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Open => "",
            Self::Swap => "swap",
            Self::GameTaken | Self::Locked => "disabled",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParlayLeg {
    pub game: u32,
    pub team_id: String,
    pub team_name: String,
    /// Implied probability as a percentage.
    pub win_chance_pct: f64,
    pub profit: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParlayResult {
    pub implied_probability_pct: f64,
    pub book_probability_pct: f64,
    pub wager_payout: f64,
    pub stake: f64,
    pub legs: Vec<ParlayLeg>,
}

/// A current pick, with its record if the table has one.
#[derive(Clone, Debug, PartialEq)]
pub struct Pick<'a> {
    pub team_id: &'a str,
    pub game: u32,
    pub record: Option<&'a TeamRecord>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionEngine {
    table: Rc<RowTable>,
    config: SlipConfig,
    selected: Vec<String>,
}

impl SelectionEngine {
    pub fn new(table: Rc<RowTable>, config: SlipConfig) -> Self {
        Self {
            table,
            config,
            selected: Vec::new(),
        }
    }

    /// Engine over an empty table, for use before the feed has loaded.
    pub fn unloaded(config: SlipConfig) -> Self {
        Self::new(Rc::new(RowTable::empty()), config)
    }

    pub fn config(&self) -> &SlipConfig {
        &self.config
    }

    pub fn table(&self) -> &RowTable {
        &self.table
    }

    /// Swap in a freshly loaded table. Picks are kept.
    pub fn replace_table(&mut self, table: Rc<RowTable>) {
        self.table = table;
    }

    pub fn set_stake(&mut self, stake: f64) {
        self.config = self.config.clone().with_stake(stake);
    }

    pub fn set_lock_policy(&mut self, policy: LockPolicy) {
        self.config.lock_policy = policy;
    }

    /// Picks in the order they were made.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() >= self.config.max_selections
    }

    /// Exactly the configured leg count, which is what `calculate` requires.
    pub fn is_ready(&self) -> bool {
        self.selected.len() == self.config.max_selections
    }

    pub fn is_selected(&self, team_id: &str) -> bool {
        self.selected.iter().any(|t| t == team_id)
    }

    pub fn select(&mut self, team_id: &str) -> Result<SelectOutcome> {
        if self.is_selected(team_id) {
            return Ok(SelectOutcome::AlreadySelected);
        }
        let topology = &self.config.topology;
        let game = topology
            .game_of(team_id)
            .ok_or_else(|| SlipError::UnknownTeam(team_id.to_string()))?;
        let held = self.position_in_game(game);

        if let (Some(pos), LockPolicy::AllowSwap) = (held, self.config.lock_policy) {
            let replaced = std::mem::replace(&mut self.selected[pos], team_id.to_string());
            console::info(&format!("Swapped {replaced} for {team_id} in game {game}"));
            return Ok(SelectOutcome::Swapped { replaced });
        }

        if self.is_full() {
            return Err(SlipError::AlreadyFull {
                team: team_id.to_string(),
                max: self.config.max_selections,
            });
        }
        if let Some(pos) = held {
            return Err(SlipError::GameAlreadyTaken {
                team: team_id.to_string(),
                game,
                held_by: self.selected[pos].clone(),
            });
        }

        self.selected.push(team_id.to_string());
        console::info(&format!("Currently selected teams: {:?}", self.selected));
        if self.is_full() {
            Ok(SelectOutcome::ReadyToCalculate)
        } else {
            Ok(SelectOutcome::Selected)
        }
    }

    /// Returns whether the team was selected.
    pub fn deselect(&mut self, team_id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|t| t != team_id);
        let removed = self.selected.len() != before;
        if removed {
            console::info(&format!("Currently selected teams: {:?}", self.selected));
        }
        removed
    }

    /// Click handler semantics: deselect a pick, select anything else.
    pub fn toggle(&mut self, team_id: &str) -> Result<Option<SelectOutcome>> {
        if self.deselect(team_id) {
            return Ok(None);
        }
        self.select(team_id).map(Some)
    }

    pub fn reset(&mut self) {
        self.selected.clear();
        console::info("All selections reset");
    }

    /// `None` for teams outside the topology.
    pub fn eligibility_of(&self, team_id: &str) -> Option<Eligibility> {
        let topology = &self.config.topology;
        if !topology.contains(team_id) {
            return None;
        }
        if self.is_selected(team_id) {
            return Some(Eligibility::Selected);
        }
        let mate_taken = topology
            .game_mate(team_id)
            .is_some_and(|mate| self.is_selected(mate));
        let state = if mate_taken {
            match self.config.lock_policy {
                LockPolicy::AllowSwap => Eligibility::Swap,
                LockPolicy::LockOnComplete => Eligibility::GameTaken,
            }
        } else if self.is_full() {
            Eligibility::Locked
        } else {
            Eligibility::Open
        };
        Some(state)
    }

    /// Whether clicking the team's button does anything.
    pub fn is_selectable(&self, team_id: &str) -> bool {
        self.eligibility_of(team_id)
            .is_some_and(Eligibility::is_clickable)
    }

    /// Every team on the board, game by game.
    pub fn eligibility(&self) -> Vec<(String, Eligibility)> {
        self.config
            .topology
            .team_ids()
            .filter_map(|id| Some((id.to_string(), self.eligibility_of(id)?)))
            .collect()
    }

    pub fn picks(&self) -> Vec<Pick<'_>> {
        self.selected
            .iter()
            .map(|id| Pick {
                team_id: id,
                game: self.config.topology.game_of(id).unwrap_or_default(),
                record: self.table.lookup(id),
            })
            .collect()
    }

    /// Dropdown data for each pick, placeholders where the table has no row.
    pub fn pick_details(&self) -> Vec<PickDetail> {
        self.picks()
            .iter()
            .map(|pick| display::pick_detail(pick, self.config.display_fields))
            .collect()
    }

    pub fn calculate(&self) -> Result<ParlayResult> {
        let required = self.config.max_selections;
        if !self.is_ready() {
            return Err(SlipError::IncompleteSelection {
                selected: self.selected.len(),
                required,
            });
        }

        let records = self
            .selected
            .iter()
            .map(|id| {
                self.table
                    .lookup(id)
                    .ok_or_else(|| SlipError::MissingTeamData(id.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        let implied: f64 = records.iter().map(|r| r.implied_probability).product();
        let book: f64 = records.iter().map(|r| r.book_probability).product();
        let factor: f64 = records.iter().map(|r| r.per_dollar_wager_factor).product();
        let stake = self.config.stake;

        let legs = records
            .iter()
            .map(|r| ParlayLeg {
                game: self.config.topology.game_of(&r.team_id).unwrap_or_default(),
                team_id: r.team_id.clone(),
                team_name: r.team_name.clone(),
                win_chance_pct: r.implied_probability * 100.0,
                profit: r.profit,
            })
            .collect();

        Ok(ParlayResult {
            implied_probability_pct: implied * 100.0,
            book_probability_pct: book * 100.0,
            wager_payout: stake * factor,
            stake,
            legs,
        })
    }

    fn position_in_game(&self, game: u32) -> Option<usize> {
        let topology = &self.config.topology;
        self.selected
            .iter()
            .position(|t| topology.game_of(t) == Some(game))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::GameTopology;

    fn record(id: &str, implied: f64, book: f64, factor: f64) -> TeamRecord {
        TeamRecord {
            team_id: id.to_string(),
            team_name: format!("{id} name"),
            implied_probability: implied,
            book_probability: book,
            moneyline: "+100".to_string(),
            profit: 100.0,
            per_dollar_wager_factor: factor,
            is_favored: false,
        }
    }

    fn engine() -> SelectionEngine {
        let table = RowTable::from_records([
            record("team1", 0.55, 0.50, 0.9),
            record("team3", 0.60, 0.55, 0.85),
            record("team5", 0.65, 0.60, 0.80),
        ]);
        SelectionEngine::new(Rc::new(table), SlipConfig::default())
    }

    #[test]
    fn test_select_until_ready() {
        let mut e = engine();
        assert_eq!(e.select("team1"), Ok(SelectOutcome::Selected));
        assert_eq!(e.select("team3"), Ok(SelectOutcome::Selected));
        assert_eq!(e.select("team5"), Ok(SelectOutcome::ReadyToCalculate));
        assert_eq!(e.selected(), ["team1", "team3", "team5"]);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut e = engine();
        e.select("team1").unwrap();
        assert_eq!(e.select("team1"), Ok(SelectOutcome::AlreadySelected));
        assert_eq!(e.len(), 1);
    }

    #[test]
    fn test_unknown_team() {
        let mut e = engine();
        assert_eq!(
            e.select("team42"),
            Err(SlipError::UnknownTeam("team42".into()))
        );
        assert!(!e.is_selectable("team42"));
    }

    #[test]
    fn test_already_full() {
        let mut e = engine();
        for t in ["team1", "team3", "team5"] {
            e.select(t).unwrap();
        }
        assert_eq!(
            e.select("team7"),
            Err(SlipError::AlreadyFull {
                team: "team7".into(),
                max: 3
            })
        );
        assert_eq!(e.len(), 3);
    }

    #[test]
    fn test_full_slip_locks_everything_else() {
        let mut e = engine();
        for t in ["team1", "team3", "team5"] {
            e.select(t).unwrap();
        }
        assert_eq!(e.eligibility_of("team2"), Some(Eligibility::GameTaken));
        assert_eq!(e.eligibility_of("team7"), Some(Eligibility::Locked));
        assert!(!e.is_selectable("team10"));
        assert!(e.is_selectable("team3"));
    }

    #[test]
    fn test_deselect_reopens_game_and_board() {
        let mut e = engine();
        for t in ["team1", "team3", "team5"] {
            e.select(t).unwrap();
        }
        assert!(e.deselect("team3"));
        assert!(e.is_selectable("team4"));
        assert!(e.is_selectable("team7"));
        assert!(!e.is_selectable("team2"));
        assert!(!e.deselect("team3"));
    }

    #[test]
    fn test_toggle() {
        let mut e = engine();
        assert_eq!(e.toggle("team1"), Ok(Some(SelectOutcome::Selected)));
        assert_eq!(e.toggle("team1"), Ok(None));
        assert!(e.is_empty());
    }

    #[test]
    fn test_swap_policy_replaces_in_place() {
        let mut e = engine();
        e.set_lock_policy(LockPolicy::AllowSwap);
        for t in ["team1", "team3", "team5"] {
            e.select(t).unwrap();
        }
        assert_eq!(e.eligibility_of("team4"), Some(Eligibility::Swap));
        assert_eq!(e.eligibility_of("team7"), Some(Eligibility::Locked));
        assert_eq!(
            e.select("team4"),
            Ok(SelectOutcome::Swapped {
                replaced: "team3".into()
            })
        );
        assert_eq!(e.selected(), ["team1", "team4", "team5"]);
        assert!(matches!(
            e.select("team7"),
            Err(SlipError::AlreadyFull { .. })
        ));
    }

    #[test]
    fn test_calculate_products() {
        let mut e = engine();
        for t in ["team1", "team3", "team5"] {
            e.select(t).unwrap();
        }
        let result = e.calculate().unwrap();
        assert!((result.implied_probability_pct - 21.45).abs() < 1e-9);
        assert!((result.book_probability_pct - 16.5).abs() < 1e-9);
        assert!((result.wager_payout - 55.08).abs() < 1e-9);
        assert_eq!(result.stake, 90.0);
        assert_eq!(result.legs.len(), 3);
        assert_eq!(result.legs[1].game, 2);
        assert!((result.legs[2].win_chance_pct - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_uses_configured_stake() {
        let mut e = engine();
        e.set_stake(100.0);
        for t in ["team1", "team3", "team5"] {
            e.select(t).unwrap();
        }
        let result = e.calculate().unwrap();
        assert!((result.wager_payout - 61.2).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_before_table_loads() {
        let mut e = SelectionEngine::unloaded(SlipConfig::default());
        for t in ["team1", "team3", "team5"] {
            e.select(t).unwrap();
        }
        assert_eq!(
            e.calculate(),
            Err(SlipError::MissingTeamData("team1".into()))
        );
        assert!(e.picks().iter().all(|p| p.record.is_none()));
    }

    #[test]
    fn test_replace_table_keeps_picks() {
        let mut e = SelectionEngine::unloaded(SlipConfig::default());
        for t in ["team1", "team3", "team5"] {
            e.select(t).unwrap();
        }
        e.replace_table(engine().table.clone());
        assert!(e.calculate().is_ok());
    }

    #[test]
    fn test_two_leg_config() {
        let config = SlipConfig {
            max_selections: 2,
            ..SlipConfig::default()
        }
        .with_topology(GameTopology::sequential(3));
        let mut e = SelectionEngine::new(engine().table.clone(), config);
        e.select("team1").unwrap();
        assert_eq!(e.select("team3"), Ok(SelectOutcome::ReadyToCalculate));
        let result = e.calculate().unwrap();
        assert!((result.wager_payout - 90.0 * 0.9 * 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_is_ready_tracks_leg_count() {
        let mut e = engine();
        assert!(!e.is_ready());
        e.select("team1").unwrap();
        e.select("team3").unwrap();
        assert!(!e.is_ready());
        e.select("team5").unwrap();
        assert!(e.is_ready());
        assert!(e.calculate().is_ok());
        e.deselect("team3");
        assert!(!e.is_ready());
        assert!(e.calculate().is_err());
    }

    #[test]
    fn test_pick_details_follow_selection_order() {
        let mut e = engine();
        assert!(e.pick_details().is_empty());
        e.select("team3").unwrap();
        e.select("team7").unwrap();
        let details = e.pick_details();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].heading, "Game 2: team3 name");
        assert_eq!(details[0].lines[0], "Not favored");
        // team7 has no row in the table
        assert_eq!(details[1].heading, "Game 4: team7");
        assert_eq!(details[1].lines, vec!["Odds not loaded yet".to_string()]);
    }

    #[test]
    fn test_pick_details_honour_display_fields() {
        let config = SlipConfig::default().with_display_fields(crate::config::DisplayFields {
            book_probability: false,
            implied_probability: false,
            profit: false,
        });
        let mut e = SelectionEngine::new(engine().table.clone(), config);
        e.select("team1").unwrap();
        let details = e.pick_details();
        assert!(details[0].lines.iter().all(|l| !l.starts_with("Profit")));
        assert!(details[0].lines.iter().all(|l| !l.starts_with("Book")));
    }

    #[test]
    fn test_eligibility_covers_board() {
        let e = engine();
        let all = e.eligibility();
        assert_eq!(all.len(), 10);
        assert!(all.iter().all(|(_, el)| *el == Eligibility::Open));
    }
}
