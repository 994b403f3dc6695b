//! Deployment settings for a slip.

use crate::topology::GameTopology;

/// Stake the parlay payout is quoted against.
pub const DEFAULT_STAKE: f64 = 90.0;
/// Number of legs in a parlay.
pub const DEFAULT_MAX_SELECTIONS: usize = 3;
/// Games on the board in the stock deployment.
pub const DEFAULT_GAME_COUNT: u32 = 5;
/// Where the front end fetches the odds table from.
pub const DEFAULT_DATA_URL: &str = "data.csv";

/// What happens to the other buttons once the slip is full, and whether a
/// decided game can be switched without deselecting first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LockPolicy {
    /// Full slip locks every unselected team; a game-mate is always locked.
    #[default]
    LockOnComplete,
    /// Picking a game-mate replaces the current pick for that game.
    AllowSwap,
}

impl LockPolicy {
    pub fn all() -> &'static [(Self, &'static str)] {
        &[
            (Self::LockOnComplete, "Lock when complete"),
            (Self::AllowSwap, "Allow swapping picks"),
        ]
    }
}

/// Stats shown in the per-pick dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayFields {
    pub book_probability: bool,
    pub implied_probability: bool,
    pub profit: bool,
}

impl Default for DisplayFields {
    fn default() -> Self {
        Self {
            book_probability: true,
            implied_probability: true,
            profit: true,
        }
    }
}

/// Read a stake typed by the user ("90", "$1,000", " 12.5 ").
/// `None` for anything that is not a finite, non-negative amount.
pub fn parse_stake(input: &str) -> Option<f64> {
    let cleaned = input.trim().trim_start_matches('$').replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlipConfig {
    pub stake: f64,
    pub max_selections: usize,
    pub topology: GameTopology,
    pub lock_policy: LockPolicy,
    pub display_fields: DisplayFields,
}

impl Default for SlipConfig {
    fn default() -> Self {
        Self {
            stake: DEFAULT_STAKE,
            max_selections: DEFAULT_MAX_SELECTIONS,
            topology: GameTopology::default(),
            lock_policy: LockPolicy::default(),
            display_fields: DisplayFields::default(),
        }
    }
}

impl SlipConfig {
    pub fn with_topology(mut self, topology: GameTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Non-finite or negative stakes fall back to zero.
    pub fn with_stake(mut self, stake: f64) -> Self {
        self.stake = if stake.is_finite() { stake.max(0.0) } else { 0.0 };
        self
    }

    pub fn with_lock_policy(mut self, policy: LockPolicy) -> Self {
        self.lock_policy = policy;
        self
    }

    pub fn with_display_fields(mut self, fields: DisplayFields) -> Self {
        self.display_fields = fields;
        self
    }
}
