//! Parlay slip calculator.
//!
//! Pick one team per game, up to the configured number of legs, and get the
//! combined implied and book probabilities plus the payout on a fixed stake.
//!
//! ```
//! use std::rc::Rc;
//! use parlay_slip::{RowTable, SelectionEngine, SlipConfig};
//!
//! let (table, _issues) = RowTable::parse(
//!     "team1,Lions,,0.55,0.50,+120,108,0.9,true\n\
//!      team3,Hawks,,0.60,0.55,-150,60,0.85,true\n\
//!      team5,Owls,,0.65,0.60,-180,50,0.80,true\n",
//! );
//! let mut engine = SelectionEngine::new(Rc::new(table), SlipConfig::default());
//! for team in ["team1", "team3", "team5"] {
//!     engine.select(team).unwrap();
//! }
//! let result = engine.calculate().unwrap();
//! assert!((result.wager_payout - 55.08).abs() < 1e-9);
//! ```

pub mod config;
pub mod console;
pub mod display;
pub mod engine;
pub mod error;
pub mod loader;
pub mod odds;
pub mod table;
pub mod topology;

pub use config::{DisplayFields, LockPolicy, SlipConfig};
pub use engine::{Eligibility, ParlayLeg, ParlayResult, Pick, SelectOutcome, SelectionEngine};
pub use error::{Result, SlipError, TopologyError};
pub use table::{RowIssue, RowTable, TeamRecord};
pub use topology::GameTopology;
