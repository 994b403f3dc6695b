use thiserror::Error;

/// Failures surfaced by the selection engine and the table loader.
///
/// Every variant is recoverable; the engine never leaves its selection
/// half-updated when it returns one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlipError {
    #[error("You can only pick {max} teams. Deselect one before choosing {team}.")]
    AlreadyFull { team: String, max: usize },

    #[error("Game {game} already has a pick ({held_by}). Deselect it before choosing {team}.")]
    GameAlreadyTaken {
        team: String,
        game: u32,
        held_by: String,
    },

    #[error("Please select exactly {required} teams from {required} different games.")]
    IncompleteSelection { selected: usize, required: usize },

    #[error("Error: Could not find data for all selected teams (missing {0}).")]
    MissingTeamData(String),

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Error loading odds table: {0}")]
    DataLoadFailure(String),
}

/// Rejected game layouts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopologyError {
    #[error("Team {team} appears in both game {first} and game {second}")]
    TeamInTwoGames { team: String, first: u32, second: u32 },

    #[error("Game {game} lists {team} twice")]
    DuplicateInGame { game: u32, team: String },

    #[error("Game {0} is defined more than once")]
    DuplicateGame(u32),
}

pub type Result<T> = std::result::Result<T, SlipError>;
