use schema::BattleMode;
use std::fmt;

/// Main error type for the Pokemon Tower battle engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEngineError {
    /// Rejected configuration or user-supplied input
    Config(ConfigError),
    /// Misuse of a team container
    Team(TeamError),
    /// Error related to invalid battle or tower state
    BattleState(BattleStateError),
}

/// Errors raised while validating configuration and selection input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Battle mode value outside the known set
    InvalidMode(String),
    /// The mode cannot be used for the requested operation
    UnsupportedMode(BattleMode),
    /// Sort criterion outside the known set
    InvalidCriterion(String),
    /// Optimise mode was requested without a criterion
    MissingCriterion,
    /// Species name not present in the registry
    UnknownSpecies(String),
    /// Requested team size outside 1..=6
    InvalidTeamSize(usize),
    /// Effectiveness table could not be parsed
    MalformedTable(String),
    /// Ladder bounds are inconsistent
    InvalidLadder(String),
    /// A data file could not be read
    Io(String),
}

/// Errors related to team container use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    /// Position is beyond the number of combatants currently in the team
    IndexOutOfBounds { index: usize, count: usize },
    /// The container was used before `assemble`/`assign`
    NotAssembled,
    /// The container discipline does not match the requested operation
    FormationMismatch { expected: BattleMode },
    /// No combatants were picked for the team
    EmptyRoster,
}

/// Errors related to battle and tower state validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleStateError {
    /// The tower has no challenger set
    NoChallenger,
    /// The tower has no opponents left in rotation
    NoOpponents,
    /// The ladder is already decided
    TowerExhausted,
}

impl fmt::Display for BattleEngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEngineError::Config(err) => write!(f, "Configuration error: {}", err),
            BattleEngineError::Team(err) => write!(f, "Team error: {}", err),
            BattleEngineError::BattleState(err) => write!(f, "Battle state error: {}", err),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMode(value) => write!(f, "Invalid battle mode: {}", value),
            ConfigError::UnsupportedMode(mode) => {
                write!(f, "Battle mode {} is not valid here", mode)
            }
            ConfigError::InvalidCriterion(value) => write!(f, "Invalid criterion: {}", value),
            ConfigError::MissingCriterion => write!(f, "Optimise mode requires a criterion"),
            ConfigError::UnknownSpecies(name) => write!(f, "Pokemon does not exist: {}", name),
            ConfigError::InvalidTeamSize(size) => {
                write!(f, "Team size must be between 1 and 6, got {}", size)
            }
            ConfigError::MalformedTable(details) => {
                write!(f, "Malformed effectiveness table: {}", details)
            }
            ConfigError::InvalidLadder(details) => write!(f, "Invalid ladder config: {}", details),
            ConfigError::Io(details) => write!(f, "Could not read data file: {}", details),
        }
    }
}

impl fmt::Display for TeamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamError::IndexOutOfBounds { index, count } => {
                write!(f, "Index {} out of bounds for team of {}", index, count)
            }
            TeamError::NotAssembled => write!(f, "Team has not been assembled"),
            TeamError::FormationMismatch { expected } => {
                write!(f, "Team is not structured for {} mode", expected)
            }
            TeamError::EmptyRoster => write!(f, "Team has no Pokemon"),
        }
    }
}

impl fmt::Display for BattleStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleStateError::NoChallenger => write!(f, "No challenger has entered the tower"),
            BattleStateError::NoOpponents => write!(f, "No opponents remain in the tower"),
            BattleStateError::TowerExhausted => write!(f, "No battles remain in the tower"),
        }
    }
}

impl std::error::Error for BattleEngineError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for TeamError {}
impl std::error::Error for BattleStateError {}

impl From<ConfigError> for BattleEngineError {
    fn from(err: ConfigError) -> Self {
        BattleEngineError::Config(err)
    }
}

impl From<TeamError> for BattleEngineError {
    fn from(err: TeamError) -> Self {
        BattleEngineError::Team(err)
    }
}

impl From<BattleStateError> for BattleEngineError {
    fn from(err: BattleStateError) -> Self {
        BattleEngineError::BattleState(err)
    }
}

impl ConfigError {
    /// Rejection for a species name typed by a user.
    pub fn unknown_species(name: &str) -> Self {
        ConfigError::UnknownSpecies(name.to_string())
    }
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Type alias for Results using TeamError
pub type TeamResult<T> = Result<T, TeamError>;
