//! Pokemon Tower Battle Engine
//!
//! Team battles between trainers under three team disciplines (Set, Rotate and
//! Optimise), with damage scaled by how much of the pokedex each trainer has
//! seen, and a battle tower that ladders one challenger against many opponents.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod effectiveness;
pub mod errors;
pub mod player;
pub mod pokedex;
pub mod pokemon;
pub mod species;
pub mod teams;
pub mod tower;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{BattleMode, Criterion, PokemonType, Species, SpeciesData};

// --- From this crate's modules (`src/`) ---

// Battle engine and its log.
pub use battle::engine::Battle;
pub use battle::round::{battle_attack, battle_round, battle_rounds};
pub use battle::state::{BattleEvent, BattleOutcome, EventBus, RoundOutcome, Side};

// Core runtime types for a battle.
pub use effectiveness::EffectivenessTable;
pub use player::{TeamSelection, Trainer};
pub use pokedex::Pokedex;
pub use pokemon::PokemonInst;
pub use teams::{Formation, PokeTeam, TEAM_LIMIT};

// Ladder driver and its configuration.
pub use config::{parse_criterion, parse_mode, LadderConfig};
pub use tower::{BattleTower, TowerRound};

// Crate-specific error and result types.
pub use errors::{
    BattleEngineError, BattleResult, BattleStateError, ConfigError, ConfigResult, TeamError,
    TeamResult,
};
