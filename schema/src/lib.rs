// Pokemon Tower Schema - Shared type definitions
// This crate contains the static enums and the species registry shared between
// the battle engine and anything that needs to name species or modes without
// pulling in the engine itself.

// Re-export the main types
pub use battle_data::*;
pub use pokemon_types::*;
pub use species::*;
pub use species_data::*;

pub mod battle_data;
pub mod pokemon_types;
pub mod species;
pub mod species_data;
