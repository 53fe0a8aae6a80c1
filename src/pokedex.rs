use schema::PokemonType;
use serde::{Deserialize, Serialize};
use strum::EnumCount;

/// Bit-membership set of the types a trainer has seen.
///
/// Capacity is fixed at the number of known types. Registered types are never
/// removed except by [`Pokedex::clear`], which exists for resetting a trainer
/// between independent scenarios.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokedex {
    bits: u32,
}

impl Pokedex {
    pub const CAPACITY: usize = PokemonType::COUNT;

    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a type as seen. Returns true if it was not seen before.
    pub fn register(&mut self, pokemon_type: PokemonType) -> bool {
        let mask = 1u32 << pokemon_type.index();
        let newly_seen = self.bits & mask == 0;
        self.bits |= mask;
        newly_seen
    }

    pub fn contains(&self, pokemon_type: PokemonType) -> bool {
        self.bits & (1u32 << pokemon_type.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Fraction of all types seen, rounded to two decimal places.
    pub fn completion(&self) -> f64 {
        let ratio = self.len() as f64 / Self::CAPACITY as f64;
        (ratio * 100.0).round() / 100.0
    }
}
