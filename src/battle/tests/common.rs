use rand::rngs::StdRng;
use rand::SeedableRng;
use schema::{BattleMode, Criterion, Species};

use crate::errors::BattleResult;
use crate::player::Trainer;
use crate::pokemon::PokemonInst;
use crate::teams::PokeTeam;

/// A builder for creating test Pokemon instances with predictable stats.
///
/// # Example
/// ```
/// let pokemon = TestPokemonBuilder::new(Species::Pikachu)
///     .with_stats(20.0, 10.0, 2.0, 9.0)
///     .with_level(3)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    species: Species,
    stats: Option<(f64, f64, f64, f64)>,
    level: Option<u32>,
}

impl TestPokemonBuilder {
    /// Creates a new builder that starts from the species' default stats.
    pub fn new(species: Species) -> Self {
        Self {
            species,
            stats: None,
            level: None,
        }
    }

    /// Overrides health, battle power, defence and speed in one go.
    pub fn with_stats(mut self, health: f64, battle_power: f64, defence: f64, speed: f64) -> Self {
        self.stats = Some((health, battle_power, defence, speed));
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    /// Builds the `PokemonInst`.
    pub fn build(self) -> PokemonInst {
        let mut pokemon = PokemonInst::new(self.species);

        if let Some((health, battle_power, defence, speed)) = self.stats {
            pokemon.health = health;
            pokemon.battle_power = battle_power;
            pokemon.defence = defence;
            pokemon.speed = speed;
        }
        if let Some(level) = self.level {
            pokemon.level = level;
        }

        pokemon
    }
}

/// Creates a trainer owning exactly the given Pokemon, with their types registered.
pub fn create_test_trainer(name: &str, team: Vec<PokemonInst>) -> Trainer {
    let team = match PokeTeam::from_pokemon(team) {
        Ok(team) => team,
        Err(err) => panic!("Failed to build test team for {}: {}", name, err),
    };
    Trainer::with_team(name, team)
}

/// Creates a trainer and structures its team for `mode`.
pub fn create_structured_trainer(
    name: &str,
    team: Vec<PokemonInst>,
    mode: BattleMode,
    criterion: Criterion,
) -> Trainer {
    let mut trainer = create_test_trainer(name, team);
    if let Err(err) = trainer.team.structure(mode, Some(criterion)) {
        panic!("Failed to structure team for {}: {}", name, err);
    }
    trainer
}

/// A seeded RNG so random drafts are reproducible across test runs.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
