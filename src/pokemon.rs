use std::fmt;

use schema::{Criterion, PokemonType, Species};
use serde::{Deserialize, Serialize};

use crate::effectiveness::EffectivenessTable;

/// Stat multiplier applied to battle power, health, speed and defence on evolution.
pub const EVOLUTION_MULTIPLIER: f64 = 1.5;

/// A combatant instance: species identity plus the mutable stats a battle wears down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonInst {
    /// Current form. Advances along the evolution line, never back.
    pub species: Species,
    /// Form the instance was created as; its record defines the regenerated health.
    pub origin: Species,
    pub pokemon_type: PokemonType,
    pub health: f64,
    pub level: u32,
    pub experience: u32,
    pub battle_power: f64,
    pub defence: f64,
    pub speed: f64,
}

impl PokemonInst {
    /// Create a fresh instance with the species' default stats.
    pub fn new(species: Species) -> Self {
        let data = species.data();
        PokemonInst {
            species,
            origin: species,
            pokemon_type: data.pokemon_type,
            health: data.health as f64,
            level: data.level,
            experience: data.experience,
            battle_power: data.battle_power as f64,
            defence: data.defence as f64,
            speed: data.speed as f64,
        }
    }

    pub fn name(&self) -> &'static str {
        self.species.name()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Damage this Pokemon would deal to `other` before the pokedex ratio is applied.
    ///
    /// The raw damage depends on how the defender's defence compares to this
    /// Pokemon's battle power and is rounded up before the type multiplier.
    pub fn attack(&self, other: &PokemonInst, table: &EffectivenessTable) -> f64 {
        let attack = self.battle_power;
        let defence = other.defence;

        let damage = if defence < attack / 2.0 {
            attack - defence
        } else if defence < attack {
            attack * 5.0 / 8.0 - defence / 4.0
        } else {
            attack / 4.0
        }
        .ceil();

        damage * table.multiplier(self.pokemon_type, other.pokemon_type)
    }

    /// Take an incoming hit. Damage below this Pokemon's defence is halved.
    /// Returns the health actually removed.
    pub fn defend(&mut self, damage: f64) -> f64 {
        let effective_damage = if damage < self.defence {
            damage / 2.0
        } else {
            damage
        };
        self.take_chip(effective_damage)
    }

    /// Remove health directly, clamping at zero. Returns the health actually removed.
    pub fn take_chip(&mut self, amount: f64) -> f64 {
        let before = self.health;
        self.health = (self.health - amount).max(0.0);
        before - self.health
    }

    /// Gain a level, evolving when a further form exists.
    /// Returns the species evolved into, if any.
    pub fn level_up(&mut self) -> Option<Species> {
        self.level += 1;
        let next = self.species.next_evolution()?;
        self.evolve_into(next);
        Some(next)
    }

    fn evolve_into(&mut self, next: Species) {
        self.species = next;
        self.battle_power *= EVOLUTION_MULTIPLIER;
        self.health *= EVOLUTION_MULTIPLIER;
        self.speed *= EVOLUTION_MULTIPLIER;
        self.defence *= EVOLUTION_MULTIPLIER;
    }

    /// Restore health to the default of the species this instance was created as.
    /// Level, evolution and the other stats are kept.
    pub fn heal_to_species_default(&mut self) {
        self.health = self.origin.data().health as f64;
    }

    /// Sort key for Optimise mode.
    pub fn order_key(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Health => self.health,
            Criterion::Experience => self.experience as f64,
            Criterion::Defence => self.defence,
            Criterion::BattlePower => self.battle_power,
            Criterion::Level => self.level as f64,
        }
    }
}

impl fmt::Display for PokemonInst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Level {}) with {} health and {} experience",
            self.name(),
            self.level,
            self.health,
            self.experience
        )
    }
}
