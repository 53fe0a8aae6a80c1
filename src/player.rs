use std::fmt;

use rand::Rng;

use crate::errors::ConfigResult;
use crate::pokedex::Pokedex;
use crate::pokemon::PokemonInst;
use crate::teams::PokeTeam;

/// How a trainer drafts their team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSelection<'a> {
    /// Six species drawn uniformly from the registry.
    Random,
    /// One to six named species.
    Manual(&'a [&'a str]),
}

/// A trainer: a named owner of a team and a pokedex.
#[derive(Debug, Clone)]
pub struct Trainer {
    pub name: String,
    pub team: PokeTeam,
    pub pokedex: Pokedex,
    /// Remaining lives in the battle tower. Unused outside of it.
    pub lives: u32,
}

impl Trainer {
    pub fn new(name: impl Into<String>) -> Self {
        Trainer {
            name: name.into(),
            team: PokeTeam::new(),
            pokedex: Pokedex::new(),
            lives: 0,
        }
    }

    /// Create a trainer with a ready-made team, registering its types.
    pub fn with_team(name: impl Into<String>, team: PokeTeam) -> Self {
        let mut trainer = Trainer::new(name);
        trainer.team = team;
        trainer.register_team();
        trainer
    }

    /// Draft a team and register every drafted Pokemon in the pokedex.
    ///
    /// A rejected manual selection leaves the team and pokedex untouched.
    pub fn pick_team<R: Rng + ?Sized>(
        &mut self,
        selection: TeamSelection<'_>,
        rng: &mut R,
    ) -> ConfigResult<()> {
        match selection {
            TeamSelection::Random => self.team.choose_randomly(rng),
            TeamSelection::Manual(names) => self.team.choose_manually(names)?,
        }
        self.register_team();
        Ok(())
    }

    fn register_team(&mut self) {
        for pokemon in self.team.roster() {
            self.pokedex.register(pokemon.pokemon_type);
        }
    }

    /// Record a Pokemon's type as seen.
    pub fn register_pokemon(&mut self, pokemon: &PokemonInst) {
        self.pokedex.register(pokemon.pokemon_type);
    }

    pub fn pokedex_completion(&self) -> f64 {
        self.pokedex.completion()
    }
}

impl fmt::Display for Trainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Completion holds two decimals, so rounding yields its exact whole percent.
        write!(
            f,
            "Trainer {} Pokedex Completion: {}%",
            self.name,
            (self.pokedex_completion() * 100.0).round() as u32
        )
    }
}
