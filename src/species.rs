use std::fmt;
use strum::IntoEnumIterator;

use crate::errors::{ConfigError, ConfigResult};

// Re-export the Species enum from the schema crate
pub use schema::{Species, SpeciesData};

/// Resolve a user-typed species name against the registry.
pub fn parse_species(name: &str) -> ConfigResult<Species> {
    name.trim()
        .parse::<Species>()
        .map_err(|_| ConfigError::unknown_species(name))
}

/// Every species that can be drafted, in registry order.
pub fn all_species() -> Vec<Species> {
    Species::iter().collect()
}

/// Display detailed information about a species including stats and evolution line
pub fn display_species_detailed(species: Species, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let data = species.data();

    writeln!(f, "{} ({})", data.name, data.pokemon_type)?;
    writeln!(f, "--------------------")?;

    if !data.evolution_line.is_empty() {
        let names: Vec<&str> = data.evolution_line.iter().map(|s| s.name()).collect();
        writeln!(f, "Evolution line: {}", names.join(" -> "))?;
        writeln!(f, "--------------------")?;
    }

    const LABEL_WIDTH: usize = 12;
    writeln!(f, "{:<LABEL_WIDTH$} : {}", "Health", data.health)?;
    writeln!(f, "{:<LABEL_WIDTH$} : {}", "Battle power", data.battle_power)?;
    writeln!(f, "{:<LABEL_WIDTH$} : {}", "Defence", data.defence)?;
    writeln!(f, "{:<LABEL_WIDTH$} : {}", "Speed", data.speed)?;
    writeln!(f, "{:<LABEL_WIDTH$} : {}", "Level", data.level)?;
    write!(f, "{:<LABEL_WIDTH$} : {}", "Experience", data.experience)
}

/// Wrapper so a species' detail sheet can be used with `format!`.
pub struct SpeciesSheet(pub Species);

impl fmt::Display for SpeciesSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_species_detailed(self.0, f)
    }
}
