use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Every species a trainer can field, base and evolved forms alike.
///
/// Parsing from text is case-insensitive so that user input such as
/// `"charmander"` or `"CHARMANDER"` resolves to [`Species::Charmander`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Species {
    Charmander,
    Charmeleon,
    Charizard,
    Squirtle,
    Wartortle,
    Blastoise,
    Bulbasaur,
    Ivysaur,
    Venusaur,
    Caterpie,
    Metapod,
    Butterfree,
    Dratini,
    Dragonair,
    Dragonite,
    Pichu,
    Pikachu,
    Raichu,
    Machop,
    Machoke,
    Machamp,
    Pidgey,
    Pidgeotto,
    Pidgeot,
    Gastly,
    Haunter,
    Gengar,
    Diglett,
    Dugtrio,
    Swinub,
    Piloswine,
    Lapras,
    Eevee,
    Snorlax,
    Ekans,
    Arbok,
    Abra,
    Kadabra,
    Alakazam,
    Geodude,
    Graveler,
    Golem,
}

impl Species {
    /// Display name of the species.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
