use crate::{PokemonType, Species};
use serde::Serialize;

/// Static species record: the stats a freshly created combatant starts with.
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesData {
    pub name: &'static str,
    pub pokemon_type: PokemonType,
    pub health: u32,
    pub battle_power: u32,
    pub defence: u32,
    pub speed: u32,
    pub level: u32,
    pub experience: u32,
    /// Forms of the line in evolution order. Empty when the species never evolves.
    pub evolution_line: &'static [Species],
}

const CHARMANDER_LINE: &[Species] = &[Species::Charmander, Species::Charmeleon, Species::Charizard];
const SQUIRTLE_LINE: &[Species] = &[Species::Squirtle, Species::Wartortle, Species::Blastoise];
const BULBASAUR_LINE: &[Species] = &[Species::Bulbasaur, Species::Ivysaur, Species::Venusaur];
const CATERPIE_LINE: &[Species] = &[Species::Caterpie, Species::Metapod, Species::Butterfree];
const DRATINI_LINE: &[Species] = &[Species::Dratini, Species::Dragonair, Species::Dragonite];
const PICHU_LINE: &[Species] = &[Species::Pichu, Species::Pikachu, Species::Raichu];
const MACHOP_LINE: &[Species] = &[Species::Machop, Species::Machoke, Species::Machamp];
const PIDGEY_LINE: &[Species] = &[Species::Pidgey, Species::Pidgeotto, Species::Pidgeot];
const GASTLY_LINE: &[Species] = &[Species::Gastly, Species::Haunter, Species::Gengar];
const DIGLETT_LINE: &[Species] = &[Species::Diglett, Species::Dugtrio];
const SWINUB_LINE: &[Species] = &[Species::Swinub, Species::Piloswine];
const EKANS_LINE: &[Species] = &[Species::Ekans, Species::Arbok];
const ABRA_LINE: &[Species] = &[Species::Abra, Species::Kadabra, Species::Alakazam];
const GEODUDE_LINE: &[Species] = &[Species::Geodude, Species::Graveler, Species::Golem];

#[allow(clippy::too_many_arguments)]
const fn record(
    name: &'static str,
    pokemon_type: PokemonType,
    health: u32,
    battle_power: u32,
    defence: u32,
    speed: u32,
    level: u32,
    experience: u32,
    evolution_line: &'static [Species],
) -> SpeciesData {
    SpeciesData {
        name,
        pokemon_type,
        health,
        battle_power,
        defence,
        speed,
        level,
        experience,
        evolution_line,
    }
}

impl Species {
    /// Look up the static record for this species.
    pub fn data(self) -> SpeciesData {
        use PokemonType::*;

        match self {
            //                         name          type      hp  bp def spd lvl exp
            Species::Charmander => record("Charmander", Fire, 9, 6, 4, 7, 1, 0, CHARMANDER_LINE),
            Species::Charmeleon => record("Charmeleon", Fire, 12, 8, 5, 9, 2, 10, CHARMANDER_LINE),
            Species::Charizard => record("Charizard", Fire, 15, 11, 7, 11, 3, 25, CHARMANDER_LINE),
            Species::Squirtle => record("Squirtle", Water, 11, 4, 7, 5, 1, 0, SQUIRTLE_LINE),
            Species::Wartortle => record("Wartortle", Water, 14, 6, 9, 6, 2, 10, SQUIRTLE_LINE),
            Species::Blastoise => record("Blastoise", Water, 18, 8, 12, 7, 3, 25, SQUIRTLE_LINE),
            Species::Bulbasaur => record("Bulbasaur", Grass, 12, 5, 5, 5, 1, 0, BULBASAUR_LINE),
            Species::Ivysaur => record("Ivysaur", Grass, 15, 7, 7, 6, 2, 10, BULBASAUR_LINE),
            Species::Venusaur => record("Venusaur", Grass, 19, 9, 9, 7, 3, 25, BULBASAUR_LINE),
            Species::Caterpie => record("Caterpie", Bug, 7, 3, 3, 4, 1, 0, CATERPIE_LINE),
            Species::Metapod => record("Metapod", Bug, 9, 3, 8, 2, 2, 8, CATERPIE_LINE),
            Species::Butterfree => record("Butterfree", Bug, 12, 7, 5, 8, 3, 20, CATERPIE_LINE),
            Species::Dratini => record("Dratini", Dragon, 10, 7, 5, 6, 1, 0, DRATINI_LINE),
            Species::Dragonair => record("Dragonair", Dragon, 14, 9, 7, 8, 2, 12, DRATINI_LINE),
            Species::Dragonite => record("Dragonite", Dragon, 20, 13, 10, 9, 3, 30, DRATINI_LINE),
            Species::Pichu => record("Pichu", Electric, 6, 4, 2, 9, 1, 0, PICHU_LINE),
            Species::Pikachu => record("Pikachu", Electric, 9, 6, 4, 11, 2, 10, PICHU_LINE),
            Species::Raichu => record("Raichu", Electric, 13, 9, 6, 12, 3, 22, PICHU_LINE),
            Species::Machop => record("Machop", Fighting, 11, 8, 5, 4, 1, 0, MACHOP_LINE),
            Species::Machoke => record("Machoke", Fighting, 14, 10, 7, 5, 2, 12, MACHOP_LINE),
            Species::Machamp => record("Machamp", Fighting, 17, 13, 8, 6, 3, 28, MACHOP_LINE),
            Species::Pidgey => record("Pidgey", Flying, 8, 4, 4, 8, 1, 0, PIDGEY_LINE),
            Species::Pidgeotto => record("Pidgeotto", Flying, 11, 6, 5, 9, 2, 10, PIDGEY_LINE),
            Species::Pidgeot => record("Pidgeot", Flying, 14, 8, 7, 11, 3, 22, PIDGEY_LINE),
            Species::Gastly => record("Gastly", Ghost, 6, 7, 2, 9, 1, 0, GASTLY_LINE),
            Species::Haunter => record("Haunter", Ghost, 8, 9, 3, 10, 2, 12, GASTLY_LINE),
            Species::Gengar => record("Gengar", Ghost, 11, 12, 5, 11, 3, 28, GASTLY_LINE),
            Species::Diglett => record("Diglett", Ground, 5, 6, 3, 10, 1, 0, DIGLETT_LINE),
            Species::Dugtrio => record("Dugtrio", Ground, 9, 9, 5, 12, 2, 15, DIGLETT_LINE),
            Species::Swinub => record("Swinub", Ice, 10, 5, 4, 4, 1, 0, SWINUB_LINE),
            Species::Piloswine => record("Piloswine", Ice, 16, 9, 8, 5, 2, 15, SWINUB_LINE),
            Species::Lapras => record("Lapras", Ice, 20, 8, 8, 6, 2, 20, &[]),
            Species::Eevee => record("Eevee", Normal, 10, 5, 5, 6, 1, 0, &[]),
            Species::Snorlax => record("Snorlax", Normal, 24, 10, 6, 3, 2, 25, &[]),
            Species::Ekans => record("Ekans", Poison, 8, 6, 4, 6, 1, 0, EKANS_LINE),
            Species::Arbok => record("Arbok", Poison, 12, 9, 6, 8, 2, 15, EKANS_LINE),
            Species::Abra => record("Abra", Psychic, 5, 9, 2, 9, 1, 0, ABRA_LINE),
            Species::Kadabra => record("Kadabra", Psychic, 8, 11, 3, 10, 2, 12, ABRA_LINE),
            Species::Alakazam => record("Alakazam", Psychic, 11, 14, 4, 12, 3, 28, ABRA_LINE),
            Species::Geodude => record("Geodude", Rock, 10, 6, 9, 2, 1, 0, GEODUDE_LINE),
            Species::Graveler => record("Graveler", Rock, 13, 8, 11, 3, 2, 12, GEODUDE_LINE),
            Species::Golem => record("Golem", Rock, 17, 11, 14, 4, 3, 28, GEODUDE_LINE),
        }
    }

    /// Position of this species within its evolution line, if it has one.
    pub fn evolution_stage(self) -> Option<usize> {
        self.data().evolution_line.iter().position(|&form| form == self)
    }

    /// The next form in the evolution line, or `None` at the final form or
    /// for species without a line.
    pub fn next_evolution(self) -> Option<Species> {
        let line = self.data().evolution_line;
        let stage = self.evolution_stage()?;
        line.get(stage + 1).copied()
    }
}
