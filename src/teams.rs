use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use ordered_float::OrderedFloat;
use rand::Rng;
use schema::{BattleMode, Criterion, Species};

use crate::errors::{ConfigError, ConfigResult, TeamError, TeamResult};
use crate::pokemon::PokemonInst;
use crate::species::{all_species, parse_species};

/// Maximum number of Pokemon a trainer can field.
pub const TEAM_LIMIT: usize = 6;

/// Key-ordered container used by Optimise mode.
///
/// Entries are keyed by `(signed criterion value, insertion sequence)` so equal
/// values keep their insertion order. Keys are never edited in place: a changed
/// Pokemon is removed and reinserted with a freshly computed key.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedRoster {
    criterion: Criterion,
    descending: bool,
    entries: BTreeMap<(OrderedFloat<f64>, u64), usize>,
    next_sequence: u64,
}

impl OrderedRoster {
    fn new(criterion: Criterion) -> Self {
        Self {
            criterion,
            descending: false,
            entries: BTreeMap::new(),
            next_sequence: 0,
        }
    }

    fn signed(&self, value: f64) -> f64 {
        if self.descending {
            -value
        } else {
            value
        }
    }

    fn insert_key(&mut self, key: f64, slot: usize) {
        self.entries.insert((OrderedFloat(key), self.next_sequence), slot);
        self.next_sequence += 1;
    }

    /// Insert a slot ranked by the Pokemon's current criterion value.
    fn insert(&mut self, pokemon: &PokemonInst, slot: usize) {
        let key = self.signed(pokemon.order_key(self.criterion));
        self.insert_key(key, slot);
    }

    fn pop_first(&mut self) -> Option<(usize, f64)> {
        self.entries
            .pop_first()
            .map(|((key, _), slot)| (slot, key.into_inner()))
    }

    fn first(&self) -> Option<usize> {
        self.entries.values().next().copied()
    }

    /// Flip between ascending and descending by negating every key.
    fn toggle_direction(&mut self) {
        let drained = std::mem::take(&mut self.entries);
        self.descending = !self.descending;
        for ((key, _), slot) in drained {
            self.insert_key(-key.into_inner(), slot);
        }
    }

    fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.values().copied()
    }

    fn keys(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.keys().map(|(key, _)| key.into_inner())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The container discipline a team is currently structured with.
///
/// Every variant holds indices into the team's roster, never the Pokemon
/// themselves, so fainted Pokemon remain available for reporting and healing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Formation {
    #[default]
    Unassembled,
    /// Stack: the last element is the front contender.
    CommitStack(Vec<usize>),
    /// Queue: the first element is the front contender.
    RotateQueue(VecDeque<usize>),
    GreedyOrdered(OrderedRoster),
}

impl Formation {
    pub fn mode(&self) -> Option<BattleMode> {
        match self {
            Formation::Unassembled => None,
            Formation::CommitStack(_) => Some(BattleMode::Set),
            Formation::RotateQueue(_) => Some(BattleMode::Rotate),
            Formation::GreedyOrdered(_) => Some(BattleMode::Optimise),
        }
    }

    fn len(&self) -> usize {
        match self {
            Formation::Unassembled => 0,
            Formation::CommitStack(stack) => stack.len(),
            Formation::RotateQueue(queue) => queue.len(),
            Formation::GreedyOrdered(ordered) => ordered.len(),
        }
    }
}

/// A trainer's team: the roster as drafted plus the battle formation built from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokeTeam {
    roster: Vec<PokemonInst>,
    formation: Formation,
    team_count: usize,
}

impl PokeTeam {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a team from ready-made Pokemon.
    pub fn from_pokemon(pokemon: Vec<PokemonInst>) -> ConfigResult<Self> {
        if pokemon.len() > TEAM_LIMIT {
            return Err(ConfigError::InvalidTeamSize(pokemon.len()));
        }
        let team_count = pokemon.iter().filter(|p| p.is_alive()).count();
        Ok(Self {
            team_count,
            roster: pokemon,
            formation: Formation::Unassembled,
        })
    }

    pub fn from_species(species: &[Species]) -> ConfigResult<Self> {
        Self::from_pokemon(species.iter().copied().map(PokemonInst::new).collect())
    }

    /// Replace the roster with named species.
    ///
    /// Every name is validated before anything changes, so a rejected selection
    /// leaves the current roster untouched.
    pub fn choose_manually(&mut self, names: &[&str]) -> ConfigResult<()> {
        if names.is_empty() || names.len() > TEAM_LIMIT {
            return Err(ConfigError::InvalidTeamSize(names.len()));
        }
        let roster = names
            .iter()
            .map(|name| parse_species(name).map(PokemonInst::new))
            .collect::<ConfigResult<Vec<_>>>()?;

        *self = Self::from_pokemon(roster)?;
        Ok(())
    }

    /// Replace the roster with a full team drawn uniformly from the registry.
    pub fn choose_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let pool = all_species();
        let roster = (0..TEAM_LIMIT)
            .map(|_| PokemonInst::new(pool[rng.random_range(0..pool.len())]))
            .collect();

        self.roster = roster;
        self.team_count = TEAM_LIMIT;
        self.formation = Formation::Unassembled;
    }

    // --- Structuring ---

    /// Structure the roster for Set or Rotate mode.
    ///
    /// Set pushes in roster order so the last drafted Pokemon fights first.
    /// Rotate appends in roster order so the first drafted Pokemon fights first.
    pub fn assemble(&mut self, mode: BattleMode) -> ConfigResult<()> {
        let slots: Vec<usize> = self.live_slots().collect();
        self.formation = match mode {
            BattleMode::Set => Formation::CommitStack(slots),
            BattleMode::Rotate => Formation::RotateQueue(VecDeque::from(slots)),
            BattleMode::Optimise => return Err(ConfigError::UnsupportedMode(mode)),
        };
        self.team_count = self.formation.len();
        Ok(())
    }

    /// Structure the roster for Optimise mode, ascending by `criterion`.
    pub fn assign(&mut self, criterion: Criterion) {
        let mut ordered = OrderedRoster::new(criterion);
        for slot in self.live_slots() {
            ordered.insert(&self.roster[slot], slot);
        }
        self.formation = Formation::GreedyOrdered(ordered);
        self.team_count = self.formation.len();
    }

    /// Structure the roster for any mode. Optimise requires a criterion.
    pub fn structure(&mut self, mode: BattleMode, criterion: Option<Criterion>) -> ConfigResult<()> {
        match mode {
            BattleMode::Optimise => {
                let criterion = criterion.ok_or(ConfigError::MissingCriterion)?;
                self.assign(criterion);
                Ok(())
            }
            _ => self.assemble(mode),
        }
    }

    /// Heal every Pokemon to its species default and drop the formation.
    /// Levels and evolutions are kept.
    pub fn reset(&mut self) {
        for pokemon in &mut self.roster {
            pokemon.heal_to_species_default();
        }
        self.team_count = self.roster.len();
        self.formation = Formation::Unassembled;
    }

    /// Heal the team and rebuild its formation for `mode`.
    pub fn regenerate(&mut self, mode: BattleMode, criterion: Option<Criterion>) -> ConfigResult<()> {
        self.reset();
        self.structure(mode, criterion)
    }

    /// One-time shuffle applied before the first round.
    ///
    /// - Set: reverses the front half of the stack.
    /// - Rotate: reverses the back half of the queue.
    /// - Optimise: toggles between ascending and descending order.
    pub fn special(&mut self, mode: BattleMode) -> TeamResult<()> {
        self.ensure_formation(mode)?;
        match &mut self.formation {
            Formation::CommitStack(stack) => {
                let size = stack.len() / 2;
                let top = stack.len() - size;
                stack[top..].reverse();
            }
            Formation::RotateQueue(queue) => {
                let size = queue.len() / 2;
                let back = queue.len() - size;
                queue.make_contiguous()[back..].reverse();
            }
            Formation::GreedyOrdered(ordered) => ordered.toggle_direction(),
            Formation::Unassembled => return Err(TeamError::NotAssembled),
        }
        Ok(())
    }

    /// Fail unless the team is structured for `mode`.
    pub fn ensure_formation(&self, mode: BattleMode) -> TeamResult<()> {
        match self.formation.mode() {
            None => Err(TeamError::NotAssembled),
            Some(current) if current == mode => Ok(()),
            Some(_) => Err(TeamError::FormationMismatch { expected: mode }),
        }
    }

    // --- Contender selection ---

    /// Roster slot of the front contender, left in place.
    pub fn peek_contender(&self) -> TeamResult<Option<usize>> {
        match &self.formation {
            Formation::Unassembled => Err(TeamError::NotAssembled),
            Formation::CommitStack(stack) => Ok(stack.last().copied()),
            Formation::RotateQueue(queue) => Ok(queue.front().copied()),
            Formation::GreedyOrdered(ordered) => Ok(ordered.first()),
        }
    }

    /// Remove the front contender once its defeat is confirmed.
    pub fn remove_front(&mut self) -> TeamResult<Option<usize>> {
        match &mut self.formation {
            Formation::Unassembled => Err(TeamError::NotAssembled),
            Formation::CommitStack(stack) => Ok(stack.pop()),
            Formation::RotateQueue(queue) => Ok(queue.pop_front()),
            Formation::GreedyOrdered(ordered) => Ok(ordered.pop_first().map(|(slot, _)| slot)),
        }
    }

    /// Take the head of a Rotate queue for one exchange.
    pub fn serve(&mut self) -> TeamResult<Option<usize>> {
        match &mut self.formation {
            Formation::RotateQueue(queue) => Ok(queue.pop_front()),
            other => Err(Self::mismatch(other, BattleMode::Rotate)),
        }
    }

    /// Put a served Pokemon back at the tail of a Rotate queue.
    pub fn append(&mut self, slot: usize) -> TeamResult<()> {
        match &mut self.formation {
            Formation::RotateQueue(queue) => {
                queue.push_back(slot);
                Ok(())
            }
            other => Err(Self::mismatch(other, BattleMode::Rotate)),
        }
    }

    /// Take the least-key Pokemon of an Optimise formation, with its key.
    pub fn take_least(&mut self) -> TeamResult<Option<(usize, f64)>> {
        match &mut self.formation {
            Formation::GreedyOrdered(ordered) => Ok(ordered.pop_first()),
            other => Err(Self::mismatch(other, BattleMode::Optimise)),
        }
    }

    /// Reinsert a Pokemon taken by [`take_least`](Self::take_least) if it is
    /// still alive, with a key recomputed from its current stats and signed for
    /// the active sort direction. Returns whether it was reinserted.
    pub fn requeue_or_drop(&mut self, slot: usize) -> TeamResult<bool> {
        match &mut self.formation {
            Formation::GreedyOrdered(ordered) => {
                let pokemon = &self.roster[slot];
                if pokemon.is_alive() {
                    ordered.insert(pokemon, slot);
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            other => Err(Self::mismatch(other, BattleMode::Optimise)),
        }
    }

    fn mismatch(formation: &Formation, expected: BattleMode) -> TeamError {
        match formation {
            Formation::Unassembled => TeamError::NotAssembled,
            _ => TeamError::FormationMismatch { expected },
        }
    }

    /// Account for a contained Pokemon that fainted.
    pub fn record_defeat(&mut self) {
        self.team_count = self.team_count.saturating_sub(1);
    }

    // --- Queries ---

    /// True when no contender is left in the formation.
    pub fn is_empty(&self) -> bool {
        self.formation.len() == 0
    }

    /// Number of live Pokemon still in the team.
    pub fn count(&self) -> usize {
        self.team_count
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn mode(&self) -> Option<BattleMode> {
        self.formation.mode()
    }

    /// True when an Optimise formation is currently sorted descending.
    pub fn is_descending(&self) -> bool {
        matches!(&self.formation, Formation::GreedyOrdered(ordered) if ordered.descending)
    }

    /// Keys of an Optimise formation in contender order.
    pub fn order_keys(&self) -> Vec<f64> {
        match &self.formation {
            Formation::GreedyOrdered(ordered) => ordered.keys().collect(),
            _ => Vec::new(),
        }
    }

    /// The full drafted roster, fainted Pokemon included.
    pub fn roster(&self) -> &[PokemonInst] {
        &self.roster
    }

    pub(crate) fn pokemon(&self, slot: usize) -> &PokemonInst {
        &self.roster[slot]
    }

    pub(crate) fn pokemon_mut(&mut self, slot: usize) -> &mut PokemonInst {
        &mut self.roster[slot]
    }

    /// Roster slots in contender order, front first.
    pub fn lineup(&self) -> Vec<usize> {
        match &self.formation {
            Formation::Unassembled => self.live_slots().collect(),
            Formation::CommitStack(stack) => stack.iter().rev().copied().collect(),
            Formation::RotateQueue(queue) => queue.iter().copied().collect(),
            Formation::GreedyOrdered(ordered) => ordered.slots().collect(),
        }
    }

    /// Pokemon at `index` in contender order.
    pub fn get(&self, index: usize) -> TeamResult<&PokemonInst> {
        let lineup = self.lineup();
        lineup
            .get(index)
            .map(|&slot| &self.roster[slot])
            .ok_or(TeamError::IndexOutOfBounds {
                index,
                count: lineup.len(),
            })
    }

    /// Species in contender order.
    pub fn lineup_species(&self) -> Vec<Species> {
        self.lineup()
            .into_iter()
            .map(|slot| self.roster[slot].species)
            .collect()
    }

    fn live_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.roster
            .iter()
            .enumerate()
            .filter(|(_, pokemon)| pokemon.is_alive())
            .map(|(slot, _)| slot)
    }
}

impl fmt::Display for PokeTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in self.lineup() {
            writeln!(f, "{}", self.roster[slot])?;
        }
        Ok(())
    }
}
