use rand::Rng;
use schema::{BattleMode, Criterion};

use crate::battle::round::{battle_round, battle_rounds};
use crate::battle::state::{BattleEvent, BattleOutcome, EventBus, RoundOutcome, Side};
use crate::effectiveness::EffectivenessTable;
use crate::errors::{BattleResult, ConfigResult};
use crate::player::{TeamSelection, Trainer};
use crate::teams::PokeTeam;

/// A battle between two trainers under one mode.
///
/// The battle borrows both trainers for its whole duration: teams are worn
/// down in place and both pokedexes grow as contenders are revealed.
pub struct Battle<'a> {
    trainer_1: &'a mut Trainer,
    trainer_2: &'a mut Trainer,
    mode: BattleMode,
    criterion: Criterion,
    table: &'a EffectivenessTable,
    events: EventBus,
    round: u32,
}

impl<'a> Battle<'a> {
    pub fn new(
        trainer_1: &'a mut Trainer,
        trainer_2: &'a mut Trainer,
        mode: BattleMode,
        table: &'a EffectivenessTable,
    ) -> Self {
        Self {
            trainer_1,
            trainer_2,
            mode,
            criterion: Criterion::default(),
            table,
            events: EventBus::new(),
            round: 0,
        }
    }

    /// Sort criterion used by Optimise mode. Defaults to health.
    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Draft a random team for both trainers and structure it for this battle's mode.
    pub fn create_teams<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ConfigResult<()> {
        let mode = self.mode;
        let criterion = Some(self.criterion);
        for trainer in [&mut *self.trainer_1, &mut *self.trainer_2] {
            trainer.pick_team(TeamSelection::Random, rng)?;
            trainer.team.structure(mode, criterion)?;
        }
        Ok(())
    }

    /// Run the battle until at least one team is empty.
    ///
    /// Both teams must already be structured for this battle's mode.
    pub fn commence_battle(&mut self) -> BattleResult<BattleOutcome> {
        self.trainer_1.team.ensure_formation(self.mode)?;
        self.trainer_2.team.ensure_formation(self.mode)?;

        tracing::info!(
            "{} vs {} in {} mode",
            self.trainer_1.name,
            self.trainer_2.name,
            self.mode
        );
        self.events.push(BattleEvent::BattleStarted { mode: self.mode });

        match self.mode {
            BattleMode::Set => self.set_battle()?,
            BattleMode::Rotate => self.rotate_battle()?,
            BattleMode::Optimise => self.optimise_battle()?,
        }

        let outcome = self.outcome();
        tracing::info!("Battle ended after {} rounds: {:?}", self.round, outcome);
        self.events.push(BattleEvent::BattleEnded { outcome });
        Ok(outcome)
    }

    /// Every event emitted so far.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn into_events(self) -> EventBus {
        self.events
    }

    /// Number of contender pairings played so far.
    pub fn rounds_played(&self) -> u32 {
        self.round
    }

    fn teams_standing(&self) -> bool {
        !self.trainer_1.team.is_empty() && !self.trainer_2.team.is_empty()
    }

    fn outcome(&self) -> BattleOutcome {
        match (self.trainer_1.team.is_empty(), self.trainer_2.team.is_empty()) {
            (true, true) => BattleOutcome::Draw,
            (true, false) => BattleOutcome::Trainer2Win,
            _ => BattleOutcome::Trainer1Win,
        }
    }

    fn team_mut(&mut self, side: Side) -> &mut PokeTeam {
        match side {
            Side::Challenger => &mut self.trainer_1.team,
            Side::Opponent => &mut self.trainer_2.team,
        }
    }

    /// Reveal a pairing to both trainers and compute the challenger's damage ratio.
    fn engage(&mut self, slot_1: usize, slot_2: usize) -> f64 {
        let challenger = self.trainer_1.team.pokemon(slot_1).clone();
        let opponent = self.trainer_2.team.pokemon(slot_2).clone();
        let (species_1, species_2) = (challenger.species, opponent.species);

        for trainer in [&mut *self.trainer_1, &mut *self.trainer_2] {
            trainer.register_pokemon(&challenger);
            trainer.register_pokemon(&opponent);
        }

        let ratio = self.trainer_1.pokedex_completion() / self.trainer_2.pokedex_completion();
        self.round += 1;
        tracing::debug!(
            "Round {}: {} vs {} (ratio {:.3})",
            self.round,
            species_1,
            species_2,
            ratio
        );
        self.events.push(BattleEvent::ContendersSelected {
            round: self.round,
            challenger: species_1,
            opponent: species_2,
            ratio,
        });
        ratio
    }

    /// Commit mode: the front pair fights to a conclusion and only the loser leaves.
    fn set_battle(&mut self) -> BattleResult<()> {
        while self.teams_standing() {
            let (Some(slot_1), Some(slot_2)) = (
                self.trainer_1.team.peek_contender()?,
                self.trainer_2.team.peek_contender()?,
            ) else {
                break;
            };
            let ratio = self.engage(slot_1, slot_2);

            let outcome = battle_rounds(
                self.trainer_1.team.pokemon_mut(slot_1),
                self.trainer_2.team.pokemon_mut(slot_2),
                ratio,
                self.table,
                &mut self.events,
            );

            let defeated: &[Side] = match outcome {
                RoundOutcome::Winner(Side::Challenger) => &[Side::Opponent],
                RoundOutcome::Winner(Side::Opponent) => &[Side::Challenger],
                RoundOutcome::DoubleKnockout | RoundOutcome::Stalemate => {
                    &[Side::Challenger, Side::Opponent]
                }
            };
            for &side in defeated {
                let team = self.team_mut(side);
                team.remove_front()?;
                team.record_defeat();
            }
        }
        Ok(())
    }

    /// Rotation mode: both heads play one exchange and survivors go to the back.
    fn rotate_battle(&mut self) -> BattleResult<()> {
        while self.teams_standing() {
            let (Some(slot_1), Some(slot_2)) =
                (self.trainer_1.team.serve()?, self.trainer_2.team.serve()?)
            else {
                break;
            };
            let ratio = self.engage(slot_1, slot_2);

            battle_round(
                self.trainer_1.team.pokemon_mut(slot_1),
                self.trainer_2.team.pokemon_mut(slot_2),
                ratio,
                self.table,
                &mut self.events,
            );

            for (side, slot) in [(Side::Challenger, slot_1), (Side::Opponent, slot_2)] {
                let team = self.team_mut(side);
                if team.pokemon(slot).is_alive() {
                    team.append(slot)?;
                } else {
                    team.record_defeat();
                }
            }
        }
        Ok(())
    }

    /// Greedy-reorder mode: the least-key pair plays one exchange and survivors
    /// are re-ranked by their changed stats.
    fn optimise_battle(&mut self) -> BattleResult<()> {
        while self.teams_standing() {
            let (Some((slot_1, _)), Some((slot_2, _))) = (
                self.trainer_1.team.take_least()?,
                self.trainer_2.team.take_least()?,
            ) else {
                break;
            };
            let ratio = self.engage(slot_1, slot_2);

            battle_round(
                self.trainer_1.team.pokemon_mut(slot_1),
                self.trainer_2.team.pokemon_mut(slot_2),
                ratio,
                self.table,
                &mut self.events,
            );

            for (side, slot) in [(Side::Challenger, slot_1), (Side::Opponent, slot_2)] {
                let team = self.team_mut(side);
                if !team.requeue_or_drop(slot)? {
                    team.record_defeat();
                }
            }
        }
        Ok(())
    }
}
