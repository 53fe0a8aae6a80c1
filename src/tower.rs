use std::collections::VecDeque;

use rand::Rng;
use schema::BattleMode;
use serde::Serialize;

use crate::battle::engine::Battle;
use crate::battle::state::{BattleOutcome, EventBus};
use crate::config::LadderConfig;
use crate::effectiveness::EffectivenessTable;
use crate::errors::{BattleResult, BattleStateError, ConfigError, ConfigResult, TeamError};
use crate::player::{TeamSelection, Trainer};

/// Every tower battle is fought in rotation.
pub const TOWER_MODE: BattleMode = BattleMode::Rotate;

/// Summary of one tower battle.
#[derive(Debug, Clone, Serialize)]
pub struct TowerRound {
    pub outcome: BattleOutcome,
    pub challenger_lives: u32,
    pub opponent: String,
    pub opponent_lives: u32,
    /// Sum of the lives every opponent still has.
    pub remaining_enemy_lives: u32,
    #[serde(skip)]
    pub events: EventBus,
}

/// A ladder: one challenger against a rotating queue of opponents, each with lives.
pub struct BattleTower<'t> {
    config: LadderConfig,
    table: &'t EffectivenessTable,
    challenger: Option<Trainer>,
    opponents: VecDeque<Trainer>,
    enemy_lives: u32,
    defeated: u32,
    generated: usize,
}

impl<'t> BattleTower<'t> {
    pub fn new(config: LadderConfig, table: &'t EffectivenessTable) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            table,
            challenger: None,
            opponents: VecDeque::new(),
            enemy_lives: 0,
            defeated: 0,
            generated: 0,
        })
    }

    fn roll_lives<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.config.min_lives..=self.config.max_lives)
    }

    /// Enter the challenger with a random number of lives within the configured bounds.
    pub fn set_my_trainer<R: Rng + ?Sized>(
        &mut self,
        trainer: Trainer,
        rng: &mut R,
    ) -> BattleResult<()> {
        let lives = self.roll_lives(rng);
        self.set_my_trainer_with_lives(trainer, lives)
    }

    pub fn set_my_trainer_with_lives(&mut self, mut trainer: Trainer, lives: u32) -> BattleResult<()> {
        if trainer.team.roster().is_empty() {
            return Err(TeamError::EmptyRoster.into());
        }
        trainer.lives = lives;
        tracing::info!("{} enters the tower with {} lives", trainer.name, lives);
        self.challenger = Some(trainer);
        Ok(())
    }

    /// Queue `count` opponents with random teams and random lives.
    pub fn generate_enemy_trainers<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> BattleResult<()> {
        for _ in 0..count {
            self.generated += 1;
            let mut enemy = Trainer::new(format!("Enemy {}", self.generated));
            enemy.pick_team(TeamSelection::Random, rng)?;
            enemy.team.assemble(TOWER_MODE)?;
            let lives = self.roll_lives(rng);
            self.add_enemy(enemy, lives)?;
        }
        Ok(())
    }

    /// Queue a ready-made opponent at the back of the rotation.
    pub fn add_enemy(&mut self, mut trainer: Trainer, lives: u32) -> BattleResult<()> {
        if trainer.team.roster().is_empty() {
            return Err(TeamError::EmptyRoster.into());
        }
        if lives == 0 {
            return Err(ConfigError::InvalidLadder(format!("{} has no lives", trainer.name)).into());
        }
        trainer.lives = lives;
        tracing::debug!("{} joins the tower with {} lives", trainer.name, lives);
        self.enemy_lives += lives;
        self.opponents.push_back(trainer);
        Ok(())
    }

    /// True while the challenger and at least one opponent both have lives left.
    pub fn battles_remaining(&self) -> bool {
        let challenger_alive = self
            .challenger
            .as_ref()
            .is_some_and(|trainer| trainer.lives > 0);
        challenger_alive && self.enemy_lives > 0
    }

    /// Fight the opponent at the front of the rotation.
    ///
    /// Both teams are healed and rebuilt for rotation first. An opponent with
    /// lives left goes to the back of the queue, a depleted one leaves the tower.
    pub fn next_battle(&mut self) -> BattleResult<TowerRound> {
        if self.challenger.is_none() {
            return Err(BattleStateError::NoChallenger.into());
        }
        if !self.battles_remaining() {
            return Err(BattleStateError::TowerExhausted.into());
        }
        let challenger = self
            .challenger
            .as_mut()
            .ok_or(BattleStateError::NoChallenger)?;
        let mut enemy = self
            .opponents
            .pop_front()
            .ok_or(BattleStateError::NoOpponents)?;

        let (outcome, events) = match fight(challenger, &mut enemy, self.table) {
            Ok(result) => result,
            Err(err) => {
                self.opponents.push_front(enemy);
                return Err(err);
            }
        };

        match outcome {
            BattleOutcome::Trainer1Win => {
                enemy.lives = enemy.lives.saturating_sub(1);
                self.enemy_lives = self.enemy_lives.saturating_sub(1);
                self.defeated += 1;
            }
            BattleOutcome::Trainer2Win => {
                challenger.lives = challenger.lives.saturating_sub(1);
            }
            BattleOutcome::Draw => {
                challenger.lives = challenger.lives.saturating_sub(1);
                enemy.lives = enemy.lives.saturating_sub(1);
                self.enemy_lives = self.enemy_lives.saturating_sub(1);
            }
        }

        tracing::info!(
            "{} vs {}: {:?} (lives {} / {}, {} enemy lives left)",
            challenger.name,
            enemy.name,
            outcome,
            challenger.lives,
            enemy.lives,
            self.enemy_lives
        );

        let round = TowerRound {
            outcome,
            challenger_lives: challenger.lives,
            opponent: enemy.name.clone(),
            opponent_lives: enemy.lives,
            remaining_enemy_lives: self.enemy_lives,
            events,
        };

        if enemy.lives > 0 {
            self.opponents.push_back(enemy);
        } else {
            tracing::debug!("{} leaves the tower", enemy.name);
        }
        Ok(round)
    }

    /// Number of battles the challenger has won.
    pub fn enemies_defeated(&self) -> u32 {
        self.defeated
    }

    pub fn remaining_enemy_lives(&self) -> u32 {
        self.enemy_lives
    }

    pub fn challenger(&self) -> Option<&Trainer> {
        self.challenger.as_ref()
    }

    /// Opponents still in the rotation, next first.
    pub fn opponents(&self) -> impl Iterator<Item = &Trainer> {
        self.opponents.iter()
    }
}

fn fight(
    challenger: &mut Trainer,
    enemy: &mut Trainer,
    table: &EffectivenessTable,
) -> BattleResult<(BattleOutcome, EventBus)> {
    challenger.team.regenerate(TOWER_MODE, None)?;
    enemy.team.regenerate(TOWER_MODE, None)?;

    let mut battle = Battle::new(challenger, enemy, TOWER_MODE, table);
    let outcome = battle.commence_battle()?;
    Ok((outcome, battle.into_events()))
}
