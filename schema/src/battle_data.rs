use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// How a trainer's team is ordered and rotated during a battle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum BattleMode {
    /// Last-in-first-out: the front combatant fights until it faints.
    Set = 0,
    /// First-in-first-out: one exchange per cycle, survivors go to the back.
    Rotate = 1,
    /// Key-ordered by a [`Criterion`], survivors are re-ranked after each exchange.
    Optimise = 2,
}

impl BattleMode {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<BattleMode> {
        match value {
            0 => Some(BattleMode::Set),
            1 => Some(BattleMode::Rotate),
            2 => Some(BattleMode::Optimise),
            _ => None,
        }
    }
}

impl fmt::Display for BattleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Attribute used to rank combatants in [`BattleMode::Optimise`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    #[default]
    Health,
    Experience,
    Defence,
    BattlePower,
    Level,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = (*self).into();
        f.write_str(name)
    }
}
