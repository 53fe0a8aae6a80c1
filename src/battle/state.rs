use schema::{BattleMode, Species};
use serde::{Deserialize, Serialize};

/// Which trainer of a battle a Pokemon belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first trainer passed to the battle; the ratio is computed from its side.
    Challenger,
    Opponent,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Challenger => 0,
            Side::Opponent => 1,
        }
    }
}

/// Result of a single exchange between two contenders.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Exactly one contender is left standing.
    Winner(Side),
    /// Both contenders fainted in the same round.
    DoubleKnockout,
    /// Both contenders are still standing after the attrition tick.
    Stalemate,
}

/// Final result of a whole battle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Trainer1Win,
    Trainer2Win,
    Draw,
}

impl BattleOutcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            BattleOutcome::Trainer1Win => Some(Side::Challenger),
            BattleOutcome::Trainer2Win => Some(Side::Opponent),
            BattleOutcome::Draw => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    BattleStarted {
        mode: BattleMode,
    },
    ContendersSelected {
        round: u32,
        challenger: Species,
        opponent: Species,
        ratio: f64,
    },
    DamageDealt {
        attacker: Species,
        target: Species,
        damage: f64,
        remaining_hp: f64,
    },
    AttritionTick {
        challenger_hp: f64,
        opponent_hp: f64,
    },
    PokemonFainted {
        side: Side,
        pokemon: Species,
    },
    LevelUp {
        side: Side,
        pokemon: Species,
        new_level: u32,
    },
    Evolved {
        side: Side,
        from: Species,
        into: Species,
    },
    BattleEnded {
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self, trainer_names: [&str; 2]) -> Option<String> {
        match self {
            BattleEvent::BattleStarted { mode } => Some(format!(
                "{} and {} begin a {} battle!",
                trainer_names[0], trainer_names[1], mode
            )),
            BattleEvent::ContendersSelected {
                round,
                challenger,
                opponent,
                ..
            } => Some(format!(
                "=== Round {}: {} vs {} ===",
                round, challenger, opponent
            )),
            BattleEvent::DamageDealt { target, damage, .. } => {
                Some(format!("{} took {} damage!", target, damage))
            }
            BattleEvent::AttritionTick { .. } => {
                None // Silent - the chip shows up in the remaining HP of later events
            }
            BattleEvent::PokemonFainted { side, pokemon } => Some(format!(
                "{}'s {} fainted!",
                trainer_names[side.index()],
                pokemon
            )),
            BattleEvent::LevelUp {
                pokemon, new_level, ..
            } => Some(format!("{} grew to level {}!", pokemon, new_level)),
            BattleEvent::Evolved { from, into, .. } => {
                Some(format!("{} evolved into {}!", from, into))
            }
            BattleEvent::BattleEnded { outcome } => match outcome.winner() {
                Some(side) => Some(format!(
                    "{} has won the battle!",
                    trainer_names[side.index()]
                )),
                None => Some("The battle ended in a draw!".to_string()),
            },
        }
    }
}

/// Event bus for collecting and managing battle events.
///
/// ## Usage Examples
///
/// ```rust,ignore
/// event_bus.print_debug();                                     // Just print events
/// event_bus.print_debug_with_message("Battle events:");        // With header message
/// event_bus.print_formatted(["Gary", "Ash"]);                  // Human-readable format
/// println!("{}", event_bus);                                   // Display trait
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print all events in debug format with a custom prefix message.
    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        self.print_debug();
    }

    /// Print all events using their formatted text, skipping silent ones.
    pub fn print_formatted(&self, trainer_names: [&str; 2]) {
        for line in self.formatted_lines(trainer_names) {
            println!("  {}", line);
        }
    }

    pub fn formatted_lines(&self, trainer_names: [&str; 2]) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| event.format(trainer_names))
            .collect()
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Format the EventBus for printing. Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod event_formatting_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NAMES: [&str; 2] = ["Gary", "Ash"];

    #[test]
    fn test_silent_events_return_none() {
        let event = BattleEvent::AttritionTick {
            challenger_hp: 3.0,
            opponent_hp: 4.0,
        };
        assert!(event.format(NAMES).is_none());
    }

    #[test]
    fn test_event_text_samples() {
        let faint = BattleEvent::PokemonFainted {
            side: Side::Opponent,
            pokemon: Species::Pikachu,
        };
        assert_eq!(faint.format(NAMES), Some("Ash's Pikachu fainted!".to_string()));

        let evolved = BattleEvent::Evolved {
            side: Side::Challenger,
            from: Species::Charmander,
            into: Species::Charmeleon,
        };
        assert_eq!(
            evolved.format(NAMES),
            Some("Charmander evolved into Charmeleon!".to_string())
        );

        let ended = BattleEvent::BattleEnded {
            outcome: BattleOutcome::Trainer1Win,
        };
        assert_eq!(ended.format(NAMES), Some("Gary has won the battle!".to_string()));

        let draw = BattleEvent::BattleEnded {
            outcome: BattleOutcome::Draw,
        };
        assert_eq!(draw.format(NAMES), Some("The battle ended in a draw!".to_string()));
    }

    #[test]
    fn test_event_bus_collects_and_displays() {
        let mut event_bus = EventBus::new();
        event_bus.push(BattleEvent::BattleStarted {
            mode: BattleMode::Rotate,
        });
        event_bus.push(BattleEvent::AttritionTick {
            challenger_hp: 1.0,
            opponent_hp: 2.0,
        });

        assert!(!event_bus.is_empty());
        assert_eq!(event_bus.len(), 2);
        assert_eq!(
            event_bus.formatted_lines(NAMES),
            vec!["Gary and Ash begin a Rotate battle!".to_string()]
        );

        let display_output = format!("{}", event_bus);
        assert!(display_output.contains("BattleStarted"));
        assert!(display_output.contains("AttritionTick"));
    }
}
