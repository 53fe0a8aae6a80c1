use crate::battle::state::{BattleEvent, EventBus, RoundOutcome, Side};
use crate::effectiveness::EffectivenessTable;
use crate::pokemon::PokemonInst;

/// Health both contenders lose when a round leaves them both standing.
pub const ATTRITION_DAMAGE: f64 = 1.0;

/// One attack: the attacker's damage scaled by `ratio`, rounded up, then defended.
pub fn battle_attack(
    attacker: &PokemonInst,
    defender: &mut PokemonInst,
    ratio: f64,
    table: &EffectivenessTable,
    bus: &mut EventBus,
) {
    let damage = (attacker.attack(defender, table) * ratio).ceil();
    let dealt = defender.defend(damage);
    bus.push(BattleEvent::DamageDealt {
        attacker: attacker.species,
        target: defender.species,
        damage: dealt,
        remaining_hp: defender.health,
    });
}

/// Play a single exchange between the challenger's and the opponent's contender.
///
/// `ratio` is the challenger's damage multiplier; the opponent attacks with its
/// reciprocal. The faster contender strikes first and a knockout ends the
/// exchange before the counter. On equal speed both strike regardless.
pub fn battle_round(
    challenger: &mut PokemonInst,
    opponent: &mut PokemonInst,
    ratio: f64,
    table: &EffectivenessTable,
    bus: &mut EventBus,
) -> RoundOutcome {
    let reciprocal = 1.0 / ratio;

    if challenger.speed > opponent.speed {
        battle_attack(challenger, opponent, ratio, table, bus);
        if opponent.is_alive() {
            battle_attack(opponent, challenger, reciprocal, table, bus);
        }
    } else if challenger.speed < opponent.speed {
        battle_attack(opponent, challenger, reciprocal, table, bus);
        if challenger.is_alive() {
            battle_attack(challenger, opponent, ratio, table, bus);
        }
    } else {
        battle_attack(challenger, opponent, ratio, table, bus);
        battle_attack(opponent, challenger, reciprocal, table, bus);
    }

    end_round(challenger, opponent, bus)
}

/// Adjudicate a finished exchange: attrition when both stand, level-up for a
/// sole survivor.
fn end_round(
    challenger: &mut PokemonInst,
    opponent: &mut PokemonInst,
    bus: &mut EventBus,
) -> RoundOutcome {
    if challenger.is_alive() && opponent.is_alive() {
        challenger.take_chip(ATTRITION_DAMAGE);
        opponent.take_chip(ATTRITION_DAMAGE);
        bus.push(BattleEvent::AttritionTick {
            challenger_hp: challenger.health,
            opponent_hp: opponent.health,
        });
        if challenger.is_alive() && opponent.is_alive() {
            return RoundOutcome::Stalemate;
        }
    }

    match (challenger.is_alive(), opponent.is_alive()) {
        (true, false) => {
            faint(Side::Opponent, opponent, bus);
            level_up(Side::Challenger, challenger, bus);
            RoundOutcome::Winner(Side::Challenger)
        }
        (false, true) => {
            faint(Side::Challenger, challenger, bus);
            level_up(Side::Opponent, opponent, bus);
            RoundOutcome::Winner(Side::Opponent)
        }
        _ => {
            faint(Side::Challenger, challenger, bus);
            faint(Side::Opponent, opponent, bus);
            RoundOutcome::DoubleKnockout
        }
    }
}

fn faint(side: Side, pokemon: &PokemonInst, bus: &mut EventBus) {
    bus.push(BattleEvent::PokemonFainted {
        side,
        pokemon: pokemon.species,
    });
}

fn level_up(side: Side, pokemon: &mut PokemonInst, bus: &mut EventBus) {
    let from = pokemon.species;
    let evolved = pokemon.level_up();
    bus.push(BattleEvent::LevelUp {
        side,
        pokemon: from,
        new_level: pokemon.level,
    });
    if let Some(into) = evolved {
        bus.push(BattleEvent::Evolved { side, from, into });
    }
}

/// Repeat exchanges between the same pair until at least one faints.
///
/// Terminates because every stalemate costs both contenders
/// [`ATTRITION_DAMAGE`] health, and health never increases mid-fight except
/// through the winner's evolution, which ends the fight.
pub fn battle_rounds(
    challenger: &mut PokemonInst,
    opponent: &mut PokemonInst,
    ratio: f64,
    table: &EffectivenessTable,
    bus: &mut EventBus,
) -> RoundOutcome {
    loop {
        match (challenger.is_alive(), opponent.is_alive()) {
            (true, true) => {}
            (true, false) => return RoundOutcome::Winner(Side::Challenger),
            (false, true) => return RoundOutcome::Winner(Side::Opponent),
            (false, false) => return RoundOutcome::DoubleKnockout,
        }
        let outcome = battle_round(challenger, opponent, ratio, table, bus);
        if outcome != RoundOutcome::Stalemate {
            return outcome;
        }
    }
}
