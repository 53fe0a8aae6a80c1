#[cfg(test)]
mod tests {
    use crate::battle::engine::Battle;
    use crate::battle::tests::common::{create_structured_trainer, create_test_trainer, TestPokemonBuilder};
    use crate::effectiveness::EffectivenessTable;
    use crate::errors::{BattleEngineError, TeamError};
    use pretty_assertions::assert_eq;
    use schema::{BattleMode, Criterion, Species};

    #[test]
    fn test_unassembled_team_is_rejected() {
        let table = EffectivenessTable::standard().unwrap();
        let pokemon = vec![TestPokemonBuilder::new(Species::Pikachu).build()];
        let mut red = create_test_trainer("Red", pokemon.clone());
        let mut blue = create_structured_trainer("Blue", pokemon, BattleMode::Set, Criterion::Health);

        let mut battle = Battle::new(&mut red, &mut blue, BattleMode::Set, table);
        assert_eq!(
            battle.commence_battle(),
            Err(BattleEngineError::Team(TeamError::NotAssembled))
        );
        assert!(battle.events().is_empty());
    }

    #[test]
    fn test_formation_must_match_battle_mode() {
        let table = EffectivenessTable::standard().unwrap();
        let pokemon = vec![TestPokemonBuilder::new(Species::Pikachu).build()];
        let mut red = create_structured_trainer("Red", pokemon.clone(), BattleMode::Set, Criterion::Health);
        let mut blue = create_structured_trainer("Blue", pokemon, BattleMode::Rotate, Criterion::Health);

        let mut battle = Battle::new(&mut red, &mut blue, BattleMode::Set, table);
        assert_eq!(
            battle.commence_battle(),
            Err(BattleEngineError::Team(TeamError::FormationMismatch {
                expected: BattleMode::Set
            }))
        );
    }

    #[test]
    fn test_mismatch_leaves_teams_untouched() {
        let table = EffectivenessTable::standard().unwrap();
        let pokemon = vec![TestPokemonBuilder::new(Species::Machop).build()];
        let mut red = create_structured_trainer("Red", pokemon.clone(), BattleMode::Optimise, Criterion::Level);
        let mut blue = create_structured_trainer("Blue", pokemon, BattleMode::Optimise, Criterion::Level);
        let before = (red.team.clone(), blue.team.clone());

        let mut battle = Battle::new(&mut red, &mut blue, BattleMode::Rotate, table);
        assert!(battle.commence_battle().is_err());
        drop(battle);

        assert_eq!((red.team, blue.team), before);
    }
}
