#[cfg(test)]
mod tests {
    use crate::battle::engine::Battle;
    use crate::battle::state::{BattleEvent, BattleOutcome};
    use crate::battle::tests::common::{
        assert_ok, create_structured_trainer, TestPokemonBuilder,
    };
    use crate::effectiveness::EffectivenessTable;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{BattleMode, Criterion, PokemonType, Species};

    fn pairings(events: &[BattleEvent]) -> Vec<(Species, Species)> {
        events
            .iter()
            .filter_map(|event| match event {
                BattleEvent::ContendersSelected {
                    challenger,
                    opponent,
                    ..
                } => Some((*challenger, *opponent)),
                _ => None,
            })
            .collect()
    }

    #[rstest]
    #[case::set(BattleMode::Set)]
    #[case::rotate(BattleMode::Rotate)]
    #[case::optimise(BattleMode::Optimise)]
    fn test_empty_teams_decide_without_rounds(#[case] mode: BattleMode) {
        let table = EffectivenessTable::standard().unwrap();
        let pokemon = || vec![TestPokemonBuilder::new(Species::Eevee).build()];

        // Challenger has nothing to field.
        let mut empty = create_structured_trainer("Empty", vec![], mode, Criterion::Health);
        let mut full = create_structured_trainer("Full", pokemon(), mode, Criterion::Health);
        let mut battle = Battle::new(&mut empty, &mut full, mode, table);
        assert_eq!(assert_ok(battle.commence_battle()), BattleOutcome::Trainer2Win);
        assert_eq!(battle.rounds_played(), 0);

        // Opponent has nothing to field.
        let mut full = create_structured_trainer("Full", pokemon(), mode, Criterion::Health);
        let mut empty = create_structured_trainer("Empty", vec![], mode, Criterion::Health);
        let mut battle = Battle::new(&mut full, &mut empty, mode, table);
        assert_eq!(assert_ok(battle.commence_battle()), BattleOutcome::Trainer1Win);

        // Neither does.
        let mut first = create_structured_trainer("First", vec![], mode, Criterion::Health);
        let mut second = create_structured_trainer("Second", vec![], mode, Criterion::Health);
        let mut battle = Battle::new(&mut first, &mut second, mode, table);
        assert_eq!(assert_ok(battle.commence_battle()), BattleOutcome::Draw);
    }

    #[test]
    fn test_one_on_one_faster_knockout() {
        let table = EffectivenessTable::standard().unwrap();
        let fast = TestPokemonBuilder::new(Species::Eevee)
            .with_stats(20.0, 10.0, 1.0, 10.0)
            .build();
        let slow = TestPokemonBuilder::new(Species::Eevee)
            .with_stats(5.0, 10.0, 1.0, 5.0)
            .build();
        let mut red = create_structured_trainer("Red", vec![fast], BattleMode::Set, Criterion::Health);
        let mut blue = create_structured_trainer("Blue", vec![slow], BattleMode::Set, Criterion::Health);

        let outcome = {
            let mut battle = Battle::new(&mut red, &mut blue, BattleMode::Set, table);
            let outcome = assert_ok(battle.commence_battle());
            battle
                .events()
                .print_debug_with_message("--- Events for one-on-one battle ---");
            outcome
        };

        assert_eq!(outcome, BattleOutcome::Trainer1Win);
        assert_eq!(red.team.roster()[0].level, 2);
        assert_eq!(red.team.roster()[0].health, 20.0);
        assert_eq!(blue.team.roster()[0].health, 0.0);
        assert_eq!(red.team.count(), 1);
        assert_eq!(blue.team.count(), 0);
        assert!(blue.team.is_empty());
    }

    #[test]
    fn test_set_mode_winner_stays_in_front() {
        let table = EffectivenessTable::standard().unwrap();
        let lapras = TestPokemonBuilder::new(Species::Lapras)
            .with_stats(50.0, 10.0, 1.0, 10.0)
            .build();
        let eevee = TestPokemonBuilder::new(Species::Eevee)
            .with_stats(5.0, 1.0, 1.0, 1.0)
            .build();
        let snorlax = TestPokemonBuilder::new(Species::Snorlax)
            .with_stats(5.0, 1.0, 1.0, 1.0)
            .build();
        let mut red = create_structured_trainer("Red", vec![lapras], BattleMode::Set, Criterion::Health);
        let mut blue = create_structured_trainer(
            "Blue",
            vec![eevee, snorlax],
            BattleMode::Set,
            Criterion::Health,
        );

        let mut battle = Battle::new(&mut red, &mut blue, BattleMode::Set, table);
        let outcome = assert_ok(battle.commence_battle());
        let pairs = pairings(battle.events().events());
        drop(battle);

        assert_eq!(outcome, BattleOutcome::Trainer1Win);
        // Last drafted fights first; the winner keeps its place.
        assert_eq!(
            pairs,
            vec![
                (Species::Lapras, Species::Snorlax),
                (Species::Lapras, Species::Eevee)
            ]
        );
        assert_eq!(red.team.roster()[0].level, 4);
        assert_eq!(red.team.roster()[0].health, 50.0);
    }

    #[test]
    fn test_rotate_mode_cycles_contenders() {
        let table = EffectivenessTable::standard().unwrap();
        let sturdy = |species| {
            TestPokemonBuilder::new(species)
                .with_stats(50.0, 2.0, 10.0, 5.0)
                .build()
        };
        let mut red = create_structured_trainer(
            "Red",
            vec![sturdy(Species::Eevee), sturdy(Species::Snorlax)],
            BattleMode::Rotate,
            Criterion::Health,
        );
        let mut blue = create_structured_trainer(
            "Blue",
            vec![sturdy(Species::Lapras), sturdy(Species::Golem)],
            BattleMode::Rotate,
            Criterion::Health,
        );

        let mut battle = Battle::new(&mut red, &mut blue, BattleMode::Rotate, table);
        let outcome = assert_ok(battle.commence_battle());
        let pairs = pairings(battle.events().events());
        drop(battle);

        assert_eq!(
            pairs[..3].to_vec(),
            vec![
                (Species::Eevee, Species::Lapras),
                (Species::Snorlax, Species::Golem),
                (Species::Eevee, Species::Lapras),
            ]
        );
        match outcome {
            BattleOutcome::Trainer1Win => assert!(blue.team.is_empty() && !red.team.is_empty()),
            BattleOutcome::Trainer2Win => assert!(red.team.is_empty() && !blue.team.is_empty()),
            BattleOutcome::Draw => assert!(red.team.is_empty() && blue.team.is_empty()),
        }
    }

    fn chip_only_team(name: &str, species: [(Species, f64); 2]) -> crate::player::Trainer {
        let team = species
            .iter()
            .map(|&(species, health)| {
                TestPokemonBuilder::new(species)
                    .with_stats(health, 0.0, 5.0, 5.0)
                    .build()
            })
            .collect();
        create_structured_trainer(name, team, BattleMode::Optimise, Criterion::Health)
    }

    #[test]
    fn test_optimise_mode_always_fields_the_least_key() {
        let table = EffectivenessTable::standard().unwrap();
        let mut red = chip_only_team("Red", [(Species::Eevee, 10.0), (Species::Snorlax, 30.0)]);
        let mut blue = chip_only_team("Blue", [(Species::Lapras, 20.0), (Species::Golem, 40.0)]);

        let mut battle = Battle::new(&mut red, &mut blue, BattleMode::Optimise, table);
        let outcome = assert_ok(battle.commence_battle());
        let pairs = pairings(battle.events().events());
        drop(battle);

        // Only attrition deals damage, so each fight lasts as long as the weaker health.
        assert_eq!(pairs.len(), 10 + 10 + 20);
        assert_eq!(pairs[0], (Species::Eevee, Species::Lapras));
        assert_eq!(pairs[10], (Species::Snorlax, Species::Lapras));
        assert_eq!(pairs[20], (Species::Snorlax, Species::Golem));
        assert_eq!(outcome, BattleOutcome::Trainer2Win);
        assert_eq!(blue.team.count(), 1);
        assert_eq!(blue.team.order_keys(), vec![20.0]);
    }

    #[test]
    fn test_set_special_fields_the_reversed_front_half() {
        let table = EffectivenessTable::standard().unwrap();
        let team = [Species::Charmander, Species::Squirtle, Species::Bulbasaur, Species::Pikachu]
            .into_iter()
            .map(|species| TestPokemonBuilder::new(species).build())
            .collect();
        let mut red = create_structured_trainer("Red", team, BattleMode::Set, Criterion::Health);
        let eevee = TestPokemonBuilder::new(Species::Eevee).build();
        let mut blue = create_structured_trainer("Blue", vec![eevee], BattleMode::Set, Criterion::Health);
        assert_ok(red.team.special(BattleMode::Set).map_err(Into::into));
        assert_eq!(
            red.team.lineup_species(),
            vec![Species::Bulbasaur, Species::Pikachu, Species::Squirtle, Species::Charmander]
        );
        assert!(!blue.pokedex.contains(PokemonType::Grass));

        let mut battle = Battle::new(&mut red, &mut blue, BattleMode::Set, table);
        assert_ok(battle.commence_battle());
        let pairs = pairings(battle.events().events());
        drop(battle);

        assert_eq!(pairs[0], (Species::Bulbasaur, Species::Eevee));
        assert!(blue.pokedex.contains(PokemonType::Grass));
        assert!(red.pokedex.contains(PokemonType::Normal));
    }

    #[test]
    fn test_optimise_special_fields_the_greatest_key() {
        let table = EffectivenessTable::standard().unwrap();
        let mut red = chip_only_team("Red", [(Species::Eevee, 10.0), (Species::Snorlax, 30.0)]);
        let mut blue = chip_only_team("Blue", [(Species::Lapras, 20.0), (Species::Golem, 40.0)]);
        assert_ok(red.team.special(BattleMode::Optimise).map_err(Into::into));

        let mut battle = Battle::new(&mut red, &mut blue, BattleMode::Optimise, table);
        assert_ok(battle.commence_battle());
        let pairs = pairings(battle.events().events());

        assert_eq!(pairs[0], (Species::Snorlax, Species::Lapras));
    }

    #[test]
    fn test_optimise_by_level_fields_the_lowest_level() {
        let table = EffectivenessTable::standard().unwrap();
        let build = |species, level| {
            TestPokemonBuilder::new(species)
                .with_stats(3.0, 0.0, 5.0, 5.0)
                .with_level(level)
                .build()
        };
        let mut red = create_structured_trainer(
            "Red",
            vec![build(Species::Eevee, 5), build(Species::Snorlax, 1)],
            BattleMode::Optimise,
            Criterion::Level,
        );
        let mut blue = create_structured_trainer(
            "Blue",
            vec![build(Species::Golem, 9), build(Species::Lapras, 2)],
            BattleMode::Optimise,
            Criterion::Level,
        );

        let mut battle = Battle::new(&mut red, &mut blue, BattleMode::Optimise, table)
            .with_criterion(Criterion::Level);
        assert_ok(battle.commence_battle());
        let pairs = pairings(battle.events().events());

        assert_eq!(pairs[0], (Species::Snorlax, Species::Lapras));
    }

    #[test]
    fn test_battle_events_bracket_the_fight() {
        let table = EffectivenessTable::standard().unwrap();
        let mut red = chip_only_team("Red", [(Species::Eevee, 3.0), (Species::Snorlax, 3.0)]);
        let mut blue = chip_only_team("Blue", [(Species::Lapras, 2.0), (Species::Golem, 2.0)]);

        let mut battle = Battle::new(&mut red, &mut blue, BattleMode::Optimise, table)
            .with_criterion(Criterion::Health);
        let outcome = assert_ok(battle.commence_battle());
        let events = battle.into_events();

        assert_eq!(
            events.events().first(),
            Some(&BattleEvent::BattleStarted {
                mode: BattleMode::Optimise
            })
        );
        assert_eq!(
            events.events().last(),
            Some(&BattleEvent::BattleEnded { outcome })
        );
        let lines = events.formatted_lines(["Red", "Blue"]);
        assert!(lines.iter().any(|line| line.contains("fainted")));
    }
}
