use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use pokemon_tower::species::{parse_species, SpeciesSheet};
use pokemon_tower::{
    parse_criterion, parse_mode, Battle, BattleEngineError, BattleMode, BattleOutcome,
    BattleTower, Criterion, EffectivenessTable, LadderConfig, Species, TeamSelection,
    TowerRound, Trainer,
};

#[derive(Parser, Debug)]
#[command(name = "pokemon-tower")]
#[command(about = "Run a trainer battle followed by a battle tower ladder")]
struct Args {
    /// Random seed for reproducible drafts and lives
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Battle mode for the opening battle: set, rotate, optimise (or 0-2)
    #[arg(long, default_value = "set")]
    mode: String,

    /// Sort criterion for optimise mode
    #[arg(long, default_value = "health")]
    criterion: String,

    /// Species for your team, comma separated (random when omitted)
    #[arg(long, value_delimiter = ',')]
    team: Vec<String>,

    /// Type effectiveness CSV (the bundled chart when omitted)
    #[arg(long)]
    table: Option<PathBuf>,

    /// Tower config in RON (the defaults when omitted)
    #[arg(long)]
    tower: Option<PathBuf>,

    /// Print a species sheet and exit
    #[arg(long)]
    show_species: Option<String>,

    /// Shuffle your team's formation once before the opening battle
    #[arg(long, default_value_t = false)]
    special: bool,

    /// Print a JSON summary instead of the battle log
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct BattleSummary {
    mode: BattleMode,
    criterion: Criterion,
    outcome: BattleOutcome,
    rounds: usize,
    red_team: Vec<Species>,
    blue_team: Vec<Species>,
}

#[derive(Serialize)]
struct TowerSummary {
    challenger_lives: u32,
    enemies_defeated: u32,
    remaining_enemy_lives: u32,
    battles: Vec<TowerRound>,
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    battle: BattleSummary,
    tower: TowerSummary,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pokemon_tower=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), BattleEngineError> {
    if let Some(name) = &args.show_species {
        println!("{}", SpeciesSheet(parse_species(name)?));
        return Ok(());
    }

    let mode = parse_mode(&args.mode)?;
    let criterion = parse_criterion(&args.criterion)?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    let loaded;
    let table = match &args.table {
        Some(path) => {
            loaded = EffectivenessTable::load(path)?;
            &loaded
        }
        None => EffectivenessTable::standard()?,
    };
    let ladder = match &args.tower {
        Some(path) => LadderConfig::load(path)?,
        None => LadderConfig::default(),
    };

    // --- Opening battle ---
    let mut red = Trainer::new("Red");
    let mut blue = Trainer::new("Blue");
    if args.team.is_empty() {
        red.pick_team(TeamSelection::Random, &mut rng)?;
    } else {
        let names: Vec<&str> = args.team.iter().map(String::as_str).collect();
        red.pick_team(TeamSelection::Manual(&names), &mut rng)?;
    }
    blue.pick_team(TeamSelection::Random, &mut rng)?;
    red.team.structure(mode, Some(criterion))?;
    blue.team.structure(mode, Some(criterion))?;
    if args.special {
        red.team.special(mode)?;
    }

    if !args.json {
        println!("{}\n{}", red, red.team);
        println!("{}\n{}", blue, blue.team);
    }

    let red_team = red.team.lineup_species();
    let blue_team = blue.team.lineup_species();
    let mut battle = Battle::new(&mut red, &mut blue, mode, table).with_criterion(criterion);
    let outcome = battle.commence_battle()?;
    let rounds = battle.rounds_played() as usize;
    let events = battle.into_events();

    if !args.json {
        events.print_formatted(["Red", "Blue"]);
        println!();
    }

    // --- Battle tower ---
    let mut tower = BattleTower::new(ladder.clone(), table)?;
    tower.set_my_trainer(red, &mut rng)?;
    tower.generate_enemy_trainers(ladder.opponents, &mut rng)?;

    let mut battles = Vec::new();
    while tower.battles_remaining() {
        let round = tower.next_battle()?;
        if !args.json {
            println!(
                "Tower: {:?} against {} (your lives: {}, enemy lives left: {})",
                round.outcome, round.opponent, round.challenger_lives, round.remaining_enemy_lives
            );
        }
        battles.push(round);
    }

    let challenger_lives = tower.challenger().map(|t| t.lives).unwrap_or_default();
    if !args.json {
        println!(
            "Tower finished: {} enemies defeated, {} lives left",
            tower.enemies_defeated(),
            challenger_lives
        );
        return Ok(());
    }

    let summary = Summary {
        seed: args.seed,
        battle: BattleSummary {
            mode,
            criterion,
            outcome,
            rounds,
            red_team,
            blue_team,
        },
        tower: TowerSummary {
            challenger_lives,
            enemies_defeated: tower.enemies_defeated(),
            remaining_enemy_lives: tower.remaining_enemy_lives(),
            battles,
        },
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Could not serialise summary: {}", e),
    }
    Ok(())
}
