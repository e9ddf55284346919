//! Tournament CLI
//!
//! Register players, create Swiss tournaments and play their rounds.

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use swiss_core::{Gender, NewPlayer, PlayerId, ResultSource, TimeControl, Tournament, TournamentInfo};
use tournament::{describe_match, AppConfig, ConsoleResults, Database, RandomResults, Store, CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system chess tournament runner")]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Store file, overriding the configured one
    #[arg(long)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage registered players
    Player {
        #[command(subcommand)]
        action: PlayerCommand,
    },
    /// Manage tournaments
    Tournament {
        #[command(subcommand)]
        action: TournamentCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PlayerCommand {
    /// Register a new player
    Add {
        first_name: String,
        last_name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        birth_date: NaiveDate,
        /// h/m, f or a
        #[arg(long)]
        gender: Gender,
        #[arg(long)]
        rank: u32,
    },
    /// List registered players
    List {
        /// Sort by name instead of rank
        #[arg(long)]
        by_name: bool,
    },
    /// Change a player's rank
    Rank { uid: u32, rank: u32 },
}

#[derive(Subcommand, Debug)]
enum TournamentCommand {
    /// Create a tournament
    New {
        name: String,
        place: String,
        /// First day, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Last day, defaults to the first
        #[arg(long)]
        end_date: Option<NaiveDate>,
        /// bullet, blitz or "coup rapide"
        #[arg(long)]
        time_control: TimeControl,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        players: Option<u32>,
    },
    /// List tournaments
    List,
    /// Add registered players to a tournament
    Enroll {
        index: usize,
        #[arg(required = true)]
        uids: Vec<u32>,
    },
    /// Show roster, standings and rounds
    Show { index: usize },
    /// Play rounds until the tournament is complete
    Play {
        index: usize,
        /// Generate random results instead of prompting
        #[arg(long)]
        simulate: bool,
        /// Seed for simulated results
        #[arg(long, requires = "simulate")]
        seed: Option<u64>,
        /// Stop after this many rounds
        #[arg(long)]
        rounds: Option<u32>,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn tournament_at(db: &Database, index: usize) -> Result<&Tournament> {
    db.tournaments
        .get(index)
        .with_context(|| format!("No tournament #{index}, see `tournament list`"))
}

fn run_player(action: PlayerCommand, db: &mut Database, store: &Store) -> Result<()> {
    match action {
        PlayerCommand::Add {
            first_name,
            last_name,
            birth_date,
            gender,
            rank,
        } => {
            let uid = db
                .registry
                .register(NewPlayer::new(&first_name, &last_name, birth_date, gender, rank))?;
            store.save(&db.registry, &db.tournaments)?;
            println!("Registered {first_name} {last_name} as {uid}");
        }
        PlayerCommand::List { by_name } => {
            let players = if by_name {
                db.registry.sorted_by_name()
            } else {
                db.registry.sorted_by_rank()
            };
            if players.is_empty() {
                println!("No players registered yet.");
            }
            for player in players {
                println!(
                    "{:>5}  {:<30} {}  {:<7} rank {}",
                    player.uid.to_string(),
                    player.full_name(),
                    player.birth_date,
                    player.gender,
                    player.rank
                );
            }
        }
        PlayerCommand::Rank { uid, rank } => {
            db.registry.set_rank(PlayerId(uid), rank)?;
            store.save(&db.registry, &db.tournaments)?;
            println!("Player #{uid} is now ranked {rank}");
        }
    }
    Ok(())
}

fn show_tournament(db: &Database, index: usize) -> Result<()> {
    let tournament = tournament_at(db, index)?;
    let info = tournament.info();
    println!("=== {} ===", tournament);
    println!(
        "Time control: {}, rounds: {}/{}, players: {}/{}",
        info.time_control,
        tournament.active_round(),
        info.number_of_rounds,
        tournament.players().len(),
        info.number_of_players
    );
    if !info.description.is_empty() {
        println!("{}", info.description);
    }

    println!("\nStandings:");
    for (place, line) in tournament.standings(&db.registry)?.iter().enumerate() {
        println!("{:>3}. {:<40} {:>4}", place + 1, line.player.to_string(), line.score);
    }

    for round in tournament.rounds() {
        println!("\n{} (started {})", round.name(), round.beginning_time().format("%Y-%m-%d %H:%M"));
        for game in round.matches() {
            println!("  {}", describe_match(&db.registry, game));
        }
        match round.ending_time() {
            Some(end) => println!("  closed {}", end.format("%Y-%m-%d %H:%M")),
            None => println!("  in progress, {} result(s) missing", round.pending()),
        }
    }
    Ok(())
}

/// Play rounds, saving after each one so an interrupted session can resume
fn play<S>(db: &mut Database, store: &Store, index: usize, limit: Option<u32>, source: &mut S) -> Result<()>
where
    S: ResultSource<Error = anyhow::Error>,
{
    let mut played = 0;
    loop {
        let tournament = db
            .tournaments
            .get_mut(index)
            .with_context(|| format!("No tournament #{index}, see `tournament list`"))?;
        if tournament.is_completed() || limit.is_some_and(|n| played >= n) {
            break;
        }

        let outcome = tournament.play_round(&db.registry, source, Utc::now);
        store.save(&db.registry, &db.tournaments)?;
        outcome?;
        played += 1;

        let tournament = tournament_at(db, index)?;
        if let Some(round) = tournament.rounds().last() {
            println!("\n{} closed:", round.name());
            for game in round.matches() {
                println!("  {}", describe_match(&db.registry, game));
            }
        }
    }

    let tournament = tournament_at(db, index)?;
    if tournament.is_completed() {
        info!(tournament = %tournament.name(), "tournament completed");
        println!("\n{} is complete.", tournament.name());
    }
    Ok(())
}

fn run_tournament(action: TournamentCommand, db: &mut Database, store: &Store, config: &AppConfig) -> Result<()> {
    match action {
        TournamentCommand::New {
            name,
            place,
            date,
            end_date,
            time_control,
            description,
            rounds,
            players,
        } => {
            let mut info = TournamentInfo::new(&name, &place, date, time_control);
            info.ending_date = end_date.unwrap_or(date);
            info.description = description;
            info.number_of_rounds = rounds.unwrap_or(config.defaults.number_of_rounds);
            info.number_of_players = players.unwrap_or(config.defaults.number_of_players);
            db.tournaments.push(Tournament::new(info)?);
            store.save(&db.registry, &db.tournaments)?;
            println!("Created tournament #{}: {name}", db.tournaments.len() - 1);
        }
        TournamentCommand::List => {
            if db.tournaments.is_empty() {
                println!("No tournaments yet.");
            }
            for (index, tournament) in db.tournaments.iter().enumerate() {
                println!("{index:>3} - {tournament} ({:?})", tournament.state());
            }
        }
        TournamentCommand::Enroll { index, uids } => {
            let tournament = db
                .tournaments
                .get_mut(index)
                .with_context(|| format!("No tournament #{index}, see `tournament list`"))?;
            for uid in uids {
                tournament.add_player(&db.registry, PlayerId(uid))?;
            }
            let enrolled = tournament.players().len();
            let expected = tournament.info().number_of_players;
            store.save(&db.registry, &db.tournaments)?;
            println!("{enrolled}/{expected} players enrolled");
        }
        TournamentCommand::Show { index } => show_tournament(db, index)?,
        TournamentCommand::Play {
            index,
            simulate,
            seed,
            rounds,
        } => {
            if tournament_at(db, index)?.is_completed() {
                bail!("Tournament #{index} is already complete");
            }
            if simulate {
                let mut source = RandomResults::new(seed);
                play(db, store, index, rounds, &mut source)?;
            } else {
                // The prompt only reads the registry, which `play` leaves untouched
                let registry = db.registry.clone();
                let stdin = io::stdin();
                let mut source = ConsoleResults::new(&registry, stdin.lock(), io::stdout());
                play(db, store, index, rounds, &mut source)?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;
    init_logging(&config.log_level);

    let store = Store::new(cli.store.unwrap_or_else(|| config.store_path.clone()));
    let mut db = store
        .load()
        .with_context(|| format!("Failed to load {}", store.path().display()))?;

    match cli.command {
        Command::Player { action } => run_player(action, &mut db, &store),
        Command::Tournament { action } => run_tournament(action, &mut db, &store, &config),
    }
}
