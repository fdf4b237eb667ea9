// src/bin/poker_odds_cli.rs

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use poker_odds::config::OddsConfig;
use poker_odds::domain::card::parse_cards;
use poker_odds::domain::SeatIndex;
use poker_odds::equity::estimate;
use poker_odds::infra::init_logging;
use poker_odds::preflop::{active_player_count, Action, BettingContext, PreflopResolver};

#[derive(Parser, Debug)]
#[command(name = "poker_odds_cli", about = "Win probability and preflop advice for Texas Hold'em")]
struct Cli {
    /// JSON-конфиг (симуляция + пути к таблицам префлопа)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Подробный лог
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Вероятность выигрыша методом Монте-Карло
    Equity(EquityArgs),
    /// Рекомендация действия на префлопе
    Preflop(PreflopArgs),
}

#[derive(Args, Debug)]
struct EquityArgs {
    /// Карты на руках, например `Ah Kh`
    #[arg(long, num_args = 2, required = true)]
    hole: Vec<String>,

    /// Открытые карты борда (0, 3, 4 или 5)
    #[arg(long, num_args = 0..=5)]
    board: Vec<String>,

    /// Игроков в раздаче, включая нас
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Наше место (нужно вместе с `--folded`)
    #[arg(long, default_value_t = 0)]
    seat: SeatIndex,

    /// Места сфолдивших игроков: в симуляции их не будет
    #[arg(long, num_args = 1..)]
    folded: Vec<SeatIndex>,

    /// Число симуляций (по умолчанию из конфига)
    #[arg(short = 'n', long)]
    trials: Option<u64>,

    /// Seed для воспроизводимого прогона
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct PreflopArgs {
    /// Две карты на руках
    #[arg(long, num_args = 2, required = true)]
    hole: Vec<String>,

    #[arg(short, long, default_value_t = 6)]
    players: usize,

    /// Наше место
    #[arg(long, default_value_t = 0)]
    seat: SeatIndex,

    /// Место дилера
    #[arg(long, default_value_t = 0)]
    dealer: SeatIndex,

    /// Действия игроков до нас: `3=raise`, `4=call`, ...
    #[arg(long = "action", value_parser = parse_seat_action)]
    actions: Vec<(SeatIndex, Action)>,
}

fn parse_seat_action(text: &str) -> Result<(SeatIndex, Action), String> {
    let (seat, action) = text
        .split_once('=')
        .ok_or_else(|| format!("expected SEAT=ACTION, got {text:?}"))?;
    let seat = seat.trim().parse::<SeatIndex>().map_err(|e| e.to_string())?;
    let action = action.trim().parse::<Action>().map_err(|e| e.to_string())?;
    Ok((seat, action))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => match OddsConfig::from_json_file(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("Ошибка конфига {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => OddsConfig::default(),
    };

    let result = match cli.command {
        Command::Equity(args) => run_equity(&config, args),
        Command::Preflop(args) => run_preflop(&config, args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}

fn run_equity(config: &OddsConfig, args: EquityArgs) -> Result<(), String> {
    let hole = parse_cards(&args.hole).map_err(|e| e.to_string())?;
    let board = parse_cards(&args.board).map_err(|e| e.to_string())?;

    let mut sim = config.simulation.clone();
    if let Some(trials) = args.trials {
        sim.trials = trials;
    }
    if let Some(seed) = args.seed {
        sim.seed = Some(seed);
    }

    let folded: HashSet<SeatIndex> = args.folded.into_iter().collect();
    let players = active_player_count(args.players, &folded, args.seat);

    let result = estimate(&hole, &board, players, &sim).map_err(|e| e.to_string())?;

    println!("=== EQUITY ===\n");
    println!("Рука:    {}", join(&args.hole));
    println!("Борд:    {}", if board.is_empty() { "-".to_string() } else { join(&args.board) });
    println!("Игроков: {} (в игре {})", args.players, players);
    println!("Симуляций: {} (пропущено {})\n", result.trials, result.skipped);
    println!("Вероятность выигрыша: {:.2}%", result.win_rate * 100.0);

    if !result.top_losing.is_empty() {
        println!("\nЧаще всего нас бьют:");
        for losing in &result.top_losing {
            println!(
                "  {:<16} {:>6.2}%",
                losing.name(),
                losing.frequency(result.trials) * 100.0
            );
        }
    }
    Ok(())
}

fn run_preflop(config: &OddsConfig, args: PreflopArgs) -> Result<(), String> {
    let cards = parse_cards(&args.hole).map_err(|e| e.to_string())?;
    let resolver = PreflopResolver::from_config(&config.preflop);

    let actions: HashMap<SeatIndex, Action> = args.actions.into_iter().collect();
    let ctx = BettingContext::from_seat_actions(&actions, args.dealer, args.seat, args.players);

    let rec = resolver
        .recommend_for_cards(&cards[0], &cards[1], args.seat, args.dealer, args.players, ctx)
        .map_err(|e| e.to_string())?;

    println!("=== PREFLOP ===\n");
    println!("Рука:     {}", rec.hand);
    println!("Позиция:  {}", rec.position);
    println!("Рейзов до нас: {}", ctx.num_prior_raises);
    println!("Действие: {} ({})", rec.action, rec.description);
    Ok(())
}

fn join(cards: &[String]) -> String {
    cards.join(" ")
}
