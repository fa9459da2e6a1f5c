use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::{bail, Context};
use clap::Parser;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use battle_chess::battle::battle_config::BattleConfig;
use battle_chess::battle::chess_battle::{ChessBattle, EngineTicket, MoveOutcome};
use battle_chess::engines::engine_random::RandomEngine;
use battle_chess::engines::engine_trait::Engine;
use battle_chess::errors::{ChessError, ChessResult};
use battle_chess::game_state::chess_types::{Move, PieceKind, PromotionChoice, Square};
use battle_chess::utils::render_game_state::render_game_state;

mod cli;

type Battle = ChessBattle<RandomEngine<StdRng>>;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let mut config = BattleConfig::default();
    config.set_option("EngineSide", &cli.engine_side)?;
    config.set_option("EngineDelayMs", &cli.delay_ms.to_string())?;

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, "starting battle");
    let mut battle = ChessBattle::with_engine(config, RandomEngine::seeded(seed));

    if cli.human {
        play_human(&mut battle)
    } else {
        self_play(&mut battle, seed, cli.max_plies)
    }
}

/// Plays the engine's ticket after its delay. Returns the follow-up ticket, if any.
fn run_engine(battle: &mut Battle, ticket: EngineTicket) -> anyhow::Result<Option<EngineTicket>> {
    thread::sleep(ticket.delay());
    match battle.play_engine_move(ticket)? {
        MoveOutcome::Completed { engine_ticket, .. } => Ok(engine_ticket),
        MoveOutcome::AwaitingPromotionChoice { .. } => bail!("engine promotion left pending"),
    }
}

fn self_play(battle: &mut Battle, seed: u64, max_plies: usize) -> anyhow::Result<()> {
    // The side the battle engine does not control is driven by a second engine.
    let mut opponent = RandomEngine::seeded(seed.wrapping_add(1));
    let mut ticket = battle.reset();

    while !battle.status().is_over() && battle.history().len() < max_plies {
        if let Some(pending) = ticket.take() {
            ticket = run_engine(battle, pending)?;
            continue;
        }

        let mv = opponent.choose_move(battle.game(), battle.side_to_move())?;
        ticket = match battle.submit_move(mv)? {
            MoveOutcome::Completed { engine_ticket, .. } => engine_ticket,
            MoveOutcome::AwaitingPromotionChoice { .. } => {
                match battle.resolve_promotion(PromotionChoice::Queen)? {
                    MoveOutcome::Completed { engine_ticket, .. } => engine_ticket,
                    MoveOutcome::AwaitingPromotionChoice { .. } => None,
                }
            }
        };
    }

    for line in battle.move_list() {
        println!("{line}");
    }
    println!("{}", render_game_state(battle.game()));
    Ok(())
}

/// One line of human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move {
        from: Square,
        to: Square,
        promotion: Option<PromotionChoice>,
    },
    Undo,
    Quit,
}

/// `None` for a blank line.
fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let command = match words.as_slice() {
        [] => return Ok(None),
        ["quit"] => Command::Quit,
        ["undo"] => Command::Undo,
        [from, to] => Command::Move {
            from: from.parse()?,
            to: to.parse()?,
            promotion: None,
        },
        [from, to, letter] => {
            let mut chars = letter.chars();
            let choice = match (chars.next(), chars.next()) {
                (Some(ch), None) => PromotionChoice::from_letter(ch),
                _ => None,
            };
            let Some(choice) = choice else {
                bail!("unknown promotion piece {letter:?}, expected q, r, b or n");
            };
            Command::Move {
                from: from.parse()?,
                to: to.parse()?,
                promotion: Some(choice),
            }
        }
        _ => bail!("expected \"<from> <to> [q|r|b|n]\", \"undo\" or \"quit\""),
    };
    Ok(Some(command))
}

fn play_human(battle: &mut Battle) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut ticket = battle.reset();

    loop {
        if let Some(pending) = ticket.take() {
            ticket = run_engine(battle, pending)?;
            continue;
        }

        println!("{}", render_game_state(battle.game()));
        if battle.status().is_over() {
            return Ok(());
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("reading stdin")?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        if command == Command::Quit {
            return Ok(());
        }

        match apply_command(battle, command) {
            Ok(next) => ticket = next,
            Err(err) => println!("{err}"),
        }
    }
}

/// Runs a move or undo. Returns the engine ticket due afterwards, if any.
fn apply_command(battle: &mut Battle, command: Command) -> ChessResult<Option<EngineTicket>> {
    match command {
        Command::Move { from, to, promotion } => submit_human_move(battle, from, to, promotion),
        Command::Undo => {
            battle.undo_full_turn()?;
            // Undoing can hand the move back to the engine.
            match battle.request_engine_move() {
                Ok(ticket) => Ok(Some(ticket)),
                Err(ChessError::NotEngineTurn) => Ok(None),
                Err(err) => Err(err),
            }
        }
        Command::Quit => Ok(None),
    }
}

fn submit_human_move(
    battle: &mut Battle,
    from: Square,
    to: Square,
    promotion: Option<PromotionChoice>,
) -> ChessResult<Option<EngineTicket>> {
    // Flags come from the generator; fall back to a plain move so the
    // boundary reports why it is illegal.
    let mv = battle
        .legal_moves(from)
        .into_iter()
        .find(|mv| mv.to == to)
        .unwrap_or(Move::normal(from, to));

    let promotes = battle.board().get(from).is_some_and(|piece| {
        piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row()
    });
    if promotion.is_some() && !promotes {
        return Err(ChessError::PromotionNotPending);
    }

    match battle.submit_move(mv)? {
        MoveOutcome::Completed { engine_ticket, .. } => Ok(engine_ticket),
        MoveOutcome::AwaitingPromotionChoice { .. } => {
            match battle.resolve_promotion(promotion.unwrap_or(PromotionChoice::Queen))? {
                MoveOutcome::Completed { engine_ticket, .. } => Ok(engine_ticket),
                MoveOutcome::AwaitingPromotionChoice { .. } => Ok(None),
            }
        }
    }
}
