use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chess_match::{ChessPosition, Match, MatchConfig, PieceLayout};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LayoutPreset {
    /// All 32 pieces
    Standard,
    /// Kings guarded by rooks
    KingsAndRooks,
}

impl LayoutPreset {
    fn layout(self) -> PieceLayout {
        match self {
            LayoutPreset::Standard => PieceLayout::standard(),
            LayoutPreset::KingsAndRooks => PieceLayout::kings_and_rooks(),
        }
    }
}

/// Two-player chess match in the terminal
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Starting layout
    #[arg(long, value_enum, default_value_t = LayoutPreset::Standard)]
    layout: LayoutPreset,
}

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    Help,
    /// Show the possible moves of the piece on this square
    Select(ChessPosition),
    Move(ChessPosition, ChessPosition),
}

fn parse_command(line: &str) -> chess_match::ChessResult<Option<Command>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let command = match tokens.as_slice() {
        [] => return Ok(None),
        ["quit" | "exit"] => Command::Quit,
        ["help"] => Command::Help,
        [source] => Command::Select(source.parse()?),
        [source, target] => Command::Move(source.parse()?, target.parse()?),
        _ => {
            return Err(chess_match::ChessError::Parse {
                input: line.trim().to_string(),
            })
        }
    };
    Ok(Some(command))
}

fn print_help() {
    println!("Commands:");
    println!("  <source>            show where the piece on <source> can go (e.g. e2)");
    println!("  <source> <target>   move a piece (e.g. e2 e3)");
    println!("  help                this text");
    println!("  quit                leave the match");
}

fn prompt(label: &str) -> Result<()> {
    print!("{label}");
    io::stdout().flush().context("failed to flush stdout")
}

fn run(mut game: Match) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print!("{}", ui::render_match(&game, None));
    print_help();

    while !game.is_checkmate() {
        prompt("\nMove: ")?;
        let Some(line) = lines.next() else {
            info!("input closed");
            return Ok(());
        };
        let line = line.context("failed to read from stdin")?;

        let outcome = match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => return Ok(()),
            Ok(Some(Command::Help)) => {
                print_help();
                continue;
            }
            Ok(Some(Command::Select(source))) => game.possible_moves(source).map(|moves| {
                println!();
                print!("{}", ui::render_match(&game, Some(&moves)));
            }),
            Ok(Some(Command::Move(source, target))) => {
                game.perform_move(source, target).map(|captured| {
                    if let Some(piece) = captured {
                        debug!(?piece, "captured");
                    }
                    println!();
                    print!("{}", ui::render_match(&game, None));
                })
            }
            Err(err) => Err(err),
        };

        match outcome {
            Ok(()) => {}
            Err(err) if err.is_recoverable() => {
                warn!(%err, "input rejected");
                println!("{err}");
            }
            Err(err) => return Err(err).context("match aborted"),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = MatchConfig::default().with_layout(args.layout.layout());
    let game = Match::new(config).context("failed to set up the match")?;
    info!(layout = ?args.layout, "starting console match");

    run(game)
}
