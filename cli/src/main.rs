use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use minefield_core::*;

const HEADER: &str = "[Minefield] ('q' to quit)";
const PROMPT: &str = "Input move [x y]: ";
const INVALID_INPUT: &str = "Invalid input. Please enter two numbers separated by a space.";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of columns
    #[arg(long, default_value_t = 5)]
    width: Coord,

    /// Number of rows
    #[arg(long, default_value_t = 5)]
    height: Coord,

    /// Number of mines to place
    #[arg(short, long, default_value_t = 3)]
    mines: usize,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Play(Move),
    Quit,
}

/// Parses `x y` (reveal), `f x y` (flag) or `q`.
fn parse_command(line: &str) -> Option<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let coords = |x: &str, y: &str| -> Option<Coord2> { Some((x.parse().ok()?, y.parse().ok()?)) };

    match parts.as_slice() {
        ["q"] => Some(Command::Quit),
        [x, y] => coords(*x, *y).map(|coords| Command::Play(Move::Reveal(coords))),
        ["f", x, y] => coords(*x, *y).map(|coords| Command::Play(Move::Flag(coords))),
        _ => None,
    }
}

fn draw(out: &mut impl Write, board: &Board) -> io::Result<()> {
    // clear screen and move the cursor home
    write!(out, "\x1b[2J\x1b[H")?;
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{board}")?;
    out.flush()
}

/// Reads the next command, prompting again on malformed input. `None` on end of input.
fn read_command(input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<Option<Command>> {
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("reading move")? == 0 {
            return Ok(None);
        }
        match parse_command(&line) {
            Some(command) => return Ok(Some(command)),
            None => writeln!(out, "{INVALID_INPUT}")?,
        }
    }
}

fn play(board: &mut Board, input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    while !board.is_finished() {
        draw(out, board)?;
        match read_command(input, out)? {
            Some(Command::Play(mv)) => {
                board.make_move(mv);
            }
            Some(Command::Quit) | None => {
                log::info!("Quitting with game in state {:?}", board.state());
                return Ok(());
            }
        }
    }

    draw(out, board)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut board = Board::generate(
        args.width,
        args.height,
        RandomMineGenerator::new(seed, args.mines),
    )
    .context("creating board")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&mut board, &mut stdin.lock(), &mut stdout.lock())
}
