#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    card::{Card, Cell},
    config::GRID_SIZE,
    letter::{Call, Letter},
    marks::MarkState,
    observer::GameObserver,
    random::RandomSource,
    session::GameSession,
    win::Line,
};

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CallNext,
    Mark(usize),
    NewGame,
    Help,
    Quit,
}

/// Parse a cell as a flat position (`12`) or a letter and 1-based row (`B3`).
pub fn parse_cell(input: &str) -> Option<usize> {
    let input = input.trim();
    if let Ok(position) = input.parse::<usize>() {
        return Some(position);
    }
    let mut chars = input.chars();
    let letter = Letter::from_char(chars.next()?)?;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 || row > GRID_SIZE {
        return None;
    }
    Some((row - 1) * GRID_SIZE + letter.column())
}

/// Parse one input line. Empty input calls the next number.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Some(Command::CallNext);
    };
    match head.to_ascii_lowercase().as_str() {
        "c" | "call" => Some(Command::CallNext),
        "n" | "new" => Some(Command::NewGame),
        "h" | "help" | "?" => Some(Command::Help),
        "q" | "quit" => Some(Command::Quit),
        "m" | "mark" => parts.next().and_then(parse_cell).map(Command::Mark),
        _ => parse_cell(head).map(Command::Mark),
    }
}

/// Render the card grid. Marked cells carry `*`, winning cells `#`.
pub fn render_card(card: &Card, marks: &MarkState, winning: Option<&Line>) -> String {
    let mut out = String::new();
    for letter in Letter::ALL {
        let _ = write!(out, "{:^6}", letter.as_char());
    }
    out.push('\n');
    for (pos, cell) in card.cells().iter().enumerate() {
        let flag = if winning.is_some_and(|l| l.contains(pos)) {
            '#'
        } else if marks.is_marked(pos) {
            '*'
        } else {
            ' '
        };
        let _ = match cell {
            Cell::Number(n) => write!(out, " {:>3}{} ", n, flag),
            Cell::Free => write!(out, " FREE{}", flag),
        };
        if pos % GRID_SIZE == GRID_SIZE - 1 {
            out.push('\n');
        }
    }
    out
}

/// Print the session's card to stdout.
pub fn print_card<R: RandomSource>(session: &GameSession<R>) {
    let line = session.winning_line();
    std::print!("{}", render_card(session.card(), session.marks(), line.as_ref()));
}

/// Observer that writes notifications to stdout.
#[derive(Debug, Default)]
pub struct CliObserver;

impl CliObserver {
    pub fn new() -> Self {
        Self
    }
}

impl GameObserver for CliObserver {
    fn on_number_called(&mut self, call: Call, called_count: usize) {
        std::println!("Current number: {}  ({} called)", call, called_count);
    }

    fn on_win(&mut self, line: &Line) {
        std::println!("Winning line: {}", line.kind);
    }

    fn on_message(&mut self, text: &str) {
        std::println!("{}", text);
    }
}

const HELP: &str = "Commands: <enter>/c call next, m B3 or m 12 mark a cell, n new game, q quit";

/// Interactive loop over stdin until `q` or end of input.
pub fn run_interactive<R: RandomSource>(session: &mut GameSession<R>) -> io::Result<()> {
    let mut observer = CliObserver::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    std::println!("{}", HELP);
    loop {
        session.dispatch(&mut observer);
        print_card(session);
        std::print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        match parse_command(&line) {
            Some(Command::CallNext) => {
                let _ = session.call_next();
            }
            Some(Command::Mark(position)) => {
                let _ = session.mark_cell(position);
            }
            Some(Command::NewGame) => session.new_game(),
            Some(Command::Help) => std::println!("{}", HELP),
            Some(Command::Quit) => break,
            None => std::println!("Invalid input"),
        }
    }
    Ok(())
}
