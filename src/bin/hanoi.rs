use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use hanoi_solitaire::cards::Suit;
use hanoi_solitaire::game::HanoiGame;
use hanoi_solitaire::tui::{app::AppState, controller};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

/// Hanoi Solitaire in the terminal.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Seed for a reproducible deal; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// Suit of the nine cards (cosmetic)
    #[arg(long, default_value = "hearts")]
    suit: Suit,
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if !io::stdout().is_terminal() {
        println!(
            "hanoi-solitaire requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            hanoi_solitaire::VERSION
        );
        return Ok(());
    }

    let game = match args.seed {
        Some(seed) => HanoiGame::with_rng(args.suit, ChaCha8Rng::seed_from_u64(seed)),
        None => HanoiGame::with_suit(args.suit),
    };
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(game);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
