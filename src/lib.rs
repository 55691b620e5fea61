//! hanoi-solitaire: Hanoi Solitaire game engine
//!
//! Nine cards, Ace through Nine of one suit, are dealt 3-3-3 onto three piles.
//! Move the top card of one pile onto an empty pile or onto a higher card until
//! all nine sit in one pile with the Nine at the bottom and the Ace on top.
//!
//! Goals:
//! - Small, deterministic engine with seedable deals
//! - Illegal moves are answered with `false`, never a panic
//! - Unlimited undo and redo
//!
//! ## Quick start
//! ```
//! use hanoi_solitaire::cards::parse_cards;
//! use hanoi_solitaire::game::HanoiGame;
//!
//! let mut game = HanoiGame::from_layout([
//!     parse_cards("9 8 7 6 5 4 3 2").unwrap(),
//!     parse_cards("A").unwrap(),
//!     Vec::new(),
//! ]).unwrap();
//!
//! assert!(!game.is_game_won());
//! assert!(game.make_move(1, 0));
//! assert!(game.is_game_won());
//! assert_eq!(game.move_count(), 1);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin hanoi-solitaire
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod game;
pub mod pile;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
