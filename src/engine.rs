// Minimal game engine API boundary: the boolean query/command surface an
// embedding application needs to play a game. It is object safe, so callers
// can hold a `&mut dyn SolitaireEngine`. The bundled TUI uses `HanoiGame`
// directly because it also shows move errors and legal-move hints.

use crate::game::{HanoiGame, PILE_COUNT};
use crate::pile::Pile;
use rand::Rng;

pub trait SolitaireEngine {
    // Queries
    fn piles(&self) -> &[Pile; PILE_COUNT];
    fn move_count(&self) -> usize;
    fn is_valid_move(&self, from: usize, to: usize) -> bool;
    fn is_game_won(&self) -> bool;

    // Commands
    fn make_move(&mut self, from: usize, to: usize) -> bool;
    fn undo(&mut self) -> bool;
    fn redo(&mut self) -> bool;
    fn reset(&mut self);
}

impl<R: Rng> SolitaireEngine for HanoiGame<R> {
    fn piles(&self) -> &[Pile; PILE_COUNT] {
        self.piles()
    }
    fn move_count(&self) -> usize {
        self.move_count()
    }
    fn is_valid_move(&self, from: usize, to: usize) -> bool {
        self.is_valid_move(from, to)
    }
    fn is_game_won(&self) -> bool {
        self.is_game_won()
    }

    fn make_move(&mut self, from: usize, to: usize) -> bool {
        self.make_move(from, to)
    }
    fn undo(&mut self) -> bool {
        self.undo()
    }
    fn redo(&mut self) -> bool {
        self.redo()
    }
    fn reset(&mut self) {
        self.reset()
    }
}
