use crate::cards::{Card, Rank, Suit};
use crate::deck::Deck;
use crate::pile::Pile;
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::fmt;

pub const PILE_COUNT: usize = 3;
pub const CARDS_PER_PILE: usize = 3;
pub const TOTAL_CARDS: usize = PILE_COUNT * CARDS_PER_PILE;

/// Transfer of the top card of pile `from` onto pile `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub const fn reversed(self) -> Self {
        Self { from: self.to, to: self.from }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from + 1, self.to + 1)
    }
}

/// Why a move was refused. Reported in the order the rules are checked.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("pile index out of range: {from} -> {to}")]
    IndexOutOfRange { from: usize, to: usize },
    #[error("cannot move a pile onto itself")]
    SamePile,
    #[error("pile {} is empty", .0 + 1)]
    EmptySource(usize),
    #[error("cannot place {moving} on {target}")]
    LargerOnSmaller { moving: Card, target: Card },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
    #[error("rank {0} appears more than once")]
    DuplicateRank(Rank),
}

/// Hanoi Solitaire game state: three piles, a move counter and undo/redo stacks.
///
/// The RNG only drives deals; it is a type parameter so tests can pin a seed.
///
/// ```
/// use hanoi_solitaire::game::HanoiGame;
///
/// let mut game = HanoiGame::with_seed(7);
/// assert!(game.piles().iter().all(|p| p.size() == 3));
/// if let Some(mv) = game.legal_moves().first().copied() {
///     assert!(game.make_move(mv.from, mv.to));
///     assert_eq!(game.move_count(), 1);
///     assert!(game.undo());
/// }
/// assert_eq!(game.move_count(), 0);
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub struct HanoiGame<R = ChaCha8Rng> {
    suit: Suit,
    piles: [Pile; PILE_COUNT],
    move_count: usize,
    history: Vec<Move>,
    redo: Vec<Move>,
    rng: R,
}

impl HanoiGame<ChaCha8Rng> {
    /// A hearts game dealt from an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_suit(Suit::default())
    }

    pub fn with_suit(suit: Suit) -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_rng(suit, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Reproducible deal: equal seeds give equal games.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Suit::default(), ChaCha8Rng::seed_from_u64(seed))
    }

    /// Start from a fixed position, each pile listed bottom to top.
    ///
    /// Partial layouts are accepted; two cards of the same rank are not.
    /// Later resets deal a full game from an entropy-seeded RNG.
    pub fn from_layout(layout: [Vec<Card>; PILE_COUNT]) -> Result<Self, LayoutError> {
        let mut seen = HashSet::with_capacity(TOTAL_CARDS);
        for card in layout.iter().flatten() {
            if !seen.insert(card.rank()) {
                return Err(LayoutError::DuplicateRank(card.rank()));
            }
        }
        let suit = layout.iter().flatten().next().map(|c| c.suit()).unwrap_or_default();
        let seed: u64 = rand::rng().random();
        Ok(Self {
            suit,
            piles: layout.map(Pile::from_cards),
            move_count: 0,
            history: Vec::new(),
            redo: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }
}

impl Default for HanoiGame<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HanoiGame<R> {
    pub fn with_rng(suit: Suit, rng: R) -> Self {
        let mut game = Self {
            suit,
            piles: Default::default(),
            move_count: 0,
            history: Vec::new(),
            redo: Vec::new(),
            rng,
        };
        game.deal();
        game
    }

    /// Throw away the current position and history and deal a new game.
    pub fn reset(&mut self) {
        self.move_count = 0;
        self.history.clear();
        self.redo.clear();
        self.deal();
    }

    fn deal(&mut self) {
        let mut deck = Deck::for_suit(self.suit);
        deck.shuffle_with(&mut self.rng);
        for pile in self.piles.iter_mut() {
            pile.clear();
            for card in deck.draw_n(CARDS_PER_PILE) {
                pile.push(card);
            }
        }
        info!("dealt new game: {}", self.layout_summary());
    }
}

impl<R> HanoiGame<R> {
    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn piles(&self) -> &[Pile; PILE_COUNT] {
        &self.piles
    }

    pub fn pile(&self, idx: usize) -> Option<&Pile> {
        self.piles.get(idx)
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Check a move against the rules without touching the state.
    pub fn check_move(&self, from: usize, to: usize) -> Result<Move, MoveError> {
        if from >= PILE_COUNT || to >= PILE_COUNT {
            return Err(MoveError::IndexOutOfRange { from, to });
        }
        if from == to {
            return Err(MoveError::SamePile);
        }
        let Some(moving) = self.piles[from].peek() else {
            return Err(MoveError::EmptySource(from));
        };
        match self.piles[to].peek() {
            None => Ok(Move::new(from, to)),
            Some(target) if moving < target => Ok(Move::new(from, to)),
            Some(target) => Err(MoveError::LargerOnSmaller { moving, target }),
        }
    }

    pub fn is_valid_move(&self, from: usize, to: usize) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Every legal move in the current position, in index order.
    pub fn legal_moves(&self) -> Vec<Move> {
        (0..PILE_COUNT)
            .flat_map(|from| (0..PILE_COUNT).map(move |to| (from, to)))
            .filter_map(|(from, to)| self.check_move(from, to).ok())
            .collect()
    }

    /// Validate and apply a move. A new move discards the redo stack.
    pub fn try_move(&mut self, from: usize, to: usize) -> Result<Move, MoveError> {
        let mv = match self.check_move(from, to) {
            Ok(mv) => mv,
            Err(err) => {
                debug!("rejected move {from} -> {to}: {err}");
                return Err(err);
            }
        };
        self.apply(mv)?;
        self.redo.clear();
        Ok(mv)
    }

    pub fn make_move(&mut self, from: usize, to: usize) -> bool {
        self.try_move(from, to).is_ok()
    }

    fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        let card = self.piles[mv.from].pop().map_err(|_| MoveError::EmptySource(mv.from))?;
        self.piles[mv.to].push(card);
        self.move_count += 1;
        self.history.push(mv);
        debug!("moved {card} {mv} (move {})", self.move_count);
        if self.is_game_won() {
            info!("game won in {} moves", self.move_count);
        }
        Ok(())
    }

    /// Step back one move.
    ///
    /// The reverse transfer is not checked against the placement rule: undo
    /// replays history, it does not make a new move.
    pub fn undo(&mut self) -> bool {
        let Some(mv) = self.history.pop() else {
            return false;
        };
        let Ok(card) = self.piles[mv.to].pop() else {
            warn!("undo of {mv} found pile {} empty", mv.to + 1);
            self.history.push(mv);
            return false;
        };
        self.piles[mv.from].push(card);
        self.move_count -= 1;
        self.redo.push(mv);
        debug!("undid {mv} ({card} back on pile {})", mv.from + 1);
        true
    }

    /// Re-apply the most recently undone move.
    pub fn redo(&mut self) -> bool {
        let Some(mv) = self.redo.pop() else {
            return false;
        };
        let applied = self.check_move(mv.from, mv.to).and_then(|mv| self.apply(mv));
        match applied {
            Ok(()) => {
                debug!("redid {mv}");
                true
            }
            Err(err) => {
                warn!("redo of {mv} no longer applies: {err}");
                self.redo.clear();
                false
            }
        }
    }

    /// All nine cards in one pile, Nine at the bottom and Ace on top.
    pub fn is_game_won(&self) -> bool {
        let mut occupied = self.piles.iter().filter(|p| !p.is_empty());
        let (Some(pile), None) = (occupied.next(), occupied.next()) else {
            return false;
        };
        pile.size() == TOTAL_CARDS && pile.cards().iter().map(|c| c.value()).eq((1..=9u8).rev())
    }

    fn layout_summary(&self) -> String {
        self.piles
            .iter()
            .map(|p| p.cards().iter().map(|c| c.rank().to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl<R> fmt::Display for HanoiGame<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hanoi Solitaire - Moves: {}", self.move_count)?;
        for (i, pile) in self.piles.iter().enumerate() {
            write!(f, "\nPile {i}: {pile}")?;
        }
        Ok(())
    }
}
