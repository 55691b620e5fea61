use crate::cards::Card;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PileError {
    #[error("cannot pop from empty pile")]
    Empty,
}

/// A LIFO stack of cards. Index 0 is the bottom; only the top is exposed.
///
/// ```
/// use hanoi_solitaire::cards::{Card, Rank, Suit};
/// use hanoi_solitaire::pile::Pile;
///
/// let mut pile = Pile::new();
/// pile.push(Card::new(Rank::Nine, Suit::Hearts));
/// pile.push(Card::new(Rank::Ace, Suit::Hearts));
/// assert_eq!(pile.peek().map(|c| c.rank()), Some(Rank::Ace));
/// assert_eq!(pile.size(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Build a pile from cards listed bottom to top.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Result<Card, PileError> {
        self.cards.pop().ok_or(PileError::Empty)
    }

    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Cards from bottom to top.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter_top_down(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().rev()
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty pile");
        }
        let names: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        write!(f, "Pile: {}", names.join(", "))
    }
}
