use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

/// The nine cards of one suit, Ace through Nine.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use hanoi_solitaire::cards::Suit;
    /// use hanoi_solitaire::deck::Deck;
    ///
    /// let deck = Deck::for_suit(Suit::Hearts);
    /// assert_eq!(deck.len(), 9);
    /// ```
    pub fn for_suit(suit: Suit) -> Self {
        let cards = Rank::ALL.iter().map(|&r| Card::new(r, suit)).collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn deck_holds_each_rank_once() {
        let d = Deck::for_suit(Suit::Spades);
        assert_eq!(d.len(), 9);
        let ranks: HashSet<Rank> = d.cards.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks.len(), 9);
        assert!(d.cards.iter().all(|c| c.suit() == Suit::Spades));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::for_suit(Suit::Hearts);
        let mut d2 = Deck::for_suit(Suit::Hearts);
        d1.shuffle_with(&mut ChaCha8Rng::seed_from_u64(42));
        d2.shuffle_with(&mut ChaCha8Rng::seed_from_u64(42));
        let r1: Vec<Rank> = d1.cards.iter().map(|c| c.rank()).collect();
        let r2: Vec<Rank> = d2.cards.iter().map(|c| c.rank()).collect();
        assert_eq!(r1, r2);
    }

    #[test]
    fn draw_n_stops_when_empty() {
        let mut d = Deck::for_suit(Suit::Hearts);
        d.shuffle_with(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(d.draw_n(3).len(), 3);
        assert_eq!(d.len(), 6);
        assert_eq!(d.draw_n(10).len(), 6);
        assert!(d.is_empty());
        assert_eq!(d.draw(), None);
    }
}
