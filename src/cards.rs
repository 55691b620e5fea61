use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The nine ranks in play, Ace (low) through Nine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
}

impl Rank {
    pub const ALL: [Rank; 9] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
        }
    }

    /// Human-facing name: "Ace" for the ace, the rank symbol otherwise.
    pub const fn display_name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
        }
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    InvalidRank(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    /// Exact match against "A", "2".."9"; no trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c),
            _ => Err(RankParseError::InvalidRank(s.to_string())),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' => Ok(Rank::Ace),
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            _ => Err(RankParseError::InvalidRank(c.to_string())),
        }
    }
}

/// Suits are cosmetic in this game; they never take part in a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Suit {
    Clubs,
    Diamonds,
    #[default]
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: rank + suit.
///
/// Equality, ordering and hashing look at the rank only, so two cards of the
/// same rank in different suits are equal.
///
/// ```
/// use hanoi_solitaire::cards::{Card, Rank, Suit};
///
/// let ace = Card::new(Rank::Ace, Suit::Hearts);
/// assert_eq!(ace.value(), 1);
/// assert_eq!(ace.to_string(), "Ace of hearts");
/// assert_eq!(ace, Card::new(Rank::Ace, Suit::Spades));
/// assert!(ace < Card::new(Rank::Nine, Suit::Hearts));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from a rank symbol ("A", "2".."9").
    ///
    /// ```
    /// use hanoi_solitaire::cards::{Card, RankParseError, Suit};
    ///
    /// assert_eq!(Card::from_rank_str("9", Suit::Hearts).unwrap().value(), 9);
    /// assert!(matches!(
    ///     Card::from_rank_str("10", Suit::Hearts),
    ///     Err(RankParseError::InvalidRank(_))
    /// ));
    /// ```
    pub fn from_rank_str(rank: &str, suit: Suit) -> Result<Self, RankParseError> {
        Ok(Self::new(Rank::from_str(rank)?, suit))
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    pub const fn display_name(self) -> &'static str {
        self.rank.display_name()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.display_name(), self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Accepts "Ah", "9s" or a bare rank ("5"), which defaults to hearts.
    /// Case and surrounding whitespace are ignored here, unlike `Rank::from_str`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        let (rank_ch, suit_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), None, None) => (r, None),
            (Some(r), Some(s), None) => (r, Some(s)),
            _ => return Err(CardParseError::Invalid(s.to_string())),
        };
        let rank = Rank::try_from(rank_ch.to_ascii_uppercase())?;
        let suit = match suit_ch {
            Some(c) => Suit::try_from(c)?,
            None => Suit::default(),
        };
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use hanoi_solitaire::cards::{parse_cards, Rank};
///
/// let cards = parse_cards("9, 8 As").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[2].rank(), Rank::Ace);
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values_run_ace_low_to_nine() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Nine.value(), 9);
        for (i, r) in Rank::ALL.iter().enumerate() {
            assert_eq!(r.value() as usize, i + 1);
            assert_eq!(Rank::from_value(r.value()), Some(*r));
        }
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(10), None);
    }

    #[test]
    fn rank_from_str_rejects_outside_alphabet() {
        assert_eq!(Rank::from_str("A").unwrap(), Rank::Ace);
        assert_eq!(Rank::from_str("7").unwrap(), Rank::Seven);
        assert_eq!(Rank::from_str("10"), Err(RankParseError::InvalidRank("10".to_string())));
        assert!(Rank::from_str("1").is_err());
        assert!(Rank::from_str("K").is_err());
        assert!(Rank::from_str("").is_err());
    }

    #[test]
    fn rank_text_must_match_alphabet_exactly() {
        for text in ["a", " 7 ", "7 ", "1"] {
            assert_eq!(
                Rank::from_str(text),
                Err(RankParseError::InvalidRank(text.to_string())),
                "{text:?} accepted as a rank"
            );
            assert_eq!(
                Card::from_rank_str(text, Suit::Hearts),
                Err(RankParseError::InvalidRank(text.to_string()))
            );
        }
        assert!(Rank::try_from('a').is_err());
    }

    #[test]
    fn display_name_spells_out_ace_only() {
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).display_name(), "Ace");
        assert_eq!(Card::new(Rank::Two, Suit::Hearts).display_name(), "2");
        assert_eq!(Card::new(Rank::Nine, Suit::Hearts).display_name(), "9");
    }

    #[test]
    fn equality_ignores_suit() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        let two = Card::new(Rank::Two, Suit::Hearts);
        assert_eq!(ah, ad);
        assert_ne!(ah, two);
        assert_eq!(ah.cmp(&ad), Ordering::Equal);
    }

    #[test]
    fn ordering_follows_value() {
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        let two = Card::new(Rank::Two, Suit::Hearts);
        let nine = Card::new(Rank::Nine, Suit::Hearts);
        assert!(ace < two);
        assert!(two < nine);
        assert!(nine > ace);
    }

    #[test]
    fn card_display_and_from_str() {
        let c = Card::from_str("5s").unwrap();
        assert_eq!(c.rank(), Rank::Five);
        assert_eq!(c.suit(), Suit::Spades);
        assert_eq!(c.to_string(), "5 of spades");
        assert_eq!(Card::from_str("a").unwrap().suit(), Suit::Hearts);
        assert!(Card::from_str("10h").is_err());
        assert!(Card::from_str("5x").is_err());
    }

    #[test]
    fn suit_from_str_accepts_names_and_letters() {
        assert_eq!(Suit::from_str("Spades").unwrap(), Suit::Spades);
        assert_eq!(Suit::from_str("d").unwrap(), Suit::Diamonds);
        assert!(Suit::from_str("stars").is_err());
    }
}
