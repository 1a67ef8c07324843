use crate::cards::Card;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShuffleError {
    #[error("cannot shuffle an empty deck")]
    EmptyDeck,
}

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// An ordered deck of cards with stack semantics: `draw` removes from the
/// top (the end of the sequence).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled standard deck, suit-major: all thirteen ranks
    /// of one suit before the next (Ace=1 through King=13).
    ///
    /// ```
    /// use high_card_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let suits = ["Hearts", "Clubs", "Diamonds", "Spades"];
        let names = [
            "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
        ];

        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in suits {
            for (i, name) in names.iter().enumerate() {
                let card =
                    Card::try_new(*name, suit, i as i32 + 1).expect("standard card is valid");
                cards.push(card);
            }
        }
        assert_eq!(cards.len(), DECK_SIZE, "standard deck must hold 52 cards");
        Self { cards }
    }

    /// Builds a deck from the given cards, keeping their order. Empty is
    /// legal.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Draw one card from the top of the deck. `None` on an empty deck is a
    /// normal terminal condition, not an error.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// Appends one card to the top of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Shuffle in place using the provided RNG. Shuffling an empty deck is
    /// a caller error, not a no-op.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ShuffleError> {
        if self.cards.is_empty() {
            return Err(ShuffleError::EmptyDeck);
        }
        self.cards.shuffle(rng);
        Ok(())
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) -> Result<(), ShuffleError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng)
    }

    /// Adds all the given cards to the deck, then shuffles.
    pub fn reshuffle<R: Rng + ?Sized>(
        &mut self,
        cards: Vec<Card>,
        rng: &mut R,
    ) -> Result<(), ShuffleError> {
        self.cards.extend(cards);
        self.shuffle_with(rng)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck with {} cards", self.len())
    }
}
