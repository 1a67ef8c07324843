use crate::cards::Card;
use std::fmt;

/// A discard pile: an ordered pile of cards with value-based removal.
///
/// ```
/// use high_card_rs::cards::Card;
/// use high_card_rs::pile::DiscardPile;
///
/// let mut pile = DiscardPile::new();
/// pile.push(Card::try_new("Ace", "Spades", 1).unwrap());
/// assert_eq!(pile.to_string(), "Ace of Spades.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    /// Creates an empty discard pile.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Builds a pile from the given cards, keeping their order.
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

    /// Adds a card to the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the first card structurally equal to `card`, or
    /// `None` when there is no match.
    pub fn remove(&mut self, card: &Card) -> Option<Card> {
        let index = self.cards.iter().position(|c| c == card)?;
        Some(self.cards.remove(index))
    }

    /// Clears the pile and returns everything that was in it, in original
    /// order.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

impl fmt::Display for DiscardPile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return write!(f, "Empty discard pile");
        }
        let rendered: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        write!(f, "{}.", rendered.join(", "))
    }
}
