use crate::cards::Card;
use crate::deck::Deck;
use crate::pile::DiscardPile;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerError {
    #[error("player name cannot be empty")]
    EmptyName,
}

/// A player with a name, an age, and an exclusively owned hand of cards.
///
/// Cards move between the hand and a [`Deck`] or [`DiscardPile`] by
/// transfer: removed from the source, appended to the destination, never
/// left in both.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    age: u32,
    hand: Vec<Card>,
}

impl Player {
    /// Validates and builds a player with an empty hand.
    pub fn try_new(name: impl Into<String>, age: u32) -> Result<Self, PlayerError> {
        Self::try_with_hand(name, age, Vec::new())
    }

    /// Validates and builds a player holding the given cards in order.
    pub fn try_with_hand(
        name: impl Into<String>,
        age: u32,
        hand: Vec<Card>,
    ) -> Result<Self, PlayerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlayerError::EmptyName);
        }
        Ok(Self { name, age, hand })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// The card with the strictly greatest value; the first one scanned
    /// wins ties. `None` on an empty hand.
    pub fn highest_card(&self) -> Option<&Card> {
        let mut highest = self.hand.first()?;
        for card in &self.hand {
            if card.value() > highest.value() {
                highest = card;
            }
        }
        Some(highest)
    }

    /// Removes the first card structurally equal to `card` from the hand;
    /// reports whether a card was removed.
    pub fn remove_from_hand(&mut self, card: &Card) -> bool {
        match self.hand.iter().position(|c| c == card) {
            Some(index) => {
                self.hand.remove(index);
                true
            }
            None => false,
        }
    }

    /// Draws one card from the deck into the hand. An empty deck leaves
    /// the hand unchanged and returns `false`; that is not an error.
    pub fn draw_from(&mut self, deck: &mut Deck) -> bool {
        match deck.draw() {
            Some(card) => {
                self.hand.push(card);
                true
            }
            None => false,
        }
    }

    /// Moves `card` from the hand onto the discard pile; reports whether
    /// the transfer happened.
    pub fn discard_to(&mut self, card: &Card, pile: &mut DiscardPile) -> bool {
        match self.hand.iter().position(|c| c == card) {
            Some(index) => {
                pile.push(self.hand.remove(index));
                true
            }
            None => false,
        }
    }

    /// Moves `card` from the hand back into the deck; reports whether the
    /// transfer happened.
    pub fn return_to(&mut self, card: &Card, deck: &mut Deck) -> bool {
        match self.hand.iter().position(|c| c == card) {
            Some(index) => {
                deck.push(self.hand.remove(index));
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, ", self.name, self.age)?;
        if self.hand.is_empty() {
            write!(f, "Empty hand.")
        } else {
            let rendered: Vec<String> = self.hand.iter().map(Card::to_string).collect();
            write!(f, "{}.", rendered.join(", "))
        }
    }
}
