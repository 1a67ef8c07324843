use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("card name cannot be empty")]
    EmptyName,
    #[error("card suit cannot be empty")]
    EmptySuit,
    #[error("card value cannot be negative, got {0}")]
    NegativeValue(i32),
}

/// A playing card: name + suit + comparison value.
///
/// Cards are immutable after construction and compare structurally; two
/// cards with the same name, suit, and value are indistinguishable.
///
/// ```
/// use high_card_rs::cards::Card;
///
/// let card = Card::try_new("Ace", "Spades", 1).unwrap();
/// assert_eq!(card.to_string(), "Ace of Spades");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    name: String,
    suit: String,
    value: i32,
}

impl Card {
    /// Validates and builds a card. The value has no upper bound; only
    /// negative values are rejected.
    pub fn try_new(
        name: impl Into<String>,
        suit: impl Into<String>,
        value: i32,
    ) -> Result<Self, CardError> {
        let name = name.into();
        let suit = suit.into();
        if name.trim().is_empty() {
            return Err(CardError::EmptyName);
        }
        if suit.trim().is_empty() {
            return Err(CardError::EmptySuit);
        }
        if value < 0 {
            return Err(CardError::NegativeValue(value));
        }
        Ok(Self { name, suit, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn suit(&self) -> &str {
        &self.suit
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.name, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, suit: &str, value: i32) -> Card {
        Card::try_new(name, suit, value).expect("valid card")
    }

    #[test]
    fn construct_and_read_back() {
        let c = card("Ace", "Hearts", 1);
        assert_eq!(c.name(), "Ace");
        assert_eq!(c.suit(), "Hearts");
        assert_eq!(c.value(), 1);
    }

    #[test]
    fn display_is_name_of_suit() {
        assert_eq!(card("Queen", "Diamonds", 12).to_string(), "Queen of Diamonds");
    }

    #[test]
    fn empty_or_blank_name_is_rejected() {
        assert_eq!(Card::try_new("", "Hearts", 1), Err(CardError::EmptyName));
        assert_eq!(Card::try_new("   ", "Hearts", 1), Err(CardError::EmptyName));
    }

    #[test]
    fn empty_or_blank_suit_is_rejected() {
        assert_eq!(Card::try_new("Ace", "", 1), Err(CardError::EmptySuit));
        assert_eq!(Card::try_new("Ace", "  ", 1), Err(CardError::EmptySuit));
    }

    #[test]
    fn negative_value_is_rejected() {
        assert_eq!(Card::try_new("Ace", "Hearts", -1), Err(CardError::NegativeValue(-1)));
    }

    #[test]
    fn zero_and_large_values_are_accepted() {
        assert_eq!(card("Joker", "None", 0).value(), 0);
        assert_eq!(card("Ace", "Spades", 14).value(), 14);
    }

    #[test]
    fn equality_is_structural_on_all_three_fields() {
        let a = card("King", "Spades", 13);
        let b = card("King", "Spades", 13);
        assert_eq!(a, b);

        assert_ne!(card("10", "Hearts", 10), card("10", "Clubs", 10));
        assert_ne!(card("Ace", "Spades", 1), card("Ace", "Spades", 14));
        assert_ne!(card("Ace", "Spades", 1), card("King", "Spades", 1));
    }

    #[test]
    fn equality_is_reflexive_symmetric_transitive() {
        let a = card("7", "Clubs", 7);
        let b = card("7", "Clubs", 7);
        let c = card("7", "Clubs", 7);
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
    }
}
