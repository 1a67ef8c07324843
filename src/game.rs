use crate::cards::Card;
use crate::deck::{Deck, ShuffleError};
use crate::player::{Player, PlayerError};
use std::cmp::Ordering;

/// Rounds played in a full match.
pub const ROUNDS: u8 = 5;
/// Cards dealt to each player.
pub const HAND_SIZE: usize = 5;
/// Age assigned to both players by the match constructor.
pub const DEFAULT_AGE: u32 = 20;

/// Match phases, advanced strictly in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    Ready,
    Dealt,
    Finished,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error(transparent)]
    Shuffle(#[from] ShuffleError),
    #[error("cards have already been dealt")]
    AlreadyDealt,
    #[error("cards have not been dealt yet")]
    NotDealt,
    #[error("the match is already over")]
    MatchOver,
}

/// Result of one resolved round, for the presentation layer to narrate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundOutcome {
    /// 1-based round number.
    pub round: u8,
    /// Card played by each seat; `None` when that hand was already empty.
    pub plays: [Option<Card>; 2],
    /// Winning seat, or `None` on a tie.
    pub winner: Option<usize>,
    /// Running scores after this round.
    pub scores: [u32; 2],
}

/// Final standing of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct MatchResult {
    pub names: [String; 2],
    pub scores: [u32; 2],
    /// Seat with the strictly higher score, or `None` on a tie.
    pub winner: Option<usize>,
}

/// A self-played two-player match: one shuffled standard deck, five cards
/// each, five rounds of highest-card-wins.
///
/// The deck is shuffled exactly once, with an RNG seeded from the caller's
/// `seed`, so a match is fully reproducible.
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    players: [Player; 2],
    scores: [u32; 2],
    round: u8,
    phase: Phase,
}

impl Game {
    /// Builds a fresh match: standard deck shuffled with `seed`, two
    /// players with the given names and the default age, zero scores.
    pub fn try_new(
        name1: impl Into<String>,
        name2: impl Into<String>,
        seed: u64,
    ) -> Result<Self, GameError> {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed)?;
        let players = [
            Player::try_new(name1, DEFAULT_AGE)?,
            Player::try_new(name2, DEFAULT_AGE)?,
        ];
        Ok(Self {
            deck,
            players,
            scores: [0, 0],
            round: 0,
            phase: Phase::Ready,
        })
    }

    /// Deals [`HAND_SIZE`] cards to each player, one card at a time,
    /// alternating seats. If the deck runs out mid-deal the remaining
    /// draws no-op, leaving shorter hands with no failure surfaced.
    ///
    /// # Errors
    ///
    /// [`GameError::AlreadyDealt`] unless the match is in [`Phase::Ready`].
    pub fn deal(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Ready {
            return Err(GameError::AlreadyDealt);
        }
        for _ in 0..HAND_SIZE {
            for player in &mut self.players {
                player.draw_from(&mut self.deck);
            }
        }
        self.phase = Phase::Dealt;
        Ok(())
    }

    /// Plays one round: each seat plays its highest-value card, the
    /// strictly greater value scores a point, equal values score nobody.
    ///
    /// A seat whose hand is already empty plays no card and forfeits the
    /// round; the opponent scores the point if it still holds a card, and
    /// a round with two empty hands is a dead tie.
    ///
    /// # Errors
    ///
    /// [`GameError::NotDealt`] before [`Game::deal`], and
    /// [`GameError::MatchOver`] once all rounds have been played.
    pub fn play_round(&mut self) -> Result<RoundOutcome, GameError> {
        match self.phase {
            Phase::Ready => return Err(GameError::NotDealt),
            Phase::Finished => return Err(GameError::MatchOver),
            Phase::Dealt => {}
        }

        self.round += 1;
        let plays = [self.play_highest(0), self.play_highest(1)];

        let winner = match (&plays[0], &plays[1]) {
            (Some(a), Some(b)) => match a.value().cmp(&b.value()) {
                Ordering::Greater => Some(0),
                Ordering::Less => Some(1),
                Ordering::Equal => None,
            },
            (Some(_), None) => Some(0),
            (None, Some(_)) => Some(1),
            (None, None) => None,
        };
        if let Some(seat) = winner {
            self.scores[seat] += 1;
        }
        if self.round >= ROUNDS {
            self.phase = Phase::Finished;
        }

        Ok(RoundOutcome {
            round: self.round,
            plays,
            winner,
            scores: self.scores,
        })
    }

    /// Removes and returns the seat's highest card, `None` on an empty
    /// hand.
    fn play_highest(&mut self, seat: usize) -> Option<Card> {
        let card = self.players[seat].highest_card()?.clone();
        self.players[seat].remove_from_hand(&card);
        Some(card)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rounds played so far.
    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn player(&self, seat: usize) -> &Player {
        &self.players[seat]
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// The final standing, or `None` while the match is still running.
    pub fn final_result(&self) -> Option<MatchResult> {
        if self.phase != Phase::Finished {
            return None;
        }
        let winner = match self.scores[0].cmp(&self.scores[1]) {
            Ordering::Greater => Some(0),
            Ordering::Less => Some(1),
            Ordering::Equal => None,
        };
        Some(MatchResult {
            names: [
                self.players[0].name().to_string(),
                self.players[1].name().to_string(),
            ],
            scores: self.scores,
            winner,
        })
    }
}
