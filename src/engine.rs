// Minimal match engine API boundary. This trait exposes the driver-facing
// lifecycle and queries so front ends (CLI, tests, future UIs) can run a
// match without depending on engine internals. It is implemented for the
// core `Game` type.

pub trait MatchEngine {
    // Match lifecycle
    fn deal(&mut self) -> Result<(), crate::game::GameError>;
    fn play_round(&mut self) -> Result<crate::game::RoundOutcome, crate::game::GameError>;

    // Queries
    fn player(&self, seat: usize) -> &crate::player::Player;
    fn scores(&self) -> [u32; 2];
    fn round(&self) -> u8;
    fn phase(&self) -> crate::game::Phase;
    fn cards_remaining(&self) -> usize;
    fn is_finished(&self) -> bool;
    fn final_result(&self) -> Option<crate::game::MatchResult>;
}

impl MatchEngine for crate::game::Game {
    fn deal(&mut self) -> Result<(), crate::game::GameError> {
        self.deal()
    }
    fn play_round(&mut self) -> Result<crate::game::RoundOutcome, crate::game::GameError> {
        self.play_round()
    }

    fn player(&self, seat: usize) -> &crate::player::Player {
        self.player(seat)
    }
    fn scores(&self) -> [u32; 2] {
        self.scores()
    }
    fn round(&self) -> u8 {
        self.round()
    }
    fn phase(&self) -> crate::game::Phase {
        self.phase()
    }
    fn cards_remaining(&self) -> usize {
        self.cards_remaining()
    }
    fn is_finished(&self) -> bool {
        self.is_finished()
    }
    fn final_result(&self) -> Option<crate::game::MatchResult> {
        self.final_result()
    }
}
