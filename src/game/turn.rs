use crate::participant::PlayerStatus;

use super::Game;

impl Game {
    /// Finds the next participant with `status`, scanning forward from the
    /// active index and wrapping around to the start of the list.
    pub(super) fn next_with_status(&self, status: PlayerStatus) -> Option<usize> {
        let len = self.participants.len();
        (1..=len)
            .map(|offset| (self.active_index + offset) % len)
            .find(|&i| self.participants[i].status() == status)
    }

    /// Passes the turn to the next live hand.
    ///
    /// Returns `false` when no participant is still playing, leaving the
    /// active index where it was.
    pub(super) fn advance_turn(&mut self) -> bool {
        match self.next_with_status(PlayerStatus::Playing) {
            Some(next) => {
                self.active_index = next;
                true
            }
            None => false,
        }
    }
}
