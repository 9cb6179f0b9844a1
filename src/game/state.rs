//! Game phase and play types.

use crate::participant::PlayerId;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Participants are placing their initial bets.
    Betting,
    /// Cards are dealt and participants act in turn.
    Acting,
    /// Dealer has played and the round is settled.
    Concluded,
}

/// Kind of play a participant makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayKind {
    /// Place the round's opening bet.
    InitialBet,
    /// Draw a card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet, draw one card, and stand.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Give up the hand.
    Surrender,
}

/// A play submitted for the active participant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Play {
    /// Player the play is made for.
    pub player_id: PlayerId,
    /// What to do.
    pub kind: PlayKind,
    /// Bet amount; only read for [`PlayKind::InitialBet`].
    pub amount: i64,
}

impl Play {
    /// Creates a play.
    #[must_use]
    pub fn new(player_id: impl Into<PlayerId>, kind: PlayKind, amount: i64) -> Self {
        Self {
            player_id: player_id.into(),
            kind,
            amount,
        }
    }
}

/// Whether a play ended the active participant's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    /// Turn stays with the same index.
    Continue,
    /// Turn passes to the next live hand.
    TurnOver,
}
