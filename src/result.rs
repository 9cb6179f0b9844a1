//! Round result types for settlement.

use alloc::vec::Vec;

use crate::error::AccountError;
use crate::participant::PlayerId;

/// Result of a single hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Loss,
    /// Player surrendered and gets part of the bet back.
    HalfLoss,
    /// Push (tie).
    Push,
    /// Player has blackjack and the dealer does not.
    BlackjackWin,
}

/// What happened to a hand's payout credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Credit {
    /// The payout was credited.
    Credited,
    /// Nothing to credit.
    Skipped,
    /// The account refused the credit; needs reconciliation.
    Failed(AccountError),
}

/// Result for a single participant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    /// Index of the participant in turn order.
    pub index: usize,
    /// The player owning the hand.
    pub player_id: PlayerId,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this hand.
    pub bet: u64,
    /// Amount returned to the player, stake included.
    pub payout: u64,
    /// The player's hand value.
    pub player_value: u8,
    /// Whether the payout reached the account.
    pub credit: Credit,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// Results for each participant.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}

impl RoundResult {
    /// Returns the hands whose credit failed.
    pub fn failed_credits(&self) -> impl Iterator<Item = &HandResult> {
        self.hands
            .iter()
            .filter(|hand| matches!(hand.credit, Credit::Failed(_)))
    }
}
