//! Participants: one seat's hand, bet, and turn status.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Identifier of a player's external account record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub String);

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(String::from(id))
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a participant stands in the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerStatus {
    /// Joined, initial bet not placed yet.
    PendingBet,
    /// Bet placed, waiting for the other players to bet.
    WaitingForDeal,
    /// Holds a live hand and may act.
    Playing,
    /// Stood, voluntarily or on 21 or after a double.
    Stand,
    /// Hand went over 21.
    Bust,
    /// Gave up the hand.
    Surrender,
}

impl PlayerStatus {
    /// Returns whether the participant's turn is over for this round.
    #[must_use]
    pub const fn is_turn_over(self) -> bool {
        match self {
            Self::Stand | Self::Bust | Self::Surrender => true,
            Self::PendingBet | Self::WaitingForDeal | Self::Playing => false,
        }
    }
}

/// One turn participant at the table.
///
/// A split produces two participants with the same player id and name. They
/// own independent cards, bets and statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    player_id: PlayerId,
    name: String,
    cards: Vec<Card>,
    bet: u64,
    status: PlayerStatus,
}

impl Participant {
    /// Creates a participant that still has to bet.
    #[must_use]
    pub fn new(player_id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            player_id,
            name: name.into(),
            cards: Vec::new(),
            bet: 0,
            status: PlayerStatus::PendingBet,
        }
    }

    /// Returns the player id.
    #[must_use]
    pub const fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    /// Returns the display name captured at join time.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet amount.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> PlayerStatus {
        self.status
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.into();
    }

    pub(crate) const fn set_bet(&mut self, bet: u64) {
        self.bet = bet;
    }

    pub(crate) const fn set_status(&mut self, status: PlayerStatus) {
        self.status = status;
    }

    /// Splits a two-card hand into two one-card participants sharing the bet.
    pub(crate) fn split(&self) -> Option<(Self, Self)> {
        let [first, second] = self.cards[..] else {
            return None;
        };
        let half = |card: Card| Self {
            player_id: self.player_id.clone(),
            name: self.name.clone(),
            cards: alloc::vec![card],
            bet: self.bet,
            status: PlayerStatus::Playing,
        };
        Some((half(first), half(second)))
    }

    #[cfg(test)]
    pub(crate) fn with_hand(mut self, cards: &[Card], bet: u64, status: PlayerStatus) -> Self {
        self.cards = cards.to_vec();
        self.bet = bet;
        self.status = status;
        self
    }
}
