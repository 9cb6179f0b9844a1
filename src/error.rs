//! Error types for table operations.

use alloc::string::String;
use thiserror::Error;

use crate::game::GameId;

/// Reasons a play is rejected. The game is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidPlay {
    /// The round is over; no further plays are accepted.
    #[error("round already concluded")]
    RoundConcluded,
    /// The play names a participant other than the active one.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The active participant has not bet yet.
    #[error("must place a bet first")]
    BetRequired,
    /// Initial bet amount is zero or negative.
    #[error("bet must be positive")]
    NonPositiveBet,
    /// The participant already placed an initial bet.
    #[error("bet already placed")]
    AlreadyBet,
    /// The participant's hand is not live.
    #[error("hand is not in play")]
    NotPlaying,
    /// Double and surrender need the original two-card hand.
    #[error("only available on the first two cards")]
    NotFirstDecision,
    /// Split needs two cards of equal rank.
    #[error("split requires a matching pair")]
    NotAPair,
    /// Surrender is disabled at this table.
    #[error("surrender is not offered")]
    SurrenderNotOffered,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    DeckExhausted,
}

/// Errors reported by the account collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Balance is lower than the debit.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// No account for the player.
    #[error("account not found")]
    AccountNotFound,
}

/// Errors that can occur while applying a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// A precondition was violated.
    #[error("invalid play: {0}")]
    InvalidPlay(#[from] InvalidPlay),
    /// The shoe ran out; the round cannot continue.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A debit was refused.
    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Errors that can occur when joining a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Cards have been dealt.
    #[error("the game is in progress; no new players can join")]
    InProgress,
    /// Every playing position is taken.
    #[error("all the playing positions are occupied")]
    TableFull,
    /// The player holds the maximum number of seats.
    #[error("the player has reached the seat limit for a single game")]
    SeatLimitReached,
}

/// Errors reported by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No game with this id.
    #[error("no game with id: {0}")]
    NotFound(GameId),
    /// The backend failed.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors surfaced by the table orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The play was rejected.
    #[error(transparent)]
    Play(#[from] PlayError),
    /// The join was rejected.
    #[error(transparent)]
    Join(#[from] JoinError),
    /// Lookup or save failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
