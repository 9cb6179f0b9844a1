//! A multiplayer blackjack table engine with optional `no_std` support.
//!
//! The crate is built around a [`Game`] value: participants join, place their
//! initial bets, and then act in turn (hit, stand, double, split, surrender).
//! When the last live hand finishes, the dealer plays out and every hand is
//! settled against it.
//!
//! [`Game::apply`] never mutates the game it is called on. It returns the next
//! game value together with the settlement, if the play concluded the round.
//! [`Table`] puts that engine behind per-game locks and the external account
//! and storage collaborators.
//!
//! # Example
//!
//! ```
//! use croupier::{Game, GameId, GameOptions, MemoryAccounts, Play, PlayKind, PlayerId, Shoe};
//!
//! let accounts = MemoryAccounts::new();
//! let alice = PlayerId::from("alice");
//! accounts.open(alice.clone(), 100);
//!
//! let mut game = Game::new(GameId(1), GameOptions::default(), Shoe::shuffled(1, 42));
//! game.join(alice.clone(), "Alice").unwrap();
//!
//! let outcome = game
//!     .apply(&Play::new(alice, PlayKind::InitialBet, 10), &accounts)
//!     .unwrap();
//! assert_eq!(outcome.game.participants()[0].cards().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod settlement;
pub mod shoe;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{
    AccountError, DealError, InvalidPlay, JoinError, PlayError, StoreError, TableError,
};
pub use game::{Game, GameId, Phase, Play, PlayKind, PlayOutcome};
pub use options::{GameOptions, RoundingMode};
pub use participant::{Participant, PlayerId, PlayerStatus};
pub use result::{Credit, HandOutcome, HandResult, RoundResult};
pub use shoe::Shoe;
pub use table::{Accounts, GameStore, MemoryAccounts, MemoryStore, Table};
