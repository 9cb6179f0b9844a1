//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::{InvalidPlay, JoinError, PlayError};
use crate::options::GameOptions;
use crate::participant::{Participant, PlayerId, PlayerStatus};
use crate::result::RoundResult;
use crate::settlement;
use crate::shoe::Shoe;
use crate::table::Accounts;

mod actions;
mod bet;
mod dealer;
pub(crate) mod ledger;
pub mod state;
mod turn;

pub use state::{Phase, Play, PlayKind};
use ledger::Ledger;
use state::Step;

/// Identifier of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The game after a play was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayOutcome {
    /// The next game value.
    pub game: Game,
    /// Settlement, present when this play concluded the round.
    pub settlement: Option<RoundResult>,
}

/// A play that went through, with the debits it made.
pub(crate) struct Resolved {
    pub(crate) outcome: PlayOutcome,
    pub(crate) debits: Vec<(PlayerId, u64)>,
}

/// One blackjack round at one table.
///
/// Turn order is the participant list order. The list grows when a hand is
/// split, with the new hand inserted right after the one it came from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    pub(crate) id: GameId,
    pub(crate) options: GameOptions,
    pub(crate) participants: Vec<Participant>,
    pub(crate) active_index: usize,
    pub(crate) dealer: Vec<Card>,
    pub(crate) shoe: Shoe,
    pub(crate) phase: Phase,
}

impl Game {
    /// Creates an empty game in the betting phase.
    #[must_use]
    pub const fn new(id: GameId, options: GameOptions, shoe: Shoe) -> Self {
        Self {
            id,
            options,
            participants: Vec::new(),
            active_index: 0,
            dealer: Vec::new(),
            shoe,
            phase: Phase::Betting,
        }
    }

    /// Seats a player on the next free position.
    ///
    /// # Errors
    ///
    /// Returns an error if cards have been dealt, every playing position is
    /// taken, or the player already holds the maximum number of seats.
    pub fn join(&mut self, player_id: PlayerId, name: impl Into<String>) -> Result<(), JoinError> {
        let started = self.participants.iter().any(|p| {
            !matches!(
                p.status(),
                PlayerStatus::PendingBet | PlayerStatus::WaitingForDeal
            )
        });
        if started || self.phase != Phase::Betting {
            return Err(JoinError::InProgress);
        }

        if self.participants.len() >= usize::from(self.options.playing_positions) {
            return Err(JoinError::TableFull);
        }

        let seats = self
            .participants
            .iter()
            .filter(|p| *p.player_id() == player_id)
            .count();
        if seats >= usize::from(self.options.seats_per_player) {
            return Err(JoinError::SeatLimitReached);
        }

        log::debug!("game {}: {} joins", self.id, player_id);
        self.participants.push(Participant::new(player_id, name));
        Ok(())
    }

    /// Applies a play and returns the resulting game.
    ///
    /// `self` is never modified: either every change the play makes is in the
    /// returned game, or the call fails and nothing changed. A play that fails
    /// after taking money (for example when the dealer runs out of cards
    /// after a double) credits the debit back before returning the error.
    /// When the play ends the last live hand, the dealer plays out and the
    /// round is settled before returning; payouts are credited through
    /// `accounts`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InvalidPlay`] when a precondition fails,
    /// [`PlayError::Deal`] when the shoe runs out, and
    /// [`PlayError::Account`] when a debit is refused.
    pub fn apply<A: Accounts + ?Sized>(
        &self,
        play: &Play,
        accounts: &A,
    ) -> Result<PlayOutcome, PlayError> {
        let Resolved { mut outcome, .. } = self.resolve(play, accounts)?;
        if let Some(result) = &mut outcome.settlement {
            settlement::pay(self.id, result, accounts);
        }
        Ok(outcome)
    }

    /// Applies a play without crediting the settlement.
    ///
    /// Debits are made and reported back; on error they have already been
    /// refunded. Payouts in the returned settlement are left for the caller
    /// to credit with [`settlement::pay`].
    pub(crate) fn resolve<A: Accounts + ?Sized>(
        &self,
        play: &Play,
        accounts: &A,
    ) -> Result<Resolved, PlayError> {
        let ledger = Ledger::new(accounts);
        let stepped = self.step(play, &ledger);
        match stepped {
            Ok(outcome) => Ok(Resolved {
                outcome,
                debits: ledger.into_debits(),
            }),
            Err(err) => {
                ledger::refund(accounts, &ledger.into_debits());
                Err(err)
            }
        }
    }

    fn step<A: Accounts + ?Sized>(&self, play: &Play, accounts: &A) -> Result<PlayOutcome, PlayError> {
        if self.phase == Phase::Concluded {
            return Err(InvalidPlay::RoundConcluded.into());
        }

        let active = self
            .active_participant()
            .filter(|p| *p.player_id() == play.player_id)
            .ok_or(InvalidPlay::NotYourTurn)?;

        if active.bet() == 0 && play.kind != PlayKind::InitialBet {
            return Err(InvalidPlay::BetRequired.into());
        }

        let mut next = self.clone();
        let step = match play.kind {
            PlayKind::InitialBet => next.initial_bet(play.amount, accounts)?,
            PlayKind::Hit => next.hit()?,
            PlayKind::Stand => next.stand()?,
            PlayKind::Double => next.double_down(accounts)?,
            PlayKind::Split => next.split(accounts)?,
            PlayKind::Surrender => next.surrender()?,
        };
        log::debug!(
            "game {}: seat {} {:?} by {}",
            self.id,
            self.active_index,
            play.kind,
            play.player_id
        );

        if step == Step::TurnOver && !next.advance_turn() {
            next.conclude()?;
            let result = settlement::tally(&next);
            return Ok(PlayOutcome {
                game: next,
                settlement: Some(result),
            });
        }

        Ok(PlayOutcome {
            game: next,
            settlement: None,
        })
    }

    /// Sets the display name on every seat held by `player_id`.
    ///
    /// Returns whether the player sits in this game.
    pub(crate) fn rename(&mut self, player_id: &PlayerId, name: &str) -> bool {
        let mut found = false;
        for participant in self
            .participants
            .iter_mut()
            .filter(|p| p.player_id() == player_id)
        {
            participant.set_name(name);
            found = true;
        }
        found
    }

    /// Returns the game id.
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    /// Returns the table rules.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the participants in turn order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Returns the index of the participant whose turn it is.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns the participant whose turn it is.
    ///
    /// Returns `None` once the round is concluded or when nobody has joined.
    #[must_use]
    pub fn active_participant(&self) -> Option<&Participant> {
        if self.phase == Phase::Concluded {
            return None;
        }
        self.participants.get(self.active_index)
    }

    /// Returns the dealer's cards.
    #[must_use]
    pub fn dealer_cards(&self) -> &[Card] {
        &self.dealer
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the round is over.
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.phase == Phase::Concluded
    }
}
