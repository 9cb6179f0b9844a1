use crate::error::{InvalidPlay, PlayError};
use crate::hand::{self, BLACKJACK};
use crate::participant::{Participant, PlayerStatus};
use crate::table::Accounts;

use super::{Game, Step};

impl Game {
    fn live_hand(&self) -> Result<&Participant, InvalidPlay> {
        let participant = &self.participants[self.active_index];
        if participant.status() != PlayerStatus::Playing {
            return Err(InvalidPlay::NotPlaying);
        }
        Ok(participant)
    }

    /// Double and surrender are only offered on the dealt two cards.
    fn first_decision(&self) -> Result<&Participant, InvalidPlay> {
        let participant = self.live_hand()?;
        if participant.cards().len() != 2 {
            return Err(InvalidPlay::NotFirstDecision);
        }
        Ok(participant)
    }

    /// Draws a card. Bust or 21 ends the turn; otherwise the player may hit again.
    pub(super) fn hit(&mut self) -> Result<Step, PlayError> {
        self.live_hand()?;
        let card = self.shoe.deal()?;

        let participant = &mut self.participants[self.active_index];
        participant.add_card(card);

        if hand::is_bust(participant.cards()) {
            participant.set_status(PlayerStatus::Bust);
            Ok(Step::TurnOver)
        } else if hand::value(participant.cards()) == BLACKJACK {
            participant.set_status(PlayerStatus::Stand);
            Ok(Step::TurnOver)
        } else {
            Ok(Step::Continue)
        }
    }

    pub(super) fn stand(&mut self) -> Result<Step, PlayError> {
        self.live_hand()?;
        self.participants[self.active_index].set_status(PlayerStatus::Stand);
        Ok(Step::TurnOver)
    }

    /// Gives up the hand. The bet stays on the table until settlement.
    pub(super) fn surrender(&mut self) -> Result<Step, PlayError> {
        self.live_hand()?;
        if !self.options.surrender {
            return Err(InvalidPlay::SurrenderNotOffered.into());
        }
        self.first_decision()?;
        self.participants[self.active_index].set_status(PlayerStatus::Surrender);
        Ok(Step::TurnOver)
    }

    /// Doubles the bet, draws exactly one card, and ends the turn.
    pub(super) fn double_down<A: Accounts + ?Sized>(
        &mut self,
        accounts: &A,
    ) -> Result<Step, PlayError> {
        let participant = self.first_decision()?;
        self.shoe.ensure(1)?;

        let bet = participant.bet();
        accounts.debit(participant.player_id(), bet)?;

        let card = self.shoe.deal()?;
        let participant = &mut self.participants[self.active_index];
        participant.set_bet(bet.saturating_mul(2));
        participant.add_card(card);

        if hand::is_bust(participant.cards()) {
            participant.set_status(PlayerStatus::Bust);
        } else {
            participant.set_status(PlayerStatus::Stand);
        }
        Ok(Step::TurnOver)
    }

    /// Splits a pair into two participants, each topped up to two cards.
    ///
    /// The second hand is inserted right after the first and funded with its
    /// own bet. The turn stays on the first hand.
    pub(super) fn split<A: Accounts + ?Sized>(&mut self, accounts: &A) -> Result<Step, PlayError> {
        let participant = self.live_hand()?;
        if !hand::is_pair(participant.cards()) {
            return Err(InvalidPlay::NotAPair.into());
        }
        self.shoe.ensure(2)?;

        let (mut first, mut second) = participant.split().ok_or(InvalidPlay::NotAPair)?;
        accounts.debit(participant.player_id(), participant.bet())?;

        first.add_card(self.shoe.deal()?);
        second.add_card(self.shoe.deal()?);

        let index = self.active_index;
        self.participants[index] = first;
        self.participants.insert(index + 1, second);
        Ok(Step::Continue)
    }
}
