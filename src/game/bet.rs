use alloc::vec::Vec;

use crate::error::{InvalidPlay, PlayError};
use crate::participant::PlayerStatus;
use crate::table::Accounts;

use super::{Game, Phase, Step};

impl Game {
    /// Places the active participant's initial bet.
    ///
    /// Turn moves to the next participant still to bet. Once nobody is left,
    /// cards are dealt and the first hand is up.
    pub(super) fn initial_bet<A: Accounts + ?Sized>(
        &mut self,
        amount: i64,
        accounts: &A,
    ) -> Result<Step, PlayError> {
        let amount = u64::try_from(amount)
            .ok()
            .filter(|&amount| amount > 0)
            .ok_or(InvalidPlay::NonPositiveBet)?;

        let index = self.active_index;
        let participant = &self.participants[index];
        if participant.bet() != 0 {
            return Err(InvalidPlay::AlreadyBet.into());
        }

        let last_to_bet = !self
            .participants
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p.status() == PlayerStatus::PendingBet);
        if last_to_bet {
            let bettors = self
                .participants
                .iter()
                .filter(|p| p.status() == PlayerStatus::WaitingForDeal)
                .count()
                + 1;
            self.shoe.ensure((bettors + 1) * 2)?;
        }

        accounts.debit(participant.player_id(), amount)?;

        let participant = &mut self.participants[index];
        participant.set_bet(amount);
        participant.set_status(PlayerStatus::WaitingForDeal);

        match self.next_with_status(PlayerStatus::PendingBet) {
            Some(next) => self.active_index = next,
            None => self.deal_initial_cards()?,
        }

        Ok(Step::Continue)
    }

    /// Deals two cards to every participant that bet and two to the dealer.
    fn deal_initial_cards(&mut self) -> Result<(), PlayError> {
        let bettors: Vec<usize> = self
            .participants
            .iter()
            .enumerate()
            .filter(|(_, p)| p.status() == PlayerStatus::WaitingForDeal)
            .map(|(i, _)| i)
            .collect();

        self.dealer.clear();
        for _ in 0..2 {
            for &i in &bettors {
                let card = self.shoe.deal()?;
                self.participants[i].add_card(card);
            }
            let card = self.shoe.deal()?;
            self.dealer.push(card);
        }

        for &i in &bettors {
            self.participants[i].set_status(PlayerStatus::Playing);
        }
        self.active_index = bettors.first().copied().unwrap_or(0);
        self.phase = Phase::Acting;

        log::info!(
            "game {}: dealt {} hands, dealer shows {:?}",
            self.id,
            bettors.len(),
            self.dealer.first()
        );
        Ok(())
    }
}
