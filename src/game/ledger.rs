//! Debits taken while a play is applied.

use alloc::vec::Vec;
use core::cell::RefCell;

use crate::error::AccountError;
use crate::participant::PlayerId;
use crate::table::Accounts;

/// Passes calls through to `accounts` and remembers every debit that went
/// through, so a play that fails later can return the money.
pub(crate) struct Ledger<'a, A: ?Sized> {
    accounts: &'a A,
    debits: RefCell<Vec<(PlayerId, u64)>>,
}

impl<'a, A: Accounts + ?Sized> Ledger<'a, A> {
    pub(crate) const fn new(accounts: &'a A) -> Self {
        Self {
            accounts,
            debits: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn into_debits(self) -> Vec<(PlayerId, u64)> {
        self.debits.into_inner()
    }
}

impl<A: Accounts + ?Sized> Accounts for Ledger<'_, A> {
    fn debit(&self, player: &PlayerId, amount: u64) -> Result<(), AccountError> {
        self.accounts.debit(player, amount)?;
        self.debits.borrow_mut().push((player.clone(), amount));
        Ok(())
    }

    fn credit(&self, player: &PlayerId, amount: u64) -> Result<(), AccountError> {
        self.accounts.credit(player, amount)
    }
}

/// Credits back the debits of a play that did not take effect.
pub(crate) fn refund<A: Accounts + ?Sized>(accounts: &A, debits: &[(PlayerId, u64)]) {
    for (player, amount) in debits.iter().rev() {
        if let Err(err) = accounts.credit(player, *amount) {
            log::warn!("refunding {amount} to {player} failed: {err}");
        }
    }
}
