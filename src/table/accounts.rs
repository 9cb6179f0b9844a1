//! The account collaborator.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::AccountError;
use crate::participant::PlayerId;
use crate::sync::Mutex;

/// Player balances, owned outside the game.
///
/// The engine calls these synchronously with amounts greater than zero.
/// Implementations synchronize internally so one instance can serve many
/// games at once.
pub trait Accounts {
    /// Takes `amount` from the player's balance.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InsufficientFunds`] if the balance is lower
    /// than `amount`, or [`AccountError::AccountNotFound`] for an unknown
    /// player.
    fn debit(&self, player: &PlayerId, amount: u64) -> Result<(), AccountError>;

    /// Adds `amount` to the player's balance.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::AccountNotFound`] for an unknown player.
    fn credit(&self, player: &PlayerId, amount: u64) -> Result<(), AccountError>;
}

/// In-memory balances (`player_id` -> money amount).
pub struct MemoryAccounts {
    money: Mutex<HashMap<PlayerId, u64>>,
}

impl MemoryAccounts {
    /// Creates an empty account book.
    #[must_use]
    pub fn new() -> Self {
        Self {
            money: Mutex::new(HashMap::new()),
        }
    }

    /// Opens (or resets) an account with the given balance.
    pub fn open(&self, player: PlayerId, balance: u64) {
        self.money.lock().insert(player, balance);
    }

    /// Returns the current balance for the specified player.
    pub fn balance(&self, player: &PlayerId) -> Option<u64> {
        self.money.lock().get(player).copied()
    }
}

impl Default for MemoryAccounts {
    fn default() -> Self {
        Self::new()
    }
}

impl Accounts for MemoryAccounts {
    fn debit(&self, player: &PlayerId, amount: u64) -> Result<(), AccountError> {
        let mut money = self.money.lock();
        let balance = money.get_mut(player).ok_or(AccountError::AccountNotFound)?;
        if *balance < amount {
            return Err(AccountError::InsufficientFunds);
        }
        *balance -= amount;
        Ok(())
    }

    fn credit(&self, player: &PlayerId, amount: u64) -> Result<(), AccountError> {
        let mut money = self.money.lock();
        let balance = money.get_mut(player).ok_or(AccountError::AccountNotFound)?;
        *balance = balance.saturating_add(amount);
        Ok(())
    }
}
