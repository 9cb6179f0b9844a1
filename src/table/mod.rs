//! Round orchestration over the external collaborators.
//!
//! [`Table`] looks a game up, applies one play under that game's lock, and
//! saves the result. Plays on the same game are serialized; plays on
//! different games run concurrently.

use alloc::string::String;
use core::sync::atomic::{AtomicU64, Ordering};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{StoreError, TableError};
use crate::game::ledger;
use crate::game::{Game, GameId, Play, Resolved};
use crate::options::GameOptions;
use crate::participant::PlayerId;
use crate::result::RoundResult;
use crate::settlement;
use crate::shoe::Shoe;
use crate::sync::{KeyedLocks, Mutex};

mod accounts;
mod store;

pub use accounts::{Accounts, MemoryAccounts};
pub use store::{GameStore, MemoryStore};

/// Runs games against an account service and a game store.
pub struct Table<A, S> {
    accounts: A,
    store: S,
    options: GameOptions,
    /// Next game ID to assign.
    next_id: AtomicU64,
    /// Source of shuffle seeds for new shoes.
    rng: Mutex<ChaCha8Rng>,
    locks: KeyedLocks<GameId>,
}

impl<A: Accounts, S: GameStore> Table<A, S> {
    /// Creates a table whose new games use `options`.
    ///
    /// `seed` drives the shuffle of every shoe this table creates.
    #[must_use]
    pub fn new(accounts: A, store: S, options: GameOptions, seed: u64) -> Self {
        Self {
            accounts,
            store,
            options,
            next_id: AtomicU64::new(1),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            locks: KeyedLocks::new(),
        }
    }

    /// Creates a game with a freshly shuffled shoe and seats its first player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game cannot be saved.
    pub fn create_game(
        &self,
        player_id: PlayerId,
        name: impl Into<String>,
    ) -> Result<GameId, TableError> {
        let id = GameId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let seed = self.rng.lock().next_u64();
        let shoe = Shoe::shuffled(self.options.decks, seed);

        let mut game = Game::new(id, self.options.clone(), shoe);
        game.join(player_id, name)?;
        self.store.save(&game)?;

        log::info!("game {id}: created");
        Ok(id)
    }

    /// Seats another player in a game that has not been dealt yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown, the join is rejected, or the
    /// game cannot be saved.
    pub fn join_game(
        &self,
        id: GameId,
        player_id: PlayerId,
        name: impl Into<String>,
    ) -> Result<(), TableError> {
        let lock = self.locks.get(id);
        let _guard = lock.lock();

        let mut game = self.store.find(id)?;
        game.join(player_id, name)?;
        self.store.save(&game)?;
        Ok(())
    }

    /// Applies one play to a stored game and saves the result.
    ///
    /// Returns the settlement when the play concluded the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown, the play is rejected, or the
    /// game cannot be saved. A rejected or unsaved play leaves the stored game
    /// and every balance as they were.
    pub fn execute_play(&self, id: GameId, play: &Play) -> Result<Option<RoundResult>, TableError> {
        let lock = self.locks.get(id);
        let _guard = lock.lock();

        let game = self.store.find(id)?;
        let Resolved {
            mut outcome,
            debits,
        } = game.resolve(play, &self.accounts)?;

        if let Err(err) = self.store.save(&outcome.game) {
            log::warn!("game {id}: save failed, play undone: {err}");
            ledger::refund(&self.accounts, &debits);
            return Err(err.into());
        }

        // Payouts go out only once the concluded game is stored.
        if let Some(result) = &mut outcome.settlement {
            settlement::pay(id, result, &self.accounts);
        }
        Ok(outcome.settlement)
    }

    /// Returns the last saved state of a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown.
    pub fn game(&self, id: GameId) -> Result<Game, TableError> {
        Ok(self.store.find(id)?)
    }

    /// Deletes a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown.
    pub fn delete_game(&self, id: GameId) -> Result<(), TableError> {
        let lock = self.locks.get(id);
        let _guard = lock.lock();
        self.store.delete(id)?;
        Ok(())
    }

    /// Updates a player's display name in every stored game they sit in.
    ///
    /// Returns the number of games that changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be listed or a game cannot be
    /// saved. Games renamed before the failure keep the new name.
    pub fn rename_player(&self, player_id: &PlayerId, name: &str) -> Result<usize, TableError> {
        let mut renamed = 0;
        for id in self.store.ids()? {
            let lock = self.locks.get(id);
            let _guard = lock.lock();

            let mut game = match self.store.find(id) {
                Ok(game) => game,
                // Deleted since it was listed.
                Err(StoreError::NotFound(_)) => continue,
                Err(err) => return Err(err.into()),
            };
            if game.rename(player_id, name) {
                self.store.save(&game)?;
                renamed += 1;
            }
        }

        log::info!("player {player_id}: renamed in {renamed} games");
        Ok(renamed)
    }

    /// Returns the account collaborator.
    pub const fn accounts(&self) -> &A {
        &self.accounts
    }

    /// Returns the game store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the options used for new games.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }
}
