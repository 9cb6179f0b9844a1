//! The persistence collaborator.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use alloc::vec::Vec;

use crate::error::StoreError;
use crate::game::{Game, GameId};
use crate::sync::Mutex;

/// Storage for game values.
///
/// The engine never calls this itself; [`Table`](super::Table) finds a game
/// before a play and saves the value the play returned.
pub trait GameStore {
    /// Looks up a game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id, or
    /// [`StoreError::Storage`] if the backend fails.
    fn find(&self, id: GameId) -> Result<Game, StoreError>;

    /// Saves a game, replacing any previous value with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the backend fails.
    fn save(&self, game: &Game) -> Result<(), StoreError>;

    /// Deletes a game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id, or
    /// [`StoreError::Storage`] if the backend fails.
    fn delete(&self, id: GameId) -> Result<(), StoreError>;

    /// Lists the ids of every stored game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the backend fails.
    fn ids(&self) -> Result<Vec<GameId>, StoreError>;
}

/// Games kept in memory.
pub struct MemoryStore {
    games: Mutex<HashMap<GameId, Game>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            games: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the number of stored games.
    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore for MemoryStore {
    fn find(&self, id: GameId) -> Result<Game, StoreError> {
        self.games
            .lock()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn save(&self, game: &Game) -> Result<(), StoreError> {
        self.games.lock().insert(game.id(), game.clone());
        Ok(())
    }

    fn delete(&self, id: GameId) -> Result<(), StoreError> {
        self.games
            .lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    fn ids(&self) -> Result<Vec<GameId>, StoreError> {
        Ok(self.games.lock().keys().copied().collect())
    }
}
