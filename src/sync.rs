use alloc::sync::{Arc, Weak};
use core::hash::Hash;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;

/// One lock per key, created on first use.
///
/// Holding a key's lock serializes work on that key only; other keys proceed
/// in parallel. The map keeps weak handles, so a key's entry goes away once
/// nobody holds its lock and is pruned on the next insert.
pub struct KeyedLocks<K> {
    locks: Mutex<HashMap<K, Weak<Mutex<()>>>>,
}

impl<K: Eq + Hash + Copy> KeyedLocks<K> {
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the lock for `key`. Lock it to enter the key's critical section.
    pub fn get(&self, key: K) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock();
        if let Some(lock) = locks.get(&key).and_then(Weak::upgrade) {
            return lock;
        }

        locks.retain(|_, lock| lock.strong_count() > 0);
        let lock = Arc::new(Mutex::new(()));
        locks.insert(key, Arc::downgrade(&lock));
        lock
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callers_share_a_lock_until_it_is_dropped() {
        let locks = KeyedLocks::new();
        let first = locks.get(1_u64);
        let again = locks.get(1);
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(locks.len(), 1);

        drop((first, again));
        let _other = locks.get(2);
        assert_eq!(locks.len(), 1);
    }

    #[test]
    fn unused_keys_do_not_accumulate() {
        let locks = KeyedLocks::new();
        for key in 0..100_u64 {
            let lock = locks.get(key);
            let _guard = lock.lock();
        }
        assert_eq!(locks.len(), 1);
    }
}
