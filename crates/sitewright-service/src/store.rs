//! Lock helpers for the in-memory stores.
//!
//! A panic while a guard is held poisons the lock; the stores only ever hold
//! plain maps, so the data is still usable and the poison is cleared.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Acquires a read guard and recovers from poisoning.
pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => {
            lock.clear_poison();
            poisoned.into_inner()
        }
    }
}

/// Acquires a write guard and recovers from poisoning.
pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => {
            lock.clear_poison();
            poisoned.into_inner()
        }
    }
}
