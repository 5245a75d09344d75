//! Poison recovery extension trait for `std::sync::RwLock`
//!
//! Stores keep their cached map behind an `RwLock`. A panicking listener
//! must not make the whole store unusable, so guards are recovered from
//! poisoned locks instead of propagated.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Extension trait for RwLock with poison recovery
pub(crate) trait RwLockExt<T> {
    /// Acquire a read lock, recovering from poison errors
    fn read_recovered(&self) -> RwLockReadGuard<'_, T>;

    /// Acquire a write lock, recovering from poison errors
    fn write_recovered(&self) -> RwLockWriteGuard<'_, T>;
}

impl<T> RwLockExt<T> for RwLock<T> {
    fn read_recovered(&self) -> RwLockReadGuard<'_, T> {
        match self.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("RwLock was poisoned (read), recovering");
                poisoned.into_inner()
            }
        }
    }

    fn write_recovered(&self) -> RwLockWriteGuard<'_, T> {
        match self.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("RwLock was poisoned (write), recovering");
                poisoned.into_inner()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_recovers_after_panicking_writer() {
        let lock = Arc::new(RwLock::new(1));
        let clone = Arc::clone(&lock);

        let _ = thread::spawn(move || {
            let _guard = clone.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(lock.is_poisoned());
        *lock.write_recovered() += 1;
        assert_eq!(*lock.read_recovered(), 2);
    }
}
