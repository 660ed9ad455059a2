//! Context-scoped session cache.
//!
//! DESIGN
//! ======
//! One cache exists per execution context: a fresh one per incoming request
//! on the serving side, one per page load on the display side. The host
//! passes it explicitly (request extension, Leptos context) instead of
//! reaching for a global.
//!
//! Every verification takes a [`Ticket`] before suspending. Starting a newer
//! verification or clearing the cache bumps the generation, so a result that
//! arrives late carries a stale ticket and is dropped by [`SessionCache::settle`].
//! The lock is never held across an await.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::session::Session;

/// Proof that a verification started at a given cache generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
struct Slot {
    session: Option<Session>,
    generation: u64,
}

/// Single-slot holder for `Session | absent`. Clones share the slot.
#[derive(Clone, Debug, Default)]
pub struct SessionCache {
    slot: Arc<Mutex<Slot>>,
}

impl SessionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-populated with a session verified elsewhere in the same
    /// context (the serving side's result handed to the display side).
    #[must_use]
    pub fn seeded(session: Option<Session>) -> Self {
        Self { slot: Arc::new(Mutex::new(Slot { session, generation: 0 })) }
    }

    #[must_use]
    pub fn get(&self) -> Option<Session> {
        self.lock().session.clone()
    }

    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.lock().session.is_some()
    }

    /// Start a verification. Any ticket issued earlier becomes stale.
    pub fn begin(&self) -> Ticket {
        let mut slot = self.lock();
        slot.generation += 1;
        Ticket(slot.generation)
    }

    /// Apply a verification result if `ticket` is still current.
    ///
    /// Returns `false`, leaving the slot untouched, when a newer verification
    /// started or the cache was cleared after `ticket` was issued.
    pub fn settle(&self, ticket: Ticket, session: Option<Session>) -> bool {
        let mut slot = self.lock();
        if slot.generation != ticket.0 {
            return false;
        }
        slot.session = session;
        true
    }

    /// Drop the cached session and invalidate in-flight verifications.
    pub fn clear(&self) {
        let mut slot = self.lock();
        slot.generation += 1;
        slot.session = None;
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
