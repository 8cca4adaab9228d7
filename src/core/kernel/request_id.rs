use rand::Rng;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of per-call request identifiers.
///
/// Mutating operations stamp a fresh id on every invocation; the service uses
/// it for idempotency and tracing. Implementations must be safe under
/// concurrent invocation and must never hand the same id to two concurrent
/// callers. Uniqueness is the contract; monotonicity is not.
pub trait RequestIdProvider: Send + Sync {
    fn next_id(&self) -> i64;
}

/// Default provider: an atomic counter seeded from a random base.
///
/// The random seed keeps ids from colliding across process restarts; the
/// counter keeps them distinct within one.
#[derive(Debug)]
pub struct SequentialRequestId {
    next: AtomicI64,
}

impl SequentialRequestId {
    pub fn new() -> Self {
        // Seed well below i64::MAX so the counter cannot overflow in practice.
        let seed = rand::thread_rng().gen_range(0..i64::MAX / 2);
        Self {
            next: AtomicI64::new(seed),
        }
    }
}

impl Default for SequentialRequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestIdProvider for SequentialRequestId {
    fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
