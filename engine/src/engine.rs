//! Engine coordinator
//!
//! Owns the persistence backend and the RNG factory. Order planning and
//! execution wiring land here as they are built out.

use crate::rng::{RngFactory, ScopedRng};
use crate::store::Store;

/// Coordinates game execution.
pub struct Engine<S: Store> {
    store: S,
    rng: RngFactory,
}

impl<S: Store> Engine<S> {
    /// Create a new engine instance.
    pub fn new(store: S, rng: RngFactory) -> Self {
        Self { store, rng }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Derive the RNG for one unit of work.
    ///
    /// Callers pass the stable identifiers of the unit, e.g.
    /// `["game1", "turn:3", "combat", "FLEET:12"]`; the same tuple always
    /// yields the same draw sequence.
    pub fn rng_for(&self, keys: &[&str]) -> ScopedRng {
        self.rng.for_keys(keys)
    }
}
