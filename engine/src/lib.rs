//! Far Horizons Engine - Rust Core
//!
//! Deterministic turn engine for a play-by-mail style simulation server.
//!
//! # Architecture
//!
//! - **rng**: Deterministic random number generation (keyed, per-scope)
//! - **world**: Entity model and world state views
//! - **orders**: Order execution context and traits
//! - **effects**: Write-set buffers and merge semantics
//! - **schedule**: Dependency batching for order execution
//! - **store**: Game data persistence
//! - **config**: Species configuration
//! - **engine**: Engine coordinator
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic: generators are re-derived from a
//!    master key plus stable scope keys, never shared, never persisted
//! 2. No module-level mutable generator state anywhere
//! 3. Golden fixtures freeze literal RNG output sequences; the arithmetic
//!    is bit-exact across reimplementations

pub mod config;
pub mod effects;
pub mod engine;
pub mod orders;
pub mod rng;
pub mod schedule;
pub mod store;
pub mod world;

// Re-exports for convenience
pub use config::{load_species, ConfigError, Experimental, SpeciesConfig};
pub use effects::{Effect, EffectBuffer};
pub use engine::Engine;
pub use orders::{Context, Order, OrderError, Phase};
pub use rng::{AlgorithmM, RngFactory, ScopedRng};
pub use schedule::{Batch, Planner};
pub use store::{
    GameRecord, JsonStore, OrderRecord, OrderStatus, Store, StoreError, TurnRecord,
};
pub use world::{Entity, EntityId, EntityKind, Mutable, Snapshot, World};
