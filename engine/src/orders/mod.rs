//! Order parsing seams and execution context
//!
//! An order is one parsed player instruction. Each order executes with its
//! own [`Context`], including an RNG scoped to that order — two orders never
//! share a generator, so reordering one player's batch cannot perturb
//! another player's draws.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::effects::Effect;
use crate::rng::ScopedRng;
use crate::world::{EntityId, Mutable, Snapshot};

/// Turn phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Economic,
    Movement,
    Combat,
}

impl Phase {
    /// Stable name, used in store paths and RNG scoping keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Economic => "economic",
            Phase::Movement => "movement",
            Phase::Combat => "combat",
        }
    }
}

/// Errors from order validation and execution.
#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    #[error("order validation failed: {0}")]
    Validation(String),

    #[error("unknown entity: {0}")]
    UnknownEntity(EntityId),

    #[error("order execution is not implemented")]
    NotImplemented,
}

/// Execution context for one order.
///
/// Owns the RNG scoped to this order; draws made here cannot affect any
/// other order's sequence.
pub struct Context {
    pub game_id: String,
    pub turn: u32,
    pub phase: Phase,
    /// Player/faction issuing the order.
    pub actor: String,
    pub rng: ScopedRng,
}

/// A parsed player order.
pub trait Order {
    /// Stable key for RNG scoping. Two distinct orders must have distinct
    /// keys within a turn.
    fn key(&self) -> String;

    /// Which faction issued the order.
    fn actor(&self) -> &str;

    /// Check the order against a read-only world view.
    fn validate(&self, world: &dyn Snapshot) -> Result<(), OrderError>;

    /// Entity ids this order reads or writes, for dependency planning.
    fn dependencies(&self, world: &dyn Snapshot) -> Vec<EntityId>;

    /// Execute against a mutable world view, producing an effect.
    fn execute(&self, world: &mut dyn Mutable, ctx: &mut Context) -> Result<Effect, OrderError>;
}
