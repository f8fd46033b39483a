//! Dependency graphs and batching
//!
//! Orders whose dependency sets do not overlap can execute within the same
//! batch; batches run in sequence. Planner implementations are future work.

use crate::orders::{Order, OrderError};
use crate::world::Snapshot;

/// A group of orders that may execute within one step.
pub struct Batch {
    pub orders: Vec<Box<dyn Order>>,
}

/// Builds execution batches from order dependencies.
pub trait Planner {
    fn plan(
        &self,
        orders: Vec<Box<dyn Order>>,
        world: &dyn Snapshot,
    ) -> Result<Vec<Batch>, OrderError>;
}
