//! Write-set buffers and merge semantics
//!
//! Orders do not mutate the world directly; they return effects that are
//! buffered, merged, and applied in one commit step. Merging is
//! last-writer-wins per target, with targets kept in first-seen order so
//! the commit stage stays deterministic.

use std::collections::BTreeMap;

use crate::world::{Entity, EntityId, Mutable};

/// A single world mutation produced by order execution.
///
/// Effects live only for the span of one commit step; they are not
/// persisted (stores snapshot the world after the commit).
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Upsert(Entity),
    Delete(EntityId),
}

impl Effect {
    /// The entity this effect touches.
    pub fn target(&self) -> &EntityId {
        match self {
            Effect::Upsert(entity) => entity.id(),
            Effect::Delete(id) => id,
        }
    }
}

/// Collects effects from order execution.
#[derive(Debug, Default)]
pub struct EffectBuffer {
    effects: Vec<Effect>,
}

impl EffectBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Collapse conflicting effects: the last effect against a target wins,
    /// and targets keep the order they were first seen in.
    pub fn merge(&mut self) {
        let mut latest: BTreeMap<EntityId, Effect> = BTreeMap::new();
        let mut order: Vec<EntityId> = Vec::new();

        for effect in self.effects.drain(..) {
            let target = effect.target().clone();
            if !latest.contains_key(&target) {
                order.push(target.clone());
            }
            latest.insert(target, effect);
        }

        self.effects = order
            .into_iter()
            .filter_map(|target| latest.remove(&target))
            .collect();
    }

    /// Apply all buffered effects to a mutable world view, consuming the
    /// buffer.
    pub fn apply(self, world: &mut dyn Mutable) {
        for effect in self.effects {
            match effect {
                Effect::Upsert(entity) => world.upsert(entity),
                Effect::Delete(id) => world.delete(&id),
            }
        }
    }
}
