//! World state and entity models
//!
//! Entities are a closed set of kinds with exhaustive matching — no untyped
//! escape hatches. Identifiers are stable strings like `"SYS:SOL"` or
//! `"SHIP:1234"`, which also serve as RNG scoping keys and store paths.
//!
//! The in-memory [`World`] keeps entities in a `BTreeMap` so iteration
//! order is stable; anything that walks the world during turn execution
//! stays deterministic for free.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable identifier for an entity, e.g. `"SYS:SOL"`, `"FLEET:1234"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Entity kind discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    System,
    Planet,
    Species,
    Ship,
}

/// A world entity.
///
/// Closed set of kinds; every consumer matches exhaustively, so adding a
/// kind is a compile-visible change everywhere it matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    /// A star system at fixed galactic coordinates.
    System {
        id: EntityId,
        name: String,
        x: i32,
        y: i32,
        z: i32,
    },

    /// A planet in some system's orbit.
    Planet {
        id: EntityId,
        system: EntityId,
        orbit: u8,
        name: String,
    },

    /// A player species.
    Species {
        id: EntityId,
        name: String,
        homeworld: EntityId,
    },

    /// A ship owned by a species.
    Ship {
        id: EntityId,
        owner: EntityId,
        location: EntityId,
        class: String,
    },
}

impl Entity {
    pub fn id(&self) -> &EntityId {
        match self {
            Entity::System { id, .. } => id,
            Entity::Planet { id, .. } => id,
            Entity::Species { id, .. } => id,
            Entity::Ship { id, .. } => id,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::System { .. } => EntityKind::System,
            Entity::Planet { .. } => EntityKind::Planet,
            Entity::Species { .. } => EntityKind::Species,
            Entity::Ship { .. } => EntityKind::Ship,
        }
    }
}

/// Read-only access to world state.
pub trait Snapshot {
    /// Look up an entity by id.
    fn entity(&self, id: &EntityId) -> Option<&Entity>;

    /// All entity ids, in stable (sorted) order.
    fn entity_ids(&self) -> Vec<EntityId>;
}

/// Write access to world state. Used by the commit stage.
pub trait Mutable: Snapshot {
    fn upsert(&mut self, entity: Entity);
    fn delete(&mut self, id: &EntityId);
}

/// In-memory world state.
///
/// # Example
/// ```
/// use fh_engine::{Entity, EntityId, Mutable, Snapshot, World};
///
/// let mut world = World::new();
/// world.upsert(Entity::System {
///     id: EntityId::new("SYS:SOL"),
///     name: "Sol".to_string(),
///     x: 0,
///     y: 0,
///     z: 0,
/// });
/// assert!(world.entity(&EntityId::new("SYS:SOL")).is_some());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    entities: BTreeMap<EntityId, Entity>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Snapshot for World {
    fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    fn entity_ids(&self) -> Vec<EntityId> {
        self.entities.keys().cloned().collect()
    }
}

impl Mutable for World {
    fn upsert(&mut self, entity: Entity) {
        self.entities.insert(entity.id().clone(), entity);
    }

    fn delete(&mut self, id: &EntityId) {
        self.entities.remove(id);
    }
}
