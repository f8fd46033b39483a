//! Game data persistence
//!
//! The [`Store`] trait is the seam between the engine and its backends;
//! implementations can be JSON files, SQLite, etc. Only the JSON file
//! backend ships today.
//!
//! Nothing RNG-related is ever persisted: generator state is re-derived
//! from stable keys, so a re-run of a stored turn reproduces every draw.

mod json;

pub use json::JsonStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::orders::Phase;
use crate::world::Entity;

/// Current store schema version.
pub const SCHEMA_VERSION: &str = "v0.1.0_initial";

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("does not exist")]
    NotExist,

    #[error("already exists")]
    Exists,

    #[error("not implemented")]
    NotImplemented,

    #[error("schema version is too new")]
    SchemaTooNew,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// A game instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub name: String,
    /// Seconds since the Unix epoch.
    pub created_at: u64,
}

/// A game turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub game_id: String,
    pub num: u32,
    pub phase: Phase,
    /// Seconds since the Unix epoch.
    pub started_at: u64,
    pub ended_at: Option<u64>,
}

/// Processing status of a stored order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A player order as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub seq: u32,
    /// Raw order text as submitted.
    pub raw: String,
    /// Normalized form (JSON).
    pub normalized: String,
    pub status: OrderStatus,
    pub error: Option<String>,
}

/// Interface for game data persistence.
pub trait Store {
    /// Schema management.
    fn schema_version(&self) -> Result<String, StoreError>;

    /// Game management.
    fn create_game(&self, id: &str, name: &str) -> Result<(), StoreError>;
    fn get_game(&self, id: &str) -> Result<GameRecord, StoreError>;

    /// Turn management.
    fn create_turn(&self, game_id: &str, num: u32, phase: Phase) -> Result<(), StoreError>;
    fn current_turn(&self, game_id: &str) -> Result<TurnRecord, StoreError>;

    /// World snapshots.
    fn save_snapshot(
        &self,
        game_id: &str,
        turn: u32,
        entities: &[Entity],
    ) -> Result<(), StoreError>;
    fn load_snapshot(&self, game_id: &str, turn: u32) -> Result<Vec<Entity>, StoreError>;

    /// Orders.
    fn save_orders(
        &self,
        game_id: &str,
        turn: u32,
        actor: &str,
        orders: &[OrderRecord],
    ) -> Result<(), StoreError>;
    fn get_orders(&self, game_id: &str, turn: u32, actor: &str)
        -> Result<Vec<OrderRecord>, StoreError>;

    /// Reports.
    fn save_report(
        &self,
        game_id: &str,
        turn: u32,
        actor: &str,
        mime: &str,
        body: &[u8],
    ) -> Result<(), StoreError>;
    fn get_report(
        &self,
        game_id: &str,
        turn: u32,
        actor: &str,
        mime: &str,
    ) -> Result<Vec<u8>, StoreError>;
}
