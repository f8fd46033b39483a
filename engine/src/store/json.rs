//! JSON file store
//!
//! Data is stored in a directory structure:
//!
//! ```text
//! base_dir/
//!   games/
//!     {game_id}/
//!       game.json
//!       turns/
//!         {num}-{phase}.json
//!       snapshots/
//!         {num}.json
//!       orders/
//!         {num}/{actor}.json
//!       reports/
//!         {num}/{actor}/{mime}
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::orders::Phase;
use crate::world::Entity;

use super::{GameRecord, OrderRecord, Store, StoreError, TurnRecord, SCHEMA_VERSION};

/// Store backed by JSON files under one base directory.
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at `base_dir`, creating the directory if
    /// needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn game_dir(&self, game_id: &str) -> PathBuf {
        self.base_dir.join("games").join(game_id)
    }

    fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_vec_pretty(value)?;
        fs::write(path, body)?;
        tracing::debug!(path = %path.display(), "wrote store file");
        Ok(())
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<T, StoreError> {
        let body = fs::read(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotExist
            } else {
                StoreError::Io(e)
            }
        })?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl Store for JsonStore {
    fn schema_version(&self) -> Result<String, StoreError> {
        Ok(SCHEMA_VERSION.to_string())
    }

    fn create_game(&self, id: &str, name: &str) -> Result<(), StoreError> {
        let path = self.game_dir(id).join("game.json");
        if path.exists() {
            return Err(StoreError::Exists);
        }
        let game = GameRecord {
            id: id.to_string(),
            name: name.to_string(),
            created_at: now_epoch_secs(),
        };
        self.write_json(&path, &game)
    }

    fn get_game(&self, id: &str) -> Result<GameRecord, StoreError> {
        self.read_json(&self.game_dir(id).join("game.json"))
    }

    fn create_turn(&self, game_id: &str, num: u32, phase: Phase) -> Result<(), StoreError> {
        let turn = TurnRecord {
            game_id: game_id.to_string(),
            num,
            phase,
            started_at: now_epoch_secs(),
            ended_at: None,
        };
        let path = self
            .game_dir(game_id)
            .join("turns")
            .join(format!("{}-{}.json", num, phase.as_str()));
        self.write_json(&path, &turn)
    }

    fn current_turn(&self, _game_id: &str) -> Result<TurnRecord, StoreError> {
        Err(StoreError::NotImplemented)
    }

    fn save_snapshot(
        &self,
        game_id: &str,
        turn: u32,
        entities: &[Entity],
    ) -> Result<(), StoreError> {
        let path = self
            .game_dir(game_id)
            .join("snapshots")
            .join(format!("{}.json", turn));
        self.write_json(&path, &entities)
    }

    fn load_snapshot(&self, game_id: &str, turn: u32) -> Result<Vec<Entity>, StoreError> {
        let path = self
            .game_dir(game_id)
            .join("snapshots")
            .join(format!("{}.json", turn));
        self.read_json(&path)
    }

    fn save_orders(
        &self,
        game_id: &str,
        turn: u32,
        actor: &str,
        orders: &[OrderRecord],
    ) -> Result<(), StoreError> {
        let path = self
            .game_dir(game_id)
            .join("orders")
            .join(turn.to_string())
            .join(format!("{}.json", actor));
        self.write_json(&path, &orders)
    }

    fn get_orders(
        &self,
        game_id: &str,
        turn: u32,
        actor: &str,
    ) -> Result<Vec<OrderRecord>, StoreError> {
        let path = self
            .game_dir(game_id)
            .join("orders")
            .join(turn.to_string())
            .join(format!("{}.json", actor));
        self.read_json(&path)
    }

    fn save_report(
        &self,
        game_id: &str,
        turn: u32,
        actor: &str,
        mime: &str,
        body: &[u8],
    ) -> Result<(), StoreError> {
        let dir = self
            .game_dir(game_id)
            .join("reports")
            .join(turn.to_string())
            .join(actor);
        fs::create_dir_all(&dir)?;
        let path = dir.join(mime);
        fs::write(&path, body)?;
        tracing::debug!(path = %path.display(), "wrote report");
        Ok(())
    }

    fn get_report(
        &self,
        game_id: &str,
        turn: u32,
        actor: &str,
        mime: &str,
    ) -> Result<Vec<u8>, StoreError> {
        let path = self
            .game_dir(game_id)
            .join("reports")
            .join(turn.to_string())
            .join(actor)
            .join(mime);
        fs::read(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotExist
            } else {
                StoreError::Io(e)
            }
        })
    }
}
