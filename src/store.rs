// SQLite persistence for the player roster.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::model::{DisplayMode, Player};

/// Fixed key under which the whole roster is stored. The store is
/// key-value: one JSON blob for the full player list, no per-player rows.
const ROSTER_KEY: &str = "roster";

/// Key under which the last selected display mode is stored.
const DISPLAY_MODE_KEY: &str = "display_mode";

/// SQLite-backed key-value persistence for the roster and display settings.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Open (or create) a SQLite database at `path` and ensure the schema
    /// exists. Pass `":memory:"` for an ephemeral in-memory database
    /// (useful for tests).
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open store at {path}"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )
        .context("failed to set store pragmas")?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS app_state (
                key        TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            );",
        )
        .context("failed to create store schema")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open the store at its default platform location
    /// (e.g. `~/.local/share/statline/statline.db` on Linux).
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "statline")
            .context("could not resolve a data directory for the store")?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir).with_context(|| {
            format!("failed to create data directory {}", data_dir.display())
        })?;
        let path = data_dir.join("statline.db");
        Self::open(
            path.to_str()
                .context("data directory path is not valid UTF-8")?,
        )
    }

    /// Open the store at an explicit path, creating parent directories.
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create store directory {}", parent.display())
            })?;
        }
        Self::open(path.to_str().context("store path is not valid UTF-8")?)
    }

    /// Acquire the database connection.
    ///
    /// Panics if the mutex is poisoned (another thread panicked while
    /// holding the lock). This should never happen in normal operation.
    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("store mutex poisoned")
    }

    /// Persist an arbitrary JSON value under `key`. Uses INSERT OR REPLACE
    /// so repeated saves overwrite the previous value.
    fn save_value(&self, key: &str, value: &serde_json::Value) -> Result<()> {
        let conn = self.conn();
        let json_str =
            serde_json::to_string(value).context("failed to serialize state value")?;
        conn.execute(
            "INSERT OR REPLACE INTO app_state (key, value) VALUES (?1, ?2)",
            params![key, json_str],
        )
        .context("failed to save state")?;
        Ok(())
    }

    /// Load a previously saved JSON value by `key`. Returns `None` if the
    /// key does not exist.
    fn load_value(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT value FROM app_state WHERE key = ?1")
            .context("failed to prepare load query")?;

        let mut rows = stmt
            .query_map(params![key], |row| {
                let json_str: String = row.get(0)?;
                Ok(json_str)
            })
            .context("failed to query app state")?;

        match rows.next() {
            Some(row_result) => {
                let json_str = row_result.context("failed to read state row")?;
                let value: serde_json::Value = serde_json::from_str(&json_str)
                    .context("failed to deserialize state value")?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Save the full roster under the fixed roster key. The raw per-player
    /// stats are what gets persisted here; normalized output is derived
    /// state and never written back.
    pub fn save_roster(&self, players: &[Player]) -> Result<()> {
        let value =
            serde_json::to_value(players).context("failed to serialize roster")?;
        self.save_value(ROSTER_KEY, &value)
    }

    /// Load the persisted roster. Returns `None` when nothing has been
    /// saved yet (first run).
    pub fn load_roster(&self) -> Result<Option<Vec<Player>>> {
        match self.load_value(ROSTER_KEY)? {
            Some(value) => {
                let players: Vec<Player> = serde_json::from_value(value)
                    .context("failed to deserialize roster")?;
                Ok(Some(players))
            }
            None => Ok(None),
        }
    }

    /// Persist the selected display mode so it survives restarts.
    pub fn save_display_mode(&self, mode: DisplayMode) -> Result<()> {
        self.save_value(
            DISPLAY_MODE_KEY,
            &serde_json::Value::String(mode.as_str().to_string()),
        )
    }

    /// Load the persisted display mode. `None` when never saved or when the
    /// stored value is unrecognized.
    pub fn load_display_mode(&self) -> Result<Option<DisplayMode>> {
        let value = self.load_value(DISPLAY_MODE_KEY)?;
        Ok(value
            .and_then(|v| v.as_str().map(str::to_string))
            .and_then(|s| DisplayMode::parse(&s)))
    }

    /// Delete all persisted state, resetting to a clean slate.
    pub fn clear(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute("DELETE FROM app_state", [])
            .context("failed to clear app state")?;
        Ok(())
    }
}
