//! Board snapshot persistence over a key-value collaborator.
//!
//! # Responsibility
//! - Serialize/restore the board under a fixed key in an external
//!   synchronous get/set string store.
//! - Persist the theme preference under its own key; the two writes
//!   are coupled at the save call site but independent in storage.
//!
//! # Invariants
//! - `load` fails soft: a missing or unparsable snapshot yields the
//!   default board, never an error.
//! - A failed save surfaces an error without touching the in-memory
//!   board.

use crate::model::board::Board;
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key for the serialized board.
pub const BOARD_STATE_KEY: &str = "boardState";
/// Storage key for the theme preference ("true"/"false").
pub const DARK_MODE_KEY: &str = "darkMode";

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Snapshot serialization failure (save path only; load recovers).
#[derive(Debug)]
pub enum SnapshotError {
    Serialization(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialization(err) => write!(f, "snapshot serialization failed: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Synchronous string key-value store the persistence collaborator
/// provides. Mirrors a browser localStorage surface: reads may miss,
/// writes replace.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store used by tests and embedders without real storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Theme preference persisted next to the board snapshot.
///
/// Lives outside `Board` on purpose: it belongs to the presentation
/// collaborator, the core only round-trips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    /// Default for new users with no saved preference.
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Storage encoding: `"true"` means dark.
    pub fn as_storage_str(self) -> &'static str {
        match self {
            Self::Dark => "true",
            Self::Light => "false",
        }
    }

    /// Decodes a stored value; anything but `"true"` is light.
    pub fn from_storage_str(value: Option<&str>) -> Self {
        match value {
            Some("true") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Snapshot facade over a key-value store implementation.
pub struct SnapshotStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    /// Creates a snapshot store over the provided backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consumes the facade and returns the backend.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Persists the board and the theme preference.
    ///
    /// Serialization happens before any write, so a failure leaves
    /// both storage keys and the in-memory board untouched.
    ///
    /// # Errors
    /// `SnapshotError::Serialization` when the board cannot be encoded.
    pub fn save(&mut self, board: &Board, theme: ThemePreference) -> SnapshotResult<()> {
        let payload = serde_json::to_string(board)?;
        self.store.set(BOARD_STATE_KEY, &payload);
        self.store.set(DARK_MODE_KEY, theme.as_storage_str());
        info!(
            "event=snapshot_saved module=snapshot status=ok bytes={} theme={}",
            payload.len(),
            theme.as_storage_str()
        );
        Ok(())
    }

    /// Restores the board, falling back to the default empty board.
    ///
    /// Never returns an error: an absent key starts a fresh session
    /// and a corrupt payload is logged and discarded.
    pub fn load(&self) -> Board {
        let Some(payload) = self.store.get(BOARD_STATE_KEY) else {
            info!("event=snapshot_missing module=snapshot status=ok fallback=default_board");
            return Board::default();
        };

        match serde_json::from_str::<Board>(&payload) {
            Ok(board) => board,
            Err(err) => {
                warn!(
                    "event=snapshot_corrupt module=snapshot status=recovered \
                     fallback=default_board error={err}"
                );
                Board::default()
            }
        }
    }

    /// Restores the theme preference; defaults to light.
    pub fn load_theme(&self) -> ThemePreference {
        ThemePreference::from_storage_str(self.store.get(DARK_MODE_KEY).as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::ThemePreference;

    #[test]
    fn theme_encoding_matches_storage_contract() {
        assert_eq!(ThemePreference::Dark.as_storage_str(), "true");
        assert_eq!(ThemePreference::Light.as_storage_str(), "false");
        assert_eq!(
            ThemePreference::from_storage_str(Some("true")),
            ThemePreference::Dark
        );
        // Unknown or missing values never turn the lights off.
        assert_eq!(
            ThemePreference::from_storage_str(Some("yes")),
            ThemePreference::Light
        );
        assert_eq!(ThemePreference::from_storage_str(None), ThemePreference::Light);
    }

    #[test]
    fn toggled_flips_between_modes() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    }
}
