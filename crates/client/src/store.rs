//! Durable persistence for slot membership sets.
//!
//! Each slot is one JSON file under the state directory holding an array of
//! product ID strings (`cart.json`, `wishlist.json`). Reads treat anything
//! unreadable or malformed as the empty set; writes replace the file
//! atomically so a concurrent read observes either the old or the new value,
//! never a torn one.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::warn;

use bramble_core::{ProductId, Slot};

use crate::error::StoreError;

/// File-backed store for the per-slot membership snapshots.
#[derive(Debug, Clone)]
pub struct SlotStore {
    dir: PathBuf,
}

impl SlotStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Load the persisted set for `slot`.
    ///
    /// Missing, unreadable, or malformed data yields the empty set; this
    /// never fails. Malformed content is logged at `warn` and otherwise
    /// treated as absent.
    #[must_use]
    pub fn load(&self, slot: Slot) -> HashSet<ProductId> {
        let path = self.slot_path(slot);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return HashSet::new(),
            Err(err) => {
                warn!(slot = %slot, error = %err, "failed to read persisted slot, treating as empty");
                return HashSet::new();
            }
        };

        match serde_json::from_str::<Vec<ProductId>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(err) => {
                warn!(slot = %slot, error = %err, "malformed persisted slot, treating as empty");
                HashSet::new()
            }
        }
    }

    /// Atomically replace the persisted set for `slot`.
    ///
    /// Serializes a sorted array (stable file contents for identical sets),
    /// writes it to a sibling temp file, and renames over the target.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization or filesystem failure. Callers in
    /// the synchronizer log and absorb these; persistence failures are never
    /// user-facing.
    pub fn save(&self, slot: Slot, set: &HashSet<ProductId>) -> Result<(), StoreError> {
        let mut ids: Vec<&ProductId> = set.iter().collect();
        ids.sort();
        let json = serde_json::to_string(&ids)?;

        let path = self.slot_path(slot);
        let tmp = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn slot_path(&self, slot: Slot) -> PathBuf {
        self.dir.join(format!("{}.json", slot.as_str()))
    }
}
