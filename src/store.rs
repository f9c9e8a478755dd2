//! Persistent favorites store.
//!
//! The favorites are a single JSON array of user records kept under the
//! fixed entry name `favorites` (`~/.roster/favorites.json` by default).
//! The store owns an in-memory working set mirroring that file: `load`
//! refreshes it from disk, and every mutation persists the updated set
//! before committing it to memory, so a failed write leaves memory equal
//! to what is on disk.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::models::User;

/// Directory under the home directory holding roster data.
const STORE_DIR: &str = ".roster";

/// File name of the persisted favorites entry.
const FAVORITES_FILE: &str = "favorites.json";

/// Drop duplicate ids, keeping the first occurrence of each.
fn dedup_by_id(entries: Vec<User>) -> Vec<User> {
    let mut seen = HashSet::new();
    entries.into_iter().filter(|u| seen.insert(u.id)).collect()
}

/// Persisted, insertion-ordered set of favorited users.
#[derive(Debug)]
pub struct FavoritesStore {
    /// Path of the persisted favorites file
    path: PathBuf,
    /// In-memory working set, insertion-ordered
    entries: Vec<User>,
}

impl FavoritesStore {
    /// Create a store at the default location.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::with_path(home.join(STORE_DIR).join(FAVORITES_FILE)))
    }

    /// Create a store backed by an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            entries: Vec::new(),
        }
    }

    /// Path of the persisted favorites file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current working set, in insertion order.
    pub fn entries(&self) -> &[User] {
        &self.entries
    }

    /// Whether the working set holds the given id.
    pub fn contains(&self, id: i64) -> bool {
        self.entries.iter().any(|u| u.id == id)
    }

    /// Reload the working set from disk and return a copy of it.
    ///
    /// A missing file is an empty set. A file that cannot be read or decoded
    /// also degrades to an empty set, logged; the bytes on disk are left
    /// untouched so the corruption stays inspectable.
    pub async fn load(&mut self) -> Vec<User> {
        self.entries = match self.read_entries().await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("favorites load degraded to empty: {err}");
                Vec::new()
            }
        };
        self.entries.clone()
    }

    /// Overwrite the persisted set with the given entries.
    ///
    /// Callers pass the full desired set, not a delta. Duplicate ids are
    /// dropped (first occurrence wins) before writing. On write failure the
    /// working set keeps its previous value.
    pub async fn save(&mut self, entries: Vec<User>) -> Result<(), StoreError> {
        let entries = dedup_by_id(entries);
        self.persist(&entries).await?;
        self.entries = entries;
        Ok(())
    }

    /// Flip the favorite state of one user.
    ///
    /// Removes the user when its id is present, appends it to the end
    /// otherwise. Returns whether the user is favorited after the call.
    pub async fn toggle(&mut self, user: &User) -> Result<bool, StoreError> {
        let mut updated = self.entries.clone();
        let now_favorite = match updated.iter().position(|u| u.id == user.id) {
            Some(pos) => {
                updated.remove(pos);
                false
            }
            None => {
                updated.push(user.clone());
                true
            }
        };
        self.persist(&updated).await?;
        self.entries = updated;
        Ok(now_favorite)
    }

    /// Remove the entry with the given id, if present.
    ///
    /// Deletes in place without reordering the remaining entries. An absent
    /// id is a no-op that touches neither memory nor disk. Returns whether
    /// an entry was removed.
    pub async fn remove(&mut self, id: i64) -> Result<bool, StoreError> {
        let Some(pos) = self.entries.iter().position(|u| u.id == id) else {
            return Ok(false);
        };
        let mut updated = self.entries.clone();
        updated.remove(pos);
        self.persist(&updated).await?;
        self.entries = updated;
        Ok(true)
    }

    async fn read_entries(&self) -> Result<Vec<User>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|err| StoreError::Decode {
            path: self.path.clone(),
            source: err,
        })
    }

    /// Write the full set to disk, creating the parent directory if needed.
    async fn persist(&self, entries: &[User]) -> Result<(), StoreError> {
        let write_err = |source: io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
            }
        }

        let json = serde_json::to_string_pretty(entries).map_err(|err| StoreError::Write {
            path: self.path.clone(),
            source: err.into(),
        })?;
        tokio::fs::write(&self.path, json).await.map_err(write_err)
    }
}
