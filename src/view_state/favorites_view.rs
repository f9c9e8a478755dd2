//! View model for the "favorites only" view.
//!
//! Reads the favorites store directly; the remote directory is never
//! involved. This view has no concept of "not yet favorited", so its only
//! mutation is `remove` — using toggle here could re-add an entry that was
//! removed under the view's feet.

use tracing::debug;

use crate::error::StoreError;
use crate::models::User;
use crate::store::FavoritesStore;
use crate::view_state::{ActivationToken, LoadPhase};

/// Message the presentation layer shows when no favorites exist.
pub const NO_FAVORITES_MESSAGE: &str = "No favorites added yet.";

/// Drives the view showing only favorited users.
pub struct FavoritesViewModel {
    store: FavoritesStore,
    phase: LoadPhase,
    /// Favorites from the most recently applied activation or mutation
    favorites: Vec<User>,
    generation: u64,
    active: bool,
}

impl FavoritesViewModel {
    pub fn new(store: FavoritesStore) -> Self {
        Self {
            store,
            phase: LoadPhase::Loading,
            favorites: Vec::new(),
            generation: 0,
            active: false,
        }
    }

    /// Run one full activation: enter `Loading`, load the favorites, apply.
    pub async fn activate(&mut self) {
        let token = self.begin_activation();
        let favorites = self.store.load().await;
        self.apply_loaded(token, favorites);
    }

    /// Mark the view active and enter `Loading` for a new activation.
    pub fn begin_activation(&mut self) -> ActivationToken {
        self.generation += 1;
        self.active = true;
        self.phase = LoadPhase::Loading;
        ActivationToken(self.generation)
    }

    /// Mark the view inactive. Resolutions still in flight for it will be
    /// discarded when they arrive.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Apply the settled favorites of an activation.
    ///
    /// Returns `false` (leaving all state untouched) when the token has
    /// been superseded by a newer activation or the view was deactivated.
    pub fn apply_loaded(&mut self, token: ActivationToken, favorites: Vec<User>) -> bool {
        if !self.active || token.0 != self.generation {
            debug!(
                "discarding stale favorites resolution for activation {}",
                token.0
            );
            return false;
        }

        self.favorites = favorites;
        self.phase = LoadPhase::Loaded;
        true
    }

    /// Remove one user from the favorites and re-derive the rows.
    ///
    /// Absent ids are a no-op. On a failed write the store has rolled back
    /// and the rows are unchanged. Returns whether an entry was removed.
    pub async fn remove(&mut self, id: i64) -> Result<bool, StoreError> {
        let removed = self.store.remove(id).await?;
        self.favorites = self.store.entries().to_vec();
        Ok(removed)
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Display rows for the presentation layer, in insertion order.
    pub fn rows(&self) -> &[User] {
        &self.favorites
    }

    /// Whether the view should render [`NO_FAVORITES_MESSAGE`].
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}
