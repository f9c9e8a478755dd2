//! View model for the "all users" view.
//!
//! Each activation fetches the directory page and loads the favorites
//! concurrently, then derives one row per user with its favorite flag
//! computed against the favorites snapshot from the same activation.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::directory::DirectoryClient;
use crate::error::StoreError;
use crate::models::{User, UserRow};
use crate::store::FavoritesStore;
use crate::view_state::{ActivationToken, LoadPhase};

/// Drives the view showing every fetched user.
pub struct ListViewModel {
    directory: DirectoryClient,
    store: FavoritesStore,
    phase: LoadPhase,
    /// Users from the most recently applied activation
    users: Vec<User>,
    /// Ids favorited as of the most recently applied activation or mutation
    favorite_ids: HashSet<i64>,
    generation: u64,
    active: bool,
}

impl ListViewModel {
    pub fn new(directory: DirectoryClient, store: FavoritesStore) -> Self {
        Self {
            directory,
            store,
            phase: LoadPhase::Loading,
            users: Vec::new(),
            favorite_ids: HashSet::new(),
            generation: 0,
            active: false,
        }
    }

    /// Run one full activation: enter `Loading`, fetch the page and load
    /// the favorites concurrently, then apply the merged result.
    ///
    /// A failed fetch degrades to an empty list; the store degrades a
    /// failed load internally. Either way the view reaches `Loaded`.
    pub async fn activate(&mut self) {
        let token = self.begin_activation();

        let (fetched, favorites) = tokio::join!(self.directory.fetch_users(), self.store.load());

        let users = match fetched {
            Ok(users) => users,
            Err(err) => {
                warn!("user fetch failed, showing empty list: {err}");
                Vec::new()
            }
        };

        self.apply_loaded(token, users, favorites);
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

    /// Apply the settled results of an activation.
    ///
    /// Returns `false` (leaving all state untouched) when the token has
    /// been superseded by a newer activation or the view was deactivated.
    pub fn apply_loaded(
        &mut self,
        token: ActivationToken,
        users: Vec<User>,
        favorites: Vec<User>,
    ) -> bool {
        if !self.active || token.0 != self.generation {
            debug!("discarding stale list resolution for activation {}", token.0);
            return false;
        }

        self.users = users;
        self.favorite_ids = favorites.iter().map(|u| u.id).collect();
        self.phase = LoadPhase::Loaded;
        true
    }

    /// Flip the favorite state of one displayed user.
    ///
    /// On success the rows re-derive immediately; on a failed write the
    /// store has rolled back and the rows are unchanged. Returns whether
    /// the user is favorited after the call.
    pub async fn toggle(&mut self, user: &User) -> Result<bool, StoreError> {
        let now_favorite = self.store.toggle(user).await?;
        self.favorite_ids = self.store.entries().iter().map(|u| u.id).collect();
        Ok(now_favorite)
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Display rows for the presentation layer, one per fetched user.
    pub fn rows(&self) -> Vec<UserRow<'_>> {
        self.users
            .iter()
            .map(|user| UserRow {
                user,
                is_favorite: self.favorite_ids.contains(&user.id),
            })
            .collect()
    }
}
