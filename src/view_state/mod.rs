//! View models for the two roster views.
//!
//! The presentation layer is a thin collaborator: it raises activation
//! events into a view model, renders the display records the view model
//! derives, and invokes `toggle`/`remove` on user interaction. All state
//! lives here, owned per view instance; nothing in this module knows about
//! any rendering framework.
//!
//! ## Activation
//!
//! Every activation moves the view through `Loading -> Loaded`. Rows loaded
//! by a previous activation stay readable while the next one is in flight,
//! so the collaborator can keep them on screen behind its loading
//! indicator; new data is only exposed once every load for the activation
//! has settled. Each activation carries a generation token, and a
//! resolution whose token has been superseded (or that lands after
//! `deactivate`) is discarded instead of applied.
//!
//! ## Components
//!
//! - [`ListViewModel`]: all fetched users, each flagged with its favorite
//!   status from the store snapshot of the same activation
//! - [`FavoritesViewModel`]: the favorited subset only, with removal

mod favorites_view;
mod list_view;

pub use favorites_view::{FavoritesViewModel, NO_FAVORITES_MESSAGE};
pub use list_view::ListViewModel;

/// Loading phase of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// An activation is in flight; displayed rows (if any) are stale
    #[default]
    Loading,
    /// Every load of the latest applied activation has settled
    Loaded,
}

/// Token identifying one activation of a view.
///
/// Issued by `begin_activation`; `apply_loaded` only commits results whose
/// token matches the view's current generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationToken(pub(crate) u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_phase_defaults_to_loading() {
        assert_eq!(LoadPhase::default(), LoadPhase::Loading);
    }
}
