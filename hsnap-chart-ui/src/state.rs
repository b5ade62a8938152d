//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use hsnap_view::page::{PageState, Tab};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loading until the four documents resolve, then ready or failed
    pub page: Signal<PageState>,
    /// Tab whose panel is visible
    pub active_tab: Signal<Tab>,
}

impl AppState {
    /// Create a new AppState in the loading state on the first tab.
    pub fn new() -> Self {
        Self {
            page: Signal::new(PageState::Loading),
            active_tab: Signal::new(Tab::default()),
        }
    }
}
