//! Tab buttons switching the visible panel.

use crate::state::AppState;
use dioxus::prelude::*;
use hsnap_view::page::Tab;

/// One button per tab. Clicking a button makes its tab active.
#[component]
pub fn TabBar() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();

    rsx! {
        nav {
            class: "tabs",
            style: "display: flex; gap: 4px; margin: 12px 0; border-bottom: 1px solid #e0e0e0;",
            for tab in Tab::ALL {
                button {
                    key: "{tab.panel_id()}",
                    class: if tab == active { "tab-button active" } else { "tab-button" },
                    "data-tab": tab.panel_id(),
                    style: if tab == active {
                        "padding: 8px 16px; border: none; border-bottom: 2px solid #2563eb; background: none; font-weight: bold; cursor: pointer;"
                    } else {
                        "padding: 8px 16px; border: none; border-bottom: 2px solid transparent; background: none; cursor: pointer;"
                    },
                    onclick: move |_| state.active_tab.set(tab),
                    "{tab.title()}"
                }
            }
        }
    }
}
