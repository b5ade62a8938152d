//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shown in place of the loading indicator when the data fails to load.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            id: "loading",
            style: "padding: 2rem; color: #dc2626;",
            h3 { "Error" }
            p { "{props.message}" }
        }
    }
}
