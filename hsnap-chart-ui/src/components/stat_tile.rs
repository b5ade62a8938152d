//! Statistic tiles and inline statistic spans.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatTileProps {
    /// Label above the value
    pub label: String,
    /// DOM id of the value element
    pub id: String,
    pub value: String,
    /// DOM id of the caption element
    pub caption_id: String,
    pub caption: String,
}

/// A headline statistic with a caption underneath.
#[component]
pub fn StatTile(props: StatTileProps) -> Element {
    rsx! {
        div {
            class: "stat-card",
            style: "flex: 1; min-width: 180px; padding: 16px; border: 1px solid #e0e0e0; border-radius: 8px;",
            div {
                class: "stat-label",
                style: "font-size: 12px; color: #666; text-transform: uppercase;",
                "{props.label}"
            }
            div {
                id: "{props.id}",
                class: "stat-value",
                style: "font-size: 28px; font-weight: bold;",
                "{props.value}"
            }
            div {
                id: "{props.caption_id}",
                class: "stat-date",
                style: "font-size: 12px; color: #888;",
                "{props.caption}"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct InlineStatProps {
    /// DOM id of the span
    pub id: String,
    pub value: String,
}

/// A statistic bound into running text.
#[component]
pub fn InlineStat(props: InlineStatProps) -> Element {
    rsx! {
        strong {
            id: "{props.id}",
            "{props.value}"
        }
    }
}
