//! County detail cards.

use dioxus::prelude::*;
use hsnap_view::county::CountyCard;

#[derive(Props, Clone, PartialEq)]
pub struct CountyCardsProps {
    pub cards: Vec<CountyCard>,
}

/// The `county-details` grid, one card per county in input order.
#[component]
pub fn CountyCards(props: CountyCardsProps) -> Element {
    rsx! {
        div {
            id: "county-details",
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px;",
            for card in props.cards.iter() {
                div {
                    key: "{card.title}",
                    class: "county-card",
                    style: "padding: 12px; border: 1px solid #e0e0e0; border-radius: 8px;",
                    h4 {
                        style: "margin: 0 0 8px 0;",
                        "{card.title}"
                    }
                    for metric in card.metrics.iter() {
                        div {
                            class: "county-stat",
                            style: "display: flex; justify-content: space-between; font-size: 13px;",
                            span { class: "county-stat-label", "{metric.label}" }
                            span { class: "county-stat-value", "{metric.value}" }
                        }
                    }
                }
            }
        }
    }
}
