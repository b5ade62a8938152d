//! Reusable Dioxus RSX components for the SNAP dashboard.

mod chart_container;
mod chart_header;
mod county_cards;
mod error_display;
mod loading_spinner;
mod stat_tile;
mod tab_bar;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use county_cards::CountyCards;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use stat_tile::{InlineStat, StatTile};
pub use tab_bar::TabBar;
