//! View binding for the SNAP dashboard.
//!
//! Everything here is a pure function of a loaded `Dataset`:
//! - `format`: the number, money and date display rules
//! - `stats`: the headline statistics
//! - `county`: one card per county record
//! - `charts`: the eight chart specifications and their Chart.js configs
//! - `render`: the chart registry behind a `ChartBackend` seam
//! - `page`: page lifecycle, tab selection and the boot sequence

pub mod charts;
pub mod county;
pub mod format;
pub mod page;
pub mod render;
pub mod stats;

use hsnap_data::Dataset;

/// Everything the page shows once data is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub stats: stats::Statistics,
    pub county_cards: Vec<county::CountyCard>,
    pub charts: Vec<charts::ChartSpec>,
}

impl DashboardView {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            stats: stats::Statistics::from_dataset(dataset),
            county_cards: county::cards(&dataset.county),
            charts: charts::all(dataset),
        }
    }
}
