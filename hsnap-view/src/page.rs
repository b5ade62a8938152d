//! Page lifecycle and tab selection.
//!
//! The page goes from `Loading` to either `Ready` or `Failed` exactly once
//! per session. Tab selection is independent of the data and can change at
//! any time.

use crate::charts::ChartId;
use crate::render::{ChartBackend, ChartRegistry};
use crate::DashboardView;
use chrono::NaiveDate;
use hsnap_data::{DataSources, Fetcher};
use std::rc::Rc;

/// Shown in place of the loading indicator when any document fails.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load data. Please refresh the page.";

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Ready(Rc<DashboardView>),
    Failed(String),
}

impl PageState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }
}

/// The dashboard tabs, one active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Overview,
    Participation,
    Benefits,
    Covid,
    Counties,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Participation,
        Tab::Benefits,
        Tab::Covid,
        Tab::Counties,
    ];

    /// DOM id of the tab's content panel.
    pub fn panel_id(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Participation => "participation",
            Tab::Benefits => "benefits",
            Tab::Covid => "covid",
            Tab::Counties => "counties",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Participation => "Participation",
            Tab::Benefits => "Benefits",
            Tab::Covid => "COVID-19 Impact",
            Tab::Counties => "Counties",
        }
    }

    /// Charts drawn inside this tab's panel.
    pub fn charts(self) -> &'static [ChartId] {
        match self {
            Tab::Overview => &[ChartId::Overview],
            Tab::Participation => &[ChartId::Households, ChartId::Persons],
            Tab::Benefits => &[ChartId::Benefit, ChartId::Cost],
            Tab::Covid => &[ChartId::Covid],
            Tab::Counties => &[ChartId::County, ChartId::PublicAssistance],
        }
    }
}

/// Load the documents and bind them, ending in `Ready` or `Failed`.
///
/// Data-quality findings are logged but never block rendering.
pub async fn boot<F: Fetcher + ?Sized>(
    fetcher: &F,
    sources: &DataSources,
    today: NaiveDate,
) -> PageState {
    match hsnap_data::load(fetcher, sources).await {
        Ok(dataset) => {
            log::info!("Data loaded successfully");
            for finding in dataset.validate(today) {
                log::warn!("data quality: {}", finding);
            }
            PageState::Ready(Rc::new(DashboardView::from_dataset(&dataset)))
        }
        Err(e) => {
            log::error!("Error loading data: {}", e);
            PageState::Failed(LOAD_FAILURE_MESSAGE.to_string())
        }
    }
}

/// Construct the charts of a ready page. Other states construct nothing.
pub fn render_charts<B: ChartBackend + ?Sized>(
    state: &PageState,
    registry: &mut ChartRegistry,
    backend: &mut B,
) -> usize {
    match state {
        PageState::Ready(view) => registry.construct_all(&view.charts, backend),
        PageState::Loading | PageState::Failed(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingBackend;
    use hsnap_data::testing::MapFetcher;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(1999, 3, 1).unwrap()
    }

    #[tokio::test]
    async fn test_boot_ready_then_eight_charts() {
        let fetcher = MapFetcher::complete();
        let state = boot(&fetcher, &DataSources::default(), today()).await;
        let PageState::Ready(view) = &state else {
            panic!("expected ready state, got {:?}", state);
        };
        assert_eq!(view.county_cards.len(), 2);
        assert_eq!(view.stats.persons, "122,500");

        let mut registry = ChartRegistry::new();
        let mut backend = RecordingBackend::default();
        assert_eq!(render_charts(&state, &mut registry, &mut backend), 8);
        assert_eq!(backend.built, ChartId::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_any_failed_fetch_means_error_state_and_no_charts() {
        for missing in [
            "data/monthly.json",
            "data/county.json",
            "data/trends.json",
            "data/metadata.json",
        ] {
            let mut fetcher = MapFetcher::complete();
            fetcher.documents.remove(missing);
            let state = boot(&fetcher, &DataSources::default(), today()).await;
            assert_eq!(state, PageState::Failed(LOAD_FAILURE_MESSAGE.to_string()));

            let mut registry = ChartRegistry::new();
            let mut backend = RecordingBackend::default();
            assert_eq!(render_charts(&state, &mut registry, &mut backend), 0);
            assert!(backend.built.is_empty());
            assert!(registry.is_empty());
        }
    }

    #[test]
    fn test_loading_state_constructs_nothing() {
        let mut registry = ChartRegistry::new();
        let mut backend = RecordingBackend::default();
        assert_eq!(render_charts(&PageState::Loading, &mut registry, &mut backend), 0);
        assert!(PageState::Loading.is_loading());
    }

    #[test]
    fn test_every_chart_belongs_to_exactly_one_tab() {
        let mut placed: Vec<ChartId> = Tab::ALL.iter().flat_map(|t| t.charts().to_vec()).collect();
        placed.sort();
        assert_eq!(placed, ChartId::ALL.to_vec());
        assert_eq!(Tab::default(), Tab::Overview);
    }
}
