//! Hawaii SNAP Benefits Dashboard
//!
//! Data flow:
//! 1. On mount: load the Chart.js bridge, then fetch `monthly.json`,
//!    `county.json`, `trends.json` and `metadata.json` concurrently.
//! 2. If any fetch fails the loading indicator is replaced by the error
//!    message and nothing else renders.
//! 3. Otherwise statistics and county cards are bound into the page and the
//!    eight charts are constructed, once each.
//!
//! Every tab panel stays in the DOM; switching tabs only toggles visibility.

use dioxus::prelude::*;
use hsnap_chart_ui::components::{
    ChartContainer, ChartHeader, CountyCards, ErrorDisplay, InlineStat, LoadingSpinner, StatTile,
    TabBar,
};
use hsnap_chart_ui::fetch::WebFetcher;
use hsnap_chart_ui::js_bridge::{self, ChartJsBackend};
use hsnap_chart_ui::state::AppState;
use hsnap_data::DataSources;
use hsnap_view::charts::ChartId;
use hsnap_view::page::{self, PageState, Tab};
use hsnap_view::render::ChartRegistry;
use hsnap_view::DashboardView;
use std::rc::Rc;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("hsnap-root"))
        .launch(App);
}

fn chart_title(id: ChartId) -> (&'static str, &'static str) {
    match id {
        ChartId::Overview => ("SNAP Participation Over Time", "Persons and households, monthly since 1999"),
        ChartId::Households => ("Households Participating", "Monthly since 1999"),
        ChartId::Persons => ("Persons Participating", "Monthly since 1999"),
        ChartId::Benefit => ("Average Monthly Benefit per Household", "Dollars per household"),
        ChartId::Cost => ("Total Monthly Benefit Cost", "Dollars, millions"),
        ChartId::Covid => ("COVID-19 Impact", "Households and average benefit, recent months"),
        ChartId::County => ("Participation by County", "Latest snapshot"),
        ChartId::PublicAssistance => ("Public Assistance vs Non-PA", "Persons by county"),
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut registry = use_signal(ChartRegistry::new);

    // ─── Effect 1: Load the four documents once on mount ───
    use_effect(move || {
        js_bridge::init_charts();
        spawn(async move {
            let today = chrono::Utc::now().date_naive();
            let loaded = page::boot(&WebFetcher, &DataSources::default(), today).await;
            state.page.set(loaded);
        });
    });

    // ─── Effect 2: Construct charts once the page is ready ───
    // Re-runs whenever the page state changes; the registry keeps each
    // chart to a single construction.
    use_effect(move || {
        let current = state.page.read().clone();
        let mut backend = ChartJsBackend;
        let built = page::render_charts(&current, &mut registry.write(), &mut backend);
        if built > 0 {
            log::info!("[HSNAP] constructed {} charts", built);
        }
    });

    let body = match state.page.read().clone() {
        PageState::Loading => rsx! { LoadingSpinner {} },
        PageState::Failed(message) => rsx! { ErrorDisplay { message } },
        PageState::Ready(view) => rsx! { Dashboard { view } },
    };

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            header {
                h1 {
                    style: "margin: 8px 0 0 0;",
                    "Hawaii SNAP Benefits Dashboard"
                }
                p {
                    style: "margin: 4px 0; color: #666;",
                    "Supplemental Nutrition Assistance Program participation and benefits in Hawaii"
                }
            }

            TabBar {}

            {body}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DashboardProps {
    view: Rc<DashboardView>,
}

/// Headline tiles plus every tab panel.
#[component]
fn Dashboard(props: DashboardProps) -> Element {
    let state = use_context::<AppState>();
    let active = (state.active_tab)();
    let stats = &props.view.stats;

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px; margin: 12px 0;",
            StatTile {
                label: "Persons Served".to_string(),
                id: "stat-persons".to_string(),
                value: stats.persons.clone(),
                caption_id: "stat-persons-date".to_string(),
                caption: stats.persons_date.clone(),
            }
            StatTile {
                label: "Households".to_string(),
                id: "stat-households".to_string(),
                value: stats.households.clone(),
                caption_id: "stat-households-date".to_string(),
                caption: stats.households_date.clone(),
            }
            StatTile {
                label: "Avg Benefit / Household".to_string(),
                id: "stat-benefit".to_string(),
                value: stats.benefit.clone(),
                caption_id: "stat-benefit-date".to_string(),
                caption: stats.benefit_date.clone(),
            }
            StatTile {
                label: "Monthly Cost".to_string(),
                id: "stat-cost".to_string(),
                value: stats.cost.clone(),
                caption_id: "stat-cost-date".to_string(),
                caption: stats.cost_date.clone(),
            }
        }

        for tab in Tab::ALL {
            section {
                key: "{tab.panel_id()}",
                id: tab.panel_id(),
                class: if tab == active { "tab-content active" } else { "tab-content" },
                style: if tab == active { "display: block;" } else { "display: none;" },

                TabSummary { tab, view: props.view.clone() }

                for id in tab.charts().iter().copied() {
                    div {
                        key: "{id.canvas_id()}",
                        style: "margin: 16px 0;",
                        ChartHeader {
                            title: chart_title(id).0.to_string(),
                            caption: chart_title(id).1.to_string(),
                        }
                        ChartContainer { id: id.canvas_id().to_string() }
                    }
                }

                if tab == Tab::Counties {
                    CountyCards { cards: props.view.county_cards.clone() }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TabSummaryProps {
    tab: Tab,
    view: Rc<DashboardView>,
}

/// Running text with the statistics that belong to a tab.
#[component]
fn TabSummary(props: TabSummaryProps) -> Element {
    let stats = &props.view.stats;
    let text = "margin: 8px 0; line-height: 1.6;";

    match props.tab {
        Tab::Overview => rsx! {
            p {
                style: "{text}",
                "On average "
                InlineStat { id: "avg-persons".to_string(), value: stats.avg_persons.clone() }
                " people received SNAP benefits each month. Participation peaked in "
                InlineStat { id: "peak-date".to_string(), value: stats.peak_date.clone() }
                " at "
                InlineStat { id: "peak-persons".to_string(), value: stats.peak_persons.clone() }
                " persons."
            }
        },
        Tab::Participation => rsx! {
            p {
                style: "{text}",
                "The latest month counts "
                InlineStat { id: "latest-persons".to_string(), value: stats.latest_persons.clone() }
                " persons in "
                InlineStat { id: "latest-households".to_string(), value: stats.latest_households.clone() }
                " households, a year-over-year change of "
                InlineStat { id: "yoy-change".to_string(), value: stats.yoy_change.clone() }
                "."
            }
        },
        Tab::Benefits => rsx! {
            p {
                style: "{text}",
                "Average benefits and total program cost, monthly."
            }
        },
        Tab::Covid => rsx! {
            p {
                style: "{text}",
                "Before the pandemic an average of "
                InlineStat { id: "pre-covid-households".to_string(), value: stats.pre_covid_households.clone() }
                " households participated. Participation peaked at "
                InlineStat { id: "peak-covid-households".to_string(), value: stats.peak_covid_households.clone() }
                " households in "
                InlineStat { id: "peak-covid-date".to_string(), value: stats.peak_covid_date.clone() }
                ", an increase of "
                InlineStat { id: "covid-increase".to_string(), value: stats.covid_increase.clone() }
                " ("
                InlineStat { id: "covid-increase-pct".to_string(), value: stats.covid_increase_pct.clone() }
                "%)."
            }
        },
        Tab::Counties => rsx! {
            p {
                style: "{text}",
                "Latest county snapshot by public-assistance status."
            }
        },
    }
}
