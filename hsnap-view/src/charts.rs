//! The eight dashboard charts.
//!
//! Each chart is described by a `ChartSpec` (labels, series, palette, axes,
//! formatting rules) built from the loaded documents, and rendered to a
//! Chart.js configuration by [`ChartSpec::to_config`].
//!
//! Formatting callbacks cannot travel through JSON, so the config carries
//! `hsnapFormat` (axis ticks), `hsnapTooltip` (per dataset) and `hsnapTitle`
//! (tooltip title) markers naming a [`FormatRule`]. The chart bridge swaps
//! them for functions that call the Rust formatters.

use crate::format::FormatRule;
use hsnap_data::series::CutoffWindow;
use hsnap_data::{CountySnapshot, Dataset, MonthlySeries, TrendsSummary};
use serde::Serialize;
use serde_json::{json, Value};

/// Periods before this date are hidden from the five monthly charts.
pub const CUTOFF_DATE: &str = "1999-01-01";

/// Where the COVID chart draws its vertical marker.
pub const COVID_MARKER_DATE: &str = "2020-03-01";

/// Identifies a chart and the canvas it is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartId {
    Overview,
    Households,
    Persons,
    Benefit,
    Cost,
    Covid,
    County,
    PublicAssistance,
}

impl ChartId {
    pub const ALL: [ChartId; 8] = [
        ChartId::Overview,
        ChartId::Households,
        ChartId::Persons,
        ChartId::Benefit,
        ChartId::Cost,
        ChartId::Covid,
        ChartId::County,
        ChartId::PublicAssistance,
    ];

    /// DOM id of the canvas.
    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartId::Overview => "overviewChart",
            ChartId::Households => "householdsChart",
            ChartId::Persons => "personsChart",
            ChartId::Benefit => "benefitChart",
            ChartId::Cost => "costChart",
            ChartId::Covid => "covidChart",
            ChartId::County => "countyChart",
            ChartId::PublicAssistance => "paChart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// Border colour with its translucent fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub border: &'static str,
    /// Area fill under a line
    pub line_fill: &'static str,
    /// Bar body
    pub bar_fill: &'static str,
}

pub const BLUE: Palette = Palette {
    border: "#2563eb",
    line_fill: "rgba(37, 99, 235, 0.1)",
    bar_fill: "rgba(37, 99, 235, 0.7)",
};

pub const PURPLE: Palette = Palette {
    border: "#7c3aed",
    line_fill: "rgba(124, 58, 237, 0.1)",
    bar_fill: "rgba(124, 58, 237, 0.7)",
};

pub const GREEN: Palette = Palette {
    border: "#059669",
    line_fill: "rgba(5, 150, 105, 0.1)",
    bar_fill: "rgba(5, 150, 105, 0.7)",
};

pub const AMBER: Palette = Palette {
    border: "#d97706",
    line_fill: "rgba(217, 119, 6, 0.1)",
    bar_fill: "rgba(217, 119, 6, 0.7)",
};

/// How a value is shown: an optional unit prefix and a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueFormat {
    pub prefix: &'static str,
    pub rule: FormatRule,
}

impl ValueFormat {
    pub const COUNT: ValueFormat = ValueFormat {
        prefix: "",
        rule: FormatRule::Number,
    };
    pub const DOLLARS: ValueFormat = ValueFormat {
        prefix: "$",
        rule: FormatRule::Number,
    };
    pub const MONEY: ValueFormat = ValueFormat {
        prefix: "$",
        rule: FormatRule::Money,
    };

    /// Apply the format to a value, as the chart callbacks do.
    pub fn apply(self, value: Option<f64>) -> String {
        format!("{}{}", self.prefix, self.rule.format_value(value))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub palette: Palette,
    /// Id of the y axis the series is plotted against
    pub axis: &'static str,
    /// Text before the value in the tooltip line
    pub tooltip_label: String,
    pub tooltip_format: ValueFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Year,
    Month,
}

#[derive(Debug, Clone, PartialEq)]
pub enum XAxis {
    /// Date labels on a time scale
    Time {
        unit: TimeUnit,
        title: &'static str,
        /// Chart.js display format for the unit, when not the default
        display_format: Option<&'static str>,
    },
    /// Category labels (county names)
    Category { stacked: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YAxis {
    pub id: &'static str,
    pub position: AxisPosition,
    pub title: &'static str,
    pub begin_at_zero: bool,
    pub stacked: bool,
    pub ticks: ValueFormat,
    /// Secondary axes keep their grid lines off the plot area
    pub grid_on_chart_area: bool,
}

impl YAxis {
    fn left(title: &'static str, ticks: ValueFormat) -> Self {
        Self {
            id: "y",
            position: AxisPosition::Left,
            title,
            begin_at_zero: false,
            stacked: false,
            ticks,
            grid_on_chart_area: true,
        }
    }
}

/// A vertical line at a fixed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub at: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub id: ChartId,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub x_axis: XAxis,
    pub y_axes: Vec<YAxis>,
    pub marker: Option<Marker>,
}

/// All eight charts in construction order.
pub fn all(dataset: &Dataset) -> Vec<ChartSpec> {
    let monthly = &dataset.monthly;
    vec![
        overview(monthly, CUTOFF_DATE),
        households(monthly, CUTOFF_DATE),
        persons(monthly, CUTOFF_DATE),
        benefit(monthly, CUTOFF_DATE),
        cost(monthly, CUTOFF_DATE),
        covid(&dataset.trends),
        county(&dataset.county),
        public_assistance(&dataset.county),
    ]
}

fn line(
    label: &str,
    data: &[Option<f64>],
    palette: Palette,
    axis: &'static str,
    tooltip_label: &str,
    tooltip_format: ValueFormat,
) -> Series {
    Series {
        label: label.to_string(),
        data: data.to_vec(),
        palette,
        axis,
        tooltip_label: tooltip_label.to_string(),
        tooltip_format,
    }
}

fn yearly_axis() -> XAxis {
    XAxis::Time {
        unit: TimeUnit::Year,
        title: "Year",
        display_format: None,
    }
}

/// Single-series line over the cutoff window of the monthly document.
fn monthly_line(
    id: ChartId,
    window: &CutoffWindow<'_>,
    series: Series,
    y_axis: YAxis,
) -> ChartSpec {
    ChartSpec {
        id,
        kind: ChartKind::Line,
        labels: window.labels().to_vec(),
        series: vec![series],
        x_axis: yearly_axis(),
        y_axes: vec![y_axis],
        marker: None,
    }
}

/// Persons and households on one left axis.
pub fn overview(monthly: &MonthlySeries, cutoff: &str) -> ChartSpec {
    let window = CutoffWindow::new(&monthly.labels, cutoff);
    let sets = &monthly.datasets;
    ChartSpec {
        id: ChartId::Overview,
        kind: ChartKind::Line,
        labels: window.labels().to_vec(),
        series: vec![
            line("Persons", window.slice(&sets.persons), BLUE, "y", "Persons", ValueFormat::COUNT),
            line(
                "Households",
                window.slice(&sets.households),
                PURPLE,
                "y",
                "Households",
                ValueFormat::COUNT,
            ),
        ],
        x_axis: XAxis::Time {
            unit: TimeUnit::Year,
            title: "Year",
            display_format: Some("yyyy"),
        },
        y_axes: vec![YAxis::left("Count", ValueFormat::COUNT)],
        marker: None,
    }
}

pub fn households(monthly: &MonthlySeries, cutoff: &str) -> ChartSpec {
    let window = CutoffWindow::new(&monthly.labels, cutoff);
    monthly_line(
        ChartId::Households,
        &window,
        line(
            "Households Participating",
            window.slice(&monthly.datasets.households),
            PURPLE,
            "y",
            "Households",
            ValueFormat::COUNT,
        ),
        YAxis::left("Households", ValueFormat::COUNT),
    )
}

pub fn persons(monthly: &MonthlySeries, cutoff: &str) -> ChartSpec {
    let window = CutoffWindow::new(&monthly.labels, cutoff);
    monthly_line(
        ChartId::Persons,
        &window,
        line(
            "Persons Participating",
            window.slice(&monthly.datasets.persons),
            BLUE,
            "y",
            "Persons",
            ValueFormat::COUNT,
        ),
        YAxis::left("Persons", ValueFormat::COUNT),
    )
}

/// Average monthly benefit per household, currency axis.
pub fn benefit(monthly: &MonthlySeries, cutoff: &str) -> ChartSpec {
    let window = CutoffWindow::new(&monthly.labels, cutoff);
    monthly_line(
        ChartId::Benefit,
        &window,
        line(
            "Average Monthly Benefit per Household",
            window.slice(&monthly.datasets.avg_benefit_per_household),
            GREEN,
            "y",
            "Avg Benefit",
            ValueFormat::DOLLARS,
        ),
        YAxis::left("Average Benefit ($)", ValueFormat::DOLLARS),
    )
}

/// Total monthly cost, megascale currency ticks.
pub fn cost(monthly: &MonthlySeries, cutoff: &str) -> ChartSpec {
    let window = CutoffWindow::new(&monthly.labels, cutoff);
    monthly_line(
        ChartId::Cost,
        &window,
        line(
            "Total Monthly Cost",
            window.slice(&monthly.datasets.total_cost),
            AMBER,
            "y",
            "Total Cost",
            ValueFormat::MONEY,
        ),
        YAxis::left("Total Cost ($)", ValueFormat::MONEY),
    )
}

/// Recent months: households on the left axis, average benefit on the right,
/// with a marker where the pandemic response began.
pub fn covid(trends: &TrendsSummary) -> ChartSpec {
    let recent = &trends.recent_data;
    ChartSpec {
        id: ChartId::Covid,
        kind: ChartKind::Line,
        labels: recent.labels.clone(),
        series: vec![
            line(
                "Households",
                &recent.households,
                PURPLE,
                "y",
                "Households",
                ValueFormat::COUNT,
            ),
            line(
                "Avg Benefit/Household",
                &recent.avg_benefit_per_household,
                GREEN,
                "y1",
                "Avg Benefit",
                ValueFormat::DOLLARS,
            ),
        ],
        x_axis: XAxis::Time {
            unit: TimeUnit::Month,
            title: "Month",
            display_format: Some("MMM yyyy"),
        },
        y_axes: vec![
            YAxis::left("Households", ValueFormat::COUNT),
            YAxis {
                id: "y1",
                position: AxisPosition::Right,
                title: "Avg Benefit ($)",
                begin_at_zero: false,
                stacked: false,
                ticks: ValueFormat::DOLLARS,
                grid_on_chart_area: false,
            },
        ],
        marker: Some(Marker {
            at: COVID_MARKER_DATE,
            label: "COVID-19",
            color: "rgba(220, 38, 38, 0.5)",
        }),
    }
}

fn county_names(snapshot: &CountySnapshot) -> Vec<String> {
    snapshot.counties.iter().map(|c| c.name.clone()).collect()
}

fn bar(label: &str, data: Vec<Option<f64>>, palette: Palette) -> Series {
    Series {
        label: label.to_string(),
        data,
        palette,
        axis: "y",
        tooltip_label: label.to_string(),
        tooltip_format: ValueFormat::COUNT,
    }
}

/// Grouped bars: persons vs households per county.
pub fn county(snapshot: &CountySnapshot) -> ChartSpec {
    let counties = &snapshot.counties;
    ChartSpec {
        id: ChartId::County,
        kind: ChartKind::Bar,
        labels: county_names(snapshot),
        series: vec![
            bar("Persons", counties.iter().map(|c| c.persons.total).collect(), BLUE),
            bar(
                "Households",
                counties.iter().map(|c| c.households.total).collect(),
                PURPLE,
            ),
        ],
        x_axis: XAxis::Category { stacked: false },
        y_axes: vec![YAxis {
            begin_at_zero: true,
            ..YAxis::left("Count", ValueFormat::COUNT)
        }],
        marker: None,
    }
}

/// Stacked bars: public-assistance vs non-public-assistance persons.
pub fn public_assistance(snapshot: &CountySnapshot) -> ChartSpec {
    let counties = &snapshot.counties;
    ChartSpec {
        id: ChartId::PublicAssistance,
        kind: ChartKind::Bar,
        labels: county_names(snapshot),
        series: vec![
            bar(
                "Public Assistance",
                counties.iter().map(|c| c.persons.public_assistance).collect(),
                GREEN,
            ),
            bar(
                "Non-Public Assistance",
                counties
                    .iter()
                    .map(|c| c.persons.non_public_assistance)
                    .collect(),
                AMBER,
            ),
        ],
        x_axis: XAxis::Category { stacked: true },
        y_axes: vec![YAxis {
            begin_at_zero: true,
            stacked: true,
            ..YAxis::left("Persons", ValueFormat::COUNT)
        }],
        marker: None,
    }
}

impl ChartSpec {
    pub fn canvas_id(&self) -> &'static str {
        self.id.canvas_id()
    }

    /// Chart.js configuration with formatter markers.
    pub fn to_config(&self) -> Value {
        let datasets: Vec<Value> = self.series.iter().map(|s| self.dataset_config(s)).collect();

        let mut scales = serde_json::Map::new();
        scales.insert("x".to_string(), self.x_axis_config());
        for axis in &self.y_axes {
            scales.insert(axis.id.to_string(), y_axis_config(axis));
        }

        let mut tooltip = json!({
            "backgroundColor": "rgba(0, 0, 0, 0.8)",
            "padding": 12,
            "titleFont": { "size": 14 },
            "bodyFont": { "size": 13 },
        });
        if matches!(self.x_axis, XAxis::Time { .. }) {
            tooltip["hsnapTitle"] = json!(FormatRule::Date);
        }

        let mut plugins = json!({
            "legend": { "display": true, "position": "top" },
            "tooltip": tooltip,
        });
        if let Some(marker) = &self.marker {
            plugins["annotation"] = json!({
                "annotations": {
                    "marker": {
                        "type": "line",
                        "xMin": marker.at,
                        "xMax": marker.at,
                        "borderColor": marker.color,
                        "borderWidth": 2,
                        "label": {
                            "content": marker.label,
                            "display": true,
                            "position": "start",
                        },
                    }
                }
            });
        }

        json!({
            "type": match self.kind {
                ChartKind::Line => "line",
                ChartKind::Bar => "bar",
            },
            "data": {
                "labels": self.labels,
                "datasets": datasets,
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": true,
                "interaction": { "mode": "index", "intersect": false },
                "plugins": plugins,
                "scales": Value::Object(scales),
            },
        })
    }

    fn dataset_config(&self, series: &Series) -> Value {
        let tooltip = json!({
            "label": series.tooltip_label,
            "prefix": series.tooltip_format.prefix,
            "rule": series.tooltip_format.rule,
        });
        match self.kind {
            ChartKind::Line => json!({
                "label": series.label,
                "data": series.data,
                "borderColor": series.palette.border,
                "backgroundColor": series.palette.line_fill,
                "borderWidth": 2,
                "fill": true,
                "yAxisID": series.axis,
                "hsnapTooltip": tooltip,
            }),
            ChartKind::Bar => json!({
                "label": series.label,
                "data": series.data,
                "backgroundColor": series.palette.bar_fill,
                "borderColor": series.palette.border,
                "borderWidth": 1,
                "hsnapTooltip": tooltip,
            }),
        }
    }

    fn x_axis_config(&self) -> Value {
        match &self.x_axis {
            XAxis::Time {
                unit,
                title,
                display_format,
            } => {
                let unit = match unit {
                    TimeUnit::Year => "year",
                    TimeUnit::Month => "month",
                };
                let mut time = json!({ "unit": unit });
                if let Some(format) = display_format {
                    time["displayFormats"] = json!({ unit: format });
                }
                json!({
                    "type": "time",
                    "time": time,
                    "title": { "display": true, "text": title },
                })
            }
            XAxis::Category { stacked } => json!({ "stacked": stacked }),
        }
    }
}

fn y_axis_config(axis: &YAxis) -> Value {
    let mut config = json!({
        "type": "linear",
        "display": true,
        "position": match axis.position {
            AxisPosition::Left => "left",
            AxisPosition::Right => "right",
        },
        "beginAtZero": axis.begin_at_zero,
        "title": { "display": true, "text": axis.title },
        "ticks": { "hsnapFormat": axis.ticks },
    });
    if axis.stacked {
        config["stacked"] = json!(true);
    }
    if !axis.grid_on_chart_area {
        config["grid"] = json!({ "drawOnChartArea": false });
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsnap_data::testing;

    #[test]
    fn test_eight_charts_on_distinct_canvases() {
        let charts = all(&testing::dataset());
        let ids: Vec<ChartId> = charts.iter().map(|c| c.id).collect();
        assert_eq!(ids, ChartId::ALL.to_vec());
        let mut canvases: Vec<&str> = charts.iter().map(|c| c.canvas_id()).collect();
        canvases.sort();
        canvases.dedup();
        assert_eq!(canvases.len(), 8);
    }

    #[test]
    fn test_monthly_charts_drop_periods_before_cutoff() {
        let dataset = testing::dataset();
        let monthly = &dataset.monthly;
        for spec in [
            overview(monthly, CUTOFF_DATE),
            households(monthly, CUTOFF_DATE),
            persons(monthly, CUTOFF_DATE),
            benefit(monthly, CUTOFF_DATE),
            cost(monthly, CUTOFF_DATE),
        ] {
            assert_eq!(spec.labels, vec!["1999-01-01", "1999-02-01"], "{:?}", spec.id);
            for series in &spec.series {
                assert_eq!(series.data.len(), spec.labels.len(), "{:?}", spec.id);
            }
        }
        let persons = persons(monthly, CUTOFF_DATE);
        assert_eq!(persons.series[0].data, vec![Some(121_000.0), Some(122_500.0)]);
    }

    #[test]
    fn test_overview_keeps_all_periods_after_cutoff() {
        let dataset = testing::dataset();
        let spec = overview(&dataset.monthly, "1990-01-01");
        assert_eq!(spec.labels.len(), 3);
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].data.len(), 3);
        assert_eq!(spec.series[1].data.len(), 3);
        assert_eq!(spec.series[0].label, "Persons");
        assert_eq!(spec.series[1].data[0], Some(60_000.0));
    }

    #[test]
    fn test_covid_chart_uses_recent_data_and_marker() {
        let dataset = testing::dataset();
        let spec = covid(&dataset.trends);
        assert_eq!(spec.labels, dataset.trends.recent_data.labels);
        assert_eq!(spec.series[0].axis, "y");
        assert_eq!(spec.series[1].axis, "y1");
        assert_eq!(spec.marker.as_ref().map(|m| m.at), Some(COVID_MARKER_DATE));

        let config = spec.to_config();
        let scales = &config["options"]["scales"];
        assert_eq!(scales["y1"]["position"], "right");
        assert_eq!(scales["y1"]["grid"]["drawOnChartArea"], false);
        assert_eq!(scales["x"]["time"]["displayFormats"]["month"], "MMM yyyy");
        let marker = &config["options"]["plugins"]["annotation"]["annotations"]["marker"];
        assert_eq!(marker["xMin"], "2020-03-01");
        assert_eq!(marker["label"]["content"], "COVID-19");
    }

    #[test]
    fn test_county_charts() {
        let dataset = testing::dataset();
        let grouped = county(&dataset.county);
        assert_eq!(grouped.labels, vec!["Hawaii", "Honolulu"]);
        assert_eq!(grouped.series[0].data, vec![Some(25_000.0), Some(85_000.0)]);
        assert_eq!(grouped.series[1].data, vec![Some(11_000.0), Some(40_000.0)]);

        let stacked = public_assistance(&dataset.county).to_config();
        assert_eq!(stacked["type"], "bar");
        assert_eq!(stacked["options"]["scales"]["x"]["stacked"], true);
        assert_eq!(stacked["options"]["scales"]["y"]["stacked"], true);
        assert_eq!(stacked["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(stacked["data"]["datasets"][0]["data"], json!([5000.0, 15000.0]));
        assert!(stacked["options"]["plugins"]["tooltip"]
            .get("hsnapTitle")
            .is_none());
    }

    #[test]
    fn test_config_carries_formatter_markers() {
        let dataset = testing::dataset();
        let config = cost(&dataset.monthly, CUTOFF_DATE).to_config();
        assert_eq!(config["type"], "line");
        assert_eq!(
            config["options"]["scales"]["y"]["ticks"]["hsnapFormat"],
            json!({ "prefix": "$", "rule": "money" })
        );
        let dataset_config = &config["data"]["datasets"][0];
        assert_eq!(dataset_config["hsnapTooltip"]["label"], "Total Cost");
        assert_eq!(dataset_config["fill"], true);
        assert_eq!(dataset_config["borderColor"], AMBER.border);
        assert_eq!(config["options"]["plugins"]["tooltip"]["hsnapTitle"], "date");
    }

    #[test]
    fn test_value_format_matches_tooltip_text() {
        assert_eq!(ValueFormat::MONEY.apply(Some(18_739_500.0)), "$18.7M");
        assert_eq!(ValueFormat::DOLLARS.apply(Some(302.25)), "$302");
        assert_eq!(ValueFormat::COUNT.apply(Some(122_500.0)), "122,500");
    }
}
