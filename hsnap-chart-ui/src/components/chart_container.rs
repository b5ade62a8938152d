//! Chart container component holding a Chart.js canvas.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the canvas (Chart.js draws into this)
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 320)]
    pub min_height: u32,
}

/// A wrapper div with a canvas for one chart.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            class: "chart-container",
            style: "{style}",
            canvas {
                id: "{props.id}",
            }
        }
    }
}
