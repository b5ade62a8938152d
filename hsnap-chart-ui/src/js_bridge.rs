//! Typed wrappers around Chart.js interop via `js_sys::eval()`.
//!
//! The bridge script in `assets/js/chart-bridge.js` is evaluated as a global
//! (no ES modules) once Chart.js is present, and exposes
//! `window.hsnapConstructChart`. Chart configs travel as JSON; the
//! `hsnapFormat`, `hsnapTooltip` and `hsnapTitle` markers inside them are
//! resolved against `window.hsnapFormatters`, which call the Rust formatting
//! rules.

use hsnap_view::charts::ChartSpec;
use hsnap_view::format::{format_date, FormatRule};
use hsnap_view::render::ChartBackend;
use wasm_bindgen::prelude::*;

static CHART_BRIDGE_JS: &str = include_str!("../assets/js/chart-bridge.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HSNAP JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Dates may arrive as the ISO label itself, which avoids the browser's
/// local-time parsing; numbers are epoch milliseconds.
fn formatter(rule: FormatRule) -> JsValue {
    Closure::<dyn Fn(JsValue) -> String>::new(move |value: JsValue| match value.as_string() {
        Some(label) if rule == FormatRule::Date => format_date(Some(&label)),
        _ => rule.format_value(value.as_f64()),
    })
    .into_js_value()
}

/// Publish the Rust formatting rules as `window.hsnapFormatters`.
///
/// Keys match the serialized `FormatRule` names used by the chart markers.
pub fn install_formatters() -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let formatters = js_sys::Object::new();
    for (name, rule) in [
        ("number", FormatRule::Number),
        ("money", FormatRule::Money),
        ("date", FormatRule::Date),
    ] {
        js_sys::Reflect::set(&formatters, &JsValue::from_str(name), &formatter(rule))
            .map_err(|e| anyhow::anyhow!("setting formatter {}: {:?}", name, e))?;
    }
    js_sys::Reflect::set(&window, &JsValue::from_str("hsnapFormatters"), &formatters)
        .map_err(|e| anyhow::anyhow!("publishing formatters: {:?}", e))?;
    Ok(())
}

/// Install the formatters and load the bridge script with a wait-for-Chart.js
/// polling loop. Call once at app startup.
///
/// The bridge defines its functions with `function` declarations, so it is
/// evaluated at global scope via indirect eval once `Chart` exists, and the
/// functions are then promoted to `window.*`.
pub fn init_charts() {
    if let Err(e) = install_formatters() {
        log::error!("[HSNAP] formatter install failed: {}", e);
    }

    let store_js = format!(
        "window.__hsnapChartScripts = {};",
        serde_json::to_string(CHART_BRIDGE_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForChart = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChart);
                    (0, eval)(window.__hsnapChartScripts);
                    delete window.__hsnapChartScripts;
                    if (typeof hsnapConstructChart !== 'undefined') window.hsnapConstructChart = hsnapConstructChart;
                    if (typeof hsnapFormatValue !== 'undefined') window.hsnapFormatValue = hsnapFormatValue;
                    window.__hsnapChartsReady = true;
                    console.log('HSNAP charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Construct one chart on its canvas.
///
/// Polls until the bridge is ready and the canvas exists. The config is
/// embedded as a JS object literal, so no string escaping is needed.
pub fn construct_chart(canvas_id: &str, config: &serde_json::Value) {
    call_js(&format!(
        r#"
        (function() {{
            var config = {config};
            var poll = setInterval(function() {{
                if (window.__hsnapChartsReady &&
                    typeof window.hsnapConstructChart !== 'undefined' &&
                    document.getElementById('{canvas_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.hsnapConstructChart('{canvas_id}', config);
                    }} catch(e) {{ console.error('[HSNAP] hsnapConstructChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// `ChartBackend` that hands chart specs to Chart.js.
#[derive(Debug, Default)]
pub struct ChartJsBackend;

impl ChartBackend for ChartJsBackend {
    fn construct(&mut self, spec: &ChartSpec) -> anyhow::Result<()> {
        if web_sys::window().is_none() {
            anyhow::bail!("no window to draw {} on", spec.canvas_id());
        }
        log::info!("[HSNAP] constructing {}", spec.canvas_id());
        construct_chart(spec.canvas_id(), &spec.to_config());
        Ok(())
    }
}
