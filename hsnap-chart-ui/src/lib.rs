//! Shared Dioxus components and Chart.js bridge for the SNAP dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Chart.js construction via `js_sys::eval()`,
//!   with tick and tooltip callbacks routed to the Rust formatters
//! - `fetch`: the browser implementation of the document `Fetcher`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (tabs, stat tiles, cards, etc.)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
