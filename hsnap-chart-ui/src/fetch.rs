//! Document fetcher backed by the browser's `fetch`.

use async_trait::async_trait;
use hsnap_data::error::{LoadError, Result};
use hsnap_data::Fetcher;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetches documents relative to the page URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebFetcher;

fn fetch_error(path: &str, value: JsValue) -> LoadError {
    let reason = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    LoadError::Fetch {
        path: path.to_string(),
        reason,
    }
}

#[async_trait(?Send)]
impl Fetcher for WebFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let window = web_sys::window().ok_or_else(|| LoadError::Fetch {
            path: path.to_string(),
            reason: "no window".to_string(),
        })?;

        let value = JsFuture::from(window.fetch_with_str(path))
            .await
            .map_err(|e| fetch_error(path, e))?;
        let response: Response = value.dyn_into().map_err(|e| fetch_error(path, e))?;

        if !response.ok() {
            return Err(LoadError::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }

        let text = response.text().map_err(|e| fetch_error(path, e))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| fetch_error(path, e))?;
        body.as_string().ok_or_else(|| LoadError::Fetch {
            path: path.to_string(),
            reason: "response body is not text".to_string(),
        })
    }
}
