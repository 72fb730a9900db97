//! Outbound HTTP call to the random person provider.
//!
//! One GET per invocation, no retries, no caching. Every failure mode
//! (network error, non-2xx status, malformed payload) collapses into a
//! human-readable `Err(String)` for the hook to surface.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::model::{Person, UserPayload};

/// Fetch one random person from the provider at `url`.
pub async fn fetch_person(url: &str) -> Result<Person, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| js_message("Invalid request", e))?;

    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_message("Network request failed", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "Unexpected fetch result".to_string())?;

    if !response.ok() {
        return Err(format!("Person API returned HTTP {}", response.status()));
    }

    let body = response
        .json()
        .map_err(|e| js_message("Response was not JSON", e))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|e| js_message("Failed to read response body", e))?;

    let payload: UserPayload = serde_wasm_bindgen::from_value(json)
        .map_err(|e| format!("Unexpected payload shape: {}", e))?;

    Ok(payload.into())
}

fn js_message(context: &str, err: JsValue) -> String {
    match err.as_string() {
        Some(detail) => format!("{}: {}", context, detail),
        None => context.to_string(),
    }
}
