//! Places API Bindings
//!
//! Thin frontend binding to the external places collaborator. The place
//! catalog is served as static JSON next to the app bundle.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::models::Place;

const PLACES_URL: &str = "/places.json";

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Fetch the full place catalog
pub async fn fetch_places() -> Result<Vec<Place>, String> {
    let window = web_sys::window().ok_or("no window")?;
    let response = JsFuture::from(window.fetch_with_str(PLACES_URL))
        .await
        .map_err(js_err)?;
    let response: Response = response.dyn_into().map_err(js_err)?;
    if !response.ok() {
        return Err(format!("places request failed: HTTP {}", response.status()));
    }
    let json = JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}
