//! Catalog Loader
//!
//! Loads the drone catalog once per session: cache first, network fallback.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::models::DroneSpec;
use crate::storage;
use crate::store::{self, AppStateStoreFields, AppStore};

/// Relative path of the seed catalog
const CATALOG_URL: &str = "drones.json";

/// Load the catalog into the store.
///
/// Idempotent: a non-empty in-memory sequence is left alone, so re-opening
/// the comparison section within a session does nothing. Otherwise the cache
/// mirror seeds the store without touching the network; only a cold start
/// fetches the JSON resource (and writes the cache via `store_seed`).
pub async fn load_drones(store: AppStore) -> Result<(), String> {
    if !store.drones().get_untracked().is_empty() {
        return Ok(());
    }

    if let Some(cached) = storage::load_cached()? {
        web_sys::console::log_1(
            &format!("[CATALOG] Restored {} drones from cache", cached.len()).into(),
        );
        store::store_hydrate(&store, cached);
        return Ok(());
    }

    let specs = fetch_catalog().await?;
    web_sys::console::log_1(&format!("[CATALOG] Fetched {} drones", specs.len()).into());
    store::store_seed(&store, specs);
    Ok(())
}

/// Fetch and parse the seed catalog over the network
async fn fetch_catalog() -> Result<Vec<DroneSpec>, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_str(CATALOG_URL))
        .await
        .map_err(|e| format!("fetch failed: {:?}", e))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch returned a non-Response".to_string())?;
    let body = response
        .json()
        .map_err(|e| format!("response body error: {:?}", e))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|e| format!("json parse failed: {:?}", e))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}
