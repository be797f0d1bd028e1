//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation of
//! the catalog goes through the helpers below, which also write the new
//! sequence through to the localStorage mirror.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Drone, DroneSpec};
use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Comparison catalog, in insertion order
    pub drones: Vec<Drone>,
    /// Next identifier handed to a new drone
    pub next_id: u32,
    /// Direction the next price sort will use
    pub sort_ascending: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            sort_ascending: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Install records restored from the cache mirror.
///
/// The cache already equals what we install, so nothing is written back.
pub fn store_hydrate(store: &AppStore, drones: Vec<Drone>) {
    let next = drones.iter().map(|d| d.id).max().map_or(1, |m| m + 1);
    store.next_id().set(next);
    store.drones().set(drones);
}

/// Seed the catalog from freshly fetched specs and persist the result
pub fn store_seed(store: &AppStore, specs: Vec<DroneSpec>) {
    let mut next = store.next_id().get_untracked();
    let drones: Vec<Drone> = specs
        .into_iter()
        .map(|spec| {
            let drone = Drone::from_spec(next, spec);
            next += 1;
            drone
        })
        .collect();
    store.next_id().set(next);
    store.drones().set(drones);
    persist_now(store);
}

/// Append a new drone built from the add form
pub fn store_add_drone(store: &AppStore, spec: DroneSpec) {
    let id = store.next_id().get_untracked();
    store.next_id().set(id + 1);
    store.drones().write().push(Drone::from_spec(id, spec));
    persist_now(store);
}

/// Remove a drone from the store by ID
pub fn store_remove_drone(store: &AppStore, drone_id: u32) {
    store.drones().write().retain(|drone| drone.id != drone_id);
    persist_now(store);
}

/// Write-through: mirror the current sequence into localStorage
fn persist_now(store: &AppStore) {
    let drones = store.drones().get_untracked();
    if let Err(err) = storage::persist(&drones) {
        web_sys::console::error_1(&format!("[STORE] persist failed: {}", err).into());
    }
}
