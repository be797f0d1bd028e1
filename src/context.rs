//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::query::DroneQuery;

/// Top-level page sections
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Drones,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently visible section - read
    pub active_section: ReadSignal<Section>,
    /// Currently visible section - write
    set_active_section: WriteSignal<Section>,
    /// Derivation both renderers currently show - read
    pub query: ReadSignal<DroneQuery>,
    /// Derivation both renderers currently show - write
    set_query: WriteSignal<DroneQuery>,
}

impl AppContext {
    pub fn new(
        active_section: (ReadSignal<Section>, WriteSignal<Section>),
        query: (ReadSignal<DroneQuery>, WriteSignal<DroneQuery>),
    ) -> Self {
        Self {
            active_section: active_section.0,
            set_active_section: active_section.1,
            query: query.0,
            set_query: query.1,
        }
    }

    /// Switch the visible section
    pub fn show(&self, section: Section) {
        self.set_active_section.set(section);
    }

    /// Replace the current derivation (last control touched wins)
    pub fn set_query(&self, query: DroneQuery) {
        self.set_query.set(query);
    }
}
