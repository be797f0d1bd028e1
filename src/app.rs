//! Dronevertailu Frontend App
//!
//! Main application component: section shell, one-shot catalog loading and
//! the shared derived view both renderers consume.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::catalog;
use crate::components::{
    AboutSection, DroneCardList, DroneTable, FilterBar, NewDroneForm, SectionNav,
};
use crate::context::{AppContext, Section};
use crate::query::DroneQuery;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let (active_section, set_active_section) = signal(Section::About);
    let (query, set_query) = signal(DroneQuery::default());
    provide_context(AppContext::new(
        (active_section, set_active_section),
        (query, set_query),
    ));

    // Load the catalog when the comparison section opens.
    // load_drones is idempotent, so later activations are no-ops.
    Effect::new(move |_| {
        if active_section.get() != Section::Drones {
            return;
        }
        spawn_local(async move {
            if let Err(err) = catalog::load_drones(store).await {
                web_sys::console::error_1(&format!("[APP] catalog load failed: {}", err).into());
            }
        });
    });

    // The derived view: recomputed whenever the catalog or the query changes,
    // feeding the card list and the table in sync
    let visible = Memo::new(move |_| query.get().apply(&store.drones().get()));

    view! {
        <div class="app-shell">
            <SectionNav />
            <main class="main-content">
                <Show when=move || active_section.get() == Section::About>
                    <AboutSection />
                </Show>
                <Show when=move || active_section.get() == Section::Drones>
                    <section class="drones-section">
                        <h1>"Dronevertailu"</h1>
                        <FilterBar />
                        <DroneCardList drones=visible />
                        <DroneTable drones=visible />
                        <NewDroneForm />
                        <p class="item-count">
                            {move || format!("{} dronea vertailussa", visible.get().len())}
                        </p>
                    </section>
                </Show>
            </main>
        </div>
    }
}
