//! Section Navigation Component
//!
//! Nav buttons for switching between the About and Drones sections.

use leptos::prelude::*;

use crate::context::{AppContext, Section};

/// Section options (target, label)
const SECTIONS: &[(Section, &str)] = &[
    (Section::About, "Tietoa"),
    (Section::Drones, "Dronet"),
];

#[component]
pub fn SectionNav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="section-nav">
            <span class="site-title">"Dronevertailu"</span>
            {SECTIONS.iter().map(|(section, label)| {
                let section = *section;
                let is_active = move || ctx.active_section.get() == section;
                view! {
                    <button
                        class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                        on:click=move |_| ctx.show(section)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
