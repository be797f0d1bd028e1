//! About Section Component
//!
//! Marketing copy rendered from embedded Markdown, plus the decorative
//! advent calendar.

use leptos::prelude::*;
use leptos_advent::AdventCalendar;

use crate::markdown;

const ABOUT_COPY: &str = r#"## Lennä korkeammalle

Dronevertailu kokoaa suosituimmat kuvauskopterit yhteen paikkaan.
Vertaile kameroita, lentoaikoja, painoja ja hintoja, ja löydä juuri
sinun lentotyyliisi sopiva malli.

- Ajantasaiset tiedot suosituimmista malleista
- Hintaluokat aloittelijasta ammattilaiseen
- Lisää omat löytösi mukaan vertailuun

Joulukuussa luukku päivässä pitää lentokauden mielessä myös pimeinä
iltoina. Avaa päivän luukku alta."#;

#[component]
pub fn AboutSection() -> impl IntoView {
    let html = markdown::parse_markdown(ABOUT_COPY);

    view! {
        <section class="about-section">
            <div class="about-copy" inner_html=html></div>
            <AdventCalendar />
        </section>
    }
}
