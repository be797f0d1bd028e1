//! New Drone Form Component
//!
//! Form for adding a drone to the comparison. Numeric fields parse as
//! floating point; input is not validated.

use leptos::prelude::*;

use crate::models::{parse_number, DroneSpec};
use crate::store::{store_add_drone, use_app_store};

#[component]
pub fn NewDroneForm() -> impl IntoView {
    let store = use_app_store();

    let (model, set_model) = signal(String::new());
    let (camera, set_camera) = signal(String::new());
    let (flight, set_flight) = signal(String::new());
    let (weight, set_weight) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (rating, set_rating) = signal(String::new());

    let add_drone = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let spec = DroneSpec {
            model: model.get(),
            camera: camera.get(),
            flight: flight.get(),
            weight: weight.get(),
            price: parse_number(&price.get()),
            rating: parse_number(&rating.get()),
        };
        store_add_drone(&store, spec);
        set_model.set(String::new());
        set_camera.set(String::new());
        set_flight.set(String::new());
        set_weight.set(String::new());
        set_price.set(String::new());
        set_rating.set(String::new());
    };

    view! {
        <form class="new-drone-form" on:submit=add_drone>
            <h2>"Lisää drone"</h2>
            <div class="form-grid">
                <input
                    type="text"
                    placeholder="Malli"
                    prop:value=move || model.get()
                    on:input=move |ev| set_model.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Kamera"
                    prop:value=move || camera.get()
                    on:input=move |ev| set_camera.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Lentoaika"
                    prop:value=move || flight.get()
                    on:input=move |ev| set_flight.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Paino"
                    prop:value=move || weight.get()
                    on:input=move |ev| set_weight.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Hinta (€)"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Arvosana"
                    prop:value=move || rating.get()
                    on:input=move |ev| set_rating.set(event_target_value(&ev))
                />
            </div>
            <button type="submit">"Lisää vertailuun"</button>
        </form>
    }
}
