//! Drone Card List Component
//!
//! Card renderer over the shared derived view.

use leptos::prelude::*;

use crate::models::Drone;
use crate::store::{store_remove_drone, use_app_store};

#[component]
pub fn DroneCardList(drones: Memo<Vec<Drone>>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="drone-list">
            <For
                each=move || drones.get()
                key=|drone| drone.id
                children=move |drone| {
                    let id = drone.id;
                    view! {
                        <div class="drone-card">
                            <div class="model">{drone.model.clone()}</div>
                            <div class="specs">
                                "Kamera: " {drone.camera.clone()} <br/>
                                "Lentoaika: " {drone.flight.clone()} <br/>
                                "Paino: " {drone.weight.clone()} <br/>
                                "Hinta: " {drone.price} " €" <br/>
                                "Arvosana: " {drone.rating}
                            </div>
                            <button
                                class="delete-btn"
                                on:click=move |_| store_remove_drone(&store, id)
                            >
                                "Poista"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
