use leptos::prelude::*;

use crate::models::Drone;
use crate::store::{store_remove_drone, use_app_store};

/// Column headers of the comparison table
const COLUMNS: &[&str] = &[
    "Malli",
    "Kamera",
    "Lentoaika",
    "Paino",
    "Hinta (€)",
    "Arvosana",
];

#[component]
pub fn DroneTable(drones: Memo<Vec<Drone>>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <table class="drones-table">
            <thead>
                <tr>
                    {COLUMNS.iter().map(|label| view! { <th>{*label}</th> }).collect_view()}
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || drones.get()
                    key=|drone| drone.id
                    children=move |drone| {
                        let id = drone.id;
                        view! {
                            <tr>
                                <td>{drone.model.clone()}</td>
                                <td>{drone.camera.clone()}</td>
                                <td>{drone.flight.clone()}</td>
                                <td>{drone.weight.clone()}</td>
                                <td>{drone.price}</td>
                                <td>{drone.rating}</td>
                                <td>
                                    <button
                                        class="delete-btn"
                                        on:click=move |_| store_remove_drone(&store, id)
                                    >
                                        "Poista"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
