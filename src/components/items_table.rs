//! Table rendering for item records.

use leptos::prelude::*;

use crate::net::types::Item;

/// Items table — one row per record, three cells (id, name, description)
/// in arrival order. The list signal is replaced wholesale on every load,
/// so prior rows never survive a refresh.
#[component]
pub fn ItemsTable(items: RwSignal<Vec<Item>>) -> impl IntoView {
    view! {
        <table class="items-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Nombre"</th>
                    <th>"Descripción"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item: Item| {
                        let description = item.description.clone().unwrap_or_default();
                        view! {
                            <tr>
                                <td>{item.id}</td>
                                <td>{item.name}</td>
                                <td>{description}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
