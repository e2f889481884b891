//! Restaurant administration: list, create with an owner picker, verify,
//! delete, locate on a map, and export a CSV report.

use api::{ApiClient, NewRestaurant, Restaurant, TableReport, UserSummary};
use chrono::Utc;
use dioxus::prelude::*;
use ui::components::{
    show_error, show_success, use_toasts, Button, ButtonVariant, ConfirmDialog, Input, Label,
    ModalOverlay, Pagination, Spinner, StatCard, ToastStack,
};
use ui::icons::{FaCircleCheck, FaStar, FaStore};
use ui::{save_file, use_client, Icon, ResourceList};

use super::error_message;

async fn load_restaurants(
    mut list: Signal<ResourceList<Restaurant>>,
    client: ApiClient,
    mut toasts: Signal<ToastStack>,
) {
    let ticket = list.write().begin_fetch();
    match client.fetch_restaurants().await {
        Ok(restaurants) => {
            list.write().apply(ticket, restaurants);
        }
        Err(err) => {
            list.write().fail(ticket);
            show_error(&mut toasts, error_message(&err, "Failed to fetch restaurants"));
        }
    }
}

#[component]
pub fn Restaurants() -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut restaurants = use_signal(ResourceList::<Restaurant>::new);
    let mut show_add = use_signal(|| false);
    let mut draft = use_signal(NewRestaurant::default);
    let mut owner_query = use_signal(String::new);
    let mut owner_results = use_signal(Vec::<UserSummary>::new);
    let mut pending_delete = use_signal(|| Option::<Restaurant>::None);
    let mut map_target = use_signal(|| Option::<Restaurant>::None);
    let mut map_point = use_signal(|| Option::<api::GeoPoint>::None);
    let mut geocoding = use_signal(|| false);

    {
        let client = client.clone();
        let _ = use_resource(move || {
            let client = client.clone();
            async move { load_restaurants(restaurants, client, toasts).await }
        });
    }

    let (total, verified_total, rating_avg, view, initial_load) = {
        let list = restaurants.read();
        let total = list.items().len();
        let rating_sum: f64 = list.items().iter().map(|r| r.rating).sum();
        (
            total,
            list.items().iter().filter(|r| r.verified).count(),
            if total == 0 { 0.0 } else { rating_sum / total as f64 },
            list.page_view(|_, _| true),
            list.is_loading() && list.items().is_empty(),
        )
    };

    let generate_report = move |_| {
        let csv = TableReport::restaurants(restaurants.read().items()).to_csv();
        let filename = format!("restaurant_report_{}.csv", Utc::now().format("%Y-%m-%d"));
        if let Err(err) = save_file(&filename, "text/csv", csv.as_bytes()) {
            show_error(&mut toasts, format!("Failed to save report: {err}"));
        }
    };

    let search_owner = {
        let client = client.clone();
        move |evt: FormEvent| {
            let query = evt.value();
            owner_query.set(query.clone());
            if query.len() < 2 {
                return;
            }
            let client = client.clone();
            spawn(async move {
                match client.search_users(&query).await {
                    Ok(results) => owner_results.set(results),
                    Err(err) => {
                        show_error(&mut toasts, error_message(&err, "Failed to search users"));
                    }
                }
            });
        }
    };

    let mut close_add = move || {
        show_add.set(false);
        draft.set(NewRestaurant::default());
        owner_query.set(String::new());
        owner_results.set(Vec::new());
    };

    let handle_add = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                match client.create_restaurant(&draft()).await {
                    Ok(()) => {
                        show_success(&mut toasts, "Restaurant added successfully");
                        close_add();
                        load_restaurants(restaurants, client, toasts).await;
                    }
                    Err(err) => {
                        show_error(&mut toasts, error_message(&err, "Failed to add restaurant"));
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Restaurant Management" }

            div {
                class: "stat-row",
                StatCard {
                    icon: rsx! { Icon { icon: FaStore, width: 20, height: 20 } },
                    label: "Total Restaurants",
                    value: "{total}",
                }
                StatCard {
                    icon: rsx! { Icon { icon: FaCircleCheck, width: 20, height: 20 } },
                    label: "Verified Restaurants",
                    value: "{verified_total}",
                }
                StatCard {
                    icon: rsx! { Icon { icon: FaStar, width: 20, height: 20 } },
                    label: "Average Rating",
                    value: "{rating_avg:.1}",
                }
            }

            div {
                class: "toolbar",
                div { class: "toolbar-spacer" }
                div {
                    class: "toolbar-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: generate_report,
                        "Generate Report"
                    }
                    Button {
                        onclick: move |_| show_add.set(true),
                        "Add Restaurant"
                    }
                }
            }

            if initial_load {
                Spinner { label: "Loading restaurants..." }
            } else {
                div {
                    class: "table-wrap",
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Owner ID" }
                                th { "Location" }
                                th { "Rating" }
                                th { "Verified" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for restaurant in view.items {
                                tr {
                                    key: "{restaurant.id}",
                                    td { "{restaurant.name}" }
                                    td { "{restaurant.owner}" }
                                    td { "{restaurant.location}" }
                                    td { "{restaurant.rating}/5" }
                                    td {
                                        button {
                                            class: if restaurant.verified { "verify-pill verified" } else { "verify-pill unverified" },
                                            onclick: {
                                                let client = client.clone();
                                                let restaurant = restaurant.clone();
                                                move |_| {
                                                    let client = client.clone();
                                                    let restaurant = restaurant.clone();
                                                    spawn(async move {
                                                        let verified = !restaurant.verified;
                                                        match client
                                                            .update_restaurant_verified(&restaurant.id, verified)
                                                            .await
                                                        {
                                                            Ok(()) => {
                                                                // The owner is notified only on the
                                                                // unverified to verified edge.
                                                                if verified {
                                                                    if let Err(err) =
                                                                        client.send_verification(&restaurant.owner).await
                                                                    {
                                                                        tracing::warn!(
                                                                            "verification notice for {} failed: {err}",
                                                                            restaurant.owner
                                                                        );
                                                                    }
                                                                }
                                                                show_success(&mut toasts, "Verification status updated");
                                                                load_restaurants(restaurants, client, toasts).await;
                                                            }
                                                            Err(err) => {
                                                                show_error(
                                                                    &mut toasts,
                                                                    error_message(&err, "Failed to update verification"),
                                                                );
                                                            }
                                                        }
                                                    });
                                                }
                                            },
                                            if restaurant.verified { "Verified" } else { "Unverified" }
                                        }
                                    }
                                    td {
                                        div {
                                            class: "row-actions",
                                            Button {
                                                variant: ButtonVariant::Outline,
                                                onclick: {
                                                    let client = client.clone();
                                                    let restaurant = restaurant.clone();
                                                    move |_| {
                                                        let client = client.clone();
                                                        let restaurant = restaurant.clone();
                                                        map_target.set(Some(restaurant.clone()));
                                                        map_point.set(None);
                                                        geocoding.set(true);
                                                        spawn(async move {
                                                            match client.geocode(&restaurant.location).await {
                                                                Ok(Some(point)) => map_point.set(Some(point)),
                                                                Ok(None) => {
                                                                    show_error(&mut toasts, "Location not found");
                                                                }
                                                                Err(_) => {
                                                                    show_error(&mut toasts, "Failed to fetch location data");
                                                                }
                                                            }
                                                            geocoding.set(false);
                                                        });
                                                    }
                                                },
                                                "View Map"
                                            }
                                            Button {
                                                variant: ButtonVariant::Destructive,
                                                onclick: {
                                                    let restaurant = restaurant.clone();
                                                    move |_| pending_delete.set(Some(restaurant.clone()))
                                                },
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                Pagination {
                    page: view.page,
                    total_pages: view.total_pages,
                    on_change: move |page| restaurants.write().set_page(page),
                }
            }

            if show_add() {
                ModalOverlay {
                    on_close: move |_| close_add(),
                    div {
                        class: "modal-body",
                        h2 { class: "modal-title", "Add New Restaurant" }
                        form {
                            onsubmit: handle_add,
                            div {
                                class: "modal-field",
                                Label { html_for: "new-restaurant-name", "Name" }
                                Input {
                                    id: "new-restaurant-name",
                                    value: draft().name,
                                    required: true,
                                    oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                                }
                            }
                            div {
                                class: "modal-field",
                                Label { html_for: "new-restaurant-owner", "Owner" }
                                div {
                                    class: "owner-picker",
                                    Input {
                                        id: "new-restaurant-owner",
                                        placeholder: "Search users...",
                                        value: owner_query(),
                                        oninput: search_owner,
                                    }
                                    if !owner_results().is_empty() {
                                        div {
                                            class: "owner-results",
                                            for hit in owner_results() {
                                                div {
                                                    key: "{hit.id}",
                                                    class: "owner-hit",
                                                    onclick: {
                                                        let hit = hit.clone();
                                                        move |_| {
                                                            draft.write().owner = hit.id.clone();
                                                            owner_query.set(hit.name.clone());
                                                            owner_results.set(Vec::new());
                                                        }
                                                    },
                                                    "{hit.name} ({hit.id})"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            div {
                                class: "modal-field",
                                Label { html_for: "new-restaurant-location", "Location" }
                                Input {
                                    id: "new-restaurant-location",
                                    value: draft().location,
                                    required: true,
                                    oninput: move |evt: FormEvent| draft.write().location = evt.value(),
                                }
                            }
                            div {
                                class: "modal-actions",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| close_add(),
                                    "Cancel"
                                }
                                Button { r#type: "submit", "Add Restaurant" }
                            }
                        }
                    }
                }
            }

            if let Some(target) = map_target() {
                ModalOverlay {
                    class: "modal-wide",
                    on_close: move |_| {
                        map_target.set(None);
                        map_point.set(None);
                    },
                    div {
                        class: "modal-body",
                        h2 { class: "modal-title", "{target.name} Location" }
                        div {
                            class: "map-area",
                            if geocoding() {
                                Spinner { label: "Loading map..." }
                            } else if let Some(point) = map_point() {
                                iframe {
                                    class: "map-frame",
                                    title: "{target.name}",
                                    src: "{point.embed_url()}",
                                }
                                a {
                                    class: "map-link",
                                    href: "{point.osm_url()}",
                                    target: "_blank",
                                    "Open in OpenStreetMap"
                                }
                            } else {
                                p { class: "map-missing", "Could not find coordinates for this location" }
                            }
                        }
                        div {
                            class: "modal-actions",
                            Button {
                                onclick: move |_| {
                                    map_target.set(None);
                                    map_point.set(None);
                                },
                                "Close"
                            }
                        }
                    }
                }
            }

            if let Some(restaurant) = pending_delete() {
                ConfirmDialog {
                    title: "Delete Restaurant",
                    message: "Are you sure you want to delete this restaurant?",
                    on_confirm: {
                        let client = client.clone();
                        let id = restaurant.id.clone();
                        move |_| {
                            let client = client.clone();
                            let id = id.clone();
                            pending_delete.set(None);
                            spawn(async move {
                                match client.delete_restaurant(&id).await {
                                    Ok(()) => {
                                        show_success(&mut toasts, "Restaurant deleted successfully");
                                        load_restaurants(restaurants, client, toasts).await;
                                    }
                                    Err(err) => {
                                        show_error(
                                            &mut toasts,
                                            error_message(&err, "Failed to delete restaurant"),
                                        );
                                    }
                                }
                            });
                        }
                    },
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
