//! Per-restaurant transaction aggregation. Mirrors the per-user page, but
//! settles a restaurant's order feed; the restaurant's own id and name go
//! into the settlement's user fields.

use api::{ApiClient, NewTransaction, Order, Restaurant};
use dioxus::prelude::*;
use ui::components::{
    show_error, show_success, use_toasts, Button, ModalOverlay, Pagination, SearchBox, Spinner,
    ToastStack,
};
use ui::icons::FaXmark;
use ui::{field_contains, use_client, Icon, ResourceList};

use super::{error_message, short_order_id};
use crate::Route;

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

fn match_name(restaurant: &Restaurant, query: &str) -> bool {
    field_contains(&restaurant.name, query)
}

/// Orders carry no restaurant id, so a count can only be stated for the
/// restaurant whose order feed is currently loaded.
fn orders_for(selected: Option<&Restaurant>, loaded: &[Order], restaurant_id: &str) -> usize {
    match selected {
        Some(sel) if sel.id == restaurant_id => loaded.len(),
        _ => 0,
    }
}

#[component]
pub fn RestaurantTransactions() -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut restaurants = use_signal(ResourceList::<Restaurant>::new);
    let mut orders = use_signal(ResourceList::<Order>::new);
    let mut selected = use_signal(|| Option::<Restaurant>::None);

    {
        let client = client.clone();
        let _ = use_resource(move || {
            let client = client.clone();
            async move { load_restaurants(restaurants, client, toasts).await }
        });
    }

    let (view, query, initial_load) = {
        let list = restaurants.read();
        (
            list.page_view(match_name),
            list.query().to_string(),
            list.is_loading() && list.items().is_empty(),
        )
    };

    let (loaded_orders, orders_loading) = {
        let list = orders.read();
        if list.is_loading() {
            (Vec::new(), true)
        } else {
            (list.items().to_vec(), false)
        }
    };
    let orders_total: f64 = loaded_orders.iter().map(|o| o.total_amount).sum();
    let selection = selected();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-head",
                h1 { class: "page-title", "Restaurant Transactions" }
                Link {
                    to: Route::Transactions {},
                    class: "back-link",
                    "Back to Overview"
                }
            }

            div {
                class: "toolbar",
                SearchBox {
                    value: query,
                    placeholder: "Search by restaurant name...",
                    oninput: move |evt: FormEvent| restaurants.write().set_query(evt.value()),
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
                                th { "Owner" }
                                th { "Location" }
                                th { "Total Orders" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for restaurant in view.items {
                                tr {
                                    key: "{restaurant.id}",
                                    class: "clickable-row",
                                    onclick: {
                                        let client = client.clone();
                                        let restaurant = restaurant.clone();
                                        move |_| {
                                            let client = client.clone();
                                            let restaurant_id = restaurant.id.clone();
                                            selected.set(Some(restaurant.clone()));
                                            spawn(async move {
                                                let ticket = orders.write().begin_fetch();
                                                match client.fetch_restaurant_orders(&restaurant_id).await {
                                                    Ok(fetched) => {
                                                        orders.write().apply(ticket, fetched);
                                                    }
                                                    Err(err) => {
                                                        orders.write().fail(ticket);
                                                        show_error(
                                                            &mut toasts,
                                                            error_message(&err, "Failed to fetch orders"),
                                                        );
                                                    }
                                                }
                                            });
                                        }
                                    },
                                    td { "{restaurant.name}" }
                                    td { "{restaurant.owner}" }
                                    td { "{restaurant.location}" }
                                    td {
                                        {orders_for(selection.as_ref(), &loaded_orders, &restaurant.id).to_string()}
                                    }
                                    td {
                                        button { class: "link-action", "View Details" }
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

            if let Some(restaurant) = selected() {
                ModalOverlay {
                    class: "modal-wide",
                    on_close: move |_| selected.set(None),
                    div {
                        class: "modal-body",
                        div {
                            class: "modal-head",
                            h2 { class: "modal-title", "{restaurant.name}'s Orders" }
                            button {
                                class: "modal-close",
                                onclick: move |_| selected.set(None),
                                Icon { icon: FaXmark, width: 18, height: 18 }
                            }
                        }

                        if orders_loading {
                            Spinner { label: "Loading orders..." }
                        } else {
                            table {
                                class: "data-table order-table",
                                thead {
                                    tr {
                                        th { "Order ID" }
                                        th { "Date" }
                                        th { "Items" }
                                        th { "Total" }
                                        th { "Status" }
                                    }
                                }
                                tbody {
                                    for order in loaded_orders.iter() {
                                        tr {
                                            key: "{order.id}",
                                            td { {short_order_id(&order.id)} }
                                            td { {order.created_at.format("%Y-%m-%d").to_string()} }
                                            td {
                                                for item in order.items.iter() {
                                                    div {
                                                        key: "{item.name}",
                                                        class: "order-item-line",
                                                        span { "{item.name}" }
                                                        span {
                                                            class: "order-item-meta",
                                                            "x{item.quantity} (${item.price:.2})"
                                                        }
                                                    }
                                                }
                                            }
                                            td { "${order.total_amount:.2}" }
                                            td {
                                                span { class: "status-badge info", "{order.status}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        div {
                            class: "modal-foot",
                            span { class: "orders-total", "Total: ${orders_total:.2}" }
                            Button {
                                onclick: {
                                    let client = client.clone();
                                    let restaurant = restaurant.clone();
                                    let loaded_orders = loaded_orders.clone();
                                    move |_| {
                                        let client = client.clone();
                                        let payload = NewTransaction::from_orders(
                                            &restaurant.id,
                                            &restaurant.name,
                                            &loaded_orders,
                                        );
                                        spawn(async move {
                                            match client.create_transaction(&payload).await {
                                                Ok(()) => {
                                                    show_success(&mut toasts, "Transaction generated successfully");
                                                    selected.set(None);
                                                }
                                                Err(err) => {
                                                    show_error(
                                                        &mut toasts,
                                                        error_message(&err, "Failed to generate transaction"),
                                                    );
                                                }
                                            }
                                        });
                                    }
                                },
                                "Generate Transaction"
                            }
                        }
                    }
                }
            }
        }
    }
}
