//! Per-user transaction aggregation: pick a user, review their open
//! orders, and settle them into a transaction.

use api::{ApiClient, NewTransaction, Order, User};
use dioxus::prelude::*;
use ui::components::{
    show_error, show_success, use_toasts, Button, ModalOverlay, Pagination, SearchBox, Spinner,
    ToastStack,
};
use ui::icons::FaXmark;
use ui::{field_contains, use_client, Icon, ResourceList};

use super::{error_message, short_order_id};
use crate::Route;

async fn load_users(
    mut list: Signal<ResourceList<User>>,
    client: ApiClient,
    mut toasts: Signal<ToastStack>,
) {
    let ticket = list.write().begin_fetch();
    match client.fetch_users().await {
        Ok(users) => {
            list.write().apply(ticket, users);
        }
        Err(err) => {
            list.write().fail(ticket);
            show_error(&mut toasts, error_message(&err, "Failed to fetch users"));
        }
    }
}

fn match_name(user: &User, query: &str) -> bool {
    field_contains(&user.name, query)
}

fn orders_for(orders: &[Order], user_id: &str) -> usize {
    orders.iter().filter(|o| o.user_id == user_id).count()
}

#[component]
pub fn UserTransactions() -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut users = use_signal(ResourceList::<User>::new);
    let mut orders = use_signal(ResourceList::<Order>::new);
    let mut selected = use_signal(|| Option::<User>::None);

    {
        let client = client.clone();
        let _ = use_resource(move || {
            let client = client.clone();
            async move { load_users(users, client, toasts).await }
        });
    }

    let (view, query, initial_load) = {
        let list = users.read();
        (
            list.page_view(match_name),
            list.query().to_string(),
            list.is_loading() && list.items().is_empty(),
        )
    };

    // While an order fetch is in flight the previous user's orders are
    // hidden, so the count column and the modal never show another user's
    // data.
    let (loaded_orders, orders_loading) = {
        let list = orders.read();
        if list.is_loading() {
            (Vec::new(), true)
        } else {
            (list.items().to_vec(), false)
        }
    };
    let orders_total: f64 = loaded_orders.iter().map(|o| o.total_amount).sum();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-head",
                h1 { class: "page-title", "User Transactions" }
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
                    placeholder: "Search by name...",
                    oninput: move |evt: FormEvent| users.write().set_query(evt.value()),
                }
            }

            if initial_load {
                Spinner { label: "Loading users..." }
            } else {
                div {
                    class: "table-wrap",
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Phone" }
                                th { "Total Orders" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for user in view.items {
                                tr {
                                    key: "{user.id}",
                                    class: "clickable-row",
                                    onclick: {
                                        let client = client.clone();
                                        let user = user.clone();
                                        move |_| {
                                            let client = client.clone();
                                            let user_id = user.id.clone();
                                            selected.set(Some(user.clone()));
                                            spawn(async move {
                                                let ticket = orders.write().begin_fetch();
                                                match client.fetch_user_orders(&user_id).await {
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
                                    td { "{user.name}" }
                                    td { "{user.email}" }
                                    td { "{user.phone}" }
                                    td { {orders_for(&loaded_orders, &user.id).to_string()} }
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
                    on_change: move |page| users.write().set_page(page),
                }
            }

            if let Some(user) = selected() {
                ModalOverlay {
                    class: "modal-wide",
                    on_close: move |_| selected.set(None),
                    div {
                        class: "modal-body",
                        div {
                            class: "modal-head",
                            h2 { class: "modal-title", "{user.name}'s Orders" }
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
                                    let user = user.clone();
                                    let loaded_orders = loaded_orders.clone();
                                    move |_| {
                                        let client = client.clone();
                                        let payload = NewTransaction::from_orders(
                                            &user.id,
                                            &user.name,
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
