//! Transaction overview: searchable settlement list with stat cards, a CSV
//! report, a detail modal with receipt download, and the receipt email
//! action. Links out to the per-user and per-restaurant aggregation pages.

use api::report::transaction_receipt_html;
use api::{ApiClient, TableReport, Transaction};
use chrono::Utc;
use dioxus::prelude::*;
use ui::components::{
    show_error, show_success, use_toasts, Button, ButtonVariant, ModalOverlay, SearchBox, Spinner,
    StatCard,
};
use ui::icons::{FaClock, FaCreditCard, FaMagnifyingGlass, FaMoneyBillWave, FaXmark};
use ui::{field_contains, save_file, use_client, Icon, ResourceList};

use super::error_message;
use crate::Route;

async fn load_transactions(
    mut list: Signal<ResourceList<Transaction>>,
    client: ApiClient,
) {
    let ticket = list.write().begin_fetch();
    match client.fetch_transactions().await {
        Ok(transactions) => {
            list.write().apply(ticket, transactions);
        }
        Err(err) => {
            list.write().fail(ticket);
            tracing::error!("failed to fetch transactions: {err}");
        }
    }
}

fn match_transaction(tx: &Transaction, query: &str) -> bool {
    field_contains(&tx.user_name, query)
}

#[component]
pub fn Transactions() -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut transactions = use_signal(ResourceList::<Transaction>::new);
    let mut selected = use_signal(|| Option::<Transaction>::None);

    {
        let client = client.clone();
        let _ = use_resource(move || {
            let client = client.clone();
            async move { load_transactions(transactions, client).await }
        });
    }

    let (total, today_total, amount_total, rows, query, initial_load) = {
        let list = transactions.read();
        let today = Utc::now().date_naive();
        (
            list.items().len(),
            list.items()
                .iter()
                .filter(|t| t.transaction_date.date_naive() == today)
                .count(),
            list.items().iter().map(|t| t.total_amount).sum::<f64>(),
            list.filtered(match_transaction),
            list.query().to_string(),
            list.is_loading() && list.items().is_empty(),
        )
    };

    let generate_report = move |_| {
        let csv = TableReport::transactions(transactions.read().items()).to_csv();
        let filename = format!("transaction_report_{}.csv", Utc::now().format("%Y-%m-%d"));
        if let Err(err) = save_file(&filename, "text/csv", csv.as_bytes()) {
            show_error(&mut toasts, format!("Failed to save report: {err}"));
        }
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "link-card-row",
                Link {
                    to: Route::UserTransactions {},
                    class: "link-card",
                    h3 { class: "link-card-title", "User Transactions" }
                    Icon { icon: FaMagnifyingGlass, width: 28, height: 28, class: "link-card-icon" }
                }
                Link {
                    to: Route::RestaurantTransactions {},
                    class: "link-card",
                    h3 { class: "link-card-title", "Restaurant Transactions" }
                    Icon { icon: FaMagnifyingGlass, width: 28, height: 28, class: "link-card-icon" }
                }
            }

            div {
                class: "stat-row",
                StatCard {
                    icon: rsx! { Icon { icon: FaCreditCard, width: 20, height: 20 } },
                    label: "Total Transactions",
                    value: "{total}",
                }
                StatCard {
                    icon: rsx! { Icon { icon: FaClock, width: 20, height: 20 } },
                    label: "Today's Transactions",
                    value: "{today_total}",
                }
                StatCard {
                    icon: rsx! { Icon { icon: FaMoneyBillWave, width: 20, height: 20 } },
                    label: "Total Amount",
                    value: "${amount_total:.2}",
                }
            }

            div {
                class: "toolbar",
                SearchBox {
                    value: query,
                    placeholder: "Search by name...",
                    oninput: move |evt: FormEvent| transactions.write().set_query(evt.value()),
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: generate_report,
                    "Generate Report"
                }
            }

            if initial_load {
                Spinner { label: "Loading transactions..." }
            } else {
                div {
                    class: "table-wrap",
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Total Amount" }
                                th { "Date" }
                                th { "Items" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for transaction in rows {
                                tr {
                                    key: "{transaction.id}",
                                    td { "{transaction.user_name}" }
                                    td { "${transaction.total_amount:.2}" }
                                    td { {transaction.transaction_date.format("%Y-%m-%d").to_string()} }
                                    td { "{transaction.item_count()}" }
                                    td {
                                        div {
                                            class: "row-actions",
                                            Button {
                                                variant: ButtonVariant::Outline,
                                                onclick: {
                                                    let transaction = transaction.clone();
                                                    move |_| selected.set(Some(transaction.clone()))
                                                },
                                                "View"
                                            }
                                            Button {
                                                onclick: {
                                                    let client = client.clone();
                                                    let transaction = transaction.clone();
                                                    move |_| {
                                                        let client = client.clone();
                                                        let transaction = transaction.clone();
                                                        spawn(async move {
                                                            let html = transaction_receipt_html(&transaction);
                                                            match client
                                                                .send_receipt(&transaction.user_id, &html)
                                                                .await
                                                            {
                                                                Ok(()) => {
                                                                    show_success(&mut toasts, "Email sent successfully!");
                                                                }
                                                                Err(err) => {
                                                                    show_error(
                                                                        &mut toasts,
                                                                        error_message(&err, "Failed to send email."),
                                                                    );
                                                                }
                                                            }
                                                        });
                                                    }
                                                },
                                                "Send"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(transaction) = selected() {
                ModalOverlay {
                    class: "modal-wide",
                    on_close: move |_| selected.set(None),
                    div {
                        class: "modal-body",
                        div {
                            class: "modal-head",
                            h2 { class: "modal-title", "Transaction Details" }
                            button {
                                class: "modal-close",
                                onclick: move |_| selected.set(None),
                                Icon { icon: FaXmark, width: 18, height: 18 }
                            }
                        }

                        div {
                            class: "detail-grid",
                            div {
                                p { class: "detail-label", "Transaction ID" }
                                p { class: "detail-value", "{transaction.id}" }
                            }
                            div {
                                p { class: "detail-label", "Date" }
                                p {
                                    class: "detail-value",
                                    {transaction.transaction_date.format("%Y-%m-%d").to_string()}
                                }
                            }
                            div {
                                p { class: "detail-label", "Customer Name" }
                                p { class: "detail-value", "{transaction.user_name}" }
                            }
                            div {
                                p { class: "detail-label", "Total Amount" }
                                p { class: "detail-value", "${transaction.total_amount:.2}" }
                            }
                        }

                        for (number, order) in (1..).zip(transaction.orders.iter()) {
                            div {
                                key: "{order.order_id}",
                                class: "order-card",
                                div {
                                    class: "order-head",
                                    h3 { class: "order-title", "Order #{number}" }
                                    span {
                                        class: if order.status.eq_ignore_ascii_case("completed") { "status-badge completed" } else { "status-badge pending" },
                                        "{order.status}"
                                    }
                                }
                                table {
                                    class: "order-items",
                                    thead {
                                        tr {
                                            th { "Item" }
                                            th { "Quantity" }
                                            th { "Price" }
                                            th { "Total" }
                                        }
                                    }
                                    tbody {
                                        for (item_index, item) in order.items.iter().enumerate() {
                                            tr {
                                                key: "{item_index}",
                                                td { "{item.name}" }
                                                td { "{item.quantity}" }
                                                td { "${item.price:.2}" }
                                                td { "${item.line_total():.2}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        div {
                            class: "modal-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| selected.set(None),
                                "Close"
                            }
                            Button {
                                onclick: {
                                    let transaction = transaction.clone();
                                    move |_| {
                                        let html = transaction_receipt_html(&transaction);
                                        let filename = format!("transaction_{}.html", transaction.id);
                                        if let Err(err) = save_file(&filename, "text/html", html.as_bytes()) {
                                            show_error(&mut toasts, format!("Failed to save receipt: {err}"));
                                        }
                                    }
                                },
                                "Download Receipt"
                            }
                        }
                    }
                }
            }
        }
    }
}
