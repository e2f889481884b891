//! User administration: list, search, create, change role, toggle
//! verification, delete, and export the collection as a CSV report.

use api::{ApiClient, NewUser, Role, TableReport, User};
use chrono::Utc;
use dioxus::prelude::*;
use ui::components::{
    show_error, show_success, use_toasts, Button, ButtonVariant, ConfirmDialog, Input, Label,
    ModalOverlay, Pagination, SearchBox, Spinner, StatCard, ToastStack,
};
use ui::icons::{FaUserCheck, FaUsers, FaUserShield};
use ui::{field_contains, save_file, use_client, Icon, ResourceList};

use super::error_message;

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

fn match_user(user: &User, query: &str) -> bool {
    field_contains(&user.name, query)
        || field_contains(&user.email, query)
        || field_contains(&user.phone, query)
}

#[component]
pub fn Users() -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut users = use_signal(ResourceList::<User>::new);
    let mut show_add = use_signal(|| false);
    let mut draft = use_signal(NewUser::default);
    let mut pending_delete = use_signal(|| Option::<User>::None);

    {
        let client = client.clone();
        let _ = use_resource(move || {
            let client = client.clone();
            async move { load_users(users, client, toasts).await }
        });
    }

    let (total, verified_total, admin_total, view, query, initial_load) = {
        let list = users.read();
        (
            list.items().len(),
            list.items().iter().filter(|u| u.verified).count(),
            list.items().iter().filter(|u| u.role == Role::Admin).count(),
            list.page_view(match_user),
            list.query().to_string(),
            list.is_loading() && list.items().is_empty(),
        )
    };

    let generate_report = move |_| {
        let csv = TableReport::users(users.read().items()).to_csv();
        let filename = format!("user_report_{}.csv", Utc::now().format("%Y-%m-%d"));
        if let Err(err) = save_file(&filename, "text/csv", csv.as_bytes()) {
            show_error(&mut toasts, format!("Failed to save report: {err}"));
        }
    };

    let handle_add = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                match client.create_user(&draft()).await {
                    Ok(()) => {
                        show_success(&mut toasts, "User added successfully");
                        show_add.set(false);
                        draft.set(NewUser::default());
                        load_users(users, client, toasts).await;
                    }
                    Err(err) => {
                        show_error(&mut toasts, error_message(&err, "Failed to add user"));
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "User Management" }

            div {
                class: "stat-row",
                StatCard {
                    icon: rsx! { Icon { icon: FaUsers, width: 20, height: 20 } },
                    label: "Total Users",
                    value: "{total}",
                }
                StatCard {
                    icon: rsx! { Icon { icon: FaUserCheck, width: 20, height: 20 } },
                    label: "Verified Users",
                    value: "{verified_total}",
                }
                StatCard {
                    icon: rsx! { Icon { icon: FaUserShield, width: 20, height: 20 } },
                    label: "Admins",
                    value: "{admin_total}",
                }
            }

            div {
                class: "toolbar",
                SearchBox {
                    value: query,
                    placeholder: "Search users...",
                    oninput: move |evt: FormEvent| users.write().set_query(evt.value()),
                }
                div {
                    class: "toolbar-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: generate_report,
                        "Generate Report"
                    }
                    Button {
                        onclick: move |_| show_add.set(true),
                        "Add User"
                    }
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
                                th { "Role" }
                                th { "Verified" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for user in view.items {
                                tr {
                                    key: "{user.id}",
                                    td { "{user.name}" }
                                    td { "{user.email}" }
                                    td { "{user.phone}" }
                                    td {
                                        select {
                                            class: "input role-select",
                                            value: "{user.role.as_str()}",
                                            onchange: {
                                                let client = client.clone();
                                                let id = user.id.clone();
                                                move |evt: FormEvent| {
                                                    let Some(role) = Role::from_str(&evt.value()) else {
                                                        return;
                                                    };
                                                    let client = client.clone();
                                                    let id = id.clone();
                                                    spawn(async move {
                                                        match client.update_user_role(&id, role).await {
                                                            Ok(()) => {
                                                                show_success(&mut toasts, "Role updated successfully");
                                                                load_users(users, client, toasts).await;
                                                            }
                                                            Err(err) => {
                                                                show_error(
                                                                    &mut toasts,
                                                                    error_message(&err, "Failed to update role"),
                                                                );
                                                            }
                                                        }
                                                    });
                                                }
                                            },
                                            for role in Role::all() {
                                                option {
                                                    key: "{role.as_str()}",
                                                    value: "{role.as_str()}",
                                                    "{role.label()}"
                                                }
                                            }
                                        }
                                    }
                                    td {
                                        button {
                                            class: if user.verified { "verify-pill verified" } else { "verify-pill unverified" },
                                            onclick: {
                                                let client = client.clone();
                                                let id = user.id.clone();
                                                let verified = user.verified;
                                                move |_| {
                                                    let client = client.clone();
                                                    let id = id.clone();
                                                    spawn(async move {
                                                        match client.update_user_verified(&id, !verified).await {
                                                            Ok(()) => {
                                                                show_success(&mut toasts, "Verification status updated");
                                                                load_users(users, client, toasts).await;
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
                                            if user.verified { "Verified" } else { "Unverified" }
                                        }
                                    }
                                    td {
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            onclick: {
                                                let user = user.clone();
                                                move |_| pending_delete.set(Some(user.clone()))
                                            },
                                            "Delete"
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
                    on_change: move |page| users.write().set_page(page),
                }
            }

            if show_add() {
                ModalOverlay {
                    on_close: move |_| show_add.set(false),
                    div {
                        class: "modal-body",
                        h2 { class: "modal-title", "Add New User" }
                        form {
                            onsubmit: handle_add,
                            div {
                                class: "modal-field",
                                Label { html_for: "new-user-name", "Name" }
                                Input {
                                    id: "new-user-name",
                                    value: draft().name,
                                    required: true,
                                    oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                                }
                            }
                            div {
                                class: "modal-field",
                                Label { html_for: "new-user-email", "Email" }
                                Input {
                                    id: "new-user-email",
                                    r#type: "email",
                                    value: draft().email,
                                    required: true,
                                    oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                                }
                            }
                            div {
                                class: "modal-field",
                                Label { html_for: "new-user-phone", "Phone" }
                                Input {
                                    id: "new-user-phone",
                                    r#type: "tel",
                                    value: draft().phone,
                                    required: true,
                                    oninput: move |evt: FormEvent| draft.write().phone = evt.value(),
                                }
                            }
                            div {
                                class: "modal-field",
                                Label { html_for: "new-user-password", "Password" }
                                Input {
                                    id: "new-user-password",
                                    r#type: "password",
                                    value: draft().password,
                                    required: true,
                                    oninput: move |evt: FormEvent| draft.write().password = evt.value(),
                                }
                            }
                            div {
                                class: "modal-field",
                                Label { html_for: "new-user-role", "Role" }
                                select {
                                    id: "new-user-role",
                                    class: "input",
                                    value: "{draft().role.as_str()}",
                                    onchange: move |evt| {
                                        if let Some(role) = Role::from_str(&evt.value()) {
                                            draft.write().role = role;
                                        }
                                    },
                                    for role in Role::all() {
                                        option {
                                            key: "{role.as_str()}",
                                            value: "{role.as_str()}",
                                            "{role.label()}"
                                        }
                                    }
                                }
                            }
                            div {
                                class: "modal-actions",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| show_add.set(false),
                                    "Cancel"
                                }
                                Button { r#type: "submit", "Add User" }
                            }
                        }
                    }
                }
            }

            if let Some(user) = pending_delete() {
                ConfirmDialog {
                    title: "Delete User",
                    message: "Are you sure you want to delete this user?",
                    on_confirm: {
                        let client = client.clone();
                        let id = user.id.clone();
                        move |_| {
                            let client = client.clone();
                            let id = id.clone();
                            pending_delete.set(None);
                            spawn(async move {
                                match client.delete_user(&id).await {
                                    Ok(()) => {
                                        show_success(&mut toasts, "User deleted successfully");
                                        load_users(users, client, toasts).await;
                                    }
                                    Err(err) => {
                                        show_error(
                                            &mut toasts,
                                            error_message(&err, "Failed to delete user"),
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
