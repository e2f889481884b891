//! Newsletter template management: searchable template table, a create or
//! edit modal whose markdown content is previewed live, delete with
//! confirmation, and the broadcast modal.

use api::{ApiClient, NotificationTemplate, TemplateDraft};
use dioxus::prelude::*;
use ui::components::{
    show_error, show_success, use_toasts, Button, ButtonVariant, ConfirmDialog, Input, Label,
    ModalOverlay, SearchBox, Spinner, ToastStack,
};
use ui::{field_contains, markdown_to_html, use_client, ResourceList};

use super::error_message;

async fn load_templates(
    mut list: Signal<ResourceList<NotificationTemplate>>,
    client: ApiClient,
    mut toasts: Signal<ToastStack>,
) {
    let ticket = list.write().begin_fetch();
    match client.fetch_templates().await {
        Ok(templates) => {
            list.write().apply(ticket, templates);
        }
        Err(err) => {
            list.write().fail(ticket);
            show_error(&mut toasts, error_message(&err, "Failed to fetch templates"));
        }
    }
}

fn match_template(template: &NotificationTemplate, query: &str) -> bool {
    field_contains(&template.name, query) || field_contains(&template.subject, query)
}

#[component]
pub fn Newsletter() -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut templates = use_signal(ResourceList::<NotificationTemplate>::new);
    let mut editor_open = use_signal(|| false);
    let mut edit_id = use_signal(|| Option::<String>::None);
    let mut draft = use_signal(TemplateDraft::default);
    let mut pending_delete = use_signal(|| Option::<NotificationTemplate>::None);
    let mut send_open = use_signal(|| false);
    let mut send_choice = use_signal(String::new);

    {
        let client = client.clone();
        let _ = use_resource(move || {
            let client = client.clone();
            async move { load_templates(templates, client, toasts).await }
        });
    }

    let (rows, all_templates, query, initial_load) = {
        let list = templates.read();
        (
            list.filtered(match_template),
            list.items().to_vec(),
            list.query().to_string(),
            list.is_loading() && list.items().is_empty(),
        )
    };

    let handle_submit = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                let result = match edit_id() {
                    Some(id) => client.update_template(&id, &draft()).await,
                    None => client.create_template(&draft()).await,
                };
                match result {
                    Ok(()) => {
                        let verb = if edit_id().is_some() { "updated" } else { "created" };
                        show_success(&mut toasts, format!("Template {verb} successfully"));
                        editor_open.set(false);
                        edit_id.set(None);
                        draft.set(TemplateDraft::default());
                        load_templates(templates, client, toasts).await;
                    }
                    Err(err) => {
                        let verb = if edit_id().is_some() { "update" } else { "create" };
                        show_error(
                            &mut toasts,
                            error_message(&err, &format!("Failed to {verb} template")),
                        );
                    }
                }
            });
        }
    };

    let handle_send = {
        let client = client.clone();
        move |_| {
            let choice = send_choice();
            if choice.is_empty() {
                show_error(&mut toasts, "Please select a template");
                return;
            }
            let client = client.clone();
            spawn(async move {
                match client.send_template(&choice).await {
                    Ok(()) => {
                        show_success(&mut toasts, "Notifications sent successfully");
                        send_open.set(false);
                        send_choice.set(String::new());
                    }
                    Err(err) => {
                        show_error(&mut toasts, error_message(&err, "Failed to send notifications"));
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "page-head",
                h1 { class: "page-title", "Newsletter Management" }
                div {
                    class: "toolbar-actions",
                    Button {
                        onclick: move |_| {
                            edit_id.set(None);
                            draft.set(TemplateDraft::default());
                            editor_open.set(true);
                        },
                        "Create Template"
                    }
                    Button {
                        onclick: move |_| send_open.set(true),
                        "Notify Users"
                    }
                }
            }

            div {
                class: "toolbar",
                SearchBox {
                    value: query,
                    placeholder: "Search templates...",
                    oninput: move |evt: FormEvent| templates.write().set_query(evt.value()),
                }
            }

            if initial_load {
                Spinner { label: "Loading templates..." }
            } else {
                div {
                    class: "table-wrap",
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Subject" }
                                th { "Last Updated" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for template in rows {
                                tr {
                                    key: "{template.id}",
                                    td { "{template.name}" }
                                    td { "{template.subject}" }
                                    td { {template.updated_at.format("%Y-%m-%d").to_string()} }
                                    td {
                                        div {
                                            class: "row-actions",
                                            Button {
                                                variant: ButtonVariant::Outline,
                                                onclick: {
                                                    let template = template.clone();
                                                    move |_| {
                                                        edit_id.set(Some(template.id.clone()));
                                                        draft.set(TemplateDraft {
                                                            name: template.name.clone(),
                                                            subject: template.subject.clone(),
                                                            content: template.content.clone(),
                                                        });
                                                        editor_open.set(true);
                                                    }
                                                },
                                                "Edit"
                                            }
                                            Button {
                                                variant: ButtonVariant::Destructive,
                                                onclick: {
                                                    let template = template.clone();
                                                    move |_| pending_delete.set(Some(template.clone()))
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
            }

            if editor_open() {
                ModalOverlay {
                    class: "modal-wide",
                    on_close: move |_| editor_open.set(false),
                    div {
                        class: "modal-body",
                        h2 {
                            class: "modal-title",
                            if edit_id().is_some() { "Edit Template" } else { "Create New Template" }
                        }
                        form {
                            onsubmit: handle_submit,
                            div {
                                class: "modal-field",
                                Label { html_for: "template-name", "Template Name" }
                                Input {
                                    id: "template-name",
                                    value: draft().name,
                                    required: true,
                                    oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                                }
                            }
                            div {
                                class: "modal-field",
                                Label { html_for: "template-subject", "Subject" }
                                Input {
                                    id: "template-subject",
                                    value: draft().subject,
                                    required: true,
                                    oninput: move |evt: FormEvent| draft.write().subject = evt.value(),
                                }
                            }
                            div {
                                class: "modal-field",
                                Label { html_for: "template-content", "Content" }
                                div {
                                    class: "editor-split",
                                    textarea {
                                        id: "template-content",
                                        class: "input content-editor",
                                        rows: 12,
                                        value: "{draft().content}",
                                        oninput: move |evt: FormEvent| draft.write().content = evt.value(),
                                    }
                                    div {
                                        class: "markdown-preview",
                                        dangerous_inner_html: markdown_to_html(&draft().content),
                                    }
                                }
                            }
                            div {
                                class: "modal-actions",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| editor_open.set(false),
                                    "Cancel"
                                }
                                Button {
                                    r#type: "submit",
                                    if edit_id().is_some() { "Update Template" } else { "Create Template" }
                                }
                            }
                        }
                    }
                }
            }

            if send_open() {
                ModalOverlay {
                    on_close: move |_| send_open.set(false),
                    div {
                        class: "modal-body",
                        h2 { class: "modal-title", "Send Notifications" }
                        div {
                            class: "modal-field",
                            Label { html_for: "send-template", "Select Template" }
                            select {
                                id: "send-template",
                                class: "input",
                                value: "{send_choice}",
                                onchange: move |evt| send_choice.set(evt.value()),
                                option { value: "", "Select a template" }
                                for template in all_templates.iter() {
                                    option {
                                        key: "{template.id}",
                                        value: "{template.id}",
                                        "{template.name}"
                                    }
                                }
                            }
                        }
                        div {
                            class: "modal-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| send_open.set(false),
                                "Cancel"
                            }
                            Button {
                                onclick: handle_send,
                                "Send Notifications"
                            }
                        }
                    }
                }
            }

            if let Some(template) = pending_delete() {
                ConfirmDialog {
                    title: "Delete Template",
                    message: "Are you sure you want to delete this template?",
                    on_confirm: {
                        let client = client.clone();
                        let id = template.id.clone();
                        move |_| {
                            let client = client.clone();
                            let id = id.clone();
                            pending_delete.set(None);
                            spawn(async move {
                                match client.delete_template(&id).await {
                                    Ok(()) => {
                                        show_success(&mut toasts, "Template deleted successfully");
                                        load_templates(templates, client, toasts).await;
                                    }
                                    Err(err) => {
                                        show_error(
                                            &mut toasts,
                                            error_message(&err, "Failed to delete template"),
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
