//! Registration page view. A successful registration does not sign the
//! visitor in; they are sent to the login page.

use api::{RegisterRequest, Role};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{use_client, use_session};

use super::error_message;
use crate::Route;

#[component]
pub fn Register() -> Element {
    let session = use_session();
    let client = use_client();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Customer);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    {
        let state = session.read();
        if !state.loading && state.session.is_authenticated() {
            nav.replace(Route::Users {});
        }
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if password().len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }

            let request = RegisterRequest {
                name: n,
                email: e,
                phone: phone().trim().to_string(),
                password: password(),
                role: role(),
            };

            loading.set(true);
            match client.register(&request).await {
                Ok(()) => {
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(error_message(&err, "Registration failed")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Create Account" }
                p { class: "auth-subtitle", "Register to access the dashboard" }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    if let Some(err) = error() {
                        div { class: "auth-error", "{err}" }
                    }

                    div {
                        class: "auth-field",
                        Label { html_for: "register-name", "Name" }
                        Input {
                            id: "register-name",
                            r#type: "text",
                            placeholder: "Full name",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }

                    div {
                        class: "auth-field",
                        Label { html_for: "register-email", "Email" }
                        Input {
                            id: "register-email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "auth-field",
                        Label { html_for: "register-phone", "Phone" }
                        Input {
                            id: "register-phone",
                            r#type: "tel",
                            placeholder: "Phone number",
                            value: phone(),
                            oninput: move |evt: FormEvent| phone.set(evt.value()),
                        }
                    }

                    div {
                        class: "auth-field",
                        Label { html_for: "register-password", "Password" }
                        Input {
                            id: "register-password",
                            r#type: "password",
                            placeholder: "Password (min 8 characters)",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    div {
                        class: "auth-field",
                        Label { html_for: "register-role", "Account Type" }
                        select {
                            id: "register-role",
                            class: "input",
                            value: "{role().as_str()}",
                            onchange: move |evt| {
                                if let Some(selected) = Role::from_str(&evt.value()) {
                                    role.set(selected);
                                }
                            },
                            for choice in Role::all() {
                                option {
                                    key: "{choice.as_str()}",
                                    value: "{choice.as_str()}",
                                    "{choice.label()}"
                                }
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign Up" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
