//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{sign_in, use_client, use_session};

use super::error_message;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let client = use_client();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the dashboard
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

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match sign_in(session, client, e, p).await {
                Ok(()) => {
                    nav.push(Route::Users {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(error_message(&err, "Login failed")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Welcome Back" }
                p { class: "auth-subtitle", "Sign in to continue to your account" }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    if let Some(err) = error() {
                        div { class: "auth-error", "{err}" }
                    }

                    div {
                        class: "auth-field",
                        Label { html_for: "login-email", "Email" }
                        Input {
                            id: "login-email",
                            r#type: "email",
                            placeholder: "Enter your email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "auth-field",
                        Label { html_for: "login-password", "Password" }
                        Input {
                            id: "login-password",
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register here" }
                }
            }
        }
    }
}
