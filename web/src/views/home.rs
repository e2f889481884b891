use dioxus::prelude::*;
use ui::use_session;

/// Profile card for the signed-in administrator.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let state = session.read();
    let Some(identity) = state.session.identity.clone() else {
        return rsx! {};
    };
    drop(state);

    rsx! {
        div {
            class: "page",
            div {
                class: "profile-card",
                h1 { class: "page-title", "User Profile" }
                div {
                    class: "profile-row",
                    span { class: "profile-label", "Name:" }
                    span { "{identity.name}" }
                }
                div {
                    class: "profile-row",
                    span { class: "profile-label", "Email:" }
                    span { "{identity.email}" }
                }
                if !identity.phone.is_empty() {
                    div {
                        class: "profile-row",
                        span { class: "profile-label", "Phone:" }
                        span { "{identity.phone}" }
                    }
                }
                div {
                    class: "profile-row",
                    span { class: "profile-label", "User Type:" }
                    span { class: "profile-role", "{identity.role}" }
                }
            }
        }
    }
}
