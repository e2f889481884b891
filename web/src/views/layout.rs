use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Spinner};
use ui::{guard_state, icons, sign_out, use_session, GuardState, Icon, Navbar, Sidebar};

use crate::Route;

/// Chrome around every protected view: top bar, side navigation and the
/// routed content. Unauthenticated visitors are sent to the login screen;
/// nothing protected renders until the persisted session is restored.
#[component]
pub fn DashboardLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let rendered = match guard_state(&session.read()) {
        GuardState::Loading => rsx! {
            Spinner { label: "Restoring session..." }
        },
        GuardState::Unauthenticated => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardState::Authenticated => {
            let name = session
                .read()
                .session
                .identity
                .as_ref()
                .map(|identity| identity.name.clone())
                .unwrap_or_default();
            rsx! {
                Navbar {
                    span { class: "navbar-user", "{name}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            sign_out(session);
                            nav.replace(Route::Login {});
                        },
                        "Sign out"
                    }
                }
                div {
                    class: "dashboard-shell",
                    Sidebar {
                        Link {
                            to: Route::Users {},
                            class: "sidebar-link",
                            active_class: "active",
                            Icon { icon: icons::FaUsers, width: 16, height: 16 }
                            span { "Manage Users" }
                        }
                        Link {
                            to: Route::Transactions {},
                            class: "sidebar-link",
                            active_class: "active",
                            Icon { icon: icons::FaDollarSign, width: 16, height: 16 }
                            span { "Transactions" }
                        }
                        Link {
                            to: Route::Restaurants {},
                            class: "sidebar-link",
                            active_class: "active",
                            Icon { icon: icons::FaStore, width: 16, height: 16 }
                            span { "Restaurants" }
                        }
                        Link {
                            to: Route::Newsletter {},
                            class: "sidebar-link",
                            active_class: "active",
                            Icon { icon: icons::FaEnvelope, width: 16, height: 16 }
                            span { "Newsletter" }
                        }
                    }
                    main {
                        class: "dashboard-main",
                        Outlet::<Route> {}
                    }
                }
            }
        }
    };
    rendered
}
