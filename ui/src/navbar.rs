use dioxus::prelude::*;

use crate::UI_CSS;

/// Top navigation bar. Platform packages fill it with their own links.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        header {
            class: "navbar",
            span { class: "navbar-brand", "Admin" }
            nav {
                class: "navbar-links",
                {children}
            }
        }
    }
}
