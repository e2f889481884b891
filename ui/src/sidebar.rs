use dioxus::prelude::*;

use crate::UI_CSS;

/// Dashboard side navigation. Platform packages supply the routed links
/// so this crate stays independent of any concrete route table.
#[component]
pub fn Sidebar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        aside {
            class: "sidebar",
            div { class: "sidebar-brand", "Admin Panel" }
            nav {
                class: "sidebar-nav",
                {children}
            }
        }
    }
}
