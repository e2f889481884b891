use dioxus::prelude::*;

/// Summary figure shown above the collection tables.
#[component]
pub fn StatCard(icon: Element, label: String, value: String) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div { class: "stat-icon", {icon} }
            div {
                class: "stat-text",
                span { class: "stat-value", "{value}" }
                span { class: "stat-label", "{label}" }
            }
        }
    }
}
