use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Previous/next pager for the collection tables.
#[component]
pub fn Pagination(page: usize, total_pages: usize, on_change: EventHandler<usize>) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }
    rsx! {
        div {
            class: "pagination",
            Button {
                variant: ButtonVariant::Outline,
                disabled: page <= 1,
                onclick: move |_| on_change.call(page - 1),
                "Previous"
            }
            span { class: "pagination-status", "Page {page} of {total_pages}" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: page >= total_pages,
                onclick: move |_| on_change.call(page + 1),
                "Next"
            }
        }
    }
}
