use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

/// Text filter input with a leading search icon.
#[component]
pub fn SearchBox(
    value: String,
    #[props(default = "Search...".to_string())] placeholder: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "search-box",
            Icon { class: "search-icon", icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                class: "input search-input",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}
