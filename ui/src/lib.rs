//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod session;
pub use session::{
    sign_in, sign_out, use_api_config, use_client, use_session, SessionProvider, SessionState,
};

mod guard;
pub use guard::{guard_state, GuardState};

pub mod listing;
pub use listing::{field_contains, PageView, ResourceList, PAGE_SIZE};

mod download;
pub use download::save_file;

mod markdown;
pub use markdown::markdown_to_html;

mod navbar;
pub use navbar::Navbar;

mod sidebar;
pub use sidebar::Sidebar;
