use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::SessionProvider;
use views::{
    DashboardLayout, Home, Login, Newsletter, Register, RestaurantTransactions, Restaurants,
    Transactions, UserTransactions, Users,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub(crate) enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(DashboardLayout)]
        #[route("/")]
        Home {},
        #[route("/users")]
        Users {},
        #[route("/transactions")]
        Transactions {},
        #[route("/transactions/user")]
        UserTransactions {},
        #[route("/transactions/restaurant")]
        RestaurantTransactions {},
        #[route("/restaurants")]
        Restaurants {},
        #[route("/newsletter")]
        Newsletter {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        SessionProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
