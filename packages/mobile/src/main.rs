use dioxus::prelude::*;
use views::{Login, ProfileScreen, Settings, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/profilescreen")]
    ProfileScreen {},
    #[route("/settings")]
    Settings {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::APP_CSS }
        ui::SessionProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}
