use dioxus::prelude::*;
use ui::views::ProfileView;

use crate::Route;

/// Profile screen wired to the mobile router. Redirects to login when no
/// session exists or after logout.
#[component]
pub fn ProfileScreen() -> Element {
    let nav = use_navigator();

    rsx! {
        ProfileView {
            on_unauthenticated: move |_| {
                nav.push(Route::Login {});
            },
            on_settings: move |_| {
                nav.push(Route::Settings {});
            },
            on_logout: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
