use dioxus::prelude::*;
use ui::views::SettingsView;

use crate::Route;

/// Settings screen wired to the mobile router. Both saving and "Return to
/// Home" land back on the profile screen.
#[component]
pub fn Settings() -> Element {
    let nav = use_navigator();

    rsx! {
        SettingsView {
            on_saved: move |_| {
                nav.push(Route::ProfileScreen {});
            },
            on_back: move |_| {
                nav.push(Route::ProfileScreen {});
            },
        }
    }
}
