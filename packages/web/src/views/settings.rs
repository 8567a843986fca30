use dioxus::prelude::*;
use ui::views::SettingsView;

use crate::Route;

/// Settings page wired to the web router.
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
