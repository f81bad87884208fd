use crate::auth::use_nav_guard;
use crate::routes::{route_for, Route};
use dioxus::prelude::*;

/// `/` sends each role to its own dashboard.
#[component]
pub fn Home() -> Element {
    let guard = use_nav_guard();

    use_effect(move || {
        let home = guard.read().role().unwrap_or_default().home_path();
        navigator().replace(route_for(home).unwrap_or(Route::ApplicantDashboard {}));
    });

    rsx! {}
}
