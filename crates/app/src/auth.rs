use dioxus::prelude::*;
use session::{ApiClients, NavGuard, SessionProvider};
use shared_types::Role;

use crate::routes::route_for;

/// Hook to access the persisted session.
pub fn use_session() -> SessionProvider {
    use_context::<SessionProvider>()
}

/// Hook to access the core and auth API clients.
pub fn use_api() -> ApiClients {
    use_context::<ApiClients>()
}

/// Hook to access the navigation guard state provided by the layout.
pub fn use_nav_guard() -> Signal<NavGuard> {
    use_context::<Signal<NavGuard>>()
}

/// Renders `children` only when the resolved role satisfies `required`.
/// Other roles get a notice linking back to their own dashboard. The API
/// still enforces access on every request.
#[component]
pub fn RoleGate(required: Role, children: Element) -> Element {
    let guard = use_nav_guard();
    let role = guard.read().role();

    match role {
        Some(role) if role.satisfies(&required) => children,
        Some(role) => {
            let area = required.label();
            tracing::debug!(role = %role, required = %required, "Route not available for role");
            rsx! {
                div { class: "access-denied",
                    h2 { "Not available" }
                    p { "This area is for {area} accounts." }
                    if let Some(home) = route_for(role.home_path()) {
                        Link { to: home, class: "access-denied-link", "Go to your dashboard" }
                    }
                }
            }
        }
        None => rsx! {},
    }
}
