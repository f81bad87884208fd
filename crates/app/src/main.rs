use dioxus::prelude::*;
use session::{ApiClients, SessionProvider};

mod auth;
mod routes;
use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    let config = session::config::load_config();
    if let Err(e) = dioxus::logger::init(session::config::log_level(config)) {
        eprintln!("[logger] {e}");
    }
    tracing::info!(
        platform = client_platform(),
        core_api = %config.api.core_base_url,
        "Starting recruitment portal"
    );

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let config = session::config::config();
    let session = use_context_provider(|| SessionProvider::from_config(&config.session));
    use_context_provider(|| ApiClients::new(&config.api, session));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        Router::<Route> {}
    }
}
