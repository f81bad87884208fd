use dioxus::prelude::*;

use crate::components::with_class;

/// Pulsing placeholder shown while a page's data loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let attrs = with_class("skeleton", attributes);
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..attrs }
    }
}

/// A stack of `rows` skeleton lines.
#[component]
pub fn SkeletonList(#[props(default = 3)] rows: usize) -> Element {
    rsx! {
        div { class: "skeleton-list", "aria-busy": "true",
            for i in 0..rows {
                Skeleton { key: "{i}", class: "skeleton-row" }
            }
        }
    }
}
