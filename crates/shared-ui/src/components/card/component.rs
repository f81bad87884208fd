use dioxus::prelude::*;

use crate::components::with_class;

/// Bordered container used for dashboard tiles and list entries.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("card", attributes);
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..attrs, {children} }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("card-header", attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("card-title", attributes);
    rsx! {
        h3 { ..attrs, {children} }
    }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("card-description", attributes);
    rsx! {
        p { ..attrs, {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("card-content", attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

/// Footer row, usually holding links or actions for the card's record.
#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("card-footer", attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}
