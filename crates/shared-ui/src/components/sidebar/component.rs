use dioxus::prelude::*;

use crate::components::with_class;

// ─── Layout components ─────────────────────────────────────────────────
//
// Open/closed state is owned by the caller (the navigation guard) and
// passed down; these components only render it and report intents.

/// Root wrapper laying out the sidebar next to the page.
#[component]
pub fn SidebarProvider(open: bool, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if open { "true" } else { "false" },
            {children}
        }
    }
}

/// The sidebar container. On mobile viewports, shows a backdrop overlay
/// when open; tapping it asks the owner to close.
#[component]
pub fn Sidebar(
    open: bool,
    on_close: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut attrs = with_class("sidebar", attributes);
    attrs.push(Attribute::new(
        "data-state",
        if open { "open" } else { "closed" },
        None,
        false,
    ));

    rsx! {
        if open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| on_close.call(()),
            }
        }
        aside {
            ..attrs,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("sidebar-header", attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

/// Scrollable content area of the Sidebar.
#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("sidebar-content", attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("sidebar-footer", attributes);
    rsx! {
        div { ..attrs, {children} }
    }
}

// ─── Group components ──────────────────────────────────────────────────

/// A labelled group of sidebar entries.
#[component]
pub fn SidebarGroup(
    #[props(default)] label: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("sidebar-group", attributes);
    rsx! {
        div { ..attrs,
            if let Some(label) = label {
                div { class: "sidebar-group-label", "{label}" }
            }
            div { class: "sidebar-group-content", {children} }
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

/// Navigation menu list inside the sidebar.
#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("sidebar-menu", attributes);
    rsx! {
        ul { ..attrs, {children} }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("sidebar-menu-item", attributes);
    rsx! {
        li { ..attrs, {children} }
    }
}

/// Visual body of a menu entry; wrap it in a router link. `active` only
/// drives highlighting.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut attrs = with_class("sidebar-menu-button", attributes);
    attrs.push(Attribute::new(
        "data-active",
        if active { "true" } else { "false" },
        None,
        false,
    ));
    if active {
        attrs.push(Attribute::new("aria-current", "page", None, false));
    }

    rsx! {
        span { ..attrs, {children} }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Button asking the owner to open/close the sidebar.
#[component]
pub fn SidebarTrigger(
    on_toggle: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("sidebar-trigger", attributes);
    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle navigation",
            onclick: move |_| on_toggle.call(()),
            ..attrs,
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        hr { class: "sidebar-separator" }
    }
}

/// The main content area that sits alongside the Sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let attrs = with_class("sidebar-inset", attributes);
    rsx! {
        main { ..attrs, {children} }
    }
}
