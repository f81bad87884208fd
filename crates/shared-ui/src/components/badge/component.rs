use dioxus::prelude::*;

use crate::components::with_class;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Info,
    Success,
    Danger,
}

impl BadgeVariant {
    fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Info => "info",
            BadgeVariant::Success => "success",
            BadgeVariant::Danger => "danger",
        }
    }

    /// Variant for an application or vacancy status string returned by the API.
    pub fn for_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "accepted" | "hired" | "open" | "active" => BadgeVariant::Success,
            "rejected" | "closed" | "withdrawn" => BadgeVariant::Danger,
            "reviewed" | "shortlisted" | "interview" => BadgeVariant::Info,
            _ => BadgeVariant::Neutral,
        }
    }
}

/// Inline label for statuses and roles.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut attrs = with_class("badge", attributes);
    attrs.push(Attribute::new("data-variant", variant.as_str(), None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { ..attrs, {children} }
    }
}
