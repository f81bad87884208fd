//! Generic listing/detail page over the core API.
//!
//! Response bodies are opaque JSON; `entries` pulls a title, a status and an
//! id out of whatever shape comes back so every portal section can share one
//! page component.

use dioxus::prelude::*;
use serde_json::{Map, Value};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    SkeletonList,
};

use crate::auth::use_api;
use crate::routes::{login_target, route_for, Route};

const TITLE_KEYS: &[&str] = &["title", "name", "fullName", "position", "email"];
const DETAIL_KEYS: &[&str] = &["company", "location", "email", "description"];
const LIST_KEYS: &[&str] = &["data", "items", "results", "jobs", "applications", "users"];

/// One row of a resource page.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub title: String,
    pub detail: Option<String>,
    pub status: Option<String>,
    pub id: Option<String>,
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn first_of(map: &Map<String, Value>, keys: &[&str], skip: Option<&str>) -> Option<String> {
    keys.iter()
        .filter(|k| Some(**k) != skip)
        .find_map(|k| map.get(*k).and_then(scalar))
}

fn record(map: &Map<String, Value>) -> Entry {
    let title_key = TITLE_KEYS.iter().copied().find(|k| map.get(*k).and_then(scalar).is_some());
    Entry {
        title: title_key
            .and_then(|k| map.get(k).and_then(scalar))
            .unwrap_or_else(|| "Untitled".to_string()),
        detail: first_of(map, DETAIL_KEYS, title_key),
        status: map.get("status").and_then(scalar),
        id: first_of(map, &["_id", "id"], None),
    }
}

/// Flatten an API response into displayable rows.
///
/// Arrays (bare or wrapped under a common key) become one row per record.
/// A single object becomes one row per scalar field.
pub fn entries(value: &Value) -> Vec<Entry> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_object)
            .map(record)
            .collect(),
        Value::Object(map) => {
            if let Some(list) = LIST_KEYS.iter().find_map(|k| map.get(*k).filter(|v| v.is_array())) {
                return entries(list);
            }
            map.iter()
                .filter_map(|(key, v)| {
                    scalar(v).map(|text| Entry {
                        title: key.clone(),
                        detail: Some(text),
                        status: None,
                        id: None,
                    })
                })
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Fetches `endpoint` from the core API and lists what comes back.
///
/// A 401 has already cleared the session in the client, so the page only
/// redirects to the login route. Mount with a `key` derived from the
/// endpoint so navigating between detail pages refetches.
#[component]
pub fn ResourcePage(
    title: String,
    endpoint: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] detail_base: Option<String>,
    #[props(default)] empty_message: Option<String>,
    children: Element,
) -> Element {
    let api = use_api();

    let data = use_resource(move || {
        let api = api.clone();
        let endpoint = endpoint.clone();
        async move { api.core.get_json::<Value>(&endpoint).await }
    });

    use_effect(move || {
        if let Some(Err(e)) = &*data.read() {
            if e.is_unauthorized() {
                let login = &session::config::config().session.login_route;
                navigator().push(login_target(login));
            }
        }
    });

    let empty = empty_message.unwrap_or_else(|| "Nothing here yet.".to_string());

    rsx! {
        PageHeader { title, subtitle, {children} }
        match &*data.read() {
            None => rsx! { SkeletonList {} },
            Some(Err(e)) => rsx! {
                div { class: "page-error", {e.friendly_message()} }
            },
            Some(Ok(value)) => {
                let rows = entries(value);
                if rows.is_empty() {
                    rsx! { p { class: "text-muted", "{empty}" } }
                } else {
                    rsx! { EntryList { rows, detail_base: detail_base.clone() } }
                }
            }
        }
    }
}

#[component]
fn EntryList(rows: Vec<Entry>, detail_base: Option<String>) -> Element {
    let cards: Vec<(Entry, Option<Route>)> = rows
        .into_iter()
        .map(|entry| {
            let to = match (&detail_base, &entry.id) {
                (Some(base), Some(id)) => route_for(&format!("{base}/{id}")),
                _ => None,
            };
            (entry, to)
        })
        .collect();

    rsx! {
        div { class: "entry-list",
            for (i, (entry, to)) in cards.into_iter().enumerate() {
                EntryCard { key: "{i}", entry, to }
            }
        }
    }
}

#[component]
fn EntryCard(entry: Entry, to: Option<Route>) -> Element {
    let body = rsx! {
        Card { class: "entry-card",
            CardHeader {
                CardTitle { "{entry.title}" }
                if let Some(detail) = &entry.detail {
                    CardDescription { "{detail}" }
                }
            }
            if let Some(status) = &entry.status {
                CardContent {
                    Badge { variant: BadgeVariant::for_status(status), "{status}" }
                }
            }
        }
    };

    match to {
        Some(to) => rsx! { Link { to, class: "entry-link", {body} } },
        None => body,
    }
}
