use dioxus::prelude::*;

pub mod badge;
pub mod card;
pub mod page_header;
pub mod sidebar;
pub mod skeleton;

pub use badge::*;
pub use card::*;
pub use page_header::*;
pub use sidebar::*;
pub use skeleton::*;

/// Prepend a base `class` to caller-supplied attributes.
pub(crate) fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}
