use dioxus::prelude::*;

use crate::routes::resource::ResourcePage;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        ResourcePage {
            title: "Admin Dashboard",
            subtitle: "Platform activity at a glance".to_string(),
            endpoint: "/admin/stats",
        }
    }
}

#[component]
pub fn AdminUsers() -> Element {
    rsx! {
        ResourcePage {
            title: "Users",
            endpoint: "/admin/users",
            empty_message: "No users registered.".to_string(),
        }
    }
}

#[component]
pub fn AdminJobs() -> Element {
    rsx! {
        ResourcePage {
            title: "Vacancies",
            subtitle: "Every vacancy posted on the portal".to_string(),
            endpoint: "/jobs",
            empty_message: "No vacancies posted.".to_string(),
        }
    }
}

#[component]
pub fn AdminApplications() -> Element {
    rsx! {
        ResourcePage {
            title: "Applications",
            endpoint: "/applications",
            empty_message: "No applications submitted.".to_string(),
        }
    }
}
