use crate::auth::use_api;
use crate::routes::form::{use_form_status, FieldError, FormError};
use crate::routes::resource::ResourcePage;
use crate::routes::Route;
use dioxus::prelude::*;
use serde_json::Value;
use shared_types::VacancyRequest;
use shared_ui::{Card, CardContent, PageHeader};
use validator::Validate;

#[component]
pub fn EmployerDashboard() -> Element {
    rsx! {
        ResourcePage {
            title: "Employer Dashboard",
            subtitle: "Your vacancies and incoming applications".to_string(),
            endpoint: "/employer/stats",
            Link { to: Route::EmployerPostJob {}, class: "button-primary", "Post a vacancy" }
        }
    }
}

#[component]
pub fn EmployerJobs() -> Element {
    rsx! {
        ResourcePage {
            title: "My Vacancies",
            endpoint: "/jobs/mine",
            detail_base: "/employer/jobs".to_string(),
            empty_message: "You haven't posted any vacancies yet.".to_string(),
            Link { to: Route::EmployerPostJob {}, class: "button-primary", "Post a vacancy" }
        }
    }
}

/// A vacancy plus the applications received for it.
#[component]
pub fn EmployerJobDetail(id: String) -> Element {
    rsx! {
        ResourcePage {
            key: "job-{id}",
            title: "Vacancy",
            endpoint: format!("/jobs/{id}"),
        }
        ResourcePage {
            key: "job-applications-{id}",
            title: "Applicants",
            endpoint: format!("/jobs/{id}/applications"),
            empty_message: "No applications for this vacancy yet.".to_string(),
        }
    }
}

#[component]
pub fn EmployerApplications() -> Element {
    rsx! {
        ResourcePage {
            title: "Applications",
            subtitle: "Applications across all of your vacancies".to_string(),
            endpoint: "/applications/employer",
            empty_message: "No applications received yet.".to_string(),
        }
    }
}

#[component]
pub fn EmployerProfile() -> Element {
    rsx! {
        ResourcePage { title: "Company Profile", endpoint: "/users/profile" }
    }
}

#[component]
pub fn EmployerPostJob() -> Element {
    let api = use_api();
    let mut title = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut salary = use_signal(String::new);
    let mut status = use_form_status();

    let handle_post = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            status.start();
            let salary_text = salary().trim().to_string();
            let request = VacancyRequest {
                title: title().trim().to_string(),
                location: location().trim().to_string(),
                description: description().trim().to_string(),
                salary: (!salary_text.is_empty()).then_some(salary_text),
            };
            if let Err(e) = request.validate() {
                status.fail(e.into());
                return;
            }
            match api.core.post_json::<_, Value>("/jobs", &request).await {
                Ok(_) => {
                    status.finish();
                    tracing::info!(title = %request.title, "Vacancy posted");
                    navigator().push(Route::EmployerJobs {});
                }
                Err(e) => status.fail_or_sign_in(e),
            }
        }
    };

    rsx! {
        PageHeader { title: "Post a Vacancy" }
        Card {
            CardContent {
                FormError { status }
                form { class: "stacked-form", onsubmit: handle_post,
                    label { r#for: "title", "Title" }
                    input { id: "title", value: "{title}", oninput: move |e| title.set(e.value()) }
                    FieldError { status, field: "title" }

                    label { r#for: "location", "Location" }
                    input { id: "location", value: "{location}", oninput: move |e| location.set(e.value()) }
                    FieldError { status, field: "location" }

                    label { r#for: "salary", "Salary (optional)" }
                    input { id: "salary", value: "{salary}", oninput: move |e| salary.set(e.value()) }

                    label { r#for: "description", "Description" }
                    textarea {
                        id: "description",
                        rows: 8,
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                    }
                    FieldError { status, field: "description" }

                    button { r#type: "submit", class: "button-primary", disabled: (status.busy)(),
                        "Publish"
                    }
                }
            }
        }
    }
}
