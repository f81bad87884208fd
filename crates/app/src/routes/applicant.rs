use crate::auth::use_api;
use crate::routes::form::{use_form_status, FieldError, FormError};
use crate::routes::resource::ResourcePage;
use crate::routes::Route;
use dioxus::prelude::*;
use serde_json::Value;
use shared_types::{ApplicationRequest, ProfileUpdateRequest};
use shared_ui::{Card, CardContent, PageHeader};
use validator::Validate;

#[component]
pub fn ApplicantDashboard() -> Element {
    rsx! {
        ResourcePage {
            title: "Dashboard",
            subtitle: "Your applications and saved searches".to_string(),
            endpoint: "/applicant/stats",
            Link { to: Route::ApplicantJobs {}, class: "button-primary", "Browse vacancies" }
        }
    }
}

#[component]
pub fn ApplicantJobs() -> Element {
    rsx! {
        ResourcePage {
            title: "Vacancies",
            endpoint: "/jobs",
            detail_base: "/applicant/jobs".to_string(),
            empty_message: "No open vacancies right now.".to_string(),
        }
    }
}

/// A vacancy with an apply action.
#[component]
pub fn ApplicantJobDetail(id: String) -> Element {
    let api = use_api();
    let mut status = use_form_status();
    let mut applied = use_signal(|| false);

    let apply = {
        let id = id.clone();
        move |_| {
            let api = api.clone();
            let request = ApplicationRequest {
                job_id: id.clone(),
                cover_letter: None,
            };
            async move {
                status.start();
                match api.core.post_json::<_, Value>("/applications", &request).await {
                    Ok(_) => {
                        status.finish();
                        applied.set(true);
                        tracing::info!(job_id = %request.job_id, "Application submitted");
                    }
                    Err(e) => status.fail_or_sign_in(e),
                }
            }
        }
    };

    rsx! {
        ResourcePage {
            key: "job-{id}",
            title: "Vacancy",
            endpoint: format!("/jobs/{id}"),
            if applied() {
                span { class: "applied-note", "Application sent" }
            } else {
                button {
                    class: "button-primary",
                    disabled: (status.busy)(),
                    onclick: apply,
                    "Apply"
                }
            }
        }
        FormError { status }
    }
}

#[component]
pub fn ApplicantApplications() -> Element {
    rsx! {
        ResourcePage {
            title: "My Applications",
            endpoint: "/applications/mine",
            empty_message: "You haven't applied to anything yet.".to_string(),
        }
    }
}

#[component]
pub fn ApplicantRecommendations() -> Element {
    rsx! {
        ResourcePage {
            title: "Recommended for you",
            subtitle: "Vacancies matched to your profile".to_string(),
            endpoint: "/recommendations",
            detail_base: "/applicant/jobs".to_string(),
            empty_message: "Add skills to your profile to get recommendations.".to_string(),
        }
    }
}

#[component]
pub fn ApplicantProfile() -> Element {
    rsx! {
        ResourcePage { title: "Profile", endpoint: "/users/profile",
            Link { to: Route::ApplicantProfileEdit {}, class: "button-primary", "Edit profile" }
        }
    }
}

/// Editable fields of a profile response, unwrapping a `user` or `data`
/// envelope when present.
fn profile_from(body: Value) -> Option<ProfileUpdateRequest> {
    let profile = ["user", "data"]
        .iter()
        .find_map(|key| body.get(*key).filter(|inner| inner.is_object()))
        .unwrap_or(&body);
    serde_json::from_value(profile.clone()).ok()
}

#[component]
pub fn ApplicantProfileEdit() -> Element {
    let api = use_api();
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut skills = use_signal(String::new);
    let mut summary = use_signal(String::new);
    let mut status = use_form_status();

    // Prefill from the current profile; a failed load leaves the form blank.
    {
        let api = api.clone();
        use_resource(move || {
            let api = api.clone();
            async move {
                let loaded = api.core.get_json::<Value>("/users/profile").await;
                match loaded.map(profile_from) {
                    Ok(Some(profile)) => {
                        name.set(profile.name);
                        phone.set(profile.phone.unwrap_or_default());
                        skills.set(profile.skills.join(", "));
                        summary.set(profile.summary.unwrap_or_default());
                    }
                    Ok(None) => tracing::warn!("Profile response has no usable fields"),
                    Err(e) => tracing::warn!(error = %e, "Profile prefill skipped"),
                }
            }
        });
    }

    let handle_save = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            status.start();
            let optional = |s: String| {
                let s = s.trim().to_string();
                (!s.is_empty()).then_some(s)
            };
            let request = ProfileUpdateRequest {
                name: name().trim().to_string(),
                phone: optional(phone()),
                skills: ProfileUpdateRequest::parse_skills(&skills()),
                summary: optional(summary()),
            };
            if let Err(e) = request.validate() {
                status.fail(e.into());
                return;
            }
            match api.core.put_json::<_, Value>("/users/profile", &request).await {
                Ok(_) => {
                    status.finish();
                    navigator().push(Route::ApplicantProfile {});
                }
                Err(e) => status.fail_or_sign_in(e),
            }
        }
    };

    rsx! {
        PageHeader { title: "Edit Profile" }
        Card {
            CardContent {
                FormError { status }
                form { class: "stacked-form", onsubmit: handle_save,
                    label { r#for: "name", "Full name" }
                    input { id: "name", value: "{name}", oninput: move |e| name.set(e.value()) }
                    FieldError { status, field: "name" }

                    label { r#for: "phone", "Phone" }
                    input { id: "phone", r#type: "tel", value: "{phone}", oninput: move |e| phone.set(e.value()) }

                    label { r#for: "skills", "Skills (comma separated)" }
                    input { id: "skills", value: "{skills}", oninput: move |e| skills.set(e.value()) }

                    label { r#for: "summary", "Summary" }
                    textarea {
                        id: "summary",
                        rows: 5,
                        value: "{summary}",
                        oninput: move |e| summary.set(e.value()),
                    }

                    div { class: "form-actions",
                        Link { to: Route::ApplicantProfile {}, "Cancel" }
                        button { r#type: "submit", class: "button-primary", disabled: (status.busy)(),
                            "Save"
                        }
                    }
                }
            }
        }
    }
}
