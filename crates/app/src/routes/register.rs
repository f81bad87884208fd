use crate::auth::use_api;
use crate::routes::form::{use_form_status, FieldError, FormError};
use crate::routes::{route_for, Route};
use dioxus::prelude::*;
use shared_types::{RegisterRequest, Role};
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

/// Roles offered at sign-up. Admin accounts are provisioned by the API.
const SIGNUP_ROLES: &[Role] = &[Role::Applicant, Role::Employer];

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Applicant);
    let mut status = use_form_status();

    let handle_register = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            status.start();
            let request = RegisterRequest {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                role: role(),
            };
            match api.auth.register(&request).await {
                Ok(role) => {
                    status.finish();
                    navigator().push(route_for(role.home_path()).unwrap_or(Route::Home {}));
                }
                Err(e) => status.fail(e),
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Find your next role or your next hire" }
                }

                CardContent {
                    FormError { status }
                    form { class: "auth-form", onsubmit: handle_register,
                        label { r#for: "name", "Full name" }
                        input {
                            id: "name",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                        FieldError { status, field: "name" }

                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                        FieldError { status, field: "email" }

                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            autocomplete: "new-password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                        FieldError { status, field: "password" }

                        fieldset { class: "role-choice",
                            legend { "I am" }
                            for option in SIGNUP_ROLES.iter().copied() {
                                label { key: "{option}",
                                    input {
                                        r#type: "radio",
                                        name: "role",
                                        value: option.as_str(),
                                        checked: role() == option,
                                        onchange: move |_| role.set(option),
                                    }
                                    {signup_label(option)}
                                }
                            }
                        }
                        FieldError { status, field: "role" }

                        button {
                            r#type: "submit",
                            class: "auth-submit",
                            disabled: (status.busy)(),
                            if (status.busy)() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    span { "Already registered? " }
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}

fn signup_label(role: Role) -> &'static str {
    match role {
        Role::Employer => "Hiring (employer)",
        _ => "Looking for work (applicant)",
    }
}
