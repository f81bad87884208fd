use crate::auth::use_api;
use crate::routes::form::{use_form_status, FieldError, FormError};
use crate::routes::{route_for, Route};
use dioxus::prelude::*;
use shared_types::LoginRequest;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

/// Email/password sign-in. On success the token is persisted by the auth
/// client and the user lands on their role's dashboard.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut status = use_form_status();

    let handle_login = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            status.start();
            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            match api.auth.login(&request).await {
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
                    CardTitle { "Sign In" }
                    CardDescription { "Access your recruitment portal account" }
                }

                CardContent {
                    FormError { status }
                    form { class: "auth-form", onsubmit: handle_login,
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            autocomplete: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                        FieldError { status, field: "email" }

                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                        FieldError { status, field: "password" }

                        button {
                            r#type: "submit",
                            class: "auth-submit",
                            disabled: (status.busy)(),
                            if (status.busy)() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    span { "No account yet? " }
                    Link { to: Route::Register {}, "Create one" }
                }
            }
        }
    }
}
