pub mod admin;
pub mod applicant;
pub mod employer;
pub mod form;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod resource;

use crate::auth::{use_session, RoleGate};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdBriefcase, LdEllipsis, LdFileText, LdFolder, LdLayoutDashboard, LdLock,
    LdLockOpen, LdPackage, LdSearch, LdSettings, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use session::{is_active, NavGuard};
use shared_types::{required_role, MenuIcon, MenuItem};
use shared_ui::{
    Badge, Sidebar, SidebarContent, SidebarFooter, SidebarGroup, SidebarHeader, SidebarInset,
    SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarSeparator,
    SidebarTrigger,
};

use admin::{AdminApplications, AdminDashboard, AdminJobs, AdminUsers};
use applicant::{
    ApplicantApplications, ApplicantDashboard, ApplicantJobDetail, ApplicantJobs,
    ApplicantProfile, ApplicantProfileEdit, ApplicantRecommendations,
};
use employer::{
    EmployerApplications, EmployerDashboard, EmployerJobDetail, EmployerJobs, EmployerPostJob,
    EmployerProfile,
};
use home::Home;
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(NavigationGuard)]
    #[route("/")]
    Home {},
    // ── Admin ──
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/admin/jobs")]
    AdminJobs {},
    #[route("/admin/applications")]
    AdminApplications {},
    // ── Employer ──
    #[route("/employer/dashboard")]
    EmployerDashboard {},
    #[route("/employer/jobs")]
    EmployerJobs {},
    #[route("/employer/jobs/post")]
    EmployerPostJob {},
    #[route("/employer/jobs/:id")]
    EmployerJobDetail { id: String },
    #[route("/employer/applications")]
    EmployerApplications {},
    #[route("/employer/profile")]
    EmployerProfile {},
    // ── Applicant ──
    #[route("/applicant/dashboard")]
    ApplicantDashboard {},
    #[route("/applicant/jobs")]
    ApplicantJobs {},
    #[route("/applicant/jobs/:id")]
    ApplicantJobDetail { id: String },
    #[route("/applicant/applications")]
    ApplicantApplications {},
    #[route("/applicant/recommendations")]
    ApplicantRecommendations {},
    #[route("/applicant/profile")]
    ApplicantProfile {},
    #[route("/applicant/profile/edit")]
    ApplicantProfileEdit {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Typed route for an application path such as a menu entry or a role's
/// home. `None` for paths the router doesn't know.
pub fn route_for(path: &str) -> Option<Route> {
    match path.parse::<Route>() {
        Ok(Route::NotFound { .. }) | Err(_) => {
            tracing::warn!(path, "No route for path");
            None
        }
        Ok(route) => Some(route),
    }
}

fn menu_icon(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        MenuIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        MenuIcon::Vacancies => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        MenuIcon::Applications => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        MenuIcon::PostVacancy => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
        MenuIcon::Company => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        MenuIcon::Search => rsx! { Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 } },
        MenuIcon::Recommendations => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        MenuIcon::Profile => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}

/// Role-aware layout around every portal page.
///
/// Renders nothing until the role has been read from the persisted token,
/// so a signed-in employer never sees the applicant menu flash first.
#[component]
fn NavigationGuard() -> Element {
    let login_route = session::config::config().session.login_route.clone();
    let session = use_session();
    let mut guard = use_context_provider(|| Signal::new(NavGuard::new(login_route)));
    let route: Route = use_route();

    // Resolve once per mount; the guard caches the role afterwards.
    {
        let session = session.clone();
        use_effect(move || {
            guard.write().resolve_role(&session);
        });
    }

    let state = guard.read().clone();
    let (Some(role), Some(menu)) = (state.role(), state.menu()) else {
        return rsx! {};
    };

    let current = route.to_string();
    let open = state.is_open();
    let authenticated = state.is_authenticated();
    let required = required_role(&current);

    let sign_out = {
        let session = session.clone();
        move |_| {
            let target = guard.write().logout(&session).to_string();
            navigator().push(login_target(&target));
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { open,
            Sidebar {
                open,
                on_close: move |_| guard.write().close(),
                SidebarHeader {
                    div { class: "sidebar-brand",
                        Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 }
                        span { class: "sidebar-brand-name", "Recruit" }
                    }
                    Badge { class: "sidebar-role", {role.label()} }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarGroup { label: role.label().to_string(),
                        SidebarMenu {
                            for item in menu.iter().copied() {
                                MenuEntry {
                                    key: "{item.path}",
                                    item,
                                    active: is_active(&current, item.path),
                                    on_navigate: move |_| guard.write().close(),
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    if authenticated {
                        button { class: "sidebar-signout", onclick: sign_out,
                            Icon::<LdLock> { icon: LdLock, width: 18, height: 18 }
                            "Sign out"
                        }
                    } else {
                        Link { to: Route::Login {}, class: "sidebar-signin",
                            Icon::<LdLockOpen> { icon: LdLockOpen, width: 18, height: 18 }
                            "Sign in"
                        }
                    }
                }
            }

            SidebarInset {
                div { class: "topbar",
                    SidebarTrigger { on_toggle: move |_| guard.write().toggle_open(),
                        Icon::<LdEllipsis> { icon: LdEllipsis, width: 20, height: 20 }
                    }
                }
                div { class: "page-body",
                    if let Some(required) = required {
                        RoleGate { required, Outlet::<Route> {} }
                    } else {
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}

#[component]
fn MenuEntry(item: MenuItem, active: bool, on_navigate: EventHandler<()>) -> Element {
    let Some(to) = route_for(item.path) else {
        return rsx! {};
    };

    rsx! {
        SidebarMenuItem {
            Link { to, onclick: move |_| on_navigate.call(()),
                SidebarMenuButton { active,
                    {menu_icon(item.icon)}
                    "{item.label}"
                }
            }
        }
    }
}

/// Route to send the user to after a 401 or sign-out.
pub fn login_target(login_route: &str) -> Route {
    route_for(login_route).unwrap_or(Route::Login {})
}
