use serde::Serialize;

use crate::Role;

/// Icon shown next to a navigation entry. Mapped to a concrete icon set by
/// the front end.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum MenuIcon {
    Dashboard,
    Users,
    Vacancies,
    Applications,
    PostVacancy,
    Company,
    Search,
    Recommendations,
    Profile,
}

/// A single entry of a role's navigation menu.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: MenuIcon,
}

const fn item(path: &'static str, label: &'static str, icon: MenuIcon) -> MenuItem {
    MenuItem { path, label, icon }
}

const ADMIN_MENU: &[MenuItem] = &[
    item("/admin/dashboard", "Dashboard", MenuIcon::Dashboard),
    item("/admin/users", "Users", MenuIcon::Users),
    item("/admin/jobs", "Vacancies", MenuIcon::Vacancies),
    item("/admin/applications", "Applications", MenuIcon::Applications),
];

const EMPLOYER_MENU: &[MenuItem] = &[
    item("/employer/dashboard", "Dashboard", MenuIcon::Dashboard),
    item("/employer/jobs", "My Vacancies", MenuIcon::Vacancies),
    item("/employer/jobs/post", "Post Vacancy", MenuIcon::PostVacancy),
    item("/employer/applications", "Applicants", MenuIcon::Applications),
    item("/employer/profile", "Company Profile", MenuIcon::Company),
];

const APPLICANT_MENU: &[MenuItem] = &[
    item("/applicant/dashboard", "Dashboard", MenuIcon::Dashboard),
    item("/applicant/jobs", "Browse Jobs", MenuIcon::Search),
    item("/applicant/applications", "My Applications", MenuIcon::Applications),
    item("/applicant/recommendations", "Recommended", MenuIcon::Recommendations),
    item("/applicant/profile", "Profile", MenuIcon::Profile),
];

/// Menu definitions keyed by role. Adding a role is one row here.
pub const MENU_TABLE: &[(Role, &[MenuItem])] = &[
    (Role::Admin, ADMIN_MENU),
    (Role::Employer, EMPLOYER_MENU),
    (Role::Applicant, APPLICANT_MENU),
];

/// Listing paths that are only active on an exact match, because a
/// sibling entry lives underneath them (e.g. `/employer/jobs/post`).
pub const EXACT_MATCH_PATHS: &[&str] = &["/employer/jobs", "/admin/jobs"];

/// The navigation menu shown to `role`.
pub fn menu_for(role: Role) -> &'static [MenuItem] {
    MENU_TABLE
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, items)| *items)
        .unwrap_or(APPLICANT_MENU)
}

/// Role a path's screens are rendered for, based on its first segment.
/// `None` for shared or public paths.
pub fn required_role(path: &str) -> Option<Role> {
    let first = path.trim_start_matches('/').split('/').next()?;
    match first {
        "admin" => Some(Role::Admin),
        "employer" => Some(Role::Employer),
        "applicant" => Some(Role::Applicant),
        _ => None,
    }
}
