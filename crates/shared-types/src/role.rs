use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse access tier carried in the token's `role` claim.
///
/// - `Applicant`: job seekers. Also the default for a missing, unknown or
///   `"user"` claim, and for visitors without a token.
/// - `Employer`: posts vacancies and reviews applicants.
/// - `Admin`: platform moderation.
///
/// This is a UI hint derived from an unverified token. The remote API
/// re-checks authorization on every protected call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employer,
    #[default]
    #[serde(rename = "user", alias = "applicant")]
    Applicant,
}

/// Every role, in menu-table order.
pub const ALL_ROLES: &[Role] = &[Role::Admin, Role::Employer, Role::Applicant];

impl Role {
    /// Parse the `role` claim. Absent or unrecognised values resolve to
    /// `Applicant`.
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim.map(|c| c.trim().to_lowercase()).as_deref() {
            Some("admin") => Role::Admin,
            Some("employer") => Role::Employer,
            _ => Role::Applicant,
        }
    }

    /// Claim value as issued by the API. Applicants are plain `"user"`s.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employer => "employer",
            Role::Applicant => "user",
        }
    }

    /// Human-readable name for display in UI.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Employer => "Employer",
            Role::Applicant => "Applicant",
        }
    }

    /// Landing route for this role after sign-in.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Employer => "/employer/dashboard",
            Role::Applicant => "/applicant/dashboard",
        }
    }

    /// Returns true if this role may render screens that require `required`.
    /// Admin satisfies every role; the others only satisfy themselves.
    pub fn satisfies(&self, required: &Role) -> bool {
        match self {
            Role::Admin => true,
            other => other == required,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
