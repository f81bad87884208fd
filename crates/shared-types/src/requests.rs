use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::{AppError, Role};

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Register request. Only applicants and employers can sign up; admins are
/// provisioned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub role: Role,
}

/// Body returned by the auth API on successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(alias = "access_token", alias = "accessToken")]
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A vacancy posted by an employer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VacancyRequest {
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(length(min = 20, message = "Description must be at least 20 characters"))]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
}

/// An applicant's application to a vacancy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub job_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
}

/// Editable profile fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl ProfileUpdateRequest {
    /// Split a comma-separated skills field, dropping blanks and duplicates.
    pub fn parse_skills(input: &str) -> Vec<String> {
        let mut skills: Vec<String> = Vec::new();
        for skill in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !skills.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
                skills.push(skill.to_string());
            }
        }
        skills
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

impl RegisterRequest {
    /// Field validation plus the sign-up role restriction.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;
        if self.role == Role::Admin {
            let mut field_errors = HashMap::new();
            field_errors.insert(
                "role".to_string(),
                "Choose applicant or employer".to_string(),
            );
            return Err(AppError::validation("Validation failed", field_errors));
        }
        Ok(())
    }
}
