//! Form field validation
//!
//! Validation is a pure function from raw field values to either a
//! ready-to-persist [`FeedbackEntry`] or the first blocking error, so it
//! is testable without any terminal plumbing.

use super::entry::FeedbackEntry;
use chrono::Utc;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Email shape check: one `@`, no whitespace, a dot in the domain.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Raw field values as typed into the form, before trimming.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub student_name: String,
    pub email: String,
    pub project: String,
    pub locality: String,
    pub rating: String,
    pub comments: String,
}

/// First validation failure for a submitted form.
///
/// Checks run in field order and stop at the first failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Student name is required")]
    StudentNameMissing,
    #[error("A valid email is required")]
    EmailInvalid,
    #[error("Project / Subject is required")]
    ProjectMissing,
    #[error("Please select a rating")]
    RatingMissing,
}

/// Validate submitted fields and build the entry to persist.
///
/// All fields are trimmed first. On success the entry carries a `created`
/// timestamp of the current time; optional fields that trimmed to empty
/// are stored as absent rather than as empty strings.
pub fn validate(fields: &FormFields) -> Result<FeedbackEntry, ValidationError> {
    let student_name = fields.student_name.trim();
    let email = fields.email.trim();
    let project = fields.project.trim();
    let locality = fields.locality.trim();
    let rating = fields.rating.trim();
    let comments = fields.comments.trim();

    if student_name.is_empty() {
        return Err(ValidationError::StudentNameMissing);
    }
    if email.is_empty() || !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::EmailInvalid);
    }
    if project.is_empty() {
        return Err(ValidationError::ProjectMissing);
    }
    if rating.is_empty() {
        return Err(ValidationError::RatingMissing);
    }

    let optional = |s: &str| {
        if s.is_empty() {
            None
        } else {
            Some(s.to_string())
        }
    };

    Ok(FeedbackEntry {
        student_name: student_name.to_string(),
        email: email.to_string(),
        project: project.to_string(),
        locality: optional(locality),
        rating: rating.to_string(),
        comments: optional(comments),
        created: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> FormFields {
        FormFields {
            student_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            project: "Analytical Engine".to_string(),
            locality: "London".to_string(),
            rating: "5 - Excellent".to_string(),
            comments: "Very thorough".to_string(),
        }
    }

    #[test]
    fn test_valid_fields_produce_entry_with_created() {
        let entry = validate(&valid_fields()).unwrap();
        assert_eq!(entry.student_name, "Ada Lovelace");
        assert_eq!(entry.rating, "5 - Excellent");
        assert!(!entry.created.to_rfc3339().is_empty());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let fields = FormFields {
            student_name: "  Ada  ".to_string(),
            email: " ada@example.com ".to_string(),
            ..valid_fields()
        };
        let entry = validate(&fields).unwrap();
        assert_eq!(entry.student_name, "Ada");
        assert_eq!(entry.email, "ada@example.com");
    }

    #[test]
    fn test_missing_name_fails_first() {
        let fields = FormFields {
            student_name: "   ".to_string(),
            email: "not-an-email".to_string(),
            ..valid_fields()
        };
        // Name is checked before email even though both are bad.
        assert_eq!(validate(&fields), Err(ValidationError::StudentNameMissing));
    }

    #[test]
    fn test_invalid_email_rejected() {
        for bad in ["not-an-email", "a@b", "a b@c.com", "", "a@b@c.de"] {
            let fields = FormFields {
                email: bad.to_string(),
                ..valid_fields()
            };
            assert_eq!(
                validate(&fields),
                Err(ValidationError::EmailInvalid),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn test_missing_project_and_rating() {
        let fields = FormFields {
            project: String::new(),
            ..valid_fields()
        };
        assert_eq!(validate(&fields), Err(ValidationError::ProjectMissing));

        let fields = FormFields {
            rating: "  ".to_string(),
            ..valid_fields()
        };
        assert_eq!(validate(&fields), Err(ValidationError::RatingMissing));
    }

    #[test]
    fn test_empty_optionals_stored_as_absent() {
        let fields = FormFields {
            locality: "  ".to_string(),
            comments: String::new(),
            ..valid_fields()
        };
        let entry = validate(&fields).unwrap();
        assert_eq!(entry.locality, None);
        assert_eq!(entry.comments, None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::StudentNameMissing.to_string(),
            "Student name is required"
        );
        assert_eq!(
            ValidationError::EmailInvalid.to_string(),
            "A valid email is required"
        );
        assert_eq!(
            ValidationError::ProjectMissing.to_string(),
            "Project / Subject is required"
        );
        assert_eq!(
            ValidationError::RatingMissing.to_string(),
            "Please select a rating"
        );
    }
}
