//! Contact Message Entity

use chrono::{DateTime, Utc};
use kernel::id::Id;
use kernel::validation::{Validate, ValidationErrors};
use serde::{Deserialize, Serialize};

pub const CONTACT_NAME_MAX_LENGTH: usize = 255;
pub const CONTACT_EMAIL_MAX_LENGTH: usize = 255;
pub const CONTACT_SUBJECT_MAX_LENGTH: usize = 500;

/// Message left through the public contact form
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Id<ContactMessage>,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Submission payload; `isRead` and `createdAt` are server-controlled
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl Validate for NewContactMessage {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.required("name", &self.name);
        errors.max_chars("name", &self.name, CONTACT_NAME_MAX_LENGTH);

        if self.email.trim().is_empty() {
            errors.add("email", "is required");
        } else {
            errors.email("email", self.email.trim());
            errors.max_chars("email", &self.email, CONTACT_EMAIL_MAX_LENGTH);
        }

        if let Some(subject) = &self.subject {
            errors.max_chars("subject", subject, CONTACT_SUBJECT_MAX_LENGTH);
        }
        errors.required("message", &self.message);

        errors.into_result()
    }
}

impl ContactMessage {
    pub fn receive(id: Id<ContactMessage>, new: NewContactMessage, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            subject: new.subject,
            message: new.message,
            is_read: false,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_message_is_valid() {
        let new: NewContactMessage =
            serde_json::from_str(r#"{"name":"A","email":"a@b.com","message":"hi"}"#).unwrap();
        assert!(new.validate().is_ok());
    }

    #[test]
    fn test_bad_email_is_rejected() {
        let new = NewContactMessage {
            name: "A".into(),
            email: "not-an-email".into(),
            message: "hi".into(),
            ..Default::default()
        };
        let errors = new.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].field(), "email");
    }

    #[test]
    fn test_length_caps() {
        let new = NewContactMessage {
            name: "n".repeat(256),
            email: "a@b.com".into(),
            subject: Some("s".repeat(501)),
            message: "hi".into(),
        };
        let errors = new.validate().unwrap_err();
        let fields: Vec<_> = errors.errors().iter().map(|e| e.field()).collect();
        assert_eq!(fields, ["name", "subject"]);
    }

    #[test]
    fn test_client_cannot_mark_as_read() {
        let new: NewContactMessage = serde_json::from_str(
            r#"{"name":"A","email":"a@b.com","message":"hi","isRead":true}"#,
        )
        .unwrap();
        let message = ContactMessage::receive(Id::new(1), new, Utc::now());
        assert!(!message.is_read);
    }
}
