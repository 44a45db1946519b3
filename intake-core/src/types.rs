//! Record types and the request schemas validated at the HTTP boundary.
//!
//! Records are immutable once constructed: the constructors stamp the id,
//! `createdAt` and any defaults, and nothing in the system mutates a record
//! afterwards. JSON field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::record_id;

/// A session booking submitted through the booking form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub service: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub message: Option<String>,
    /// Always `"pending"`; no status transition exists in the system.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// One chat turn. User and bot messages share this shape and one storage
/// prefix; `is_bot` tells them apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub message: String,
    pub user_id: String,
    pub is_bot: bool,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a pending booking with a generated id and current timestamp.
    pub fn new(
        service: String,
        name: String,
        email: String,
        phone: String,
        date: Option<String>,
        time: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            id: record_id("booking"),
            service,
            name,
            email,
            phone,
            date,
            time,
            message,
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }
}

impl Contact {
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        subject: Option<String>,
        message: String,
    ) -> Self {
        Self {
            id: record_id("contact"),
            name,
            email,
            phone,
            subject,
            message,
            created_at: Utc::now(),
        }
    }
}

impl ChatMessage {
    pub fn new(message: String, user_id: String, is_bot: bool) -> Self {
        Self {
            id: record_id("chat"),
            message,
            user_id,
            is_bot,
            created_at: Utc::now(),
        }
    }
}

/// Booking form body. `service`, `name`, `email` and `phone` are required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Contact form body. `name`, `email` and `message` are required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Chat body. Only `message` is required; `user_id` defaults to
/// `"anonymous"` and `is_bot` to false.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub is_bot: Option<bool>,
}

/// Returns the trimmed value or a [`ValidationError`] naming the field.
fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::missing(field)),
    }
}

impl BookingRequest {
    pub fn into_booking(self) -> Result<Booking, ValidationError> {
        Ok(Booking::new(
            required("service", self.service)?,
            required("name", self.name)?,
            required("email", self.email)?,
            required("phone", self.phone)?,
            self.date,
            self.time,
            self.message,
        ))
    }
}

impl ContactRequest {
    pub fn into_contact(self) -> Result<Contact, ValidationError> {
        Ok(Contact::new(
            required("name", self.name)?,
            required("email", self.email)?,
            self.phone,
            self.subject,
            required("message", self.message)?,
        ))
    }
}

impl ChatRequest {
    /// Validates the body and splits it into the inbound message text plus
    /// the sender identity the handler persists.
    pub fn into_parts(self) -> Result<(String, String, bool), ValidationError> {
        let message = required("message", self.message)?;
        let user_id = self
            .user_id
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| "anonymous".to_string());
        Ok((message, user_id, self.is_bot.unwrap_or(false)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_request_rejects_missing_phone() {
        let req = BookingRequest {
            service: Some("basic-computer".into()),
            name: Some("Jane".into()),
            email: Some("jane@x.com".into()),
            phone: None,
            date: None,
            time: None,
            message: None,
        };
        let err = req.into_booking().unwrap_err();
        assert_eq!(err.field, "phone");
    }

    #[test]
    fn booking_request_rejects_blank_field() {
        let req = BookingRequest {
            service: Some("   ".into()),
            name: Some("Jane".into()),
            email: Some("jane@x.com".into()),
            phone: Some("+263700000000".into()),
            date: None,
            time: None,
            message: None,
        };
        let err = req.into_booking().unwrap_err();
        assert_eq!(err.field, "service");
    }

    #[test]
    fn booking_defaults_to_pending() {
        let booking = Booking::new(
            "basic-computer".into(),
            "Jane".into(),
            "jane@x.com".into(),
            "+263700000000".into(),
            None,
            None,
            None,
        );
        assert_eq!(booking.status, "pending");
        assert!(booking.id.starts_with("booking:"));
    }

    #[test]
    fn chat_request_defaults() {
        let req = ChatRequest {
            message: Some("hello".into()),
            user_id: None,
            is_bot: None,
        };
        let (message, user_id, is_bot) = req.into_parts().unwrap();
        assert_eq!(message, "hello");
        assert_eq!(user_id, "anonymous");
        assert!(!is_bot);
    }

    #[test]
    fn record_json_uses_camel_case() {
        let msg = ChatMessage::new("hi".into(), "u1".into(), false);
        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("isBot").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
