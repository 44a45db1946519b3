//! # intake-core
//!
//! Core types for the intake backend: record types ([`Booking`], [`Contact`],
//! [`ChatMessage`]), the request schemas the HTTP layer validates at the
//! boundary, record-id generation, and tracing initialization.
//! Transport-agnostic; used by storage, intake-api and intake-cli.

pub mod error;
pub mod id;
pub mod logger;
pub mod types;

pub use error::ValidationError;
pub use id::record_id;
pub use logger::init_tracing;
pub use types::{
    Booking, BookingRequest, ChatMessage, ChatRequest, Contact, ContactRequest,
};
