//! Intake handlers, one module per resource.
//!
//! Each POST validates the typed request body, constructs the record (id,
//! timestamp and defaults stamped by the constructor) and performs exactly
//! one store write per persisted record. Each GET is a prefix scan re-sorted
//! by `createdAt` descending. There is no idempotency key: a client retry
//! after a timeout can create duplicate records.

pub mod bookings;
pub mod chat;
pub mod contacts;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::state::AppState;

/// Scans one record kind out of the store and deserializes it.
pub(crate) async fn fetch_records<T: DeserializeOwned>(
    state: &AppState,
    prefix: &str,
) -> Result<Vec<T>, ApiError> {
    let values = state.store.get_by_prefix(prefix).await?;
    let mut records = Vec::with_capacity(values.len());
    for value in values {
        records.push(serde_json::from_value(value)?);
    }
    Ok(records)
}
