//! Contact intake: `POST /contacts` and `GET /contacts`.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use intake_core::{Contact, ContactRequest};

use super::fetch_records;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub contact: Contact,
}

#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub success: bool,
    pub contacts: Vec<Contact>,
}

pub async fn create_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), ApiError> {
    let contact = request.into_contact()?;
    let value = serde_json::to_value(&contact)?;
    state.store.set(&contact.id, value).await?;

    info!(id = %contact.id, "Stored contact submission");
    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            contact,
        }),
    ))
}

pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<ContactListResponse>, ApiError> {
    let mut contacts: Vec<Contact> = fetch_records(&state, "contact:").await?;
    contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(ContactListResponse {
        success: true,
        contacts,
    }))
}
