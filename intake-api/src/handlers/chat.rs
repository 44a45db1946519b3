//! Chat intake: `POST /chat` and `GET /chat`.
//!
//! The inbound message is always persisted as its own record. When it comes
//! from a user (not flagged `isBot`), a bot reply is computed and persisted
//! as a second record, and both go back in one round trip so the client can
//! append them together. Conversation state lives entirely in the `chat:`
//! prefix; the server keeps nothing between requests.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;

use chatbot::generate_bot_response;
use intake_core::{ChatMessage, ChatRequest};

use super::fetch_records;
use crate::error::ApiError;
use crate::state::AppState;

/// User id recorded on synthesized bot replies.
const BOT_USER_ID: &str = "bot";

/// Response when the inbound message came from a user: both sides of the
/// exchange.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchangeResponse {
    pub success: bool,
    pub user_message: ChatMessage,
    pub bot_message: ChatMessage,
}

/// Response when the inbound message was itself a bot message.
#[derive(Debug, Serialize)]
pub struct ChatEchoResponse {
    pub success: bool,
    pub message: ChatMessage,
}

#[derive(Debug, Serialize)]
pub struct ChatListResponse {
    pub success: bool,
    pub messages: Vec<ChatMessage>,
}

pub async fn create_chat_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, ApiError> {
    let (text, user_id, is_bot) = request.into_parts()?;

    let inbound = ChatMessage::new(text, user_id, is_bot);
    state
        .store
        .set(&inbound.id, serde_json::to_value(&inbound)?)
        .await?;
    info!(id = %inbound.id, is_bot, "Stored chat message");

    if inbound.is_bot {
        return Ok(Json(ChatEchoResponse {
            success: true,
            message: inbound,
        })
        .into_response());
    }

    let reply = ChatMessage::new(
        generate_bot_response(&inbound.message).to_string(),
        BOT_USER_ID.to_string(),
        true,
    );
    state
        .store
        .set(&reply.id, serde_json::to_value(&reply)?)
        .await?;
    info!(id = %reply.id, "Stored bot reply");

    Ok(Json(ChatExchangeResponse {
        success: true,
        user_message: inbound,
        bot_message: reply,
    })
    .into_response())
}

pub async fn list_chat_messages(
    State(state): State<AppState>,
) -> Result<Json<ChatListResponse>, ApiError> {
    let mut messages: Vec<ChatMessage> = fetch_records(&state, "chat:").await?;
    messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(ChatListResponse {
        success: true,
        messages,
    }))
}
