use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use chatter_types::api::{CreateMessageRequest, UpdateMessageRequest};
use chatter_types::models::Message;

use crate::error::ServiceError;
use crate::services::MessageService;
use crate::state::{AppState, run_blocking};

/// `POST /messages`
pub async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<Json<Message>, ServiceError> {
    let Json(req) = payload?;

    let message =
        run_blocking(&state, move |db| MessageService::new(db).create_message(req)).await?;
    Ok(Json(message))
}

/// `GET /messages`
pub async fn get_all_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Message>>, ServiceError> {
    let messages = run_blocking(&state, |db| MessageService::new(db).get_all_messages()).await?;
    Ok(Json(messages))
}

/// `GET /messages/{message_id}`. An unknown id is a 200 with an empty body.
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, ServiceError> {
    let message = run_blocking(&state, move |db| {
        MessageService::new(db).get_message_by_id(message_id)
    })
    .await?;

    Ok(match message {
        Some(message) => Json(message).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

/// `DELETE /messages/{message_id}`. Body is the number of rows removed.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Json<u32>, ServiceError> {
    let removed = run_blocking(&state, move |db| {
        MessageService::new(db).delete_message(message_id)
    })
    .await?;

    Ok(Json(removed))
}

/// `PATCH /messages/{message_id}`. Body is the number of rows updated.
pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
    payload: Result<Json<UpdateMessageRequest>, JsonRejection>,
) -> Result<Json<u32>, ServiceError> {
    let Json(req) = payload?;

    let updated = run_blocking(&state, move |db| {
        MessageService::new(db).update_message_text(message_id, &req.message_text)
    })
    .await?;

    Ok(Json(updated))
}

/// `GET /accounts/{account_id}/messages`
pub async fn get_messages_by_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<Json<Vec<Message>>, ServiceError> {
    let messages = run_blocking(&state, move |db| {
        MessageService::new(db).get_messages_by_user_id(account_id)
    })
    .await?;

    Ok(Json(messages))
}
