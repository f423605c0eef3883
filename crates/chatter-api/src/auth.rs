use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use chatter_types::api::AccountRequest;
use chatter_types::models::Account;

use crate::error::ServiceError;
use crate::services::AccountService;
use crate::state::{AppState, run_blocking};

/// `POST /register`
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<AccountRequest>, JsonRejection>,
) -> Result<Json<Account>, ServiceError> {
    let Json(req) = payload?;

    let account = run_blocking(&state, move |db| {
        AccountService::new(db).register_account(req)
    })
    .await?;

    Ok(Json(account))
}

/// `POST /login`. No token or session is issued; the matched account is echoed.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<AccountRequest>, JsonRejection>,
) -> Result<Json<Account>, ServiceError> {
    let Json(req) = payload?;

    let account = run_blocking(&state, move |db| {
        AccountService::new(db).login(&req.username, &req.password)
    })
    .await?;

    Ok(Json(account))
}
