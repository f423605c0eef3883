use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;
use crate::{auth, messages};

/// All public routes. Transport layers (CORS, tracing) are added by the server.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/messages",
            get(messages::get_all_messages).post(messages::create_message),
        )
        .route(
            "/messages/{message_id}",
            get(messages::get_message)
                .delete(messages::delete_message)
                .patch(messages::update_message),
        )
        .route(
            "/accounts/{account_id}/messages",
            get(messages::get_messages_by_account),
        )
        .with_state(state)
}
