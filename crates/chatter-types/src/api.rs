use serde::{Deserialize, Deserializer};

/// Missing or `null` text fields read as empty so the services, not the JSON
/// extractor, decide what to do with them.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// -- Accounts --

/// Body of `/register` and `/login`.
///
/// Clients often post a whole `Account`, so `accountId` and any other extra
/// keys are accepted and ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub password: String,
}

// -- Messages --

/// Body of `POST /messages`. `messageId` and `timePostedEpoch` are assigned
/// by the server; caller-supplied values are dropped.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    #[serde(default)]
    pub message_id: Option<i64>,
    #[serde(default)]
    pub posted_by: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message_text: String,
    #[serde(default)]
    pub time_posted_epoch: Option<i64>,
}

/// Body of `PATCH /messages/{id}`. Only `messageText` is applied.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    #[serde(default)]
    pub message_id: Option<i64>,
    #[serde(default)]
    pub posted_by: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message_text: String,
    #[serde(default)]
    pub time_posted_epoch: Option<i64>,
}
