use tracing::{debug, info};

use chatter_db::Store;
use chatter_types::api::CreateMessageRequest;
use chatter_types::models::{MAX_MESSAGE_LEN, Message, text_len};

use crate::error::ServiceError;

pub struct MessageService<'a, S: ?Sized> {
    store: &'a S,
}

/// Text must contain something other than whitespace and fit in
/// `MAX_MESSAGE_LEN` UTF-16 units. Interior content is never altered.
fn validate_text(text: &str) -> Result<(), ServiceError> {
    if text.trim().is_empty() {
        return Err(ServiceError::invalid("message text cannot be blank"));
    }
    if text_len(text) > MAX_MESSAGE_LEN {
        return Err(ServiceError::invalid(format!(
            "message text cannot exceed {MAX_MESSAGE_LEN} characters"
        )));
    }
    Ok(())
}

impl<'a, S: Store + ?Sized> MessageService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Validate and store a message. `messageId` and `timePostedEpoch` are
    /// assigned here; caller-supplied values are dropped.
    pub fn create_message(&self, candidate: CreateMessageRequest) -> Result<Message, ServiceError> {
        validate_text(&candidate.message_text).inspect_err(|e| debug!("Message rejected: {}", e))?;

        let Some(posted_by) = candidate.posted_by else {
            debug!("Message rejected: no poster");
            return Err(ServiceError::invalid("postedBy is required"));
        };
        if self.store.find_account_by_id(posted_by)?.is_none() {
            debug!(posted_by, "Message rejected: unknown poster");
            return Err(ServiceError::invalid(format!("account {posted_by} does not exist")));
        }

        let now = chrono::Utc::now().timestamp();
        let message = self
            .store
            .insert_message(posted_by, &candidate.message_text, now)?;

        info!(message_id = message.message_id, posted_by, "Message created");
        Ok(message)
    }

    pub fn get_all_messages(&self) -> Result<Vec<Message>, ServiceError> {
        let messages = self.store.list_messages()?;
        debug!(count = messages.len(), "Messages retrieved");
        Ok(messages)
    }

    pub fn get_message_by_id(&self, message_id: i64) -> Result<Option<Message>, ServiceError> {
        Ok(self.store.find_message_by_id(message_id)?)
    }

    /// Returns the number of messages removed: 1, or 0 when none had `message_id`.
    pub fn delete_message(&self, message_id: i64) -> Result<u32, ServiceError> {
        if self.store.delete_message(message_id)? {
            info!(message_id, "Message deleted");
            Ok(1)
        } else {
            debug!(message_id, "No message to delete");
            Ok(0)
        }
    }

    /// Replace the text of a message. Returns 0 when no message has
    /// `message_id`; poster and timestamp are left as they were.
    pub fn update_message_text(
        &self,
        message_id: i64,
        message_text: &str,
    ) -> Result<u32, ServiceError> {
        validate_text(message_text).inspect_err(|e| debug!(message_id, "Update rejected: {}", e))?;

        if self.store.update_message_text(message_id, message_text)? {
            info!(message_id, "Message updated");
            Ok(1)
        } else {
            debug!(message_id, "No message to update");
            Ok(0)
        }
    }

    pub fn get_messages_by_user_id(&self, posted_by: i64) -> Result<Vec<Message>, ServiceError> {
        Ok(self.store.list_messages_by_poster(posted_by)?)
    }
}
