use chatter_types::models::{Account, Message};

use crate::{Database, StoreError};

/// Storage port used by the account and message services.
///
/// Each call is atomic on its own; nothing spans calls. Implementations
/// must report a taken username as `StoreError::UniqueViolation`.
pub trait Store: Send + Sync {
    fn insert_account(&self, username: &str, password: &str) -> Result<Account, StoreError>;
    fn find_account_by_id(&self, account_id: i64) -> Result<Option<Account>, StoreError>;
    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>, StoreError>;

    fn insert_message(
        &self,
        posted_by: i64,
        message_text: &str,
        time_posted_epoch: i64,
    ) -> Result<Message, StoreError>;
    fn find_message_by_id(&self, message_id: i64) -> Result<Option<Message>, StoreError>;
    fn list_messages(&self) -> Result<Vec<Message>, StoreError>;
    fn list_messages_by_poster(&self, posted_by: i64) -> Result<Vec<Message>, StoreError>;
    /// Returns whether a row with `message_id` existed and was changed.
    fn update_message_text(&self, message_id: i64, message_text: &str) -> Result<bool, StoreError>;
    /// Returns whether a row with `message_id` existed and was removed.
    fn delete_message(&self, message_id: i64) -> Result<bool, StoreError>;
}

impl Store for Database {
    fn insert_account(&self, username: &str, password: &str) -> Result<Account, StoreError> {
        self.create_account(username, password).map(Into::into)
    }

    fn find_account_by_id(&self, account_id: i64) -> Result<Option<Account>, StoreError> {
        Ok(self.get_account_by_id(account_id)?.map(Into::into))
    }

    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.get_account_by_username(username)?.map(Into::into))
    }

    fn insert_message(
        &self,
        posted_by: i64,
        message_text: &str,
        time_posted_epoch: i64,
    ) -> Result<Message, StoreError> {
        self.create_message(posted_by, message_text, time_posted_epoch)
            .map(Into::into)
    }

    fn find_message_by_id(&self, message_id: i64) -> Result<Option<Message>, StoreError> {
        Ok(self.get_message(message_id)?.map(Into::into))
    }

    fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        Ok(self.get_messages()?.into_iter().map(Into::into).collect())
    }

    fn list_messages_by_poster(&self, posted_by: i64) -> Result<Vec<Message>, StoreError> {
        Ok(self
            .get_messages_by_poster(posted_by)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    fn update_message_text(&self, message_id: i64, message_text: &str) -> Result<bool, StoreError> {
        Ok(self.set_message_text(message_id, message_text)? > 0)
    }

    fn delete_message(&self, message_id: i64) -> Result<bool, StoreError> {
        Ok(self.remove_message(message_id)? > 0)
    }
}
