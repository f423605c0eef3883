use tracing::{debug, info};

use chatter_db::{Store, StoreError};
use chatter_types::api::AccountRequest;
use chatter_types::models::{Account, MIN_PASSWORD_LEN, text_len};

use crate::error::ServiceError;

pub struct AccountService<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> AccountService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Register a new account. The username must be non-blank and unused,
    /// the password at least `MIN_PASSWORD_LEN` UTF-16 units.
    pub fn register_account(&self, candidate: AccountRequest) -> Result<Account, ServiceError> {
        let AccountRequest { username, password, .. } = candidate;

        if username.trim().is_empty() {
            debug!("Registration rejected: blank username");
            return Err(ServiceError::invalid("username cannot be blank"));
        }
        if text_len(&password) < MIN_PASSWORD_LEN {
            debug!(%username, "Registration rejected: password too short");
            return Err(ServiceError::invalid("password is too short"));
        }

        if self.store.find_account_by_username(&username)?.is_some() {
            debug!(%username, "Registration rejected: username taken");
            return Err(ServiceError::Conflict(format!("username {username} is taken")));
        }

        // The UNIQUE column still guards a registration that raced past the lookup.
        let account = match self.store.insert_account(&username, &password) {
            Ok(account) => account,
            Err(StoreError::UniqueViolation) => {
                debug!(%username, "Registration lost race for username");
                return Err(ServiceError::Conflict(format!("username {username} is taken")));
            }
            Err(e) => return Err(e.into()),
        };

        info!(account_id = account.account_id, username = %account.username, "Account created");
        Ok(account)
    }

    /// Check credentials against the stored account. Creates no session.
    pub fn login(&self, username: &str, password: &str) -> Result<Account, ServiceError> {
        let Some(account) = self.store.find_account_by_username(username)? else {
            debug!(%username, "Login failed: unknown username");
            return Err(ServiceError::Unauthorized);
        };

        if account.password != password {
            debug!(%username, "Login failed: password mismatch");
            return Err(ServiceError::Unauthorized);
        }

        debug!(account_id = account.account_id, "Login succeeded");
        Ok(account)
    }
}
