//! Validation and persistence coordination for accounts and messages.
//!
//! Services are synchronous and borrow a [`Store`](chatter_db::Store);
//! handlers run them on the blocking pool.

pub mod account;
pub mod message;

pub use account::AccountService;
pub use message::MessageService;
