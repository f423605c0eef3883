use crate::models::{AccountRow, MessageRow};
use crate::{Database, StoreError};
use rusqlite::{Connection, OptionalExtension, Row};

type Result<T> = std::result::Result<T, StoreError>;

const MESSAGE_COLUMNS: &str = "message_id, posted_by, message_text, time_posted_epoch";

impl Database {
    // -- Accounts --

    /// Insert an account and return it with its generated id.
    /// A taken username yields `StoreError::UniqueViolation`.
    pub fn create_account(&self, username: &str, password: &str) -> Result<AccountRow> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO account (username, password) VALUES (?1, ?2)",
                (username, password),
            )?;
            Ok(AccountRow {
                account_id: conn.last_insert_rowid(),
                username: username.to_string(),
                password: password.to_string(),
            })
        })
    }

    pub fn get_account_by_username(&self, username: &str) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT account_id, username, password FROM account WHERE username = ?1",
                    [username],
                    account_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    pub fn get_account_by_id(&self, account_id: i64) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT account_id, username, password FROM account WHERE account_id = ?1",
                    [account_id],
                    account_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    // -- Messages --

    pub fn create_message(
        &self,
        posted_by: i64,
        message_text: &str,
        time_posted_epoch: i64,
    ) -> Result<MessageRow> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO message (posted_by, message_text, time_posted_epoch) VALUES (?1, ?2, ?3)",
                rusqlite::params![posted_by, message_text, time_posted_epoch],
            )?;
            Ok(MessageRow {
                message_id: conn.last_insert_rowid(),
                posted_by,
                message_text: message_text.to_string(),
                time_posted_epoch,
            })
        })
    }

    pub fn get_message(&self, message_id: i64) -> Result<Option<MessageRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    &format!("SELECT {MESSAGE_COLUMNS} FROM message WHERE message_id = ?1"),
                    [message_id],
                    message_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    /// All messages in insertion order.
    pub fn get_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| query_messages(conn, None))
    }

    pub fn get_messages_by_poster(&self, posted_by: i64) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| query_messages(conn, Some(posted_by)))
    }

    /// Returns the number of rows changed (0 or 1).
    pub fn set_message_text(&self, message_id: i64, message_text: &str) -> Result<usize> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE message SET message_text = ?1 WHERE message_id = ?2",
                rusqlite::params![message_text, message_id],
            )?;
            Ok(changed)
        })
    }

    /// Returns the number of rows removed (0 or 1).
    pub fn remove_message(&self, message_id: i64) -> Result<usize> {
        self.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM message WHERE message_id = ?1", [message_id])?;
            Ok(removed)
        })
    }
}

fn query_messages(conn: &Connection, posted_by: Option<i64>) -> Result<Vec<MessageRow>> {
    let filter = if posted_by.is_some() { "WHERE posted_by = ?1" } else { "" };
    let mut stmt = conn.prepare(&format!(
        "SELECT {MESSAGE_COLUMNS} FROM message {filter} ORDER BY message_id"
    ))?;

    let params: Vec<&dyn rusqlite::types::ToSql> = match &posted_by {
        Some(id) => vec![id as &dyn rusqlite::types::ToSql],
        None => vec![],
    };

    let rows = stmt
        .query_map(params.as_slice(), message_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn account_from_row(row: &Row<'_>) -> rusqlite::Result<AccountRow> {
    Ok(AccountRow {
        account_id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
    })
}

fn message_from_row(row: &Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok(MessageRow {
        message_id: row.get(0)?,
        posted_by: row.get(1)?,
        message_text: row.get(2)?,
        time_posted_epoch: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn account_ids_are_generated_in_order() {
        let db = db();
        let alice = db.create_account("alice", "pass1").unwrap();
        let bob = db.create_account("bob", "pass2").unwrap();
        assert_eq!(alice.account_id, 1);
        assert_eq!(bob.account_id, 2);

        let found = db.get_account_by_username("bob").unwrap().unwrap();
        assert_eq!(found.account_id, 2);
        assert_eq!(found.password, "pass2");
        assert!(db.get_account_by_id(3).unwrap().is_none());
    }

    #[test]
    fn duplicate_username_is_a_unique_violation() {
        let db = db();
        db.create_account("bob", "abcd").unwrap();
        let err = db.create_account("bob", "efgh").err().unwrap();
        assert!(matches!(err, StoreError::UniqueViolation));

        let stored = db.get_account_by_username("bob").unwrap().unwrap();
        assert_eq!(stored.password, "abcd");
    }

    #[test]
    fn username_lookup_is_case_sensitive() {
        let db = db();
        db.create_account("Bob", "abcd").unwrap();
        assert!(db.get_account_by_username("bob").unwrap().is_none());
    }

    #[test]
    fn message_for_unknown_account_is_rejected() {
        let db = db();
        let err = db.create_message(42, "hi", 0).err().unwrap();
        assert!(matches!(err, StoreError::Sqlite(_)));
        assert!(db.get_messages().unwrap().is_empty());
    }

    #[test]
    fn messages_list_and_filter_by_poster() {
        let db = db();
        let a = db.create_account("a", "pass").unwrap().account_id;
        let b = db.create_account("b", "pass").unwrap().account_id;
        db.create_message(a, "one", 10).unwrap();
        db.create_message(b, "two", 20).unwrap();
        db.create_message(a, "three", 30).unwrap();

        let all: Vec<String> = db
            .get_messages()
            .unwrap()
            .into_iter()
            .map(|m| m.message_text)
            .collect();
        assert_eq!(all, vec!["one", "two", "three"]);

        let by_a: Vec<String> = db
            .get_messages_by_poster(a)
            .unwrap()
            .into_iter()
            .map(|m| m.message_text)
            .collect();
        assert_eq!(by_a, vec!["one", "three"]);
        assert!(db.get_messages_by_poster(99).unwrap().is_empty());
    }

    #[test]
    fn update_and_delete_report_affected_rows() {
        let db = db();
        let a = db.create_account("a", "pass").unwrap().account_id;
        let id = db.create_message(a, "old", 10).unwrap().message_id;

        assert_eq!(db.set_message_text(id, "new").unwrap(), 1);
        assert_eq!(db.set_message_text(id + 1, "new").unwrap(), 0);

        let stored = db.get_message(id).unwrap().unwrap();
        assert_eq!(stored.message_text, "new");
        assert_eq!(stored.time_posted_epoch, 10);

        assert_eq!(db.remove_message(id).unwrap(), 1);
        assert_eq!(db.remove_message(id).unwrap(), 0);
        assert!(db.get_message(id).unwrap().is_none());
    }
}
