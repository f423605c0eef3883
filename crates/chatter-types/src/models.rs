use serde::{Deserialize, Serialize};

/// Longest message text the service accepts, in UTF-16 code units.
pub const MAX_MESSAGE_LEN: usize = 255;

/// Shortest password the service accepts, in UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 4;

/// Length of `text` in UTF-16 code units, the unit both limits are counted in.
/// Characters outside the Basic Multilingual Plane count as two.
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// A registered account as returned by `/register` and `/login`.
///
/// The password is stored and echoed back as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: i64,
    pub username: String,
    pub password: String,
}

/// A stored message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub message_id: i64,
    pub posted_by: i64,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_uses_camel_case_keys() {
        let account = Account {
            account_id: 1,
            username: "bob".into(),
            password: "abcd".into(),
        };
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["accountId"], 1);
        assert_eq!(json["username"], "bob");
        assert_eq!(json["password"], "abcd");
    }

    #[test]
    fn text_len_counts_utf16_units() {
        assert_eq!(text_len(""), 0);
        assert_eq!(text_len("abcd"), 4);
        assert_eq!(text_len("é"), 1);
        assert_eq!(text_len("😀"), 2);
        assert_eq!(text_len("😀😀"), 4);
    }

    #[test]
    fn message_uses_camel_case_keys() {
        let message = Message {
            message_id: 7,
            posted_by: 1,
            message_text: "hi".into(),
            time_posted_epoch: 1_700_000_000,
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["messageId"], 7);
        assert_eq!(json["postedBy"], 1);
        assert_eq!(json["messageText"], "hi");
        assert_eq!(json["timePostedEpoch"], 1_700_000_000_i64);
    }
}
