//! Directory records as served by `GET /users`

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque record identifier.
///
/// The wire form is whatever the directory sends: a JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        UserId::Number(n)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        // Route parameters arrive as text; keep numeric ids numeric.
        s.parse::<i64>()
            .map(UserId::Number)
            .unwrap_or_else(|_| UserId::Text(s.to_owned()))
    }
}

/// A single directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl UserRecord {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_and_string_ids() {
        let records: Vec<UserRecord> = serde_json::from_str(
            r#"[{"id":1,"name":"Ana","email":"ana@x.com"},
                {"id":"u-2","name":"Ben","email":"ben@x.com"}]"#,
        )
        .unwrap();

        assert_eq!(records[0].id, UserId::Number(1));
        assert_eq!(records[1].id, UserId::Text("u-2".into()));
    }

    #[test]
    fn rejects_records_missing_fields() {
        let result: Result<Vec<UserRecord>, _> =
            serde_json::from_str(r#"[{"id":1,"name":"Ana"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn route_params_keep_numeric_ids() {
        assert_eq!(UserId::from("42"), UserId::Number(42));
        assert_eq!(UserId::from("ana"), UserId::Text("ana".into()));
        assert_eq!(UserId::from("42").to_string(), "42");
    }
}
