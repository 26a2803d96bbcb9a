use serde::{Deserialize, Serialize};

/// Login input.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// New-user registration input.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The authenticated user record returned by the backend at login.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// An authenticated session.
///
/// Produced by login and passed explicitly into every operation that talks to the
/// backend; there is no ambient auth state. Dropping the session is the teardown.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    /// Value for the `Authorization` header on backend calls.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_value() {
        let session = Session {
            token: "abc123".to_string(),
            user: User {
                id: 1,
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
            },
        };
        assert_eq!(session.bearer(), "Bearer abc123");
    }

    #[test]
    fn test_session_deserializes_login_response() {
        let session: Session = serde_json::from_str(
            r#"{"token": "t0k", "user": {"id": 7, "name": "Ana", "email": "ana@example.com"}}"#,
        )
        .unwrap();
        assert_eq!(session.user.id, 7);
        assert_eq!(session.token, "t0k");
    }
}
