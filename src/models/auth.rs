use serde::{Deserialize, Serialize};

/// Profile of the signed-in account as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub business_name: Option<String>,
    pub sector: String,
    pub location: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Authenticated identity: user profile plus bearer token.
///
/// Invariant: a `Session` only exists when both parts are present. The token
/// is never validated locally; an expired token surfaces on the next API call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    pub sector: String,
    pub location: String,
    pub language: String,
}

/// Payload of `/api/auth/login` and `/api/auth/register`.
///
/// A rejected request carries no `token`; the reason is in `detail`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl AuthResponse {
    /// Build a session only when the payload carries both token and user.
    pub fn into_session(self) -> Result<Session, Option<String>> {
        match (self.token, self.user) {
            (Some(token), Some(user)) => Ok(Session { user, token }),
            _ => Err(self.detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_auth_payload_builds_a_session() {
        let response: AuthResponse = serde_json::from_str(
            r#"{
                "message": "Login successful",
                "token": "jwt-abc",
                "user": {
                    "id": "u-1",
                    "username": "amina",
                    "email": "amina@example.com",
                    "business_name": null,
                    "sector": "it",
                    "location": "Nairobi",
                    "language": "en"
                }
            }"#,
        )
        .unwrap();

        let session = response.into_session().unwrap();
        assert_eq!(session.token, "jwt-abc");
        assert_eq!(session.user.email, "amina@example.com");
    }

    #[test]
    fn rejected_auth_payload_surfaces_detail_verbatim() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"detail": "Invalid credentials"}"#).unwrap();

        assert_eq!(
            response.into_session().unwrap_err().as_deref(),
            Some("Invalid credentials")
        );
    }

    #[test]
    fn token_without_user_is_not_a_session() {
        let response: AuthResponse = serde_json::from_str(r#"{"token": "jwt-abc"}"#).unwrap();
        assert!(response.into_session().is_err());
    }

    #[test]
    fn user_language_defaults_to_english() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u-2",
                "username": "joe",
                "email": "joe@example.com",
                "sector": "marketing",
                "location": "Lagos"
            }"#,
        )
        .unwrap();

        assert_eq!(user.language, "en");
        assert!(user.business_name.is_none());
    }
}
