//! Anonymous session identifiers and the cookie that carries them.
//!
//! A client that presents a non-empty session cookie keeps using it as-is; the
//! value is neither validated nor looked up. A client without one is issued a
//! fresh UUID v4, and only then does the response carry a `Set-Cookie`.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the cookie holding the session identifier.
pub const SESSION_COOKIE_NAME: &str = "session_id";

/// Lifetime of a stored result set, and max-age of a freshly issued cookie.
pub const SESSION_TTL: Duration = Duration::from_secs(3600);

/// Opaque per-client session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Issue a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session identifier for one request, and whether it was issued just now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSession {
    pub id: SessionId,
    pub is_new: bool,
}

impl ResolvedSession {
    /// Cookie to send back, present only for newly issued identifiers.
    pub fn cookie(&self) -> Option<SessionCookie> {
        self.is_new.then(|| SessionCookie::new(self.id.clone()))
    }
}

/// Resolve the session for a request from its incoming cookie value.
pub fn resolve(incoming_cookie: Option<&str>) -> ResolvedSession {
    match incoming_cookie {
        Some(value) if !value.is_empty() => ResolvedSession { id: SessionId::from(value), is_new: false },
        _ => {
            let id = SessionId::generate();
            tracing::info!(session_id = %id, "issued new session");
            ResolvedSession { id, is_new: true }
        }
    }
}

/// Instruction for the transport layer to set the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub value: SessionId,
    pub max_age: Duration,
}

impl SessionCookie {
    pub fn new(value: SessionId) -> Self {
        Self { value, max_age: SESSION_TTL }
    }

    /// Value for a `Set-Cookie` response header.
    pub fn header_value(&self) -> String {
        format!(
            "{}={}; HttpOnly; Max-Age={}; Path=/; SameSite=Lax",
            SESSION_COOKIE_NAME,
            self.value,
            self.max_age.as_secs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_cookie_is_trusted() {
        let resolved = resolve(Some("not-even-a-uuid"));
        assert_eq!(resolved.id.as_str(), "not-even-a-uuid");
        assert!(!resolved.is_new);
        assert!(resolved.cookie().is_none());
    }

    #[test]
    fn test_missing_cookie_issues_uuid() {
        let resolved = resolve(None);
        assert!(resolved.is_new);
        assert!(Uuid::parse_str(resolved.id.as_str()).is_ok());

        let cookie = resolved.cookie().unwrap();
        assert_eq!(cookie.value, resolved.id);
        assert_eq!(cookie.max_age, SESSION_TTL);
    }

    #[test]
    fn test_empty_cookie_is_treated_as_absent() {
        let resolved = resolve(Some(""));
        assert!(resolved.is_new);
        assert!(!resolved.id.as_str().is_empty());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = resolve(None);
        let b = resolve(None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_cookie_header_value() {
        let cookie = SessionCookie::new(SessionId::from("abc"));
        let header = cookie.header_value();

        assert!(header.starts_with("session_id=abc;"));
        assert!(header.contains("HttpOnly"));
        assert!(header.contains("Max-Age=3600"));
        assert!(!header.contains("Domain"));
    }

    #[test]
    fn test_session_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&SessionId::from("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
