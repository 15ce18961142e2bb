//! Session state machine.
//!
//! Exactly one session exists per running client. It is rehydrated from
//! durable storage at startup, mutated only by [`Session::complete_login`]
//! and [`Session::logout`], and persisted after every mutation. Derived
//! attributes (role, admin flag, email) are recomputed from the token on
//! every read — nothing is cached beside it.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::claims::{Claims, decode_token};

/// Durable single-key string storage for the bearer token.
///
/// The browser original keeps this in `localStorage`; embedders provide
/// whatever equivalent they have. Absence of the key means logged out.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, token: &str);
    fn clear(&mut self);
}

/// In-memory token store for tests and headless embedders.
#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn save(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    fn clear(&mut self) {
        self.token = None;
    }
}

/// The process-wide session: `Anonymous` or `Authenticated(claims)`.
///
/// The state is fully determined by the held token: a token that decodes
/// to unexpired claims means authenticated, anything else means anonymous.
#[derive(Debug)]
pub struct Session<S: TokenStore> {
    store: S,
    token: Option<String>,
}

impl<S: TokenStore> Session<S> {
    /// Rehydrate from durable storage.
    ///
    /// A stored token that is expired or undecodable is cleared from
    /// storage immediately, so a stale login cannot linger.
    pub fn restore(store: S, now: DateTime<Utc>) -> Self {
        let mut session = Self { store, token: None };
        if let Some(token) = session.store.load() {
            match decode_token(&token) {
                Some(claims) if claims.is_valid(now) => {
                    debug!(email = %claims.email, "session restored from storage");
                    session.token = Some(token);
                }
                _ => {
                    info!("stored token expired or malformed; clearing");
                    session.store.clear();
                }
            }
        }
        session
    }

    /// Transition to `Authenticated` with a freshly exchanged token.
    ///
    /// Persists the token before returning. Used only by the login
    /// completion path.
    pub(crate) fn accept_token(&mut self, token: String) {
        self.store.save(&token);
        self.token = Some(token);
    }

    /// Clear the token from memory and durable storage. Always succeeds.
    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
        info!("session cleared");
    }

    /// The raw bearer token, for request construction.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Current claims, recomputed from the token; `None` when anonymous
    /// or expired.
    pub fn claims(&self, now: DateTime<Utc>) -> Option<Claims> {
        let claims = decode_token(self.token.as_deref()?)?;
        claims.is_valid(now).then_some(claims)
    }

    pub fn is_authenticated(&self, now: DateTime<Utc>) -> bool {
        self.claims(now).is_some()
    }

    pub fn current_role(&self, now: DateTime<Utc>) -> Option<String> {
        self.claims(now)?.role
    }

    pub fn is_admin(&self, now: DateTime<Utc>) -> bool {
        self.claims(now).is_some_and(|c| c.is_admin)
    }

    pub fn special_access(&self, now: DateTime<Utc>) -> Option<String> {
        self.claims(now)?.special_access
    }

    pub fn email(&self, now: DateTime<Utc>) -> Option<String> {
        self.claims(now).map(|c| c.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::test_tokens::token_with_payload;
    use chrono::Duration;
    use serde_json::json;

    fn valid_token(role: &str) -> String {
        token_with_payload(&json!({
            "email": "user@example.com",
            "role": role,
            "exp": (Utc::now() + Duration::hours(1)).timestamp(),
        }))
    }

    #[test]
    fn restore_with_valid_token_is_authenticated() {
        let store = MemoryTokenStore::with_token(valid_token("Internal"));
        let session = Session::restore(store, Utc::now());
        assert!(session.is_authenticated(Utc::now()));
        assert_eq!(session.current_role(Utc::now()).as_deref(), Some("Internal"));
    }

    #[test]
    fn restore_with_expired_token_clears_storage() {
        let expired = token_with_payload(&json!({
            "email": "late@example.com",
            "exp": (Utc::now() - Duration::hours(1)).timestamp(),
        }));
        let store = MemoryTokenStore::with_token(expired);
        let session = Session::restore(store, Utc::now());

        assert!(!session.is_authenticated(Utc::now()));
        assert_eq!(session.store.load(), None);
    }

    #[test]
    fn restore_with_garbage_token_clears_storage() {
        let store = MemoryTokenStore::with_token("not.a.token.at.all");
        let session = Session::restore(store, Utc::now());
        assert!(!session.is_authenticated(Utc::now()));
        assert_eq!(session.store.load(), None);
    }

    #[test]
    fn token_expiring_mid_session_reads_as_anonymous() {
        let soon = Utc::now() + Duration::seconds(30);
        let token = token_with_payload(&json!({
            "email": "brief@example.com",
            "role": "Partner",
            "exp": soon.timestamp(),
        }));
        let session = Session::restore(MemoryTokenStore::with_token(token), Utc::now());

        assert!(session.is_authenticated(Utc::now()));
        let later = soon + Duration::seconds(1);
        assert!(!session.is_authenticated(later));
        assert_eq!(session.current_role(later), None);
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let store = MemoryTokenStore::with_token(valid_token("Audit"));
        let mut session = Session::restore(store, Utc::now());
        session.logout();

        assert!(!session.is_authenticated(Utc::now()));
        assert_eq!(session.token(), None);
        assert_eq!(session.store.load(), None);
    }

    #[test]
    fn projections_recompute_from_the_token() {
        let token = token_with_payload(&json!({
            "email": "boss@example.com",
            "role": "External",
            "isAdmin": true,
            "specialAccess": "RealEstateDealMakers",
            "exp": (Utc::now() + Duration::hours(1)).timestamp(),
        }));
        let session = Session::restore(MemoryTokenStore::with_token(token), Utc::now());
        let now = Utc::now();

        assert!(session.is_admin(now));
        assert_eq!(session.email(now).as_deref(), Some("boss@example.com"));
        assert_eq!(
            session.special_access(now).as_deref(),
            Some("RealEstateDealMakers")
        );
    }
}
