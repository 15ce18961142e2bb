//! Bearer-token claims.
//!
//! Tokens are externally issued compact tokens: three dot-separated
//! base64url segments, the middle one a JSON claims object. This layer
//! never verifies signatures (the backend already did); it only decodes.
//! Anything that fails to decode is equivalent to "no session".

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

/// Decoded identity/authorization attributes of the current user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub email: String,
    /// Role name as issued; `None` when the token carries no role claim.
    pub role: Option<String>,
    pub is_admin: bool,
    pub special_access: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub issued_at: Option<DateTime<Utc>>,
    pub not_before: Option<DateTime<Utc>>,
}

impl Claims {
    /// Claims are usable only while unexpired; an expired token is
    /// indistinguishable from no token.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Raw claim payload as the issuer encodes it.
///
/// `isAdmin` arrives as a bool or as the string `"true"` depending on the
/// issuer path, so it gets a tolerant deserializer.
#[derive(Debug, Deserialize)]
struct RawClaims {
    email: Option<String>,
    role: Option<String>,
    #[serde(rename = "isAdmin", default, deserialize_with = "flexible_bool")]
    is_admin: bool,
    #[serde(rename = "specialAccess")]
    special_access: Option<String>,
    exp: i64,
    iat: Option<i64>,
    nbf: Option<i64>,
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Text(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        Some(BoolOrString::Bool(value)) => Ok(value),
        Some(BoolOrString::Text(value)) => Ok(value.eq_ignore_ascii_case("true")),
        None => Ok(false),
    }
}

fn timestamp(seconds: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0).single()
}

/// Decode a compact token's claim payload.
///
/// Returns `None` for anything that is not three dot-separated segments
/// with a base64url JSON object in the middle, or whose `exp` is not a
/// representable timestamp. Callers treat `None` as "not authenticated".
pub fn decode_token(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (_header, payload, _signature) =
        (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim()).ok()?;
    let raw: RawClaims = serde_json::from_slice(&bytes).ok()?;

    Some(Claims {
        email: raw.email.unwrap_or_default(),
        role: raw.role.filter(|r| !r.is_empty()),
        is_admin: raw.is_admin,
        special_access: raw.special_access,
        expires_at: timestamp(raw.exp)?,
        issued_at: raw.iat.and_then(timestamp),
        not_before: raw.nbf.and_then(timestamp),
    })
}

#[cfg(test)]
pub(crate) mod test_tokens {
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    /// Build a well-formed (unsigned) token around the given claim JSON.
    pub fn token_with_payload(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{body}.sig")
    }
}

#[cfg(test)]
mod tests {
    use super::test_tokens::token_with_payload;
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    #[test]
    fn decodes_a_full_claim_set() {
        let exp = Utc::now() + Duration::hours(1);
        let token = token_with_payload(&json!({
            "email": "staff@example.com",
            "role": "Internal",
            "isAdmin": false,
            "specialAccess": "Contractors",
            "exp": exp.timestamp(),
            "iat": exp.timestamp() - 3600,
            "nbf": exp.timestamp() - 3600,
        }));

        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.email, "staff@example.com");
        assert_eq!(claims.role.as_deref(), Some("Internal"));
        assert!(!claims.is_admin);
        assert_eq!(claims.special_access.as_deref(), Some("Contractors"));
        assert!(claims.is_valid(Utc::now()));
    }

    #[test]
    fn string_typed_is_admin_claim_is_tolerated() {
        let token = token_with_payload(&json!({
            "email": "admin@example.com",
            "role": "External",
            "isAdmin": "true",
            "exp": (Utc::now() + Duration::hours(1)).timestamp(),
        }));
        assert!(decode_token(&token).unwrap().is_admin);

        let token = token_with_payload(&json!({
            "email": "user@example.com",
            "isAdmin": "false",
            "exp": (Utc::now() + Duration::hours(1)).timestamp(),
        }));
        assert!(!decode_token(&token).unwrap().is_admin);
    }

    #[test]
    fn missing_optional_claims_default() {
        let token = token_with_payload(&json!({
            "exp": (Utc::now() + Duration::hours(1)).timestamp(),
        }));
        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.email, "");
        assert_eq!(claims.role, None);
        assert!(!claims.is_admin);
        assert_eq!(claims.special_access, None);
    }

    #[test]
    fn malformed_tokens_decode_to_none() {
        assert_eq!(decode_token(""), None);
        assert_eq!(decode_token("only-one-segment"), None);
        assert_eq!(decode_token("a.b"), None);
        assert_eq!(decode_token("a.b.c.d"), None);
        assert_eq!(decode_token("a.!!!not-base64!!!.c"), None);

        // Valid base64 but not a JSON object.
        let bad = format!(
            "h.{}.s",
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("plain text")
        );
        assert_eq!(decode_token(&bad), None);
    }

    #[test]
    fn expired_claims_are_invalid() {
        let token = token_with_payload(&json!({
            "email": "late@example.com",
            "exp": (Utc::now() - Duration::hours(1)).timestamp(),
        }));
        let claims = decode_token(&token).unwrap();
        assert!(!claims.is_valid(Utc::now()));
    }

    #[test]
    fn empty_role_claim_is_absent() {
        let token = token_with_payload(&json!({
            "role": "",
            "exp": (Utc::now() + Duration::hours(1)).timestamp(),
        }));
        assert_eq!(decode_token(&token).unwrap().role, None);
    }
}
