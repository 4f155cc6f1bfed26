use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried in the signed session cookie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    /// Stable per-visitor identifier; the anti-forgery token is derived from it.
    pub sid: String,
    /// True once the shared access password has been entered.
    pub auth: bool,
    pub iat: i64,
    pub exp: i64,
}

pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Sign a session token for `sid` that expires after `ttl_minutes`.
pub fn issue_session_token(
    secret: &[u8],
    sid: &str,
    authenticated: bool,
    ttl_minutes: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let exp = Duration::try_minutes(ttl_minutes)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| ErrorKind::MissingRequiredClaim("exp".to_string()))?;
    let claims = SessionClaims {
        sid: sid.to_string(),
        auth: authenticated,
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
}

/// Verify signature and expiry. Any failure means the visitor gets a new
/// anonymous session.
pub fn validate_session_token(
    secret: &[u8],
    token: &str,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-session-secret";

    #[test]
    fn out_of_range_ttl_is_an_error() {
        let err = issue_session_token(SECRET, "sid", false, 200_000_000_000).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MissingRequiredClaim(claim) if claim == "exp"));
    }

    #[test]
    fn issue_and_validate_roundtrip() {
        let sid = new_session_id();
        let token = issue_session_token(SECRET, &sid, true, 30).unwrap();
        let claims = validate_session_token(SECRET, &token).unwrap();
        assert_eq!(claims.sid, sid);
        assert!(claims.auth);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_session_token(SECRET, "sid-1", true, 30).unwrap();
        assert!(validate_session_token(b"another-secret", &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Past the default 60s leeway
        let token = issue_session_token(SECRET, "sid-1", true, -5).unwrap();
        assert!(validate_session_token(SECRET, &token).is_err());
    }

    #[test]
    fn tampered_token_is_rejected() {
        let token = issue_session_token(SECRET, "sid-1", false, 30).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(validate_session_token(SECRET, &tampered).is_err());
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(new_session_id(), new_session_id());
    }
}
