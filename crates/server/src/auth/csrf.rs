use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const CSRF_HEADER: &str = "x-csrf-token";

fn mac_for(secret: &[u8], sid: &str) -> HmacSha256 {
    let mut mac = keyed_mac(secret);
    mac.update(b"csrf:");
    mac.update(sid.as_bytes());
    mac
}

/// Anti-forgery token bound to a session id.
pub fn csrf_token(secret: &[u8], sid: &str) -> String {
    hex::encode(mac_for(secret, sid).finalize().into_bytes())
}

/// Constant-time comparison of a submitted token against the session's.
pub fn verify_csrf(secret: &[u8], sid: &str, submitted: &str) -> bool {
    let Ok(bytes) = hex::decode(submitted.trim()) else {
        return false;
    };
    mac_for(secret, sid).verify_slice(&bytes).is_ok()
}

fn keyed_mac(key: &[u8]) -> HmacSha256 {
    HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length")
}

/// Constant-time equality for bearer secrets. Both values are MACed under
/// `key` first, so differing lengths compare in constant time too.
pub fn secrets_match(key: &[u8], expected: &str, presented: &str) -> bool {
    let mut mac = keyed_mac(key);
    mac.update(expected.as_bytes());
    let expected = mac.finalize().into_bytes();

    let mut mac = keyed_mac(key);
    mac.update(presented.as_bytes());
    mac.verify_slice(&expected).is_ok()
}
