//! Compact token decoding.
//!
//! Only the payload segment is read. The signature is never checked and
//! expiry is not enforced: the remote API is the authorization boundary,
//! the claims here only steer what the UI shows.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde_json::Value;
use shared_types::Claims;
use thiserror::Error;

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// Token payloads are base64url, but some issuers emit the standard
/// alphabet. Padding is accepted either way.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("expected 3 dot-separated segments, found {0}")]
    Segments(usize),

    #[error("payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Decode the claims of a compact `header.payload.signature` token.
pub fn try_decode_claims(token: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::Segments(segments.len()));
    }

    let payload = segments[1];
    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .or_else(|url_err| STANDARD_LENIENT.decode(payload).map_err(|_| url_err))?;

    match serde_json::from_slice(&bytes)? {
        Value::Object(map) => Ok(Claims::from(map)),
        _ => Err(DecodeError::NotAnObject),
    }
}

/// Decode the claims of a token, logging and swallowing any failure.
pub fn decode_claims(token: &str) -> Option<Claims> {
    match try_decode_claims(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode session token");
            None
        }
    }
}

#[cfg(test)]
pub(crate) fn encode_token(payload: &str) -> String {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use pretty_assertions::assert_eq;
    use shared_types::{Role, SubjectId};

    #[test]
    fn decodes_admin_payload() {
        let token = format!("x.{}.y", STANDARD.encode(r#"{"role":"admin","id":"1"}"#));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role.as_deref(), Some("admin"));
        assert_eq!(claims.id, Some(SubjectId::Text("1".to_string())));
        assert_eq!(claims.role(), Role::Admin);
    }

    #[test]
    fn decodes_url_safe_unpadded_payload() {
        let token = encode_token(r#"{"role":"employer","note":"?>?>"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role(), Role::Employer);
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert!(matches!(try_decode_claims(""), Err(DecodeError::Segments(1))));
        assert!(matches!(try_decode_claims("a.b"), Err(DecodeError::Segments(2))));
        assert!(matches!(
            try_decode_claims("a.b.c.d"),
            Err(DecodeError::Segments(4))
        ));
    }

    #[test]
    fn rejects_invalid_encoding() {
        assert!(matches!(
            try_decode_claims("x.!!!not-base64!!!.y"),
            Err(DecodeError::Encoding(_))
        ));
    }

    #[test]
    fn rejects_invalid_json() {
        let token = format!("x.{}.y", STANDARD.encode("{role: admin"));
        assert!(matches!(try_decode_claims(&token), Err(DecodeError::Payload(_))));
    }

    #[test]
    fn rejects_non_object_payloads() {
        for payload in ["[1,2,3]", "\"admin\"", "42", "null"] {
            let token = encode_token(payload);
            assert!(
                matches!(try_decode_claims(&token), Err(DecodeError::NotAnObject)),
                "{payload}"
            );
        }
    }

    #[test]
    fn decode_claims_swallows_errors() {
        assert_eq!(decode_claims("garbage"), None);
        assert_eq!(decode_claims("x..y"), None);
    }

    #[test]
    fn uninterpreted_claims_never_cost_the_role() {
        let cases = [
            (r#"{"sub":"1","id":"1","role":"admin"}"#, Role::Admin),
            (r#"{"id":"1","role":"admin","exp":1700000000.5}"#, Role::Admin),
            (r#"{"id":{"$oid":"abc"},"role":"employer"}"#, Role::Employer),
            (r#"{"role":"employer","iat":null,"email":["a","b"]}"#, Role::Employer),
        ];
        for (payload, expected) in cases {
            let claims = try_decode_claims(&encode_token(payload))
                .unwrap_or_else(|e| panic!("{payload}: {e}"));
            assert_eq!(claims.role(), expected, "{payload}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let token = format!("  {}\n", encode_token(r#"{"role":"admin"}"#));
        assert_eq!(decode_claims(&token).unwrap().role(), Role::Admin);
    }
}
