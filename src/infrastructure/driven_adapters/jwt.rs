//! JWT Token Service
//!
//! HS256 tokens for login sessions, QQ bind hand-off and e-mail
//! verification links. Non-login tokens carry a `purpose` claim and are
//! rejected when presented for another purpose.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::domain::gateways::TokenService;
use crate::domain::models::user::{User, UserId};
use crate::shared::errors::ServiceError;

use super::config::{EmailConfig, JwtConfig};

const PURPOSE_QQ_BIND: &str = "qq_bind";
const PURPOSE_EMAIL_VERIFY: &str = "email_verify";

/// JWT claims of a login token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub username: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct BindClaims {
    purpose: String,
    openid: String,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct EmailClaims {
    purpose: String,
    user_id: i64,
    email: String,
    iat: i64,
    exp: i64,
}

/// Validation rules shared by every token: explicit algorithm, mandatory expiry
#[must_use]
pub fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 60;
    validation
}

pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: i64,
    bind_ttl: i64,
    email_ttl: i64,
}

impl JwtTokenService {
    #[must_use]
    pub fn new(secret: &str, access_ttl: i64, bind_ttl: i64, email_ttl: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            bind_ttl,
            email_ttl,
        }
    }

    #[must_use]
    pub fn from_config(jwt: &JwtConfig, email: &EmailConfig) -> Self {
        Self::new(&jwt.secret, jwt.expires_in_secs, jwt.bind_token_expires_secs, email.token_expires_secs)
    }

    fn sign<T: Serialize>(&self, claims: &T) -> Result<String, ServiceError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| ServiceError::Token(e.to_string()))
    }

    fn verify<T: DeserializeOwned>(&self, token: &str) -> Option<T> {
        decode::<T>(token, &self.decoding_key, &validation())
            .inspect_err(|e| tracing::debug!(error = %e, "Token rejected"))
            .ok()
            .map(|data| data.claims)
    }
}

impl TokenService for JwtTokenService {
    fn issue_access_token(&self, user: &User) -> Result<String, ServiceError> {
        let now = Utc::now().timestamp();
        self.sign(&Claims {
            sub: user.id().to_string(),
            username: user.username().to_string(),
            iat: now,
            exp: now + self.access_ttl,
        })
    }

    fn sign_openid(&self, openid: &str) -> Result<String, ServiceError> {
        let now = Utc::now().timestamp();
        self.sign(&BindClaims {
            purpose: PURPOSE_QQ_BIND.to_string(),
            openid: openid.to_string(),
            iat: now,
            exp: now + self.bind_ttl,
        })
    }

    fn verify_openid(&self, token: &str) -> Option<String> {
        self.verify::<BindClaims>(token)
            .filter(|claims| claims.purpose == PURPOSE_QQ_BIND)
            .map(|claims| claims.openid)
    }

    fn sign_email_verification(&self, user_id: UserId, email: &str) -> Result<String, ServiceError> {
        let now = Utc::now().timestamp();
        self.sign(&EmailClaims {
            purpose: PURPOSE_EMAIL_VERIFY.to_string(),
            user_id: user_id.value(),
            email: email.to_string(),
            iat: now,
            exp: now + self.email_ttl,
        })
    }

    fn verify_email_token(&self, token: &str) -> Option<(UserId, String)> {
        self.verify::<EmailClaims>(token)
            .filter(|claims| claims.purpose == PURPOSE_EMAIL_VERIFY)
            .map(|claims| (UserId::new(claims.user_id), claims.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtTokenService {
        JwtTokenService::new("test-secret", 3600, 600, 86_400)
    }

    fn user() -> User {
        let now = Utc::now();
        User::restore(
            UserId::new(5),
            "alice01".into(),
            "hash".into(),
            "13800138000".into(),
            None,
            false,
            None,
            now,
            now,
        )
    }

    #[test]
    fn test_access_token_claims() {
        let token = service().issue_access_token(&user()).unwrap();
        let data = decode::<Claims>(&token, &DecodingKey::from_secret(b"test-secret"), &validation()).unwrap();

        assert_eq!(data.claims.sub, "5");
        assert_eq!(data.claims.username, "alice01");
        assert_eq!(data.claims.exp - data.claims.iat, 3600);
    }

    #[test]
    fn test_openid_token_roundtrip() {
        let svc = service();
        let token = svc.sign_openid("OPENID-1").unwrap();
        assert_eq!(svc.verify_openid(&token).as_deref(), Some("OPENID-1"));
    }

    #[test]
    fn test_tokens_are_bound_to_their_purpose() {
        let svc = service();
        let email_token = svc.sign_email_verification(UserId::new(5), "a@example.com").unwrap();
        let bind_token = svc.sign_openid("OPENID-1").unwrap();

        assert!(svc.verify_openid(&email_token).is_none());
        assert!(svc.verify_email_token(&bind_token).is_none());
        assert_eq!(
            svc.verify_email_token(&email_token),
            Some((UserId::new(5), "a@example.com".to_string()))
        );
    }

    #[test]
    fn test_rejects_foreign_signature_and_expired_tokens() {
        let other = JwtTokenService::new("other-secret", 3600, 600, 86_400);
        let token = other.sign_openid("OPENID-1").unwrap();
        assert!(service().verify_openid(&token).is_none());

        let expired = JwtTokenService::new("test-secret", 3600, -3600, 86_400);
        let token = expired.sign_openid("OPENID-1").unwrap();
        assert!(service().verify_openid(&token).is_none());
    }
}
