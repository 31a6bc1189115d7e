//! JWT issuance and verification service.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Message returned for any token failure: missing, malformed, expired,
/// bad signature, wrong token type.
pub const TOKEN_INVALID: &str = "Token is invalid or expired";

/// Which half of the credential pair a token is.
///
/// Access tokens authorize resource requests; refresh tokens are only
/// accepted by the refresh endpoint. The claim keeps a stolen refresh token
/// from doubling as a long-lived access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims carried by every issued JWT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user's id.
    pub sub: i64,
    /// Login email at issuance time.
    pub email: String,
    pub token_type: TokenType,
    /// Issued-at, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds.
    pub exp: i64,
}

/// An access/refresh pair issued at login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Service issuing and verifying HS256 JWTs.
///
/// Verification is stateless: a token is valid iff its signature checks out,
/// it has not expired, and its `token_type` matches the context. No
/// revocation list, no database round trip.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
}

impl TokenService {
    /// Creates a token service from the shared signing secret and TTLs.
    pub fn new(secret: &str, access_ttl_secs: u64, refresh_ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl_secs: access_ttl_secs as i64,
            refresh_ttl_secs: refresh_ttl_secs as i64,
        }
    }

    /// Issues a fresh access/refresh pair for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue_pair(&self, user_id: i64, email: &str) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access: self.issue(user_id, email, TokenType::Access, self.access_ttl_secs)?,
            refresh: self.issue(user_id, email, TokenType::Refresh, self.refresh_ttl_secs)?,
        })
    }

    /// Verifies an access token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with [`TOKEN_INVALID`] on any
    /// verification failure, including a refresh token presented as access.
    pub fn verify_access(&self, token: &str) -> Result<Claims, AppError> {
        self.verify(token, TokenType::Access)
    }

    /// Exchanges a valid refresh token for a new access token.
    ///
    /// The subject and email are carried over from the refresh claims; the
    /// refresh token itself stays valid until its own expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with [`TOKEN_INVALID`] if the
    /// refresh token fails verification.
    pub fn refresh_access(&self, refresh_token: &str) -> Result<String, AppError> {
        let claims = self.verify(refresh_token, TokenType::Refresh)?;
        self.issue(
            claims.sub,
            &claims.email,
            TokenType::Access,
            self.access_ttl_secs,
        )
    }

    fn issue(
        &self,
        user_id: i64,
        email: &str,
        token_type: TokenType,
        ttl_secs: i64,
    ) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            token_type,
            iat: now,
            exp: now + ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")))
    }

    fn verify(&self, token: &str, expected: TokenType) -> Result<Claims, AppError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::unauthorized(TOKEN_INVALID))?;

        if data.claims.token_type != expected {
            return Err(AppError::unauthorized(TOKEN_INVALID));
        }

        Ok(data.claims)
    }
}
