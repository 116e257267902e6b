//! HS256 access tokens.
//!
//! Tokens are normally minted by the hosted identity provider and only
//! verified here. Roles may arrive as a `roles` list, a single `role`
//! claim, or under `app_metadata.roles`; all three are merged.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sockpress_core::ports::{AuthError, TokenClaims, TokenService};

const DEV_SECRET: &str = "sockpress-dev-secret";

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Checked against `iss` when set.
    pub issuer: Option<String>,
    /// Checked against `aud` when set.
    pub audience: Option<String>,
    /// Lifetime of tokens issued by [`TokenService::generate_token`].
    pub expiration_hours: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEV_SECRET.to_string(),
            issuer: None,
            audience: None,
            expiration_hours: 24,
        }
    }
}

impl JwtConfig {
    /// Read `JWT_SECRET`, `JWT_ISSUER`, `JWT_AUDIENCE` and
    /// `JWT_EXPIRATION_HOURS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using the development secret");
            defaults.secret.clone()
        });

        Self {
            secret,
            issuer: std::env::var("JWT_ISSUER").ok().filter(|s| !s.is_empty()),
            audience: std::env::var("JWT_AUDIENCE").ok().filter(|s| !s.is_empty()),
            expiration_hours: std::env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.expiration_hours),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct AppMetadata {
    #[serde(default)]
    roles: Vec<String>,
}

/// `aud` may be a single string or a list.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Audience {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    email: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    app_metadata: AppMetadata,
    exp: i64,
    #[serde(default)]
    iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    aud: Option<Audience>,
}

impl Claims {
    fn into_token_claims(self) -> Result<TokenClaims, AuthError> {
        let user_id = Uuid::parse_str(&self.sub)
            .map_err(|_| AuthError::InvalidToken(format!("subject is not a UUID: {}", self.sub)))?;

        let mut roles = self.roles;
        roles.extend(self.role);
        roles.extend(self.app_metadata.roles);
        roles.sort();
        roles.dedup();

        Ok(TokenClaims {
            user_id,
            email: self.email,
            roles,
            exp: self.exp,
        })
    }
}

pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::default();
        match &config.issuer {
            Some(issuer) => validation.set_issuer(&[issuer]),
            None => validation.iss = None,
        }
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            config,
        }
    }
}

impl TokenService for JwtTokenService {
    fn generate_token(
        &self,
        user_id: Uuid,
        email: &str,
        roles: Vec<String>,
    ) -> Result<String, AuthError> {
        let issued_at = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            roles,
            role: None,
            app_metadata: AppMetadata::default(),
            exp: (issued_at + TimeDelta::hours(self.config.expiration_hours)).timestamp(),
            iat: issued_at.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone().map(Audience::One),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            if matches!(e.kind(), ErrorKind::ExpiredSignature) {
                AuthError::TokenExpired
            } else {
                AuthError::InvalidToken(e.to_string())
            }
        })?;

        data.claims.into_token_claims()
    }
}
