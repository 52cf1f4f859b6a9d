//! Bearer-token authentication extractors.
//!
//! Resolves `Authorization: Bearer <jwt>` into the caller's identity and
//! role. Tokens are HS256-signed with the configured secret; handlers that
//! need fresh subscription state still re-resolve the user from the store.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{decode, Algorithm, Validation};
use serde::{Deserialize, Serialize};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::AppState;
use crate::domain::foundation::UserId;
use crate::domain::user::Role;

/// JWT claims carried by access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    /// User role.
    pub role: Role,
    /// Expiry (Unix seconds).
    pub exp: u64,
}

/// Authenticated caller extracted from the bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Unauthorized, please log in"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("Unauthorized, please log in"))?;

        let data = decode::<Claims>(
            token,
            &state.jwt_decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| {
            tracing::debug!(error = %e, "token validation failed");
            ApiError::unauthorized("Unauthorized, please log in")
        })?;

        let user_id = UserId::new(data.claims.sub)
            .map_err(|_| ApiError::unauthorized("Unauthorized, please log in"))?;

        Ok(AuthenticatedUser {
            user_id,
            role: data.claims.role,
        })
    }
}

/// Authenticated caller that must hold the ADMIN role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthenticatedUser::from_request_parts(parts, state).await?;
        if user.role != Role::Admin {
            return Err(ApiError::forbidden(
                "This action is restricted to administrators",
            ));
        }
        Ok(AdminUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    #[test]
    fn claims_roundtrip_through_jwt() {
        let secret = b"a-jwt-secret-of-decent-length";
        let claims = Claims {
            sub: "user-1".to_string(),
            role: Role::Subscriber,
            exp: 4102444800, // far future
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap();

        let decoded = decode::<Claims>(
            &token,
            &jsonwebtoken::DecodingKey::from_secret(secret),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, "user-1");
        assert_eq!(decoded.claims.role, Role::Subscriber);
    }

    #[test]
    fn expired_token_is_rejected() {
        let secret = b"a-jwt-secret-of-decent-length";
        let claims = Claims {
            sub: "user-1".to_string(),
            role: Role::Subscriber,
            exp: 1000, // long past
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap();

        let result = decode::<Claims>(
            &token,
            &jsonwebtoken::DecodingKey::from_secret(secret),
            &Validation::new(Algorithm::HS256),
        );
        assert!(result.is_err());
    }
}
