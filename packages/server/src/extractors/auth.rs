use axum::{extract::FromRequestParts, http::request::Parts};
use common::user::User;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt;

/// Caller identified by the `Authorization: Bearer <token>` header.
pub struct AuthUser {
    pub user_id: String,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::TokenMissing)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::TokenInvalid)?;

        let claims = jwt::verify(token, &state.config.auth.jwt_secret)
            .map_err(|_| AppError::TokenInvalid)?;

        Ok(AuthUser {
            user_id: claims.sub,
            username: claims.username,
        })
    }
}

/// Authenticated caller whose account carries the administrator flag.
///
/// Add this as a handler parameter to restrict a route to administrators.
/// The flag is read from the user store on every request, so a demotion
/// takes effect without waiting for the token to expire.
pub struct AdminUser(pub User);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        let user = state.stores.users.find(&auth_user.user_id).await?;
        match user {
            Some(user) if user.is_admin => Ok(AdminUser(user)),
            _ => {
                tracing::warn!(
                    user_id = %auth_user.user_id,
                    username = %auth_user.username,
                    "Rejected non-admin access to admin route"
                );
                Err(AppError::PermissionDenied)
            }
        }
    }
}
