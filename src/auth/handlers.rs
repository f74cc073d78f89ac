use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RefreshRequest, RegisterRequest},
        jwt::{AuthUser, JwtKeys},
        password::{hash_password, verify_password},
        repo,
    },
    error::ApiError,
    progress,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();
    payload.username = payload.username.trim().to_string();

    if payload.username.is_empty() {
        return Err(ApiError::BadRequest("Username is required"));
    }
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::BadRequest("Invalid email"));
    }
    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::BadRequest("Password too short"));
    }

    if let Ok(Some(_)) = repo::find_by_username(&state.db, &payload.username).await {
        warn!(username = %payload.username, "username already taken");
        return Err(ApiError::Conflict("Username already taken"));
    }
    if let Ok(Some(_)) = repo::find_by_email(&state.db, &payload.email).await {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("Email already registered"));
    }

    let hash = hash_password(&payload.password).map_err(ApiError::internal("Failed to register"))?;

    let user = repo::create(&state.db, &payload.username, &payload.email, &hash)
        .await
        .map_err(ApiError::internal("Failed to register"))?;

    // Every account starts with a stats row
    if let Err(e) = progress::repo::init_stats(&state.db, user.id).await {
        error!(error = %e, user_id = %user.id, "init stats failed");
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys
        .sign_access(user.id)
        .map_err(ApiError::internal("Failed to register"))?;
    let refresh_token = keys
        .sign_refresh(user.id)
        .map_err(ApiError::internal("Failed to register"))?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: PublicUser {
            id: user.id,
            username: user.username,
            email: user.email,
        },
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload.username = payload.username.trim().to_string();

    let user = match repo::find_by_username(&state.db, &payload.username).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(username = %payload.username, "login unknown username");
            return Err(ApiError::Unauthorized("Invalid credentials"));
        }
        Err(e) => {
            error!(error = %e, "find_by_username failed");
            return Err(ApiError::Internal("Failed to log in"));
        }
    };

    let ok = verify_password(&payload.password, &user.password_hash)
        .map_err(ApiError::internal("Failed to log in"))?;
    if !ok {
        warn!(username = %payload.username, user_id = %user.id, "login invalid password");
        return Err(ApiError::Unauthorized("Invalid credentials"));
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys
        .sign_access(user.id)
        .map_err(ApiError::internal("Failed to log in"))?;
    let refresh_token = keys
        .sign_refresh(user.id)
        .map_err(ApiError::internal("Failed to log in"))?;

    info!(user_id = %user.id, username = %user.username, "user logged in");
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: PublicUser {
            id: user.id,
            username: user.username,
            email: user.email,
        },
    }))
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys.verify_refresh(&payload.refresh_token).map_err(|e| {
        warn!(error = %e, "refresh token rejected");
        ApiError::Unauthorized("Invalid refresh token")
    })?;

    let user = repo::find_by_id(&state.db, claims.sub)
        .await
        .map_err(ApiError::internal("Failed to refresh token"))?
        .ok_or(ApiError::Unauthorized("User not found"))?;

    let access_token = keys
        .sign_access(user.id)
        .map_err(ApiError::internal("Failed to refresh token"))?;
    let refresh_token = keys
        .sign_refresh(user.id)
        .map_err(ApiError::internal("Failed to refresh token"))?;

    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: PublicUser {
            id: user.id,
            username: user.username,
            email: user.email,
        },
    }))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PublicUser>, ApiError> {
    let user = repo::find_by_id(&state.db, user_id)
        .await
        .map_err(ApiError::internal("Failed to fetch user"))?
        .ok_or_else(|| {
            error!(user_id = %user_id, "user not found");
            ApiError::Unauthorized("User not found")
        })?;

    Ok(Json(PublicUser {
        id: user.id,
        username: user.username,
        email: user.email,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation_accepts_plain_addresses() {
        assert!(is_valid_email("student@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.io"));
    }

    #[test]
    fn email_validation_rejects_garbage() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("spaces in@example.com"));
    }

    #[test]
    fn public_user_serialization() {
        let response = PublicUser {
            id: uuid::Uuid::new_v4(),
            username: "learner".to_string(),
            email: "learner@example.com".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("learner@example.com"));
        assert!(json.contains("username"));
    }
}
