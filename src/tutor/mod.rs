pub mod curriculum;
mod dto;
pub mod handlers;
pub mod repo;
pub mod responder;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::tutor_routes())
        .merge(handlers::chat_routes())
}
