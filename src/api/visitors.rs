//! Visitor registration API endpoint

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::visitor::{RegisterResponse, RegisterVisitor},
};

/// Register a visitor
///
/// Validates the submission and persists one record. The response never
/// echoes the stored record or its identifier.
#[utoipa::path(
    post,
    path = "/visitors",
    tag = "visitors",
    request_body = RegisterVisitor,
    responses(
        (status = 201, description = "Visitor registered", body = RegisterResponse),
        (status = 400, description = "Missing name or reason", body = crate::error::ErrorResponse),
        (status = 500, description = "Persistence failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn register_visitor(
    State(state): State<crate::AppState>,
    Json(data): Json<RegisterVisitor>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    tracing::debug!(name = %data.name, "Received visitor registration");

    state.services.visitors.register(&data).await?;

    tracing::info!("Visitor saved to DB");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Visitor registered successfully".to_string(),
        }),
    ))
}
