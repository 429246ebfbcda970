use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::info;

use super::domain::{Receipt, ReceiptId};
use super::repository::{ReceiptRepository, RepositoryError};
use super::service::{ReceiptService, ReceiptServiceError};

/// Router builder exposing the receipt submission and points endpoints.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: ReceiptRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:id/points", get(points_handler::<R>))
        .with_state(service)
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    let Ok(Json(receipt)) = payload else {
        let body = json!({ "error": "Invalid JSON" });
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    };

    match service.submit(receipt) {
        Ok(id) => {
            info!(%id, "stored receipt");
            (StatusCode::OK, Json(json!({ "id": id }))).into_response()
        }
        Err(err) => {
            let body = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    let id = ReceiptId(id);
    match service.points(&id) {
        Ok(points) => {
            info!(%id, points, "computed receipt points");
            (StatusCode::OK, Json(json!({ "points": points }))).into_response()
        }
        Err(ReceiptServiceError::Repository(RepositoryError::NotFound)) => {
            let body = json!({ "error": "No Receipt Found" });
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
        Err(other) => {
            let body = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
