//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::loader::{FileFormat, FormatError};
use crate::pipeline::{ProcessError, Processor};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// Request bodies larger than `max_upload_bytes` are rejected.
pub fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/process", post(process_upload))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// An uploaded file with the name the client gave it.
#[derive(Debug)]
struct Upload {
    file_name: String,
    bytes: Bytes,
}

/// Fields of the `/process` form.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<Upload>,
    mode: Option<String>,
    category: Option<String>,
}

impl UploadForm {
    /// Read every field of the form. Unknown fields are skipped.
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("file") => {
                    let file_name = field.file_name().unwrap_or_default().to_owned();
                    let bytes = field.bytes().await?;
                    form.file = Some(Upload { file_name, bytes });
                }
                Some("mode") => form.mode = Some(field.text().await?),
                Some("category") => form.category = Some(field.text().await?),
                _ => {}
            }
        }
        Ok(form)
    }
}

/// Process an uploaded schedule export.
///
/// Takes multipart fields `file` (a `.xls` workbook), `mode`, and an
/// optional `category`, which is accepted but has no effect. Flights are
/// selected relative to the server's local date unless the state pins one.
async fn process_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Vec<FlightResult>>, AppError> {
    let form = UploadForm::read(multipart?).await?;

    let upload = form.file.ok_or_else(|| AppError::BadRequest {
        message: "Missing field: file".to_string(),
    })?;
    let mode = form.mode.ok_or_else(|| AppError::BadRequest {
        message: "Missing field: mode".to_string(),
    })?;
    if !upload.file_name.ends_with(".xls") {
        return Err(AppError::BadRequest {
            message: "Invalid file type".to_string(),
        });
    }
    FileFormat::require_legacy(&upload.bytes)?;

    if let Some(category) = &form.category {
        tracing::debug!(%category, "ignoring category");
    }

    let today = state.today();
    let bytes = upload.bytes;
    let rows = tokio::task::spawn_blocking(move || {
        Processor::new(&state.ceilings, &state.rules).process(&bytes, &mode, today)
    })
    .await??;

    tracing::info!(file = %upload.file_name, flights = rows.len(), "processed upload");
    Ok(Json(flight_results(&rows)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    PayloadTooLarge { message: String },
    Internal { message: String },
}

impl AppError {
    fn from_status(status: StatusCode, message: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge { message }
        } else {
            AppError::BadRequest { message }
        }
    }
}

impl From<MultipartRejection> for AppError {
    fn from(e: MultipartRejection) -> Self {
        AppError::from_status(e.status(), e.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::from_status(e.status(), e.body_text())
    }
}

impl From<FormatError> for AppError {
    fn from(e: FormatError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<ProcessError> for AppError {
    fn from(e: ProcessError) -> Self {
        // An unreadable workbook is the client's file, so it is a 400 too
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::Internal {
            message: format!("processing task failed: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::PayloadTooLarge { message } => (StatusCode::PAYLOAD_TOO_LARGE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            tracing::error!(%status, %message, "request failed");
        } else {
            tracing::warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
