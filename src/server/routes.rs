//! Request handlers for the HTTP surface

use crate::crawler::harvest;
use crate::output::{ReportExporter, XlsxExporter};
use crate::server::AppState;
use crate::HarvestError;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

/// Form body of `POST /extract`
#[derive(Debug, Deserialize)]
pub struct ExtractForm {
    /// Newline-separated domain list
    pub domains: String,
}

/// Error surfaced to HTTP clients as a JSON body with status 500
#[derive(Debug)]
pub struct ApiError(HarvestError);

impl<E: Into<HarvestError>> From<E> for ApiError {
    fn from(error: E) -> Self {
        Self(error.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Harvests the submitted domains and returns the spreadsheet as a download
pub async fn extract(
    State(state): State<AppState>,
    Form(form): Form<ExtractForm>,
) -> Result<Response, ApiError> {
    let results = harvest(&state.config, &form.domains).await?;

    let exporter = XlsxExporter::new();
    let body = exporter.export(&results)?;

    let disposition = format!("attachment; filename=\"{}\"", exporter.file_name());
    let headers = [
        (header::CONTENT_TYPE, exporter.content_type().to_string()),
        (header::CONTENT_DISPOSITION, disposition),
    ];

    Ok((headers, body).into_response())
}
