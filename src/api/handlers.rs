//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for the upload and
//! analytics endpoints.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        Multipart, Query, State,
        multipart::MultipartRejection,
        rejection::QueryRejection,
    },
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_monthly_analytics, month_bounds};
use crate::error::EngineError;
use crate::ingest::{process_rows, read_workbook};

use super::request::ReportQuery;
use super::response::{ApiError, ApiErrorResponse, UploadResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/upload", post(upload_handler))
        .route("/analytics", get(analytics_handler))
        .with_state(state)
}

/// Handler for the POST /upload endpoint.
///
/// Accepts a multipart form with a `file` part holding an `.xlsx`
/// workbook and ingests its rows into the store.
async fn upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance upload");

    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Upload request is not multipart"
            );
            return bad_request(ApiError::validation_error(
                "Request must be multipart/form-data",
            ));
        }
    };

    let file = match read_file_part(&mut multipart).await {
        Ok(file) => file,
        Err(response) => {
            warn!(
                correlation_id = %correlation_id,
                error = %response.error.message,
                "Upload carried no readable file part"
            );
            return response.into_response();
        }
    };

    let rows = match read_workbook(&file) {
        Ok(rows) => rows,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Workbook rejected");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let summary = process_rows(&rows, state.store());
    info!(
        correlation_id = %correlation_id,
        processed = summary.processed,
        skipped = summary.skipped.len(),
        warnings = summary.warnings.len(),
        "Upload processed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(UploadResponse::from(summary)),
    )
        .into_response()
}

/// Finds the `file` part and reads its bytes.
async fn read_file_part(multipart: &mut Multipart) -> Result<Bytes, ApiErrorResponse> {
    loop {
        let field = multipart.next_field().await.map_err(|err| ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation_error(format!("Malformed multipart body: {}", err)),
        })?;

        let Some(field) = field else {
            return Err(EngineError::MissingFile.into());
        };

        if field.name() == Some("file") {
            return field.bytes().await.map_err(|err| ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(format!("Failed to read file part: {}", err)),
            });
        }
    }
}

/// Handler for the GET /analytics endpoint.
///
/// Returns the monthly productivity summary for one employee.
async fn analytics_handler(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Analytics query rejected"
            );
            return bad_request(ApiError::validation_error(rejection.body_text()));
        }
    };

    let (employee_name, month, year) = match query.validated() {
        Ok(validated) => validated,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Analytics query invalid");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let Some(employee) = state.store().find_employee(&employee_name) else {
        warn!(
            correlation_id = %correlation_id,
            employee = %employee_name,
            "Employee not found"
        );
        let api_error: ApiErrorResponse = EngineError::EmployeeNotFound {
            name: employee_name,
        }
        .into();
        return api_error.into_response();
    };

    let result = month_bounds(year, month).map(|(start, end)| {
        state.store().attendance_between(employee.id, start, end)
    });

    let analytics = result.and_then(|records| {
        build_monthly_analytics(&employee.name, month, year, &records, state.policy())
    });

    match analytics {
        Ok(analytics) => {
            info!(
                correlation_id = %correlation_id,
                employee = %analytics.employee_name,
                records = analytics.daily_breakdown.len(),
                "Analytics computed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(analytics),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Analytics failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AttendancePolicy;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(AttendancePolicy::default())
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_analytics_missing_parameters_returns_400() {
        let router = create_router(create_test_state());
        let (status, json) = get_json(router, "/analytics?employee=Alice").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(
            json["message"],
            "Missing required parameters: month, year"
        );
    }

    #[tokio::test]
    async fn test_analytics_unknown_employee_returns_404() {
        let router = create_router(create_test_state());
        let (status, json) =
            get_json(router, "/analytics?employee=Nobody&month=3&year=2024").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Employee not found: Nobody");
    }

    #[tokio::test]
    async fn test_analytics_month_out_of_range_returns_400() {
        let state = create_test_state();
        state.store().upsert_employee("Alice");
        let router = create_router(state);

        let (status, json) =
            get_json(router, "/analytics?employee=Alice&month=13&year=2024").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analytics_known_employee_with_no_records() {
        let state = create_test_state();
        state.store().upsert_employee("Alice");
        let router = create_router(state);

        let (status, json) =
            get_json(router, "/analytics?employee=Alice&month=7&year=2024").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["employeeName"], "Alice");
        assert_eq!(json["month"], "July");
        assert_eq!(json["totalExpectedHours"], 211.5);
        assert_eq!(json["totalWorkedHours"], 0.0);
        assert_eq!(json["productivityPercentage"], 0.0);
        assert!(json["dailyBreakdown"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_without_multipart_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/upload")
                    .body(Body::from("plain body"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_without_file_part_returns_400() {
        let router = create_router(create_test_state());

        let boundary = "test-boundary";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{boundary}--\r\n"
        );

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/upload")
                    .header(
                        "Content-Type",
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "No file provided");
    }
}
