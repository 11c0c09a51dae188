//! Service binary for the attendance engine.
//!
//! Serves the upload and analytics endpoints on a local TCP port. The
//! attendance policy is read from `config/policy.yaml` (override the path
//! with `ATTENDANCE_POLICY_PATH`); stock defaults apply when no file is
//! present.

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::AttendancePolicy;
use attendance_engine::error::EngineError;
use tracing::{info, warn};

const DEFAULT_POLICY_PATH: &str = "./config/policy.yaml";
const BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let policy_path = std::env::var("ATTENDANCE_POLICY_PATH")
        .unwrap_or_else(|_| DEFAULT_POLICY_PATH.to_string());

    let policy = match AttendancePolicy::from_yaml_file(&policy_path) {
        Ok(policy) => {
            info!(path = %policy_path, "Loaded attendance policy");
            policy
        }
        Err(EngineError::ConfigNotFound { path }) => {
            warn!(path = %path, "Policy file not found, using stock policy");
            AttendancePolicy::default()
        }
        Err(err) => return Err(err.into()),
    };

    let state = AppState::new(policy);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    info!(addr = BIND_ADDR, "Attendance engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}
