//! Policy configuration loading.
//!
//! Loads an [`AttendancePolicy`] from a YAML file with typed errors for
//! missing or malformed files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::AttendancePolicy;

impl AttendancePolicy {
    /// Loads a policy from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be
    /// read and [`EngineError::ConfigParse`] when its contents are not a
    /// valid policy document.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::AttendancePolicy;
    ///
    /// let policy = AttendancePolicy::from_yaml_file("./config/policy.yaml")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_load_stock_policy_file() {
        let policy = AttendancePolicy::from_yaml_file("./config/policy.yaml").unwrap();
        assert_eq!(policy, AttendancePolicy::default());
        assert_eq!(policy.weekday_hours, Decimal::new(85, 1));
    }

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let result = AttendancePolicy::from_yaml_file("/nonexistent/policy.yaml");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_load_malformed_file_returns_parse_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("attendance-engine-bad-policy.yaml");
        fs::write(&path, "weekday_hours: [not, hours]").unwrap();

        let result = AttendancePolicy::from_yaml_file(&path);
        assert!(matches!(result, Err(EngineError::ConfigParse { .. })));

        fs::remove_file(&path).ok();
    }
}
