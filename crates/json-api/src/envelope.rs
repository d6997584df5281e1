//! Uniform `{error, result}` response body.
//!
//! Every product and mail endpoint answers `200 OK` with this wrapper;
//! clients detect failure through `error`, never through the status code.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Envelope<T> {
    /// Failure message, `null` on success
    pub error: Option<String>,

    /// Operation payload
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    pub(crate) fn new(result: Option<T>) -> Self {
        Self {
            error: None,
            result,
        }
    }

    pub(crate) fn ok(result: T) -> Self {
        Self::new(Some(result))
    }

    pub(crate) fn failed(error: impl Display, result: Option<T>) -> Self {
        Self {
            error: Some(error.to_string()),
            result,
        }
    }
}

/// `{"isSuccess": bool}` result for write operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Outcome {
    pub is_success: bool,
}

impl Envelope<Outcome> {
    pub(crate) fn outcome<E: Display>(result: Result<bool, E>) -> Self {
        match result {
            Ok(is_success) => Self::ok(Outcome { is_success }),
            Err(error) => Self::failed(error, Some(Outcome { is_success: false })),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn success_serializes_null_error() -> TestResult {
        let body = serde_json::to_value(Envelope::outcome(Ok::<_, String>(true)))?;

        assert_eq!(body, json!({ "error": null, "result": { "isSuccess": true } }));

        Ok(())
    }

    #[test]
    fn failure_keeps_result_and_message() -> TestResult {
        let body = serde_json::to_value(Envelope::outcome(Err::<bool, _>("boom")))?;

        assert_eq!(body, json!({ "error": "boom", "result": { "isSuccess": false } }));

        Ok(())
    }

    #[test]
    fn absent_result_serializes_null() -> TestResult {
        let body = serde_json::to_value(Envelope::<Outcome>::new(None))?;

        assert_eq!(body, json!({ "error": null, "result": null }));

        Ok(())
    }
}
