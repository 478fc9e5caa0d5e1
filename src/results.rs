use serde_json::{Map, Value};

use crate::error::PulseError;

/// A parsed JSON object body, as delivered by every API operation.
pub type JsonObject = Map<String, Value>;

/// Success/failure envelope resolved once per completed request.
///
/// Exactly one of error and result is meaningfully present; the
/// constructors below are the only way to build one.
#[derive(Debug, Clone, PartialEq)]
pub struct PulseResults<T> {
    error: Option<PulseError>,
    result: Option<T>,
}

impl<T> PulseResults<T> {
    pub fn success(result: T) -> Self {
        Self {
            error: None,
            result: Some(result),
        }
    }

    pub fn failure(error: PulseError) -> Self {
        Self {
            error: Some(error),
            result: None,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none() && self.result.is_some()
    }

    pub fn failed(&self) -> bool {
        !self.succeeded()
    }

    /// Error kind, for logging and diagnostics.
    pub fn error(&self) -> Option<PulseError> {
        self.error
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Convert into a plain `Result` for `?`-style consumption.
    pub fn into_result(self) -> Result<T, PulseError> {
        match (self.error, self.result) {
            (None, Some(result)) => Ok(result),
            (Some(error), _) => Err(error),
            (None, None) => Err(PulseError::InvalidResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_reports_succeeded() {
        let envelope = PulseResults::success(42_u32);

        assert!(envelope.succeeded());
        assert!(!envelope.failed());
        assert_eq!(envelope.error(), None);
        assert_eq!(envelope.result(), Some(&42));
        assert_eq!(envelope.into_result(), Ok(42));
    }

    #[test]
    fn failure_envelope_reports_failed() {
        let envelope = PulseResults::<u32>::failure(PulseError::InvalidResponse);

        assert!(envelope.failed());
        assert!(!envelope.succeeded());
        assert_eq!(envelope.error(), Some(PulseError::InvalidResponse));
        assert_eq!(envelope.result(), None);
        assert_eq!(envelope.into_result(), Err(PulseError::InvalidResponse));
    }
}
