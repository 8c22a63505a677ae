//! Conversions from external infrastructure errors into domain errors.

use daycoach_domain::DayCoachError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DayCoachError);

impl From<InfraError> for DayCoachError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DayCoachError> for InfraError {
    fn from(value: DayCoachError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDayCoachError {
    fn into_daycoach(self) -> DayCoachError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DayCoachError */
/* -------------------------------------------------------------------------- */

impl IntoDayCoachError for HttpError {
    fn into_daycoach(self) -> DayCoachError {
        if self.is_timeout() {
            return DayCoachError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return DayCoachError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => DayCoachError::Auth(message),
                429 => DayCoachError::Network(message),
                400..=499 => DayCoachError::InvalidInput(message),
                _ => DayCoachError::Network(message),
            };
        }

        DayCoachError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_daycoach())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
