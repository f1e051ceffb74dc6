use thiserror::Error;
use validator::ValidationErrors;

/// Failure surfaced at the point of a violated precondition.
///
/// Variants name the offending parameter and the broken constraint so
/// callers can correct the call; nothing is retried internally and the
/// engine holds no corrupted state afterwards.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvolutionError {
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    #[error("Argument `{name}` is out of range: {reason}")]
    OutOfRange { name: &'static str, reason: String },
}

impl EvolutionError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        EvolutionError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(name: &'static str, reason: impl Into<String>) -> Self {
        EvolutionError::OutOfRange {
            name,
            reason: reason.into(),
        }
    }
}

impl From<ValidationErrors> for EvolutionError {
    fn from(errors: ValidationErrors) -> Self {
        // Fields sorted so the reported parameter is deterministic.
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|&(name, _)| name);
        match fields.into_iter().next() {
            Some((name, field_errors)) => {
                let reason = field_errors
                    .first()
                    .map(|error| format!("violates the `{}` constraint", error.code))
                    .unwrap_or_else(|| "violates its constraints".to_string());
                EvolutionError::OutOfRange { name, reason }
            }
            None => EvolutionError::OutOfRange {
                name: "configuration",
                reason: "violates its constraints".to_string(),
            },
        }
    }
}

pub type EvolutionResult<T> = Result<T, EvolutionError>;
