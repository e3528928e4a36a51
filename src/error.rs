// src/error.rs

use std::collections::BTreeMap;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Field name -> human readable reason, e.g. `{"description": "cannot be blank"}`.
pub type ValidationErrors = BTreeMap<String, String>;

/// Classification attached to errors raised by the task domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Unknown,
    NotFound,
    InvalidArgument,
}

#[derive(Debug, Error)]
pub enum Error {
    /// Failure raised by the task domain, carrying its classification.
    #[error("{message}")]
    Classified {
        code: ErrorCode,
        message: String,
        validations: Option<ValidationErrors>,
        #[source]
        source: Option<BoxError>,
    },

    /// Anything that never went through the domain, e.g. a driver error.
    #[error(transparent)]
    External(BoxError),
}

impl Error {
    pub fn new<M: Into<String>>(code: ErrorCode, message: M) -> Self {
        Self::Classified {
            code,
            message: message.into(),
            validations: None,
            source: None,
        }
    }

    pub fn wrap<E, M>(source: E, code: ErrorCode, message: M) -> Self
    where
        E: Into<BoxError>,
        M: Into<String>,
    {
        Self::Classified {
            code,
            message: message.into(),
            validations: None,
            source: Some(source.into()),
        }
    }

    pub fn not_found<M: Into<String>>(message: M) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn invalid_argument<M: Into<String>>(message: M, validations: ValidationErrors) -> Self {
        Self::Classified {
            code: ErrorCode::InvalidArgument,
            message: message.into(),
            validations: Some(validations),
            source: None,
        }
    }

    pub fn external<E: Into<BoxError>>(source: E) -> Self {
        Self::External(source.into())
    }

    /// `None` when the error never received a domain classification.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Classified { code, .. } => Some(*code),
            Self::External(_) => None,
        }
    }

    pub fn validations(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Classified { validations, .. } => validations.as_ref(),
            Self::External(_) => None,
        }
    }
}

/// Flattens the validator report into one message per field.
pub fn validation_errors(report: &validator::ValidationErrors) -> ValidationErrors {
    report
        .field_errors()
        .into_iter()
        .filter_map(|(field, errors)| {
            errors.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}

impl From<validator::ValidationErrors> for Error {
    fn from(report: validator::ValidationErrors) -> Self {
        Error::invalid_argument("validation failed", validation_errors(&report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn external_errors_have_no_code() {
        let err = Error::external(std::io::Error::other("disk on fire"));
        assert_eq!(err.code(), None);
        assert!(err.validations().is_none());
        assert_eq!(err.to_string(), "disk on fire");
    }

    #[test]
    fn wrap_keeps_the_source() {
        let err = Error::wrap(std::io::Error::other("boom"), ErrorCode::Unknown, "lookup");
        assert_eq!(err.code(), Some(ErrorCode::Unknown));
        assert_eq!(err.to_string(), "lookup");
        assert_eq!(err.source().map(|s| s.to_string()), Some("boom".to_string()));
    }

    #[test]
    fn invalid_argument_carries_validations() {
        let mut v = ValidationErrors::new();
        v.insert("description".into(), "required".into());
        let err = Error::invalid_argument("bad task", v.clone());
        assert_eq!(err.code(), Some(ErrorCode::InvalidArgument));
        assert_eq!(err.validations(), Some(&v));
    }
}
