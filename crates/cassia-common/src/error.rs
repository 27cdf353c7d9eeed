// Error handling and response types for the Cassia application
// This module defines error types, HTTP error responses, and error code constants

use std::fmt::{Display, Formatter};

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

use crate::model::{FieldError, RestResult};

// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum CassiaError {
    #[error("caused: {0}")]
    IllegalArgument(String), // Invalid input parameter
    #[error("parameter validate error")]
    Validation(Vec<FieldError>), // Field-level form validation failures
    #[error("product property '{0}' not exist!")]
    PropertyNotExist(i64), // Property record not found
    #[error("property group '{0}' not exist!")]
    GroupNotExist(i64), // Group reference does not resolve
    #[error("database error: {0}")]
    DatabaseError(String), // Database operation errors
    #[error("configuration error: {0}")]
    ConfigError(String), // Configuration issues
    #[error("internal error: {0}")]
    InternalError(String), // Internal server errors
}

// Wrapper for application errors to implement actix-web error handling
#[derive(Debug)]
pub struct AppError {
    inner: anyhow::Error, // Wrapped anyhow error
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        AppError { inner: value }
    }
}

impl From<CassiaError> for AppError {
    fn from(value: CassiaError) -> Self {
        AppError {
            inner: anyhow::Error::new(value),
        }
    }
}

impl AppError {
    pub fn inner(&self) -> &anyhow::Error {
        &self.inner
    }
}

impl actix_web::error::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        if let Some(e) = self.inner.downcast_ref::<CassiaError>() {
            match e {
                CassiaError::IllegalArgument(message) => {
                    HttpResponse::BadRequest().body(message.to_string())
                }
                CassiaError::Validation(errors) => {
                    HttpResponse::BadRequest().json(RestResult::error(
                        PARAMETER_VALIDATE_ERROR.code,
                        PARAMETER_VALIDATE_ERROR.message.to_string(),
                        errors.clone(),
                    ))
                }
                CassiaError::PropertyNotExist(_) | CassiaError::GroupNotExist(_) => {
                    HttpResponse::NotFound().json(RestResult::error(
                        RESOURCE_NOT_FOUND.code,
                        e.to_string(),
                        String::new(),
                    ))
                }
                CassiaError::DatabaseError(message) => {
                    HttpResponse::InternalServerError().body(message.to_string())
                }
                CassiaError::ConfigError(message) => {
                    HttpResponse::BadRequest().body(message.to_string())
                }
                CassiaError::InternalError(message) => {
                    HttpResponse::InternalServerError().body(message.to_string())
                }
            }
        } else {
            HttpResponse::InternalServerError().body(self.inner.to_string())
        }
    }
}

// Error code structure for API responses
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorCode<'a> {
    pub code: i32,        // Numeric error code
    pub message: &'a str, // Human-readable error message
}

// General success and error codes
pub const SUCCESS: ErrorCode<'static> = ErrorCode {
    code: 0,
    message: "success",
};

pub const PARAMETER_MISSING: ErrorCode<'static> = ErrorCode {
    code: 10000,
    message: "parameter missing",
};

pub const DATA_ACCESS_ERROR: ErrorCode<'static> = ErrorCode {
    code: 10002,
    message: "data access error",
};

pub const PARAMETER_VALIDATE_ERROR: ErrorCode<'static> = ErrorCode {
    code: 20002,
    message: "parameter validate error",
};

pub const RESOURCE_NOT_FOUND: ErrorCode<'static> = ErrorCode {
    code: 20004,
    message: "resource not found",
};

// Product property resource errors
pub const PROPERTY_NOT_EXIST: ErrorCode<'static> = ErrorCode {
    code: 24000,
    message: "product property not exist",
};

pub const PROPERTY_GROUP_NOT_EXIST: ErrorCode<'static> = ErrorCode {
    code: 24001,
    message: "product property group not exist",
};

pub const SERVER_ERROR: ErrorCode<'static> = ErrorCode {
    code: 30000,
    message: "server error",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cassia_error_display() {
        let err = CassiaError::IllegalArgument("invalid param".to_string());
        assert_eq!(format!("{}", err), "caused: invalid param");

        let err = CassiaError::PropertyNotExist(42);
        assert_eq!(format!("{}", err), "product property '42' not exist!");

        let err = CassiaError::GroupNotExist(7);
        assert_eq!(format!("{}", err), "property group '7' not exist!");

        let err = CassiaError::DatabaseError("query failed".to_string());
        assert_eq!(format!("{}", err), "database error: query failed");

        let err = CassiaError::ConfigError("missing key".to_string());
        assert_eq!(format!("{}", err), "configuration error: missing key");

        let err = CassiaError::InternalError("unexpected".to_string());
        assert_eq!(format!("{}", err), "internal error: unexpected");
    }

    #[test]
    fn test_validation_error_carries_fields() {
        let err = CassiaError::Validation(vec![FieldError::new(
            "name",
            "name_required",
            "name is required",
        )]);
        assert_eq!(format!("{}", err), "parameter validate error");

        if let CassiaError::Validation(fields) = err {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].field, "name");
        } else {
            panic!("expected validation variant");
        }
    }

    #[test]
    fn test_app_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("test error");
        let app_err = AppError::from(anyhow_err);
        assert_eq!(format!("{}", app_err), "test error");
    }

    #[test]
    fn test_app_error_downcast() {
        let app_err = AppError::from(CassiaError::PropertyNotExist(1));
        assert!(
            app_err
                .inner()
                .downcast_ref::<CassiaError>()
                .is_some()
        );
    }

    #[test]
    fn test_error_code_constants() {
        assert_eq!(SUCCESS.code, 0);
        assert_eq!(SUCCESS.message, "success");

        assert_eq!(PARAMETER_MISSING.code, 10000);
        assert_eq!(DATA_ACCESS_ERROR.code, 10002);
        assert_eq!(PARAMETER_VALIDATE_ERROR.code, 20002);
        assert_eq!(RESOURCE_NOT_FOUND.code, 20004);

        assert_eq!(PROPERTY_NOT_EXIST.code, 24000);
        assert_eq!(PROPERTY_GROUP_NOT_EXIST.code, 24001);
        assert_eq!(SERVER_ERROR.code, 30000);
    }
}
