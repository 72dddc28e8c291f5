//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A date string could not be parsed as a `YYYY-MM-DD` calendar date.
    ///
    /// Callers should pass in the string that failed to parse.
    #[error("\"{0}\" is not a valid date, expected the format YYYY-MM-DD")]
    InvalidDateFormat(String),

    /// A transaction type or category name did not match the closed set of
    /// known values.
    #[error("\"{value}\" is not a valid {kind}")]
    UnknownEnumValue {
        /// The name of the enum that was being parsed, e.g. "category".
        kind: &'static str,
        /// The string that did not match any variant.
        value: String,
    },

    /// The CSV had issues that prevented it from being parsed.
    #[error("could not parse the CSV file: {0}")]
    InvalidCSV(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

/// The JSON body sent to clients when a request fails.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    details: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, error) = match &self {
            Error::InvalidDateFormat(_) => (StatusCode::BAD_REQUEST, "Invalid date"),
            Error::UnknownEnumValue { .. } => (StatusCode::BAD_REQUEST, "Invalid filter value"),
            Error::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            Error::InvalidTimezoneError(timezone) => {
                tracing::error!("Could not get local timezone \"{timezone}\"");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Invalid timezone settings",
                )
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Something went wrong",
                        details: "An unexpected error occurred, check the server logs for more \
                            details."
                            .to_owned(),
                    }),
                )
                    .into_response();
            }
        };

        (
            status_code,
            Json(ErrorBody {
                error,
                details: self.to_string(),
            }),
        )
            .into_response()
    }
}
