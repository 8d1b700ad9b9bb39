//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 408 Request Timeout (client can retry)
            Self::TimeoutError => StatusCode::REQUEST_TIMEOUT,

            // 500 Internal Server Error
            Self::Unknown | Self::EmptyContentPool | Self::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request
            Self::InvalidRequest
            | Self::RequiredField
            | Self::InvalidStayDate
            | Self::BatchTooLarge => StatusCode::BAD_REQUEST,
        }
    }
}
