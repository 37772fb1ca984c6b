//! Error taxonomy for connector operations and the HTTP surface.

/// Failures inside a connector while assembling or verifying gateway
/// messages. Verification mismatches are NOT errors; they surface as
/// [`crate::connector_types::PaymentCallbackStatus::Invalid`].
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("Failed to obtain authentication type")]
    FailedToObtainAuthType,
    #[error("Failed to encode request")]
    RequestEncodingFailed,
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Failed to format date")]
    DateFormattingFailed,
    #[error("Failed to convert amount to the gateway unit")]
    AmountConversionFailed,
    #[error("Invalid connector configuration: {config}")]
    InvalidConnectorConfig { config: &'static str },
}

/// Error payload rendered into HTTP responses.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiError {
    pub sub_code: String,
    pub error_identifier: u16,
    pub error_message: String,
}

/// Application-level classification of a failed request.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationErrorResponse {
    #[error("BadRequest: {}", .0.error_message)]
    BadRequest(ApiError),
    #[error("InternalServerError: {}", .0.error_message)]
    InternalServerError(ApiError),
}
