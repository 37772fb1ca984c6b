//! Error types shared across crates.

/// Type alias for `Result` carrying an [`error_stack::Report`].
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Errors from the keyed-hash algorithms in [`crate::crypto`].
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("Failed to sign message")]
    MessageSigningFailed,
    #[error("Failed to verify signature")]
    SignatureVerificationFailed,
}

/// Errors while converting values between representations.
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    #[error("Integer overflow while scaling amount")]
    IntegerOverflow,
}
