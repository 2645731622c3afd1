use thiserror::Error;

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors from the payment gateway layer.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The Stripe API call failed (network, auth, rate limit, rejection).
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// The request could not be expressed to the provider
    /// (unknown currency code, non-positive quantity).
    #[error("Invalid checkout request: {0}")]
    InvalidRequest(String),

    /// The provider accepted the session but returned no hosted URL.
    #[error("No checkout URL returned by the payment provider")]
    MissingRedirectUrl,

    /// Configuration error (missing or malformed credentials).
    #[error("Configuration error: {0}")]
    Config(String),
}
