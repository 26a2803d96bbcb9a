use crate::domain::order::OrderStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrderError>;

/// Failure taxonomy for workflow operations.
///
/// `Validation`, `InvalidStatusValue` and `InvalidTransition` are rejected before any
/// network call and are never worth retrying. `Gateway` covers transport failures and
/// non-success responses from the backend and may be retried by the caller.
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("gateway error: {0}")]
    Gateway(String),
    #[error("unexpected gateway response: {0}")]
    UnexpectedResponse(String),
    #[error("payment link missing from gateway response")]
    MissingPaymentLink,
    #[error("unrecognized order status: {0:?}")]
    InvalidStatusValue(String),
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}

impl OrderError {
    /// Whether the caller may reasonably retry the operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, OrderError::Gateway(_))
    }
}

impl From<reqwest::Error> for OrderError {
    fn from(err: reqwest::Error) -> Self {
        OrderError::Gateway(err.to_string())
    }
}
