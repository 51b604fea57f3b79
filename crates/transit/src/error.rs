use thiserror::Error;

/// Convenient result alias for the transit crate.
pub type Result<T> = std::result::Result<T, TransitError>;

/// Errors raised while building or sampling transit model components.
///
/// Numeric evaluation never errors; non-physical inputs propagate as
/// non-finite values instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransitError {
    /// A constructor argument violates a model invariant.
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The operation exists on the interface but has no implementation.
    #[error("{operation} is not supported")]
    Unsupported { operation: &'static str },
}

impl TransitError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
