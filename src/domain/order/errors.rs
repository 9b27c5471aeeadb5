use crate::notification::NotificationChannel;

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Order amount cannot be negative: {0}")]
    NegativeAmount(f64),

    #[error("Order amount must be a finite number")]
    NonFiniteAmount,

    #[error("Customer identifier cannot be empty")]
    EmptyCustomer,
}

// ============================================================================
// Collaborator Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Order store unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write store confirmation: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("{channel} channel is down: {reason}")]
    ChannelDown {
        channel: NotificationChannel,
        reason: String,
    },

    #[error("Failed to write notification: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single `process` call. Collaborator errors are carried
/// through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] OrderError),

    #[error("Failed to save order: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to notify customer: {0}")]
    Notify(#[from] NotifyError),
}

impl ProcessError {
    /// Label used for the failure metric
    pub fn stage(&self) -> &'static str {
        match self {
            ProcessError::InvalidOrder(_) => "validation",
            ProcessError::Store(_) => "save",
            ProcessError::Notify(_) => "notify",
        }
    }
}
