use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{NextverError, Result};

/// Cooperative cancellation signal for an in-flight resolution.
///
/// The resolver checks the token before every collaborator round trip; no
/// partial state is persisted, so cancelling simply abandons the resolution.
/// Cloning shares the underlying flag, so one handle can be kept by the
/// caller while another travels with the resolution.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that has not been cancelled
    pub fn new() -> Self {
        CancelToken::default()
    }

    /// Request cancellation of the associated resolution
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Return `Err(Cancelled)` once cancellation has been requested
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(NextverError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_starts_live() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert!(token.check().is_ok());
    }

    #[test]
    fn test_cancel_trips_check() {
        let token = CancelToken::new();
        token.cancel();
        assert!(token.is_cancelled());
        assert!(token.check().unwrap_err().is_cancelled());
    }

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let shared = token.clone();
        shared.cancel();
        assert!(token.is_cancelled());
    }
}
