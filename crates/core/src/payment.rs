//! Payment verification capability used by the enrollment workflow.
//!
//! Enrollment in a paid course is gated on a [`PaymentGateway`] confirming the
//! purchase. The gateway is injected; [`AutoApprove`] confirms every request
//! and is the default for development and tests.

use async_trait::async_trait;
use serde::Serialize;

use crate::types::DbId;

/// What the gateway is asked to confirm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRequest {
    pub user_id: DbId,
    pub course_id: DbId,
    pub amount_cents: i64,
}

/// Failure talking to a payment collaborator.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment gateway unreachable: {0}")]
    Unavailable(String),

    #[error("Payment gateway returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// External payment collaborator.
///
/// `Ok(true)` means payment for the course is confirmed and enrollment may
/// proceed; `Ok(false)` means it is not.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn confirm_payment(&self, request: &PaymentRequest) -> Result<bool, PaymentError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Gateway that confirms every payment.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApprove;

#[async_trait]
impl PaymentGateway for AutoApprove {
    async fn confirm_payment(&self, _request: &PaymentRequest) -> Result<bool, PaymentError> {
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "auto-approve"
    }
}

/// Whether a course at this price needs a payment confirmation.
pub fn requires_payment(price_cents: i64) -> bool {
    price_cents > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn auto_approve_confirms() {
        let request = PaymentRequest {
            user_id: 1,
            course_id: 2,
            amount_cents: 4900,
        };
        assert!(AutoApprove.confirm_payment(&request).await.unwrap());
    }

    #[test]
    fn only_positive_prices_require_payment() {
        assert!(!requires_payment(0));
        assert!(requires_payment(1));
    }
}
