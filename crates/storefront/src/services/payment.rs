//! Payment processor stub.

use ember_north_core::{OrderConfirmation, OrderDraft, PaymentError, PaymentGateway};

/// Gateway used until a real payment processor is wired up.
///
/// Rejects every order with [`PaymentError::NotConfigured`] so the
/// checkout page can explain the missing integration instead of
/// pretending an order went through.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconnectedGateway;

impl PaymentGateway for UnconnectedGateway {
    fn submit_order(&self, draft: &OrderDraft) -> Result<OrderConfirmation, PaymentError> {
        tracing::info!(
            lines = draft.lines.len(),
            total = %draft.total,
            "order submitted without a payment processor"
        );
        Err(PaymentError::NotConfigured(
            "checkout will be connected to a payment processor".to_owned(),
        ))
    }
}
