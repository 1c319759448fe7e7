//! Order hand-off types and the payment collaborator interface.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::cart::CartLine;
use crate::types::Price;

/// Shipping contact details collected by the checkout form.
///
/// Plain controlled-input echoes; validation belongs to the payment
/// collaborator that ultimately consumes the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub phone: String,
}

/// Everything handed to the payment processor on order submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub shipping: ShippingDetails,
    pub lines: Vec<CartLine>,
    pub total: Price,
}

/// Receipt returned by a successful payment hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Order reference issued by the processor.
    pub reference: Uuid,
}

impl OrderConfirmation {
    /// Create a confirmation with a fresh order reference.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reference: Uuid::new_v4(),
        }
    }
}

impl Default for OrderConfirmation {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reference)
    }
}

/// Errors surfaced by a payment processor integration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// No processor is wired up yet.
    #[error("payment processing is not connected: {0}")]
    NotConfigured(String),

    /// The processor rejected the order.
    #[error("payment declined: {0}")]
    Declined(String),
}

/// Payment processor integration.
///
/// The storefront hands a finished [`OrderDraft`] to this collaborator
/// and clears the cart only when it reports success.
pub trait PaymentGateway {
    /// Submit an order for payment.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentError`] when the processor is unavailable or
    /// declines the order.
    fn submit_order(&self, draft: &OrderDraft) -> Result<OrderConfirmation, PaymentError>;
}
