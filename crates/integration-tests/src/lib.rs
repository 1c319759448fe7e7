//! Integration tests for the Ember North storefront.
//!
//! The scenario tests in `tests/` drive the public [`Storefront`] API
//! end-to-end: navigate, dispatch UI events, render, and assert on both
//! state and markup. No mocking of the core - only the payment and auth
//! collaborators are swapped where a scenario needs a different outcome
//! than the shipped stubs provide.

#![cfg_attr(not(test), forbid(unsafe_code))]

use ember_north_core::{OrderConfirmation, OrderDraft, PaymentError, PaymentGateway};
use ember_north_storefront::app::Storefront;
use ember_north_storefront::config::StorefrontConfig;

/// Build an app with the default configuration and stub collaborators.
#[must_use]
pub fn test_app() -> Storefront {
    Storefront::new(StorefrontConfig::default())
}

/// Gateway that accepts every order, for exercising the post-payment
/// path (cart clearing, confirmation page).
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptingGateway;

impl PaymentGateway for AcceptingGateway {
    fn submit_order(&self, _draft: &OrderDraft) -> Result<OrderConfirmation, PaymentError> {
        Ok(OrderConfirmation::new())
    }
}

/// Gateway that declines every order with a processor message.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecliningGateway;

impl PaymentGateway for DecliningGateway {
    fn submit_order(&self, _draft: &OrderDraft) -> Result<OrderConfirmation, PaymentError> {
        Err(PaymentError::Declined("card expired".to_owned()))
    }
}
