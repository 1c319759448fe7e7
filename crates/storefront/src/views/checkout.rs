//! Checkout page view.

use askama::Template;

use ember_north_core::{CartStore, ShippingDetails};

use crate::filters;

use super::NavView;
use super::cart::CartLineView;

/// Checkout page template.
#[derive(Template)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub nav: NavView,
    pub is_empty: bool,
    /// Controlled-input echoes of the shipping form.
    pub form: ShippingDetails,
    pub summary: Vec<CartLineView>,
    pub subtotal: String,
    /// Set when the last submission was rejected (the stub gateway
    /// always rejects with its "not connected" explanation).
    pub notice: Option<String>,
    /// Order reference shown after a successful hand-off.
    pub confirmation: Option<String>,
}

impl CheckoutTemplate {
    /// Build the checkout page from cart and form state.
    #[must_use]
    pub fn build(
        nav: NavView,
        cart: &CartStore,
        form: &ShippingDetails,
        notice: Option<String>,
        confirmation: Option<String>,
    ) -> Self {
        Self {
            nav,
            is_empty: cart.is_empty(),
            form: form.clone(),
            summary: cart.lines().iter().map(CartLineView::from).collect(),
            subtotal: cart.subtotal().to_string(),
            notice,
            confirmation,
        }
    }
}
