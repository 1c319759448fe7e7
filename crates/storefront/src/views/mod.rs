//! Page view models and template rendering.
//!
//! Views are pure renderings of cart, router, and session state. Each
//! page builds a `*Template` struct from the state it is handed and
//! renders it through an askama template extending the shared layout.

pub mod account;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod not_found;
pub mod product;
pub mod shop;

use ember_north_core::CartStore;

/// Data for the shared navigation bar in the layout template.
#[derive(Debug, Clone)]
pub struct NavView {
    pub store_name: String,
    /// Cart badge count; the badge is hidden at zero.
    pub cart_count: u32,
}

impl NavView {
    /// Build the nav from current cart state.
    #[must_use]
    pub fn new(store_name: &str, cart: &CartStore) -> Self {
        Self {
            store_name: store_name.to_owned(),
            cart_count: cart.item_count(),
        }
    }
}
