//! Cart page view.

use askama::Template;

use ember_north_core::{CartLine, CartStore};

use crate::filters;

use super::NavView;

/// Cart line display data, shared with the checkout order summary.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub product_id: i32,
    pub size: &'static str,
    pub name: String,
    pub image: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.as_i32(),
            size: line.size.code(),
            name: line.name.clone(),
            image: line.image.clone(),
            price: line.price.to_string(),
            quantity: line.quantity,
            line_total: line.line_total().to_string(),
        }
    }
}

/// Cart page template.
#[derive(Template)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub nav: NavView,
    pub is_empty: bool,
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
}

impl CartShowTemplate {
    /// Build the cart page from current cart state.
    #[must_use]
    pub fn build(nav: NavView, cart: &CartStore) -> Self {
        Self {
            nav,
            is_empty: cart.is_empty(),
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            subtotal: cart.subtotal().to_string(),
        }
    }
}
