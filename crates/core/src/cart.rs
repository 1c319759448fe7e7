//! The cart state container.
//!
//! Holds the ordered cart lines and the four mutation operations. Totals
//! are derived on every read, never stored, so they cannot drift from the
//! line data. All operations are synchronous and total: operations on an
//! absent `(product, size)` pair are silent no-ops.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{CurrencyCode, Price, ProductId, Size};

/// One `(product, size)` combination held in the cart.
///
/// Product fields are copied at add time so a later catalog change cannot
/// retroactively alter a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub size: Size,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub description: String,
    /// Always at least 1; a quantity of zero is expressed by removal.
    pub quantity: u32,
}

impl CartLine {
    /// Line total at the current quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }

    fn matches(&self, product_id: ProductId, size: Size) -> bool {
        self.product_id == product_id && self.size == size
    }
}

/// Ordered cart state with derived totals.
///
/// At most one line exists per distinct `(product_id, size)` pair; line
/// identity is always the pair, never the product id alone. Lines keep
/// their insertion order across quantity updates, and a removed then
/// re-added pair lands at the end of the sequence.
///
/// The store is created empty, mutated only through its operations, and
/// lives for the process lifetime; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product` in `size`.
    ///
    /// Merges into the existing `(id, size)` line when present, otherwise
    /// appends a new line with quantity 1. Always succeeds.
    pub fn add(&mut self, product: &Product, size: Size) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(product.id, size))
        {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine {
            product_id: product.id,
            size,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            description: product.description.clone(),
            quantity: 1,
        });
    }

    /// Remove the `(product_id, size)` line; no-op when absent.
    pub fn remove(&mut self, product_id: ProductId, size: Size) {
        self.lines.retain(|line| !line.matches(product_id, size));
    }

    /// Set the quantity of the `(product_id, size)` line.
    ///
    /// A quantity of zero removes the line; any other value overwrites
    /// the stored quantity as-is. No-op when the line is absent.
    pub fn set_quantity(&mut self, product_id: ProductId, size: Size, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id, size);
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(product_id, size))
        {
            line.quantity = quantity;
        }
    }

    /// Empty the cart unconditionally. Used after a completed checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines, recomputed on each call.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of line totals, recomputed on each call.
    ///
    /// Carts are single-currency; an empty cart totals to zero in the
    /// default currency.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        let currency = self
            .lines
            .first()
            .map_or_else(CurrencyCode::default, |line| line.price.currency_code);
        self.lines
            .iter()
            .fold(Price::zero(currency), |total, line| {
                total.plus(&line.line_total())
            })
    }
}
