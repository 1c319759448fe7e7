//! Static in-memory product catalog.
//!
//! Stands in for a backend data store; the rest of the application only
//! sees the [`Catalog`] trait, so swapping in a real product source does
//! not touch the cart or routing contracts.

use ember_north_core::{Catalog, Category, CurrencyCode, Price, Product, ProductId};

/// Catalog backed by a fixed product list.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// The winter-apparel line-up.
    #[must_use]
    pub fn winter_lineup(currency: CurrencyCode) -> Self {
        let products = vec![
            product(
                1,
                "Heated Jacket Pro",
                29999,
                Category::Jackets,
                "\u{1f9e5}",
                "Premium heated jacket with 3 heat settings",
                currency,
            ),
            product(
                2,
                "Thermal Gloves",
                7999,
                Category::Gloves,
                "\u{1f9e4}",
                "Battery-powered heated gloves",
                currency,
            ),
            product(
                3,
                "Heated Vest",
                18999,
                Category::Vests,
                "\u{1f9ba}",
                "Lightweight heated vest for layering",
                currency,
            ),
            product(
                4,
                "Warm Socks",
                4999,
                Category::Socks,
                "\u{1f9e6}",
                "Heated socks with wireless control",
                currency,
            ),
            product(
                5,
                "Heated Hoodie",
                24999,
                Category::Hoodies,
                "\u{1f454}",
                "Casual heated hoodie for everyday wear",
                currency,
            ),
            product(
                6,
                "Winter Beanie",
                5999,
                Category::Accessories,
                "\u{1f3a9}",
                "Heated beanie with rechargeable battery",
                currency,
            ),
        ];
        Self { products }
    }
}

impl Catalog for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

fn product(
    id: i32,
    name: &str,
    cents: i64,
    category: Category,
    image: &str,
    description: &str,
    currency: CurrencyCode,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(cents, currency),
        category,
        image: image.to_owned(),
        description: description.to_owned(),
    }
}
