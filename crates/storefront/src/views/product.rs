//! Product detail page view.

use askama::Template;

use ember_north_core::{Product, Size};

use crate::filters;

use super::NavView;

/// One option on the size selector.
#[derive(Debug, Clone)]
pub struct SizeOptionView {
    pub code: &'static str,
    pub selected: bool,
}

/// Product detail template.
#[derive(Template)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub nav: NavView,
    pub id: i32,
    pub name: String,
    pub image: String,
    pub description: String,
    pub price: String,
    pub sizes: Vec<SizeOptionView>,
    /// Whether the transient "added to cart" confirmation is visible.
    pub added: bool,
}

impl ProductShowTemplate {
    /// Build the detail page for `product` with `selected` on the size
    /// selector.
    #[must_use]
    pub fn build(nav: NavView, product: &Product, selected: Size, added: bool) -> Self {
        let sizes = Size::ALL
            .iter()
            .map(|size| SizeOptionView {
                code: size.code(),
                selected: *size == selected,
            })
            .collect();

        Self {
            nav,
            id: product.id.as_i32(),
            name: product.name.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            sizes,
            added,
        }
    }
}

/// Not-found page for unknown or unparsable product ids.
#[derive(Template)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub nav: NavView,
}
