//! Home page view.

use askama::Template;

use ember_north_core::{Catalog, Product};

use crate::filters;

use super::NavView;

/// Featured product card.
#[derive(Debug, Clone)]
pub struct FeaturedView {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub description: String,
    pub price: String,
}

impl From<&Product> for FeaturedView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
        }
    }
}

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub nav: NavView,
    pub featured: Vec<FeaturedView>,
}

impl HomeTemplate {
    /// Build the home page from the catalog.
    #[must_use]
    pub fn build(nav: NavView, catalog: &dyn Catalog, featured_count: usize) -> Self {
        let featured = catalog
            .products()
            .iter()
            .take(featured_count)
            .map(FeaturedView::from)
            .collect();
        Self { nav, featured }
    }
}
