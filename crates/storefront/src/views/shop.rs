//! Shop page view: the filterable product listing.

use askama::Template;

use ember_north_core::{Catalog, Category, CategoryFilter, Product};

use crate::filters;

use super::NavView;

/// Product card in the listing grid.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub description: String,
    pub price: String,
}

impl From<&Product> for ProductCardView {
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

/// Category filter chip.
#[derive(Debug, Clone)]
pub struct CategoryChipView {
    pub code: &'static str,
    pub selected: bool,
}

/// Shop page template.
#[derive(Template)]
#[template(path = "products/index.html")]
pub struct ShopTemplate {
    pub nav: NavView,
    pub search: String,
    pub chips: Vec<CategoryChipView>,
    pub products: Vec<ProductCardView>,
}

impl ShopTemplate {
    /// Build the listing, applying the search text and category filter.
    ///
    /// The search is a case-insensitive substring match on product names.
    #[must_use]
    pub fn build(
        nav: NavView,
        catalog: &dyn Catalog,
        search: &str,
        filter: CategoryFilter,
    ) -> Self {
        let needle = search.to_lowercase();
        let products = catalog
            .products()
            .iter()
            .filter(|product| filter.matches(product.category))
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .map(ProductCardView::from)
            .collect();

        Self {
            nav,
            search: search.to_owned(),
            chips: chips(filter),
            products,
        }
    }
}

/// The `all` chip followed by one chip per category.
fn chips(selected: CategoryFilter) -> Vec<CategoryChipView> {
    let mut chips = vec![CategoryChipView {
        code: "all",
        selected: selected == CategoryFilter::All,
    }];
    chips.extend(Category::ALL.iter().map(|category| CategoryChipView {
        code: category.code(),
        selected: selected == CategoryFilter::Only(*category),
    }));
    chips
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ember_north_core::CurrencyCode;

    use super::*;
    use crate::catalog::StaticCatalog;

    fn nav() -> NavView {
        NavView {
            store_name: "Ember North".to_owned(),
            cart_count: 0,
        }
    }

    #[test]
    fn test_no_filter_shows_everything() {
        let catalog = StaticCatalog::winter_lineup(CurrencyCode::CAD);
        let shop = ShopTemplate::build(nav(), &catalog, "", CategoryFilter::All);
        assert_eq!(shop.products.len(), catalog.products().len());
    }

    #[test]
    fn test_category_filter_narrows_listing() {
        let catalog = StaticCatalog::winter_lineup(CurrencyCode::CAD);
        let shop = ShopTemplate::build(
            nav(),
            &catalog,
            "",
            CategoryFilter::Only(Category::Gloves),
        );
        assert_eq!(shop.products.len(), 1);
        assert_eq!(shop.products[0].name, "Thermal Gloves");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = StaticCatalog::winter_lineup(CurrencyCode::CAD);
        let shop = ShopTemplate::build(nav(), &catalog, "HEATED", CategoryFilter::All);
        assert!(!shop.products.is_empty());
        assert!(shop.products.iter().all(|p| p.name.contains("Heated")));
    }

    #[test]
    fn test_search_and_filter_compose() {
        let catalog = StaticCatalog::winter_lineup(CurrencyCode::CAD);
        let shop = ShopTemplate::build(
            nav(),
            &catalog,
            "heated",
            CategoryFilter::Only(Category::Socks),
        );
        assert!(shop.products.is_empty());
    }

    #[test]
    fn test_selected_chip_is_marked() {
        let catalog = StaticCatalog::winter_lineup(CurrencyCode::CAD);
        let shop = ShopTemplate::build(
            nav(),
            &catalog,
            "",
            CategoryFilter::Only(Category::Vests),
        );
        let selected: Vec<&str> = shop
            .chips
            .iter()
            .filter(|chip| chip.selected)
            .map(|chip| chip.code)
            .collect();
        assert_eq!(selected, vec!["vests"]);
    }
}
