//! The application shell.
//!
//! [`Storefront`] owns the cart store, the router, the customer session,
//! and the ephemeral UI state, and wires them to the injected
//! collaborators. Everything is single-threaded and event-driven: each
//! call to [`Storefront::handle`] runs to completion before the next
//! event is processed, so no two mutations ever interleave.

use std::time::Instant;

use secrecy::SecretString;

use ember_north_core::{
    AuthService, CartStore, Catalog, CategoryFilter, OrderDraft, PaymentGateway, ProductId,
    ShippingDetails, Size,
};

use crate::catalog::StaticCatalog;
use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::router::{RouteTable, RouterState};
use crate::services::{LocalAuthService, UnconnectedGateway};
use crate::session::AccountSession;
use crate::views::account::{AccountTemplate, SignInTemplate};
use crate::views::cart::CartShowTemplate;
use crate::views::checkout::CheckoutTemplate;
use crate::views::home::HomeTemplate;
use crate::views::not_found::NotFoundTemplate;
use crate::views::product::{ProductNotFoundTemplate, ProductShowTemplate};
use crate::views::shop::ShopTemplate;
use crate::views::NavView;

use askama::Template;

/// Top-level pages selected by the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Shop,
    Product,
    Cart,
    Checkout,
    Account,
}

/// Shipping form fields (controlled inputs on the checkout page).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingField {
    Email,
    FirstName,
    LastName,
    Address,
    City,
    Province,
    PostalCode,
    Phone,
}

/// Every user interaction that mutates state.
#[derive(Debug, Clone)]
pub enum UiEvent {
    AddToCart {
        product_id: ProductId,
        size: Size,
    },
    RemoveLine {
        product_id: ProductId,
        size: Size,
    },
    SetQuantity {
        product_id: ProductId,
        size: Size,
        quantity: u32,
    },
    ClearCart,
    SetSearch(String),
    SetCategoryFilter(CategoryFilter),
    SelectSize(Size),
    EditShipping {
        field: ShippingField,
        value: String,
    },
    SubmitOrder,
    EditSignInEmail(String),
    EditSignInPassword(SecretString),
    SignIn,
    SignOut,
}

/// Ephemeral per-view UI state: controlled inputs and transient flags.
#[derive(Debug)]
struct UiState {
    search: String,
    category: CategoryFilter,
    selected_size: Size,
    shipping: ShippingDetails,
    sign_in_email: String,
    sign_in_password: SecretString,
    /// When the last add-to-cart happened; drives the transient
    /// confirmation on the product page. Expiry is checked lazily at
    /// render time; there is no cancellation path.
    added_at: Option<Instant>,
    checkout_notice: Option<String>,
    order_confirmation: Option<String>,
    sign_in_error: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            selected_size: Size::default(),
            shipping: ShippingDetails::default(),
            sign_in_email: String::new(),
            sign_in_password: SecretString::from(String::new()),
            added_at: None,
            checkout_notice: None,
            order_confirmation: None,
            sign_in_error: None,
        }
    }
}

/// The storefront application.
///
/// The cart store is owned here and passed explicitly to the views that
/// read it; nothing reaches for ambient state.
pub struct Storefront {
    config: StorefrontConfig,
    catalog: Box<dyn Catalog>,
    payment: Box<dyn PaymentGateway>,
    auth: Box<dyn AuthService>,
    routes: RouteTable<Page>,
    router: RouterState,
    cart: CartStore,
    session: AccountSession,
    ui: UiState,
}

impl Storefront {
    /// Build the app with the default collaborators: the static catalog,
    /// the unconnected payment gateway, and the local auth stub.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Box::new(StaticCatalog::winter_lineup(config.currency));
        Self::with_collaborators(
            config,
            catalog,
            Box::new(UnconnectedGateway),
            Box::new(LocalAuthService),
        )
    }

    /// Build the app with injected collaborators (tests, future
    /// backends).
    #[must_use]
    pub fn with_collaborators(
        config: StorefrontConfig,
        catalog: Box<dyn Catalog>,
        payment: Box<dyn PaymentGateway>,
        auth: Box<dyn AuthService>,
    ) -> Self {
        Self {
            config,
            catalog,
            payment,
            auth,
            routes: route_table(),
            router: RouterState::default(),
            cart: CartStore::new(),
            session: AccountSession::default(),
            ui: UiState::default(),
        }
    }

    /// Current cart state.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Current account session.
    #[must_use]
    pub fn session(&self) -> &AccountSession {
        &self.session
    }

    /// Current logical path.
    #[must_use]
    pub fn current_path(&self) -> &str {
        self.router.current_path()
    }

    /// Navigate to a logical path (an internal link click).
    pub fn navigate(&mut self, path: &str) {
        self.router.navigate(path);
        tracing::info!(path = self.router.current_path(), "navigate");
    }

    /// React to a browser fragment change (back/forward navigation).
    pub fn on_fragment_change(&mut self, fragment: &str) {
        self.router.on_fragment_change(fragment);
        tracing::info!(path = self.router.current_path(), "fragment change");
    }

    /// Apply one UI event. Runs to completion before returning; no two
    /// mutations ever overlap.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::AddToCart { product_id, size } => self.add_to_cart(product_id, size),
            UiEvent::RemoveLine { product_id, size } => {
                self.cart.remove(product_id, size);
                tracing::info!(%product_id, %size, count = self.cart.item_count(), "removed from cart");
            }
            UiEvent::SetQuantity {
                product_id,
                size,
                quantity,
            } => {
                self.cart.set_quantity(product_id, size, quantity);
                tracing::info!(%product_id, %size, quantity, count = self.cart.item_count(), "quantity updated");
            }
            UiEvent::ClearCart => {
                self.cart.clear();
                tracing::info!("cart cleared");
            }
            UiEvent::SetSearch(search) => self.ui.search = search,
            UiEvent::SetCategoryFilter(filter) => self.ui.category = filter,
            UiEvent::SelectSize(size) => self.ui.selected_size = size,
            UiEvent::EditShipping { field, value } => self.edit_shipping(field, value),
            UiEvent::SubmitOrder => self.submit_order(),
            UiEvent::EditSignInEmail(email) => self.ui.sign_in_email = email,
            UiEvent::EditSignInPassword(password) => self.ui.sign_in_password = password,
            UiEvent::SignIn => self.sign_in(),
            UiEvent::SignOut => {
                self.session = AccountSession::SignedOut;
                tracing::info!("signed out");
            }
        }
    }

    /// Render the page for the current path.
    ///
    /// Exactly one page renders per path; an unmatched path renders the
    /// not-found page rather than nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] when template rendering fails.
    pub fn render(&self) -> Result<String, AppError> {
        let path = self.router.current_path();
        let nav = NavView::new(&self.config.store_name, &self.cart);
        tracing::debug!(path, cart_count = nav.cart_count, "render");

        let matched = match self.routes.recognize(path) {
            Ok(matched) => matched,
            Err(no_match) => {
                tracing::warn!(path = %no_match.path, "no route matched");
                return Ok(NotFoundTemplate {
                    nav,
                    path: no_match.path,
                }
                .render()?);
            }
        };

        let html = match matched.route {
            Page::Home => {
                HomeTemplate::build(nav, self.catalog.as_ref(), self.config.featured_count)
                    .render()?
            }
            Page::Shop => ShopTemplate::build(
                nav,
                self.catalog.as_ref(),
                &self.ui.search,
                self.ui.category,
            )
            .render()?,
            Page::Product => {
                let product = matched
                    .params
                    .get_parsed::<ProductId>("id")
                    .and_then(|id| self.catalog.find(id));
                match product {
                    Some(product) => ProductShowTemplate::build(
                        nav,
                        product,
                        self.ui.selected_size,
                        self.added_confirmation_visible(),
                    )
                    .render()?,
                    None => ProductNotFoundTemplate { nav }.render()?,
                }
            }
            Page::Cart => CartShowTemplate::build(nav, &self.cart).render()?,
            Page::Checkout => CheckoutTemplate::build(
                nav,
                &self.cart,
                &self.ui.shipping,
                self.ui.checkout_notice.clone(),
                self.ui.order_confirmation.clone(),
            )
            .render()?,
            Page::Account => match &self.session {
                AccountSession::SignedIn { email, .. } => AccountTemplate {
                    nav,
                    email: email.to_string(),
                }
                .render()?,
                AccountSession::SignedOut => SignInTemplate {
                    nav,
                    email: self.ui.sign_in_email.clone(),
                    error: self.ui.sign_in_error.clone(),
                }
                .render()?,
            },
        };

        Ok(html)
    }

    fn add_to_cart(&mut self, product_id: ProductId, size: Size) {
        let Some(product) = self.catalog.find(product_id) else {
            tracing::warn!(%product_id, "add to cart for unknown product ignored");
            return;
        };
        self.cart.add(product, size);
        self.ui.added_at = Some(Instant::now());
        tracing::info!(%product_id, %size, count = self.cart.item_count(), "added to cart");
    }

    fn edit_shipping(&mut self, field: ShippingField, value: String) {
        let shipping = &mut self.ui.shipping;
        match field {
            ShippingField::Email => shipping.email = value,
            ShippingField::FirstName => shipping.first_name = value,
            ShippingField::LastName => shipping.last_name = value,
            ShippingField::Address => shipping.address = value,
            ShippingField::City => shipping.city = value,
            ShippingField::Province => shipping.province = value,
            ShippingField::PostalCode => shipping.postal_code = value,
            ShippingField::Phone => shipping.phone = value,
        }
    }

    fn submit_order(&mut self) {
        if self.cart.is_empty() {
            // The checkout page already shows its empty state.
            return;
        }

        let draft = OrderDraft {
            shipping: self.ui.shipping.clone(),
            lines: self.cart.lines().to_vec(),
            total: self.cart.subtotal(),
        };

        match self.payment.submit_order(&draft) {
            Ok(confirmation) => {
                tracing::info!(reference = %confirmation, "order completed");
                self.cart.clear();
                self.ui.order_confirmation = Some(confirmation.to_string());
                self.ui.checkout_notice = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "order submission failed");
                self.ui.checkout_notice = Some(err.to_string());
            }
        }
    }

    fn sign_in(&mut self) {
        match self
            .auth
            .sign_in(&self.ui.sign_in_email, &self.ui.sign_in_password)
        {
            Ok((email, token)) => {
                tracing::info!(customer = %email, "signed in");
                self.session = AccountSession::SignedIn { email, token };
                self.ui.sign_in_error = None;
                self.ui.sign_in_password = SecretString::from(String::new());
            }
            Err(err) => {
                tracing::warn!(error = %err, "sign-in rejected");
                self.ui.sign_in_error = Some(err.to_string());
            }
        }
    }

    /// Whether the "added to cart" confirmation is still inside its
    /// display window.
    fn added_confirmation_visible(&self) -> bool {
        self.ui
            .added_at
            .is_some_and(|at| at.elapsed() < self.config.confirmation_window)
    }
}

/// The statically declared route table.
fn route_table() -> RouteTable<Page> {
    RouteTable::new([
        ("/", Page::Home),
        ("/shop", Page::Shop),
        ("/product/{id}", Page::Product),
        ("/cart", Page::Cart),
        ("/checkout", Page::Checkout),
        ("/account", Page::Account),
    ])
    .expect("static route table is well-formed")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ember_north_core::Category;

    use super::*;

    fn app() -> Storefront {
        Storefront::new(StorefrontConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.current_path(), "/");
        assert!(app.cart().is_empty());
        assert!(!app.session().is_signed_in());
    }

    #[test]
    fn test_navigation_selects_pages() {
        let mut app = app();

        let home = app.render().unwrap();
        assert!(home.contains("Stay Warm, Stay Active"));

        app.navigate("/shop");
        let shop = app.render().unwrap();
        assert!(shop.contains("Shop All Products"));

        app.navigate("/cart");
        let cart = app.render().unwrap();
        assert!(cart.contains("Your cart is empty"));
    }

    #[test]
    fn test_unmatched_path_renders_not_found() {
        let mut app = app();
        app.navigate("/warranty");
        let page = app.render().unwrap();
        assert!(page.contains("Page not found"));
        assert!(page.contains("/warranty"));
    }

    #[test]
    fn test_product_detail_renders_known_id() {
        let mut app = app();
        app.navigate("/product/2");
        let page = app.render().unwrap();
        assert!(page.contains("Thermal Gloves"));
        assert!(page.contains("$79.99"));
    }

    #[test]
    fn test_unknown_product_renders_not_found() {
        let mut app = app();
        app.navigate("/product/999");
        assert!(app.render().unwrap().contains("Product not found"));

        app.navigate("/product/banana");
        assert!(app.render().unwrap().contains("Product not found"));
    }

    #[test]
    fn test_add_to_cart_updates_badge() {
        let mut app = app();
        app.handle(UiEvent::AddToCart {
            product_id: ProductId::new(1),
            size: Size::M,
        });
        app.handle(UiEvent::AddToCart {
            product_id: ProductId::new(1),
            size: Size::M,
        });

        assert_eq!(app.cart().item_count(), 2);
        app.navigate("/cart");
        let page = app.render().unwrap();
        assert!(page.contains("Heated Jacket Pro"));
        assert!(page.contains("$599.98"));
    }

    #[test]
    fn test_add_unknown_product_is_ignored() {
        let mut app = app();
        app.handle(UiEvent::AddToCart {
            product_id: ProductId::new(999),
            size: Size::M,
        });
        assert!(app.cart().is_empty());
    }

    #[test]
    fn test_shop_filters_apply() {
        let mut app = app();
        app.handle(UiEvent::SetCategoryFilter(CategoryFilter::Only(
            Category::Socks,
        )));
        app.navigate("/shop");
        let page = app.render().unwrap();
        assert!(page.contains("Warm Socks"));
        assert!(!page.contains("Heated Jacket Pro"));
    }

    #[test]
    fn test_checkout_stub_keeps_cart_and_shows_notice() {
        let mut app = app();
        app.handle(UiEvent::AddToCart {
            product_id: ProductId::new(3),
            size: Size::L,
        });
        app.handle(UiEvent::SubmitOrder);

        assert_eq!(app.cart().item_count(), 1);
        app.navigate("/checkout");
        let page = app.render().unwrap();
        assert!(page.contains("payment processing is not connected"));
    }

    #[test]
    fn test_submit_with_empty_cart_is_noop() {
        let mut app = app();
        app.handle(UiEvent::SubmitOrder);
        app.navigate("/checkout");
        let page = app.render().unwrap();
        assert!(page.contains("Your cart is empty"));
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut app = app();
        app.navigate("/account");
        assert!(app.render().unwrap().contains("Sign In"));

        app.handle(UiEvent::EditSignInEmail("customer@example.com".to_owned()));
        app.handle(UiEvent::EditSignInPassword(SecretString::from(
            "hunter2".to_owned(),
        )));
        app.handle(UiEvent::SignIn);
        assert!(app.session().is_signed_in());
        assert!(app.render().unwrap().contains("My Account"));

        app.handle(UiEvent::SignOut);
        assert!(!app.session().is_signed_in());
    }

    #[test]
    fn test_rejected_sign_in_shows_error() {
        let mut app = app();
        app.handle(UiEvent::EditSignInEmail("not-an-email".to_owned()));
        app.handle(UiEvent::EditSignInPassword(SecretString::from(
            "hunter2".to_owned(),
        )));
        app.handle(UiEvent::SignIn);

        assert!(!app.session().is_signed_in());
        app.navigate("/account");
        assert!(app.render().unwrap().contains("invalid email"));
    }

    #[test]
    fn test_added_confirmation_visible_after_add() {
        let mut app = app();
        app.navigate("/product/1");
        assert!(app.render().unwrap().contains("Add to Cart"));

        app.handle(UiEvent::AddToCart {
            product_id: ProductId::new(1),
            size: Size::M,
        });
        assert!(app.render().unwrap().contains("Added to Cart!"));
    }

    #[test]
    fn test_shipping_form_echoes_input() {
        let mut app = app();
        app.handle(UiEvent::AddToCart {
            product_id: ProductId::new(1),
            size: Size::M,
        });
        app.handle(UiEvent::EditShipping {
            field: ShippingField::City,
            value: "Winnipeg".to_owned(),
        });
        app.navigate("/checkout");
        assert!(app.render().unwrap().contains("Winnipeg"));
    }
}
