//! Checkout hand-off scenarios with different payment collaborators.

#![allow(clippy::unwrap_used)]

use ember_north_core::{ProductId, Size};
use ember_north_integration_tests::{test_app, AcceptingGateway, DecliningGateway};
use ember_north_storefront::app::{ShippingField, Storefront, UiEvent};
use ember_north_storefront::catalog::StaticCatalog;
use ember_north_storefront::config::StorefrontConfig;
use ember_north_storefront::services::LocalAuthService;

fn app_with_gateway(gateway: impl ember_north_core::PaymentGateway + 'static) -> Storefront {
    let config = StorefrontConfig::default();
    let catalog = Box::new(StaticCatalog::winter_lineup(config.currency));
    Storefront::with_collaborators(
        config,
        catalog,
        Box::new(gateway),
        Box::new(LocalAuthService),
    )
}

fn fill_cart(app: &mut Storefront) {
    app.handle(UiEvent::AddToCart {
        product_id: ProductId::new(1),
        size: Size::M,
    });
    app.handle(UiEvent::AddToCart {
        product_id: ProductId::new(2),
        size: Size::S,
    });
}

#[test]
fn stub_gateway_preserves_cart_and_explains_itself() {
    let mut app = test_app();
    fill_cart(&mut app);
    app.handle(UiEvent::SubmitOrder);

    // Nothing was charged, so nothing was cleared.
    assert_eq!(app.cart().item_count(), 2);

    app.navigate("/checkout");
    let html = app.render().unwrap();
    assert!(html.contains("payment processing is not connected"));
}

#[test]
fn accepted_order_clears_cart_and_shows_confirmation() {
    let mut app = app_with_gateway(AcceptingGateway);
    fill_cart(&mut app);
    app.handle(UiEvent::SubmitOrder);

    assert!(app.cart().is_empty());

    app.navigate("/checkout");
    let html = app.render().unwrap();
    assert!(html.contains("Thank you for your order!"));
    assert!(html.contains("Order reference:"));
}

#[test]
fn declined_order_surfaces_processor_message() {
    let mut app = app_with_gateway(DecliningGateway);
    fill_cart(&mut app);
    app.handle(UiEvent::SubmitOrder);

    assert_eq!(app.cart().item_count(), 2);
    app.navigate("/checkout");
    let html = app.render().unwrap();
    assert!(html.contains("payment declined: card expired"));
}

#[test]
fn order_summary_shows_line_totals_and_free_shipping() {
    let mut app = test_app();
    fill_cart(&mut app);
    app.handle(UiEvent::SetQuantity {
        product_id: ProductId::new(2),
        size: Size::S,
        quantity: 2,
    });

    app.navigate("/checkout");
    let html = app.render().unwrap();
    // 299.99 + 2 x 79.99
    assert!(html.contains("$159.98"));
    assert!(html.contains("$459.97"));
    assert!(html.contains("FREE"));
}

#[test]
fn shipping_form_echoes_every_field() {
    let mut app = test_app();
    fill_cart(&mut app);

    let fields = [
        (ShippingField::Email, "jane@example.com"),
        (ShippingField::FirstName, "Jane"),
        (ShippingField::LastName, "Tremblay"),
        (ShippingField::Address, "12 Portage Ave"),
        (ShippingField::City, "Winnipeg"),
        (ShippingField::Province, "MB"),
        (ShippingField::PostalCode, "R3B 2B9"),
        (ShippingField::Phone, "204-555-0188"),
    ];
    for (field, value) in fields {
        app.handle(UiEvent::EditShipping {
            field,
            value: value.to_owned(),
        });
    }

    app.navigate("/checkout");
    let html = app.render().unwrap();
    for (_, value) in fields {
        assert!(html.contains(value), "form should echo {value:?}");
    }
}
