//! Cart behavior driven through the full application shell.

#![allow(clippy::unwrap_used)]

use ember_north_core::{ProductId, Size};
use ember_north_integration_tests::test_app;
use ember_north_storefront::app::UiEvent;

fn add(app: &mut ember_north_storefront::app::Storefront, id: i32, size: Size) {
    app.handle(UiEvent::AddToCart {
        product_id: ProductId::new(id),
        size,
    });
}

#[test]
fn repeated_adds_merge_into_one_line() {
    let mut app = test_app();
    for _ in 0..3 {
        add(&mut app, 1, Size::M);
    }

    assert_eq!(app.cart().lines().len(), 1);
    assert_eq!(app.cart().lines()[0].quantity, 3);
    assert_eq!(app.cart().item_count(), 3);
}

#[test]
fn same_product_two_sizes_totals_combine() {
    // Scenario from the design record: jacket in M twice, then in L once.
    let mut app = test_app();
    add(&mut app, 1, Size::M);
    add(&mut app, 1, Size::M);
    add(&mut app, 1, Size::L);

    let lines = app.cart().lines();
    assert_eq!(lines.len(), 2);
    assert_eq!((lines[0].size, lines[0].quantity), (Size::M, 2));
    assert_eq!((lines[1].size, lines[1].quantity), (Size::L, 1));
    assert_eq!(app.cart().item_count(), 3);
    // 3 x $299.99
    assert_eq!(app.cart().subtotal().to_string(), "$899.97");
}

#[test]
fn quantity_five_then_zero_removes_line() {
    let mut app = test_app();
    add(&mut app, 2, Size::S);
    add(&mut app, 4, Size::M);

    app.handle(UiEvent::SetQuantity {
        product_id: ProductId::new(2),
        size: Size::S,
        quantity: 5,
    });
    assert_eq!(app.cart().item_count(), 6);

    app.handle(UiEvent::SetQuantity {
        product_id: ProductId::new(2),
        size: Size::S,
        quantity: 0,
    });
    assert_eq!(app.cart().lines().len(), 1);
    assert_eq!(app.cart().item_count(), 1);
    assert_eq!(app.cart().lines()[0].product_id, ProductId::new(4));
}

#[test]
fn mutations_on_absent_pairs_change_nothing() {
    let mut app = test_app();
    add(&mut app, 3, Size::L);
    let before = app.cart().clone();

    app.handle(UiEvent::RemoveLine {
        product_id: ProductId::new(3),
        size: Size::M,
    });
    app.handle(UiEvent::SetQuantity {
        product_id: ProductId::new(9),
        size: Size::L,
        quantity: 4,
    });

    assert_eq!(app.cart(), &before);
}

#[test]
fn cleared_cart_reads_empty_everywhere() {
    let mut app = test_app();
    add(&mut app, 1, Size::M);
    add(&mut app, 2, Size::S);
    app.handle(UiEvent::ClearCart);

    assert!(app.cart().is_empty());
    assert_eq!(app.cart().item_count(), 0);
    assert_eq!(app.cart().subtotal().to_string(), "$0.00");

    app.navigate("/cart");
    assert!(app.render().unwrap().contains("Your cart is empty"));
}

#[test]
fn cart_badge_appears_only_with_items() {
    let mut app = test_app();
    let empty = app.render().unwrap();
    assert!(!empty.contains("rounded-full h-5 w-5"));

    add(&mut app, 6, Size::M);
    let with_badge = app.render().unwrap();
    assert!(with_badge.contains("rounded-full h-5 w-5"));
}
