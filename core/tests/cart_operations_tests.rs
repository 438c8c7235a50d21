// tests/cart_operations_tests.rs
mod common;
use cart_store::{Cart, CartError, CartOperation};
use common::*;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn add_new_product_to_empty_cart() {
  setup_tracing();
  let h = Harness::new(Cart::new(), &[(1, 5)]).await;

  h.store.try_add_product(1).await.unwrap();

  let cart = h.store.cart();
  assert_eq!(cart.len(), 1);
  assert_eq!(cart.get(1), Some(&details(1).into_cart_line(1)));
}

#[tokio::test]
#[serial]
async fn add_existing_product_increments_by_one() {
  setup_tracing();
  let h = Harness::new(cart_of(&[(1, 2), (2, 1)]), &[(1, 5), (2, 5)]).await;

  h.store.try_add_product(1).await.unwrap();

  assert_eq!(h.amounts(), vec![(1, 3), (2, 1)]);
}

#[tokio::test]
#[serial]
async fn add_up_to_exactly_stock_is_allowed() {
  setup_tracing();
  let h = Harness::new(cart_of(&[(1, 4)]), &[(1, 5)]).await;

  h.store.try_add_product(1).await.unwrap();

  assert_eq!(h.amounts(), vec![(1, 5)]);
}

#[tokio::test]
#[serial]
async fn add_beyond_stock_is_rejected_without_mutation() {
  setup_tracing();
  let h = Harness::new(cart_of(&[(1, 5)]), &[(1, 5)]).await;

  let err = h.store.try_add_product(1).await.unwrap_err();

  match err {
    CartError::StockExceeded {
      operation,
      product_id,
      requested,
      available,
    } => {
      assert_eq!(operation, CartOperation::Add);
      assert_eq!(product_id, 1);
      assert_eq!(requested, 6);
      assert_eq!(available, 5);
    }
    other => panic!("Expected StockExceeded, got {:?}", other),
  }
  assert_eq!(h.amounts(), vec![(1, 5)]);
}

#[tokio::test]
#[serial]
async fn add_new_product_with_zero_stock_is_rejected() {
  setup_tracing();
  let h = Harness::new(Cart::new(), &[(1, 0)]).await;

  let err = h.store.try_add_product(1).await.unwrap_err();

  assert!(err.is_stock_exceeded());
  assert!(h.store.cart().is_empty());
}

#[tokio::test]
#[serial]
async fn add_unknown_product_fails_generically() {
  setup_tracing();
  let h = Harness::new(cart_of(&[(1, 1)]), &[(1, 5)]).await;

  let err = h.store.try_add_product(99).await.unwrap_err();

  assert!(matches!(
    err,
    CartError::OperationFailed {
      operation: CartOperation::Add,
      ..
    }
  ));
  assert_eq!(h.amounts(), vec![(1, 1)]);
}

#[tokio::test]
#[serial]
async fn add_keeps_insertion_order() {
  setup_tracing();
  let h = Harness::new(Cart::new(), &[(3, 5), (1, 5), (2, 5)]).await;

  for id in [3, 1, 2, 1] {
    h.store.try_add_product(id).await.unwrap();
  }

  assert_eq!(h.amounts(), vec![(3, 1), (1, 2), (2, 1)]);
}

#[tokio::test]
#[serial]
async fn remove_present_product_keeps_the_rest_in_order() {
  setup_tracing();
  let h = Harness::new(cart_of(&[(1, 2), (2, 1)]), &[]).await;

  h.store.try_remove_product(1).await.unwrap();

  assert_eq!(h.amounts(), vec![(2, 1)]);
}

#[tokio::test]
#[serial]
async fn remove_middle_line_preserves_relative_order() {
  setup_tracing();
  let h = Harness::new(cart_of(&[(1, 1), (2, 2), (3, 3)]), &[]).await;

  h.store.try_remove_product(2).await.unwrap();

  assert_eq!(h.amounts(), vec![(1, 1), (3, 3)]);
}

#[tokio::test]
#[serial]
async fn remove_absent_product_fails_without_mutation() {
  setup_tracing();
  let h = Harness::new(cart_of(&[(1, 2)]), &[]).await;

  let err = h.store.try_remove_product(7).await.unwrap_err();

  assert_eq!(err.operation(), Some(CartOperation::Remove));
  assert!(!err.is_stock_exceeded());
  assert_eq!(h.amounts(), vec![(1, 2)]);
}

#[tokio::test]
#[serial]
async fn update_within_stock_sets_exact_amount() {
  setup_tracing();
  let h = Harness::new(cart_of(&[(1, 2)]), &[(1, 10)]).await;

  h.store.try_update_product_amount(1, 7).await.unwrap();

  assert_eq!(h.amounts(), vec![(1, 7)]);
}

#[tokio::test]
#[serial]
async fn update_touches_only_the_named_line() {
  setup_tracing();
  let h = Harness::new(cart_of(&[(1, 2), (2, 3)]), &[(1, 10), (2, 10)]).await;

  h.store.try_update_product_amount(2, 1).await.unwrap();

  assert_eq!(h.amounts(), vec![(1, 2), (2, 1)]);
}

#[tokio::test]
#[serial]
async fn update_beyond_stock_is_rejected_without_mutation() {
  setup_tracing();
  let h = Harness::new(cart_of(&[(1, 2)]), &[(1, 10)]).await;

  let err = h.store.try_update_product_amount(1, 11).await.unwrap_err();

  assert!(err.is_stock_exceeded());
  assert_eq!(err.operation(), Some(CartOperation::Update));
  assert_eq!(h.amounts(), vec![(1, 2)]);
}

#[tokio::test]
#[serial]
async fn update_absent_product_is_a_silent_no_op() {
  setup_tracing();
  // No stock entry for 9 either: the lookup must not even happen.
  let h = Harness::new(cart_of(&[(1, 2)]), &[(1, 10)]).await;

  h.store.try_update_product_amount(9, 3).await.unwrap();

  assert_eq!(h.amounts(), vec![(1, 2)]);
  assert_eq!(h.storage.saves.load(std::sync::atomic::Ordering::SeqCst), 0);
}

// Non-positive amounts are not range-checked; they only have to fit in stock.
#[tokio::test]
#[serial]
async fn update_accepts_zero_and_negative_amounts() {
  setup_tracing();
  let h = Harness::new(cart_of(&[(1, 2), (2, 2)]), &[(1, 10), (2, 10)]).await;

  h.store.try_update_product_amount(1, 0).await.unwrap();
  h.store.try_update_product_amount(2, -3).await.unwrap();

  assert_eq!(h.amounts(), vec![(1, 0), (2, -3)]);
}

#[tokio::test]
#[serial]
async fn update_fails_generically_when_stock_lookup_fails() {
  setup_tracing();
  // Product 1 is in the cart but the inventory no longer knows it.
  let h = Harness::new(cart_of(&[(1, 2)]), &[]).await;

  let err = h.store.try_update_product_amount(1, 1).await.unwrap_err();

  assert!(matches!(
    err,
    CartError::OperationFailed {
      operation: CartOperation::Update,
      ..
    }
  ));
  assert_eq!(h.amounts(), vec![(1, 2)]);
}

#[tokio::test]
#[serial]
async fn stock_changes_are_seen_by_later_operations() {
  setup_tracing();
  let h = Harness::new(cart_of(&[(1, 3)]), &[(1, 3)]).await;

  assert!(h.store.try_add_product(1).await.is_err());
  h.inventory.set_stock(1, 4);
  h.store.try_add_product(1).await.unwrap();

  assert_eq!(h.amounts(), vec![(1, 4)]);
}
