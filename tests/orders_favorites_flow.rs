mod common;

use axum_restaurant_api::{
    dto::{
        favorites::AddFavoriteRequest,
        orders::{CreateOrderRequest, UpdateOrderRequest},
        products::CreateProductRequest,
    },
    error::AppError,
    services::{favorite_service, order_service, product_service},
};
use chrono::NaiveDate;

// Orders and favorites are scoped to the authenticated customer.
#[tokio::test]
async fn order_and_favorite_flow() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let ana = common::create_user(&state, "ana").await?;
    let bob = common::create_user(&state, "bob").await?;

    let date = NaiveDate::from_ymd_opt(2026, 8, 29).expect("valid date");

    // Validation: negative totals and item counts never reach storage.
    let err = order_service::create_order(
        &state,
        &ana,
        CreateOrderRequest {
            quantity_items: Some(2),
            date: Some(date),
            total: Some(-3.0),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = order_service::create_order(
        &state,
        &ana,
        CreateOrderRequest {
            quantity_items: None,
            date: Some(date),
            total: Some(3.0),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let order = order_service::create_order(
        &state,
        &ana,
        CreateOrderRequest {
            quantity_items: Some(2),
            date: Some(date),
            total: Some(17.0),
        },
    )
    .await?
    .data
    .expect("created order");
    assert_eq!(order.customer_id, ana.user_id);

    // Bob cannot see ana's order at all.
    let err = order_service::get_order(&state, &bob, order.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    let bobs = order_service::list_orders(&state, &bob)
        .await?
        .data
        .expect("bob order list");
    assert!(bobs.items.is_empty());

    let anas = order_service::list_orders(&state, &ana)
        .await?
        .data
        .expect("ana order list");
    assert_eq!(anas.items.len(), 1);

    let updated = order_service::update_order(
        &state,
        &ana,
        order.id,
        UpdateOrderRequest {
            quantity_items: None,
            date: None,
            total: Some(19.5),
        },
    )
    .await?
    .data
    .expect("updated order");
    assert_eq!(updated.total, 19.5);
    assert_eq!(updated.quantity_items, 2);

    // Favorites: must reference something, and referents must exist.
    let err = favorite_service::add_favorite(
        &state,
        &ana,
        AddFavoriteRequest {
            product_id: None,
            order_id: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = favorite_service::add_favorite(
        &state,
        &ana,
        AddFavoriteRequest {
            product_id: Some(9999),
            order_id: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // Bob cannot favorite ana's order.
    let err = favorite_service::add_favorite(
        &state,
        &bob,
        AddFavoriteRequest {
            product_id: None,
            order_id: Some(order.id),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let product = product_service::create_product(
        &state,
        &ana,
        CreateProductRequest {
            name: Some("Carbonara".into()),
            description: Some("Roman classic".into()),
            price: Some(11.0),
        },
    )
    .await?
    .data
    .expect("created product");

    let favorite = favorite_service::add_favorite(
        &state,
        &ana,
        AddFavoriteRequest {
            product_id: Some(product.id),
            order_id: Some(order.id),
        },
    )
    .await?
    .data
    .expect("created favorite");
    assert_eq!(favorite.user_id, ana.user_id);

    let listed = favorite_service::list_favorites(&state, &ana)
        .await?
        .data
        .expect("favorite list");
    assert_eq!(listed.items.len(), 1);

    // Scoped to the owner on reads and removal.
    let err = favorite_service::get_favorite(&state, &bob, favorite.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    favorite_service::remove_favorite(&state, &ana, favorite.id).await?;
    let err = favorite_service::remove_favorite(&state, &ana, favorite.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // Deleting the order leaves nothing to fetch.
    order_service::delete_order(&state, &ana, order.id).await?;
    let err = order_service::get_order(&state, &ana, order.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}
