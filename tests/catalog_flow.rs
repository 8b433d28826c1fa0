mod common;

use axum_restaurant_api::{
    dto::{
        ingredients::CreateIngredientRequest,
        products::{AttachIngredientRequest, CreateProductRequest, UpdateProductRequest},
    },
    error::AppError,
    services::{ingredient_service, product_service},
};

// Product and ingredient CRUD plus the association round-trip.
#[tokio::test]
async fn catalog_and_association_flow() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let auth = common::create_user(&state, "chef").await?;

    // Validation first: negative price and empty ingredient name.
    let err = product_service::create_product(
        &state,
        &auth,
        CreateProductRequest {
            name: Some("Broken".into()),
            description: Some("bad".into()),
            price: Some(-1.0),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = ingredient_service::create_ingredient(
        &state,
        &auth,
        CreateIngredientRequest {
            name: Some("   ".into()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let product = product_service::create_product(
        &state,
        &auth,
        CreateProductRequest {
            name: Some("Margherita".into()),
            description: Some("Tomato and mozzarella".into()),
            price: Some(8.5),
        },
    )
    .await?
    .data
    .expect("created product");
    assert!(product.ingredients.is_empty());

    let ingredient = ingredient_service::create_ingredient(
        &state,
        &auth,
        CreateIngredientRequest {
            name: Some("Tomato".into()),
        },
    )
    .await?
    .data
    .expect("created ingredient");

    // Attaching an unknown ingredient is not-found.
    let err = product_service::attach_ingredient(
        &state,
        &auth,
        product.id,
        AttachIngredientRequest {
            ingredient_id: Some(ingredient.id + 100),
            quantity: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let line = product_service::attach_ingredient(
        &state,
        &auth,
        product.id,
        AttachIngredientRequest {
            ingredient_id: Some(ingredient.id),
            quantity: Some("120 g".into()),
        },
    )
    .await?
    .data
    .expect("attached line");
    assert_eq!(line.ingredient_id, ingredient.id);
    assert_eq!(line.quantity.as_deref(), Some("120 g"));

    // Attaching the same pair twice is a conflict.
    let err = product_service::attach_ingredient(
        &state,
        &auth,
        product.id,
        AttachIngredientRequest {
            ingredient_id: Some(ingredient.id),
            quantity: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // Both detail shapes see the association, one hop, no recursion.
    let detail = product_service::get_product(&state, product.id)
        .await?
        .data
        .expect("product detail");
    assert_eq!(detail.ingredients.len(), 1);
    assert_eq!(detail.ingredients[0].name, "Tomato");

    let ingredient_detail = ingredient_service::get_ingredient(&state, ingredient.id)
        .await?
        .data
        .expect("ingredient detail");
    assert_eq!(ingredient_detail.products.len(), 1);
    assert_eq!(ingredient_detail.products[0].product_id, product.id);
    assert_eq!(ingredient_detail.products[0].quantity.as_deref(), Some("120 g"));

    // Detach restores the prior state; a second detach is not-found.
    product_service::detach_ingredient(&state, &auth, product.id, ingredient.id).await?;
    let listed = product_service::list_product_ingredients(&state, product.id)
        .await?
        .data
        .expect("ingredient list");
    assert!(listed.items.is_empty());

    let err = product_service::detach_ingredient(&state, &auth, product.id, ingredient.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // Update applies only the provided fields.
    let updated = product_service::update_product(
        &state,
        &auth,
        product.id,
        UpdateProductRequest {
            name: None,
            description: None,
            price: Some(9.0),
        },
    )
    .await?
    .data
    .expect("updated product");
    assert_eq!(updated.name, "Margherita");
    assert_eq!(updated.price, 9.0);

    // Delete, then idempotent absence; the association endpoint follows.
    product_service::delete_product(&state, &auth, product.id).await?;
    let err = product_service::get_product(&state, product.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    let err = product_service::list_product_ingredients(&state, product.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // The ingredient survives the product.
    let still_there = ingredient_service::get_ingredient(&state, ingredient.id)
        .await?
        .data
        .expect("ingredient after product delete");
    assert!(still_there.products.is_empty());

    ingredient_service::delete_ingredient(&state, &auth, ingredient.id).await?;
    let err = ingredient_service::get_ingredient(&state, ingredient.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}
