use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::{
    audit::log_audit,
    dto::products::{
        AttachIngredientRequest, CreateProductRequest, ProductIngredientList, ProductList,
        UpdateProductRequest,
    },
    entity::{Ingredients, ProductIngredients, Products, product_ingredients, products},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{IngredientLine, Product, ProductWithIngredients},
    response::{ApiResponse, Meta},
    state::AppState,
};

fn validate_price(price: f64) -> AppResult<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::BadRequest("Price must be non-negative".into()));
    }
    Ok(price)
}

/// Association lines for one product, ingredient side embedded shallow.
async fn ingredient_lines(state: &AppState, product_id: i32) -> AppResult<Vec<IngredientLine>> {
    let rows = ProductIngredients::find()
        .filter(product_ingredients::Column::ProductId.eq(product_id))
        .find_also_related(Ingredients)
        .all(&state.orm)
        .await?;

    let lines = rows
        .into_iter()
        .filter_map(|(assoc, ingredient)| {
            ingredient.map(|ing| IngredientLine {
                ingredient_id: assoc.ingredient_id,
                name: ing.name,
                quantity: assoc.quantity,
            })
        })
        .collect();
    Ok(lines)
}

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let rows = Products::find()
        .order_by_asc(products::Column::Id)
        .all(&state.orm)
        .await?;

    let total = rows.len() as i64;
    let items = rows.into_iter().map(Product::from).collect();
    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(Meta::total(total)),
    ))
}

pub async fn get_product(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<ProductWithIngredients>> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;

    let ingredients = ingredient_lines(state, id).await?;
    Ok(ApiResponse::success(
        "Product",
        ProductWithIngredients::new(product, ingredients),
        None,
    ))
}

pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<ProductWithIngredients>> {
    let (Some(name), Some(description), Some(price)) =
        (payload.name, payload.description, payload.price)
    else {
        return Err(AppError::BadRequest("All fields are required".into()));
    };
    let price = validate_price(price)?;

    let active = products::ActiveModel {
        id: NotSet,
        name: Set(name),
        description: Set(description),
        price: Set(price),
    };
    let product = active.insert(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "product_create",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Product created",
        ProductWithIngredients::new(product, Vec::new()),
        None,
    ))
}

pub async fn update_product(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<ProductWithIngredients>> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;

    let mut active: products::ActiveModel = product.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(price) = payload.price {
        active.price = Set(validate_price(price)?);
    }

    let txn = state.orm.begin().await?;
    let updated = match active.update(&txn).await {
        Ok(product) => product,
        Err(err) => {
            txn.rollback().await.ok();
            return Err(err.into());
        }
    };
    txn.commit().await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "product_update",
        Some("products"),
        Some(serde_json::json!({ "product_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    let ingredients = ingredient_lines(state, id).await?;
    Ok(ApiResponse::success(
        "Product updated",
        ProductWithIngredients::new(updated, ingredients),
        None,
    ))
}

pub async fn delete_product(state: &AppState, user: &AuthUser, id: i32) -> AppResult<()> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;

    // Association rows go with the product (FK cascade).
    product.delete(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "product_delete",
        Some("products"),
        Some(serde_json::json!({ "product_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(())
}

pub async fn list_product_ingredients(
    state: &AppState,
    product_id: i32,
) -> AppResult<ApiResponse<ProductIngredientList>> {
    Products::find_by_id(product_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;

    let items = ingredient_lines(state, product_id).await?;
    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Product ingredients",
        ProductIngredientList { items },
        Some(Meta::total(total)),
    ))
}

pub async fn attach_ingredient(
    state: &AppState,
    user: &AuthUser,
    product_id: i32,
    payload: AttachIngredientRequest,
) -> AppResult<ApiResponse<IngredientLine>> {
    Products::find_by_id(product_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;

    let Some(ingredient_id) = payload.ingredient_id else {
        return Err(AppError::BadRequest("ingredient_id is required".into()));
    };

    let ingredient = Ingredients::find_by_id(ingredient_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Ingredient not found".into()))?;

    let existing = ProductIngredients::find_by_id((product_id, ingredient_id))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(
            "Ingredient is already attached to this product".into(),
        ));
    }

    let active = product_ingredients::ActiveModel {
        product_id: Set(product_id),
        ingredient_id: Set(ingredient_id),
        quantity: Set(payload.quantity),
    };
    let assoc = active.insert(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "ingredient_attach",
        Some("product_ingredients"),
        Some(serde_json::json!({ "product_id": product_id, "ingredient_id": ingredient_id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    let line = IngredientLine {
        ingredient_id: assoc.ingredient_id,
        name: ingredient.name,
        quantity: assoc.quantity,
    };
    Ok(ApiResponse::success("Ingredient added to product", line, None))
}

pub async fn detach_ingredient(
    state: &AppState,
    user: &AuthUser,
    product_id: i32,
    ingredient_id: i32,
) -> AppResult<()> {
    Products::find_by_id(product_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;

    // Covers both a missing ingredient and one that was never attached.
    let assoc = ProductIngredients::find_by_id((product_id, ingredient_id))
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Ingredient not found in product".into()))?;

    assoc.delete(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "ingredient_detach",
        Some("product_ingredients"),
        Some(serde_json::json!({ "product_id": product_id, "ingredient_id": ingredient_id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(())
}
