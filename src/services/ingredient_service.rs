use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::{
    audit::log_audit,
    dto::ingredients::{CreateIngredientRequest, IngredientList, UpdateIngredientRequest},
    entity::{Ingredients, ProductIngredients, Products, ingredients, product_ingredients},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Ingredient, IngredientWithProducts, ProductLine},
    response::{ApiResponse, Meta},
    state::AppState,
};

fn validate_name(name: String) -> AppResult<String> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".into()));
    }
    Ok(name)
}

/// Association lines for one ingredient, product side embedded shallow.
async fn product_lines(state: &AppState, ingredient_id: i32) -> AppResult<Vec<ProductLine>> {
    let rows = ProductIngredients::find()
        .filter(product_ingredients::Column::IngredientId.eq(ingredient_id))
        .find_also_related(Products)
        .all(&state.orm)
        .await?;

    let lines = rows
        .into_iter()
        .filter_map(|(assoc, product)| {
            product.map(|p| ProductLine {
                product_id: assoc.product_id,
                name: p.name,
                description: p.description,
                price: p.price,
                quantity: assoc.quantity,
            })
        })
        .collect();
    Ok(lines)
}

pub async fn list_ingredients(state: &AppState) -> AppResult<ApiResponse<IngredientList>> {
    let rows = Ingredients::find()
        .order_by_asc(ingredients::Column::Id)
        .all(&state.orm)
        .await?;

    let total = rows.len() as i64;
    let items = rows.into_iter().map(Ingredient::from).collect();
    Ok(ApiResponse::success(
        "Ingredients",
        IngredientList { items },
        Some(Meta::total(total)),
    ))
}

pub async fn get_ingredient(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<IngredientWithProducts>> {
    let ingredient = Ingredients::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Ingredient not found".into()))?;

    let products = product_lines(state, id).await?;
    Ok(ApiResponse::success(
        "Ingredient",
        IngredientWithProducts::new(ingredient, products),
        None,
    ))
}

pub async fn create_ingredient(
    state: &AppState,
    user: &AuthUser,
    payload: CreateIngredientRequest,
) -> AppResult<ApiResponse<Ingredient>> {
    let Some(name) = payload.name else {
        return Err(AppError::BadRequest("All fields are required".into()));
    };
    let name = validate_name(name)?;

    let active = ingredients::ActiveModel {
        id: NotSet,
        name: Set(name),
    };
    let ingredient = active.insert(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "ingredient_create",
        Some("ingredients"),
        Some(serde_json::json!({ "ingredient_id": ingredient.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Ingredient created",
        ingredient.into(),
        None,
    ))
}

pub async fn update_ingredient(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateIngredientRequest,
) -> AppResult<ApiResponse<Ingredient>> {
    let ingredient = Ingredients::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Ingredient not found".into()))?;

    let Some(name) = payload.name else {
        return Err(AppError::BadRequest("Missing data".into()));
    };
    let name = validate_name(name)?;

    let mut active: ingredients::ActiveModel = ingredient.into();
    active.name = Set(name);

    let txn = state.orm.begin().await?;
    let updated = match active.update(&txn).await {
        Ok(ingredient) => ingredient,
        Err(err) => {
            txn.rollback().await.ok();
            return Err(err.into());
        }
    };
    txn.commit().await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "ingredient_update",
        Some("ingredients"),
        Some(serde_json::json!({ "ingredient_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Ingredient updated",
        updated.into(),
        None,
    ))
}

pub async fn delete_ingredient(state: &AppState, user: &AuthUser, id: i32) -> AppResult<()> {
    let ingredient = Ingredients::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Ingredient not found".into()))?;

    ingredient.delete(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "ingredient_delete",
        Some("ingredients"),
        Some(serde_json::json!({ "ingredient_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(())
}
