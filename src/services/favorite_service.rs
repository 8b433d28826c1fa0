use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};

use crate::{
    audit::log_audit,
    dto::favorites::{AddFavoriteRequest, FavoriteList},
    entity::{Favorites, Orders, Products, favorites, orders},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Favorite,
    response::{ApiResponse, Meta},
    state::AppState,
};

async fn find_own_favorite(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<favorites::Model> {
    Favorites::find_by_id(id)
        .filter(favorites::Column::UserId.eq(user.user_id))
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Favorite not found".into()))
}

pub async fn list_favorites(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<FavoriteList>> {
    let rows = Favorites::find()
        .filter(favorites::Column::UserId.eq(user.user_id))
        .order_by_asc(favorites::Column::Id)
        .all(&state.orm)
        .await?;

    let total = rows.len() as i64;
    let items = rows.into_iter().map(Favorite::from).collect();
    Ok(ApiResponse::success(
        "Favorites",
        FavoriteList { items },
        Some(Meta::total(total)),
    ))
}

pub async fn get_favorite(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<Favorite>> {
    let favorite = find_own_favorite(state, user, id).await?;
    Ok(ApiResponse::success("Favorite", favorite.into(), None))
}

pub async fn add_favorite(
    state: &AppState,
    user: &AuthUser,
    payload: AddFavoriteRequest,
) -> AppResult<ApiResponse<Favorite>> {
    if payload.product_id.is_none() && payload.order_id.is_none() {
        return Err(AppError::BadRequest(
            "Favorite must reference a product or an order".into(),
        ));
    }

    if let Some(product_id) = payload.product_id {
        Products::find_by_id(product_id)
            .one(&state.orm)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
    }

    // A referenced order must belong to the caller.
    if let Some(order_id) = payload.order_id {
        Orders::find_by_id(order_id)
            .filter(orders::Column::CustomerId.eq(user.user_id))
            .one(&state.orm)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".into()))?;
    }

    let active = favorites::ActiveModel {
        id: NotSet,
        user_id: Set(user.user_id),
        product_id: Set(payload.product_id),
        order_id: Set(payload.order_id),
    };
    let favorite = active.insert(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "favorite_add",
        Some("favorites"),
        Some(serde_json::json!({ "favorite_id": favorite.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Added to favorites",
        favorite.into(),
        None,
    ))
}

pub async fn remove_favorite(state: &AppState, user: &AuthUser, id: i32) -> AppResult<()> {
    let favorite = find_own_favorite(state, user, id).await?;
    favorite.delete(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "favorite_remove",
        Some("favorites"),
        Some(serde_json::json!({ "favorite_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(())
}
