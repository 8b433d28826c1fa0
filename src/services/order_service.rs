use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::{
    audit::log_audit,
    dto::orders::{CreateOrderRequest, OrderList, UpdateOrderRequest},
    entity::{Orders, orders},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Order,
    response::{ApiResponse, Meta},
    state::AppState,
};

fn validate_total(total: f64) -> AppResult<f64> {
    if !total.is_finite() || total < 0.0 {
        return Err(AppError::BadRequest("Total must be non-negative".into()));
    }
    Ok(total)
}

fn validate_quantity(quantity_items: i32) -> AppResult<i32> {
    if quantity_items < 0 {
        return Err(AppError::BadRequest(
            "quantity_items must be non-negative".into(),
        ));
    }
    Ok(quantity_items)
}

/// Orders are private to their customer; a row owned by someone else is
/// indistinguishable from an absent one.
async fn find_own_order(state: &AppState, user: &AuthUser, id: i32) -> AppResult<orders::Model> {
    Orders::find_by_id(id)
        .filter(orders::Column::CustomerId.eq(user.user_id))
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".into()))
}

pub async fn list_orders(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<OrderList>> {
    let rows = Orders::find()
        .filter(orders::Column::CustomerId.eq(user.user_id))
        .order_by_asc(orders::Column::Id)
        .all(&state.orm)
        .await?;

    let total = rows.len() as i64;
    let items = rows.into_iter().map(Order::from).collect();
    Ok(ApiResponse::success(
        "Orders",
        OrderList { items },
        Some(Meta::total(total)),
    ))
}

pub async fn get_order(state: &AppState, user: &AuthUser, id: i32) -> AppResult<ApiResponse<Order>> {
    let order = find_own_order(state, user, id).await?;
    Ok(ApiResponse::success("Order", order.into(), None))
}

pub async fn create_order(
    state: &AppState,
    user: &AuthUser,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    let (Some(quantity_items), Some(date), Some(total)) =
        (payload.quantity_items, payload.date, payload.total)
    else {
        return Err(AppError::BadRequest("All fields are required".into()));
    };
    let quantity_items = validate_quantity(quantity_items)?;
    let total = validate_total(total)?;

    let active = orders::ActiveModel {
        id: NotSet,
        quantity_items: Set(quantity_items),
        customer_id: Set(user.user_id),
        date: Set(date),
        total: Set(total),
    };
    let order = active.insert(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "order_create",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success("Order created", order.into(), None))
}

pub async fn update_order(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: UpdateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    let order = find_own_order(state, user, id).await?;

    if payload.is_empty() {
        return Err(AppError::BadRequest("Missing data".into()));
    }

    let mut active: orders::ActiveModel = order.into();
    if let Some(quantity_items) = payload.quantity_items {
        active.quantity_items = Set(validate_quantity(quantity_items)?);
    }
    if let Some(date) = payload.date {
        active.date = Set(date);
    }
    if let Some(total) = payload.total {
        active.total = Set(validate_total(total)?);
    }

    let txn = state.orm.begin().await?;
    let updated = match active.update(&txn).await {
        Ok(order) => order,
        Err(err) => {
            txn.rollback().await.ok();
            return Err(err.into());
        }
    };
    txn.commit().await?;

    Ok(ApiResponse::success("Order updated", updated.into(), None))
}

pub async fn delete_order(state: &AppState, user: &AuthUser, id: i32) -> AppResult<()> {
    let order = find_own_order(state, user, id).await?;
    order.delete(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.user_id),
        "order_delete",
        Some("orders"),
        Some(serde_json::json!({ "order_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(())
}
