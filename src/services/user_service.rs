use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::{
    audit::log_audit,
    dto::users::{CreateUserRequest, UpdateUserRequest, UserList},
    entity::{Users, users},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_self},
    models::User,
    response::{ApiResponse, Meta},
    services::auth_service,
    state::AppState,
};

pub async fn list_users(state: &AppState) -> AppResult<ApiResponse<UserList>> {
    let rows = Users::find()
        .order_by_asc(users::Column::Id)
        .all(&state.orm)
        .await?;

    // The empty catalog answers 404, matching the documented contract.
    if rows.is_empty() {
        return Err(AppError::NotFound("No users found".into()));
    }

    let total = rows.len() as i64;
    let items = rows.into_iter().map(User::from).collect();
    Ok(ApiResponse::success(
        "Users",
        UserList { items },
        Some(Meta::total(total)),
    ))
}

pub async fn get_user(state: &AppState, id: i32) -> AppResult<ApiResponse<User>> {
    let user = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    Ok(ApiResponse::success("User", user.into(), None))
}

pub async fn create_user(
    state: &AppState,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let (Some(name), Some(full_name), Some(telephone), Some(address), Some(email), Some(password)) = (
        payload.name,
        payload.full_name,
        payload.telephone,
        payload.address,
        payload.email,
        payload.password,
    ) else {
        return Err(AppError::BadRequest("All fields are required".into()));
    };

    let exists = Users::find()
        .filter(users::Column::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;
    if exists.is_some() {
        return Err(AppError::Conflict("Email is already registered".into()));
    }

    let password_hash = auth_service::hash_password(&password)?;

    let active = users::ActiveModel {
        id: NotSet,
        name: Set(name),
        full_name: Set(full_name),
        telephone: Set(telephone),
        address: Set(address),
        email: Set(email),
        password_hash: Set(password_hash),
        // Registration date comes from the database clock.
        registration_date: NotSet,
        is_active: NotSet,
    };
    let user = active.insert(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(user.id),
        "user_create",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success("User created", user.into(), None))
}

pub async fn update_user(
    state: &AppState,
    auth: &AuthUser,
    id: i32,
    payload: UpdateUserRequest,
) -> AppResult<ApiResponse<User>> {
    // Ownership is checked against the path id before the row is looked
    // up, so a foreign id always answers 403.
    ensure_self(auth, id)?;

    let user = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    if payload.is_empty() {
        return Err(AppError::BadRequest("Missing data".into()));
    }

    let mut active: users::ActiveModel = user.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(full_name) = payload.full_name {
        active.full_name = Set(full_name);
    }
    if let Some(telephone) = payload.telephone {
        active.telephone = Set(telephone);
    }
    if let Some(address) = payload.address {
        active.address = Set(address);
    }
    if let Some(email) = payload.email {
        active.email = Set(email);
    }

    // Unique violations (email, telephone) surface here as a failed
    // commit: roll back and answer 500.
    let txn = state.orm.begin().await?;
    let updated = match active.update(&txn).await {
        Ok(user) => user,
        Err(err) => {
            txn.rollback().await.ok();
            return Err(err.into());
        }
    };
    txn.commit().await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(auth.user_id),
        "user_update",
        Some("users"),
        Some(serde_json::json!({ "user_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success("User updated", updated.into(), None))
}

pub async fn delete_user(state: &AppState, auth: &AuthUser, id: i32) -> AppResult<()> {
    let user = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    user.delete(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.orm,
        Some(auth.user_id),
        "user_delete",
        Some("users"),
        Some(serde_json::json!({ "user_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(())
}
