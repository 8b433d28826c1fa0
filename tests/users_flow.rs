mod common;

use axum_restaurant_api::{
    dto::users::{CreateUserRequest, UpdateUserRequest},
    error::AppError,
    middleware::auth::AuthUser,
    services::user_service,
};

fn full_payload(email: &str, telephone: &str) -> CreateUserRequest {
    CreateUserRequest {
        name: Some("ana".into()),
        full_name: Some("Ana Li".into()),
        telephone: Some(telephone.into()),
        address: Some("x".into()),
        email: Some(email.into()),
        password: Some("secret".into()),
    }
}

// Registration, duplicate e-mail, the self-only update rule and hard delete.
#[tokio::test]
async fn user_crud_and_ownership_flow() -> anyhow::Result<()> {
    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    // An empty table answers not-found rather than an empty list.
    let err = user_service::list_users(&state).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // Missing fields are rejected before anything touches storage.
    let incomplete = CreateUserRequest {
        name: Some("ana".into()),
        full_name: None,
        telephone: None,
        address: None,
        email: None,
        password: None,
    };
    let err = user_service::create_user(&state, incomplete)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let created = user_service::create_user(&state, full_payload("ana@example.com", "+1111"))
        .await?
        .data
        .expect("created user");
    assert!(created.id > 0);
    assert_eq!(created.email, "ana@example.com");

    // Same e-mail again is a duplicate regardless of the other fields.
    let err = user_service::create_user(&state, full_payload("ana@example.com", "+2222"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // The storage-assigned id is stable across a subsequent get.
    let fetched = user_service::get_user(&state, created.id)
        .await?
        .data
        .expect("fetched user");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "ana");

    let listed = user_service::list_users(&state)
        .await?
        .data
        .expect("user list");
    assert_eq!(listed.items.len(), 1);

    // A different identity may not touch the row, and the row stays intact.
    let stranger = AuthUser {
        user_id: created.id + 1,
    };
    let rename = UpdateUserRequest {
        name: Some("eve".into()),
        full_name: None,
        telephone: None,
        address: None,
        email: None,
    };
    let err = user_service::update_user(&state, &stranger, created.id, rename)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));
    let unchanged = user_service::get_user(&state, created.id)
        .await?
        .data
        .expect("row after forbidden update");
    assert_eq!(unchanged.name, "ana");

    // The owner may, but not with an empty payload.
    let owner = AuthUser {
        user_id: created.id,
    };
    let empty = UpdateUserRequest {
        name: None,
        full_name: None,
        telephone: None,
        address: None,
        email: None,
    };
    let err = user_service::update_user(&state, &owner, created.id, empty)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let rename = UpdateUserRequest {
        name: Some("ana maria".into()),
        full_name: None,
        telephone: None,
        address: None,
        email: None,
    };
    let updated = user_service::update_user(&state, &owner, created.id, rename)
        .await?
        .data
        .expect("updated user");
    assert_eq!(updated.name, "ana maria");
    assert_eq!(updated.email, "ana@example.com");

    // Hard delete, then idempotent absence.
    user_service::delete_user(&state, &owner, created.id).await?;
    let err = user_service::get_user(&state, created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    let err = user_service::delete_user(&state, &owner, created.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}
