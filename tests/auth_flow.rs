mod common;

use axum_restaurant_api::{
    dto::auth::{Claims, LoginRequest},
    error::AppError,
    services::auth_service,
};
use jsonwebtoken::{DecodingKey, Validation, decode};

// Token round-trip and credential checks against real hashes.
#[tokio::test]
async fn login_issues_a_decodable_token() -> anyhow::Result<()> {
    // The extractor and the issuer share the secret through the environment.
    if std::env::var("JWT_SECRET").is_err() {
        unsafe { std::env::set_var("JWT_SECRET", "test-secret") };
    }

    let Some(state) = common::setup_state().await? else {
        return Ok(());
    };

    let auth = common::create_user(&state, "login").await?;

    let token = auth_service::issue_token(auth.user_id)?;
    let secret = std::env::var("JWT_SECRET")?;
    let decoded = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    assert_eq!(decoded.claims.sub, auth.user_id.to_string());

    // common::create_user registers with the password "secret".
    let user = axum_restaurant_api::services::user_service::get_user(&state, auth.user_id)
        .await?
        .data
        .expect("registered user");

    let resp = auth_service::login_user(
        &state,
        LoginRequest {
            email: user.email.clone(),
            password: "secret".into(),
        },
    )
    .await?;
    assert!(!resp.data.expect("login response").token.is_empty());

    let err = auth_service::login_user(
        &state,
        LoginRequest {
            email: user.email,
            password: "wrong".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    Ok(())
}
