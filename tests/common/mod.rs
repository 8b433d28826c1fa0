use axum_restaurant_api::{
    db::{create_orm_conn, run_migrations},
    dto::users::CreateUserRequest,
    middleware::auth::AuthUser,
    services::user_service,
    state::AppState,
};
use sea_orm::{ConnectionTrait, Statement};
use uuid::Uuid;

/// Connect to the test database named by the environment, or `None` to let
/// the caller skip the test when nothing is configured.
pub async fn setup_state() -> anyhow::Result<Option<AppState>> {
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
                );
                return Ok(None);
            }
        };

    let orm = create_orm_conn(&database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs.
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE favorites, orders, product_ingredients, products, ingredients, audit_logs, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(Some(AppState { orm }))
}

/// Register a user through the service and hand back its identity.
pub async fn create_user(state: &AppState, name: &str) -> anyhow::Result<AuthUser> {
    // Unique e-mail and telephone so flows never trip the unique columns.
    let tag = Uuid::new_v4().simple().to_string();
    let payload = CreateUserRequest {
        name: Some(name.to_string()),
        full_name: Some(format!("{name} Tester")),
        telephone: Some(format!("+{}", &tag[..12])),
        address: Some("Calle Falsa 123".to_string()),
        email: Some(format!("{name}-{tag}@example.com")),
        password: Some("secret".to_string()),
    };

    let resp = user_service::create_user(state, payload).await?;
    let user = resp.data.expect("created user");
    Ok(AuthUser { user_id: user.id })
}
