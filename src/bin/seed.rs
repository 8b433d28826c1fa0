use axum_restaurant_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{Ingredients, Products, Users, ingredients, product_ingredients, products, users},
    services::auth_service,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let user_id = ensure_user(&orm, "ana", "Ana Li", "+1111", "Main St 1", "ana@example.com").await?;
    seed_catalog(&orm).await?;

    println!("Seed completed. User ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    orm: &DatabaseConnection,
    name: &str,
    full_name: &str,
    telephone: &str,
    address: &str,
    email: &str,
) -> anyhow::Result<i32> {
    if let Some(existing) = Users::find()
        .filter(users::Column::Email.eq(email))
        .one(orm)
        .await?
    {
        println!("User {email} already present");
        return Ok(existing.id);
    }

    let password_hash =
        auth_service::hash_password("secret").map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let user = users::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        full_name: Set(full_name.to_string()),
        telephone: Set(telephone.to_string()),
        address: Set(address.to_string()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash),
        registration_date: NotSet,
        is_active: NotSet,
    }
    .insert(orm)
    .await?;

    println!("Ensured user {email}");
    Ok(user.id)
}

async fn seed_catalog(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let catalog = [
        ("Margherita", "Tomato, mozzarella and basil", 8.5),
        ("Carbonara", "Roman classic with guanciale", 11.0),
        ("Tiramisu", "Espresso-soaked dessert", 5.5),
    ];
    let pantry = ["Tomato", "Mozzarella", "Basil", "Guanciale", "Egg"];

    for (name, description, price) in catalog {
        let exists = Products::find()
            .filter(products::Column::Name.eq(name))
            .one(orm)
            .await?;
        if exists.is_some() {
            continue;
        }
        products::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            price: Set(price),
        }
        .insert(orm)
        .await?;
    }

    for name in pantry {
        let exists = Ingredients::find()
            .filter(ingredients::Column::Name.eq(name))
            .one(orm)
            .await?;
        if exists.is_some() {
            continue;
        }
        ingredients::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
        }
        .insert(orm)
        .await?;
    }

    // Attach a couple of ingredients to the first product as a demo.
    let margherita = Products::find()
        .filter(products::Column::Name.eq("Margherita"))
        .one(orm)
        .await?;
    let tomato = Ingredients::find()
        .filter(ingredients::Column::Name.eq("Tomato"))
        .one(orm)
        .await?;

    if let (Some(product), Some(ingredient)) = (margherita, tomato) {
        let exists = product_ingredients::Entity::find_by_id((product.id, ingredient.id))
            .one(orm)
            .await?;
        if exists.is_none() {
            product_ingredients::ActiveModel {
                product_id: Set(product.id),
                ingredient_id: Set(ingredient.id),
                quantity: Set(Some("120 g".to_string())),
            }
            .insert(orm)
            .await?;
        }
    }

    println!("Seeded catalog");
    Ok(())
}
