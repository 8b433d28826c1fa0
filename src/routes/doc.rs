use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse},
        favorites::{AddFavoriteRequest, FavoriteList},
        ingredients::{CreateIngredientRequest, IngredientList, UpdateIngredientRequest},
        orders::{CreateOrderRequest, OrderList, UpdateOrderRequest},
        products::{
            AttachIngredientRequest, CreateProductRequest, ProductIngredientList, ProductList,
            UpdateProductRequest,
        },
        users::{CreateUserRequest, UpdateUserRequest, UserList},
    },
    models::{
        Favorite, Ingredient, IngredientLine, IngredientWithProducts, Order, Product, ProductLine,
        ProductWithIngredients, User,
    },
    response::{ApiResponse, Meta},
    routes::{auth, favorites, health, ingredients, orders, products, users},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        products::list_product_ingredients,
        products::attach_ingredient,
        products::detach_ingredient,
        ingredients::list_ingredients,
        ingredients::get_ingredient,
        ingredients::create_ingredient,
        ingredients::update_ingredient,
        ingredients::delete_ingredient,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        orders::update_order,
        orders::delete_order,
        favorites::list_favorites,
        favorites::get_favorite,
        favorites::add_favorite,
        favorites::remove_favorite
    ),
    components(
        schemas(
            User,
            Product,
            ProductWithIngredients,
            IngredientLine,
            Ingredient,
            IngredientWithProducts,
            ProductLine,
            Order,
            Favorite,
            LoginRequest,
            LoginResponse,
            CreateUserRequest,
            UpdateUserRequest,
            UserList,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            AttachIngredientRequest,
            ProductIngredientList,
            CreateIngredientRequest,
            UpdateIngredientRequest,
            IngredientList,
            CreateOrderRequest,
            UpdateOrderRequest,
            OrderList,
            AddFavoriteRequest,
            FavoriteList,
            Meta,
            ApiResponse<User>,
            ApiResponse<ProductWithIngredients>,
            ApiResponse<IngredientWithProducts>,
            ApiResponse<Order>,
            ApiResponse<Favorite>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Users", description = "User endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Ingredients", description = "Ingredient endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
