use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};

use crate::{
    dto::products::{
        AttachIngredientRequest, CreateProductRequest, ProductIngredientList, ProductList,
        UpdateProductRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{IngredientLine, ProductWithIngredients},
    response::ApiResponse,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route(
            "/{id}/ingredients",
            get(list_product_ingredients).post(attach_ingredient),
        )
        .route(
            "/{id}/ingredients/{ingredient_id}",
            delete(detach_ingredient),
        )
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_products(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product with its ingredients", body = ApiResponse<ProductWithIngredients>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<ProductWithIngredients>>> {
    let resp = product_service::get_product(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Create product", body = ApiResponse<ProductWithIngredients>),
        (status = 400, description = "Missing or invalid field"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ProductWithIngredients>>)> {
    let resp = product_service::create_product(&state, &auth, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<ProductWithIngredients>),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductRequest>,
) -> AppResult<Json<ApiResponse<ProductWithIngredients>>> {
    let resp = product_service::update_product(&state, &auth, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Deleted product"),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    product_service::delete_product(&state, &auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/ingredients",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Ingredients of the product", body = ApiResponse<ProductIngredientList>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn list_product_ingredients(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<ProductIngredientList>>> {
    let resp = product_service::list_product_ingredients(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products/{id}/ingredients",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = AttachIngredientRequest,
    responses(
        (status = 201, description = "Ingredient attached", body = ApiResponse<IngredientLine>),
        (status = 400, description = "Missing ingredient_id or already attached"),
        (status = 404, description = "Product or ingredient not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn attach_ingredient(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<AttachIngredientRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<IngredientLine>>)> {
    let resp = product_service::attach_ingredient(&state, &auth, id, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}/ingredients/{ingredient_id}",
    params(
        ("id" = i32, Path, description = "Product ID"),
        ("ingredient_id" = i32, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 204, description = "Ingredient detached"),
        (status = 404, description = "Product absent or ingredient not associated"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn detach_ingredient(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, ingredient_id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    product_service::detach_ingredient(&state, &auth, id, ingredient_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
