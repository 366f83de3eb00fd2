//! HTTP handlers for the Inventory API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, UnprocessableEntityResponse,
    },
    IdPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::InventoryResult;
use crate::models::{
    CreateProduct, Product, StockAdjustment, StockDirection, StockLevel, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::InventoryService;
use crate::stats::{self, InventorySummary};
use crate::view::{self, ProductQuery, SortDirection, SortField, StatusFilter};

/// OpenAPI documentation for the Inventory API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
        adjust_stock,
        get_summary,
        get_low_stock,
    ),
    components(
        schemas(
            Product, CreateProduct, UpdateProduct, StockAdjustment,
            StockDirection, StockLevel, InventorySummary,
            StatusFilter, SortField, SortDirection
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Inventory", description = "Inventory management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the inventory router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: InventoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/summary", get(get_summary))
        .route("/low-stock", get(get_low_stock))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/adjust", post(adjust_stock))
        .with_state(shared_service)
}

/// List products, filtered and sorted
#[utoipa::path(
    get,
    path = "",
    tag = "Inventory",
    params(ProductQuery),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    Query(query): Query<ProductQuery>,
) -> InventoryResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(view::apply(&products, &query)))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Inventory",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> InventoryResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Inventory",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    IdPath(id): IdPath,
) -> InventoryResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Inventory",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> InventoryResult<Json<Product>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Inventory",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    IdPath(id): IdPath,
) -> InventoryResult<Json<Product>> {
    let product = service.delete_product(id).await?;
    Ok(Json(product))
}

/// Adjust product stock up or down
///
/// Subtracting below zero truncates to zero; a non-positive amount is
/// rejected with 422.
#[utoipa::path(
    post,
    path = "/{id}/adjust",
    tag = "Inventory",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = StockAdjustment,
    responses(
        (status = 200, description = "Stock adjusted successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn adjust_stock<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(adjustment): ValidatedJson<StockAdjustment>,
) -> InventoryResult<Json<Product>> {
    let product = service.adjust_stock(id, adjustment).await?;
    Ok(Json(product))
}

/// Inventory summary statistics
#[utoipa::path(
    get,
    path = "/summary",
    tag = "Inventory",
    responses(
        (status = 200, description = "Summary statistics", body = InventorySummary),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_summary<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
) -> InventoryResult<Json<InventorySummary>> {
    let products = service.list_products().await?;
    Ok(Json(stats::summarize(&products)))
}

/// Low stock query parameters
#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct LowStockQuery {
    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    5
}

/// Products running low on stock, most depleted first
#[utoipa::path(
    get,
    path = "/low-stock",
    tag = "Inventory",
    params(LowStockQuery),
    responses(
        (status = 200, description = "Low stock products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_low_stock<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    Query(query): Query<LowStockQuery>,
) -> InventoryResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(stats::low_stock_list(&products, query.limit)))
}
