//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Inventory API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "Inventory tracking API: product catalog, stock adjustments and dashboard stats",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_inventory::ApiDoc)
    ),
    tags(
        (name = "Inventory", description = "Inventory management endpoints")
    )
)]
pub struct ApiDoc;
