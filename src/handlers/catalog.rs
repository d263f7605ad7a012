use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::AppError;
use crate::handlers::orders::Service;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub category: String,
    /// Decimal price as a string, e.g. "9.99"
    pub unit_price: String,
    pub stock_qty: i32,
    pub reorder_lvl: i32,
    /// True when a tracked product's stock has fallen below its reorder
    /// level.
    pub below_reorder: bool,
}

/// GET /products
///
/// Catalog snapshot used to build an order: prices quoted here are the
/// prices the commit will charge.
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "Product catalog", body = [ProductResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "catalog"
)]
pub async fn list_products(service: web::Data<Service>) -> Result<HttpResponse, AppError> {
    let products = web::block(move || service.catalog())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<ProductResponse> = products
        .into_iter()
        .map(|p| ProductResponse {
            below_reorder: p.below_reorder(),
            id: p.id,
            name: p.name,
            category: p.category,
            unit_price: p.unit_price.to_string(),
            stock_qty: p.stock_qty,
            reorder_lvl: p.reorder_lvl,
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}
