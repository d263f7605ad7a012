use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::orders::{LineRequest, OrderService};
use crate::domain::order::{OrderSummary, OrderView};
use crate::domain::status::{OrderStatus, StatusAction};
use crate::errors::AppError;
use crate::infrastructure::order_store::DieselOrderStore;

pub type Service = OrderService<DieselOrderStore>;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderLineRequest {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_id: i32,
    /// The acting employee; must hold level 2 (Sales Rep) or above.
    pub employee_id: i32,
    pub lines: Vec<OrderLineRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    pub id: i32,
    /// Decimal total as a string to avoid floating-point issues, e.g. "25.00"
    pub total_amount: String,
    /// Non-blocking oversell advisories; the order was still committed.
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransitionRequest {
    pub employee_id: i32,
    /// One of "fulfill", "cancel", "reopen"
    pub action: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TransitionResponse {
    pub id: i32,
    pub status: String,
    pub fulfilled_at: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: String,
    pub subtotal: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub customer_id: i32,
    pub customer_name: String,
    pub employee_id: i32,
    pub employee_name: String,
    pub status: String,
    pub created_at: String,
    pub fulfilled_at: Option<String>,
    pub total_amount: String,
    pub items: Vec<OrderItemResponse>,
}

impl From<OrderView> for OrderResponse {
    fn from(view: OrderView) -> Self {
        OrderResponse {
            id: view.id,
            customer_id: view.customer_id,
            customer_name: view.customer_name,
            employee_id: view.employee_id,
            employee_name: view.employee_name,
            status: view.status.to_string(),
            created_at: view.created_at.to_rfc3339(),
            fulfilled_at: view.fulfilled_at.map(|t| t.to_rfc3339()),
            total_amount: view.total_amount.to_string(),
            items: view
                .items
                .into_iter()
                .map(|item| OrderItemResponse {
                    subtotal: (bigdecimal::BigDecimal::from(item.quantity)
                        * &item.unit_price)
                        .to_string(),
                    product_id: item.product_id,
                    product_name: item.product_name,
                    quantity: item.quantity,
                    unit_price: item.unit_price.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderSummaryResponse {
    pub id: i32,
    pub customer_name: String,
    pub employee_name: String,
    pub status: String,
    pub created_at: String,
    pub total_amount: String,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(summary: OrderSummary) -> Self {
        OrderSummaryResponse {
            id: summary.id,
            customer_name: summary.customer_name,
            employee_name: summary.employee_name,
            status: summary.status.to_string(),
            created_at: summary.created_at.to_rfc3339(),
            total_amount: summary.total_amount.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListOrdersParams {
    /// Filter by status: "pending", "fulfilled", or "cancelled".
    pub status: Option<String>,
    /// Page number (1-based). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Number of items per page. Defaults to 20, maximum 100.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListOrdersResponse {
    pub items: Vec<OrderSummaryResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Builds a cart against the current catalog snapshot (prices are captured
/// server-side) and commits it as one transaction: order row, items, clamped
/// stock decrements, and the customer's last-order stamp succeed or fail
/// together.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = CreateOrderResponse),
        (status = 400, description = "Invalid quantity or empty cart"),
        (status = 403, description = "Employee lacks the required level"),
        (status = 404, description = "Unknown customer, employee, or product"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<Service>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let placed = web::block(move || {
        let lines: Vec<LineRequest> = body
            .lines
            .iter()
            .map(|l| LineRequest {
                product_id: l.product_id,
                quantity: l.quantity,
            })
            .collect();
        service.place_order(body.customer_id, body.employee_id, &lines)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(CreateOrderResponse {
        id: placed.order_id,
        total_amount: placed.total_amount.to_string(),
        warnings: placed.warnings,
    }))
}

/// GET /orders/{id}
///
/// Returns the order with its line items, customer, and employee names.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<Service>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let view = web::block(move || service.get_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match view {
        Some(view) => Ok(HttpResponse::Ok().json(OrderResponse::from(view))),
        None => Err(AppError::NotFound(format!("order {order_id} not found"))),
    }
}

/// GET /orders
///
/// Paginated listing, newest first, optionally filtered by status.
#[utoipa::path(
    get,
    path = "/orders",
    params(
        ("status" = Option<String>, Query, description = "Filter: pending, fulfilled, or cancelled"),
        ("page" = Option<i64>, Query, description = "Page number (1-based, default 1)"),
        ("limit" = Option<i64>, Query, description = "Items per page (default 20, max 100)"),
    ),
    responses(
        (status = 200, description = "Paginated list of orders", body = ListOrdersResponse),
        (status = 400, description = "Unknown status filter"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    service: web::Data<Service>,
    query: web::Query<ListOrdersParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let page = params.page.max(1);
    let limit = params.limit.clamp(1, 100);

    let status = match params.status.as_deref() {
        Some(s) => Some(
            s.parse::<OrderStatus>()
                .map_err(|_| AppError::BadRequest(format!("unknown status filter '{s}'")))?,
        ),
        None => None,
    };

    let result = web::block(move || service.list_orders(status, page, limit))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ListOrdersResponse {
        items: result.items.into_iter().map(Into::into).collect(),
        total: result.total,
        page,
        limit,
    }))
}

/// POST /orders/{id}/status
///
/// Applies one status-machine action. Fulfilled orders are terminal and
/// reject every action; illegal pairings leave the order unmodified.
#[utoipa::path(
    post,
    path = "/orders/{id}/status",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    request_body = TransitionRequest,
    responses(
        (status = 200, description = "Transition applied", body = TransitionResponse),
        (status = 400, description = "Unknown action"),
        (status = 403, description = "Employee lacks the required level"),
        (status = 404, description = "Order or employee not found"),
        (status = 409, description = "Illegal transition or terminal order"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn update_order_status(
    service: web::Data<Service>,
    path: web::Path<i32>,
    body: web::Json<TransitionRequest>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let body = body.into_inner();
    let action: StatusAction = body.action.parse()?;

    let result = web::block(move || service.update_status(body.employee_id, order_id, action))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(TransitionResponse {
        id: result.order_id,
        status: result.status.to_string(),
        fulfilled_at: result.fulfilled_at.map(|t| t.to_rfc3339()),
    }))
}
