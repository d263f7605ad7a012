use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use super::status::OrderStatus;

/// Product row as read once at the start of an order-creation session.
/// Prices quoted against this snapshot are the prices charged, even if the
/// catalog changes before the cart is committed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSnapshot {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub unit_price: BigDecimal,
    pub stock_qty: i32,
    pub reorder_lvl: i32,
}

impl ProductSnapshot {
    /// Physical items carry a positive reorder level; a reorder level of
    /// zero marks a service item exempt from stock tracking.
    pub fn is_stock_tracked(&self) -> bool {
        self.reorder_lvl > 0
    }

    /// Shortfall when `quantity` exceeds available stock on a tracked
    /// product. Advisory only: commit clamps stock at zero, it never
    /// rejects the sale.
    pub fn oversell(&self, quantity: i32) -> Option<i32> {
        if self.is_stock_tracked() && quantity > self.stock_qty {
            Some(quantity - self.stock_qty)
        } else {
            None
        }
    }

    pub fn below_reorder(&self) -> bool {
        self.is_stock_tracked() && self.stock_qty < self.reorder_lvl
    }
}

#[derive(Debug, Clone)]
pub struct OrderItemView {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: i32,
    pub customer_id: i32,
    pub customer_name: String,
    pub employee_id: i32,
    pub employee_name: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub fulfilled_at: Option<DateTime<Utc>>,
    pub total_amount: BigDecimal,
    pub items: Vec<OrderItemView>,
}

/// Listing row without its items.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub id: i32,
    pub customer_name: String,
    pub employee_name: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub total_amount: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct ListResult {
    pub items: Vec<OrderSummary>,
    pub total: i64,
}

/// Durable outcome of a status transition.
#[derive(Debug, Clone, Copy)]
pub struct TransitionResult {
    pub order_id: i32,
    pub status: OrderStatus,
    pub fulfilled_at: Option<DateTime<Utc>>,
}
