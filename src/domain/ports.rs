use super::cart::Cart;
use super::errors::OrderError;
use super::order::{ListResult, OrderView, ProductSnapshot, TransitionResult};
use super::session::Session;
use super::status::{OrderStatus, StatusAction};

pub trait OrderStore: Send + Sync + 'static {
    /// One-shot catalog read taken at the start of an order-creation
    /// session.
    fn catalog(&self) -> Result<Vec<ProductSnapshot>, OrderError>;

    /// Resolves an active employee into a session for the permission gate.
    fn session_for(&self, employee_id: i32) -> Result<Session, OrderError>;

    /// Persists the cart as a new pending order with its items, applies the
    /// clamped stock decrements, and stamps the customer's last-order
    /// marker, all as one atomic unit.
    fn commit(&self, customer_id: i32, employee_id: i32, cart: &Cart) -> Result<i32, OrderError>;

    /// Applies one status-machine action to an existing order atomically.
    fn transition(&self, order_id: i32, action: StatusAction)
        -> Result<TransitionResult, OrderError>;

    fn find_by_id(&self, order_id: i32) -> Result<Option<OrderView>, OrderError>;

    fn list(
        &self,
        status: Option<OrderStatus>,
        page: i64,
        limit: i64,
    ) -> Result<ListResult, OrderError>;
}
