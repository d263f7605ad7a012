use bigdecimal::BigDecimal;
use log::warn;

use crate::domain::cart::Cart;
use crate::domain::errors::OrderError;
use crate::domain::order::{ListResult, OrderView, ProductSnapshot, TransitionResult};
use crate::domain::ports::OrderStore;
use crate::domain::session::MUTATE_ORDERS_LEVEL;
use crate::domain::status::{OrderStatus, StatusAction};

/// One requested line of a new order, before prices are captured.
#[derive(Debug, Clone, Copy)]
pub struct LineRequest {
    pub product_id: i32,
    pub quantity: i32,
}

/// A committed order id plus any oversell advisories raised while the cart
/// was assembled.
#[derive(Debug)]
pub struct PlacedOrder {
    pub order_id: i32,
    pub total_amount: BigDecimal,
    pub warnings: Vec<String>,
}

pub struct OrderService<S> {
    store: S,
}

impl<S: OrderStore> OrderService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Builds a cart against a one-shot catalog snapshot and commits it.
    ///
    /// The permission gate runs here, before any mutation; the store's
    /// `commit` does not re-check it. A line naming a product already in
    /// the cart is routed to `set_quantity`, so the last quantity wins.
    /// Overselling never blocks the sale; each shortfall comes back as a
    /// warning for the caller to surface.
    pub fn place_order(
        &self,
        customer_id: i32,
        employee_id: i32,
        lines: &[LineRequest],
    ) -> Result<PlacedOrder, OrderError> {
        let session = self.store.session_for(employee_id)?;
        session.require_level(MUTATE_ORDERS_LEVEL)?;

        let catalog = self.store.catalog()?;
        let mut cart = Cart::new();
        let mut warnings = Vec::new();

        for line in lines {
            let product = catalog
                .iter()
                .find(|p| p.id == line.product_id)
                .ok_or(OrderError::NotFound {
                    entity: "product",
                    id: line.product_id,
                })?;

            if cart.contains(line.product_id) {
                cart.set_quantity(line.product_id, line.quantity)?;
            } else {
                cart.add(product, line.quantity)?;
            }

            if let Some(shortfall) = product.oversell(line.quantity) {
                let msg = format!(
                    "requested quantity {} of '{}' exceeds stock ({} available, short {})",
                    line.quantity, product.name, product.stock_qty, shortfall
                );
                warn!("oversell on product {}: {}", product.id, msg);
                warnings.push(msg);
            }
        }

        let total_amount = cart.total();
        let order_id = self.store.commit(customer_id, employee_id, &cart)?;
        Ok(PlacedOrder {
            order_id,
            total_amount,
            warnings,
        })
    }

    /// Gate-checks the acting employee, then applies one transition.
    pub fn update_status(
        &self,
        employee_id: i32,
        order_id: i32,
        action: StatusAction,
    ) -> Result<TransitionResult, OrderError> {
        let session = self.store.session_for(employee_id)?;
        session.require_level(MUTATE_ORDERS_LEVEL)?;
        self.store.transition(order_id, action)
    }

    pub fn catalog(&self) -> Result<Vec<ProductSnapshot>, OrderError> {
        self.store.catalog()
    }

    pub fn get_order(&self, order_id: i32) -> Result<Option<OrderView>, OrderError> {
        self.store.find_by_id(order_id)
    }

    pub fn list_orders(
        &self,
        status: Option<OrderStatus>,
        page: i64,
        limit: i64,
    ) -> Result<ListResult, OrderError> {
        self.store.list(status, page, limit)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;
    use crate::domain::cart::CartEntry;
    use crate::domain::session::Session;

    struct FakeStore {
        products: Vec<ProductSnapshot>,
        sessions: Vec<Session>,
        committed: Mutex<Vec<(i32, i32, Vec<CartEntry>)>>,
        transitions: Mutex<Vec<(i32, StatusAction)>>,
    }

    impl FakeStore {
        fn new(products: Vec<ProductSnapshot>, sessions: Vec<Session>) -> Self {
            Self {
                products,
                sessions,
                committed: Mutex::new(Vec::new()),
                transitions: Mutex::new(Vec::new()),
            }
        }
    }

    impl OrderStore for FakeStore {
        fn catalog(&self) -> Result<Vec<ProductSnapshot>, OrderError> {
            Ok(self.products.clone())
        }

        fn session_for(&self, employee_id: i32) -> Result<Session, OrderError> {
            self.sessions
                .iter()
                .copied()
                .find(|s| s.employee_id == employee_id)
                .ok_or(OrderError::NotFound {
                    entity: "employee",
                    id: employee_id,
                })
        }

        fn commit(
            &self,
            customer_id: i32,
            employee_id: i32,
            cart: &Cart,
        ) -> Result<i32, OrderError> {
            if cart.is_empty() {
                return Err(OrderError::EmptyCart);
            }
            let mut committed = self.committed.lock().unwrap();
            committed.push((customer_id, employee_id, cart.entries().to_vec()));
            Ok(committed.len() as i32)
        }

        fn transition(
            &self,
            order_id: i32,
            action: StatusAction,
        ) -> Result<TransitionResult, OrderError> {
            self.transitions.lock().unwrap().push((order_id, action));
            Ok(TransitionResult {
                order_id,
                status: OrderStatus::Fulfilled,
                fulfilled_at: Some(Utc::now()),
            })
        }

        fn find_by_id(&self, _order_id: i32) -> Result<Option<OrderView>, OrderError> {
            Ok(None)
        }

        fn list(
            &self,
            _status: Option<OrderStatus>,
            _page: i64,
            _limit: i64,
        ) -> Result<ListResult, OrderError> {
            Ok(ListResult {
                items: vec![],
                total: 0,
            })
        }
    }

    fn product(id: i32, price: &str, stock_qty: i32, reorder_lvl: i32) -> ProductSnapshot {
        ProductSnapshot {
            id,
            name: format!("product-{id}"),
            category: "misc".to_string(),
            unit_price: BigDecimal::from_str(price).unwrap(),
            stock_qty,
            reorder_lvl,
        }
    }

    fn service_with(
        products: Vec<ProductSnapshot>,
        sessions: Vec<Session>,
    ) -> OrderService<FakeStore> {
        OrderService::new(FakeStore::new(products, sessions))
    }

    const REP: Session = Session { employee_id: 10, level: 2 };
    const VIEWER: Session = Session { employee_id: 11, level: 1 };

    #[test]
    fn place_order_denies_below_level_two() {
        let svc = service_with(vec![product(1, "1.00", 10, 1)], vec![VIEWER]);
        let err = svc
            .place_order(1, VIEWER.employee_id, &[LineRequest { product_id: 1, quantity: 1 }])
            .unwrap_err();
        assert!(matches!(err, OrderError::PermissionDenied { .. }));
        assert!(svc.store.committed.lock().unwrap().is_empty());
    }

    #[test]
    fn place_order_captures_snapshot_prices() {
        let svc = service_with(
            vec![product(1, "10.00", 10, 1), product(2, "5.00", 10, 1)],
            vec![REP],
        );
        let placed = svc
            .place_order(
                1,
                REP.employee_id,
                &[
                    LineRequest { product_id: 1, quantity: 2 },
                    LineRequest { product_id: 2, quantity: 1 },
                ],
            )
            .unwrap();

        assert_eq!(placed.total_amount, BigDecimal::from_str("25.00").unwrap());
        assert!(placed.warnings.is_empty());
        let committed = svc.store.committed.lock().unwrap();
        assert_eq!(committed.len(), 1);
        assert_eq!(committed[0].2.len(), 2);
        assert_eq!(committed[0].2[0].unit_price, BigDecimal::from_str("10.00").unwrap());
    }

    #[test]
    fn repeated_product_lines_route_to_set_quantity() {
        let svc = service_with(vec![product(1, "2.00", 10, 1)], vec![REP]);
        let placed = svc
            .place_order(
                1,
                REP.employee_id,
                &[
                    LineRequest { product_id: 1, quantity: 2 },
                    LineRequest { product_id: 1, quantity: 5 },
                ],
            )
            .unwrap();

        let committed = svc.store.committed.lock().unwrap();
        assert_eq!(committed[0].2.len(), 1);
        assert_eq!(committed[0].2[0].quantity, 5);
        assert_eq!(placed.total_amount, BigDecimal::from_str("10.00").unwrap());
    }

    #[test]
    fn unknown_product_fails_without_commit() {
        let svc = service_with(vec![product(1, "1.00", 10, 1)], vec![REP]);
        let err = svc
            .place_order(1, REP.employee_id, &[LineRequest { product_id: 99, quantity: 1 }])
            .unwrap_err();
        assert!(matches!(err, OrderError::NotFound { entity: "product", id: 99 }));
        assert!(svc.store.committed.lock().unwrap().is_empty());
    }

    #[test]
    fn oversell_warns_but_still_commits() {
        let svc = service_with(vec![product(1, "1.00", 3, 5)], vec![REP]);
        let placed = svc
            .place_order(1, REP.employee_id, &[LineRequest { product_id: 1, quantity: 5 }])
            .unwrap();
        assert_eq!(placed.warnings.len(), 1);
        assert!(placed.warnings[0].contains("exceeds stock"));
        assert_eq!(svc.store.committed.lock().unwrap().len(), 1);
    }

    #[test]
    fn empty_lines_fail_with_empty_cart() {
        let svc = service_with(vec![], vec![REP]);
        let err = svc.place_order(1, REP.employee_id, &[]).unwrap_err();
        assert!(matches!(err, OrderError::EmptyCart));
    }

    #[test]
    fn update_status_denies_below_level_two() {
        let svc = service_with(vec![], vec![VIEWER]);
        let err = svc
            .update_status(VIEWER.employee_id, 1, StatusAction::Fulfill)
            .unwrap_err();
        assert!(matches!(err, OrderError::PermissionDenied { .. }));
        assert!(svc.store.transitions.lock().unwrap().is_empty());
    }

    #[test]
    fn update_status_delegates_after_gate() {
        let svc = service_with(vec![], vec![REP]);
        let result = svc
            .update_status(REP.employee_id, 7, StatusAction::Fulfill)
            .unwrap();
        assert_eq!(result.order_id, 7);
        assert_eq!(
            *svc.store.transitions.lock().unwrap(),
            vec![(7, StatusAction::Fulfill)]
        );
    }

    #[test]
    fn unknown_employee_is_not_found() {
        let svc = service_with(vec![], vec![]);
        let err = svc.place_order(1, 42, &[]).unwrap_err();
        assert!(matches!(err, OrderError::NotFound { entity: "employee", id: 42 }));
    }
}
