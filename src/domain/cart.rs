//! In-memory cart for one order-creation attempt.

use bigdecimal::BigDecimal;

use super::errors::OrderError;
use super::order::ProductSnapshot;

/// One selected product. The unit price is captured when the line is added;
/// it is the price quoted to the customer and is not refreshed if the
/// catalog price changes mid-session.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

/// Accumulator of line items, owned exclusively by the caller performing
/// checkout. Entries keep insertion order and hold at most one line per
/// product.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, product_id: i32) -> bool {
        self.entries.iter().any(|e| e.product_id == product_id)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Adds a new line, capturing the unit price from the snapshot.
    ///
    /// A product already in the cart is a caller error; repeat selection
    /// must go through [`Cart::set_quantity`] instead.
    pub fn add(&mut self, product: &ProductSnapshot, quantity: i32) -> Result<(), OrderError> {
        if quantity < 1 {
            return Err(OrderError::InvalidQuantity(quantity));
        }
        if self.contains(product.id) {
            return Err(OrderError::DuplicateProduct(product.id));
        }
        self.entries.push(CartEntry {
            product_id: product.id,
            quantity,
            unit_price: product.unit_price.clone(),
        });
        Ok(())
    }

    /// Overwrites the quantity of an existing line, keeping its captured
    /// price. Quantity 0 removes the line; an absent product id is a no-op.
    pub fn set_quantity(&mut self, product_id: i32, quantity: i32) -> Result<(), OrderError> {
        if quantity < 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }
        if quantity == 0 {
            self.remove(product_id);
            return Ok(());
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.product_id == product_id) {
            entry.quantity = quantity;
        }
        Ok(())
    }

    /// No-op if the product is not in the cart.
    pub fn remove(&mut self, product_id: i32) {
        self.entries.retain(|e| e.product_id != product_id);
    }

    /// Σ quantity × unit price over all entries.
    pub fn total(&self) -> BigDecimal {
        self.entries.iter().fold(BigDecimal::from(0), |acc, e| {
            acc + BigDecimal::from(e.quantity) * &e.unit_price
        })
    }
}
