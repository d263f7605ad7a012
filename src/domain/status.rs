//! Order status machine.
//!
//! `pending` is the initial state, `fulfilled` is terminal, `cancelled` can
//! be reopened. The transition table in [`OrderStatus::apply`] is the only
//! authority on which moves are legal; nothing else mutates an order's
//! status.

use std::fmt;
use std::str::FromStr;

use super::errors::OrderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Fulfilled,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Fulfilled => "fulfilled",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Fulfilled)
    }

    /// Resolves `action` against the transition table.
    ///
    /// Fulfilled orders reject every action with `TerminalState`; any other
    /// pairing outside the table is an `IllegalTransition`. Both leave the
    /// order untouched.
    pub fn apply(self, action: StatusAction) -> Result<Transition, OrderError> {
        if self.is_terminal() {
            return Err(OrderError::TerminalState);
        }
        match (self, action) {
            (OrderStatus::Pending, StatusAction::Fulfill) => Ok(Transition {
                next: OrderStatus::Fulfilled,
                stamp_fulfilled_at: true,
            }),
            (OrderStatus::Pending, StatusAction::Cancel) => Ok(Transition {
                next: OrderStatus::Cancelled,
                stamp_fulfilled_at: false,
            }),
            (OrderStatus::Cancelled, StatusAction::Reopen) => Ok(Transition {
                next: OrderStatus::Pending,
                stamp_fulfilled_at: false,
            }),
            (from, action) => Err(OrderError::IllegalTransition { from, action }),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "fulfilled" => Ok(OrderStatus::Fulfilled),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(OrderError::UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Fulfill,
    Cancel,
    Reopen,
}

impl StatusAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusAction::Fulfill => "fulfill",
            StatusAction::Cancel => "cancel",
            StatusAction::Reopen => "reopen",
        }
    }
}

impl fmt::Display for StatusAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusAction {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fulfill" => Ok(StatusAction::Fulfill),
            "cancel" => Ok(StatusAction::Cancel),
            "reopen" => Ok(StatusAction::Reopen),
            other => Err(OrderError::UnknownAction(other.to_string())),
        }
    }
}

/// Outcome of a legal transition: the new status, and whether
/// `fulfilled_at` is stamped with the transition time (cleared otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: OrderStatus,
    pub stamp_fulfilled_at: bool,
}
