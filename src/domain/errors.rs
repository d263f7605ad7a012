use thiserror::Error;

use super::status::{OrderStatus, StatusAction};

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(i32),

    #[error("cart has no line items")]
    EmptyCart,

    #[error("product {0} is already in the cart; update its quantity instead")]
    DuplicateProduct(i32),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("level {required} permission required, session has level {actual}")]
    PermissionDenied { required: i32, actual: i32 },

    #[error("cannot {action} a {from} order")]
    IllegalTransition {
        from: OrderStatus,
        action: StatusAction,
    },

    #[error("order is fulfilled and can no longer change status")]
    TerminalState,

    #[error("unknown status action '{0}'")]
    UnknownAction(String),

    #[error("unknown order status '{0}'")]
    UnknownStatus(String),

    #[error("order commit failed: {0}")]
    CommitFailed(String),

    #[error("status transition failed: {0}")]
    TransitionFailed(String),

    /// Raw storage failure before the operation boundary has attributed it
    /// to a commit or a transition.
    #[error("storage error: {0}")]
    Storage(String),
}
