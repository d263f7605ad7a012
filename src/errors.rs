use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::OrderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::InvalidQuantity(_)
            | OrderError::EmptyCart
            | OrderError::DuplicateProduct(_)
            | OrderError::UnknownAction(_) => AppError::BadRequest(e.to_string()),
            OrderError::NotFound { .. } => AppError::NotFound(e.to_string()),
            OrderError::PermissionDenied { .. } => AppError::Forbidden(e.to_string()),
            OrderError::IllegalTransition { .. } | OrderError::TerminalState => {
                AppError::Conflict(e.to_string())
            }
            OrderError::UnknownStatus(_)
            | OrderError::CommitFailed(_)
            | OrderError::TransitionFailed(_)
            | OrderError::Storage(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = serde_json::json!({ "error": self.to_string() });
        match self {
            AppError::BadRequest(_) => HttpResponse::BadRequest().json(body),
            AppError::Forbidden(_) => HttpResponse::Forbidden().json(body),
            AppError::NotFound(_) => HttpResponse::NotFound().json(body),
            AppError::Conflict(_) => HttpResponse::Conflict().json(body),
            AppError::Internal(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    use super::*;
    use crate::domain::status::{OrderStatus, StatusAction};

    #[test]
    fn validation_errors_map_to_400() {
        for e in [
            OrderError::InvalidQuantity(0),
            OrderError::EmptyCart,
            OrderError::DuplicateProduct(3),
            OrderError::UnknownAction("void".to_string()),
        ] {
            let app: AppError = e.into();
            assert_eq!(app.error_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn not_found_maps_to_404() {
        let app: AppError = OrderError::NotFound { entity: "order", id: 9 }.into();
        assert_eq!(app.error_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(app.to_string(), "order 9 not found");
    }

    #[test]
    fn permission_denied_maps_to_403() {
        let app: AppError = OrderError::PermissionDenied { required: 2, actual: 1 }.into();
        assert_eq!(app.error_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn lifecycle_conflicts_map_to_409() {
        let illegal: AppError = OrderError::IllegalTransition {
            from: OrderStatus::Pending,
            action: StatusAction::Reopen,
        }
        .into();
        assert_eq!(illegal.error_response().status(), StatusCode::CONFLICT);

        let terminal: AppError = OrderError::TerminalState.into();
        assert_eq!(terminal.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn storage_failures_map_to_500_and_hide_detail() {
        let app: AppError = OrderError::CommitFailed("deadlock".to_string()).into();
        let resp = app.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
