use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::CustomerNotFound | DomainError::ProductNotFound => {
                AppError::NotFound(e.to_string())
            }
            DomainError::InsufficientStock { .. }
            | DomainError::EmailAlreadyUsed
            | DomainError::ProductNameTaken => AppError::BadRequest(e.to_string()),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(_) => HttpResponse::NotFound().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::BadRequest(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::Internal(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn not_found_returns_404() {
        let resp = AppError::NotFound("Customer does not exist".to_string()).error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_returns_400() {
        let resp = AppError::BadRequest("Mouse has insufficient stock".to_string()).error_response();
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_error_display() {
        assert_eq!(
            AppError::Internal("msg".to_string()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn customer_not_found_maps_to_404_with_message() {
        let app_err: AppError = DomainError::CustomerNotFound.into();
        match app_err {
            AppError::NotFound(msg) => assert_eq!(msg, "Customer does not exist"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn product_not_found_maps_to_not_found() {
        let app_err: AppError = DomainError::ProductNotFound.into();
        assert!(matches!(app_err, AppError::NotFound(_)));
    }

    #[test]
    fn insufficient_stock_maps_to_bad_request_naming_the_product() {
        let app_err: AppError = DomainError::InsufficientStock {
            product: "Mouse".to_string(),
        }
        .into();
        match app_err {
            AppError::BadRequest(msg) => assert_eq!(msg, "Mouse has insufficient stock"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn registration_conflicts_map_to_bad_request() {
        assert!(matches!(
            AppError::from(DomainError::EmailAlreadyUsed),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from(DomainError::ProductNameTaken),
            AppError::BadRequest(_)
        ));
    }

    #[test]
    fn domain_internal_maps_to_app_internal() {
        let app_err: AppError = DomainError::Internal("oops".to_string()).into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }
}
