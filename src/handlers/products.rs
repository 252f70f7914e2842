use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::product::{NewProduct, Product};
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub price: String,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    /// Decimal price as a string, e.g. "9.99"
    pub price: String,
    pub quantity: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id,
            name: product.name,
            price: product.price.to_string(),
            quantity: product.quantity,
        }
    }
}

/// POST /products
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 400, description = "Invalid price or product name already taken"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn create_product(
    state: web::Data<AppState>,
    body: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let price = BigDecimal::from_str(&body.price)
        .map_err(|e| AppError::BadRequest(format!("Invalid price '{}': {}", body.price, e)))?;

    let product = web::block(move || {
        state.products.create_product(NewProduct {
            name: body.name,
            price,
            quantity: body.quantity,
        })
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(ProductResponse::from(product)))
}

/// GET /products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [ProductResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "products"
)]
pub async fn list_products(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let products = web::block(move || state.products.list_products())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let response: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}
