use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::customer::{Customer, NewCustomer};
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        CustomerResponse {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            created_at: customer.created_at.to_rfc3339(),
        }
    }
}

/// POST /customers
#[utoipa::path(
    post,
    path = "/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created successfully", body = CustomerResponse),
        (status = 400, description = "Email address already used"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn create_customer(
    state: web::Data<AppState>,
    body: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let customer = web::block(move || {
        state.customers.create_customer(NewCustomer {
            name: body.name,
            email: body.email,
        })
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(CustomerResponse::from(customer)))
}

/// GET /customers/{id}
#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(
        ("id" = Uuid, Path, description = "Customer UUID"),
    ),
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn get_customer(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner();

    let result = web::block(move || state.customers.get_customer(customer_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match result {
        Some(customer) => Ok(HttpResponse::Ok().json(CustomerResponse::from(customer))),
        None => Err(AppError::NotFound("Customer does not exist".to_string())),
    }
}
