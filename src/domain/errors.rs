use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Customer does not exist")]
    CustomerNotFound,
    #[error("Some requested product does not exist")]
    ProductNotFound,
    #[error("{product} has insufficient stock")]
    InsufficientStock { product: String },
    #[error("This email address is already used")]
    EmailAlreadyUsed,
    #[error("A product with this name already exists")]
    ProductNameTaken,
    #[error("Internal error: {0}")]
    Internal(String),
}
