use uuid::Uuid;

use super::customer::{Customer, NewCustomer};
use super::errors::DomainError;
use super::order::{ListResult, Order, OrderLineInput};
use super::product::{NewProduct, Product, ProductQuantityUpdate};

pub trait CustomerRepository: Send + Sync + 'static {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError>;
    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError>;
    fn create(&self, customer: NewCustomer) -> Result<Customer, DomainError>;
}

pub trait ProductRepository: Send + Sync + 'static {
    /// Batched lookup. Returns one product per matching id; ids without a
    /// match are simply absent from the result.
    fn find_all_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError>;
    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError>;
    fn create(&self, product: NewProduct) -> Result<Product, DomainError>;
    fn list(&self) -> Result<Vec<Product>, DomainError>;
    fn update_quantities(&self, updates: &[ProductQuantityUpdate]) -> Result<(), DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    /// Persists the order and its lines atomically, assigning identifiers.
    fn create(&self, customer_id: Uuid, lines: Vec<OrderLineInput>) -> Result<Order, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;
    fn list(&self, page: i64, limit: i64) -> Result<ListResult, DomainError>;
}
