use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{ListResult, Order, OrderLineInput, OrderLineRequest};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::product::ProductQuantityUpdate;

pub struct OrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> OrderService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Create an order for `customer_id` from the requested product
    /// quantities.
    ///
    /// The customer and every product must exist, and no requested quantity
    /// may exceed the product's current stock; the first violated
    /// precondition aborts the call before anything is written. On success
    /// the order is persisted with unit prices captured from the products'
    /// current prices, and each product's stock is lowered by the ordered
    /// quantity. The stock update is a separate call issued after the order
    /// is persisted; if it fails, the order remains.
    pub fn create_order(
        &self,
        customer_id: Uuid,
        requested: Vec<OrderLineRequest>,
    ) -> Result<Order, DomainError> {
        let customer = self
            .customers
            .find_by_id(customer_id)?
            .ok_or(DomainError::CustomerNotFound)?;

        let ids: Vec<Uuid> = requested.iter().map(|r| r.product_id).collect();
        let found = self.products.find_all_by_ids(&ids)?;

        // The batch lookup yields one product per matching id, so a shorter
        // result means some requested id did not resolve. Duplicate ids in
        // the request trip this check too.
        if found.len() != requested.len() {
            return Err(DomainError::ProductNotFound);
        }

        for product in &found {
            let wanted = requested
                .iter()
                .find(|r| r.product_id == product.id)
                .map(|r| r.quantity)
                .unwrap_or(0);

            if wanted > product.quantity {
                return Err(DomainError::InsufficientStock {
                    product: product.name.clone(),
                });
            }
        }

        let lines: Vec<OrderLineInput> = requested
            .iter()
            .map(|r| OrderLineInput {
                product_id: r.product_id,
                quantity: r.quantity,
                unit_price: found
                    .iter()
                    .find(|p| p.id == r.product_id)
                    .map(|p| p.price.clone())
                    .unwrap_or_else(|| BigDecimal::from(0)),
            })
            .collect();

        let order = self.orders.create(customer.id, lines)?;

        let updates: Vec<ProductQuantityUpdate> = found
            .iter()
            .map(|product| {
                let consumed = order
                    .lines
                    .iter()
                    .find(|l| l.product_id == product.id)
                    .map(|l| l.quantity)
                    .unwrap_or(0);
                ProductQuantityUpdate {
                    id: product.id,
                    quantity: product.quantity - consumed,
                }
            })
            .collect();

        self.products.update_quantities(&updates)?;

        Ok(order)
    }

    pub fn get_order(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        self.orders.find_by_id(id)
    }

    pub fn list_orders(&self, page: i64, limit: i64) -> Result<ListResult, DomainError> {
        self.orders.list(page, limit)
    }
}
