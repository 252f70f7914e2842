use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One (product, quantity) entry of an incoming order request.
#[derive(Debug, Clone)]
pub struct OrderLineRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// A priced line, ready to be persisted. The unit price is captured from the
/// product at order time and never follows later price changes.
#[derive(Debug, Clone)]
pub struct OrderLineInput {
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct OrderLine {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
}

#[derive(Debug, Clone)]
pub struct ListResult {
    pub items: Vec<Order>,
    pub total: i64,
}
