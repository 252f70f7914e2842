use bigdecimal::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

/// New absolute stock level for one product, applied as part of a batch.
#[derive(Debug, Clone)]
pub struct ProductQuantityUpdate {
    pub id: Uuid,
    pub quantity: i32,
}
