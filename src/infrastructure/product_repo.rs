use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{NewProduct, Product, ProductQuantityUpdate};
use crate::schema::products;

use super::models::{NewProductRow, ProductRow};
use super::DbPool;

#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for DieselProductRepository {
    fn find_all_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = products::table
            .filter(products::id.eq_any(ids))
            .select(ProductRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = products::table
            .filter(products::name.eq(name))
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Product::from))
    }

    fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let mut conn = self.pool.get()?;

        let row: ProductRow = diesel::insert_into(products::table)
            .values(&NewProductRow {
                id: Uuid::new_v4(),
                name: product.name,
                price: product.price,
                quantity: product.quantity,
            })
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)?;

        Ok(Product::from(row))
    }

    fn list(&self) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = products::table
            .select(ProductRow::as_select())
            .order(products::created_at.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn update_quantities(&self, updates: &[ProductQuantityUpdate]) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        // One statement per product, applied in a single transaction so a
        // batch is never half-written.
        conn.transaction::<_, DomainError, _>(|conn| {
            for update in updates {
                diesel::update(products::table.filter(products::id.eq(update.id)))
                    .set((
                        products::quantity.eq(update.quantity),
                        products::updated_at.eq(diesel::dsl::now),
                    ))
                    .execute(conn)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    use super::DieselProductRepository;
    use crate::domain::ports::ProductRepository;
    use crate::domain::product::{NewProduct, ProductQuantityUpdate};
    use crate::infrastructure::test_support::setup_db;

    fn new_product(name: &str, price: &str, quantity: i32) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: BigDecimal::from_str(price).expect("valid decimal"),
            quantity,
        }
    }

    #[tokio::test]
    async fn batch_lookup_returns_only_matches() {
        let (_container, pool) = setup_db().await;
        let repo = DieselProductRepository::new(pool);

        let keyboard = repo
            .create(new_product("Keyboard", "49.90", 10))
            .expect("create failed");
        let mouse = repo
            .create(new_product("Mouse", "19.90", 5))
            .expect("create failed");

        let found = repo
            .find_all_by_ids(&[keyboard.id, mouse.id, Uuid::new_v4()])
            .expect("lookup failed");

        assert_eq!(found.len(), 2);
        assert!(found.iter().any(|p| p.id == keyboard.id));
        assert!(found.iter().any(|p| p.id == mouse.id));
    }

    #[tokio::test]
    async fn update_quantities_applies_whole_batch() {
        let (_container, pool) = setup_db().await;
        let repo = DieselProductRepository::new(pool);

        let keyboard = repo
            .create(new_product("Keyboard", "49.90", 10))
            .expect("create failed");
        let mouse = repo
            .create(new_product("Mouse", "19.90", 5))
            .expect("create failed");

        repo.update_quantities(&[
            ProductQuantityUpdate {
                id: keyboard.id,
                quantity: 7,
            },
            ProductQuantityUpdate {
                id: mouse.id,
                quantity: 0,
            },
        ])
        .expect("update failed");

        let found = repo
            .find_all_by_ids(&[keyboard.id, mouse.id])
            .expect("lookup failed");
        let stock_of = |id: Uuid| found.iter().find(|p| p.id == id).unwrap().quantity;

        assert_eq!(stock_of(keyboard.id), 7);
        assert_eq!(stock_of(mouse.id), 0);
    }

    #[tokio::test]
    async fn create_persists_price_and_stock() {
        let (_container, pool) = setup_db().await;
        let repo = DieselProductRepository::new(pool);

        let created = repo
            .create(new_product("Keyboard", "49.90", 10))
            .expect("create failed");

        let found = repo
            .find_by_name("Keyboard")
            .expect("lookup failed")
            .expect("product should exist");

        assert_eq!(found.id, created.id);
        assert_eq!(found.price, BigDecimal::from_str("49.90").unwrap());
        assert_eq!(found.quantity, 10);
    }

    #[tokio::test]
    async fn list_returns_all_products() {
        let (_container, pool) = setup_db().await;
        let repo = DieselProductRepository::new(pool);

        repo.create(new_product("Keyboard", "49.90", 10))
            .expect("create failed");
        repo.create(new_product("Mouse", "19.90", 5))
            .expect("create failed");

        let all = repo.list().expect("list failed");
        assert_eq!(all.len(), 2);
    }
}
