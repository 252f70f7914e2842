use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{NewProduct, Product};

pub struct ProductService<R> {
    products: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(products: R) -> Self {
        Self { products }
    }

    /// Register a new product. Product names are unique.
    pub fn create_product(&self, product: NewProduct) -> Result<Product, DomainError> {
        if self.products.find_by_name(&product.name)?.is_some() {
            return Err(DomainError::ProductNameTaken);
        }
        self.products.create(product)
    }

    pub fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        self.products.list()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::str::FromStr;
    use std::sync::{Arc, Mutex};

    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    use super::ProductService;
    use crate::domain::errors::DomainError;
    use crate::domain::ports::ProductRepository;
    use crate::domain::product::{NewProduct, Product, ProductQuantityUpdate};

    #[derive(Clone, Default)]
    struct InMemoryProducts {
        rows: Arc<Mutex<HashMap<Uuid, Product>>>,
    }

    impl ProductRepository for InMemoryProducts {
        fn find_all_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .values()
                .filter(|p| ids.contains(&p.id))
                .cloned()
                .collect())
        }

        fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .find(|p| p.name == name)
                .cloned())
        }

        fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
            let created = Product {
                id: Uuid::new_v4(),
                name: product.name,
                price: product.price,
                quantity: product.quantity,
            };
            self.rows
                .lock()
                .unwrap()
                .insert(created.id, created.clone());
            Ok(created)
        }

        fn list(&self) -> Result<Vec<Product>, DomainError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        fn update_quantities(&self, updates: &[ProductQuantityUpdate]) -> Result<(), DomainError> {
            let mut rows = self.rows.lock().unwrap();
            for update in updates {
                if let Some(product) = rows.get_mut(&update.id) {
                    product.quantity = update.quantity;
                }
            }
            Ok(())
        }
    }

    fn new_product(name: &str, price: &str, quantity: i32) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: BigDecimal::from_str(price).expect("valid decimal"),
            quantity,
        }
    }

    #[test]
    fn create_and_list_products() {
        let svc = ProductService::new(InMemoryProducts::default());

        let created = svc
            .create_product(new_product("Keyboard", "49.90", 10))
            .expect("create failed");
        assert_eq!(created.name, "Keyboard");
        assert_eq!(created.quantity, 10);

        let all = svc.list_products().expect("list failed");
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let svc = ProductService::new(InMemoryProducts::default());

        svc.create_product(new_product("Keyboard", "49.90", 10))
            .expect("first create failed");
        let err = svc
            .create_product(new_product("Keyboard", "15.00", 5))
            .unwrap_err();

        assert!(matches!(err, DomainError::ProductNameTaken));
    }
}
