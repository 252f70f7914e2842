use uuid::Uuid;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;

pub struct CustomerService<R> {
    customers: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(customers: R) -> Self {
        Self { customers }
    }

    /// Register a new customer. Email addresses are unique across customers.
    pub fn create_customer(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        if self.customers.find_by_email(&customer.email)?.is_some() {
            return Err(DomainError::EmailAlreadyUsed);
        }
        self.customers.create(customer)
    }

    pub fn get_customer(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        self.customers.find_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use uuid::Uuid;

    use super::CustomerService;
    use crate::domain::customer::{Customer, NewCustomer};
    use crate::domain::errors::DomainError;
    use crate::domain::ports::CustomerRepository;

    #[derive(Clone, Default)]
    struct InMemoryCustomers {
        rows: Arc<Mutex<HashMap<Uuid, Customer>>>,
    }

    impl CustomerRepository for InMemoryCustomers {
        fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .find(|c| c.email == email)
                .cloned())
        }

        fn create(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
            let created = Customer {
                id: Uuid::new_v4(),
                name: customer.name,
                email: customer.email,
                created_at: Utc::now(),
            };
            self.rows
                .lock()
                .unwrap()
                .insert(created.id, created.clone());
            Ok(created)
        }
    }

    fn new_customer(name: &str, email: &str) -> NewCustomer {
        NewCustomer {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn create_and_get_roundtrip() {
        let svc = CustomerService::new(InMemoryCustomers::default());

        let created = svc
            .create_customer(new_customer("alice", "alice@example.com"))
            .expect("create failed");
        let fetched = svc
            .get_customer(created.id)
            .expect("lookup failed")
            .expect("customer should exist");

        assert_eq!(fetched.name, "alice");
        assert_eq!(fetched.email, "alice@example.com");
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let svc = CustomerService::new(InMemoryCustomers::default());

        svc.create_customer(new_customer("alice", "alice@example.com"))
            .expect("first create failed");
        let err = svc
            .create_customer(new_customer("other alice", "alice@example.com"))
            .unwrap_err();

        assert!(matches!(err, DomainError::EmailAlreadyUsed));
    }

    #[test]
    fn get_unknown_customer_returns_none() {
        let svc = CustomerService::new(InMemoryCustomers::default());
        let result = svc.get_customer(Uuid::new_v4()).expect("lookup failed");
        assert!(result.is_none());
    }
}
