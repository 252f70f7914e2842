use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;
use crate::schema::customers;

use super::models::{CustomerRow, NewCustomerRow};
use super::DbPool;

#[derive(Clone)]
pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customers::table
            .filter(customers::id.eq(id))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Customer::from))
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customers::table
            .filter(customers::email.eq(email))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Customer::from))
    }

    fn create(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let mut conn = self.pool.get()?;

        let row: CustomerRow = diesel::insert_into(customers::table)
            .values(&NewCustomerRow {
                id: Uuid::new_v4(),
                name: customer.name,
                email: customer.email,
            })
            .returning(CustomerRow::as_returning())
            .get_result(&mut conn)?;

        Ok(Customer::from(row))
    }
}
