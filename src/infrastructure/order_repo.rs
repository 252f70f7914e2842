use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{ListResult, Order, OrderLine, OrderLineInput};
use crate::domain::ports::OrderRepository;
use crate::schema::{order_lines, orders};

use super::models::{NewOrderLineRow, NewOrderRow, OrderLineRow, OrderRow};
use super::DbPool;

#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(&self, customer_id: Uuid, lines: Vec<OrderLineInput>) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let order: OrderRow = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    id: Uuid::new_v4(),
                    customer_id,
                })
                .returning(OrderRow::as_returning())
                .get_result(conn)?;

            let new_lines: Vec<NewOrderLineRow> = lines
                .iter()
                .map(|l| NewOrderLineRow {
                    id: Uuid::new_v4(),
                    order_id: order.id,
                    product_id: l.product_id,
                    quantity: l.quantity,
                    unit_price: l.unit_price.clone(),
                })
                .collect();
            diesel::insert_into(order_lines::table)
                .values(&new_lines)
                .execute(conn)?;

            // Build the result from the inserted values so the lines keep
            // the request order.
            Ok(Order {
                id: order.id,
                customer_id: order.customer_id,
                created_at: order.created_at,
                lines: new_lines
                    .into_iter()
                    .map(|l| OrderLine {
                        id: l.id,
                        product_id: l.product_id,
                        quantity: l.quantity,
                        unit_price: l.unit_price,
                    })
                    .collect(),
            })
        })
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let order = orders::table
            .filter(orders::id.eq(id))
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let lines = order_lines::table
            .filter(order_lines::order_id.eq(order.id))
            .select(OrderLineRow::as_select())
            .load(&mut conn)?;

        Ok(Some(Order {
            id: order.id,
            customer_id: order.customer_id,
            created_at: order.created_at,
            lines: lines.into_iter().map(OrderLine::from).collect(),
        }))
    }

    fn list(&self, page: i64, limit: i64) -> Result<ListResult, DomainError> {
        let mut conn = self.pool.get()?;

        let offset = (page - 1) * limit;
        conn.transaction::<_, DomainError, _>(|conn| {
            let total: i64 = orders::table.count().get_result(conn)?;

            let rows = orders::table
                .select(OrderRow::as_select())
                .order(orders::created_at.desc())
                .limit(limit)
                .offset(offset)
                .load(conn)?;

            Ok(ListResult {
                items: rows
                    .into_iter()
                    .map(|o| Order {
                        id: o.id,
                        customer_id: o.customer_id,
                        created_at: o.created_at,
                        lines: vec![],
                    })
                    .collect(),
                total,
            })
        })
    }
}
