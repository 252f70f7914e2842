pub mod application;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::customer_service::CustomerService;
use application::order_service::OrderService;
use application::product_service::ProductService;
use infrastructure::customer_repo::DieselCustomerRepository;
use infrastructure::order_repo::DieselOrderRepository;
use infrastructure::product_repo::DieselProductRepository;

pub use infrastructure::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

/// Application services shared with the HTTP handlers. Each service owns its
/// repositories; the repositories share one connection pool.
pub struct AppState {
    pub customers: CustomerService<DieselCustomerRepository>,
    pub products: ProductService<DieselProductRepository>,
    pub orders:
        OrderService<DieselCustomerRepository, DieselProductRepository, DieselOrderRepository>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let customer_repo = DieselCustomerRepository::new(pool.clone());
        let product_repo = DieselProductRepository::new(pool.clone());
        let order_repo = DieselOrderRepository::new(pool);
        Self {
            customers: CustomerService::new(customer_repo.clone()),
            products: ProductService::new(product_repo.clone()),
            orders: OrderService::new(customer_repo, product_repo, order_repo),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::customers::create_customer,
        handlers::customers::get_customer,
        handlers::products::create_product,
        handlers::products::list_products,
        handlers::orders::create_order,
        handlers::orders::get_order,
        handlers::orders::list_orders,
    ),
    components(schemas(
        handlers::customers::CreateCustomerRequest,
        handlers::customers::CustomerResponse,
        handlers::products::CreateProductRequest,
        handlers::products::ProductResponse,
        handlers::orders::CreateOrderRequest,
        handlers::orders::OrderProductRequest,
        handlers::orders::OrderLineResponse,
        handlers::orders::OrderResponse,
        handlers::orders::ListOrdersResponse,
    )),
    tags(
        (name = "customers", description = "Customer registration and lookup"),
        (name = "products", description = "Product catalog and stock"),
        (name = "orders", description = "Sales order creation and retrieval"),
    )
)]
struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let state = web::Data::new(AppState::new(pool));

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .service(
                web::scope("/customers")
                    .route("", web::post().to(handlers::customers::create_customer))
                    .route("/{id}", web::get().to(handlers::customers::get_customer)),
            )
            .service(
                web::scope("/products")
                    .route("", web::post().to(handlers::products::create_product))
                    .route("", web::get().to(handlers::products::list_products)),
            )
            .service(
                web::scope("/orders")
                    .route("", web::post().to(handlers::orders::create_order))
                    .route("", web::get().to(handlers::orders::list_orders))
                    .route("/{id}", web::get().to(handlers::orders::get_order)),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
