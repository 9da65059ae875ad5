use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use auth::SigningKey;
use item_service::config::Config;
use item_service::config::DatabaseConfig;
use item_service::domain::item::ports::ItemServicePort;
use item_service::domain::item::service::ItemService;
use item_service::domain::user::ports::UserServicePort;
use item_service::domain::user::service::UserService;
use item_service::inbound::http::router::create_router;
use item_service::outbound::repositories::InMemoryItemRepository;
use item_service::outbound::repositories::InMemoryUserRepository;
use item_service::outbound::repositories::PostgresItemRepository;
use item_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

type Services = (Arc<dyn UserServicePort>, Arc<dyn ItemServicePort>);

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "item_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "item-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    let storage = match config.database {
        Some(_) => "postgresql",
        None => "memory",
    };

    tracing::info!(
        http_port = config.server.http_port,
        storage,
        token_ttl_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let signing_key = SigningKey::from_secret(&config.jwt.secret)?;
    let password_hasher = PasswordHasher::with_params(config.password)?;
    let authenticator = Arc::new(Authenticator::with_hasher(&signing_key, password_hasher));
    let token_ttl = config.jwt.token_ttl()?;

    let (user_service, item_service): Services = match &config.database {
        Some(database) => postgres_services(database, &authenticator, token_ttl).await?,
        None => {
            tracing::warn!("No database configured, using in-memory storage");
            let user_service: Arc<dyn UserServicePort> = Arc::new(UserService::new(
                Arc::new(InMemoryUserRepository::new()),
                Arc::clone(&authenticator),
                token_ttl,
            ));
            let item_service: Arc<dyn ItemServicePort> =
                Arc::new(ItemService::new(Arc::new(InMemoryItemRepository::new())));
            (user_service, item_service)
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, item_service, authenticator);

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn postgres_services(
    database: &DatabaseConfig,
    authenticator: &Arc<Authenticator>,
    token_ttl: chrono::Duration,
) -> Result<Services, anyhow::Error> {
    let pg_pool = PgPoolOptions::new()
        .max_connections(database.max_connections)
        .connect(&database.url)
        .await?;
    tracing::info!(
        max_connections = database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let item_repository = Arc::new(PostgresItemRepository::new(pg_pool));

    let user_service: Arc<dyn UserServicePort> = Arc::new(UserService::new(
        user_repository,
        Arc::clone(authenticator),
        token_ttl,
    ));
    let item_service: Arc<dyn ItemServicePort> = Arc::new(ItemService::new(item_repository));

    Ok((user_service, item_service))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
