use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use lumen_api::config::ApiConfig;
use lumen_db::{create_pool, schema::initialize_database, PgStore};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Lumen API");

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    let store = PgStore::new(db_pool, config.db_query_timeout());

    // Start API server
    lumen_api::start_server(config, Arc::new(store)).await?;

    Ok(())
}
