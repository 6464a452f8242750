use color_eyre::eyre::Result;
use dotenv::dotenv;
use lumen_tools::config::ToolsConfig;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = ToolsConfig::from_env()?;

    // Stdout is reserved for protocol frames
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    lumen_tools::run(config).await
}
