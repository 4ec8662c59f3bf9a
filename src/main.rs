// Vanguard Protocol - main.rs
// Server bootstrap: config, ledger store, audit router.

use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vanguard_protocol::app_state::AppState;
use vanguard_protocol::cli::Cli;
use vanguard_protocol::config_loader::load_config;
use vanguard_protocol::ledger_store::LedgerStore;
use vanguard_protocol::ledger_store_memory::LedgerStoreMemory;
use vanguard_protocol::ledger_store_sled::LedgerStoreSled;
use vanguard_protocol::web::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = load_config(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("failed to load config: {e}"))?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    if cli.print_config {
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("Vanguard Protocol :: agent action auditor");

    let ledger: Arc<Mutex<dyn LedgerStore>> = match config.ledger_backend.as_str() {
        "memory" => Arc::new(Mutex::new(LedgerStoreMemory::new())),
        _ => {
            let path = std::path::Path::new(&config.data_dir).join("ledger");
            Arc::new(Mutex::new(LedgerStoreSled::new(path)?))
        }
    };

    let state = Arc::new(AppState::new(config.clone(), ledger));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        backend = %config.ledger_backend,
        "vanguard protocol listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
