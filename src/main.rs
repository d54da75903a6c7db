use clap::Parser;
use std::io;
use tracing::info;

use order_desk::app_system::{setup_tracing, AppError, Cli, OrderSystem, SystemSettings};
use order_desk::menu::{Menu, StdConsole};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // Setup tracing once for the entire application
    setup_tracing(&cli.log_level);

    let settings = SystemSettings::from_cli(&cli)?;
    info!(catalog_size = settings.catalog.len(), "Starting order desk");

    let system = OrderSystem::start(&settings).await?;

    // Console reads block this task; the actors keep running on the runtime's worker threads.
    let console = StdConsole::new(io::stdin().lock(), io::stdout());
    let mut menu = Menu::new(console, system.order_client.clone());
    menu.run().await;
    drop(menu);

    system.shutdown().await?;

    info!("Order desk stopped");
    Ok(())
}
