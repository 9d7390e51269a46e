use tokio::io::{stdin, stdout, BufReader};
use tracing::info;
use lms::catalog::controller::ConsoleController;
use lms::catalog::factory::create_catalog_service;
use lms::core::domain::Configuration;
use lms::core::library::LibraryError;
use lms::utils::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    let config = Configuration::from_env();
    setup_tracing(config.log_level.as_str());
    info!(branch_id = %config.branch_id, events_via = ?config.events_via, "starting catalog console");

    let catalog_service = create_catalog_service(&config);
    let mut console = ConsoleController::new(&config, catalog_service, BufReader::new(stdin()), stdout());
    console.run().await
}
