use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use timesheet_validation::modules::time_entries::adapters::outbound::employee_profiles_in_memory::InMemoryEmployeeProfiles;
use timesheet_validation::modules::time_entries::adapters::outbound::timesheets_in_memory::InMemoryTimesheets;
use timesheet_validation::modules::time_entries::use_cases::validate_time_entry::handler::ValidateTimeEntryHandler;
use timesheet_validation::shell::config::AppConfig;
use timesheet_validation::shell::http::router;
use timesheet_validation::shell::seed::SeedData;
use timesheet_validation::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let timesheets = Arc::new(InMemoryTimesheets::new());
    let profiles = Arc::new(InMemoryEmployeeProfiles::new());

    if let Some(path) = &config.seed_file {
        let seed = SeedData::load(path).await?;
        tracing::info!(
            path = %path.display(),
            timesheets = seed.timesheets.len(),
            profiles = seed.profiles.len(),
            "seeding in-memory stores"
        );
        seed.apply(&timesheets, &profiles).await;
    }

    let state = AppState {
        validate_handler: Arc::new(ValidateTimeEntryHandler::new(timesheets, profiles)),
    };

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("validation endpoint: http://{}/validate-time-entry", config.addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
