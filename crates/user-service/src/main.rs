//! User service entry point.

use std::process::ExitCode;

use user_service::config::UserServiceConfig;
use user_service::dataset;
use user_service::error::StartupError;
use user_service::store::UserStore;

async fn run(config: UserServiceConfig) -> Result<(), StartupError> {
    let metrics_handle = common::telemetry::install_metrics_recorder()?;

    // Load the dataset before accepting traffic
    let records = dataset::load_users(&config.users_file).await?;
    let state = user_service::create_default_state(records);
    tracing::info!(users = state.users.user_count().await, "user store ready");

    let app = user_service::create_app(state, metrics_handle);
    common::server::serve(&config.server, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = UserServiceConfig::from_env();
    common::telemetry::init_tracing(&config.server);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "user service failed");
            ExitCode::FAILURE
        }
    }
}
