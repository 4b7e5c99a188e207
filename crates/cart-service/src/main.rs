//! Cart service entry point.

use std::process::ExitCode;

use common::{Config, ServerError};

async fn run(config: Config) -> Result<(), ServerError> {
    let metrics_handle = common::telemetry::install_metrics_recorder()?;
    let state = cart_service::create_default_state();
    let app = cart_service::create_app(state, metrics_handle);
    common::server::serve(&config, app).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env(cart_service::DEFAULT_PORT);
    common::telemetry::init_tracing(&config);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "cart service failed");
            ExitCode::FAILURE
        }
    }
}
