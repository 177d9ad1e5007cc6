use algafood_backend_rs::{
    app::App,
    types::{Config, ToContext},
};
use std::{process::ExitCode, sync::Arc};
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let ctx = match config.to_context().await {
        Ok(ctx) => Arc::new(ctx),
        Err(err) => {
            tracing::error!("Failed to set up application context: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = App::new(ctx).serve().await {
        tracing::error!("Server stopped unexpectedly: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
