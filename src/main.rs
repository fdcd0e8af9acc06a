use std::process::ExitCode;

use anyhow::Context;
use story_spoiler::{Runner, observability, runner, tls};

#[actix_web::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = story_spoiler::config::load().context("Failed to load configuration")?;

    observability::init(&config.observability);
    tls::install_crypto_provider();

    tracing::info!(
        app = %config.app.name,
        environment = %config.app.environment,
        base_url = %config.backend.base_url,
        "Starting story spoiler suite"
    );

    let result = Runner::new(config).run().await;

    match &result {
        Ok(report) => println!("{}", report),
        Err(e) => {
            tracing::error!(error = %e, "Suite aborted");
            eprintln!("{}", e);
        }
    }

    Ok(runner::exit_code(&result))
}
