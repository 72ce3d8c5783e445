use homework_bot::{BotConfig, BotParams};
use std::process::ExitCode;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stdout)
        .init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            error!(%error, "cannot start homework bot");
            return ExitCode::FAILURE;
        }
    };
    info!(?config, "configuration loaded");

    let mut bot = match BotParams::from_config(&config) {
        Ok(params) => params.build(),
        Err(error) => {
            error!(%error, "cannot create API clients");
            return ExitCode::FAILURE;
        }
    };

    tokio::select! {
        () = bot.run() => {}
        () = shutdown_signal() => info!("shutdown signal received, stopping"),
    }

    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            error!(%error, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
