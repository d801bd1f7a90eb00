use anyhow::{Context, Result};
use mask_runner::{BatchRunner, RunnerConfig};
use tokio::{
    fs::File,
    io::{self, AsyncBufRead, BufReader},
    signal,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = RunnerConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config.log_level);

    info!(
        function = %config.function,
        batch_size = config.batch_size,
        fail_fast = config.fail_fast,
        "mask-runner starting"
    );

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        return Err(e);
    }

    let runner = BatchRunner::new(&config).context("Failed to create batch runner")?;

    let reader: Box<dyn AsyncBufRead + Unpin + Send> = match &config.input_path {
        Some(path) => {
            let file = File::open(path)
                .await
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            info!(path = %path.display(), "reading rows from file");
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let summary = runner
        .run(reader, io::stdout(), shutdown_signal())
        .await
        .context("Batch run failed")?;

    info!(
        rows_processed = summary.rows_processed,
        rows_failed = summary.rows_failed,
        "mask-runner stopped"
    );
    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // stdout carries result rows
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
