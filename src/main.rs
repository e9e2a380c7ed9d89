use errors::AppResult;
use gsrc_cli::{cli, errors};
use tracing_subscriber::EnvFilter;

fn main() -> AppResult<()> {
    // Logs go to stderr; stdout carries rendered fragments.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let rt =
        tokio::runtime::Runtime::new().map_err(|e| errors::AppError::IoError(e.to_string()))?;

    rt.block_on(cli::cli())?;
    Ok(())
}
