use crate::errors::AppResult;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Creates a terminal spinner shown while a request is in flight.
///
/// Returns `None` when the spinner template fails to build; the loading
/// indicator is decoration and must never fail an operation.
pub fn create_spinner(message: &str) -> Option<ProgressBar> {
    let style = match ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        Ok(style) => style,
        Err(e) => {
            warn!(error = %e, "Failed to create spinner template");
            return None;
        }
    };
    let pb = ProgressBar::new_spinner();
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    Some(pb)
}

/// Clears a spinner if one was created.
pub fn clear_spinner(spinner: Option<ProgressBar>) {
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
}

/// Writes a rendered fragment to the output file, or to stdout when no file
/// was given. Stdout is the fragment sink; logs go to stderr.
pub fn write_fragment(output: Option<&Path>, html: &str) -> AppResult<()> {
    match output {
        Some(path) => {
            fs::write(path, html)?;
            info!(path = %path.display(), bytes = html.len(), "Fragment written");
        }
        None => println!("{html}"),
    }
    Ok(())
}
