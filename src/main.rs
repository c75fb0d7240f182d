//! Reads one webhook body from a file or stdin and prints its summary.

use std::io::Read;
use std::process::ExitCode;

use memberpress_events::adapters::default_services;
use memberpress_events::application::{ClassifyWebhookCommand, ClassifyWebhookHandler};
use memberpress_events::config::{init_tracing, AppConfig};
use memberpress_events::EventRegistry;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the event validated.
fn run() -> Result<bool, String> {
    let config = AppConfig::load().map_err(|e| e.to_string())?;
    config.validate().map_err(|e| e.to_string())?;
    init_tracing(&config.logging).map_err(|e| e.to_string())?;

    let body = match std::env::args().nth(1) {
        Some(path) if path != "-" => {
            std::fs::read(&path).map_err(|e| format!("cannot read {path}: {e}"))?
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            buf
        }
    };

    let handler = ClassifyWebhookHandler::new(EventRegistry::new(default_services()));
    let summary = handler
        .summarize(ClassifyWebhookCommand { body })
        .map_err(|e| e.to_string())?;

    let rendered = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
    println!("{rendered}");
    Ok(summary.is_valid)
}
