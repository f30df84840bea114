use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use talent_scout::cli;
use talent_scout::config::IntakeConfig;
use talent_scout::intake::{IntakeController, QuestionGenerator};
use talent_scout::llm::create_provider;
use talent_scout::store::{JsonFileStore, RecordStore};

/// Stderr logging, plus a daily-rolling file when `log_dir` is set.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "talent-scout.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = IntakeConfig::from_env().context("invalid TalentScout configuration")?;

    // Held for the life of the process so buffered file logs are flushed.
    let _log_guard = init_tracing(config.log_dir.as_deref());

    eprintln!("🤖 TalentScout Hiring Assistant v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {} ({})", config.llm.model, config.llm.backend);
    eprintln!("   Records: {}", config.records_path.display());
    if let Some(ref dir) = config.log_dir {
        eprintln!("   Logs: {}", dir.display());
    }
    eprintln!("   Type your answer and press Enter. Say 'exit' to leave.\n");

    let llm = create_provider(&config.llm).context("failed to create LLM provider")?;
    let generator = QuestionGenerator::new(llm).with_timeout(config.llm_timeout);
    let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(config.records_path.clone()));

    let mut controller = IntakeController::new(generator, store);
    let stdin = BufReader::new(tokio::io::stdin());
    cli::run(&mut controller, stdin, tokio::io::stdout())
        .await
        .context("terminal session failed")?;

    tracing::debug!(
        status = %serde_json::to_string(&controller.status()).unwrap_or_default(),
        "Session finished"
    );
    Ok(())
}
