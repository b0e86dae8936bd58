//! CLI entrypoint for MAGI Arbiter
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use magi_application::{ArbiterConfig, DecideUseCase, NoProgress, ProgressNotifier};
use magi_domain::OutputFormat;
use magi_infrastructure::{ConfigLoader, HuggingFaceGateway};
use magi_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let Some(question) = cli.question.as_deref() else {
        bail!("Question is required. Use --show-config to inspect configuration sources.");
    };

    info!("Starting MAGI Arbiter");

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    file_config.validate().context("Invalid configuration")?;

    magi_presentation::set_color_enabled(!cli.no_color && file_config.output.color);

    let config = apply_cli_overrides(file_config.to_arbiter_config(), &cli);
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(file_config.output.format)
        .unwrap_or_default();
    let timeout = config.default_timeout;

    debug!(?config, ?format, ?timeout, "Resolved configuration");

    // === Dependency Injection ===
    let gateway = Arc::new(
        HuggingFaceGateway::new(&config).context("Failed to initialize inference gateway")?,
    );
    let use_case = DecideUseCase::new(gateway, &config);

    let progress: Box<dyn ProgressNotifier> = if cli.quiet || format == OutputFormat::Json {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let verdict = use_case
        .decide_with_progress(question, timeout, progress.as_ref())
        .await?;

    println!("{}", ConsoleFormatter::format(&verdict, format));

    Ok(())
}

/// Command-line model and timeout flags take precedence over file config
fn apply_cli_overrides(mut config: ArbiterConfig, cli: &Cli) -> ArbiterConfig {
    for (role, model) in cli.model_overrides() {
        if let Some(model) = model {
            config = config.with_model(role, model);
        }
    }
    if let Some(secs) = cli.timeout {
        config = config.with_default_timeout(Duration::from_secs(secs));
    }
    config
}
