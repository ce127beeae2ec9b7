// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use regcomments::{
    AppError, CommandLineInput, CommentFetcher, CommentHarvest, FetchWindow, HarvestSummary,
    RegulationsHttpClient, RunConfig, LOG_FILE_NAME,
};
use std::process::ExitCode;
use std::time::Instant;

/// Sets up logging configuration.
fn setup_logging(debug: bool) -> anyhow::Result<()> {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join(LOG_FILE_NAME);

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)
        .with_context(|| format!("cannot open log file {}", log_file_path.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .logger(log4rs::config::Logger::builder().build("hyper", LevelFilter::Info))
        .logger(log4rs::config::Logger::builder().build("reqwest", LevelFilter::Info))
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )
        .context("invalid logging configuration")?;

    log4rs::init_config(config).context("logging already initialized")?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Harvests, filters and writes the report for the configured document.
async fn execute_pipeline(config: &RunConfig) -> Result<HarvestSummary, AppError> {
    let client = RegulationsHttpClient::new(config.base_url.clone(), config.api_key.as_ref())?;
    let fetcher = CommentFetcher::new(client, FetchWindow::ending_today(config.include_today));
    let harvest = CommentHarvest::new(config, fetcher).await?;
    harvest.run().await
}

fn report_completion(config: &RunConfig, summary: &HarvestSummary) {
    println!(
        "📄 {} of {} comments on {} mention {}.",
        summary.matched, summary.comments, config.document_id, config.keywords
    );
    if summary.enrichment.skipped > 0 {
        println!(
            "⚠ {} comments kept without their detail record.",
            summary.enrichment.skipped
        );
    }
    for path in &summary.written {
        println!("✓ Report saved to {}", path.display());
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.debug) {
        eprintln!("Failed to set up logging: {:#}", e);
        return ExitCode::FAILURE;
    }

    log::info!("Running {}", env!("CARGO_PKG_NAME"));
    if cli.debug {
        log::debug!("Debug mode enabled");
    }
    let started = Instant::now();

    let outcome = match RunConfig::resolve(cli) {
        Ok(config) => execute_pipeline(&config)
            .await
            .map(|summary| report_completion(&config, &summary)),
        Err(e) => Err(e),
    };

    log::info!(
        "{} executed in {:.5} seconds.",
        env!("CARGO_PKG_NAME"),
        started.elapsed().as_secs_f64()
    );

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
