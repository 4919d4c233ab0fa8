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
use notion_blocks::{
    deliver, AppError, AssembleConfig, ChildrenBatch, CommandLineInput, DeliveryTarget, Document,
    DocumentSource, OutputPlan, LOG_FILE_NAME,
};
use std::fs;
use std::io::Read;

/// Sets up logging configuration.
///
/// Console output goes to stderr so piped request bodies stay clean.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join(LOG_FILE_NAME);
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

fn read_document(source: &DocumentSource) -> Result<Document, AppError> {
    match source {
        DocumentSource::File(path) => Document::load(path),
        DocumentSource::Stdin => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Document::from_json_str(&raw).map_err(|source| AppError::JsonParseError {
                path: "<stdin>".into(),
                source,
            })
        }
    }
}

/// Reads the document, renders one request body per parent, and delivers them.
fn assemble(config: &AssembleConfig) -> Result<(), AppError> {
    let document = read_document(&config.source)?;
    log::info!("Loaded {} block(s)", document.blocks.len());
    for block in &document.blocks {
        log::debug!("  [{}] {}", block.parent_id(), block);
    }

    let batch = ChildrenBatch::from(document);
    let bodies = batch.request_bodies(config.parallel)?;
    let rendered = if config.compact {
        serde_json::to_string(&bodies)?
    } else {
        serde_json::to_string_pretty(&bodies)?
    };

    let mut plan = OutputPlan::new();
    if let Some(path) = &config.output_file {
        plan = plan.with_operation(DeliveryTarget::WriteFile {
            path: path.clone(),
            content: rendered.clone(),
        });
    }
    if config.pipe {
        plan = plan.with_operation(DeliveryTarget::PrintToStdout { content: rendered });
    }

    let report = deliver(plan);
    if !report.is_success() {
        return Err(AppError::DeliveryFailed {
            failures: report.failure_messages(),
        });
    }

    for completed in &report.completed {
        if let DeliveryTarget::WriteFile { path, .. } = &completed.operation {
            eprintln!(
                "✓ Request bodies for {} parent(s) saved to {}",
                batch.len(),
                path.display()
            );
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).map_err(|e| anyhow::anyhow!("failed to set up logging: {e}"))?;

    let config = AssembleConfig::resolve(cli).context("invalid command-line input")?;

    assemble(&config).context("assembly failed")?;

    Ok(())
}
