use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;

use crate::config::LoggingConfig;
use crate::config::LogRotation;
use super::filter::DebugOnlyFilter;
use super::filter::ErrorWarnFilter;
#[cfg(feature = "prod")]
use super::filter::ErrorOnlyFilter;
#[cfg(feature = "dev")]
use super::filter::InfoOnlyFilter;
use super::format::WalletgraphFormat;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

// Keeps the non-blocking writers flushing for the process lifetime
static APPENDER_GUARDS: OnceLock<Vec<WorkerGuard>> = OnceLock::new();

pub fn setup_tracing(
    engine_name: &str,
    logging: &LoggingConfig,
) {
    let format = WalletgraphFormat {
        engine_name: engine_name.to_string(),
    };

    let mut guards: Vec<WorkerGuard> = Vec::new();

    // File appenders exist only when a log directory is configured;
    // unset means console output alone
    let mut non_blocking_debug: Option<NonBlocking> = None;
    let mut non_blocking_error: Option<NonBlocking> = None;
    #[cfg(feature = "dev")]
    let mut non_blocking_info: Option<NonBlocking> = None;

    if let Some(directory) = logging.directory.as_deref() {
        let base_logs_dir = Path::new(directory);
        let logs_dirs = [base_logs_dir.to_path_buf(), base_logs_dir.join("debug"), base_logs_dir.join("error")];

        for dir in &logs_dirs {
            if !dir.exists() {
                std::fs::create_dir_all(dir).expect(&format!("Failed to create logs directory: {}", dir.display()));
            }
        }

        let rotation = match logging.rotation {
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Hourly => Rotation::HOURLY,
        };

        #[cfg(feature = "dev")]
        {
            let info_appender =
                RollingFileAppender::new(rotation.clone(), base_logs_dir, format!("{}.log", engine_name));
            let (writer, guard) = tracing_appender::non_blocking(info_appender);
            non_blocking_info = Some(writer);
            guards.push(guard);
        }

        let debug_appender =
            RollingFileAppender::new(rotation.clone(), base_logs_dir.join("debug"), format!("{}.log", engine_name));
        let (writer, guard) = tracing_appender::non_blocking(debug_appender);
        non_blocking_debug = Some(writer);
        guards.push(guard);

        let error_appender =
            RollingFileAppender::new(rotation, base_logs_dir.join("error"), format!("{}.log", engine_name));
        let (writer, guard) = tracing_appender::non_blocking(error_appender);
        non_blocking_error = Some(writer);
        guards.push(guard);
    }

    // Set up the registry with all outputs
    let subscriber = tracing_subscriber::registry()
        // DEBUG log file - debug only using custom filter
        .with(non_blocking_debug.map(|writer| {
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .event_format(format.clone())
                .with_writer(writer)
                .with_filter(DebugOnlyFilter)
        }))
        // ERROR log file - warn and error only
        .with(non_blocking_error.map(|writer| {
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .event_format(format.clone())
                .with_writer(writer)
                .with_filter(ErrorWarnFilter)
        }));

    #[cfg(feature = "prod")]
    let subscriber = subscriber
        // Terminal output with custom WalletgraphFormat - Error
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .event_format(format.clone())
                .with_filter(ErrorOnlyFilter),
        );

    #[cfg(feature = "dev")]
    let subscriber = subscriber
        // Terminal output with custom WalletgraphFormat - INFO and above
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .event_format(format.clone())
                .with_filter(InfoOnlyFilter),
        )
        // INFO log file - info and above
        .with(non_blocking_info.map(|writer| {
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .event_format(format.clone())
                .with_writer(writer)
                .with_filter(InfoOnlyFilter)
        }));

    // Set the subscriber as the global default
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => {
            // Keep the worker guards alive so buffered lines reach disk
            let _ = APPENDER_GUARDS.set(guards);
            if let Some(directory) = logging.directory.as_deref() {
                tracing::info!(
                    "{}_logging_started::logs::{}/{}.log",
                    engine_name,
                    directory,
                    engine_name
                );
            }
        },
        Err(e) => {
            eprintln!("Error setting up logging: {}", e);
        },
    }
}
