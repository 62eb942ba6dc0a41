// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

use super::{TracingConfig, WriterConfig, try_create_file_appender};
use miette::IntoDiagnostic;
use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt,
                         registry::LookupSpan, util::SubscriberInitExt};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install the global subscriber described by `tracing_config`. Does nothing for
/// [`WriterConfig::None`].
///
/// # Errors
///
/// If the log file can't be set up, or a global subscriber is already installed.
pub fn try_initialize_logging(tracing_config: TracingConfig) -> miette::Result<()> {
    match try_create_layers(&tracing_config)? {
        Some(layers) => tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic(),
        None => Ok(()),
    }
}

/// Like [`try_initialize_logging()`], but only for the current thread, until the
/// returned guard is dropped. The binary installs the global subscriber; this is for
/// tests and for library users that embed a session in a larger program.
///
/// # Errors
///
/// If the log file can't be set up.
pub fn try_initialize_logging_thread_local(
    tracing_config: TracingConfig,
) -> miette::Result<Option<DefaultGuard>> {
    Ok(try_create_layers(&tracing_config)?
        .map(|layers| tracing_subscriber::registry().with(layers).set_default()))
}

/// The level filter layer plus a `fmt` layer writing to the configured file. `None` if
/// logging is disabled. This does not install anything.
///
/// # Errors
///
/// If the log file can't be set up.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<Registry>>>>> {
    let level_filter = tracing_config.get_level_filter();
    let Some(file_layer) =
        try_create_file_layer(level_filter, tracing_config.get_writer_config())?
    else {
        return Ok(None);
    };

    let layers: Vec<Box<DynLayer<Registry>>> = vec![Box::new(level_filter), file_layer];
    Ok(Some(layers))
}

/// A `fmt` layer for [`WriterConfig::File`], with its concrete type erased.
///
/// # Errors
///
/// If the log file can't be set up.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::File(path) => {
            let file = try_create_file_appender(&path)?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    fn log_file_config(dir: &tempfile::TempDir) -> (String, TracingConfig) {
        let path = dir.path().join("kilos_test_log.txt");
        let path = path.to_str().unwrap().to_string();
        (path.clone(), TracingConfig::new_file(Some(path)))
    }

    #[test]
    fn test_disabled_creates_no_layers() {
        let layers = try_create_layers(&TracingConfig::disabled()).unwrap();
        assert!(layers.is_none());
    }

    #[test]
    fn test_file_config_creates_two_layers() {
        let dir = tempfile::tempdir().unwrap();
        let (_, config) = log_file_config(&dir);
        let layers = try_create_layers(&config).unwrap().unwrap();
        assert_eq!(layers.len(), 2);
    }

    #[test]
    #[serial]
    fn test_events_written_to_file_at_level() {
        let dir = tempfile::tempdir().unwrap();
        let (path, config) = log_file_config(&dir);
        let config = config.with_level(tracing::Level::INFO);

        let guard = try_initialize_logging_thread_local(config).unwrap();
        tracing::info!(message = "kept", answer = 42);
        tracing::debug!(message = "filtered");
        drop(guard);

        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("kept"), "{contents}");
        assert!(contents.contains("answer=42"), "{contents}");
        assert!(!contents.contains("filtered"), "{contents}");
        assert!(!contents.contains('\x1b'), "{contents}");
    }

    #[test]
    #[serial]
    fn test_disabled_installs_nothing() {
        assert!(try_initialize_logging(TracingConfig::disabled()).is_ok());
        let guard = try_initialize_logging_thread_local(TracingConfig::disabled()).unwrap();
        assert!(guard.is_none());
    }
}
