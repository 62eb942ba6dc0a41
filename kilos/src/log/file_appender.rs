// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

use miette::{IntoDiagnostic, miette};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// A non rotating appender for `path_str`. A bare file name resolves against the
/// working directory. Missing parent directories are created.
///
/// Note that if you wrap this up in `tracing_appender::non_blocking()`, lines still
/// queued when the process exits are lost.
///
/// # Errors
///
/// - The path has no file name (e.g. it ends in `..`), or it isn't valid UTF-8.
/// - The file or its directory can't be created.
pub fn try_create_file_appender(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(path_str);

    let file_name = path.file_name().and_then(|it| it.to_str()).ok_or_else(|| {
        miette!("Can't use {} as a log file: it has no file name.", path.display())
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(parent)
        .into_diagnostic()
}
