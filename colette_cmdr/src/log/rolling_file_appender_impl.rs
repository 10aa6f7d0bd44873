// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum LogFileError {
    #[error("Can't access the folder of log file `{0}`")]
    #[diagnostic(
        code(colette_cmdr::log::folder),
        help("It might not exist, or you don't have the required permissions")
    )]
    NoParentFolder(String),

    #[error("Can't get a file name from log file path `{0}`")]
    #[diagnostic(code(colette_cmdr::log::file_name))]
    NoFileName(String),

    #[error("Can't create log file")]
    #[diagnostic(code(colette_cmdr::log::init))]
    Init(#[from] InitError),
}

/// Create a file appender that never rolls over. A relative path without a folder is
/// created in the current working directory. Writes are blocking, so every line is on
/// disk by the time the process exits.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create(path_str: &str) -> Result<RollingFileAppender, LogFileError> {
    let path = PathBuf::from(path_str);

    let parent = path
        .parent()
        .ok_or_else(|| LogFileError::NoParentFolder(path_str.to_string()))?;

    // `colette.log` has an empty parent.
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| LogFileError::NoFileName(path_str.to_string()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)?;

    Ok(appender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_create_in_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("my_temp_log_file.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let appender = try_create(&file_path);

        assert!(appender.is_ok());
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_try_create_without_file_name() {
        assert!(matches!(try_create("/"), Err(LogFileError::NoParentFolder(_))));
        assert!(matches!(try_create("logs/.."), Err(LogFileError::NoFileName(_))));
    }
}
