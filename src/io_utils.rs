//! User-facing error messages for the command line tool.
use std::fmt;
use std::io;
use std::path::Path;

use crate::BitcountError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format an I/O error message naming the file and suggesting a fix.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the directory exists and the path is correct.",
        PermissionDenied => "Check permissions or choose another output path.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Wrap a library error raised while `context`, adding a hint.
pub fn bitcount_cli_error(context: &str, err: BitcountError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &BitcountError) -> String {
    use BitcountError::*;
    match err {
        InvalidArgument(msg) => format!("invalid argument: {msg}. See --help for allowed ranges."),
        Io(io) => format!("{io}"),
        Csv(e) => format!("{e}. CSV export failed."),
        Json(e) => format!("{e}. JSON export failed."),
    }
}
