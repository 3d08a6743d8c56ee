use std::io;
use std::path::Path;

use failure_derive::Fail;

/// An input line that doesn't match any record shape we understand
#[derive(Debug, Fail)]
pub enum FormatError {
    #[fail(display = "Unknown record tag on line {}: {:?}", line_number, line)]
    UnknownTag {
        line_number: usize,
        line: String
    },
    #[fail(display = "Malformed {} record on line {}: {:?}", kind, line_number, line)]
    MalformedRecord {
        kind: &'static str,
        line_number: usize,
        line: String
    },
    #[fail(display = "Malformed row {}: expected at least 2 columns but got {}", row, columns)]
    MalformedRow {
        row: u64,
        columns: usize
    },
    #[fail(display = "Invalid CSV: {}", _0)]
    Csv(#[cause] ::csv::Error),
    #[fail(display = "Invalid {}: {}", path, cause)]
    InFile {
        path: String,
        cause: Box<FormatError>
    }
}
impl FormatError {
    /// Attach the offending file to this error
    #[inline]
    pub fn in_file(self, path: &Path) -> FormatError {
        FormatError::InFile { path: path.display().to_string(), cause: Box::new(self) }
    }
}
impl From<::csv::Error> for FormatError {
    fn from(e: ::csv::Error) -> Self {
        FormatError::Csv(e)
    }
}

/// A read or write failure, remembering which file we were touching.
#[derive(Debug, Fail)]
#[fail(display = "Unable to {} {}: {}", action, path, cause)]
pub struct IoFailure {
    pub action: &'static str,
    pub path: String,
    #[cause]
    pub cause: io::Error
}
impl IoFailure {
    #[inline]
    pub fn reading(path: &Path, cause: io::Error) -> IoFailure {
        IoFailure { action: "read", path: path.display().to_string(), cause }
    }
    #[inline]
    pub fn writing(path: &Path, cause: io::Error) -> IoFailure {
        IoFailure { action: "write", path: path.display().to_string(), cause }
    }
}
