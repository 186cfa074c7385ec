//! Definitions of errors that can occur while reading or writing deploy logs

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur while reading or writing deploy logs
#[derive(Debug)]
pub enum LogStoreError {
    /// Error reading a deploy log document from storage
    Read(String),
    /// Error writing a deploy log document to storage
    Write(String),
    /// Error parsing a deploy log document as JSON
    Parse(String),
}

impl Display for LogStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LogStoreError::Read(s) => write!(f, "error reading deploy log: {}", s),
            LogStoreError::Write(s) => write!(f, "error writing deploy log: {}", s),
            LogStoreError::Parse(s) => write!(f, "error parsing deploy log: {}", s),
        }
    }
}

impl Error for LogStoreError {}
