//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// A lexeme inventory line that cannot be parsed
    InvalidInventory { line: usize, message: String },
    /// Output file cannot be written
    OutputError(String),
    /// A tag that failed to decode
    BadTag(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInventory { line, message } => {
                write!(f, "Invalid inventory entry on line {line}: {message}")
            }
            CliError::OutputError(msg) => write!(f, "Output error: {msg}"),
            CliError::BadTag(tag) => write!(f, "Cannot decode tag: {tag}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_error_display() {
        let error = CliError::InvalidInventory {
            line: 3,
            message: "unknown numeral type".to_string(),
        };
        assert!(error.to_string().contains("line 3"));
    }
}
