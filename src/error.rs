use std::path::PathBuf;

/// Errors produced while parsing a hex color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Nothing left after trimming whitespace and the leading `#`.
    #[error("empty color value")]
    Empty,
    /// Only `#RGB` and `#RRGGBB` forms are accepted.
    #[error("expected 3 or 6 hex digits, got {0}")]
    InvalidLength(usize),
    /// A character outside `0-9a-fA-F`.
    #[error("invalid hex digit '{digit}' at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

/// Errors from a single clipboard writer.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The writer has no usable target (no terminal, no path, ...).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from loading a `neumorph.toml` file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(String),
    #[error("invalid default base color '{value}': {source}")]
    InvalidBase {
        value: String,
        #[source]
        source: ColorError,
    },
}

pub type Result<T> = std::result::Result<T, ColorError>;
