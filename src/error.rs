use miette::Diagnostic;
use thiserror::Error;

/// Main error type for silica operations
#[derive(Error, Diagnostic, Debug)]
pub enum SilicaError {
    #[error("IO error: {0}")]
    #[diagnostic(code(silica::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(silica::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(silica::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(silica::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error in {stage}: {message}")]
    #[diagnostic(code(silica::render))]
    Render { stage: String, message: String },

    #[error("Packaging error: {message}")]
    #[diagnostic(code(silica::package))]
    Package {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SilicaError>;
