//! Crate-level error type and `Result` alias for structured error handling.
//! Converts underlying I/O, CSV, template and SVG errors, and provides semantic
//! variants for missing configuration, bad dates and filesystem conflicts.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("SVG error: {0}")]
    Svg(#[from] svg2pdf::usvg::Error),

    #[error("PDF conversion failed: {0}")]
    Pdf(String),

    #[error("Need to specify {field}")]
    MissingField { field: &'static str },

    #[error("Input table has no '{column}' column")]
    MissingColumn { column: &'static str },

    #[error("Cannot derive a user id from name {name:?}")]
    EmptyUserId { name: String },

    #[error("No such file {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Invalid date (expected YYYY-MM-DD): {value}")]
    InvalidDate { value: String },

    #[error("No template registered for badge: {name}")]
    TemplateNotFound { name: String },

    #[error("Output path exists and is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}
