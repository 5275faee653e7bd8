//! Output writers. Only PDF is produced.
pub mod pdf;
pub use pdf::{CERTIFICATE_DPI, PdfWriter};
