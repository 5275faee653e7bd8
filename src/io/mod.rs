//! I/O layer: CSV table reader, SVG template registry, and the PDF writer.
pub mod table;
pub use table::{Table, read_table};

pub mod template;
pub use template::TemplateRegistry;

pub mod writers;
