//! High-level library API: emit one certificate from a complete record, or
//! drive single and batch runs end to end. Prefer these entrypoints over the
//! low-level `core` and `io` modules when integrating certgen.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::batch::Backfill;
use crate::core::record::{Defaults, normalize_single};
use crate::error::{Error, Result};
use crate::io::table::{Table, read_table};
use crate::io::template::TemplateRegistry;
use crate::io::writers::pdf::PdfWriter;
use crate::types::Record;

/// Outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub written: usize,
    pub failed: usize,
    /// Written files, in table order
    pub outputs: Vec<PathBuf>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.written + self.failed
    }
}

/// Renders records through a template registry and writes one PDF each
/// under `output_root`.
pub struct CertificateEmitter {
    output_root: PathBuf,
    templates: TemplateRegistry,
    pdf: PdfWriter,
    /// Where rendered markup is staged; the system temp dir when `None`
    staging_dir: Option<PathBuf>,
}

impl CertificateEmitter {
    pub fn new(output_root: impl Into<PathBuf>, templates: TemplateRegistry) -> Self {
        Self::with_writer(output_root, templates, PdfWriter::new())
    }

    pub fn with_writer(
        output_root: impl Into<PathBuf>,
        templates: TemplateRegistry,
        pdf: PdfWriter,
    ) -> Self {
        Self {
            output_root: output_root.into(),
            templates,
            pdf,
            staging_dir: None,
        }
    }

    pub fn with_staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = Some(dir.into());
        self
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Write `{root}/{badge}/{user_id}.pdf` for `record` and return its path.
    ///
    /// The date is validated and the template rendered before anything
    /// touches the filesystem. The rendered markup is staged in a temporary
    /// file that is removed when this returns, on success or failure.
    pub fn emit(&self, record: &Record) -> Result<PathBuf> {
        let fields = record.certificate_fields()?;
        let output = record.output_path(&self.output_root);
        let svg = self.templates.render(&record.template_name(), &fields)?;

        ensure_dir(&record.badge_dir(&self.output_root))?;

        let mut builder = tempfile::Builder::new();
        builder.prefix("certgen-").suffix(".svg");
        let mut staged = match &self.staging_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        staged.write_all(svg.as_bytes())?;
        staged.flush()?;
        debug!(
            "Staged rendered template at {:?}, converting at {} DPI",
            staged.path(),
            self.pdf.dpi()
        );

        self.pdf
            .write_file(staged.path(), &output, self.templates.dir())?;
        Ok(output)
    }
}

/// Create `dir` (and parents) unless it already exists as a directory.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Single mode: one certificate from command-line values.
pub fn generate_single(
    emitter: &CertificateEmitter,
    name: &str,
    user_id: Option<&str>,
    defaults: &Defaults,
) -> Result<PathBuf> {
    let record = normalize_single(name, user_id, defaults)?;
    let output = emitter.emit(&record)?;
    info!("Created certificate for {:?}: {:?}", record.name, output);
    Ok(output)
}

/// Batch mode over an already parsed table.
///
/// Missing `badge`/`instructor` fallbacks fail before any row is emitted.
/// Per-row failures abort the run unless `keep_going` is set, in which case
/// they are logged and counted in the report.
pub fn generate_batch(
    emitter: &CertificateEmitter,
    table: Table,
    defaults: &Defaults,
    keep_going: bool,
) -> Result<BatchReport> {
    let backfill = Backfill::resolve(table.columns, defaults)?;
    let mut report = BatchReport::default();

    for (index, row) in table.rows.into_iter().enumerate() {
        // Rows are numbered as in the file, after the header line.
        let line = index + 2;
        match backfill.apply(row).and_then(|record| emitter.emit(&record)) {
            Ok(output) => {
                debug!("Row {}: wrote {:?}", line, output);
                report.written += 1;
                report.outputs.push(output);
            }
            Err(e) if keep_going => {
                warn!("Row {}: {}", line, e);
                report.failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Batch complete: {} written, {} failed",
        report.written, report.failed
    );
    Ok(report)
}

/// Batch mode from a CSV file.
pub fn generate_batch_from_csv(
    emitter: &CertificateEmitter,
    csv_path: &Path,
    defaults: &Defaults,
    keep_going: bool,
) -> Result<BatchReport> {
    let table = read_table(csv_path)?;
    info!("Processing {} rows from {:?}", table.rows.len(), csv_path);
    generate_batch(emitter, table, defaults, keep_going)
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg2pdf::usvg::fontdb;

    const RECT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><desc>{{ name }}</desc><rect width="80" height="80"/></svg>"#;

    fn staged_emitter(out: &Path, staging: &Path, template: &str) -> CertificateEmitter {
        let templates = TemplateRegistry::from_raw([("X.svg", template)]).unwrap();
        let pdf = PdfWriter::with_fonts(fontdb::Database::new(), 90.0);
        CertificateEmitter::with_writer(out, templates, pdf).with_staging_dir(staging)
    }

    fn record() -> Record {
        Record {
            badge: "X".to_string(),
            instructor: "Y".to_string(),
            name: "Jane Doe".to_string(),
            user_id: "jane_doe".to_string(),
            date: "2020-01-01".to_string(),
        }
    }

    #[test]
    fn staged_markup_is_removed_after_success() {
        let out = tempfile::tempdir().unwrap();
        let staging = tempfile::tempdir().unwrap();
        let emitter = staged_emitter(out.path(), staging.path(), RECT);

        let path = emitter.emit(&record()).unwrap();
        assert_eq!(path, emitter.output_root().join("X").join("jane_doe.pdf"));
        assert!(path.is_file());
        assert_eq!(fs::read_dir(staging.path()).unwrap().count(), 0);
    }

    #[test]
    fn staged_markup_is_removed_when_conversion_fails() {
        let out = tempfile::tempdir().unwrap();
        let staging = tempfile::tempdir().unwrap();
        let emitter = staged_emitter(out.path(), staging.path(), "not an svg: {{ name }}");

        let result = emitter.emit(&record());
        assert!(matches!(result, Err(Error::Svg(_))));
        assert!(!out.path().join("X").join("jane_doe.pdf").exists());
        assert_eq!(fs::read_dir(staging.path()).unwrap().count(), 0);
    }

    #[test]
    fn ensure_dir_creates_nested_and_tolerates_existing() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("a").join("b");
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
        ensure_dir(&dir).unwrap();
    }

    #[test]
    fn ensure_dir_rejects_file_in_the_way() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("swc");
        fs::write(&blocker, b"").unwrap();
        match ensure_dir(&blocker) {
            Err(Error::NotADirectory { path }) => assert_eq!(path, blocker),
            other => panic!("expected NotADirectory, got {other:?}"),
        }
    }

    #[test]
    fn report_total() {
        let report = BatchReport {
            written: 2,
            failed: 1,
            outputs: Vec::new(),
        };
        assert_eq!(report.total(), 3);
    }
}
