use std::fs;
use std::path::Path;
use std::sync::Arc;

use svg2pdf::usvg::{self, fontdb};
use svg2pdf::{ConversionOptions, PageOptions};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Resolution used to map SVG user units onto the PDF page.
pub const CERTIFICATE_DPI: f32 = 90.0;

/// SVG to PDF converter. System fonts are loaded once and shared across
/// conversions.
pub struct PdfWriter {
    fontdb: Arc<fontdb::Database>,
    dpi: f32,
}

impl PdfWriter {
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        debug!("Loaded {} font faces", db.len());
        Self::with_fonts(db, CERTIFICATE_DPI)
    }

    pub fn with_fonts(db: fontdb::Database, dpi: f32) -> Self {
        Self {
            fontdb: Arc::new(db),
            dpi,
        }
    }

    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    /// Convert SVG markup to PDF bytes. Relative hrefs resolve against
    /// `resources_dir`.
    pub fn convert(&self, svg: &[u8], resources_dir: Option<&Path>) -> Result<Vec<u8>> {
        let mut options = usvg::Options::default();
        options.resources_dir = resources_dir.map(Path::to_path_buf);
        options.fontdb = self.fontdb.clone();

        let tree = usvg::Tree::from_data(svg, &options)?;
        let size = tree.size();
        if size.width() <= 0.0 || size.height() <= 0.0 {
            return Err(Error::Pdf(format!(
                "invalid SVG dimensions: {}x{}",
                size.width(),
                size.height()
            )));
        }

        let mut page = PageOptions::default();
        page.dpi = self.dpi;
        svg2pdf::to_pdf(&tree, ConversionOptions::default(), page)
            .map_err(|e| Error::Pdf(format!("{e:?}")))
    }

    /// Read staged SVG from `svg_path` and write the PDF to `output`,
    /// replacing any existing file.
    pub fn write_file(
        &self,
        svg_path: &Path,
        output: &Path,
        resources_dir: Option<&Path>,
    ) -> Result<()> {
        let svg = fs::read(svg_path)?;
        let pdf = self.convert(&svg, resources_dir)?;
        fs::write(output, &pdf)?;
        info!("Wrote {:?} ({} bytes)", output, pdf.len());
        Ok(())
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
        <rect x="10" y="10" width="80" height="80" fill="blue"/>
    </svg>"#;

    fn writer() -> PdfWriter {
        PdfWriter::with_fonts(fontdb::Database::new(), CERTIFICATE_DPI)
    }

    #[test]
    fn converts_simple_svg() {
        let pdf = writer().convert(RECT.as_bytes(), None).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn rejects_invalid_svg() {
        assert!(writer().convert(b"not an svg", None).is_err());
    }

    #[test]
    fn rejects_zero_dimensions() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="0" height="0"></svg>"#;
        assert!(writer().convert(svg.as_bytes(), None).is_err());
    }

    #[test]
    fn writes_and_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let svg_path = dir.path().join("staged.svg");
        let out = dir.path().join("out.pdf");
        fs::write(&svg_path, RECT).unwrap();
        fs::write(&out, b"stale").unwrap();

        writer().write_file(&svg_path, &out, None).unwrap();
        let bytes = fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn new_writer_uses_certificate_dpi() {
        assert_eq!(PdfWriter::new().dpi(), CERTIFICATE_DPI);
    }
}
