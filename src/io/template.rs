//! SVG template registry backed by Tera.
//!
//! Templates are addressed as `{badge}.svg`. Text substituted into `.svg`
//! templates is HTML/XML-escaped.
use std::fs;
use std::path::{Path, PathBuf};

use tera::{Context, Tera};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::CertificateFields;

const TEMPLATE_EXTENSION: &str = "svg";

pub struct TemplateRegistry {
    tera: Tera,
    dir: Option<PathBuf>,
}

impl TemplateRegistry {
    fn empty() -> Self {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".svg", ".xml", ".html"]);
        Self { tera, dir: None }
    }

    /// Load every `*.svg` file directly inside `dir`, named by file name.
    /// A missing directory yields an empty registry.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut registry = Self::empty();
        registry.dir = Some(dir.to_path_buf());

        if !dir.is_dir() {
            warn!("Template directory {:?} not found, no templates loaded", dir);
            return Ok(registry);
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION)
            {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                let name = name.to_string();
                files.push((path, Some(name)));
            }
        }

        debug!("Loading {} templates from {:?}", files.len(), dir);
        registry.tera.add_template_files(files)?;
        Ok(registry)
    }

    /// Build a registry from in-memory `(name, source)` pairs.
    pub fn from_raw<'a, I>(templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut registry = Self::empty();
        registry.tera.add_raw_templates(templates)?;
        Ok(registry)
    }

    /// Directory the templates were loaded from; relative resources in the
    /// rendered markup (images, fonts) resolve against it.
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tera.get_template_names().map(str::to_string).collect();
        names.sort();
        names
    }

    pub fn render(&self, name: &str, fields: &CertificateFields) -> Result<String> {
        if !self.has_template(name) {
            return Err(Error::TemplateNotFound {
                name: name.to_string(),
            });
        }
        let context = Context::from_serialize(fields)?;
        Ok(self.tera.render(name, &context)?)
    }
}
