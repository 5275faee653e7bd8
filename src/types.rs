//! Shared record types used across certgen.
//! Includes the complete `Record`, the CSV-facing `PartialRecord`, and the
//! `CertificateFields` handed to templates.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::date::format_long_date;
use crate::error::Result;

/// Fully resolved data for one certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub badge: String,
    pub instructor: String,
    pub name: String,
    pub user_id: String,
    /// ISO-8601 `YYYY-MM-DD`
    pub date: String,
}

impl Record {
    /// `{root}/{badge}`
    pub fn badge_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.badge)
    }

    /// `{root}/{badge}/{user_id}.pdf`
    pub fn output_path(&self, root: &Path) -> PathBuf {
        self.badge_dir(root).join(format!("{}.pdf", self.user_id))
    }

    pub fn template_name(&self) -> String {
        format!("{}.svg", self.badge)
    }

    /// Fields substituted into the template, with the date in long form.
    pub fn certificate_fields(&self) -> Result<CertificateFields> {
        Ok(CertificateFields {
            badge: self.badge.clone(),
            instructor: self.instructor.clone(),
            name: self.name.clone(),
            user_id: self.user_id.clone(),
            date: format_long_date(&self.date)?,
        })
    }
}

/// One CSV row. Every column is optional here; presence of a column in the
/// table as a whole is tracked separately by [`crate::core::batch::ColumnSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialRecord {
    pub name: Option<String>,
    pub badge: Option<String>,
    pub instructor: Option<String>,
    pub user_id: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateFields {
    pub badge: String,
    pub instructor: String,
    pub name: String,
    pub user_id: String,
    pub date: String,
}
