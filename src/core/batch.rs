//! Batch reconciliation: merge CSV rows with command-line fallbacks.
//!
//! Backfill is decided once per table from its header, not per cell. A column
//! missing from the whole table takes the CLI default for every row; a column
//! that is present is used verbatim, blank cells included.
use crate::core::record::{Defaults, require_name, resolve_user_id};
use crate::error::{Error, Result};
use crate::types::{PartialRecord, Record};

/// Which recognized columns the table header contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSet {
    pub name: bool,
    pub badge: bool,
    pub instructor: bool,
    pub user_id: bool,
    pub date: bool,
}

impl ColumnSet {
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut columns = ColumnSet::default();
        for header in headers {
            match header.as_ref().trim() {
                "name" => columns.name = true,
                "badge" => columns.badge = true,
                "instructor" => columns.instructor = true,
                "user_id" => columns.user_id = true,
                "date" => columns.date = true,
                _ => {}
            }
        }
        columns
    }
}

/// Table-wide values applied to every row. `Some` means the column is
/// absent from the table and this value fills it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backfill {
    badge: Option<String>,
    instructor: Option<String>,
    date: Option<String>,
    derive_user_id: bool,
}

impl Backfill {
    /// Validate the column set against the defaults. Fails before any row is
    /// looked at when a required column has no fallback.
    pub fn resolve(columns: ColumnSet, defaults: &Defaults) -> Result<Self> {
        if !columns.name {
            return Err(Error::MissingColumn { column: "name" });
        }

        let instructor = if columns.instructor {
            None
        } else {
            Some(defaults.require_instructor()?.to_string())
        };
        let date = (!columns.date).then(|| defaults.date.clone());
        let badge = if columns.badge {
            None
        } else {
            Some(defaults.require_badge()?.to_string())
        };

        Ok(Self {
            badge,
            instructor,
            date,
            derive_user_id: !columns.user_id,
        })
    }

    pub fn apply(&self, row: PartialRecord) -> Result<Record> {
        let name = row.name.unwrap_or_default();
        require_name(&name)?;
        let user_id = if self.derive_user_id {
            resolve_user_id(&name, None)?
        } else {
            resolve_user_id(&name, Some(row.user_id.as_deref().unwrap_or_default()))?
        };

        Ok(Record {
            badge: pick(&self.badge, row.badge),
            instructor: pick(&self.instructor, row.instructor),
            date: pick(&self.date, row.date),
            name,
            user_id,
        })
    }
}

fn pick(fill: &Option<String>, cell: Option<String>) -> String {
    match fill {
        Some(value) => value.clone(),
        None => cell.unwrap_or_default(),
    }
}

/// Reconcile a whole table into records, preserving row order. Stops at the
/// first row that cannot be normalized.
pub fn reconcile<I>(columns: ColumnSet, rows: I, defaults: &Defaults) -> Result<Vec<Record>>
where
    I: IntoIterator<Item = PartialRecord>,
{
    let backfill = Backfill::resolve(columns, defaults)?;
    rows.into_iter().map(|row| backfill.apply(row)).collect()
}
