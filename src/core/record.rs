//! Record normalization: CLI fallbacks and the single-entry path.
use crate::core::date::today_iso;
use crate::core::identity::derive_user_id;
use crate::error::{Error, Result};
use crate::types::Record;

/// Read-only fallback values taken from the command line (or config file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub badge: Option<String>,
    pub instructor: Option<String>,
    /// ISO-8601 date; today when not given.
    pub date: String,
}

impl Defaults {
    pub fn new(badge: Option<String>, instructor: Option<String>, date: Option<String>) -> Self {
        Self {
            badge,
            instructor,
            date: date.unwrap_or_else(today_iso),
        }
    }

    pub fn require_badge(&self) -> Result<&str> {
        self.badge
            .as_deref()
            .ok_or(Error::MissingField { field: "badge type" })
    }

    pub fn require_instructor(&self) -> Result<&str> {
        self.instructor
            .as_deref()
            .ok_or(Error::MissingField {
                field: "instructor",
            })
    }
}

/// Every record needs a participant name to print.
pub fn require_name(name: &str) -> Result<&str> {
    if name.trim().is_empty() {
        return Err(Error::MissingField { field: "name" });
    }
    Ok(name)
}

/// Use `explicit` when given, otherwise derive from `name`. Empty ids are
/// rejected since they would produce `{badge}/.pdf`.
pub fn resolve_user_id(name: &str, explicit: Option<&str>) -> Result<String> {
    let user_id = match explicit {
        Some(id) => id.to_string(),
        None => derive_user_id(name),
    };
    if user_id.is_empty() {
        return Err(Error::EmptyUserId {
            name: name.to_string(),
        });
    }
    Ok(user_id)
}

/// Build the record for single mode, where badge and instructor can only
/// come from the command line.
pub fn normalize_single(name: &str, user_id: Option<&str>, defaults: &Defaults) -> Result<Record> {
    let name = require_name(name)?;
    let instructor = defaults.require_instructor()?;
    let badge = defaults.require_badge()?;

    Ok(Record {
        badge: badge.to_string(),
        instructor: instructor.to_string(),
        name: name.to_string(),
        user_id: resolve_user_id(name, user_id)?,
        date: defaults.date.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Defaults {
        Defaults::new(
            Some("X".to_string()),
            Some("Y".to_string()),
            Some("2020-01-01".to_string()),
        )
    }

    #[test]
    fn derives_user_id_when_absent() {
        let record = normalize_single("Jane Doe", None, &defaults()).unwrap();
        assert_eq!(
            record,
            Record {
                badge: "X".to_string(),
                instructor: "Y".to_string(),
                name: "Jane Doe".to_string(),
                user_id: "jane_doe".to_string(),
                date: "2020-01-01".to_string(),
            }
        );
    }

    #[test]
    fn explicit_user_id_is_kept_verbatim() {
        let record = normalize_single("Alan Turing", Some("turing_alan"), &defaults()).unwrap();
        assert_eq!(record.user_id, "turing_alan");
    }

    #[test]
    fn missing_instructor_is_reported_first() {
        let d = Defaults::new(None, None, None);
        match normalize_single("Jane Doe", None, &d) {
            Err(Error::MissingField { field }) => assert_eq!(field, "instructor"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn missing_badge_fails() {
        let d = Defaults::new(None, Some("Y".to_string()), None);
        match normalize_single("Jane Doe", None, &d) {
            Err(Error::MissingField { field }) => assert_eq!(field, "badge type"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn date_defaults_to_today() {
        let d = Defaults::new(Some("X".to_string()), Some("Y".to_string()), None);
        assert_eq!(d.date, today_iso());
    }

    #[test]
    fn blank_name_is_rejected_even_with_user_id() {
        for name in ["", "   "] {
            match normalize_single(name, Some("x"), &defaults()) {
                Err(Error::MissingField { field }) => assert_eq!(field, "name"),
                other => panic!("expected MissingField, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_derived_user_id_is_rejected() {
        assert!(matches!(
            normalize_single("!!!", None, &defaults()),
            Err(Error::EmptyUserId { .. })
        ));
        assert!(matches!(
            resolve_user_id("Jane Doe", Some("")),
            Err(Error::EmptyUserId { .. })
        ));
    }
}
