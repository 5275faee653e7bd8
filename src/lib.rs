#![doc = r#"
certgen — personalized PDF certificates from SVG templates.

A badge (course type) names both an SVG template, `{badge}.svg`, and an output
subdirectory. Each certificate is rendered with the participant name,
instructor, user id and a long-form date, converted to PDF at 90 DPI, and
written to `{output_dir}/{badge}/{user_id}.pdf`.

The crate powers the `certgen` CLI and can be embedded directly.

Quick start: one certificate
----------------------------
```rust,no_run
use std::path::Path;
use certgen::{CertificateEmitter, Defaults, TemplateRegistry, generate_single};

fn main() -> certgen::Result<()> {
    let templates = TemplateRegistry::from_dir(Path::new("templates"))?;
    let emitter = CertificateEmitter::new("out", templates);
    let defaults = Defaults::new(
        Some("swc-instructor".to_string()),
        Some("Ada Lovelace".to_string()),
        Some("2016-01-27".to_string()),
    );

    // Writes out/swc-instructor/alan_turing.pdf
    let path = generate_single(&emitter, "Alan Turing", None, &defaults)?;
    println!("{}", path.display());
    Ok(())
}
```

Batch from CSV
--------------
Columns are `name` plus any of `badge`, `instructor`, `user_id`, `date`. A
column absent from the whole table is filled from `Defaults`; a present column
is used as-is.

```rust,no_run
use std::path::Path;
use certgen::{CertificateEmitter, Defaults, TemplateRegistry, generate_batch_from_csv};

fn main() -> certgen::Result<()> {
    let emitter = CertificateEmitter::new("out", TemplateRegistry::from_dir(Path::new("templates"))?);
    let defaults = Defaults::new(Some("dc-instructor".to_string()), Some("Grace Hopper".to_string()), None);

    let report = generate_batch_from_csv(&emitter, Path::new("learners.csv"), &defaults, false)?;
    println!("written={} failed={}", report.written, report.failed);
    Ok(())
}
```

Identifiers
-----------
```rust
assert_eq!(certgen::derive_user_id("Ada Lovelace!!"), "ada_lovelace");
```

Useful modules
--------------
- [`api`] — emitter and single/batch entry points.
- [`core`] — identifier derivation, dates, normalization, batch backfill.
- [`io`] — CSV reader, template registry, PDF writer.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::batch::{Backfill, ColumnSet, reconcile};
pub use crate::core::date::format_long_date;
pub use crate::core::identity::derive_user_id;
pub use crate::core::params::CertificateParams;
pub use crate::core::record::{Defaults, normalize_single};
pub use error::{Error, Result};
pub use types::{CertificateFields, PartialRecord, Record};

pub use io::table::{Table, read_table};
pub use io::template::TemplateRegistry;
pub use io::writers::pdf::{CERTIFICATE_DPI, PdfWriter};

pub use api::{
    BatchReport, CertificateEmitter, generate_batch, generate_batch_from_csv, generate_single,
};
