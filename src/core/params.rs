use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default run settings suitable for a JSON config file. Command-line flags
/// take precedence over anything set here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CertificateParams {
    pub badge: Option<String>,
    pub instructor: Option<String>,
    pub output_dir: Option<PathBuf>,
    /// Directory holding `{badge}.svg` templates
    pub template_dir: Option<PathBuf>,
    /// Batch mode: keep emitting after a failing row
    pub keep_going: bool,
}

impl CertificateParams {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
