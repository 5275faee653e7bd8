use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "certgen",
    version,
    about = "Generate PDF certificates from SVG templates"
)]
#[command(group(ArgGroup::new("source").required(true).args(["csv", "name"])))]
pub struct CliArgs {
    /// Type of badge; selects the template and output subdirectory
    #[arg(short, long)]
    pub badge: Option<String>,

    /// Output directory (current by default)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Date of certificate as YYYY-MM-DD, defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Name of instructor
    #[arg(short, long)]
    pub instructor: Option<String>,

    /// CSV file with one participant per row (batch mode)
    #[arg(short, long)]
    pub csv: Option<PathBuf>,

    /// Name of the participant (single mode)
    #[arg(short, long)]
    pub name: Option<String>,

    /// User ID, constructed from name by default (single mode only)
    #[arg(short = 'u', long = "userid", conflicts_with = "csv")]
    pub user_id: Option<String>,

    /// Directory containing `{badge}.svg` templates (./templates by default)
    #[arg(short, long)]
    pub template_dir: Option<PathBuf>,

    /// JSON file with default badge, instructor, output_dir, template_dir, keep_going
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Batch mode: continue with remaining rows when one fails
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_single_mode_short_flags() {
        let args = CliArgs::try_parse_from([
            "certgen", "-b", "X", "-i", "Y", "-n", "Jane Doe", "-d", "2020-01-01", "-u", "jd",
            "-o", "/tmp/out",
        ])
        .unwrap();
        assert_eq!(args.badge.as_deref(), Some("X"));
        assert_eq!(args.instructor.as_deref(), Some("Y"));
        assert_eq!(args.name.as_deref(), Some("Jane Doe"));
        assert_eq!(args.date.as_deref(), Some("2020-01-01"));
        assert_eq!(args.user_id.as_deref(), Some("jd"));
        assert_eq!(args.output_dir, Some(PathBuf::from("/tmp/out")));
        assert!(args.csv.is_none());
    }

    #[test]
    fn parses_batch_mode_long_flags() {
        let args = CliArgs::try_parse_from([
            "certgen",
            "--csv",
            "learners.csv",
            "--badge",
            "swc-instructor",
            "--template-dir",
            "tpl",
            "--keep-going",
        ])
        .unwrap();
        assert_eq!(args.csv, Some(PathBuf::from("learners.csv")));
        assert_eq!(args.template_dir, Some(PathBuf::from("tpl")));
        assert!(args.keep_going);
        assert!(!args.log);
    }

    #[test]
    fn requires_csv_or_name() {
        let err = CliArgs::try_parse_from(["certgen", "-b", "X"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn rejects_csv_and_name_together() {
        let err = CliArgs::try_parse_from(["certgen", "-c", "a.csv", "-n", "Jane"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn rejects_userid_in_batch_mode() {
        let err =
            CliArgs::try_parse_from(["certgen", "-c", "a.csv", "-u", "jane"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }
}
