use std::env;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use certgen::{
    CertificateEmitter, CertificateParams, Defaults, TemplateRegistry, generate_batch_from_csv,
    generate_single,
};

use super::args::CliArgs;
use super::errors::AppError;

const DEFAULT_TEMPLATE_DIR: &str = "templates";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("certgen=debug,warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line flags layered over the optional config file.
struct Settings {
    output_dir: PathBuf,
    template_dir: PathBuf,
    keep_going: bool,
    defaults: Defaults,
}

impl Settings {
    fn resolve(args: &CliArgs, params: CertificateParams) -> Result<Self, AppError> {
        let output_dir = match args.output_dir.clone().or(params.output_dir) {
            Some(dir) => dir,
            None => env::current_dir()?,
        };
        let template_dir = args
            .template_dir
            .clone()
            .or(params.template_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR));

        Ok(Self {
            output_dir,
            template_dir,
            keep_going: args.keep_going || params.keep_going,
            defaults: Defaults::new(
                args.badge.clone().or(params.badge),
                args.instructor.clone().or(params.instructor),
                args.date.clone(),
            ),
        })
    }
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    let params = match &args.config {
        Some(path) => CertificateParams::from_json_file(path)?,
        None => CertificateParams::default(),
    };
    let settings = Settings::resolve(&args, params)?;

    info!("Template directory: {:?}", settings.template_dir);
    let templates = TemplateRegistry::from_dir(&settings.template_dir)?;
    let emitter = CertificateEmitter::new(settings.output_dir, templates);
    info!("Output directory: {:?}", emitter.output_root());

    match (args.csv, args.name) {
        (Some(csv), _) => {
            let report =
                generate_batch_from_csv(&emitter, &csv, &settings.defaults, settings.keep_going)?;
            info!("Written: {}", report.written);
            info!("Errors: {}", report.failed);
            if report.failed > 0 {
                return Err(AppError::BatchFailures {
                    failed: report.failed,
                    total: report.total(),
                });
            }
        }
        (None, Some(name)) => {
            generate_single(&emitter, &name, args.user_id.as_deref(), &settings.defaults)?;
        }
        // The `source` arg group requires one of them.
        (None, None) => unreachable!(),
    }

    Ok(())
}
