use awsprof::ShellFormat;
use awsprof::core::config::{self, CliOverrides, ResolvedConfig};
use awsprof::core::report::Report;
use awsprof::core::source::{AwsConfigFile, ProfileSource};
use awsprof::core::state::Selector;
use awsprof::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "awsprof",
    about = "Pick an AWS profile interactively and print it for the shell",
    after_help = "Typical use: eval \"$(awsprof)\""
)]
struct Args {
    /// Output format for the chosen profile
    #[arg(short, long, value_enum)]
    format: Option<ShellFormat>,

    /// Environment variable to export (and to read the current profile from)
    #[arg(short, long)]
    env_var: Option<String>,

    /// AWS config file to read profiles from
    #[arg(long, value_name = "PATH")]
    aws_config: Option<PathBuf>,

    /// Start with role ARNs visible
    #[arg(long)]
    show_role_arn: bool,

    /// Alternate awsprof config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let loaded = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let cli = CliOverrides {
        env_var: args.env_var,
        format: args.format,
        aws_config_file: args.aws_config,
        show_role_arn: args.show_role_arn,
    };
    let resolved = config::resolve(&loaded.config, &cli);
    if let Err(e) = init_logging(&resolved) {
        // Printed before the alternate screen, so it stays visible
        eprintln!("Warning: logging disabled: {e}");
    }

    log::info!("awsprof starting up (format: {:?})", resolved.format);
    loaded.origin.log();
    for warning in &resolved.warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Resolved config: {:?}", resolved);

    // Consulted once, here, so construction stays a pure function
    let preferred = std::env::var(&resolved.env_var)
        .ok()
        .filter(|name| !name.is_empty());
    let loaded = AwsConfigFile::new(resolved.aws_config_file.clone()).load();
    if let Err(e) = &loaded {
        log::warn!("Failed to load profiles: {}", e);
    }
    let state = Selector::from_source(loaded, preferred.as_deref())
        .with_details(resolved.show_role_arn);

    let state = match tui::run(state) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Terminal session failed: {}", e);
            eprintln!("Failed to run the profile picker: {e}");
            return ExitCode::FAILURE;
        }
    };

    let report = Report::from_outcome(
        state.outcome(),
        state.profiles(),
        resolved.format,
        &resolved.env_var,
    );
    log::info!("Reporting {:?}", report);

    if let Some(line) = &report.stdout {
        println!("{line}");
    }
    if let Some(message) = &report.stderr {
        eprintln!("{message}");
    }
    report.exit_code()
}

/// File logger. The terminal is busy with the UI on stderr and the result on
/// stdout, so logs go nowhere else.
fn init_logging(resolved: &ResolvedConfig) -> io::Result<()> {
    let Some(path) = &resolved.log_file else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let log_file = File::create(path)?;
    WriteLogger::init(resolved.log_level, log_config, log_file)
        .map_err(|e| io::Error::other(e.to_string()))
}
