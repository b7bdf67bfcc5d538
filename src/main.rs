//! treegen CLI entry point

use anyhow::{Context, Result};
use treegen::config::cli::Cli;
use treegen::config::settings::{save_settings, settings_path};
use treegen::config::validator::validate_plan;
use treegen::config::GenerationPlan;
use treegen::output::manifest::LayoutManifest;
use treegen::output::text::{print_configuration, print_results};
use treegen::target::dry_run::DryRunTarget;
use treegen::target::local::LocalTarget;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    println!("treegen v{}", env!("CARGO_PKG_VERSION"));
    println!("Deterministic synthetic directory tree generator");
    println!();

    cli.validate()?;

    let settings = cli.resolve()?;
    let plan = GenerationPlan::from_settings(&settings).context("Invalid configuration")?;
    validate_plan(&plan).context("Configuration validation failed")?;

    print_configuration(&plan, cli.dry_run);
    println!();

    let report = if cli.dry_run {
        treegen::generate(&plan, &mut DryRunTarget::new())
    } else {
        treegen::generate(&plan, &mut LocalTarget::new())
    }
    .context("Error generating dummy data")?;

    print_results(&report);

    if let Some(ref path) = cli.export_manifest {
        LayoutManifest::from_report(&report)
            .to_file(path)
            .context("Failed to export layout manifest")?;
        println!("Layout manifest written to {}", path.display());
    }

    if cli.dry_run {
        println!();
        println!("Dry run mode - nothing was written");
        return Ok(());
    }

    println!();
    println!("Dummy files and directories were successfully created.");

    if !cli.no_save_settings {
        let path = settings_path(&plan.base_dir);
        match save_settings(&path, &settings) {
            Ok(()) => info!(path = %path.display(), "settings saved"),
            Err(e) => warn!("failed to save settings: {}", e),
        }
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
