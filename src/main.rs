use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use focus_calc::catalog::SlotCategory;
use focus_calc::cli::{self, CliError, EXIT_CONFIG, EXIT_FAILURE, EXIT_SUCCESS};
use focus_calc::{config, output, telemetry};

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute Focus AT/DF for configured builds (default if no subcommand)
    Calc {
        /// Only compute the build with this name
        #[arg(short, long)]
        build: Option<String>,

        /// Equipment catalog file, overriding the one named in the config
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Show where every point of each score comes from
        #[arg(short, long)]
        explain: bool,
    },
    /// List catalog equipment grouped by slot
    Catalog {
        /// Only list one slot (shoes, wristband, pendant, special)
        #[arg(short, long)]
        slot: Option<String>,

        /// Equipment catalog file, overriding the one named in the config
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Validate the config, the catalog and every build's loadout
    Check {
        /// Exit non-zero when any build has warnings
        #[arg(long)]
        strict: bool,
    },
    /// Write a starter config and sample catalog
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "focus-calc")]
#[command(about = "Focus AT/DF calculator for character builds", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/focus-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = telemetry::init(cli.verbose) {
        eprintln!("Logging setup failed: {:#}", e);
    }

    let command = cli.command.unwrap_or(Commands::Calc {
        build: None,
        catalog: None,
        explain: false,
    });

    let config_path = match cli.config {
        Some(p) => p,
        None => match config::get_config_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        },
    };

    let use_colors = output::should_use_colors();

    let result = match command {
        Commands::Init { force } => run_init(&config_path, force),
        Commands::Calc {
            build,
            catalog,
            explain,
        } => run_calc(&config_path, build.as_deref(), catalog.as_deref(), explain, use_colors),
        Commands::Catalog { slot, catalog } => {
            run_catalog(&config_path, slot.as_deref(), catalog.as_deref(), use_colors)
        }
        Commands::Check { strict } => run_check(&config_path, strict),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.code);
        }
    }
}

fn run_init(config_path: &Path, force: bool) -> Result<i32, CliError> {
    let written = config::write_default_config(config_path, force)
        .map_err(|e| CliError::new(EXIT_FAILURE, format!("Init failed: {:#}", e)))?;
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(EXIT_SUCCESS)
}

fn run_calc(
    config_path: &Path,
    build: Option<&str>,
    catalog: Option<&Path>,
    explain: bool,
    use_colors: bool,
) -> Result<i32, CliError> {
    let config = cli::load_validated_config(config_path)?;
    let catalog = cli::open_catalog(Some(&config), config_path, catalog, false)?;
    let builds = cli::select_builds(&config, build)?;
    println!("{}", cli::render_builds(&builds, &catalog, explain, use_colors));
    Ok(EXIT_SUCCESS)
}

fn run_catalog(
    config_path: &Path,
    slot: Option<&str>,
    catalog: Option<&Path>,
    use_colors: bool,
) -> Result<i32, CliError> {
    let slot = slot
        .map(SlotCategory::parse)
        .transpose()
        .map_err(|e| CliError::new(EXIT_FAILURE, format!("Invalid --slot: {}", e)))?;

    // An explicit --catalog makes the config file unnecessary
    let config = match catalog {
        Some(_) => None,
        None => Some(cli::load_validated_config(config_path)?),
    };
    let catalog = cli::open_catalog(config.as_ref(), config_path, catalog, true)?;
    println!("{}", output::format_catalog(&catalog, slot, use_colors));
    Ok(EXIT_SUCCESS)
}

fn run_check(config_path: &Path, strict: bool) -> Result<i32, CliError> {
    let config = cli::load_validated_config(config_path)?;
    let catalog = cli::open_catalog(Some(&config), config_path, None, true)?;

    let warnings = cli::check_builds(&config, &catalog);
    for warning in &warnings {
        println!("{}", warning);
    }
    println!(
        "Checked {} builds against {} catalog items: {} warnings",
        config.builds.len(),
        catalog.len(),
        warnings.len()
    );
    Ok(cli::check_exit_code(warnings.len(), strict))
}
