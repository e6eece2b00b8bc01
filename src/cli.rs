use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::catalog::{self, Catalog};
use crate::config::{self, BuildConfig, Config};
use crate::output;
use crate::scoring;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;
pub const EXIT_CATALOG: i32 = 3;

/// A command failure carrying the process exit code.
#[derive(Debug, Clone, PartialEq)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Load and validate the config. Every problem maps to `EXIT_CONFIG`.
pub fn load_validated_config(config_path: &Path) -> Result<Config, CliError> {
    let config = config::load_config(config_path)
        .map_err(|e| CliError::new(EXIT_CONFIG, format!("Config error: {:#}", e)))?;

    config::validate_config(&config).map_err(|errors| {
        CliError::new(
            EXIT_CONFIG,
            format!("Config errors:\n  - {}", errors.join("\n  - ")),
        )
    })?;

    Ok(config)
}

/// Load the catalog from `override_path`, else from the config's `catalog:`.
///
/// With no catalog anywhere, `required` commands fail with `EXIT_CATALOG`;
/// otherwise an empty catalog is returned and every loadout slot scores 0.
pub fn open_catalog(
    config: Option<&Config>,
    config_path: &Path,
    override_path: Option<&Path>,
    required: bool,
) -> Result<Catalog, CliError> {
    let path: Option<PathBuf> = match override_path {
        Some(p) => Some(p.to_path_buf()),
        None => config.and_then(|c| config::resolve_catalog_path(c, config_path)),
    };

    match path {
        Some(path) => {
            let c = catalog::load_catalog(&path)
                .map_err(|e| CliError::new(EXIT_CATALOG, format!("Catalog error: {:#}", e)))?;
            debug!(path = %path.display(), items = c.len(), "loaded catalog");
            Ok(c)
        }
        None if required => Err(CliError::new(
            EXIT_CATALOG,
            "No catalog configured. Set `catalog:` in the config or pass --catalog.",
        )),
        None => {
            warn!("no catalog configured; equipment contributes nothing");
            Ok(Catalog::default())
        }
    }
}

/// Pick the builds to score: one by name, or all of them.
pub fn select_builds<'a>(
    config: &'a Config,
    name: Option<&str>,
) -> Result<Vec<&'a BuildConfig>, CliError> {
    let builds: Vec<&BuildConfig> = match name {
        Some(name) => match config.find_build(name) {
            Some(b) => vec![b],
            None => {
                return Err(CliError::new(
                    EXIT_CONFIG,
                    format!("No build named '{}' in config.", name),
                ))
            }
        },
        None => config.builds.iter().collect(),
    };

    if builds.is_empty() {
        return Err(CliError::new(
            EXIT_CONFIG,
            [
                "No builds configured in config file.",
                "Add builds to the config, for example:",
                "  builds:",
                "    - name: striker",
                "      attributes:",
                "        kick: { base: 120 }",
            ]
            .join("\n"),
        ));
    }

    Ok(builds)
}

/// Score each build and render the `calc` output.
pub fn render_builds(
    builds: &[&BuildConfig],
    catalog: &Catalog,
    explain: bool,
    use_colors: bool,
) -> String {
    let mut blocks = Vec::with_capacity(builds.len());
    for build in builds {
        for issue in scoring::check_loadout(&build.loadout, catalog) {
            warn!(build = %build.name, "{}", issue);
        }

        let breakdown =
            scoring::explain_scores(&build.attributes, &build.loadout, catalog, &build.buffs);
        for issue in scoring::check_score_range(&breakdown) {
            warn!(build = %build.name, "{}", issue);
        }

        if explain {
            blocks.push(output::format_breakdown(&build.name, &breakdown, use_colors));
        } else {
            let result = breakdown.result;
            debug!(build = %build.name, attack = result.attack, defense = result.defense, "scored");
            blocks.push(output::format_result(&build.name, &result, use_colors));
        }
    }

    let separator = if explain { "\n\n" } else { "\n" };
    blocks.join(separator)
}

/// Loadout and score-range warnings for every build, prefixed with the build name.
pub fn check_builds(config: &Config, catalog: &Catalog) -> Vec<String> {
    let mut warnings = Vec::new();
    for build in &config.builds {
        for issue in scoring::check_loadout(&build.loadout, catalog) {
            warnings.push(format!("{}: {}", build.name, issue));
        }
        let breakdown =
            scoring::explain_scores(&build.attributes, &build.loadout, catalog, &build.buffs);
        for issue in scoring::check_score_range(&breakdown) {
            warnings.push(format!("{}: {}", build.name, issue));
        }
    }
    warnings
}

/// Warnings only fail `check` under `--strict`.
pub fn check_exit_code(warning_count: usize, strict: bool) -> i32 {
    if strict && warning_count > 0 {
        EXIT_CONFIG
    } else {
        EXIT_SUCCESS
    }
}
