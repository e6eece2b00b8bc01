use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "focus_calc=debug"
    } else {
        "warn"
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides `--verbose`.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = default_level(verbose);
            EnvFilter::try_new(level).with_context(|| format!("invalid log filter '{}'", level))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels_parse() {
        assert!(EnvFilter::try_new(default_level(true)).is_ok());
        assert!(EnvFilter::try_new(default_level(false)).is_ok());
    }

    #[test]
    fn test_verbose_enables_debug() {
        assert!(default_level(true).ends_with("debug"));
        assert_eq!(default_level(false), "warn");
    }
}
