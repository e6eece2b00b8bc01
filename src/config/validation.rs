use std::collections::HashSet;

use super::schema::Config;
use crate::scoring::{compute_multiplier, Attribute};

/// Validate a loaded config.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_names = HashSet::new();

    for (i, build) in config.builds.iter().enumerate() {
        let name = build.name.trim();
        if name.is_empty() {
            errors.push(format!("builds[{}].name: must not be empty", i));
        } else if !seen_names.insert(name.to_ascii_lowercase()) {
            errors.push(format!("builds[{}].name: duplicate build '{}'", i, name));
        }

        for attribute in Attribute::ALL {
            let value = build.attributes.get(attribute);
            let parts = [
                ("base", value.base),
                ("board", value.board),
                ("supplement", value.supplement),
            ];
            for (part, v) in parts {
                if !v.is_finite() {
                    errors.push(format!(
                        "builds[{}].attributes.{}.{}: must be a finite number",
                        i, attribute, part
                    ));
                }
            }
        }

        if !build.buffs.focus.is_finite() {
            errors.push(format!("builds[{}].buffs.focus: must be a finite number", i));
        }
        if !build.buffs.justice.is_finite() {
            errors.push(format!("builds[{}].buffs.justice: must be a finite number", i));
        }
        if build.buffs.focus.is_finite()
            && build.buffs.justice.is_finite()
            && !compute_multiplier(&build.buffs).is_finite()
        {
            errors.push(format!(
                "builds[{}].buffs: combined multiplier overflows (focus {}, justice {})",
                i, build.buffs.focus, build.buffs.justice
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
