use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::types::{Catalog, EquipmentItem, RawEquipment, SlotCategory};

/// Validate raw catalog rows and build a `Catalog`.
/// Returns all validation errors at once (not just the first).
pub fn ingest(raw: Vec<RawEquipment>) -> Result<Catalog, Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut items = Vec::with_capacity(raw.len());

    for (i, row) in raw.into_iter().enumerate() {
        let row_errors_before = errors.len();

        if !seen_ids.insert(row.id) {
            errors.push(format!("equipment[{}].id: duplicate id {}", i, row.id));
        }

        if row.name.trim().is_empty() {
            errors.push(format!("equipment[{}].name: must not be empty", i));
        }

        let category = match SlotCategory::parse(&row.category) {
            Ok(c) => Some(c),
            Err(e) => {
                errors.push(format!("equipment[{}].category: {}", i, e));
                None
            }
        };

        let columns = [
            ("kick", row.kick),
            ("control", row.control),
            ("technique", row.technique),
            ("agility", row.agility),
            ("intelligence", row.intelligence),
        ];
        for (column, value) in columns {
            if let Some(v) = value {
                if !v.is_finite() {
                    errors.push(format!(
                        "equipment[{}].{}: must be a finite number, got {}",
                        i, column, v
                    ));
                }
            }
        }

        if errors.len() > row_errors_before {
            continue;
        }
        if let Some(category) = category {
            items.push(EquipmentItem {
                id: row.id,
                name: row.name,
                category,
                kick: row.kick.unwrap_or(0.0),
                control: row.control.unwrap_or(0.0),
                technique: row.technique.unwrap_or(0.0),
                agility: row.agility.unwrap_or(0.0),
                intelligence: row.intelligence.unwrap_or(0.0),
            });
        }
    }

    if errors.is_empty() {
        Ok(Catalog::new(items))
    } else {
        Err(errors)
    }
}

/// Read raw catalog rows from a file.
///
/// `.json` files are parsed as a JSON array (the data-store export format);
/// anything else is parsed as a YAML sequence.
pub fn read_raw_catalog(path: &Path) -> Result<Vec<RawEquipment>> {
    if !path.exists() {
        anyhow::bail!("Catalog file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file at {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let raw: Vec<RawEquipment> = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: invalid YAML in {}", path.display()))?
    };

    debug!(path = %path.display(), rows = raw.len(), "read catalog rows");
    Ok(raw)
}

/// Read and validate a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = read_raw_catalog(path)?;
    ingest(raw).map_err(|errors| {
        anyhow::anyhow!(
            "Invalid catalog {}:\n  - {}",
            path.display(),
            errors.join("\n  - ")
        )
    })
}
