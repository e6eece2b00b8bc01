use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use super::schema::{BuildConfig, Config};
use crate::catalog::{EquipmentItem, EquipmentLoadout, RawEquipment, SlotCategory};
use crate::scoring::{Attribute, AttributeSet, AttributeValue, BuffSet};

const SAMPLE_CATALOG_FILE: &str = "equipment.yaml";

/// Starter catalog with one item per slot.
pub fn sample_catalog() -> Vec<RawEquipment> {
    let items = [
        EquipmentItem::new(1, "Lightning Spikes", SlotCategory::Shoes)
            .with_bonus(Attribute::Kick, 12.0)
            .with_bonus(Attribute::Agility, 6.0),
        EquipmentItem::new(2, "Red Misanga", SlotCategory::Wristband)
            .with_bonus(Attribute::Technique, 10.0),
        EquipmentItem::new(3, "Captain's Pendant", SlotCategory::Pendant)
            .with_bonus(Attribute::Control, 8.0)
            .with_bonus(Attribute::Intelligence, 8.0),
        EquipmentItem::new(4, "Keeper Gloves", SlotCategory::Special)
            .with_bonus(Attribute::Intelligence, 14.0),
    ];
    items.iter().map(RawEquipment::from).collect()
}

/// Starter config referencing the sample catalog.
pub fn sample_config() -> Config {
    let attributes = AttributeSet::default()
        .with(Attribute::Kick, AttributeValue::new(120.0, 10.0, 5.0))
        .with(Attribute::Control, AttributeValue::new(95.0, 6.0, 0.0))
        .with(Attribute::Technique, AttributeValue::new(101.0, 4.0, 3.0))
        .with(Attribute::Agility, AttributeValue::new(88.0, 0.0, 0.0))
        .with(Attribute::Intelligence, AttributeValue::new(76.0, 2.0, 0.0));

    Config {
        catalog: Some(PathBuf::from(SAMPLE_CATALOG_FILE)),
        builds: vec![BuildConfig {
            name: "striker".to_string(),
            attributes,
            loadout: EquipmentLoadout::default()
                .with(SlotCategory::Shoes, 1)
                .with(SlotCategory::Wristband, 2)
                .with(SlotCategory::Pendant, 3),
            buffs: BuffSet::new(10.0, 0.0),
        }],
    }
}

/// Write a starter config to `path` and a sample catalog beside it.
///
/// Refuses to replace an existing config unless `force` is set. An existing
/// catalog file is never replaced. Returns the paths actually written.
pub fn write_default_config(path: &Path, force: bool) -> Result<Vec<PathBuf>> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite",
            path.display()
        );
    }

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory at {}", dir.display()))?;
    }

    let mut written = Vec::new();

    let config_yaml =
        serde_saphyr::to_string(&sample_config()).context("Failed to serialize sample config")?;
    write_atomic(path, &config_yaml)?;
    written.push(path.to_path_buf());

    let catalog_path = dir.join(SAMPLE_CATALOG_FILE);
    if !catalog_path.exists() {
        let catalog_yaml = serde_saphyr::to_string(&sample_catalog())
            .context("Failed to serialize sample catalog")?;
        write_atomic(&catalog_path, &catalog_yaml)?;
        written.push(catalog_path);
    }

    for p in &written {
        info!(path = %p.display(), "wrote file");
    }
    Ok(written)
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(())
}
