use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::EquipmentLoadout;
use crate::scoring::{AttributeSet, BuffSet};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Equipment catalog file (.json or .yaml). Relative paths resolve
    /// against the directory holding the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    #[serde(default)]
    pub builds: Vec<BuildConfig>,
}

/// A named character build: attributes, equipped items and active buffs.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    pub name: String,
    #[serde(default)]
    pub attributes: AttributeSet,
    #[serde(default)]
    pub loadout: EquipmentLoadout,
    #[serde(default)]
    pub buffs: BuffSet,
}

impl Config {
    pub fn find_build(&self, name: &str) -> Option<&BuildConfig> {
        self.builds
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }
}
