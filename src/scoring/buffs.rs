use serde::{Deserialize, Serialize};

/// Percentage buffs applied to both focus scores.
///
/// Each value means "+N%" and the two compound multiplicatively.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BuffSet {
    /// Focus buff percentage
    pub focus: f64,

    /// Justice buff percentage
    pub justice: f64,
}

impl BuffSet {
    pub fn new(focus: f64, justice: f64) -> Self {
        Self { focus, justice }
    }
}

/// Combined buff multiplier: `(1 + focus/100) * (1 + justice/100)`.
///
/// Evaluation order is fixed so results are reproducible to the bit.
/// A buff of -100 zeroes the multiplier.
pub fn compute_multiplier(buffs: &BuffSet) -> f64 {
    (1.0 + buffs.focus / 100.0) * (1.0 + buffs.justice / 100.0)
}
