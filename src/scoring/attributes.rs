use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five character attributes that feed the focus scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Kick,
    Control,
    Technique,
    Agility,
    Intelligence,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Kick,
        Attribute::Control,
        Attribute::Technique,
        Attribute::Agility,
        Attribute::Intelligence,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Kick => "kick",
            Attribute::Control => "control",
            Attribute::Technique => "technique",
            Attribute::Agility => "agility",
            Attribute::Intelligence => "intelligence",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Three independently entered contributions to one raw attribute.
///
/// Missing fields deserialize as 0. Negative values are accepted as-is.
///
/// Example YAML:
/// ```yaml
/// kick: { base: 120, board: 10, supplement: 5 }
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AttributeValue {
    /// Innate value at max level
    pub base: f64,

    /// Training board bonus
    pub board: f64,

    /// Consumable bonus ("beans")
    #[serde(alias = "beans")]
    pub supplement: f64,
}

impl AttributeValue {
    pub fn new(base: f64, board: f64, supplement: f64) -> Self {
        Self {
            base,
            board,
            supplement,
        }
    }

    /// Character-side total before equipment.
    pub fn sum(&self) -> f64 {
        self.base + self.board + self.supplement
    }
}

/// All five attributes of a character. Unset attributes are zero-filled.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AttributeSet {
    pub kick: AttributeValue,
    pub control: AttributeValue,
    pub technique: AttributeValue,
    pub agility: AttributeValue,
    pub intelligence: AttributeValue,
}

impl AttributeSet {
    pub fn get(&self, attribute: Attribute) -> &AttributeValue {
        match attribute {
            Attribute::Kick => &self.kick,
            Attribute::Control => &self.control,
            Attribute::Technique => &self.technique,
            Attribute::Agility => &self.agility,
            Attribute::Intelligence => &self.intelligence,
        }
    }

    pub fn get_mut(&mut self, attribute: Attribute) -> &mut AttributeValue {
        match attribute {
            Attribute::Kick => &mut self.kick,
            Attribute::Control => &mut self.control,
            Attribute::Technique => &mut self.technique,
            Attribute::Agility => &mut self.agility,
            Attribute::Intelligence => &mut self.intelligence,
        }
    }

    /// Builder-style setter, mostly useful in tests and sample configs.
    pub fn with(mut self, attribute: Attribute, value: AttributeValue) -> Self {
        *self.get_mut(attribute) = value;
        self
    }
}
