//! Type matchup helpers

use crate::types::{ElementType, TypeChart};

/// Qualitative label for a multiplier product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effectiveness {
    Very,
    NotVery,
    Fairly,
}

impl Effectiveness {
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier > 1.0 {
            Effectiveness::Very
        } else if multiplier < 1.0 {
            Effectiveness::NotVery
        } else {
            Effectiveness::Fairly
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Effectiveness::Very => "very effective",
            Effectiveness::NotVery => "not very effective",
            Effectiveness::Fairly => "fairly effective",
        }
    }
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the attacking type with the highest multiplier product against the
/// defender. The first candidate wins ties. `None` if there are no candidates.
pub fn best_attacking_type(
    chart: &TypeChart,
    candidates: &[ElementType],
    defender_types: &[ElementType],
) -> Option<(ElementType, f64)> {
    let mut best: Option<(ElementType, f64)> = None;
    for &candidate in candidates {
        let multiplier = chart.multiplier_against(candidate, defender_types);
        match best {
            Some((_, current)) if current >= multiplier => {}
            _ => best = Some((candidate, multiplier)),
        }
    }
    best
}
