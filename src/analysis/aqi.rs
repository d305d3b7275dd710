//! US AQI levels for PM2.5
//!
//! Breakpoints are 24-hour PM2.5 concentrations in µg/m³; a level covers
//! everything up to and including its upper bound.

use serde::{Deserialize, Serialize};
use std::fmt;

/// AQI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    pub fn is_bad(&self) -> bool {
        *self != AqiCategory::Good
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the level table
#[derive(Debug, Clone, Copy)]
pub struct AqiLevel {
    pub category: AqiCategory,
    /// Highest concentration still in this level
    pub upper_bound: f64,
    /// Badge image, named after the level colour
    pub badge: &'static str,
    /// Advice for sensitive groups
    pub sensitive: Option<&'static str>,
    /// Advice for everyone else
    pub general: Option<&'static str>,
}

pub const PM25_LEVELS: [AqiLevel; 6] = [
    AqiLevel {
        category: AqiCategory::Good,
        upper_bound: 12.0,
        badge: "pics/00E400.gif",
        sensitive: None,
        general: None,
    },
    AqiLevel {
        category: AqiCategory::Moderate,
        upper_bound: 25.4,
        badge: "pics/FFFF00.gif",
        sensitive: Some("Unusually sensitive people should consider reducing prolonged or heavy exertion."),
        general: None,
    },
    AqiLevel {
        category: AqiCategory::UnhealthyForSensitiveGroups,
        upper_bound: 55.4,
        badge: "pics/FF7E00.gif",
        sensitive: Some(
            "People with heart or lung disease, older adults, children, and people of lower socioeconomic status should reduce prolonged or heavy exertion.",
        ),
        general: None,
    },
    AqiLevel {
        category: AqiCategory::Unhealthy,
        upper_bound: 150.4,
        badge: "pics/FF0000.gif",
        sensitive: Some(
            "People with heart or lung disease, older adults, children, and people of lower socioeconomic status should avoid prolonged or heavy exertion.",
        ),
        general: Some("Everyone else should reduce prolonged or heavy exertion"),
    },
    AqiLevel {
        category: AqiCategory::VeryUnhealthy,
        upper_bound: 250.4,
        badge: "pics/8F3F97.gif",
        sensitive: Some(
            "People with heart or lung disease, older adults, children, and people of lower socioeconomic status should avoid all physical activity outdoors",
        ),
        general: Some("Everyone else should avoid prolonged or heavy exertion."),
    },
    AqiLevel {
        category: AqiCategory::Hazardous,
        upper_bound: 500.4,
        badge: "pics/7E0023.gif",
        sensitive: Some(
            "People with heart or lung disease, older adults, children, and people of lower socioeconomic status should remain indoors and keep activity levels low.",
        ),
        general: Some("Everyone should avoid all physical activity outdoors."),
    },
];

/// Level for a PM2.5 concentration; anything past the table is hazardous
pub fn level_for_pm25(concentration: f64) -> &'static AqiLevel {
    PM25_LEVELS
        .iter()
        .find(|level| concentration <= level.upper_bound)
        .unwrap_or(&PM25_LEVELS[PM25_LEVELS.len() - 1])
}

/// Level for a category
pub fn level_of(category: AqiCategory) -> &'static AqiLevel {
    PM25_LEVELS
        .iter()
        .find(|level| level.category == category)
        .unwrap_or(&PM25_LEVELS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_for_pm25(0.0).category, AqiCategory::Good);
        assert_eq!(level_for_pm25(12.0).category, AqiCategory::Good);
        assert_eq!(level_for_pm25(12.1).category, AqiCategory::Moderate);
        assert_eq!(level_for_pm25(25.4).category, AqiCategory::Moderate);
        assert_eq!(level_for_pm25(30.0).category, AqiCategory::UnhealthyForSensitiveGroups);
        assert_eq!(level_for_pm25(150.4).category, AqiCategory::Unhealthy);
        assert_eq!(level_for_pm25(200.0).category, AqiCategory::VeryUnhealthy);
        assert_eq!(level_for_pm25(500.4).category, AqiCategory::Hazardous);
        assert_eq!(level_for_pm25(1025.0).category, AqiCategory::Hazardous);
    }

    #[test]
    fn test_negative_concentration_is_good() {
        assert_eq!(level_for_pm25(-1.0).category, AqiCategory::Good);
    }

    #[test]
    fn test_table_is_ascending() {
        assert!(PM25_LEVELS.windows(2).all(|w| w[0].upper_bound < w[1].upper_bound));
    }

    #[test]
    fn test_level_of() {
        for level in &PM25_LEVELS {
            assert_eq!(level_of(level.category).badge, level.badge);
        }
    }

    #[test]
    fn test_category_names() {
        assert_eq!(AqiCategory::UnhealthyForSensitiveGroups.to_string(), "Unhealthy for Sensitive Groups");
        assert!(!AqiCategory::Good.is_bad());
        assert!(AqiCategory::Moderate.is_bad());
    }

    #[test]
    fn test_advice() {
        assert!(level_of(AqiCategory::Good).sensitive.is_none());
        assert!(level_of(AqiCategory::Unhealthy).general.is_some());
        assert!(level_of(AqiCategory::Moderate).general.is_none());
    }
}
