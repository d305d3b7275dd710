//! Air-quality alerts
//!
//! Averages PM2.5 readings across sensors, picks the AQI level and decides
//! whether the change is worth announcing.

use serde::{Deserialize, Serialize};

use super::aqi::{level_for_pm25, AqiCategory, AqiLevel};
use crate::config::AlertSettings;

/// Outcome of assessing one round of readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertDecision {
    /// Mean PM2.5 over the sensors used
    pub average: f64,
    /// Number of readings averaged
    pub sensors_used: usize,
    pub category: AqiCategory,
    /// Anything worse than good
    pub bad_air: bool,
    /// Whether a status should be published
    pub notify: bool,
    /// Status text
    pub status: String,
    /// Badge image for the status
    pub badge: String,
}

/// Average of the first `max_sensors` readings
pub fn summarize(readings: &[f64], max_sensors: usize) -> Option<(f64, usize)> {
    let used = &readings[..readings.len().min(max_sensors)];
    if used.is_empty() {
        return None;
    }
    Some((used.iter().sum::<f64>() / used.len() as f64, used.len()))
}

/// Notify on first run, while the air is bad, and when it recovers
pub fn should_notify(previous_bad: Option<bool>, bad_air: bool) -> bool {
    match previous_bad {
        None => true,
        Some(previous) => bad_air || previous,
    }
}

/// Status text for a level
pub fn compose_status(settings: &AlertSettings, level: &AqiLevel, average: f64) -> String {
    if !level.category.is_bad() {
        return format!(
            "{} air quality is back to normal. 🍃\n\nPM2.5 level is {:.0} μg/m³",
            settings.city, average
        );
    }

    let mut status = format!(
        "{} bad air quality alert ⚠ {}\n\nPM2.5 level is {:.0} μg/m³",
        settings.city,
        level.category.name().to_uppercase(),
        average
    );
    if let Some(general) = level.general {
        status.push_str("\n\n");
        status.push_str(general);
    }
    if let Some(sensitive) = level.sensitive {
        status.push_str("\n\n");
        status.push_str(sensitive);
    }
    if !settings.hashtags.is_empty() {
        status.push_str("\n\n");
        status.push_str(&settings.hashtags);
    }
    status
}

/// Assess PM2.5 readings against the previous alert state
pub fn assess(
    readings: &[f64],
    previous_bad: Option<bool>,
    settings: &AlertSettings,
) -> Option<AlertDecision> {
    let (average, sensors_used) = summarize(readings, settings.max_sensors)?;
    let level = level_for_pm25(average);
    let bad_air = level.category.is_bad();

    Some(AlertDecision {
        average,
        sensors_used,
        category: level.category,
        bad_air,
        notify: should_notify(previous_bad, bad_air),
        status: compose_status(settings, level, average),
        badge: level.badge.to_string(),
    })
}
