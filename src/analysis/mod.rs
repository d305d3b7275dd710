//! Analysis Layer
//!
//! Turns glyph readings into measurements and measurements into alerts.

pub mod alert;
pub mod aqi;
pub mod reading;

use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub use alert::{assess, AlertDecision};
pub use aqi::{level_for_pm25, AqiCategory, AqiLevel};
pub use reading::{parse_reading, parse_recognition};

use crate::error::ReadingError;
use crate::vision::GlyphReader;

/// Draw paths per sensor, then per measurement name (`pm2.5`, `pm10`, ...)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SensorPaths(pub BTreeMap<String, BTreeMap<String, MeasurementPath>>);

/// A measurement drawn as one path or as one path per glyph
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MeasurementPath {
    Single(String),
    Glyphs(Vec<String>),
}

/// One recognized measurement
#[derive(Debug, Clone)]
pub struct MeasurementReport {
    pub sensor: String,
    pub measurement: String,
    /// Best-effort recognized text
    pub text: String,
    pub value: Result<f64, ReadingError>,
}

/// Recognize every measurement of every sensor
pub fn read_sensors(reader: &GlyphReader, sensors: &SensorPaths) -> Vec<MeasurementReport> {
    let mut reports = Vec::new();

    for (sensor, measurements) in &sensors.0 {
        for (measurement, path) in measurements {
            let recognition = match path {
                MeasurementPath::Single(path) => reader.read_checked(path),
                MeasurementPath::Glyphs(paths) => reader.read_collated(paths),
            };
            let text = recognition.render();
            let value = parse_recognition(recognition);

            match &value {
                Ok(v) => debug!("{sensor} {measurement} = {v}"),
                Err(e) => warn!("Skipping {sensor} {measurement}: {e}"),
            }

            reports.push(MeasurementReport {
                sensor: sensor.clone(),
                measurement: measurement.clone(),
                text,
                value,
            });
        }
    }

    reports
}

/// Valid values of one measurement, in sensor order
pub fn values_of(reports: &[MeasurementReport], measurement: &str) -> Vec<f64> {
    reports
        .iter()
        .filter(|r| r.measurement.eq_ignore_ascii_case(measurement))
        .filter_map(|r| r.value.as_ref().ok().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::reference::REFERENCE_NUMBERS;

    fn sample() -> SensorPaths {
        let json = serde_json::json!({
            "Mikolajska": {
                "pm2.5": REFERENCE_NUMBERS[1].paths().concat(),
                "pm10": REFERENCE_NUMBERS[0].paths(),
            },
            "Szpitalna": {
                "PM2.5": REFERENCE_NUMBERS[2].paths().concat(),
            },
            "Studencka": {
                "pm2.5": "M1 2L3 4Z",
            },
        });
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_read_sensors() {
        let reports = read_sensors(&GlyphReader::new(), &sample());
        assert_eq!(reports.len(), 4);

        let pm10 = reports.iter().find(|r| r.measurement == "pm10").unwrap();
        assert_eq!(pm10.text, "1025");
        assert_eq!(pm10.value, Ok(1025.0));

        let broken = reports.iter().find(|r| r.sensor == "Studencka").unwrap();
        assert_eq!(broken.text, "M* 2L* 4Z");
        assert!(broken.value.is_err());
    }

    #[test]
    fn test_failed_report_keeps_error_when_cloned() {
        let reports = read_sensors(&GlyphReader::new(), &sample());
        let broken = reports.iter().find(|r| r.sensor == "Studencka").unwrap().clone();
        assert!(matches!(
            broken.value,
            Err(ReadingError::PartiallyRecognized { ref unmatched, .. }) if unmatched.len() == 1
        ));
    }

    #[test]
    fn test_values_of() {
        let reports = read_sensors(&GlyphReader::new(), &sample());
        // BTreeMap order: Mikolajska, Studencka (invalid), Szpitalna
        assert_eq!(values_of(&reports, "pm2.5"), vec![83.0, 6.0]);
        assert_eq!(values_of(&reports, "pm1"), Vec::<f64>::new());
    }
}
