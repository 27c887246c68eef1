use std::env;
use std::path::PathBuf;
use log::warn;
use crate::types::SignalInput;
pub const Y_MAX_RANGE: std::ops::RangeInclusive<f64> = 1.0..=100.0;
/// Upper y-limit applied to every plot of a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YAxisMax(f64);
impl YAxisMax {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(*Y_MAX_RANGE.start(), *Y_MAX_RANGE.end()))
    }
    pub fn get(self) -> f64 {
        self.0
    }
}
impl Default for YAxisMax {
    fn default() -> Self {
        YAxisMax(10.0)
    }
}
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub y_max: YAxisMax,
    pub export_dir: PathBuf,
    pub x: SignalInput,
    pub h: SignalInput,
}
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            y_max: YAxisMax::default(),
            export_dir: PathBuf::from("signallab_export"),
            x: SignalInput::default(),
            h: SignalInput::default(),
        }
    }
}
impl AppConfig {
    /// Reads `SIGNALLAB_*` variables; call `dotenvy::dotenv()` first to honour `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = parsed::<f64>(&lookup, "SIGNALLAB_YMAX") {
            if value.is_finite() {
                config.y_max = YAxisMax::new(value);
            } else {
                warn!("SIGNALLAB_YMAX must be finite, keeping {}", config.y_max.get());
            }
        }
        if let Some(dir) = lookup("SIGNALLAB_EXPORT_DIR").filter(|d| !d.trim().is_empty()) {
            config.export_dir = PathBuf::from(dir);
        }
        if let Some(text) = lookup("SIGNALLAB_X") {
            config.x.text = text;
        }
        if let Some(start) = parsed::<i64>(&lookup, "SIGNALLAB_X_START") {
            config.x.start = start;
        }
        if let Some(text) = lookup("SIGNALLAB_H") {
            config.h.text = text;
        }
        if let Some(start) = parsed::<i64>(&lookup, "SIGNALLAB_H_START") {
            config.h.start = start;
        }
        config
    }
}
fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }
    #[test]
    fn defaults_match_the_classroom_example() {
        let config = config_from(&[]);
        assert_eq!(config.y_max.get(), 10.0);
        assert_eq!(config.x.text, "1,2,1");
        assert_eq!(config.h.start, 0);
        assert_eq!(config.export_dir, PathBuf::from("signallab_export"));
    }
    #[test]
    fn y_max_is_clamped() {
        assert_eq!(YAxisMax::new(0.2).get(), 1.0);
        assert_eq!(YAxisMax::new(250.0).get(), 100.0);
        assert_eq!(config_from(&[("SIGNALLAB_YMAX", "500")]).y_max.get(), 100.0);
        assert_eq!(config_from(&[("SIGNALLAB_YMAX", " 4 ")]).y_max.get(), 4.0);
    }
    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            ("SIGNALLAB_YMAX", "tall"),
            ("SIGNALLAB_X_START", "1.5"),
            ("SIGNALLAB_EXPORT_DIR", "  "),
        ]);
        assert_eq!(config.y_max.get(), 10.0);
        assert_eq!(config.x.start, 0);
        assert_eq!(config.export_dir, PathBuf::from("signallab_export"));
        assert_eq!(config_from(&[("SIGNALLAB_YMAX", "NaN")]).y_max.get(), 10.0);
    }
    #[test]
    fn inputs_come_from_the_environment() {
        let config = config_from(&[
            ("SIGNALLAB_X", "1,1"),
            ("SIGNALLAB_X_START", "-3"),
            ("SIGNALLAB_H", "0.5"),
            ("SIGNALLAB_H_START", "4"),
        ]);
        assert_eq!(config.x.text, "1,1");
        assert_eq!(config.x.start, -3);
        assert_eq!(config.h.text, "0.5");
        assert_eq!(config.h.start, 4);
    }
}
