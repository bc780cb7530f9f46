use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tolerances used when comparing vectors approximately.
///
/// Two components `a` and `b` match if `|a - b| <= absolute` or
/// `|a - b| <= relative * max(|a|, |b|)`.
///
/// Both tolerances must be finite and non-negative; `new` and
/// deserialization reject anything else.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(try_from = "RawToleranceConfig")]
pub struct ToleranceConfig {
    absolute: f64,
    relative: f64,
}

#[derive(Deserialize)]
struct RawToleranceConfig {
    absolute: f64,
    relative: f64,
}

impl TryFrom<RawToleranceConfig> for ToleranceConfig {
    type Error = String;

    fn try_from(raw: RawToleranceConfig) -> Result<Self, Self::Error> {
        ToleranceConfig::new(raw.absolute, raw.relative)
    }
}

impl ToleranceConfig {
    pub fn new(absolute: f64, relative: f64) -> Result<Self, String> {
        let valid = |t: f64| t.is_finite() && t >= 0.0;
        if !valid(absolute) || !valid(relative) {
            return Err(format!(
                "Tolerances must be finite and non-negative, got absolute={} relative={}",
                absolute, relative
            ));
        }
        Ok(Self { absolute, relative })
    }

    /// Zero tolerance: only bitwise-equal values (and `0.0 == -0.0`) match.
    pub fn exact() -> Self {
        Self {
            absolute: 0.0,
            relative: 0.0,
        }
    }

    pub fn absolute(&self) -> f64 {
        self.absolute
    }

    pub fn relative(&self) -> f64 {
        self.relative
    }

    pub fn accepts(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        diff <= self.absolute || diff <= self.relative * a.abs().max(b.abs())
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            absolute: 1e-12,
            relative: 1e-9,
        }
    }
}

impl FromStr for ToleranceConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(ToleranceConfig::exact()),
            "default" => Ok(ToleranceConfig::default()),
            "loose" => Ok(ToleranceConfig {
                absolute: 1e-6,
                relative: 1e-6,
            }),
            _ => Err(format!(
                "Unknown tolerance preset: {}. Expected one of `exact`, `default` or `loose`",
                s
            )),
        }
    }
}
