//! Bow modes
//!
//! Three fixed bow profiles, each scaling launch power and spread.

use serde::{Deserialize, Serialize};

/// Selectable bow profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BowMode {
    #[default]
    Standard,
    Power,
    Precision,
}

impl BowMode {
    pub const ALL: [BowMode; 3] = [BowMode::Standard, BowMode::Power, BowMode::Precision];

    /// Id as supplied by the bow selector
    pub fn id(&self) -> &'static str {
        match self {
            BowMode::Standard => "standard",
            BowMode::Power => "power",
            BowMode::Precision => "precision",
        }
    }

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            BowMode::Standard => "Standard",
            BowMode::Power => "Power",
            BowMode::Precision => "Precision",
        }
    }

    pub fn from_id(id: &str) -> Result<Self, InvalidModeError> {
        match id {
            "standard" => Ok(BowMode::Standard),
            "power" => Ok(BowMode::Power),
            "precision" => Ok(BowMode::Precision),
            _ => Err(InvalidModeError { id: id.to_string() }),
        }
    }

    /// Multipliers for this mode
    pub fn spec(&self) -> BowModeSpec {
        match self {
            BowMode::Standard => BowModeSpec {
                mode: *self,
                power_multiplier: 1.0,
                accuracy_multiplier: 1.0,
            },
            BowMode::Power => BowModeSpec {
                mode: *self,
                power_multiplier: 1.5,
                accuracy_multiplier: 0.6,
            },
            BowMode::Precision => BowModeSpec {
                mode: *self,
                power_multiplier: 0.7,
                accuracy_multiplier: 1.4,
            },
        }
    }
}

impl std::fmt::Display for BowMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Power/accuracy profile of a bow mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BowModeSpec {
    pub mode: BowMode,
    pub power_multiplier: f32,
    pub accuracy_multiplier: f32,
}

impl BowModeSpec {
    /// Total random spread in degrees; the launch angle moves by up to half
    /// of this either way. Lower accuracy widens the spread.
    pub fn spread_degrees(&self) -> f32 {
        (2.0 - self.accuracy_multiplier) * 20.0
    }

    /// Wind multiplier for this mode (the power bow catches more wind)
    pub fn wind_factor(&self, power_wind_factor: f32) -> f32 {
        if self.mode == BowMode::Power {
            power_wind_factor
        } else {
            1.0
        }
    }
}

/// Registry of bow profiles keyed by id
pub struct BowModeTable;

impl BowModeTable {
    /// Strict lookup
    pub fn lookup(id: &str) -> Result<BowModeSpec, InvalidModeError> {
        BowMode::from_id(id).map(|mode| mode.spec())
    }

    /// Lookup that falls back to the standard bow on an unknown id
    pub fn resolve(id: &str) -> BowModeSpec {
        match Self::lookup(id) {
            Ok(spec) => spec,
            Err(e) => {
                log::warn!("{} - falling back to {}", e, BowMode::Standard);
                BowMode::Standard.spec()
            }
        }
    }
}

/// Unknown bow mode id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidModeError {
    pub id: String,
}

impl std::fmt::Display for InvalidModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown bow mode '{}'", self.id)
    }
}

impl std::error::Error for InvalidModeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_modes() {
        for mode in BowMode::ALL {
            let spec = BowModeTable::lookup(mode.id()).unwrap();
            assert_eq!(spec.mode, mode);
        }
        let power = BowModeTable::lookup("power").unwrap();
        assert_eq!(power.power_multiplier, 1.5);
        assert_eq!(power.accuracy_multiplier, 0.6);
    }

    #[test]
    fn test_lookup_unknown_is_error() {
        let err = BowModeTable::lookup("crossbow").unwrap_err();
        assert_eq!(err.id, "crossbow");
        assert_eq!(err.to_string(), "unknown bow mode 'crossbow'");
        // Ids are case sensitive
        assert!(BowModeTable::lookup("Standard").is_err());
    }

    #[test]
    fn test_resolve_falls_back_to_standard() {
        assert_eq!(BowModeTable::resolve("").mode, BowMode::Standard);
        assert_eq!(BowModeTable::resolve("precision").mode, BowMode::Precision);
    }

    #[test]
    fn test_spread() {
        assert!((BowMode::Standard.spec().spread_degrees() - 20.0).abs() < 1e-5);
        assert!((BowMode::Power.spec().spread_degrees() - 28.0).abs() < 1e-5);
        assert!((BowMode::Precision.spec().spread_degrees() - 12.0).abs() < 1e-5);
    }

    #[test]
    fn test_wind_factor() {
        assert_eq!(BowMode::Power.spec().wind_factor(1.5), 1.5);
        assert_eq!(BowMode::Standard.spec().wind_factor(1.5), 1.0);
        assert_eq!(BowMode::Precision.spec().wind_factor(1.5), 1.0);
    }

    #[test]
    fn test_serde_uses_ids() {
        assert_eq!(serde_json::to_string(&BowMode::Precision).unwrap(), "\"precision\"");
        let mode: BowMode = serde_json::from_str("\"power\"").unwrap();
        assert_eq!(mode, BowMode::Power);
    }
}
