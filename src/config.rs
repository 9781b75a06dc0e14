use crate::errors::{MeshError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry and resolution settings for a generated airfoil solid. Every field has a default, so
/// a JSON file only needs to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Geometric chord length
    pub chord: f64,

    /// Extent of the solid along the span (y) axis, centered on y = 0
    pub span: f64,

    /// Number of cosine spaced stations along the chord (Ni)
    pub points: usize,

    /// Name written after `solid` / `endsolid` in the facet file
    pub solid_name: String,
}

impl Default for MeshConfig {
    fn default() -> Self {
        MeshConfig {
            chord: 1.0,
            span: 2.0,
            points: 1000,
            solid_name: "airfoil".to_string(),
        }
    }
}

impl MeshConfig {
    pub fn chord(mut self, chord: f64) -> Self {
        self.chord = chord;
        self
    }

    pub fn span(mut self, span: f64) -> Self {
        self.span = span;
        self
    }

    pub fn points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn solid_name(mut self, name: &str) -> Self {
        self.solid_name = name.to_string();
        self
    }

    pub fn from_json_str(text: &str) -> Result<MeshConfig> {
        let config: MeshConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<MeshConfig> {
        let text = std::fs::read_to_string(path).map_err(|e| MeshError::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// Check that the values describe a solid which can actually be built
    pub fn validate(&self) -> Result<()> {
        if !(self.chord.is_finite() && self.chord > 0.0) {
            return Err(MeshError::InvalidParameter(format!(
                "chord must be a positive finite length, got {}",
                self.chord
            )));
        }
        if !(self.span.is_finite() && self.span > 0.0) {
            return Err(MeshError::InvalidParameter(format!(
                "span must be a positive finite length, got {}",
                self.span
            )));
        }
        if self.points < 3 {
            return Err(MeshError::InvalidParameter(format!(
                "at least 3 chordwise points are needed, got {}",
                self.points
            )));
        }
        if self.solid_name.is_empty() || self.solid_name.contains(char::is_whitespace) {
            return Err(MeshError::InvalidParameter(format!(
                "solid name must be a single non-empty word, got {:?}",
                self.solid_name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn defaults_match_reference_setup() {
        let c = MeshConfig::default();
        assert_eq!(c.chord, 1.0);
        assert_eq!(c.span, 2.0);
        assert_eq!(c.points, 1000);
        assert_eq!(c.solid_name, "airfoil");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = MeshConfig::from_json_str(r#"{"span": 0.5, "points": 200}"#).unwrap();
        assert_eq!(c.span, 0.5);
        assert_eq!(c.points, 200);
        assert_eq!(c.chord, 1.0);
        assert_eq!(c.solid_name, "airfoil");
    }

    #[test]
    fn malformed_json_is_config_error() {
        let r = MeshConfig::from_json_str(r#"{"span": "wide"}"#);
        assert!(matches!(r, Err(MeshError::Config(_))));
    }

    #[test_case(MeshConfig::default().chord(0.0) ; "zero chord")]
    #[test_case(MeshConfig::default().chord(f64::NAN) ; "nan chord")]
    #[test_case(MeshConfig::default().span(-1.0) ; "negative span")]
    #[test_case(MeshConfig::default().points(2) ; "too few points")]
    #[test_case(MeshConfig::default().solid_name("my foil") ; "name with space")]
    fn invalid_configs_are_rejected(config: MeshConfig) {
        assert!(matches!(
            config.validate(),
            Err(MeshError::InvalidParameter(_))
        ));
    }

    #[test]
    fn json_round_trip_of_defaults() {
        let text = serde_json::to_string(&MeshConfig::default()).unwrap();
        assert_eq!(MeshConfig::from_json_str(&text).unwrap(), MeshConfig::default());
    }
}
