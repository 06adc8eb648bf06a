// Piecewise-linear float curve, the stand-in for an externally authored
// curve asset. The rig maps boom arm length to camera pitch through one of
// these; tests substitute small deterministic tables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CurveError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurveKey {
    pub x: f32,
    pub value: f32,
}

/// Immutable key table, strictly increasing in x. Evaluation is linear
/// between keys and clamps to the end values outside the keyed range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatCurve {
    keys: Vec<CurveKey>,
}

impl FloatCurve {
    pub fn from_keys(keys: impl IntoIterator<Item = (f32, f32)>) -> Result<Self, CurveError> {
        let keys: Vec<CurveKey> = keys
            .into_iter()
            .map(|(x, value)| CurveKey { x, value })
            .collect();
        if keys.is_empty() {
            return Err(CurveError::Empty);
        }
        for i in 1..keys.len() {
            if keys[i].x <= keys[i - 1].x {
                return Err(CurveError::UnsortedKey(i));
            }
        }
        Ok(Self { keys })
    }

    /// Parse a JSON key table: `[{"x": 500.0, "value": 25.0}, ...]`.
    pub fn from_json(text: &str) -> Result<Self, CurveError> {
        let keys: Vec<CurveKey> = serde_json::from_str(text)?;
        Self::from_keys(keys.into_iter().map(|k| (k.x, k.value)))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CurveError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CurveError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn evaluate(&self, x: f32) -> f32 {
        let first = self.keys[0];
        let last = self.keys[self.keys.len() - 1];
        if x <= first.x {
            return first.value;
        }
        // Lerp across the segment containing x.
        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if x <= b.x {
                let t = (x - a.x) / (b.x - a.x);
                return a.value + (b.value - a.value) * t;
            }
        }
        last.value
    }
}
