use thiserror::Error;

/// Failures loading the externally authored pitch-by-zoom curve.
///
/// Nothing in the per-frame camera path is fallible; these only surface at
/// startup while configuration is being read.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("curve file '{path}' could not be read")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("curve file is not a valid key table")]
    Parse(#[from] serde_json::Error),
    #[error("curve needs at least one key")]
    Empty,
    #[error("curve keys must be strictly increasing (key {0})")]
    UnsortedKey(usize),
}
