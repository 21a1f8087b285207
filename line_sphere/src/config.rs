//! Detection settings shared by the library and the command line tool.

/// Precision used when the caller does not supply one.
pub const DEFAULT_PRECISION: f64 = 0.001;

/// Upper bound on the number of samples a single detection may allocate.
pub const DEFAULT_MAX_SAMPLES: usize = 10_000_000;

/// Tunable parameters for a detection run.
///
/// The same `precision` drives the sampling step, the half-width of the
/// acceptance shell and the merge tolerance. Missing fields in a JSON file
/// fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub precision: f64,
    /// Requests needing more samples than this are rejected.
    pub max_samples: usize,
    /// Lower bound on the azimuthal resolution of the exported sphere grid.
    pub min_surface_resolution: usize,
    /// Upper bound on the azimuthal resolution of the exported sphere grid.
    pub max_surface_resolution: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_samples: DEFAULT_MAX_SAMPLES,
            min_surface_resolution: 100,
            max_surface_resolution: 400,
        }
    }
}

impl DetectionConfig {
    /// Creates a configuration with the given precision and default limits.
    pub fn with_precision(precision: f64) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Saves this configuration to a JSON file.
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: &str) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: DetectionConfig = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }
}
