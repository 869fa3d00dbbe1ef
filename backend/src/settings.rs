//! Service settings loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::CourseResolution;

fn default_seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("seed.json")
}

/// Configuration layered from CLI flags, `ENROLLMENT_*` variables and files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ENROLLMENT")]
pub struct EnrollmentSettings {
    /// Reject writes naming course identifiers that do not exist.
    #[ortho_config(default = false)]
    pub strict_course_resolution: bool,
    /// Load the seed fixture on startup.
    #[ortho_config(default = false)]
    pub seed_enabled: bool,
    /// Optional seed fixture path override.
    pub seed_path: Option<PathBuf>,
}

impl EnrollmentSettings {
    /// Course resolution policy selected by the strictness flag.
    pub fn course_resolution(&self) -> CourseResolution {
        CourseResolution::from_strict_flag(self.strict_course_resolution)
    }

    /// Return the configured seed path, falling back to the bundled fixture.
    pub fn seed_path(&self) -> PathBuf {
        self.seed_path.clone().unwrap_or_else(default_seed_path)
    }
}
