use anyhow::{Context, anyhow};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::models::MotionFileConfig;
use crate::validation::ConfigWarnings;

/// Environment variable naming an override file (TOML or JSON).
pub const CONFIG_PATH_VAR: &str = "REELFOLIO_MOTION_CONFIG_PATH";
/// Environment variable carrying inline JSON overrides.
pub const CONFIG_JSON_VAR: &str = "REELFOLIO_MOTION_CONFIG_JSON";

/// Source that produced the motion overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MotionConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Validated overrides plus where they came from and what looked off.
#[derive(Debug, Clone, Default)]
pub struct MotionConfigLoad {
    pub config: MotionFileConfig,
    pub source: MotionConfigSource,
    pub warnings: ConfigWarnings,
}

impl MotionConfigLoad {
    /// Resolve, parse and validate overrides from the environment.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("loaded environment from {}", path.display());
        }

        let (config, source) = MotionFileConfig::load_from_env()?;
        let warnings = config
            .validate()
            .with_context(|| format!("rejected motion overrides from {source:?}"))?;

        for warning in warnings.iter() {
            tracing::warn!("motion config: {warning}");
        }
        tracing::info!(?source, "motion overrides loaded");

        Ok(Self {
            config,
            source,
            warnings,
        })
    }
}

impl MotionFileConfig {
    /// Load overrides using environment variables.
    /// Evaluation order:
    /// 1) `$REELFOLIO_MOTION_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$REELFOLIO_MOTION_CONFIG_JSON` (inline JSON),
    /// 3) the first default file found in the working directory,
    /// 4) no overrides.
    pub fn load_from_env() -> anyhow::Result<(Self, MotionConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, MotionConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, MotionConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, MotionConfigSource::File(path)));
        }

        Ok((Self::default(), MotionConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read motion config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid motion config {}", path.display())
            }),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid motion config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse motion config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid motion config json: {err}"))
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "motion.toml",
            "motion.json",
            "config/motion.toml",
            "config/motion.json",
        ];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_sections_are_optional() {
        let parsed = MotionFileConfig::parse_from_str(
            "[marquee]\nbase_velocity = 2.5\n",
            "inline",
        )
        .expect("parses");
        assert_eq!(parsed.marquee.base_velocity, Some(2.5));
        assert_eq!(parsed.spring.stiffness, None);
        assert_eq!(parsed.reels.period_ms, None);
    }

    #[test]
    fn json_is_accepted_as_fallback() {
        let parsed = MotionFileConfig::parse_from_str(
            r#"{"spring": {"stiffness": 300.0, "damping": 40.0}}"#,
            "inline",
        )
        .expect("parses");
        assert_eq!(parsed.spring.stiffness, Some(300.0));
        assert_eq!(parsed.spring.damping, Some(40.0));
    }

    #[test]
    fn unknown_keys_are_reported() {
        let err = MotionFileConfig::parse_from_str(
            "[marquee]\nspeed = 3.0\n",
            "inline",
        )
        .unwrap_err();
        assert!(err.to_string().contains("inline"));
    }
}
