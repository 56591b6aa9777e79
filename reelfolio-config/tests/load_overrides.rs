use std::fs;
use std::sync::Mutex;

use reelfolio_config::loader::{CONFIG_JSON_VAR, CONFIG_PATH_VAR};
use reelfolio_config::{MotionConfigSource, MotionFileConfig};
use tempfile::tempdir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_overrides() {
    unsafe {
        std::env::remove_var(CONFIG_PATH_VAR);
        std::env::remove_var(CONFIG_JSON_VAR);
    }
}

#[test]
fn toml_file_from_env_path() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("motion.toml");
    fs::write(
        &path,
        r#"
[marquee]
base_velocity = 4.0
wrap_min = -40.0
wrap_max = -15.0

[spring]
stiffness = 500.0
damping = 60.0

[reels]
period_ms = 20000
"#,
    )
    .expect("write config");

    unsafe { std::env::set_var(CONFIG_PATH_VAR, &path) };
    let (config, source) = MotionFileConfig::load_from_env().expect("loads");
    clear_overrides();

    assert_eq!(source, MotionConfigSource::EnvPath(path));
    assert_eq!(config.marquee.base_velocity, Some(4.0));
    assert_eq!(config.marquee.wrap_min, Some(-40.0));
    assert_eq!(config.spring.damping, Some(60.0));
    assert_eq!(config.reels.period_ms, Some(20_000));
    assert!(config.validate().expect("valid").is_empty());
}

#[test]
fn inline_json_from_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();

    unsafe {
        std::env::set_var(
            CONFIG_JSON_VAR,
            r#"{"navigation": {"lookahead": 120.0}, "reveal": {"margin": 40.0}}"#,
        )
    };
    let (config, source) = MotionFileConfig::load_from_env().expect("loads");
    clear_overrides();

    assert_eq!(source, MotionConfigSource::EnvInline);
    assert_eq!(config.navigation.lookahead, Some(120.0));
    assert_eq!(config.reveal.margin, Some(40.0));
    assert_eq!(config.marquee, Default::default());
}

#[test]
fn json_file_with_bad_values_fails_validation() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("motion.json");
    fs::write(&path, r#"{"reels": {"period_ms": 0}}"#).expect("write");

    let config = MotionFileConfig::load_from_file(&path).expect("parses");
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("reels.period_ms"));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let err = MotionFileConfig::load_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}
