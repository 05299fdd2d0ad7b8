// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use vitrina_app::Category;

pub const APP_NAME: &str = "vitrina";

const CONFIG_VERSION: i64 = 1;
const DEFAULT_API_BASE_URL: &str = "https://apis.ccbp.in/ps";
const DEFAULT_API_TIMEOUT: &str = "10s";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api: Api::default(),
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Api {
    pub base_url: Option<String>,
    pub timeout: Option<String>,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            base_url: Some(DEFAULT_API_BASE_URL.to_owned()),
            timeout: Some(DEFAULT_API_TIMEOUT.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub default_category: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            default_category: Some(Category::All.as_str().to_owned()),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("VITRINA_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set VITRINA_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and put values under [api] and [ui]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(base_url) = &self.api.base_url
            && base_url.trim().is_empty()
        {
            bail!("api.base_url in {} must not be empty", path.display());
        }

        if let Some(timeout) = &self.api.timeout {
            let parsed = parse_duration(timeout)?;
            if parsed <= Duration::ZERO {
                bail!(
                    "api.timeout in {} must be positive, got {}",
                    path.display(),
                    timeout
                );
            }
        }

        if let Some(category) = &self.ui.default_category
            && Category::parse(category).is_none()
        {
            bail!(
                "ui.default_category {:?} in {} is not a known category; use one of ALL, STATIC, RESPONSIVE, DYNAMIC, REACT",
                category,
                path.display()
            );
        }

        Ok(())
    }

    pub fn api_base_url(&self) -> &str {
        self.api
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn api_timeout(&self) -> Result<Duration> {
        parse_duration(self.api.timeout.as_deref().unwrap_or(DEFAULT_API_TIMEOUT))
    }

    pub fn default_category(&self) -> Category {
        self.ui
            .default_category
            .as_deref()
            .and_then(Category::parse)
            .unwrap_or(Category::All)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# vitrina config\n# Place this file at: {}\n\nversion = 1\n\n[api]\nbase_url = \"{}\"\ntimeout = \"{}\"\n\n[ui]\n# One of: ALL, STATIC, RESPONSIVE, DYNAMIC, REACT\ndefault_category = \"ALL\"\n",
            path.display(),
            DEFAULT_API_BASE_URL,
            DEFAULT_API_TIMEOUT,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_secs(mins * 60));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 10s)")
}

#[cfg(test)]
mod tests {
    use super::{Config, parse_duration};
    use anyhow::Result;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};
    use std::time::Duration;
    use vitrina_app::Category;

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert_eq!(config.api_base_url(), "https://apis.ccbp.in/ps");
        assert_eq!(config.api_timeout()?, Duration::from_secs(10));
        assert_eq!(config.default_category(), Category::All);
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[api]\nbase_url = \"https://example.test\"\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[api] and [ui]"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 9\n")?;
        let error = Config::load(&path).expect_err("v9 config should fail");
        assert!(error.to_string().contains("unsupported config version 9"));
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn v1_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[api]\nbase_url = \"http://localhost:3000\"\ntimeout = \"2s\"\n[ui]\ndefault_category = \"REACT\"\n",
        )?;
        let config = Config::load(&path)?;
        assert_eq!(config.api_base_url(), "http://localhost:3000");
        assert_eq!(config.api_timeout()?, Duration::from_secs(2));
        assert_eq!(config.default_category(), Category::React);
        Ok(())
    }

    #[test]
    fn base_url_trims_trailing_slashes() -> Result<()> {
        let (_temp, path) =
            write_config("version = 1\n[api]\nbase_url = \"https://apis.ccbp.in/ps///\"\n")?;
        let config = Config::load(&path)?;
        assert_eq!(config.api_base_url(), "https://apis.ccbp.in/ps");
        Ok(())
    }

    #[test]
    fn unknown_default_category_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\ndefault_category = \"VUE\"\n")?;
        let error = Config::load(&path).expect_err("unknown category should fail");
        let message = error.to_string();
        assert!(message.contains("not a known category"));
        assert!(message.contains("REACT"));
        Ok(())
    }

    #[test]
    fn empty_base_url_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[api]\nbase_url = \"  \"\n")?;
        let error = Config::load(&path).expect_err("blank base url should fail");
        assert!(error.to_string().contains("must not be empty"));
        Ok(())
    }

    #[test]
    fn timeout_parses_ms_seconds_and_minutes() -> Result<()> {
        assert_eq!(parse_duration("500ms")?, Duration::from_millis(500));
        assert_eq!(parse_duration("10s")?, Duration::from_secs(10));
        assert_eq!(parse_duration("2m")?, Duration::from_secs(120));
        Ok(())
    }

    #[test]
    fn timeout_rejects_invalid_duration() {
        let error = parse_duration("oops").expect_err("invalid duration should fail");
        let message = error.to_string();
        assert!(
            message.contains("invalid duration") || message.contains("invalid timeout duration"),
            "unexpected message: {message}"
        );
    }

    #[test]
    fn zero_timeout_is_rejected_in_config() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[api]\ntimeout = \"0s\"\n")?;
        let error = Config::load(&path).expect_err("zero timeout should fail");
        assert!(error.to_string().contains("must be positive"));
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("VITRINA_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("VITRINA_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn default_path_uses_config_toml_suffix_when_no_env_override() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("VITRINA_CONFIG_PATH");
        }
        let path = Config::default_path()?;
        assert!(path.ends_with("config.toml"));
        Ok(())
    }

    #[test]
    fn example_config_includes_required_sections() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        let example = Config::example_config(&path);
        assert!(example.contains("version = 1"));
        assert!(example.contains("[api]"));
        assert!(example.contains("[ui]"));
        assert!(example.contains("apis.ccbp.in/ps"));
        Ok(())
    }
}
