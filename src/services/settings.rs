use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key-value lookup of string settings owned by the host.
///
/// Missing keys resolve to an empty string.
pub trait SettingsSource {
    fn app_value(&self, key: &str) -> String;
}

impl SettingsSource for BTreeMap<String, String> {
    fn app_value(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_default()
    }
}

/// Settings file layered over process environment variables of the same name.
#[derive(Debug, Default, Clone)]
pub struct HostSettings {
    values: BTreeMap<String, String>,
    use_env: bool,
}

impl HostSettings {
    pub fn from_env() -> Self {
        Self {
            values: BTreeMap::new(),
            use_env: true,
        }
    }

    /// Loads a flat JSON object of string settings. A missing file yields
    /// environment-only settings.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("event=settings_load status=missing path={}", path.display());
            return Ok(Self::from_env());
        }
        let raw = std::fs::read_to_string(path)?;
        let parsed: BTreeMap<String, serde_json::Value> = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("invalid settings file {}: {}", path.display(), e))?;
        let values = parsed
            .into_iter()
            .filter_map(|(k, v)| match v {
                serde_json::Value::String(s) => Some((k, s)),
                serde_json::Value::Null => None,
                other => Some((k, other.to_string())),
            })
            .collect();
        debug!("event=settings_load status=ok path={}", path.display());
        Ok(Self {
            values,
            use_env: true,
        })
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }
}

impl SettingsSource for HostSettings {
    fn app_value(&self, key: &str) -> String {
        match self.values.get(key) {
            Some(v) if !v.is_empty() => v.clone(),
            _ if self.use_env => std::env::var(key).unwrap_or_default(),
            _ => String::new(),
        }
    }
}

pub fn default_settings_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/zenodo/settings.json"))
}
