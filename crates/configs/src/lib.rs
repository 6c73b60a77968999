use serde::Deserialize;
use thiserror::Error;

/// Process settings. The two Supabase credentials are required; everything
/// else has a default.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub supabase_url: String,
    #[serde(default)]
    pub supabase_anon_key: String,
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

fn default_app_name() -> String {
    "My FastAPI Supabase App".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            app_name: default_app_name(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting `{key}`; set the {env} environment variable")]
    Missing {
        key: &'static str,
        env: &'static str,
    },
    #[error("malformed config file `{path}`: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Settings {
    /// Load settings from an optional TOML file at `CONFIG_PATH` (default
    /// `config.toml`), then let environment variables fill anything the file
    /// left empty. A missing file is fine; missing credentials are not.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut settings = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content)
                .map_err(|source| ConfigError::Parse { path, source })?,
            Err(_) => Settings::default(),
        };
        settings.fill_from_env();
        settings.validate()?;
        Ok(settings)
    }

    fn fill_from_env(&mut self) {
        if self.supabase_url.trim().is_empty() {
            if let Ok(url) = std::env::var("SUPABASE_URL") {
                self.supabase_url = url;
            }
        }
        if self.supabase_anon_key.trim().is_empty() {
            if let Ok(key) = std::env::var("SUPABASE_ANON_KEY") {
                self.supabase_anon_key = key;
            }
        }
        if let Ok(name) = std::env::var("APP_NAME") {
            if !name.trim().is_empty() {
                self.app_name = name;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.supabase_url.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "supabase_url",
                env: "SUPABASE_URL",
            });
        }
        if self.supabase_anon_key.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "supabase_anon_key",
                env: "SUPABASE_ANON_KEY",
            });
        }
        Ok(())
    }
}
