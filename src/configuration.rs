use std::time::Duration;

use serde_aux::field_attributes::deserialize_number_from_string;
use url::Url;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub form_backend: FormBackendSettings,
    pub form: FormSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct FormBackendSettings {
    pub base_url: String,
    pub form_id: String,
    #[serde(default)]
    pub timeout_milliseconds: Option<u64>,
}

impl FormBackendSettings {
    /// Hosted forms live under `/f/{form_id}`, below any path on `base_url`.
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        let mut base_url = Url::parse(&self.base_url)?;
        // `join` replaces the last segment unless the path ends with `/`.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        base_url.join(&format!("f/{}", self.form_id))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct FormSettings {
    pub submit_label: String,
    pub sending_label: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub success_display_milliseconds: u64,
}

impl FormSettings {
    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_milliseconds)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?
        .join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    config::Config::builder()
        .add_source(config::File::from(base_path.join("base")).required(true))
        .add_source(config::File::from(base_path.join(environment.as_str())).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
