use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL_ID: &str = "fal-ai/flux/dev";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Settings for the fal.ai synchronous generation API.
#[derive(Debug, Clone)]
pub struct FalConfig {
    pub api_key: Option<String>,
    pub model_id: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for FalConfig {
    fn default() -> Self {
        FalConfig {
            api_key: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            endpoint: format!("https://fal.run/{}", DEFAULT_MODEL_ID),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("FAL_API_KEY").ok().filter(|key| !key.is_empty());
        let model_id = env::var("FAL_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string());
        // fal.run synchronous endpoints are addressed by model id
        let endpoint = env::var("FAL_API_ENDPOINT")
            .unwrap_or_else(|_| format!("https://fal.run/{}", model_id));
        let timeout_secs = env::var("FAL_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        FalConfig {
            api_key,
            model_id,
            endpoint,
            timeout_secs,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        let model_id = model_id.into();
        self.endpoint = format!("https://fal.run/{}", model_id);
        self.model_id = model_id;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn placeholder_mode(&self) -> bool {
        self.api_key.is_none()
    }
}

/// Top-level service configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: Option<u16>,
    pub static_dir: PathBuf,
    pub fal: FalConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: None,
            static_dir: PathBuf::from("static"),
            fal: FalConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Config {
            port,
            static_dir,
            fal: FalConfig::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    pub fn with_fal(mut self, config: FalConfig) -> Self {
        self.fal = config;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fal_config() {
        let config = FalConfig::new();
        assert!(config.api_key.is_none());
        assert!(config.placeholder_mode());
        assert_eq!(config.model_id, DEFAULT_MODEL_ID);
        assert_eq!(config.endpoint, "https://fal.run/fal-ai/flux/dev");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_with_model_id_rederives_endpoint() {
        let config = FalConfig::new().with_model_id("fal-ai/fast-sdxl");
        assert_eq!(config.endpoint, "https://fal.run/fal-ai/fast-sdxl");
    }

    #[test]
    fn test_explicit_endpoint_wins() {
        let config = FalConfig::new()
            .with_model_id("fal-ai/fast-sdxl")
            .with_endpoint("http://127.0.0.1:9999/generate");
        assert_eq!(config.endpoint, "http://127.0.0.1:9999/generate");
        assert_eq!(config.model_id, "fal-ai/fast-sdxl");
    }

    #[test]
    fn test_api_key_disables_placeholder_mode() {
        let config = FalConfig::new().with_api_key("secret");
        assert!(!config.placeholder_mode());
    }

    #[test]
    fn test_fal_config_from_env() {
        env::set_var("FAL_MODEL_ID", "fal-ai/fast-sdxl");
        env::remove_var("FAL_API_ENDPOINT");
        env::remove_var("FAL_API_KEY");

        let config = FalConfig::from_env();
        assert_eq!(config.model_id, "fal-ai/fast-sdxl");
        assert_eq!(config.endpoint, "https://fal.run/fal-ai/fast-sdxl");
        assert!(config.placeholder_mode());

        env::remove_var("FAL_MODEL_ID");
    }

    #[test]
    fn test_config_builders() {
        let config = Config::new()
            .with_port(8081)
            .with_static_dir("/tmp/images")
            .with_fal(FalConfig::new().with_timeout(5));
        assert_eq!(config.port, Some(8081));
        assert_eq!(config.static_dir, PathBuf::from("/tmp/images"));
        assert_eq!(config.fal.timeout_secs, 5);
    }
}
