use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;

/// Longest full path (in characters) a proposed rename may produce.
pub const DEFAULT_MAX_PATH_LEN: usize = 240;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_max_path_len")]
    pub max_path_len: usize,
    #[serde(default)]
    pub start_dir: Option<String>,
}

fn default_max_path_len() -> usize {
    DEFAULT_MAX_PATH_LEN
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_path_len: DEFAULT_MAX_PATH_LEN,
            start_dir: None,
        }
    }
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .set_default("max_path_len", DEFAULT_MAX_PATH_LEN as u64)?
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
