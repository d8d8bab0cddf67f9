use serde::{Deserialize, Serialize};
use socialhub_types::Author;
use std::fmt;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE: &str = "socialhub.log";

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    /// IO operation failed
    Io(std::io::Error),

    /// config.toml could not be parsed or written
    Toml(String),

    /// Viewer identity parsed but failed validation
    Invalid(socialhub_types::Error),

    /// `[ui]` values parsed but are out of range
    InvalidUi(String),

    /// No usable data directory
    NoDataDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Toml(msg) => write!(f, "Configuration error: {}", msg),
            ConfigError::Invalid(err) => write!(f, "Invalid configuration: {}", err),
            ConfigError::InvalidUi(msg) => write!(f, "Invalid configuration: {}", msg),
            ConfigError::NoDataDir => write!(
                f,
                "Could not determine data directory: no HOME directory or XDG data directory found"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Invalid(err) => Some(err),
            ConfigError::Toml(_) | ConfigError::InvalidUi(_) | ConfigError::NoDataDir => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Toml(err.to_string())
    }
}

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SOCIALHUB_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.socialhub
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    let env_path = std::env::var("SOCIALHUB_PATH").ok();
    resolve_data_dir_with(explicit_path, env_path.as_deref())
}

fn resolve_data_dir_with(explicit_path: Option<&str>, env_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Some(env_path) = env_path {
        return Ok(expand_tilde(env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("socialhub"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".socialhub"));
    }

    Err(ConfigError::NoDataDir)
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Identity used for posts published from the composer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub name: String,
    pub handle: String,
    pub avatar: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let viewer = socialhub_engine::seed::default_viewer();
        Self {
            name: viewer.name,
            handle: viewer.handle,
            avatar: viewer.avatar,
        }
    }
}

impl ViewerConfig {
    pub fn to_author(&self) -> Author {
        Author::new(&self.name, &self.handle, &self.avatar)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval of the TUI loop
    pub tick_rate_ms: u64,
    /// Show the navigation column when the terminal is wide enough
    pub show_sidebar: bool,
    /// Show the recommendations/trends column when the terminal is wide enough
    pub show_discovery: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            show_sidebar: true,
            show_discovery: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.viewer
            .to_author()
            .validate()
            .map_err(ConfigError::Invalid)?;

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidUi(
                "ui.tick_rate_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
