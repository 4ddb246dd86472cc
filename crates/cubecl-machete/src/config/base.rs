use super::logger::{LoggerConfig, SelectionLogLevel};
use std::sync::Arc;

/// Static mutex holding the global configuration, initialized as `None`.
static MACHETE_GLOBAL_CONFIG: spin::Mutex<Option<Arc<MacheteConfig>>> = spin::Mutex::new(None);

/// Configuration of the Machete kernel selection.
#[derive(Default, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MacheteConfig {
    /// When set, every problem is rejected so another kernel gets selected.
    #[serde(default)]
    pub disabled: bool,

    /// Configuration for logging selection decisions.
    #[serde(default)]
    pub logger: LoggerConfig,
}

impl MacheteConfig {
    /// Retrieves the current global configuration, loading it from the current directory if not set.
    ///
    /// If no configuration is set, it attempts to load one from `machete.toml` in the current
    /// directory or its parents, then applies the environment overrides. If no file is found, a
    /// default configuration is used.
    pub fn get() -> Arc<Self> {
        let mut state = MACHETE_GLOBAL_CONFIG.lock();

        if let Some(config) = state.as_ref() {
            return config.clone();
        }

        let config = Arc::new(Self::from_current_dir().override_from_env());
        *state = Some(config.clone());

        config
    }

    /// Sets the global configuration to the provided value.
    ///
    /// # Panics
    /// Panics if the configuration has already been set or read, as it cannot be overridden.
    pub fn set(config: Self) {
        let mut state = MACHETE_GLOBAL_CONFIG.lock();
        if state.is_some() {
            panic!("Cannot set the global configuration multiple times.");
        }
        *state = Some(Arc::new(config));
    }

    /// Parses a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Overrides configuration fields based on environment variables.
    ///
    /// - `MACHETE_DISABLED`: `1`/`true` disables the kernel, `0`/`false` enables it.
    /// - `MACHETE_LOG_LEVEL`: `disabled`, `minimal` or `full`.
    pub fn override_from_env(mut self) -> Self {
        if let Ok(val) = std::env::var("MACHETE_DISABLED") {
            match val.as_str() {
                "1" | "true" => self.disabled = true,
                "0" | "false" => self.disabled = false,
                _ => {}
            }
        }

        if let Ok(val) = std::env::var("MACHETE_LOG_LEVEL")
            && let Some(level) = SelectionLogLevel::parse(&val)
        {
            self.logger.level = level;
        }

        self
    }

    // Traverses up the directory tree until a `machete.toml` file is found or the root is reached.
    fn from_current_dir() -> Self {
        let Ok(mut dir) = std::env::current_dir() else {
            return Self::default();
        };

        loop {
            if let Ok(content) = Self::from_file_path(dir.join("machete.toml")) {
                return content;
            }

            if !dir.pop() {
                break;
            }
        }

        Self::default()
    }

    fn from_file_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = match Self::from_toml(&content) {
            Ok(val) => val,
            Err(err) => panic!("The file provided doesn't have the right format => {err:?}"),
        };

        Ok(config)
    }
}
