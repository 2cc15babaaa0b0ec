//! # Bootstrap Configuration
//!
//! Plain-data configuration records for the bootstrap, with defaults matching
//! the classic first-triangle setup: an 800x600 non-resizable window titled
//! "Vulkan" and a "Hello Triangle" application targeting Vulkan 1.2.
//!
//! Records are serializable so applications can keep their settings in a TOML
//! file, and every record validates itself before any platform resource is
//! acquired.

use serde::{Deserialize, Serialize};

/// Configuration trait for records that can be persisted to disk
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        if !path.ends_with(".toml") {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Vulkan API version the instance is created against
///
/// The instance advertises the highest core version the application intends
/// to use. Drivers may expose a higher version; asking for more than the
/// loader supports fails instance creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiVersion {
    /// Vulkan 1.0
    V1_0,
    /// Vulkan 1.1
    V1_1,
    /// Vulkan 1.2
    V1_2,
    /// Vulkan 1.3
    V1_3,
}

/// Window configuration
///
/// The bootstrap window is always non-resizable; swapchain recreation on
/// resize belongs to a later stage of a renderer, so nothing here lets the
/// dimensions change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
}

impl WindowConfig {
    /// Create a window configuration with the given title and default size
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: 800,
            height: 600,
        }
    }

    /// Set the window dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Window dimensions must be nonzero, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("Vulkan")
    }
}

/// Application metadata handed to the driver at instance creation
///
/// Purely informational from the application's point of view; drivers use it
/// to key app-specific behavior. The API version is the one functional field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDescriptor {
    /// Application name
    pub application_name: String,
    /// Application version (major, minor, patch)
    pub application_version: (u32, u32, u32),
    /// Engine name
    pub engine_name: String,
    /// Engine version (major, minor, patch)
    pub engine_version: (u32, u32, u32),
    /// Vulkan API version to target
    pub api_version: ApiVersion,
}

impl ApplicationDescriptor {
    /// Create a descriptor with the given application name
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            application_version: (1, 0, 0),
            engine_name: "No Engine".to_string(),
            engine_version: (1, 0, 0),
            api_version: ApiVersion::V1_2,
        }
    }

    /// Set the application version
    pub fn with_version(mut self, major: u32, minor: u32, patch: u32) -> Self {
        self.application_version = (major, minor, patch);
        self
    }

    /// Set the engine name and version
    pub fn with_engine(mut self, name: impl Into<String>, version: (u32, u32, u32)) -> Self {
        self.engine_name = name.into();
        self.engine_version = version;
        self
    }

    /// Set the target API version
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Validate the descriptor
    ///
    /// Names cross the FFI boundary as C strings, so embedded NUL bytes are
    /// rejected here rather than at conversion time.
    pub fn validate(&self) -> Result<(), String> {
        if self.application_name.is_empty() {
            return Err("Application name cannot be empty".to_string());
        }
        if self.application_name.contains('\0') {
            return Err("Application name cannot contain NUL bytes".to_string());
        }
        if self.engine_name.is_empty() {
            return Err("Engine name cannot be empty".to_string());
        }
        if self.engine_name.contains('\0') {
            return Err("Engine name cannot contain NUL bytes".to_string());
        }
        Ok(())
    }
}

impl Default for ApplicationDescriptor {
    fn default() -> Self {
        Self::new("Hello Triangle")
    }
}

/// Top-level configuration for the bootstrap
///
/// This is the record applications hand to `App::new`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Application metadata for instance creation
    pub application: ApplicationDescriptor,
}

impl BootstrapConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.application.validate()?;
        Ok(())
    }
}

impl Config for BootstrapConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Vulkan");
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
    }

    #[test]
    fn test_application_descriptor_defaults() {
        let descriptor = ApplicationDescriptor::default();
        assert_eq!(descriptor.application_name, "Hello Triangle");
        assert_eq!(descriptor.application_version, (1, 0, 0));
        assert_eq!(descriptor.engine_name, "No Engine");
        assert_eq!(descriptor.engine_version, (1, 0, 0));
        assert_eq!(descriptor.api_version, ApiVersion::V1_2);
    }

    #[test]
    fn test_window_config_builder() {
        let config = WindowConfig::new("Test").with_size(1280, 720);
        assert_eq!(config.title, "Test");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 720);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(WindowConfig::new("Test").with_size(0, 600).validate().is_err());
        assert!(WindowConfig::new("Test").with_size(800, 0).validate().is_err());
        assert!(WindowConfig::new("Test").with_size(800, 600).validate().is_ok());
    }

    #[test]
    fn test_empty_application_name_rejected() {
        let descriptor = ApplicationDescriptor::new("");
        assert!(descriptor.validate().is_err());
    }

    #[test]
    fn test_empty_engine_name_rejected() {
        let descriptor = ApplicationDescriptor::new("App").with_engine("", (1, 0, 0));
        assert!(descriptor.validate().is_err());
    }

    #[test]
    fn test_nul_in_names_rejected() {
        let descriptor = ApplicationDescriptor::new("bad\0name");
        assert!(descriptor.validate().is_err());

        let descriptor = ApplicationDescriptor::new("app").with_engine("bad\0engine", (1, 0, 0));
        assert!(descriptor.validate().is_err());
    }

    #[test]
    fn test_bootstrap_config_validates_all_sections() {
        let mut config = BootstrapConfig::default();
        assert!(config.validate().is_ok());

        config.window.width = 0;
        assert!(config.validate().is_err());

        config.window.width = 800;
        config.application.application_name.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bootstrap_config_from_toml() {
        let source = r#"
            [window]
            title = "Demo"
            width = 640
            height = 480

            [application]
            application_name = "Demo App"
            application_version = [0, 2, 1]
            engine_name = "No Engine"
            engine_version = [1, 0, 0]
            api_version = "V1_1"
        "#;

        let config: BootstrapConfig = toml::from_str(source).expect("valid TOML");
        assert_eq!(config.window.title, "Demo");
        assert_eq!(config.window.width, 640);
        assert_eq!(config.application.application_version, (0, 2, 1));
        assert_eq!(config.application.api_version, ApiVersion::V1_1);
    }

    #[test]
    fn test_config_file_round_trip() {
        let path_buf = std::env::temp_dir().join("vk_bootstrap_round_trip.toml");
        let path = path_buf.to_str().expect("temp path is valid UTF-8");

        let config = BootstrapConfig::default();
        config.save_to_file(path).expect("save default config");
        let loaded = BootstrapConfig::load_from_file(path).expect("load saved config");
        assert_eq!(loaded, config);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_unsupported_format_rejected() {
        let config = BootstrapConfig::default();
        assert!(matches!(
            config.save_to_file("settings.ron"),
            Err(ConfigError::UnsupportedFormat(_))
        ));

        // The extension check on load happens after the read, so the file
        // must exist to reach it.
        let path_buf = std::env::temp_dir().join("vk_bootstrap_wrong_format.ron");
        let path = path_buf.to_str().expect("temp path is valid UTF-8");
        std::fs::write(path, "").expect("write placeholder");
        assert!(matches!(
            BootstrapConfig::load_from_file(path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = BootstrapConfig::load_from_file("no_such_directory/no_such_file.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
