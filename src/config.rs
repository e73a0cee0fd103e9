//! Application configuration
//!
//! Handles loading the booking shell's configuration: the remote image
//! allowlist and build flags. The configuration is a plain data record
//! loaded once at process start; nothing in this crate interprets the
//! allowlist, that is the rendering shell's job.
//!
//! Configuration files are stored in platform-specific directories:
//! - macOS: `~/Library/Application Support/bookform/config.yaml`
//! - Linux: `~/.config/bookform/config.yaml`
//! - Windows: `%APPDATA%\bookform\config.yaml`

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// One allowlisted remote image host
///
/// Mirrors the shape of a remote-pattern entry: protocol and hostname
/// are required, port and path prefix narrow the match when present.
/// This is static configuration, not matching behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteImagePattern {
    /// URL scheme, e.g. "https"
    pub protocol: String,
    /// Host serving the images, e.g. "images.unsplash.com"
    pub hostname: String,
    /// Optional port restriction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Optional path prefix restriction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,
}

/// Booking shell configuration
///
/// Immutable at runtime: loaded once at process start and passed to the
/// rendering shell. Persisted as YAML in the user's config directory,
/// falling back to the shipped defaults when no file exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hosts the shell may load booking images from
    #[serde(default)]
    pub remote_images: Vec<RemoteImagePattern>,
    /// Enables additional development-time checks in the shell
    #[serde(default = "default_strict_mode")]
    pub strict_mode: bool,
}

fn default_strict_mode() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote_images: vec![RemoteImagePattern {
                protocol: "https".to_string(),
                hostname: "images.unsplash.com".to_string(),
                port: None,
                path_prefix: None,
            }],
            strict_mode: true,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location
    ///
    /// # Returns
    /// - `Ok(Config)` with the loaded configuration, or the shipped
    ///   defaults if the file doesn't exist
    /// - `Err` if the file exists but cannot be read or parsed
    ///
    /// # Errors
    /// Returns an error if the config file exists but is malformed or
    /// unreadable.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {:?}", config_path))?;

        let config: Config =
            serde_yaml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Returns the platform-specific configuration file path
    ///
    /// Uses the `directories` crate to determine the appropriate
    /// location, falling back to `~/.config/bookform/config.yaml` if
    /// platform detection fails.
    ///
    /// # Errors
    /// Returns an error if the HOME environment variable is not set
    /// (fallback case only).
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "bookform") {
            let config_dir = proj_dirs.config_dir();
            Ok(config_dir.join("config.yaml"))
        } else {
            let home = std::env::var("HOME").context("HOME not set")?;
            Ok(PathBuf::from(home).join(".config/bookform/config.yaml"))
        }
    }
}
