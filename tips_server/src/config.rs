//! Configuration file support for the page server.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags. Mount points are explicit here; nothing is registered
//! globally.
//!
//! ```toml
//! bind = "0.0.0.0"
//! port = 8080
//! route = "/energy-saving-tips"
//! asset_base = "/assets"
//! assets_dir = "client/src/components/assets/images"
//! inline_css = true
//! log_level = "info"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use energy_tips_page::PageAssets;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to listen on
    pub bind: String,
    /// TCP port (0 picks a free one)
    pub port: u16,
    /// Path the page is mounted at
    pub route: String,
    /// URL prefix the images are published under
    pub asset_base: String,
    /// Directory holding the five image files; images 404 when unset
    pub assets_dir: Option<PathBuf>,
    /// Embed the stylesheet in the page head
    pub inline_css: bool,
    /// Default log level when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 8080,
            route: "/energy-saving-tips".into(),
            asset_base: "/assets".into(),
            assets_dir: None,
            inline_css: true,
            log_level: "info".into(),
        }
    }
}

impl ServerConfig {
    /// `bind:port` as passed to the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Asset settings handed to the page renderer.
    pub fn page_assets(&self) -> PageAssets {
        PageAssets {
            base_url: self.asset_base.clone(),
            inline_css: self.inline_css,
        }
    }

    /// Check that the mount points can coexist.
    pub fn validate(&self) -> Result<(), ServerError> {
        if !self.route.starts_with('/') {
            return Err(ServerError::InvalidConfig(format!(
                "route must start with '/': {:?}",
                self.route
            )));
        }
        if !self.asset_base.starts_with('/') {
            return Err(ServerError::InvalidConfig(format!(
                "asset_base must start with '/': {:?}",
                self.asset_base
            )));
        }
        let route = self.route.trim_end_matches('/');
        let assets = self.asset_base.trim_end_matches('/');
        if assets.is_empty() || route == assets {
            return Err(ServerError::InvalidConfig(format!(
                "asset_base {:?} collides with route {:?}",
                self.asset_base, self.route
            )));
        }
        Ok(())
    }
}

/// Command-line values that take precedence over the config file.
///
/// Keeps the library free of clap types.
pub trait CliOptions {
    fn bind(&self) -> Option<String> {
        None
    }
    fn port(&self) -> Option<u16> {
        None
    }
    fn route(&self) -> Option<String> {
        None
    }
    fn asset_base(&self) -> Option<String> {
        None
    }
    fn assets_dir(&self) -> Option<PathBuf> {
        None
    }
    fn no_inline_css(&self) -> bool {
        false
    }
    fn log_level(&self) -> Option<String> {
        None
    }
}

/// Load the config file at `path`.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_config(path: &Path) -> Result<Option<ServerConfig>, ServerError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|source| ServerError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content).map_err(|source| ServerError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(config))
}

/// Merge CLI overrides into the file config (or defaults).
///
/// Mount points are checked separately with [`ServerConfig::validate`], since
/// a rendered file may use a relative `asset_base`.
pub fn resolve_config(cli: &impl CliOptions, file: Option<ServerConfig>) -> ServerConfig {
    let mut config = file.unwrap_or_default();

    if let Some(bind) = cli.bind() {
        config.bind = bind;
    }
    if let Some(port) = cli.port() {
        config.port = port;
    }
    if let Some(route) = cli.route() {
        config.route = route;
    }
    if let Some(asset_base) = cli.asset_base() {
        config.asset_base = asset_base;
    }
    if let Some(dir) = cli.assets_dir() {
        config.assets_dir = Some(dir);
    }
    if cli.no_inline_css() {
        config.inline_css = false;
    }
    if let Some(level) = cli.log_level() {
        config.log_level = level;
    }

    config
}
