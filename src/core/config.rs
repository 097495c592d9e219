//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.navshell/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The route list is the only static configuration surface of the navigation
//! core. It is validated once, eagerly, by `build_route_table()`: any shape or
//! uniqueness problem is fatal at startup.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::route::{ROOT_PATH, RouteEntry, RouteError, RouteTable};
use crate::pages;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_route: Option<String>,
    pub load_delay_ms: Option<u64>,
    pub load_timeout_ms: Option<u64>,
    pub start_collapsed: Option<bool>,
}

/// One `[[routes]]` entry: `{ path, key, component }` where the component is
/// named by its page in the built-in catalogue.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    pub path: String,
    pub key: Option<String>,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub page: String,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOAD_DELAY_MS: u64 = 350;
pub const DEFAULT_LOAD_TIMEOUT_MS: u64 = 10_000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` means "first route".
    pub default_route: Option<String>,
    /// Location of the first navigation (direct URL entry).
    pub initial_route: String,
    pub load_delay: Duration,
    pub load_timeout: Duration,
    pub start_collapsed: bool,
    pub routes: Vec<RouteConfig>,
}

/// Values taken from command-line flags. `None`/`false` = not specified.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub route: Option<String>,
    pub collapsed: bool,
    pub load_delay_ms: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Routes(RouteError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Routes(e) => write!(f, "route config error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<RouteError> for ConfigError {
    fn from(e: RouteError) -> Self {
        ConfigError::Routes(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.navshell/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".navshell").join("config.toml"))
}

/// Load config from `~/.navshell/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NavConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NavConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NavConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NavConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: NavConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# navshell Configuration
# All settings are optional. Defaults fill in anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_route = "/use-state"       # Where "/" and unknown paths land; defaults to the first route
# load_delay_ms = 350                # Simulated lazy-load latency of the built-in pages
# load_timeout_ms = 10000            # Loads slower than this show an inline error
# start_collapsed = false

# Routes are shown in the side panel in this order.
# Built-in pages: "use-state", "use-effect", "use-context".

# [[routes]]
# path = "/use-state"
# label = "useState"
# icon = "S"
# page = "use-state"

# [[routes]]
# path = "/use-effect"
# label = "useEffect"
# icon = "E"
# page = "use-effect"

# [[routes]]
# path = "/use-context"
# label = "useContext"
# icon = "C"
# page = "use-context"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &NavConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Default route: env → config → first route
    let default_route = std::env::var("NAVSHELL_DEFAULT_ROUTE")
        .ok()
        .or_else(|| config.general.default_route.clone());

    // Load delay: CLI → env → config → default
    let load_delay_ms = cli
        .load_delay_ms
        .or_else(|| {
            std::env::var("NAVSHELL_LOAD_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or(config.general.load_delay_ms)
        .unwrap_or(DEFAULT_LOAD_DELAY_MS);

    let routes = if config.routes.is_empty() {
        pages::builtin_routes()
    } else {
        config.routes.clone()
    };

    ResolvedConfig {
        default_route,
        initial_route: cli.route.clone().unwrap_or_else(|| ROOT_PATH.to_string()),
        load_delay: Duration::from_millis(load_delay_ms),
        load_timeout: Duration::from_millis(
            config
                .general
                .load_timeout_ms
                .unwrap_or(DEFAULT_LOAD_TIMEOUT_MS),
        ),
        start_collapsed: cli.collapsed || config.general.start_collapsed.unwrap_or(false),
        routes,
    }
}

/// Turn the configured route list into a validated `RouteTable`.
pub fn build_route_table(config: &ResolvedConfig) -> Result<RouteTable, RouteError> {
    let entries = config
        .routes
        .iter()
        .map(|route| route_entry(route, config.load_delay))
        .collect::<Result<Vec<_>, _>>()?;
    RouteTable::with_default(entries, config.default_route.as_deref())
}

/// Key/path agreement is left to `RouteTable::with_default`.
fn route_entry(route: &RouteConfig, load_delay: Duration) -> Result<RouteEntry, RouteError> {
    let factory =
        pages::page_factory(&route.page, load_delay).ok_or_else(|| RouteError::UnknownPage {
            path: route.path.clone(),
            page: route.page.clone(),
        })?;

    let label = route.label.clone().unwrap_or_else(|| route.page.clone());
    let icon = route
        .icon
        .as_deref()
        .and_then(|s| s.chars().next())
        .or_else(|| label.chars().find(|c| c.is_alphanumeric()))
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('•');

    let mut entry = RouteEntry::new(route.path.clone(), label, icon, factory);
    if let Some(key) = &route.key {
        entry.key = key.clone();
    }
    Ok(entry)
}
