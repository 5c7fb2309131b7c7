//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Local storage key holding the last chosen theme
pub const THEME_STORAGE_KEY: &str = "theme";

/// Canonical light theme, target of the legacy dark/light toggle
pub const LIGHT_THEME: &str = "light";

/// Canonical dark theme, target of the legacy dark/light toggle
pub const DARK_THEME: &str = "dark";

/// Screen and section shown before any navigation happened
pub const DEFAULT_SCREEN: &str = "assets";

/// Role whose login redirects production navigation to playlists
pub const CLIENT_ROLE: &str = "client";

/// Landing screen for client users
pub const CLIENT_LANDING_SCREEN: &str = "playlists";

/// Default page size for `search_data`
pub const DEFAULT_SEARCH_LIMIT: u32 = 3;

/// Default API root when no settings file overrides it
pub const DEFAULT_API_URL: &str = "http://localhost";

/// Environment variable overriding the API root
pub const API_URL_ENV: &str = "UI_STORE_API_URL";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Directory under the home directory holding settings and local storage
pub const DATA_DIR_NAME: &str = ".ui-store";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
