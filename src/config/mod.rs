//! Configuration loaded from `.codelab.toml`.
//!
//! ```toml
//! [engine]
//! delay_ms = 2000
//! timeout_ms = 10000
//!
//! [editor]
//! language = "JavaScript"
//!
//! [notifications]
//! toast_ms = 3000
//! ```

mod core;
mod loader;

pub use self::core::{
    CodelabConfig, ConfigOverrides, EditorConfig, EngineConfig, NotificationConfig,
};
pub use loader::{
    default_config_toml, directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};
