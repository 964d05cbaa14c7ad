//! Tidy Core
//!
//! The rename engine and everything around one plugin session:
//! - [`RenameEngine`]: gated, batched depth-first walk that names each node
//!   once and writes only real changes
//! - [`AllOptions`]: the persisted option blob
//! - [`EngineConfig`]: batch size, cache lifetime and variant limit
//! - [`PluginSession`]: UI event protocol, settings persistence and
//!   localized notifications
//!
//! # Example
//!
//! ```rust,ignore
//! use tidy_core::{AllOptions, EngineConfig, RenameEngine};
//!
//! let engine = RenameEngine::new(EngineConfig::default())?;
//! let changed = engine
//!     .rename_selection(&mut scene, &AllOptions::new().with_pascal_case(true))
//!     .await;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod engine;
mod error;
mod i18n;
mod options;
mod report;
mod session;
mod settings;

pub use config::EngineConfig;
pub use engine::RenameEngine;
pub use error::{ConfigError, EngineError, SessionError, SettingsError};
pub use i18n::{Language, Messages, OptionKey, OptionText, UnknownLanguage};
pub use options::AllOptions;
pub use report::RenameReport;
pub use session::{
    HostEvent, PluginEvent, PluginSession, PANEL_HEIGHT_SETTINGS_CLOSED,
    PANEL_HEIGHT_SETTINGS_OPEN, PANEL_WIDTH,
};
pub use settings::{JsonFileSettingsStore, MemorySettingsStore, SettingsStore, SETTINGS_KEY};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
