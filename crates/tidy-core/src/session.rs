//! Plugin session
//!
//! Drives the engine from UI events. The session owns the scene behind an
//! async mutex and refuses a second rename while one is in flight.

use crate::engine::RenameEngine;
use crate::error::SessionError;
use crate::i18n::Messages;
use crate::options::AllOptions;
use crate::report::RenameReport;
use crate::settings::SettingsStore;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tidy_scene::SceneStore;

/// Panel width in pixels
pub const PANEL_WIDTH: u32 = 240;
/// Panel height with the settings section open
pub const PANEL_HEIGHT_SETTINGS_OPEN: u32 = 262;
/// Panel height with the settings section closed
pub const PANEL_HEIGHT_SETTINGS_CLOSED: u32 = 408;

/// Event sent by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginEvent {
    /// Rename the selection with these options
    Rename(AllOptions),
    /// Settings section toggled
    SettingOpen(bool),
    /// Host selection changed
    SelectionChange,
    /// Persist options without renaming
    SaveSettings(AllOptions),
}

/// Event sent to the UI or host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Toast notification
    Notify(String),
    /// Resize the panel
    Resize {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },
    /// Whether anything is selected
    SelectionChanged(bool),
}

impl HostEvent {
    /// Panel size for the settings section state
    #[must_use]
    pub fn resize_for(settings_open: bool) -> Self {
        Self::Resize {
            width: PANEL_WIDTH,
            height: if settings_open {
                PANEL_HEIGHT_SETTINGS_OPEN
            } else {
                PANEL_HEIGHT_SETTINGS_CLOSED
            },
        }
    }
}

struct RunGuard<'a>(&'a AtomicBool);

impl<'a> RunGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, SessionError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| SessionError::Busy)
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One plugin session over a scene and a settings store
pub struct PluginSession<S, T> {
    scene: tokio::sync::Mutex<S>,
    settings: T,
    engine: RenameEngine,
    options: Mutex<AllOptions>,
    last_report: Mutex<Option<RenameReport>>,
    running: AtomicBool,
}

impl<S, T> std::fmt::Debug for PluginSession<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginSession")
            .field("options", &*self.options.lock())
            .field("running", &self.running.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl<S: SceneStore, T: SettingsStore> PluginSession<S, T> {
    /// Create session
    #[must_use]
    pub fn new(scene: S, settings: T, engine: RenameEngine) -> Self {
        Self {
            scene: tokio::sync::Mutex::new(scene),
            settings,
            engine,
            options: Mutex::new(AllOptions::default()),
            last_report: Mutex::new(None),
            running: AtomicBool::new(false),
        }
    }

    /// Load saved options and produce the opening events
    ///
    /// Unreadable settings are logged and replaced by the defaults.
    pub async fn start(&self) -> Vec<HostEvent> {
        let options = match self.settings.load().await {
            Ok(options) => options,
            Err(error) => {
                tracing::warn!(%error, "failed to load settings, using defaults");
                AllOptions::default()
            }
        };
        *self.options.lock() = options;

        vec![
            HostEvent::resize_for(true),
            HostEvent::SelectionChanged(self.has_selection().await),
        ]
    }

    /// Current options
    #[must_use]
    pub fn options(&self) -> AllOptions {
        *self.options.lock()
    }

    /// Report of the most recent rename
    #[must_use]
    pub fn last_report(&self) -> Option<RenameReport> {
        *self.last_report.lock()
    }

    /// Whether a rename is in flight
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Handle one UI event
    ///
    /// # Errors
    /// [`SessionError::Busy`] for a rename while another is running;
    /// [`SessionError::Settings`] when `SaveSettings` cannot persist.
    pub async fn handle(&self, event: PluginEvent) -> Result<Vec<HostEvent>, SessionError> {
        match event {
            PluginEvent::Rename(options) => self.rename(options).await.map(|event| vec![event]),
            PluginEvent::SettingOpen(open) => Ok(vec![HostEvent::resize_for(open)]),
            PluginEvent::SelectionChange => {
                Ok(vec![HostEvent::SelectionChanged(self.has_selection().await)])
            }
            PluginEvent::SaveSettings(options) => {
                self.settings.save(&options).await?;
                *self.options.lock() = options;
                Ok(Vec::new())
            }
        }
    }

    async fn rename(&self, options: AllOptions) -> Result<HostEvent, SessionError> {
        let _guard = RunGuard::acquire(&self.running)?;
        let mut scene = self.scene.lock().await;

        scene.set_skip_invisible_instance_children(options.skip_invisible_instance_children());
        if let Err(error) = self.settings.save(&options).await {
            tracing::warn!(%error, "failed to save settings");
        }
        *self.options.lock() = options;

        let roots = scene.selection();
        let report = self.engine.run(&mut *scene, &roots, &options).await;
        *self.last_report.lock() = Some(report);

        let message = Messages::for_language(options.language).rename_outcome(report.renamed());
        Ok(HostEvent::Notify(message.to_string()))
    }

    async fn has_selection(&self) -> bool {
        !self.scene.lock().await.selection().is_empty()
    }

    /// Run `f` against the scene
    pub async fn with_scene<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut *self.scene.lock().await)
    }

    /// Close the session, returning the scene
    #[must_use]
    pub fn into_scene(self) -> S {
        self.scene.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::i18n::Language;
    use crate::settings::MemorySettingsStore;
    use tidy_scene::{NodeCategory, NodeId, NodeRecord, SceneDocument};

    fn session(selected: bool) -> PluginSession<SceneDocument, MemorySettingsStore> {
        let record = NodeRecord::new("1:1", NodeCategory::Rectangle, "Rectangle 1");
        let selection = if selected { vec![NodeId::new("1:1")] } else { vec![] };
        let doc = SceneDocument::from_records(vec![record], selection).unwrap();
        let engine = RenameEngine::new(EngineConfig::default()).unwrap();
        PluginSession::new(doc, MemorySettingsStore::new(), engine)
    }

    #[tokio::test]
    async fn start_reports_panel_and_selection() {
        let events = session(false).start().await;
        assert_eq!(
            events,
            [
                HostEvent::Resize { width: 240, height: 262 },
                HostEvent::SelectionChanged(false),
            ]
        );
    }

    #[tokio::test]
    async fn setting_open_resizes() {
        let s = session(true);
        assert_eq!(
            s.handle(PluginEvent::SettingOpen(false)).await.unwrap(),
            [HostEvent::Resize { width: 240, height: 408 }]
        );
    }

    #[tokio::test]
    async fn rename_notifies_in_chosen_language() {
        let s = session(true);
        let options = AllOptions::new().with_language(Language::Zh);

        let first = s.handle(PluginEvent::Rename(options)).await.unwrap();
        assert_eq!(first, [HostEvent::Notify("🎉 重命名完成！".into())]);

        let second = s.handle(PluginEvent::Rename(options)).await.unwrap();
        assert_eq!(second, [HostEvent::Notify("😶‍🌫️ 没有图层需要重命名".into())]);

        assert_eq!(s.options(), options);
        assert!(!s.is_running());
        let doc = s.into_scene();
        assert_eq!(doc.name_of(&NodeId::new("1:1")), Some("rectangle"));
    }

    #[tokio::test]
    async fn rename_sets_skip_flag() {
        let s = session(true);
        s.handle(PluginEvent::Rename(AllOptions::new().with_hidden(true)))
            .await
            .unwrap();
        assert!(!s.with_scene(|doc| doc.skips_invisible_instance_children()).await);

        s.handle(PluginEvent::Rename(AllOptions::new())).await.unwrap();
        assert!(s.with_scene(|doc| doc.skips_invisible_instance_children()).await);
    }

    #[test]
    fn guard_blocks_second_run() {
        let flag = AtomicBool::new(false);
        let guard = RunGuard::acquire(&flag).unwrap();
        assert!(matches!(RunGuard::acquire(&flag), Err(SessionError::Busy)));
        drop(guard);
        assert!(RunGuard::acquire(&flag).is_ok());
    }
}
