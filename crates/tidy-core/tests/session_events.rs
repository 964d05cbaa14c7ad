//! Plugin session event protocol

use pretty_assertions::assert_eq;
use tidy_core::{
    AllOptions, HostEvent, JsonFileSettingsStore, Language, MemorySettingsStore, PluginEvent,
    PluginSession, SessionError, SettingsStore,
};
use tidy_scene::{NodeCategory, NodeRecord, SceneDocument};
use tidy_test_utils::{
    button_set, frame, instance_of, name, rectangle, scene, scene_with_selection,
    setup_test_engine, setup_test_session,
};

#[tokio::test]
async fn start_loads_saved_options() {
    let saved = AllOptions::new().with_pascal_case(true).with_language(Language::Zh);
    let session = PluginSession::new(
        scene(vec![rectangle("1:1", "Rectangle 1")]),
        MemorySettingsStore::with_options(&saved),
        setup_test_engine(),
    );

    let events = session.start().await;
    assert_eq!(
        events,
        [
            HostEvent::Resize { width: 240, height: 262 },
            HostEvent::SelectionChanged(true),
        ]
    );
    assert_eq!(session.options(), saved);
}

#[tokio::test]
async fn rename_persists_options_and_notifies() {
    let session = setup_test_session(scene(vec![rectangle("1:1", "Rectangle 1")]));
    let options = AllOptions::new().with_pascal_case(true);

    let events = session.handle(PluginEvent::Rename(options)).await.unwrap();
    assert_eq!(events, [HostEvent::Notify("🎉 Rename complete!".into())]);

    let report = session.last_report().unwrap();
    assert_eq!(report.written, 1);
    assert_eq!(session.options(), options);

    let doc = session.into_scene();
    assert_eq!(name(&doc, "1:1"), "Rectangle");
}

#[tokio::test]
async fn empty_selection_renames_nothing() {
    let session = setup_test_session(scene_with_selection(
        vec![rectangle("1:1", "Rectangle 1")],
        &[],
    ));

    assert_eq!(
        session.handle(PluginEvent::SelectionChange).await.unwrap(),
        [HostEvent::SelectionChanged(false)]
    );
    assert_eq!(
        session.handle(PluginEvent::Rename(AllOptions::new())).await.unwrap(),
        [HostEvent::Notify("😶‍🌫️ No layers need renaming".into())]
    );
}

#[tokio::test]
async fn settings_toggle_resizes_panel() {
    let session = setup_test_session(scene(vec![]));
    assert_eq!(
        session.handle(PluginEvent::SettingOpen(true)).await.unwrap(),
        [HostEvent::Resize { width: 240, height: 262 }]
    );
    assert_eq!(
        session.handle(PluginEvent::SettingOpen(false)).await.unwrap(),
        [HostEvent::Resize { width: 240, height: 408 }]
    );
}

#[tokio::test]
async fn concurrent_rename_is_refused() {
    let records: Vec<_> = (0..150)
        .map(|i| rectangle(&format!("1:{i}"), "Rectangle 1"))
        .collect();
    let session = setup_test_session(scene(records));
    let options = AllOptions::new();

    let (first, second) = tokio::join!(
        session.handle(PluginEvent::Rename(options)),
        session.handle(PluginEvent::Rename(options)),
    );

    assert!(first.is_ok());
    let busy = second.unwrap_err();
    assert!(matches!(busy, SessionError::Busy));
    assert!(busy.is_retryable());
    assert!(!session.is_running());
    assert!(session.handle(PluginEvent::Rename(options)).await.is_ok());
}

#[tokio::test]
async fn hidden_instance_children_follow_options() {
    let hidden_child = rectangle("1:2", "Rectangle 1").hidden();
    let records = vec![
        button_set("9:0", &["default"]),
        frame("1:0", "Frame 1").with_child(instance_of("1:1", "9:0:0").with_child(hidden_child)),
    ];

    let session = setup_test_session(scene_with_selection(records.clone(), &["1:0"]));
    session
        .handle(PluginEvent::Rename(AllOptions::new().with_instance(true).with_hidden(true)))
        .await
        .unwrap();
    let doc = session.into_scene();
    assert!(!doc.skips_invisible_instance_children());
    assert_eq!(name(&doc, "1:2"), "rectangle");

    let session = setup_test_session(scene_with_selection(records, &["1:0"]));
    session
        .handle(PluginEvent::Rename(AllOptions::new()))
        .await
        .unwrap();
    let doc: SceneDocument = session.into_scene();
    assert!(doc.skips_invisible_instance_children());
    assert_eq!(name(&doc, "1:2"), "Rectangle 1");
}

#[tokio::test]
async fn save_settings_without_renaming() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let session = PluginSession::new(
        scene(vec![NodeRecord::new("1:1", NodeCategory::Ellipse, "Ellipse 1")]),
        JsonFileSettingsStore::new(&path),
        setup_test_engine(),
    );

    let options = AllOptions::new().with_locked(true).with_show_spacing(true);
    let events = session.handle(PluginEvent::SaveSettings(options)).await.unwrap();
    assert!(events.is_empty());
    assert!(session.last_report().is_none());

    let reloaded = JsonFileSettingsStore::new(&path).load().await.unwrap();
    assert_eq!(reloaded, options);

    let doc = session.into_scene();
    assert_eq!(name(&doc, "1:1"), "Ellipse 1");
}

#[tokio::test]
async fn corrupt_settings_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ broken").unwrap();

    let session = PluginSession::new(
        scene(vec![]),
        JsonFileSettingsStore::new(&path),
        setup_test_engine(),
    );
    let events = session.start().await;

    assert_eq!(events[1], HostEvent::SelectionChanged(false));
    assert_eq!(session.options(), AllOptions::default());
}
