use std::cell::Cell;
use std::rc::Rc;

use gearconf::gear::{Category, GearConfigStore, Namespace};
use gearconf::olc::{GearMenuId, GearMenus, OlcState, TranscriptSession};
use tempfile::TempDir;

fn feed(
    editor: &mut gearconf::olc::OlcEngine<GearConfigStore, GearMenus>,
    store: &mut GearConfigStore,
    session: &mut TranscriptSession,
    inputs: &[&str],
) -> OlcState<GearMenuId> {
    let mut state = editor.state();
    for input in inputs {
        state = editor.handle_input(store, session, input);
    }
    state
}

#[test]
fn remove_slashing_then_quit_saves_once() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("gear-config.json");
    let mut store = GearConfigStore::load(&path);
    let saves = Rc::new(Cell::new(0u32));
    let saves_hook = saves.clone();

    let mut session = TranscriptSession::new();
    let mut editor = GearMenus::default()
        .into_engine()
        .on_exit(move |store: &mut GearConfigStore| {
            saves_hook.set(saves_hook.get() + 1);
            store.save().expect("save on exit");
        });
    editor.start(&store, &mut session);
    assert!(session.contains("Gear Configuration Editor"));

    let state = feed(&mut editor, &mut store, &mut session, &["1", "1", "2"]);
    assert_eq!(
        state,
        OlcState::AwaitingLine {
            menu: GearMenuId::Category(Namespace::Wielded, Category::DamageTypes),
            prompt_id: 2
        }
    );
    feed(&mut editor, &mut store, &mut session, &["slashing"]);
    assert!(!store
        .items(Namespace::Wielded, Category::DamageTypes)
        .contains(&"slashing".to_string()));

    assert_eq!(
        feed(&mut editor, &mut store, &mut session, &["Q", "Q"]),
        OlcState::ShowingMenu
    );
    assert_eq!(saves.get(), 0);
    assert_eq!(
        feed(&mut editor, &mut store, &mut session, &["Q"]),
        OlcState::Terminated
    );
    assert_eq!(saves.get(), 1);

    feed(&mut editor, &mut store, &mut session, &["Q", "1"]);
    assert_eq!(saves.get(), 1);

    let reloaded = GearConfigStore::load(&path);
    assert!(!reloaded.is_valid(Namespace::Wielded, Category::DamageTypes, "slashing"));
    assert!(reloaded.is_valid(Namespace::Wielded, Category::DamageTypes, "piercing"));
}

#[test]
fn removing_unknown_material_reports_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = GearConfigStore::load(dir.path().join("gear-config.json"));
    let before = store.items(Namespace::Wielded, Category::Materials);
    let mut session = TranscriptSession::new();
    let mut editor = GearMenus::default().into_engine();
    editor.start(&store, &mut session);

    // wielded -> materials -> remove
    feed(&mut editor, &mut store, &mut session, &["1", "4", "2"]);
    assert!(session.contents().ends_with("Enter material to remove: "));
    let state = feed(&mut editor, &mut store, &mut session, &["unobtainium"]);

    assert_eq!(state, OlcState::ShowingMenu);
    assert!(session.contains("Material 'unobtainium' not found."));
    assert_eq!(store.items(Namespace::Wielded, Category::Materials), before);
    assert!(session
        .contents()
        .trim_end()
        .ends_with("Q) Return to wielded menu"));
}

#[test]
fn invalid_choices_re_render_and_lowercase_q_does_not_quit() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = GearConfigStore::load(dir.path().join("gear-config.json"));
    let mut session = TranscriptSession::new();
    let mut editor = GearMenus::default().into_engine();
    editor.start(&store, &mut session);
    session.take();

    feed(&mut editor, &mut store, &mut session, &["9"]);
    assert!(session.take().contains("Gear Configuration Editor"));
    assert_eq!(
        feed(&mut editor, &mut store, &mut session, &["q"]),
        OlcState::ShowingMenu
    );
    assert_eq!(editor.current(), GearMenuId::Root);
}

#[test]
fn custom_quit_key_and_layout() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = GearConfigStore::load(dir.path().join("gear-config.json"));
    let mut session = TranscriptSession::new();
    let mut editor = GearMenus::default()
        .with_line_width(40)
        .with_preview_items(2)
        .with_quit_label("X")
        .into_engine();
    editor.start(&store, &mut session);
    assert!(session.contains(&format!("{}\n", "=".repeat(40))));
    assert!(session.contains(" X) Quit"));

    feed(&mut editor, &mut store, &mut session, &["2"]);
    assert!(session.contains(" 1) Armor types (4): light, medium..."));
    assert_eq!(
        feed(&mut editor, &mut store, &mut session, &["Q"]),
        OlcState::ShowingMenu
    );
    assert_eq!(
        feed(&mut editor, &mut store, &mut session, &["X", "X"]),
        OlcState::Terminated
    );
}

#[test]
fn adding_equipped_material_keeps_namespaces_separate() {
    let dir = TempDir::new().expect("tempdir");
    let mut store = GearConfigStore::load(dir.path().join("gear-config.json"));
    let mut session = TranscriptSession::new();
    let mut editor = GearMenus::default().into_engine();
    editor.start(&store, &mut session);

    feed(
        &mut editor,
        &mut store,
        &mut session,
        &["2", "2", "1", "mithril weave"],
    );
    assert!(session.contains("Added material: mithril weave"));
    assert!(store.is_valid(Namespace::Equipped, Category::Materials, "mithril weave"));
    assert!(!store.is_valid(Namespace::Wielded, Category::Materials, "mithril weave"));
}
