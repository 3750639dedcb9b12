// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared harness for editor integration tests.
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use deck_app_core::HistoryPrefs;
use deck_dry_tests::{ManualClock, SceneFixture};
use deck_history::{DeckEditor, SaveOutcome};
use deck_scene_codec::{MockObject, MockScene, Snapshot, SnapshotCodec};

/// Route tracing output through the test writer. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn prefs() -> HistoryPrefs {
    HistoryPrefs::default()
}

/// Editor over a scene with a white background and nothing on it.
pub fn editor() -> DeckEditor<MockScene> {
    editor_with(SceneFixture::new().background("#ffffff"))
}

pub fn editor_with(fixture: SceneFixture) -> DeckEditor<MockScene> {
    init_tracing();
    DeckEditor::new(&prefs(), Some(fixture.build()))
}

/// What the editor's own codec would capture from its scene right now.
pub fn capture(editor: &DeckEditor<MockScene>) -> Snapshot {
    SnapshotCodec::new(prefs().capture_fields)
        .capture(editor.scene())
        .expect("scene attached")
}

pub fn scene(editor: &DeckEditor<MockScene>) -> &MockScene {
    editor.scene().expect("scene attached")
}

pub fn object_count(editor: &DeckEditor<MockScene>) -> usize {
    scene(editor).objects.len()
}

/// Add `n` rectangles through the scene, then let the debounce window run
/// out. Returns the save outcome.
pub fn draw(editor: &mut DeckEditor<MockScene>, clock: &ManualClock, n: usize) -> SaveOutcome {
    let scene = editor.scene_mut().expect("editable scene");
    for i in 0..n {
        let offset = f64::from(u32::try_from(i).unwrap()) * 20.0;
        scene.add_object(MockObject::rect(offset, offset, 10.0, 10.0));
    }
    settle(editor, clock).expect("debounced save")
}

/// Pump until the debounce window has elapsed.
pub fn settle(editor: &mut DeckEditor<MockScene>, clock: &ManualClock) -> Option<SaveOutcome> {
    assert!(editor.pump(clock.now()).is_none());
    editor.pump(clock.advance(prefs().debounce()))
}

/// Pump until no restore is in flight.
pub fn finish_restore(editor: &mut DeckEditor<MockScene>, clock: &ManualClock) {
    for _ in 0..16 {
        if !editor.is_restoring() {
            return;
        }
        editor.pump(clock.advance_ms(1));
    }
    panic!("restore never completed");
}
