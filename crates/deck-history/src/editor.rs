// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Slide lifecycle manager.
//!
//! [`DeckEditor`] owns the ordered slide table, one [`HistoryStack`] per
//! slide, the restore guard and the debounce observer, and drives a single
//! [`ScenePort`]. The scene always shows the active slide; every other slide
//! is represented by its stored snapshot.
//!
//! # Ordering
//!
//! - The outgoing slide is captured into its own record and history before
//!   anything reads or writes another slide (switch, add, duplicate).
//! - A restore holds the guard from the moment the load is requested until
//!   the primitive reports completion or failure. While it is held, every
//!   lifecycle and navigation request is refused, and scene notifications
//!   are treated as replays.
//! - A restore that does not take effect leaves the scene as it was. The
//!   history cursor, slide record and active pointer are repaired to match.

use std::collections::BTreeMap;
use std::time::Instant;

use deck_app_core::{ConfigPort, HistoryPrefs};
use deck_scene_codec::{PendingRestore, RestoreStatus, Snapshot, SnapshotCodec};
use deck_scene_port::{SceneError, SceneEvent, ScenePort};
use tracing::{debug, trace, warn};

use crate::error::EditorError;
use crate::guard::{GuardToken, RestoreGuard, RestoreKind};
use crate::history::{HistoryStack, SaveOutcome};
use crate::observer::{ChangeObserver, Fire};
use crate::slides::{DeckDocument, SlideId, SlideMeta, SlideRecord};

/// A restore the primitive is still working on. Dropping it releases the guard.
struct InFlight {
    token: GuardToken,
    pending: PendingRestore,
    slide: SlideId,
    /// Slide that was active before a switch; equal to `slide` otherwise.
    previous: SlideId,
}

/// Multi-slide editor state engine.
pub struct DeckEditor<S> {
    scene: Option<S>,
    codec: SnapshotCodec,
    flush_before_navigation: bool,
    order: Vec<SlideId>,
    slides: BTreeMap<SlideId, SlideRecord>,
    histories: BTreeMap<SlideId, HistoryStack>,
    active: SlideId,
    next_id: u64,
    guard: RestoreGuard,
    observer: ChangeObserver,
    in_flight: Option<InFlight>,
}

impl<S: ScenePort> DeckEditor<S> {
    /// Create a one-slide deck.
    ///
    /// If a scene is given, its current content seeds the first slide's
    /// history.
    pub fn new(prefs: &HistoryPrefs, scene: Option<S>) -> Self {
        let mut editor = Self::bare(prefs, scene);
        editor.active = editor.insert_slide(SlideMeta::of_kind("blank"), None);
        editor.discard_queued_events();
        if let Some(snapshot) = editor.capture() {
            editor.store(editor.active, snapshot);
        }
        editor
    }

    /// Create a one-slide deck using preferences from `config` (defaults if
    /// none are stored).
    pub fn with_config<P: ConfigPort + ?Sized>(config: &P, scene: Option<S>) -> Self {
        let prefs = config.load_prefs().unwrap_or_default();
        Self::new(&prefs.history, scene)
    }

    /// Open an exported deck.
    ///
    /// Slides get fresh ids; each history is seeded from the slide's stored
    /// snapshot. The active slide is loaded into the scene.
    pub fn open(
        document: DeckDocument,
        prefs: &HistoryPrefs,
        scene: Option<S>,
    ) -> Result<Self, EditorError> {
        let len = document.slides.len();
        if len == 0 {
            return Err(EditorError::EmptyDocument);
        }
        if document.active >= len {
            return Err(EditorError::ActiveOutOfRange {
                active: document.active,
                len,
            });
        }
        let mut editor = Self::bare(prefs, scene);
        for record in document.slides {
            editor.insert_slide(record.meta, record.snapshot);
        }
        editor.active = editor.order[document.active];
        editor.discard_queued_events();
        debug!(slides = len, active = document.active, "deck opened");
        let active = editor.active;
        editor.load_active(RestoreKind::Attach, active)?;
        Ok(editor)
    }

    fn bare(prefs: &HistoryPrefs, scene: Option<S>) -> Self {
        Self {
            scene,
            codec: SnapshotCodec::new(prefs.capture_fields.clone()),
            flush_before_navigation: prefs.flush_before_navigation,
            order: Vec::new(),
            slides: BTreeMap::new(),
            histories: BTreeMap::new(),
            active: SlideId(0),
            next_id: 1,
            guard: RestoreGuard::new(),
            observer: ChangeObserver::new(prefs.debounce()),
            in_flight: None,
        }
    }

    // ── Scene attachment ────────────────────────────────────────────────

    /// Attach a live scene.
    ///
    /// The active slide's stored snapshot is loaded into it; a slide that
    /// has never been captured is seeded from the scene instead.
    pub fn attach_scene(&mut self, scene: S) -> Result<(), EditorError> {
        self.ensure_idle("attach")?;
        self.scene = Some(scene);
        self.observer.cancel();
        self.discard_queued_events();
        let id = self.active;
        match self.slides.get(&id).and_then(|r| r.snapshot.clone()) {
            Some(snapshot) => self
                .begin_restore(RestoreKind::Attach, id, id, &snapshot)
                .map(|_accepted| ()),
            None => {
                if let Some(snapshot) = self.capture() {
                    self.store(id, snapshot);
                }
                Ok(())
            }
        }
    }

    /// Detach and return the scene.
    ///
    /// The active slide is captured first unless a restore is in flight, in
    /// which case the restore is abandoned.
    pub fn detach_scene(&mut self) -> Option<S> {
        if let Some(abandoned) = self.in_flight.take() {
            warn!(slide = %abandoned.slide, kind = %abandoned.token.kind(), "scene detached mid-restore");
        } else {
            self.flush_active();
        }
        self.observer.cancel();
        self.scene.take()
    }

    /// The attached scene.
    pub fn scene(&self) -> Option<&S> {
        self.scene.as_ref()
    }

    /// Mutable access to the attached scene for editing.
    ///
    /// `None` while a restore is in flight: the scene belongs to the loader
    /// until it completes.
    pub fn scene_mut(&mut self) -> Option<&mut S> {
        if self.guard.is_active() {
            return None;
        }
        self.scene.as_mut()
    }

    // ── Event loop ──────────────────────────────────────────────────────

    /// Forward one scene notification.
    pub fn on_scene_event(&mut self, event: SceneEvent, now: Instant) {
        self.observer.notify(event, self.active, now, &self.guard);
    }

    /// Advance the editor: settle an in-flight restore, feed queued scene
    /// notifications to the debouncer, and record a snapshot if the
    /// debounce window has elapsed.
    ///
    /// Returns the outcome of the save, if one happened.
    pub fn pump(&mut self, now: Instant) -> Option<SaveOutcome> {
        self.poll_restore();
        let events = self
            .scene
            .as_mut()
            .map(ScenePort::drain_events)
            .unwrap_or_default();
        for event in events {
            self.on_scene_event(event, now);
        }
        let fire = self.observer.poll(now, &self.guard)?;
        self.record_fire(fire)
    }

    fn record_fire(&mut self, fire: Fire) -> Option<SaveOutcome> {
        if fire.slide != self.active {
            debug!(armed_for = %fire.slide, active = %self.active, "stale debounce dropped");
            return None;
        }
        let snapshot = self.capture()?;
        let outcome = self.store(fire.slide, snapshot);
        debug!(
            slide = %fire.slide,
            coalesced = fire.coalesced,
            selection_only = fire.selection_only,
            ?outcome,
            "debounced save"
        );
        Some(outcome)
    }

    // ── History navigation ──────────────────────────────────────────────

    /// Step the active slide back one entry.
    ///
    /// `Ok(false)` when there is nothing to undo, or when the entry cannot
    /// be loaded (the cursor is put back).
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        self.navigate(RestoreKind::Undo)
    }

    /// Step the active slide forward one entry.
    ///
    /// `Ok(false)` when there is nothing to redo, or when the entry cannot
    /// be loaded (the cursor is put back).
    pub fn redo(&mut self) -> Result<bool, EditorError> {
        self.navigate(RestoreKind::Redo)
    }

    fn navigate(&mut self, kind: RestoreKind) -> Result<bool, EditorError> {
        self.ensure_idle(if kind == RestoreKind::Undo { "undo" } else { "redo" })?;
        if self.scene.is_none() {
            warn!(%kind, "no scene attached");
            return Err(EditorError::SceneDetached);
        }
        if self.flush_before_navigation && self.take_pending_edits() {
            self.flush_active();
        }
        let id = self.active;
        let Some(history) = self.histories.get_mut(&id) else {
            return Ok(false);
        };
        let step = match kind {
            RestoreKind::Undo => history.undo(),
            _ => history.redo(),
        }
        .cloned();
        let Some(snapshot) = step else {
            debug!(slide = %id, %kind, cursor = history.cursor(), "at history boundary");
            return Ok(false);
        };
        debug!(slide = %id, %kind, cursor = history.cursor(), len = history.len(), "history step");
        if let Some(record) = self.slides.get_mut(&id) {
            record.snapshot = Some(snapshot.clone());
        }
        self.begin_restore(kind, id, id, &snapshot)
    }

    /// Whether the active slide can undo.
    pub fn can_undo(&self) -> bool {
        self.histories
            .get(&self.active)
            .is_some_and(HistoryStack::can_undo)
    }

    /// Whether the active slide can redo.
    pub fn can_redo(&self) -> bool {
        self.histories
            .get(&self.active)
            .is_some_and(HistoryStack::can_redo)
    }

    /// Capture the active slide now, bypassing the debounce window.
    pub fn save_history(&mut self) -> Result<SaveOutcome, EditorError> {
        self.ensure_idle("save")?;
        if self.scene.is_none() {
            warn!("save requested with no scene attached");
            return Err(EditorError::SceneDetached);
        }
        Ok(self.flush_active().unwrap_or(SaveOutcome::Unchanged))
    }

    // ── Slide lifecycle ─────────────────────────────────────────────────

    /// Show the slide at `index`. No-op if it is already active.
    pub fn switch_slide(&mut self, index: usize) -> Result<(), EditorError> {
        self.switch_to(index, false)
    }

    /// Append an empty slide (keeping the current background) and switch to
    /// it. Returns its index.
    pub fn add_slide(&mut self, meta: SlideMeta) -> Result<usize, EditorError> {
        self.ensure_idle("add")?;
        self.flush_active();
        let initial = self.codec.empty_state(self.scene.as_ref());
        let id = self.insert_slide(meta, initial);
        let index = self.order.len() - 1;
        debug!(slide = %id, index, "slide added");
        self.switch_to(index, false)?;
        Ok(index)
    }

    /// Append a copy of the slide at `index` and switch to it. The copy
    /// starts with a fresh history. Returns its index.
    pub fn duplicate_slide(&mut self, index: usize) -> Result<usize, EditorError> {
        self.ensure_idle("duplicate")?;
        let source = self.id_at(index)?;
        self.flush_active();
        let (meta, snapshot) = self
            .slides
            .get(&source)
            .map(|r| (r.meta.clone(), r.snapshot.clone()))
            .unwrap_or_default();
        let id = self.insert_slide(meta, snapshot);
        let new_index = self.order.len() - 1;
        debug!(slide = %id, from = %source, index = new_index, "slide duplicated");
        self.switch_to(new_index, false)?;
        Ok(new_index)
    }

    /// Remove the slide at `index` together with its history.
    ///
    /// Deleting the active slide shows its predecessor (or the new first
    /// slide). Deleting a slide before the active one only shifts the active
    /// index.
    pub fn delete_slide(&mut self, index: usize) -> Result<(), EditorError> {
        self.ensure_idle("delete")?;
        let id = self.id_at(index)?;
        if self.order.len() == 1 {
            warn!(slide = %id, "refusing to delete the last slide");
            return Err(EditorError::LastSlide);
        }
        self.order.remove(index);
        self.slides.remove(&id);
        self.histories.remove(&id);
        debug!(slide = %id, index, "slide deleted");
        if id == self.active {
            self.observer.cancel();
            self.switch_to(index.saturating_sub(1), true)
        } else {
            Ok(())
        }
    }

    fn switch_to(&mut self, index: usize, forced: bool) -> Result<(), EditorError> {
        self.ensure_idle("switch")?;
        let target = self.id_at(index)?;
        if !forced && target == self.active {
            trace!(slide = %target, "already active");
            return Ok(());
        }
        self.flush_active();
        let from = self.active;
        self.active = target;
        debug!(%from, to = %target, index, forced, "switching slide");
        self.load_active(RestoreKind::Switch, from)
    }

    /// Restore the active slide's snapshot, synthesizing an empty one first
    /// if it has never been populated.
    fn load_active(&mut self, kind: RestoreKind, previous: SlideId) -> Result<(), EditorError> {
        let id = self.active;
        let snapshot = match self.slides.get(&id).and_then(|r| r.snapshot.clone()) {
            Some(snapshot) => snapshot,
            None => {
                let Some(empty) = self.codec.empty_state(self.scene.as_ref()) else {
                    trace!(slide = %id, "no scene; load deferred to attach");
                    return Ok(());
                };
                debug!(slide = %id, "populating slide with empty state");
                self.store(id, empty.clone());
                empty
            }
        };
        self.begin_restore(kind, id, previous, &snapshot).map(|_accepted| ())
    }

    // ── Restore plumbing ────────────────────────────────────────────────

    /// Start loading `snapshot` for `slide`. Returns whether the load was
    /// accepted; a rejected one has already been recovered from.
    fn begin_restore(
        &mut self,
        kind: RestoreKind,
        slide: SlideId,
        previous: SlideId,
        snapshot: &Snapshot,
    ) -> Result<bool, EditorError> {
        let guard = self.guard.clone();
        let accepted = guard
            .with_guard(kind, |token| self.start_restore(token, slide, previous, snapshot))
            .ok_or_else(|| EditorError::RestoreInFlight(guard.holder().unwrap_or(kind)))?;
        if !accepted {
            self.restore_rejected(kind, slide);
        }
        Ok(accepted)
    }

    /// Returns `false` if the codec refused the snapshot. The token is
    /// dropped in that case, so the guard is free again.
    fn start_restore(
        &mut self,
        token: GuardToken,
        slide: SlideId,
        previous: SlideId,
        snapshot: &Snapshot,
    ) -> bool {
        let Some(scene) = self.scene.as_mut() else {
            trace!(%slide, "no scene; nothing to restore into");
            return true;
        };
        match self.codec.restore(scene, snapshot) {
            Ok(pending) => {
                trace!(%slide, kind = %token.kind(), "restore started");
                self.in_flight = Some(InFlight {
                    token,
                    pending,
                    slide,
                    previous,
                });
                self.poll_restore();
                true
            }
            Err(err) => {
                warn!(%slide, kind = %token.kind(), %err, "restore rejected; scene unchanged");
                false
            }
        }
    }

    /// Returns `true` once nothing is in flight.
    fn poll_restore(&mut self) -> bool {
        let status = match (&self.in_flight, self.scene.as_mut()) {
            (None, _) => return true,
            (Some(_), None) => RestoreStatus::Failed(SceneError::Backend("scene detached".into())),
            (Some(in_flight), Some(scene)) => in_flight.pending.poll(scene),
        };
        if status == RestoreStatus::Pending {
            return false;
        }
        self.finish_restore(&status);
        true
    }

    /// Completion continuation: runs exactly once per restore, on success
    /// and on failure alike.
    fn finish_restore(&mut self, status: &RestoreStatus) {
        let Some(InFlight {
            token,
            slide,
            previous,
            ..
        }) = self.in_flight.take()
        else {
            return;
        };
        let kind = token.kind();
        drop(token);
        // Notifications raised by the load are replays of stored state.
        self.discard_queued_events();
        match status {
            RestoreStatus::Complete(patch) => {
                debug!(%slide, %kind, ?patch, "restore complete");
            }
            RestoreStatus::Failed(err) => {
                warn!(%slide, %kind, %err, "restore failed");
                if self.scene.is_some() {
                    self.restore_failed(kind, slide, previous);
                }
            }
            RestoreStatus::Pending => {}
        }
    }

    /// The codec could not read the snapshot. Retrying will not help, so
    /// the slide gets a state the scene can show.
    fn restore_rejected(&mut self, kind: RestoreKind, slide: SlideId) {
        match kind {
            RestoreKind::Undo | RestoreKind::Redo => self.revert_step(kind, slide),
            RestoreKind::Switch => self.load_empty_instead(kind, slide),
            RestoreKind::Attach => self.adopt_scene(slide),
        }
    }

    /// The scene refused the load and still shows what it showed before.
    fn restore_failed(&mut self, kind: RestoreKind, slide: SlideId, previous: SlideId) {
        match kind {
            RestoreKind::Undo | RestoreKind::Redo => self.revert_step(kind, slide),
            RestoreKind::Switch if previous != slide && self.slides.contains_key(&previous) => {
                debug!(from = %slide, to = %previous, "switch rolled back");
                self.active = previous;
            }
            RestoreKind::Switch => self.load_empty_instead(kind, slide),
            RestoreKind::Attach => self.adopt_scene(slide),
        }
    }

    /// Record whatever the scene shows as the slide's latest state. Only
    /// valid when no other slide has been shown in it.
    fn adopt_scene(&mut self, slide: SlideId) {
        if let Some(snapshot) = self.capture() {
            let outcome = self.store(slide, snapshot);
            debug!(%slide, ?outcome, "scene content adopted");
        }
    }

    /// Undo a history step whose entry never reached the scene.
    fn revert_step(&mut self, kind: RestoreKind, slide: SlideId) {
        let Some(history) = self.histories.get_mut(&slide) else {
            return;
        };
        if kind == RestoreKind::Undo {
            history.redo();
        } else {
            history.undo();
        }
        let current = history.current().cloned();
        debug!(%slide, %kind, cursor = history.cursor(), "history step reverted");
        if let Some(record) = self.slides.get_mut(&slide) {
            record.snapshot = current;
        }
    }

    /// Replace an unloadable slide with an empty one. The unreadable entry
    /// stays in its history.
    fn load_empty_instead(&mut self, kind: RestoreKind, slide: SlideId) {
        let Some(empty) = self.codec.empty_state(self.scene.as_ref()) else {
            return;
        };
        let stored = self.slides.get(&slide).and_then(|r| r.snapshot.as_ref());
        if stored == Some(&empty) {
            warn!(%slide, %kind, "empty state did not load either; scene left as is");
            return;
        }
        let outcome = self.store(slide, empty.clone());
        debug!(%slide, %kind, ?outcome, "loading empty state in place of unreadable slide");
        let guard = self.guard.clone();
        let accepted = guard.with_guard(kind, |token| self.start_restore(token, slide, slide, &empty));
        if accepted == Some(false) {
            warn!(%slide, %kind, "empty state rejected; scene left as is");
        }
    }

    // ── Helpers ─────────────────────────────────────────────────────────

    fn ensure_idle(&self, op: &'static str) -> Result<(), EditorError> {
        match self.guard.holder() {
            Some(in_flight) => {
                warn!(op, %in_flight, "refused while a restore is in flight");
                Err(EditorError::RestoreInFlight(in_flight))
            }
            None => Ok(()),
        }
    }

    fn id_at(&self, index: usize) -> Result<SlideId, EditorError> {
        self.order
            .get(index)
            .copied()
            .ok_or(EditorError::SlideOutOfRange {
                index,
                len: self.order.len(),
            })
    }

    fn insert_slide(&mut self, meta: SlideMeta, snapshot: Option<Snapshot>) -> SlideId {
        let id = SlideId(self.next_id);
        self.next_id += 1;
        let history = snapshot
            .clone()
            .map_or_else(HistoryStack::new, HistoryStack::seeded);
        self.slides.insert(id, SlideRecord { id, meta, snapshot });
        self.histories.insert(id, history);
        self.order.push(id);
        id
    }

    fn capture(&self) -> Option<Snapshot> {
        self.codec.capture(self.scene.as_ref())
    }

    /// Make `snapshot` the slide's current state in both tables.
    fn store(&mut self, id: SlideId, snapshot: Snapshot) -> SaveOutcome {
        let outcome = self
            .histories
            .entry(id)
            .or_default()
            .record(snapshot.clone());
        if let Some(record) = self.slides.get_mut(&id) {
            record.snapshot = Some(snapshot);
        }
        outcome
    }

    /// Capture the active slide, superseding any queued or debounced
    /// notifications.
    fn flush_active(&mut self) -> Option<SaveOutcome> {
        self.discard_queued_events();
        self.observer.cancel();
        let id = self.active;
        if !self.slides.contains_key(&id) {
            return None;
        }
        let snapshot = self.capture()?;
        let outcome = self.store(id, snapshot);
        trace!(slide = %id, ?outcome, "flushed");
        Some(outcome)
    }

    /// Drain queued notifications and disarm the observer. Returns whether
    /// any content edit was waiting to be recorded.
    fn take_pending_edits(&mut self) -> bool {
        let queued = self
            .scene
            .as_mut()
            .map(ScenePort::drain_events)
            .unwrap_or_default();
        let armed = self.observer.take().is_some_and(|f| !f.selection_only);
        armed || queued.iter().any(|e| !e.is_selection())
    }

    fn discard_queued_events(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            let dropped = scene.drain_events();
            if !dropped.is_empty() {
                trace!(count = dropped.len(), "queued notifications discarded");
            }
        }
    }

    // ── Introspection ───────────────────────────────────────────────────

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.order.len()
    }

    /// Index of the active slide.
    pub fn active_index(&self) -> usize {
        self.order
            .iter()
            .position(|&id| id == self.active)
            .unwrap_or(0)
    }

    /// Id of the active slide.
    pub fn active_slide_id(&self) -> SlideId {
        self.active
    }

    /// Slide data at `index`.
    pub fn slide(&self, index: usize) -> Option<&SlideRecord> {
        self.order.get(index).and_then(|id| self.slides.get(id))
    }

    /// History of the slide at `index`.
    pub fn history(&self, index: usize) -> Option<&HistoryStack> {
        self.order.get(index).and_then(|id| self.histories.get(id))
    }

    /// Slides in display order.
    pub fn slides(&self) -> impl Iterator<Item = &SlideRecord> + '_ {
        self.order.iter().filter_map(|id| self.slides.get(id))
    }

    /// Whether a restore is in flight.
    pub fn is_restoring(&self) -> bool {
        self.guard.is_active()
    }

    /// The editor's restore guard.
    pub fn restore_guard(&self) -> &RestoreGuard {
        &self.guard
    }

    /// Whether a debounced save is scheduled.
    pub fn has_pending_save(&self) -> bool {
        self.observer.is_armed()
    }

    /// Export slide data (histories excluded).
    ///
    /// Edits still inside the debounce window are not included; call
    /// [`save_history`](Self::save_history) first to capture them.
    pub fn document(&self) -> DeckDocument {
        DeckDocument {
            slides: self.slides().cloned().collect(),
            active: self.active_index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_dry_tests::SceneFixture;
    use deck_scene_codec::{MockObject, MockScene};

    fn editor() -> DeckEditor<MockScene> {
        DeckEditor::new(&HistoryPrefs::default(), Some(SceneFixture::new().build()))
    }

    #[test]
    fn first_slide_is_seeded_from_the_scene() {
        let ed = editor();
        assert_eq!(ed.slide_count(), 1);
        assert_eq!(ed.slide(0).unwrap().meta.kind, "blank");
        assert!(ed.history(0).unwrap().is_initialized());
        assert_eq!(ed.active_slide_id(), SlideId(1));
    }

    #[test]
    fn selection_changes_are_not_pending_edits() {
        let mut ed = editor();
        ed.scene.as_mut().unwrap().select(&[]);
        assert!(!ed.take_pending_edits());
        ed.scene
            .as_mut()
            .unwrap()
            .add_object(MockObject::rect(0.0, 0.0, 1.0, 1.0));
        assert!(ed.take_pending_edits());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut ed = editor();
        ed.add_slide(SlideMeta::default()).unwrap();
        let second = ed.active_slide_id();
        ed.delete_slide(1).unwrap();
        ed.add_slide(SlideMeta::default()).unwrap();
        assert_ne!(ed.active_slide_id(), second);
        assert_eq!(ed.active_slide_id(), SlideId(3));
    }

    #[test]
    fn out_of_range_switch_is_rejected() {
        let mut ed = editor();
        assert_eq!(
            ed.switch_slide(2),
            Err(EditorError::SlideOutOfRange { index: 2, len: 1 })
        );
        assert_eq!(ed.switch_slide(0), Ok(()));
    }
}
