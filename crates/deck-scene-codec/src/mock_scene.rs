// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mock scene for headless testing of the history engine.
//!
//! MockScene keeps a flat object list and a background layer in memory and
//! speaks the JSON layout expected by [`ScenePort`]. Its serializer drops
//! the background image by default, the same asymmetry real canvas libraries
//! show when the image is set outside the scene graph.

use std::collections::BTreeMap;

use deck_scene_port::{
    BackgroundImage, LoadStatus, SceneError, SceneEvent, ScenePort, OBJECTS_KEY,
};
use serde_json::{json, Map, Value};

/// Version tag written into every serialized mock scene.
pub const MOCK_VERSION: &str = "mock-1";

const BASE_KEYS: [&str; 6] = ["type", "left", "top", "width", "height", "fill"];

/// One drawable object in a [`MockScene`].
#[derive(Clone, Debug, PartialEq)]
pub struct MockObject {
    /// Object type (`rect`, `ellipse`, `path`, `text`...).
    pub kind: String,
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Fill color.
    pub fill: String,
    /// Extra properties, serialized only when requested by name.
    pub extras: BTreeMap<String, Value>,
}

impl MockObject {
    /// Rectangle with a black fill.
    pub fn rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            kind: "rect".into(),
            left,
            top,
            width,
            height,
            fill: "#000000".into(),
            extras: BTreeMap::new(),
        }
    }

    /// Replace the fill color.
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Replace the object type.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Attach an extra property.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    fn to_json(&self, include_fields: &[String]) -> Value {
        let mut obj = Map::new();
        obj.insert("type".into(), self.kind.clone().into());
        obj.insert("left".into(), self.left.into());
        obj.insert("top".into(), self.top.into());
        obj.insert("width".into(), self.width.into());
        obj.insert("height".into(), self.height.into());
        obj.insert("fill".into(), self.fill.clone().into());
        for (key, value) in &self.extras {
            if include_fields.iter().any(|f| f == key) {
                obj.insert(key.clone(), value.clone());
            }
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self, SceneError> {
        let obj = value
            .as_object()
            .ok_or_else(|| SceneError::Malformed("object entry is not a map".into()))?;
        let num = |key: &str| {
            obj.get(key)
                .and_then(Value::as_f64)
                .ok_or_else(|| SceneError::Malformed(format!("object is missing `{key}`")))
        };
        let text = |key: &str| {
            obj.get(key)
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or_else(|| SceneError::Malformed(format!("object is missing `{key}`")))
        };
        let extras = obj
            .iter()
            .filter(|(k, _)| !BASE_KEYS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(Self {
            kind: text("type")?,
            left: num("left")?,
            top: num("top")?,
            width: num("width")?,
            height: num("height")?,
            fill: text("fill")?,
            extras,
        })
    }
}

#[derive(Debug)]
struct StagedLoad {
    objects: Vec<MockObject>,
    background_color: Option<String>,
    background_image: Option<BackgroundImage>,
    remaining_polls: u32,
}

/// Headless scene.
///
/// Loads are staged: `begin_load` validates and parks the new state,
/// `poll_load` reports `Pending` for `load_latency` polls and then swaps it
/// in, emitting one `ObjectAdded` per loaded object the way canvas libraries
/// do while rebuilding from JSON.
#[derive(Debug)]
pub struct MockScene {
    /// Current objects, bottom to top.
    pub objects: Vec<MockObject>,
    /// Indices of selected objects.
    pub selection: Vec<usize>,
    /// Polls that report `Pending` before a load completes.
    pub load_latency: u32,
    /// Whether `serialize` writes the background image and the loader reads it.
    pub round_trips_background_image: bool,
    /// Whether the loader applies the serialized background color.
    pub loads_background_color: bool,
    /// Make the next load report `Failed` once its latency has elapsed,
    /// leaving the scene untouched. Cleared by that load.
    pub fail_next_load: bool,
    /// Completed loads.
    pub load_count: u32,
    /// Render requests.
    pub render_count: u32,
    background_color: Option<String>,
    background_image: Option<BackgroundImage>,
    events: Vec<SceneEvent>,
    staged: Option<StagedLoad>,
}

impl Default for MockScene {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            selection: Vec::new(),
            load_latency: 0,
            round_trips_background_image: false,
            loads_background_color: true,
            fail_next_load: false,
            load_count: 0,
            render_count: 0,
            background_color: None,
            background_image: None,
            events: Vec::new(),
            staged: None,
        }
    }
}

impl MockScene {
    /// Create an empty scene with the default asymmetric background behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object on top of the stack.
    pub fn add_object(&mut self, object: MockObject) {
        self.objects.push(object);
        self.events.push(SceneEvent::ObjectAdded);
    }

    /// Edit an object in place. Returns `false` if `index` is out of range.
    pub fn modify_object(&mut self, index: usize, edit: impl FnOnce(&mut MockObject)) -> bool {
        let Some(object) = self.objects.get_mut(index) else {
            return false;
        };
        edit(object);
        self.events.push(SceneEvent::ObjectModified);
        true
    }

    /// Remove an object.
    pub fn remove_object(&mut self, index: usize) -> Option<MockObject> {
        if index >= self.objects.len() {
            return None;
        }
        let removed = self.objects.remove(index);
        self.selection.retain(|&i| i != index);
        for i in &mut self.selection {
            if *i > index {
                *i -= 1;
            }
        }
        self.events.push(SceneEvent::ObjectRemoved);
        Some(removed)
    }

    /// Commit a freehand path spanning the given bounding box.
    pub fn commit_path(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.objects
            .push(MockObject::rect(left, top, width, height).with_kind("path"));
        self.events.push(SceneEvent::PathCreated);
    }

    /// Replace the selection.
    pub fn select(&mut self, indices: &[usize]) {
        let event = if self.selection.is_empty() {
            SceneEvent::SelectionCreated
        } else {
            SceneEvent::SelectionUpdated
        };
        self.selection = indices
            .iter()
            .copied()
            .filter(|&i| i < self.objects.len())
            .collect();
        self.events.push(event);
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.events.push(SceneEvent::SelectionCleared);
    }

    /// Returns `true` while a staged load has not been applied.
    pub fn is_loading(&self) -> bool {
        self.staged.is_some()
    }

    /// Notifications queued and not yet drained.
    pub fn pending_events(&self) -> &[SceneEvent] {
        &self.events
    }

    fn parse_state(&self, raw: &str) -> Result<StagedLoad, SceneError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| SceneError::Malformed(e.to_string()))?;
        let root = value
            .as_object()
            .ok_or_else(|| SceneError::Malformed("scene state is not a map".into()))?;
        let objects = root
            .get(OBJECTS_KEY)
            .and_then(Value::as_array)
            .ok_or_else(|| SceneError::Malformed("scene state has no objects array".into()))?
            .iter()
            .map(MockObject::from_json)
            .collect::<Result<Vec<_>, _>>()?;
        let background_color = if self.loads_background_color {
            root.get("background")
                .and_then(Value::as_str)
                .map(str::to_owned)
        } else {
            None
        };
        let background_image = if self.round_trips_background_image {
            root.get("backgroundImage").and_then(|img| {
                let src = img.get("src")?.as_str()?;
                let opacity = img.get("opacity").and_then(Value::as_f64).unwrap_or(1.0);
                Some(BackgroundImage {
                    src: src.to_owned(),
                    opacity,
                })
            })
        } else {
            None
        };
        Ok(StagedLoad {
            objects,
            background_color,
            background_image,
            remaining_polls: self.load_latency,
        })
    }
}

impl ScenePort for MockScene {
    fn serialize(&self, include_fields: &[String]) -> Result<String, SceneError> {
        let mut root = Map::new();
        root.insert("version".into(), MOCK_VERSION.into());
        root.insert(
            OBJECTS_KEY.into(),
            self.objects
                .iter()
                .map(|o| o.to_json(include_fields))
                .collect(),
        );
        if let Some(color) = &self.background_color {
            root.insert("background".into(), color.clone().into());
        }
        if self.round_trips_background_image {
            if let Some(img) = &self.background_image {
                root.insert(
                    "backgroundImage".into(),
                    json!({ "src": img.src, "opacity": img.opacity }),
                );
            }
        }
        serde_json::to_string(&Value::Object(root)).map_err(|e| SceneError::Backend(e.to_string()))
    }

    fn begin_load(&mut self, raw: &str) -> Result<(), SceneError> {
        if self.staged.is_some() {
            return Err(SceneError::LoadInProgress);
        }
        self.staged = Some(self.parse_state(raw)?);
        Ok(())
    }

    fn poll_load(&mut self) -> LoadStatus {
        let Some(staged) = self.staged.as_mut() else {
            return LoadStatus::Idle;
        };
        if staged.remaining_polls > 0 {
            staged.remaining_polls -= 1;
            return LoadStatus::Pending;
        }
        let Some(staged) = self.staged.take() else {
            return LoadStatus::Idle;
        };
        if std::mem::take(&mut self.fail_next_load) {
            return LoadStatus::Failed(SceneError::Backend("simulated load failure".into()));
        }
        self.objects = staged.objects;
        self.selection.clear();
        self.background_color = staged.background_color;
        self.background_image = staged.background_image;
        self.events
            .extend(std::iter::repeat_n(SceneEvent::ObjectAdded, self.objects.len()));
        self.load_count += 1;
        self.render_count += 1;
        LoadStatus::Complete
    }

    fn background_color(&self) -> Option<String> {
        self.background_color.clone()
    }

    fn set_background_color(&mut self, color: &str) {
        self.background_color = Some(color.to_owned());
    }

    fn background_image(&self) -> Option<BackgroundImage> {
        self.background_image.clone()
    }

    fn set_background_image(&mut self, image: &BackgroundImage) {
        self.background_image = Some(image.clone());
    }

    fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    fn request_render(&mut self) {
        self.render_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_filters_extras_by_include_list() {
        let mut scene = MockScene::new();
        scene.add_object(
            MockObject::rect(0.0, 0.0, 1.0, 1.0)
                .with_extra("id", "a")
                .with_extra("secret", true),
        );
        let raw = scene.serialize(&["id".to_owned()]).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["objects"][0]["id"], "a");
        assert!(value["objects"][0].get("secret").is_none());
        assert_eq!(value["version"], MOCK_VERSION);
    }

    #[test]
    fn serializer_drops_background_image_by_default() {
        let mut scene = MockScene::new();
        scene.set_background_image(&BackgroundImage::new("x.png"));
        let raw = scene.serialize(&[]).unwrap();
        assert!(!raw.contains("x.png"));

        scene.round_trips_background_image = true;
        let raw = scene.serialize(&[]).unwrap();
        assert!(raw.contains("x.png"));
    }

    #[test]
    fn load_is_staged_until_polled() {
        let mut source = MockScene::new();
        source.add_object(MockObject::rect(5.0, 5.0, 2.0, 2.0));
        let raw = source.serialize(&[]).unwrap();

        let mut scene = MockScene::new();
        scene.load_latency = 1;
        scene.begin_load(&raw).unwrap();
        assert!(scene.objects.is_empty());
        assert_eq!(scene.begin_load(&raw), Err(SceneError::LoadInProgress));
        assert_eq!(scene.poll_load(), LoadStatus::Pending);
        assert_eq!(scene.poll_load(), LoadStatus::Complete);
        assert_eq!(scene.objects.len(), 1);
        assert_eq!(scene.poll_load(), LoadStatus::Idle);
        assert_eq!(scene.drain_events(), vec![SceneEvent::ObjectAdded]);
    }

    #[test]
    fn failing_load_leaves_the_scene_alone() {
        let mut scene = MockScene::new();
        scene.add_object(MockObject::rect(1.0, 1.0, 1.0, 1.0));
        scene.drain_events();
        scene.fail_next_load = true;
        scene.load_latency = 1;
        scene.begin_load(r#"{"objects":[]}"#).unwrap();
        assert_eq!(scene.poll_load(), LoadStatus::Pending);
        assert!(matches!(scene.poll_load(), LoadStatus::Failed(SceneError::Backend(_))));
        assert_eq!(scene.objects.len(), 1);
        assert!(!scene.fail_next_load);
        assert!(!scene.is_loading());
        assert!(scene.drain_events().is_empty());
    }

    #[test]
    fn malformed_state_leaves_scene_untouched() {
        let mut scene = MockScene::new();
        scene.add_object(MockObject::rect(0.0, 0.0, 1.0, 1.0));
        let err = scene.begin_load(r#"{"version":"mock-1"}"#).unwrap_err();
        assert!(matches!(err, SceneError::Malformed(_)));
        assert!(!scene.is_loading());
        assert_eq!(scene.objects.len(), 1);
    }

    #[test]
    fn edits_queue_events() {
        let mut scene = MockScene::new();
        scene.add_object(MockObject::rect(0.0, 0.0, 1.0, 1.0));
        scene.select(&[0]);
        assert!(scene.modify_object(0, |o| o.left = 3.0));
        scene.clear_selection();
        assert!(scene.remove_object(0).is_some());
        scene.commit_path(0.0, 0.0, 4.0, 4.0);
        assert_eq!(
            scene.drain_events(),
            vec![
                SceneEvent::ObjectAdded,
                SceneEvent::SelectionCreated,
                SceneEvent::ObjectModified,
                SceneEvent::SelectionCleared,
                SceneEvent::ObjectRemoved,
                SceneEvent::PathCreated,
            ]
        );
        assert!(scene.pending_events().is_empty());
    }
}
