// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! [`MockScene`] builders.

use deck_scene_codec::{MockObject, MockScene};
use deck_scene_port::{BackgroundImage, ScenePort};

/// Builder for a [`MockScene`] in a known state.
///
/// Built scenes have no queued notifications: fixture setup is not an edit.
///
/// ```
/// use deck_dry_tests::SceneFixture;
///
/// let scene = SceneFixture::new()
///     .background("#ffffff")
///     .rect(0.0, 0.0, 10.0, 10.0)
///     .latency(2)
///     .build();
/// assert_eq!(scene.objects.len(), 1);
/// assert!(scene.pending_events().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct SceneFixture {
    objects: Vec<MockObject>,
    background_color: Option<String>,
    background_image: Option<BackgroundImage>,
    latency: u32,
    fail_first_load: bool,
    round_trips_image: bool,
    loads_color: Option<bool>,
}

impl SceneFixture {
    /// Empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object.
    #[must_use]
    pub fn object(mut self, object: MockObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Add a black rectangle.
    #[must_use]
    pub fn rect(self, left: f64, top: f64, width: f64, height: f64) -> Self {
        self.object(MockObject::rect(left, top, width, height))
    }

    /// Add a rectangle carrying an `id` extra.
    #[must_use]
    pub fn tagged(self, id: &str) -> Self {
        self.object(MockObject::rect(0.0, 0.0, 10.0, 10.0).with_extra("id", id))
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: &str) -> Self {
        self.background_color = Some(color.to_owned());
        self
    }

    /// Set the background image.
    #[must_use]
    pub fn background_image(mut self, src: &str, opacity: f64) -> Self {
        self.background_image = Some(BackgroundImage {
            src: src.to_owned(),
            opacity,
        });
        self
    }

    /// Number of `Pending` polls before each load completes.
    #[must_use]
    pub fn latency(mut self, polls: u32) -> Self {
        self.latency = polls;
        self
    }

    /// Serialize and load the background image natively.
    #[must_use]
    pub fn round_trips_background_image(mut self) -> Self {
        self.round_trips_image = true;
        self
    }

    /// Make the first load fail after its latency, leaving the scene as is.
    #[must_use]
    pub fn failing_first_load(mut self) -> Self {
        self.fail_first_load = true;
        self
    }

    /// Make the loader ignore the serialized background color.
    #[must_use]
    pub fn drops_background_color(mut self) -> Self {
        self.loads_color = Some(false);
        self
    }

    /// Build the scene.
    pub fn build(self) -> MockScene {
        let mut scene = MockScene::new();
        scene.load_latency = self.latency;
        scene.fail_next_load = self.fail_first_load;
        scene.round_trips_background_image = self.round_trips_image;
        if let Some(loads) = self.loads_color {
            scene.loads_background_color = loads;
        }
        scene.objects = self.objects;
        if let Some(color) = &self.background_color {
            scene.set_background_color(color);
        }
        if let Some(image) = &self.background_image {
            scene.set_background_image(image);
        }
        scene.drain_events();
        scene
    }
}
