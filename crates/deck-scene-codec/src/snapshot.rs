// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Snapshot value type and the background side-channel.

use std::fmt;

use deck_scene_port::{BackgroundImage, ScenePort};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level key under which the background side-channel is embedded.
pub const SIDE_CHANNEL_KEY: &str = "additionalBackgroundInfo";

/// Opaque serialized state of one slide.
///
/// Two snapshots are equal iff their strings are equal; that comparison is
/// how the history layer detects edits that changed nothing.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(String);

impl Snapshot {
    /// Wrap an already-encoded snapshot string.
    ///
    /// The string is not validated; a malformed value is reported when it is
    /// restored.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the encoded string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encoded length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the empty string, which is never a valid snapshot.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Snapshots can be large; logs only need a handle on them.
        const PREVIEW: usize = 48;
        let end = self
            .0
            .char_indices()
            .nth(PREVIEW)
            .map_or(self.0.len(), |(i, _)| i);
        if end < self.0.len() {
            write!(f, "Snapshot({:?}… {} bytes)", &self.0[..end], self.0.len())
        } else {
            write!(f, "Snapshot({:?})", self.0)
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Snapshot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Background state copied next to the primary payload.
///
/// Primitives may serialize a background they cannot load back (or load one
/// they never serialized). The side-channel records what the scene showed at
/// capture time so restore can re-apply whatever the load left unset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackgroundInfo {
    /// Background color at capture time.
    pub color: Option<String>,
    /// Background image at capture time.
    pub image: Option<BackgroundImage>,
}

impl BackgroundInfo {
    /// Read the background layer of a live scene.
    pub fn read<S: ScenePort + ?Sized>(scene: &S) -> Self {
        Self {
            color: scene.background_color(),
            image: scene.background_image(),
        }
    }

    /// Returns `true` when neither a color nor an image is recorded.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.image.is_none()
    }

    pub(crate) fn to_value(&self) -> Value {
        let wire = BackgroundInfoWire {
            background_color: self.color.clone(),
            background_image: self.image.as_ref().map(|img| ImageWire {
                src: img.src.clone(),
                opacity: Some(img.opacity).filter(|o| o.is_finite()),
            }),
        };
        // Plain strings and finite floats; serializing into a Value cannot fail.
        serde_json::to_value(wire).unwrap_or(Value::Null)
    }

    pub(crate) fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Ok(Self::default());
        }
        let wire: BackgroundInfoWire = serde_json::from_value(value)?;
        Ok(Self {
            color: wire.background_color,
            image: wire.background_image.map(|img| BackgroundImage {
                src: img.src,
                opacity: img.opacity.filter(|o| o.is_finite()).unwrap_or(1.0),
            }),
        })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BackgroundInfoWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    background_image: Option<ImageWire>,
}

/// Non-finite or missing opacity reads back as fully opaque.
#[derive(Serialize, Deserialize)]
struct ImageWire {
    src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    opacity: Option<f64>,
}

/// Embed `background` into `payload` and encode the result.
pub(crate) fn encode(mut payload: Map<String, Value>, background: &BackgroundInfo) -> Snapshot {
    payload.insert(SIDE_CHANNEL_KEY.to_owned(), background.to_value());
    Snapshot(Value::Object(payload).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_channel_uses_camel_case_keys() {
        let info = BackgroundInfo {
            color: Some("#112233".into()),
            image: Some(BackgroundImage::new("bg.png")),
        };
        let value = info.to_value();
        assert_eq!(value["backgroundColor"], "#112233");
        assert_eq!(value["backgroundImage"]["src"], "bg.png");
        assert_eq!(BackgroundInfo::from_value(value).unwrap(), info);
    }

    #[test]
    fn empty_side_channel_omits_fields() {
        let value = BackgroundInfo::default().to_value();
        assert_eq!(value, serde_json::json!({}));
        assert!(BackgroundInfo::from_value(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn missing_opacity_defaults_to_opaque() {
        let info =
            BackgroundInfo::from_value(serde_json::json!({"backgroundImage": {"src": "a.jpg"}}))
                .unwrap();
        assert_eq!(info.image.unwrap().opacity, 1.0);
    }

    #[test]
    fn non_finite_opacity_survives_as_opaque() {
        let info = BackgroundInfo {
            color: None,
            image: Some(BackgroundImage {
                src: "nan.png".into(),
                opacity: f64::NAN,
            }),
        };
        let value = info.to_value();
        assert!(value["backgroundImage"].get("opacity").is_none());
        let back = BackgroundInfo::from_value(value).unwrap().image.unwrap();
        assert_eq!(back.src, "nan.png");
        assert_eq!(back.opacity, 1.0);

        let null = serde_json::json!({"backgroundImage": {"src": "n.png", "opacity": null}});
        assert_eq!(BackgroundInfo::from_value(null).unwrap().image.unwrap().opacity, 1.0);
    }

    #[test]
    fn debug_output_is_truncated() {
        let snap = Snapshot::from_raw("x".repeat(500));
        let dbg = format!("{snap:?}");
        assert!(dbg.contains("500 bytes"));
        assert!(dbg.len() < 100);
    }

    #[test]
    fn snapshots_compare_by_value() {
        assert_eq!(Snapshot::from_raw("{}"), Snapshot::from_raw(String::from("{}")));
        assert_ne!(Snapshot::from_raw("{}"), Snapshot::from_raw("{ }"));
    }
}
