// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Slide records and the exported document shape.
//!
//! Slide data and slide histories live in separate tables keyed by
//! [`SlideId`]; only the data side is ever exported.

use std::fmt;

use deck_scene_codec::Snapshot;
use serde::{Deserialize, Serialize};

/// Stable identity of a slide within one editor.
///
/// Ids are never reused, so a stale id held across a delete resolves to
/// nothing instead of to a neighbour.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideId(pub u64);

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide#{}", self.0)
    }
}

/// Template metadata carried with a slide. Opaque to the history engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideMeta {
    /// Slide kind (`"blank"`, `"title"`, `"chart"`...).
    pub kind: String,
    /// Template the slide was created from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl SlideMeta {
    /// Metadata for a slide of the given kind without a template.
    pub fn of_kind(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            template: None,
        }
    }
}

/// Data side of a slide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Identity.
    pub id: SlideId,
    /// Template metadata.
    #[serde(default)]
    pub meta: SlideMeta,
    /// Last known state. Authoritative for the slide whenever it is not the
    /// one on screen; `None` until the slide has been shown or captured.
    #[serde(default)]
    pub snapshot: Option<Snapshot>,
}

/// Exportable deck: slide data in order plus the active position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDocument {
    /// Slides in display order.
    pub slides: Vec<SlideRecord>,
    /// Index of the active slide.
    #[serde(default)]
    pub active: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_serializes_without_history() {
        let doc = DeckDocument {
            slides: vec![SlideRecord {
                id: SlideId(7),
                meta: SlideMeta::of_kind("title"),
                snapshot: Some(Snapshot::from_raw(r#"{"objects":[]}"#)),
            }],
            active: 0,
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["slides"][0]["id"], 7);
        assert_eq!(json["slides"][0]["snapshot"], r#"{"objects":[]}"#);
        assert!(json["slides"][0]["meta"].get("template").is_none());
        let back: DeckDocument = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn display_is_prefixed() {
        assert_eq!(SlideId(3).to_string(), "slide#3");
    }
}
