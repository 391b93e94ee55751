use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FrameplayError, FrameplayResult};
use crate::scene::node::{AttributeMap, ElementNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Sparse, id-addressed attribute overrides for one frame.
pub type FrameOverlay = BTreeMap<String, AttributeMap>;

/// A named animation sequence: one overlay per frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Unique action name.
    pub name: String,
    /// Per-frame overlays; index `f` is frame `f`. Never empty in validated data.
    pub attributes_map_per_frame: Vec<FrameOverlay>,
}

impl Action {
    /// Number of frames in the action.
    pub fn frame_count(&self) -> usize {
        self.attributes_map_per_frame.len()
    }

    /// Last valid frame index (`frame_count - 1`, saturating at 0).
    pub fn end_frame(&self) -> FrameIndex {
        FrameIndex(self.frame_count().saturating_sub(1) as u64)
    }

    /// Overlay for `frame`, if the frame exists.
    pub fn overlay(&self, frame: FrameIndex) -> Option<&FrameOverlay> {
        self.attributes_map_per_frame.get(frame.as_usize())
    }
}

/// Pre-baked animation data: the base scene plus every action's per-frame overlays.
///
/// This is the JSON-facing representation produced by an external baking step. It is treated as
/// read-only once a [`crate::Player`] has been built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BakedData {
    /// Data format version (`MAJOR.MINOR.PATCH`).
    pub version: String,
    /// Version of the application that baked the data. Informational only.
    #[serde(default)]
    pub app_version: String,
    /// Actions in declaration order.
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Base (unposed) scene tree shared by every frame of every action.
    pub svg_tree: ElementNode,
}

impl BakedData {
    /// Parse baked data from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FrameplayResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FrameplayError::serde(format!("parse baked data JSON: {e}")))
    }

    /// Parse baked data from a JSON string.
    pub fn from_json_str(s: &str) -> FrameplayResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| FrameplayError::serde(format!("parse baked data JSON: {e}")))
    }

    /// Parse baked data from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FrameplayResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FrameplayError::validation(format!("open baked data JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize back to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> FrameplayResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FrameplayError::serde(format!("serialize baked data JSON: {e}")))
    }
}
