use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FrameplayError, FrameplayResult};
use crate::scene::baked::{Action, FrameOverlay};
use std::collections::HashMap;
use std::sync::LazyLock;

static EMPTY_OVERLAY: LazyLock<FrameOverlay> = LazyLock::new(FrameOverlay::new);

/// Name and last frame of a registered action, as reported to hosts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionInfo {
    /// Action name.
    pub name: String,
    /// Last valid frame index.
    pub end_frame: FrameIndex,
}

/// Named actions indexed for lookup, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    actions: Vec<Action>,
    by_name: HashMap<String, usize>,
}

impl ActionRegistry {
    /// Index `actions`. On duplicate names the first declaration wins.
    pub fn new(actions: Vec<Action>) -> Self {
        let mut by_name = HashMap::with_capacity(actions.len());
        for (i, a) in actions.iter().enumerate() {
            by_name.entry(a.name.clone()).or_insert(i);
        }
        Self { actions, by_name }
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// `true` when no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Every action with its end frame, in declaration order.
    pub fn list(&self) -> Vec<ActionInfo> {
        self.actions
            .iter()
            .map(|a| ActionInfo {
                name: a.name.clone(),
                end_frame: a.end_frame(),
            })
            .collect()
    }

    /// Look up an action by name.
    pub fn resolve(&self, name: &str) -> FrameplayResult<&Action> {
        self.by_name
            .get(name)
            .map(|&i| &self.actions[i])
            .ok_or_else(|| FrameplayError::unknown_action(name))
    }

    /// `true` when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Name of the action active at session start.
    ///
    /// This is the first declared action, or the empty sentinel `""` when there are none.
    pub fn default_action(&self) -> &str {
        self.actions.first().map(|a| a.name.as_str()).unwrap_or("")
    }

    /// End frame of `name`. Unknown names (including the empty sentinel) report frame 0.
    pub fn end_frame(&self, name: &str) -> FrameIndex {
        self.resolve(name)
            .map(Action::end_frame)
            .unwrap_or(FrameIndex::ZERO)
    }

    /// Overlay for `frame` of `name`.
    ///
    /// Unknown names and out-of-range frames yield the empty overlay, so posing falls back to
    /// the base tree.
    pub fn overlay(&self, name: &str, frame: FrameIndex) -> &FrameOverlay {
        self.resolve(name)
            .ok()
            .and_then(|a| a.overlay(frame))
            .unwrap_or(&*EMPTY_OVERLAY)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/registry.rs"]
mod tests;
