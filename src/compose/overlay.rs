use crate::scene::baked::FrameOverlay;
use crate::scene::node::{Child, ElementNode};

/// Produce the posed tree for one frame.
///
/// Every element whose id has an entry in `overlay` gets that entry shallow-merged over its base
/// attributes (overlay values win per key, other base keys are kept). The same overlay applies to
/// the whole tree. `tree` is never modified; callers always pose from the base tree, not from a
/// previously posed one.
pub fn compose(overlay: &FrameOverlay, tree: &ElementNode) -> ElementNode {
    let mut attributes = tree.attributes.clone();
    if !tree.id.is_empty()
        && let Some(patch) = overlay.get(&tree.id)
    {
        for (k, v) in patch {
            attributes.insert(k.clone(), v.clone());
        }
    }

    let children = tree
        .children
        .iter()
        .map(|child| match child {
            Child::Element(e) => Child::Element(compose(overlay, e)),
            Child::Text(t) => Child::Text(t.clone()),
        })
        .collect();

    ElementNode {
        id: tree.id.clone(),
        tag: tree.tag.clone(),
        attributes,
        children,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/overlay.rs"]
mod tests;
