use crate::scene::baked::BakedData;
use crate::scene::node::{Child, ElementNode};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SchemaPathElem {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaError {
    pub(crate) path: Vec<SchemaPathElem>,
    pub(crate) message: String,
}

impl SchemaError {
    /// Error on field `name` under `parent`.
    fn field(parent: &[SchemaPathElem], name: &'static str, message: impl Into<String>) -> Self {
        let mut path = parent.to_vec();
        path.push(SchemaPathElem::Field(name));
        Self {
            path,
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_empty() {
            f.write_str("$")?;
            for p in &self.path {
                match p {
                    SchemaPathElem::Field(name) => write!(f, ".{name}")?,
                    SchemaPathElem::Index(i) => write!(f, "[{i}]")?,
                }
            }
            f.write_str(": ")?;
        }
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaErrors {
    pub(crate) errors: Vec<SchemaError>,
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

/// Structural checks on baked data. The version gate runs separately, before this.
pub(crate) fn validate_baked(data: &BakedData) -> Result<(), SchemaErrors> {
    let mut errors = Vec::new();

    let mut ids = HashSet::<&str>::new();
    collect_tree_ids(
        &data.svg_tree,
        &mut vec![SchemaPathElem::Field("svgTree")],
        &mut ids,
        &mut errors,
    );

    let mut names = HashSet::<&str>::new();
    for (i, action) in data.actions.iter().enumerate() {
        let at = [SchemaPathElem::Field("actions"), SchemaPathElem::Index(i)];
        if action.name.trim().is_empty() {
            errors.push(SchemaError::field(
                &at,
                "name",
                "action name must be non-empty",
            ));
        } else if !names.insert(action.name.as_str()) {
            errors.push(SchemaError::field(
                &at,
                "name",
                format!("duplicate action name \"{}\"", action.name),
            ));
        }

        if action.attributes_map_per_frame.is_empty() {
            errors.push(SchemaError::field(
                &at,
                "attributesMapPerFrame",
                "action must have at least one frame",
            ));
        }

        // Unknown overlay ids are legal no-ops; surface them for whoever baked the data.
        for (f, overlay) in action.attributes_map_per_frame.iter().enumerate() {
            for id in overlay.keys() {
                if !ids.contains(id.as_str()) {
                    tracing::debug!(
                        action = %action.name,
                        frame = f,
                        id = %id,
                        "overlay targets an id that is not in the scene tree"
                    );
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaErrors { errors })
    }
}

fn collect_tree_ids<'a>(
    node: &'a ElementNode,
    path: &mut Vec<SchemaPathElem>,
    ids: &mut HashSet<&'a str>,
    errors: &mut Vec<SchemaError>,
) {
    if node.tag.trim().is_empty() {
        errors.push(SchemaError::field(
            path,
            "tag",
            "element tag must be non-empty",
        ));
    }

    if !node.id.is_empty() && !ids.insert(node.id.as_str()) {
        errors.push(SchemaError::field(
            path,
            "id",
            format!("duplicate element id \"{}\"", node.id),
        ));
    }

    for (i, child) in node.children.iter().enumerate() {
        if let Child::Element(e) = child {
            path.push(SchemaPathElem::Field("children"));
            path.push(SchemaPathElem::Index(i));
            collect_tree_ids(e, path, ids, errors);
            path.pop();
            path.pop();
        }
    }
}
