pub(crate) mod baked;
pub(crate) mod node;
