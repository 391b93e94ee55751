//! Load-time checks on baked data: the version gate and structural validation.

pub(crate) mod validate;
pub(crate) mod version;
