//! Renderer collaborators: the sink trait plus markup and raster outputs.

pub(crate) mod raster;
pub(crate) mod sink;
pub(crate) mod svg;
