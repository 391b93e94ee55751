use crate::foundation::core::Canvas;
use crate::foundation::error::{FrameplayError, FrameplayResult};
use anyhow::Context as _;
use std::sync::{Arc, OnceLock};

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Convert premultiplied pixels to straight alpha in place. No-op for straight frames.
    pub fn unpremultiply(&mut self) {
        if !self.premultiplied {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        self.premultiplied = false;
    }
}

fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    static DB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Arc::new(db)
    })
    .clone()
}

/// Parse SVG markup and rasterize it into a `canvas`-sized premultiplied RGBA8 frame.
///
/// The document is scaled non-uniformly to fill the canvas.
pub fn rasterize_svg(markup: &str, canvas: Canvas) -> FrameplayResult<FrameRGBA> {
    let opts = usvg::Options {
        fontdb: system_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(markup.as_bytes(), &opts).context("parse posed svg tree")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| FrameplayError::render("failed to allocate svg pixmap"))?;

    let size = tree.size();
    let sx = (canvas.width as f32) / size.width();
    let sy = (canvas.height as f32) / size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(&tree, xform, &mut pixmap.as_mut());
    Ok(FrameRGBA {
        width: canvas.width,
        height: canvas.height,
        data: pixmap.data().to_vec(),
        premultiplied: true,
    })
}
