use crate::foundation::core::FrameIndex;
use crate::render::sink::{PosedFrame, Renderer};
use crate::scene::node::{Child, ElementNode};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serialize a tree to SVG/XML markup.
///
/// Element ids are written as the `id` attribute (an explicit `id` attribute wins). A root `svg`
/// element without `xmlns` gets the SVG namespace so the output is a standalone document.
pub fn to_svg_markup(root: &ElementNode) -> String {
    let mut out = String::with_capacity(256);
    write_element(root, true, &mut out);
    out
}

fn write_element(node: &ElementNode, is_root: bool, out: &mut String) {
    out.push('<');
    out.push_str(&node.tag);

    if is_root && node.tag == "svg" && !node.attributes.contains_key("xmlns") {
        push_attr(out, "xmlns", SVG_NS);
    }
    if !node.id.is_empty() && !node.attributes.contains_key("id") {
        push_attr(out, "id", &node.id);
    }
    for (k, v) in &node.attributes {
        push_attr(out, k, v);
    }

    if node.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in &node.children {
        match child {
            Child::Element(e) => write_element(e, false, out),
            Child::Text(t) => push_escaped(out, t, false),
        }
    }
    out.push_str("</");
    out.push_str(&node.tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value, true);
    out.push('"');
}

fn push_escaped(out: &mut String, s: &str, in_attr: bool) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// One serialized frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgFrame {
    /// Action the frame belongs to.
    pub action: String,
    /// Frame index within the action.
    pub frame: FrameIndex,
    /// Standalone SVG document.
    pub markup: String,
}

/// Renderer that turns each posed frame into SVG markup.
///
/// By default only the latest frame is kept; [`SvgRenderer::recording`] keeps every frame.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    frames: Vec<SvgFrame>,
    keep_history: bool,
}

impl SvgRenderer {
    /// Keep only the latest frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep every rendered frame.
    pub fn recording() -> Self {
        Self {
            frames: Vec::new(),
            keep_history: true,
        }
    }

    /// Latest frame, if anything was rendered.
    pub fn latest(&self) -> Option<&SvgFrame> {
        self.frames.last()
    }

    /// Retained frames, oldest first.
    pub fn frames(&self) -> &[SvgFrame] {
        &self.frames
    }

    /// Take the retained frames, leaving the renderer empty.
    pub fn take_frames(&mut self) -> Vec<SvgFrame> {
        std::mem::take(&mut self.frames)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &PosedFrame) {
        if !self.keep_history {
            self.frames.clear();
        }
        self.frames.push(SvgFrame {
            action: frame.action.clone(),
            frame: frame.frame,
            markup: to_svg_markup(&frame.tree),
        });
    }
}
